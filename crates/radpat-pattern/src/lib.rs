#![deny(missing_docs)]
#![doc = "Far-field P, SH and SV radiation coefficients of point sources. \
Directions follow the North-East-Down frame of radpat-core: takeoff angles \
are measured from straight down and azimuths clockwise from north, in degrees."]

/// YAML/JSON sweep configuration.
pub mod config;
/// Radiation coefficient evaluation.
pub mod evaluate;
/// Ray grids and parallel sweeps.
pub mod grid;
/// Stable content hashes for provenance.
pub mod hash;
/// Ray direction frames.
pub mod rays;
/// Sweep report assembly.
pub mod report;
/// Canonical JSON and YAML helpers.
pub mod serde;

pub use crate::config::PatternConfig;
pub use crate::evaluate::{
    calc_radiation_pattern, calc_radiation_pattern_for_fault, radiation_for_ray,
    radiation_from_frame,
};
pub use crate::grid::{sweep, AngleRange, RadiationSample, RayGrid, SweepOpts, MAX_AXIS_SAMPLES};
pub use crate::hash::stable_hash_string;
pub use crate::rays::{calc_unit_vectors, direction_frame, ray_from_vector};
pub use crate::report::{PeakAmplitude, SchemaVersion, SweepReport, SweepSummary, SCHEMA_VERSION};
pub use crate::serde::{report_from_json, report_to_json, to_canonical_json_bytes};
