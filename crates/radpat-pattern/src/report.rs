use radpat_core::{MomentTensor, RadError, RayGeometry};
use serde::{Deserialize, Serialize};

use crate::grid::{RadiationSample, RayGrid};
use crate::hash::stable_hash_string;

/// Semantic version describing the schema of serialized reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Incremented for breaking changes.
    pub major: u32,
    /// Incremented for additive changes.
    pub minor: u32,
    /// Incremented for fixes.
    pub patch: u32,
}

/// Schema emitted by this crate.
pub const SCHEMA_VERSION: SchemaVersion = SchemaVersion {
    major: 1,
    minor: 0,
    patch: 0,
};

/// Largest absolute coefficient of one wave type and the ray it occurs on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PeakAmplitude {
    /// Signed coefficient at the peak.
    pub value: f64,
    /// Ray on which the peak occurs; the first such ray in grid order.
    pub ray: RayGeometry,
}

impl PeakAmplitude {
    fn offer(&mut self, value: f64, ray: RayGeometry) {
        if value.abs() > self.value.abs() {
            self.value = value;
            self.ray = ray;
        }
    }
}

/// Peak amplitudes over a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SweepSummary {
    /// Number of rays evaluated.
    pub sample_count: usize,
    /// P-wave peak.
    pub p: PeakAmplitude,
    /// SH-wave peak.
    pub sh: PeakAmplitude,
    /// SV-wave peak.
    pub sv: PeakAmplitude,
}

impl SweepSummary {
    /// Scans samples in order for the peak of each wave type.
    pub fn from_samples(samples: &[RadiationSample]) -> Self {
        let mut summary = SweepSummary {
            sample_count: samples.len(),
            ..SweepSummary::default()
        };
        if let Some(first) = samples.first() {
            summary.p.ray = first.ray;
            summary.sh.ray = first.ray;
            summary.sv.ray = first.ray;
        }
        for sample in samples {
            summary.p.offer(sample.coefficients.p, sample.ray);
            summary.sh.offer(sample.coefficients.sh, sample.ray);
            summary.sv.offer(sample.coefficients.sv, sample.ray);
        }
        summary
    }
}

/// Result of evaluating one moment tensor over a ray grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    /// Report schema.
    pub schema_version: SchemaVersion,
    /// SHA-256 of the canonical JSON of `tensor` and `grid`.
    pub input_hash: String,
    /// Evaluated tensor, North-East-Down.
    pub tensor: MomentTensor,
    /// Grid the rays were drawn from.
    pub grid: RayGrid,
    /// Peak amplitudes.
    pub summary: SweepSummary,
    /// Per-ray coefficients in grid order.
    pub samples: Vec<RadiationSample>,
}

impl SweepReport {
    /// Assembles a report and its provenance hash.
    pub fn new(
        tensor: MomentTensor,
        grid: RayGrid,
        samples: Vec<RadiationSample>,
    ) -> Result<Self, RadError> {
        let input_hash = stable_hash_string(&(&tensor, &grid))?;
        Ok(Self {
            schema_version: SCHEMA_VERSION,
            input_hash,
            tensor,
            grid,
            summary: SweepSummary::from_samples(&samples),
            samples,
        })
    }
}
