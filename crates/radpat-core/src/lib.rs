#![deny(missing_docs)]
#![doc = "Core value types and the error surface shared by the radpat crates. \
All tensors and vectors use the North-East-Down frame; angles are in degrees."]

pub mod errors;
pub mod tensor;
mod types;
pub mod validate;

pub use errors::{ErrorInfo, RadError};
pub use tensor::{DirectionFrame, MomentTensor, PrincipalAxes, SYMMETRY_TOLERANCE};
pub use types::{
    lame_ratio, FaultGeometry, RadiationCoefficients, RayGeometry, DEFAULT_POISSONS_RATIO,
};

/// Re-exported so downstream crates agree on one linear algebra version.
pub use nalgebra::{Matrix3, Vector3};
