#![deny(missing_docs)]
#![doc = "Moment tensor construction from fault strike, dip, rake and tensile opening. \
Geographic tensors use North-East-Down axes; fault-frame tensors use \
strike, up-dip and normal axes."]

/// Fault-aligned unit vectors and the fault-to-geographic rotation.
pub mod basis;
/// Geographic and fault-frame moment tensor builders.
pub mod builder;
/// Elementary shear, opening and explosion mechanisms.
pub mod mechanism;

pub use basis::FaultBasis;
pub use builder::{
    build_moment_tensor, build_moment_tensor_in, fault_projected_moment_tensor, CoordinateFrame,
};
pub use mechanism::{fault_frame_component, SourceKind};
