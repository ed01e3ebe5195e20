use log::{debug, trace};
use radpat_core::{FaultGeometry, Matrix3, MomentTensor, RadError};
use serde::{Deserialize, Serialize};

use crate::basis::FaultBasis;
use crate::mechanism::{opening_matrix, shear_matrix};

/// Frame in which a constructed moment tensor is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CoordinateFrame {
    /// North-East-Down.
    #[default]
    Geographic,
    /// Fault-local: strike, up-dip, normal.
    Fault,
}

/// Shear and tensile weights, exact at both ends of the opening range.
fn blend_weights(opening_angle: f64) -> (f64, f64) {
    if opening_angle == 0.0 {
        (1.0, 0.0)
    } else if opening_angle == 90.0 {
        (0.0, 1.0)
    } else {
        let (sin_open, cos_open) = opening_angle.to_radians().sin_cos();
        (cos_open, sin_open)
    }
}

fn fault_frame_matrix(fault: &FaultGeometry) -> Matrix3<f64> {
    let (shear_weight, opening_weight) = blend_weights(fault.opening_angle);
    let mut m = Matrix3::zeros();
    if shear_weight != 0.0 {
        m += shear_matrix(fault.rake) * shear_weight;
    }
    if opening_weight != 0.0 {
        m += opening_matrix(fault.lame_ratio()) * opening_weight;
    }
    m
}

/// Moment tensor of a fault in the fault-local frame: axis 1 along strike,
/// axis 2 up-dip within the plane, axis 3 along the normal.
///
/// Strike and dip are validated but do not enter the result.
pub fn fault_projected_moment_tensor(fault: &FaultGeometry) -> Result<MomentTensor, RadError> {
    fault.validate()?;
    trace!("fault-frame tensor for {fault:?}");
    MomentTensor::symmetrized(fault_frame_matrix(fault))
}

/// Moment tensor of a fault in North-East-Down coordinates.
///
/// Pure shear (opening 0) yields a traceless unit double couple; opening 90
/// yields the tensile crack `(lambda/mu) I + 2 n(x)n`; intermediate angles
/// blend the two by cosine and sine of the opening angle.
pub fn build_moment_tensor(fault: &FaultGeometry) -> Result<MomentTensor, RadError> {
    let basis = FaultBasis::from_geometry(fault)?;
    let local = fault_projected_moment_tensor(fault)?;
    let tensor = local.rotated(&basis.rotation())?;
    debug!(
        "moment tensor strike={} dip={} rake={} opening={}: trace={:.6} m0={:.6}",
        fault.strike,
        fault.dip,
        fault.rake,
        fault.opening_angle,
        tensor.trace(),
        tensor.scalar_moment()
    );
    Ok(tensor)
}

/// Builds a fault's moment tensor in the requested frame.
pub fn build_moment_tensor_in(
    fault: &FaultGeometry,
    frame: CoordinateFrame,
) -> Result<MomentTensor, RadError> {
    match frame {
        CoordinateFrame::Geographic => build_moment_tensor(fault),
        CoordinateFrame::Fault => fault_projected_moment_tensor(fault),
    }
}
