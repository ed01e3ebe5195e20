use radpat_core::{
    DirectionFrame, FaultGeometry, MomentTensor, RadError, RadiationCoefficients, RayGeometry,
};
use radpat_source::build_moment_tensor;

use crate::rays::{calc_unit_vectors, direction_frame};

/// Contracts a moment tensor with precomputed ray directions:
/// `P = e_r.M.e_r`, `SH = e_phi.M.e_r`, `SV = e_theta.M.e_r`.
pub fn radiation_from_frame(
    tensor: &MomentTensor,
    frame: &DirectionFrame,
) -> RadiationCoefficients {
    let traction = tensor.matrix() * frame.e_r;
    RadiationCoefficients {
        p: frame.e_r.dot(&traction),
        sh: frame.e_phi.dot(&traction),
        sv: frame.e_theta.dot(&traction),
    }
}

/// Radiation coefficients of `tensor` for the ray leaving at `takeoff_angle`
/// (degrees from straight down) and `azimuth` (degrees east of north).
pub fn calc_radiation_pattern(
    tensor: &MomentTensor,
    takeoff_angle: f64,
    azimuth: f64,
) -> Result<RadiationCoefficients, RadError> {
    let frame = calc_unit_vectors(takeoff_angle, azimuth)?;
    Ok(radiation_from_frame(tensor, &frame))
}

/// [`calc_radiation_pattern`] for a [`RayGeometry`].
pub fn radiation_for_ray(
    tensor: &MomentTensor,
    ray: &RayGeometry,
) -> Result<RadiationCoefficients, RadError> {
    let frame = direction_frame(ray)?;
    Ok(radiation_from_frame(tensor, &frame))
}

/// Builds the geographic moment tensor of `fault` and evaluates it along
/// `ray`. Both inputs are validated before any arithmetic.
pub fn calc_radiation_pattern_for_fault(
    fault: &FaultGeometry,
    ray: &RayGeometry,
) -> Result<RadiationCoefficients, RadError> {
    ray.validate()?;
    let tensor = build_moment_tensor(fault)?;
    radiation_for_ray(&tensor, ray)
}
