use radpat_core::validate::ensure_finite;
use radpat_core::{DirectionFrame, ErrorInfo, RadError, RayGeometry, Vector3};

/// Unit vectors of the spherical frame attached to a ray, in North-East-Down.
///
/// * `e_r = (sin t cos a, sin t sin a, cos t)` points along the ray.
/// * `e_phi = (-sin a, cos a, 0)` is horizontal, to the right facing along
///   the ray.
/// * `e_theta = e_phi x e_r` lies in the vertical plane of the ray with an
///   upward component.
///
/// `takeoff_angle` is measured from straight down and `azimuth` clockwise
/// from north, both in degrees.
pub fn calc_unit_vectors(takeoff_angle: f64, azimuth: f64) -> Result<DirectionFrame, RadError> {
    ensure_finite("takeoff_angle", takeoff_angle)?;
    ensure_finite("azimuth", azimuth)?;

    let (sin_t, cos_t) = takeoff_angle.to_radians().sin_cos();
    let (sin_a, cos_a) = azimuth.rem_euclid(360.0).to_radians().sin_cos();

    let e_r = Vector3::new(sin_t * cos_a, sin_t * sin_a, cos_t);
    let e_phi = Vector3::new(-sin_a, cos_a, 0.0);
    let e_theta = e_phi.cross(&e_r);
    Ok(DirectionFrame {
        e_r,
        e_phi,
        e_theta,
    })
}

/// [`calc_unit_vectors`] for a [`RayGeometry`].
pub fn direction_frame(ray: &RayGeometry) -> Result<DirectionFrame, RadError> {
    calc_unit_vectors(ray.takeoff_angle, ray.azimuth)
}

/// Takeoff angle and azimuth of the ray leaving along `direction`.
///
/// The azimuth is reported in (-180, 180]; vertical directions report an
/// azimuth of zero.
pub fn ray_from_vector(direction: &Vector3<f64>) -> Result<RayGeometry, RadError> {
    for (name, value) in ["north", "east", "down"].iter().zip(direction.iter()) {
        ensure_finite(name, *value)?;
    }
    let length = direction.norm();
    if length == 0.0 {
        return Err(RadError::InvalidParameter(
            ErrorInfo::new("zero-vector", "ray direction must be nonzero")
                .with_context("parameter", "direction"),
        ));
    }
    let takeoff_angle = (direction[2] / length).clamp(-1.0, 1.0).acos().to_degrees();
    if direction[0] == 0.0 && direction[1] == 0.0 {
        return Ok(RayGeometry::new(takeoff_angle, 0.0));
    }
    // atan2 yields -180 for signed-zero east components due south.
    let azimuth = match direction[1].atan2(direction[0]).to_degrees() {
        a if a <= -180.0 => 180.0,
        a => a,
    };
    Ok(RayGeometry::new(takeoff_angle, azimuth))
}
