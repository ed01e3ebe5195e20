use radpat_core::validate::{ensure_finite, ensure_open_range};
use radpat_core::{lame_ratio, Matrix3, MomentTensor, RadError, Vector3};
use serde::{Deserialize, Serialize};

/// Elementary source mechanisms expressed in the fault frame
/// (axis 1 strike, axis 2 up-dip, axis 3 normal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// Unit double couple from slip within the fault plane.
    Shear,
    /// Tensile crack opening along the fault normal.
    Opening,
    /// Isotropic volume source with the same Frobenius norm as the unit
    /// double couple.
    Explosion,
}

/// Double couple d(x)n + n(x)d for slip `d = (cos rake, sin rake, 0)` on the
/// plane with normal `n = (0, 0, 1)`.
pub(crate) fn shear_matrix(rake_deg: f64) -> Matrix3<f64> {
    let (sin_rake, cos_rake) = rake_deg.to_radians().sin_cos();
    let mut m = Matrix3::zeros();
    m[(0, 2)] = cos_rake;
    m[(2, 0)] = cos_rake;
    m[(1, 2)] = sin_rake;
    m[(2, 1)] = sin_rake;
    m
}

/// Tensile crack in units of the shear modulus: lambda/mu on every diagonal
/// entry plus 2 along the normal. The in-plane to normal ratio is
/// lambda / (lambda + 2 mu) = v / (1 - v).
pub(crate) fn opening_matrix(lame_ratio: f64) -> Matrix3<f64> {
    Matrix3::from_diagonal(&Vector3::new(
        lame_ratio,
        lame_ratio,
        lame_ratio + 2.0,
    ))
}

pub(crate) fn explosion_matrix() -> Matrix3<f64> {
    Matrix3::identity() * (2.0f64 / 3.0).sqrt()
}

/// Returns a single elementary mechanism in the fault frame.
///
/// `rake` only affects [`SourceKind::Shear`] and `poissons_ratio` only
/// affects [`SourceKind::Opening`], but both are validated for every kind.
pub fn fault_frame_component(
    kind: SourceKind,
    rake: f64,
    poissons_ratio: f64,
) -> Result<MomentTensor, RadError> {
    ensure_finite("rake", rake)?;
    ensure_open_range(
        "invalid-poissons-ratio",
        "poissons_ratio",
        poissons_ratio,
        0.0,
        0.5,
    )?;
    let matrix = match kind {
        SourceKind::Shear => shear_matrix(rake),
        SourceKind::Opening => opening_matrix(lame_ratio(poissons_ratio)),
        SourceKind::Explosion => explosion_matrix(),
    };
    MomentTensor::from_matrix(matrix)
}
