//! Moment tensors and ray direction frames in the North-East-Down frame.

use std::f64::consts::SQRT_2;

use nalgebra::{Matrix3, SymmetricEigen, Vector3};
use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, RadError};
use crate::validate::ensure_finite;

/// Relative tolerance applied when accepting caller supplied tensors.
pub const SYMMETRY_TOLERANCE: f64 = 1e-9;

const COMPONENT_NAMES: [[&str; 3]; 3] = [
    ["m_nn", "m_ne", "m_nd"],
    ["m_en", "m_ee", "m_ed"],
    ["m_dn", "m_de", "m_dd"],
];

fn ensure_finite_matrix(matrix: &Matrix3<f64>) -> Result<(), RadError> {
    for row in 0..3 {
        for col in 0..3 {
            ensure_finite(COMPONENT_NAMES[row][col], matrix[(row, col)])?;
        }
    }
    Ok(())
}

// NED <-> ENU is a self-inverse signed permutation.
fn ned_enu_swap() -> Matrix3<f64> {
    Matrix3::new(0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, -1.0)
}

/// Symmetric 3x3 moment tensor with finite components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[[f64; 3]; 3]", into = "[[f64; 3]; 3]")]
pub struct MomentTensor {
    matrix: Matrix3<f64>,
}

/// Eigen-decomposition of a moment tensor, ordered by descending eigenvalue.
///
/// For a double couple the three axes are the tension (T), null (B) and
/// pressure (P) axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrincipalAxes {
    /// Eigenvalues, largest first.
    pub values: [f64; 3],
    /// Unit eigenvectors matching `values`.
    pub axes: [Vector3<f64>; 3],
}

impl PrincipalAxes {
    /// Tension axis (largest eigenvalue).
    pub fn tension(&self) -> Vector3<f64> {
        self.axes[0]
    }

    /// Null axis (intermediate eigenvalue).
    pub fn null(&self) -> Vector3<f64> {
        self.axes[1]
    }

    /// Pressure axis (smallest eigenvalue).
    pub fn pressure(&self) -> Vector3<f64> {
        self.axes[2]
    }
}

impl MomentTensor {
    /// Builds a tensor from row-major components, rejecting non-finite or
    /// asymmetric input.
    pub fn from_components(components: [[f64; 3]; 3]) -> Result<Self, RadError> {
        Self::from_matrix(Matrix3::from_fn(|row, col| components[row][col]))
    }

    /// Wraps a matrix, rejecting non-finite or asymmetric input.
    pub fn from_matrix(matrix: Matrix3<f64>) -> Result<Self, RadError> {
        ensure_finite_matrix(&matrix)?;
        let scale = matrix.amax().max(1.0);
        let asymmetry = (matrix - matrix.transpose()).amax();
        if asymmetry > SYMMETRY_TOLERANCE * scale {
            return Err(RadError::InvalidParameter(
                ErrorInfo::new("asymmetric-tensor", "moment tensor must be symmetric")
                    .with_context("parameter", "moment_tensor")
                    .with_context("asymmetry", asymmetry.to_string())
                    .with_hint("pass 0.5 * (M + M^T) or use MomentTensor::symmetrized"),
            ));
        }
        Ok(Self { matrix })
    }

    /// Wraps the symmetric part 0.5 * (M + M^T) of a finite matrix.
    pub fn symmetrized(matrix: Matrix3<f64>) -> Result<Self, RadError> {
        ensure_finite_matrix(&matrix)?;
        Ok(Self {
            matrix: 0.5 * (matrix + matrix.transpose()),
        })
    }

    /// Borrow the underlying matrix.
    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    /// Row-major components.
    pub fn components(&self) -> [[f64; 3]; 3] {
        let m = &self.matrix;
        [
            [m[(0, 0)], m[(0, 1)], m[(0, 2)]],
            [m[(1, 0)], m[(1, 1)], m[(1, 2)]],
            [m[(2, 0)], m[(2, 1)], m[(2, 2)]],
        ]
    }

    /// Single component by row and column.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.matrix[(row, col)]
    }

    /// Sum of the diagonal; nonzero only for sources with volume change.
    pub fn trace(&self) -> f64 {
        self.matrix.trace()
    }

    /// Scalar seismic moment, Frobenius norm divided by sqrt(2).
    pub fn scalar_moment(&self) -> f64 {
        self.matrix.norm() / SQRT_2
    }

    /// Whether the tensor equals its transpose within `tolerance`.
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        (self.matrix - self.matrix.transpose()).amax() <= tolerance
    }

    /// Isotropic part, trace / 3 times the identity.
    pub fn isotropic(&self) -> MomentTensor {
        Self {
            matrix: Matrix3::identity() * (self.trace() / 3.0),
        }
    }

    /// Deviatoric part, the tensor minus its isotropic part.
    pub fn deviatoric(&self) -> MomentTensor {
        Self {
            matrix: self.matrix - self.isotropic().matrix,
        }
    }

    /// Expresses the tensor in a rotated frame, R * M * R^T.
    pub fn rotated(&self, rotation: &Matrix3<f64>) -> Result<MomentTensor, RadError> {
        Self::symmetrized(rotation * self.matrix * rotation.transpose())
    }

    /// Bilinear form a . M . b.
    pub fn contract(&self, a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
        a.dot(&(self.matrix * b))
    }

    /// Eigenvalues and eigenvectors, largest eigenvalue first.
    pub fn principal_axes(&self) -> PrincipalAxes {
        let eigen = SymmetricEigen::new(self.matrix);
        let mut order = [0usize, 1, 2];
        order.sort_by(|&a, &b| {
            eigen.eigenvalues[b]
                .partial_cmp(&eigen.eigenvalues[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let column = |idx: usize| -> Vector3<f64> { eigen.eigenvectors.column(idx).into_owned() };
        PrincipalAxes {
            values: order.map(|idx| eigen.eigenvalues[idx]),
            axes: order.map(column),
        }
    }

    /// Re-expresses the tensor in East-North-Up components.
    pub fn to_enu(&self) -> MomentTensor {
        let swap = ned_enu_swap();
        Self {
            matrix: swap * self.matrix * swap.transpose(),
        }
    }

    /// Builds a North-East-Down tensor from East-North-Up components.
    pub fn from_enu(components: [[f64; 3]; 3]) -> Result<Self, RadError> {
        Ok(Self::from_components(components)?.to_enu())
    }
}

impl TryFrom<[[f64; 3]; 3]> for MomentTensor {
    type Error = RadError;

    fn try_from(components: [[f64; 3]; 3]) -> Result<Self, Self::Error> {
        Self::from_components(components)
    }
}

impl From<MomentTensor> for [[f64; 3]; 3] {
    fn from(tensor: MomentTensor) -> Self {
        tensor.components()
    }
}

/// Orthonormal particle-motion directions for a single ray.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionFrame {
    /// Along the ray, from source towards receiver (P motion).
    pub e_r: Vector3<f64>,
    /// Horizontal, to the right when facing along the ray (SH motion).
    pub e_phi: Vector3<f64>,
    /// In the vertical plane of the ray, with an upward component (SV motion).
    pub e_theta: Vector3<f64>,
}

impl DirectionFrame {
    /// Largest deviation from unit length or mutual orthogonality.
    pub fn orthonormality_error(&self) -> f64 {
        let vectors = [self.e_r, self.e_phi, self.e_theta];
        let mut worst: f64 = 0.0;
        for (i, a) in vectors.iter().enumerate() {
            for (j, b) in vectors.iter().enumerate().skip(i) {
                let target = if i == j { 1.0 } else { 0.0 };
                worst = worst.max((a.dot(b) - target).abs());
            }
        }
        worst
    }

    /// Same vectors expressed in East-North-Up components.
    pub fn to_enu(&self) -> DirectionFrame {
        let swap = ned_enu_swap();
        DirectionFrame {
            e_r: swap * self.e_r,
            e_phi: swap * self.e_phi,
            e_theta: swap * self.e_theta,
        }
    }
}
