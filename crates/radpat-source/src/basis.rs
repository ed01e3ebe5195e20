use radpat_core::{FaultGeometry, Matrix3, RadError, Vector3};

/// Unit vectors spanning a fault, expressed in North-East-Down components.
///
/// `strike`, `updip` and `normal` form a right-handed triad with
/// `normal = strike x updip`; the normal points into the hanging wall and
/// has a non-positive down component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaultBasis {
    /// Horizontal direction along the fault trace.
    pub strike: Vector3<f64>,
    /// In-plane direction perpendicular to strike, pointing upward.
    pub updip: Vector3<f64>,
    /// Fault normal.
    pub normal: Vector3<f64>,
    /// Hanging-wall slip direction, `cos(rake) * strike + sin(rake) * updip`.
    pub slip: Vector3<f64>,
}

impl FaultBasis {
    /// Builds the basis for a validated fault geometry.
    pub fn from_geometry(fault: &FaultGeometry) -> Result<Self, RadError> {
        fault.validate()?;
        let (sin_strike, cos_strike) = fault.strike.to_radians().sin_cos();
        let (sin_dip, cos_dip) = fault.dip.to_radians().sin_cos();
        let (sin_rake, cos_rake) = fault.rake.to_radians().sin_cos();

        let strike = Vector3::new(cos_strike, sin_strike, 0.0);
        let updip = Vector3::new(cos_dip * sin_strike, -cos_dip * cos_strike, -sin_dip);
        let normal = Vector3::new(-sin_dip * sin_strike, sin_dip * cos_strike, -cos_dip);
        let slip = strike * cos_rake + updip * sin_rake;

        Ok(Self {
            strike,
            updip,
            normal,
            slip,
        })
    }

    /// Rotation taking fault-frame components to North-East-Down; its columns
    /// are `strike`, `updip` and `normal`.
    pub fn rotation(&self) -> Matrix3<f64> {
        Matrix3::from_columns(&[self.strike, self.updip, self.normal])
    }

    /// Null axis of the double couple, `normal x slip`.
    pub fn null_axis(&self) -> Vector3<f64> {
        self.normal.cross(&self.slip)
    }
}
