use serde::{Deserialize, Serialize};

use crate::errors::RadError;
use crate::validate::{ensure_closed_range, ensure_finite, ensure_open_range};

/// Poisson's ratio of a Poisson solid, used when none is supplied.
pub const DEFAULT_POISSONS_RATIO: f64 = 0.25;

fn default_poissons_ratio() -> f64 {
    DEFAULT_POISSONS_RATIO
}

/// Ratio of the Lame parameter to the shear modulus for Poisson's ratio
/// `poissons_ratio`, 2v / (1 - 2v).
pub fn lame_ratio(poissons_ratio: f64) -> f64 {
    2.0 * poissons_ratio / (1.0 - 2.0 * poissons_ratio)
}

/// Orientation and opening of a planar fault, all angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaultGeometry {
    /// Fault trace bearing, clockwise from north.
    pub strike: f64,
    /// Inclination of the fault plane from horizontal, within [0, 90].
    pub dip: f64,
    /// Slip direction within the fault plane measured from strike.
    /// 0 is left-lateral, 90 thrust, 180 right-lateral, -90 normal.
    pub rake: f64,
    /// Blend between shear (0) and pure tensile opening (90).
    #[serde(default)]
    pub opening_angle: f64,
    /// Poisson's ratio of the surrounding medium, within (0, 0.5).
    #[serde(default = "default_poissons_ratio")]
    pub poissons_ratio: f64,
}

impl Default for FaultGeometry {
    fn default() -> Self {
        Self::new(0.0, 20.0, 90.0)
    }
}

impl FaultGeometry {
    /// Creates a pure shear fault with the default Poisson's ratio.
    pub fn new(strike: f64, dip: f64, rake: f64) -> Self {
        Self {
            strike,
            dip,
            rake,
            opening_angle: 0.0,
            poissons_ratio: DEFAULT_POISSONS_RATIO,
        }
    }

    /// Returns a copy with the given opening angle.
    pub fn with_opening(mut self, opening_angle: f64) -> Self {
        self.opening_angle = opening_angle;
        self
    }

    /// Returns a copy with the given Poisson's ratio.
    pub fn with_poissons_ratio(mut self, poissons_ratio: f64) -> Self {
        self.poissons_ratio = poissons_ratio;
        self
    }

    /// Checks every field against its documented domain.
    ///
    /// Strike and rake only need to be finite; they wrap naturally through the
    /// trigonometric construction.
    pub fn validate(&self) -> Result<(), RadError> {
        ensure_finite("strike", self.strike)?;
        ensure_finite("rake", self.rake)?;
        ensure_closed_range("invalid-dip", "dip", self.dip, 0.0, 90.0)?;
        ensure_closed_range(
            "invalid-opening-angle",
            "opening_angle",
            self.opening_angle,
            0.0,
            90.0,
        )?;
        // At 0.5 the Lame ratio 2v/(1-2v) diverges.
        ensure_open_range(
            "invalid-poissons-ratio",
            "poissons_ratio",
            self.poissons_ratio,
            0.0,
            0.5,
        )?;
        Ok(())
    }

    /// [`lame_ratio`] of the surrounding medium.
    pub fn lame_ratio(&self) -> f64 {
        lame_ratio(self.poissons_ratio)
    }
}

/// Outgoing ray direction at the source, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct RayGeometry {
    /// Angle from straight down, nominally within [0, 180].
    pub takeoff_angle: f64,
    /// Degrees east of north; any value, taken modulo 360.
    pub azimuth: f64,
}

impl RayGeometry {
    /// Creates a ray from its takeoff angle and azimuth.
    pub fn new(takeoff_angle: f64, azimuth: f64) -> Self {
        Self {
            takeoff_angle,
            azimuth,
        }
    }

    /// Checks that both angles are finite.
    pub fn validate(&self) -> Result<(), RadError> {
        ensure_finite("takeoff_angle", self.takeoff_angle)?;
        ensure_finite("azimuth", self.azimuth)?;
        Ok(())
    }
}

/// Far-field radiation coefficients for a single ray.
///
/// Signs follow the direction frame: positive P is compressional (away from
/// the source), positive SH is to the right facing along the ray and
/// positive SV has an upward component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct RadiationCoefficients {
    /// P-wave coefficient.
    pub p: f64,
    /// SH-wave coefficient.
    pub sh: f64,
    /// SV-wave coefficient.
    pub sv: f64,
}

impl RadiationCoefficients {
    /// Total S-wave amplitude, sqrt(SH^2 + SV^2).
    pub fn s_amplitude(&self) -> f64 {
        self.sh.hypot(self.sv)
    }

    /// S-wave polarisation angle in degrees, measured from the SV direction
    /// towards SH.
    pub fn polarization_angle(&self) -> f64 {
        self.sh.atan2(self.sv).to_degrees()
    }

    /// Returns the coefficients as a `(P, SH, SV)` tuple.
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.p, self.sh, self.sv)
    }
}
