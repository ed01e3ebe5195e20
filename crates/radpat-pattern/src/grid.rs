use log::debug;
use radpat_core::validate::ensure_finite;
use radpat_core::{ErrorInfo, MomentTensor, RadError, RadiationCoefficients, RayGeometry};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::evaluate::radiation_for_ray;
use crate::report::SweepReport;

/// Upper bound on the number of samples along a single grid axis.
pub const MAX_AXIS_SAMPLES: usize = 100_000;

fn range_error(parameter: &str, value: f64, constraint: &str) -> RadError {
    RadError::invalid_parameter("invalid-range", parameter, value, constraint)
}

/// Evenly spaced angles from `start` to `stop` in increments of `step`
/// (degrees). `stop` is included when it falls on a step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleRange {
    /// First angle.
    pub start: f64,
    /// Last admissible angle.
    pub stop: f64,
    /// Spacing between consecutive angles, strictly positive.
    pub step: f64,
}

impl AngleRange {
    /// Creates a range.
    pub fn new(start: f64, stop: f64, step: f64) -> Self {
        Self { start, stop, step }
    }

    /// A single angle.
    pub fn single(angle: f64) -> Self {
        Self::new(angle, angle, 1.0)
    }

    /// Enumerates the angles; `axis` names the range in error reports.
    pub fn values(&self, axis: &str) -> Result<Vec<f64>, RadError> {
        ensure_finite(&format!("{axis}.start"), self.start)?;
        ensure_finite(&format!("{axis}.stop"), self.stop)?;
        ensure_finite(&format!("{axis}.step"), self.step)?;
        if self.step <= 0.0 {
            return Err(range_error(&format!("{axis}.step"), self.step, "> 0"));
        }
        if self.stop < self.start {
            return Err(range_error(
                &format!("{axis}.stop"),
                self.stop,
                &format!(">= {axis}.start"),
            ));
        }
        // Tolerate rounding so that e.g. 0..=180 step 10 keeps 180.
        let intervals = ((self.stop - self.start) / self.step + 1e-9).floor();
        if intervals >= MAX_AXIS_SAMPLES as f64 {
            return Err(range_error(
                &format!("{axis}.step"),
                self.step,
                &format!("at most {MAX_AXIS_SAMPLES} samples"),
            ));
        }
        let count = intervals as usize + 1;
        Ok((0..count)
            .map(|idx| self.start + idx as f64 * self.step)
            .collect())
    }
}

/// Rectangular grid of rays, enumerated takeoff-major.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RayGrid {
    /// Takeoff angles, degrees from straight down.
    pub takeoff: AngleRange,
    /// Azimuths, degrees east of north.
    pub azimuth: AngleRange,
}

impl Default for RayGrid {
    fn default() -> Self {
        Self {
            takeoff: AngleRange::new(0.0, 180.0, 10.0),
            azimuth: AngleRange::new(-180.0, 180.0, 10.0),
        }
    }
}

impl RayGrid {
    /// All rays of the grid in takeoff-major order.
    pub fn rays(&self) -> Result<Vec<RayGeometry>, RadError> {
        let takeoffs = self.takeoff.values("takeoff")?;
        let azimuths = self.azimuth.values("azimuth")?;
        Ok(takeoffs
            .iter()
            .flat_map(|&takeoff| {
                azimuths
                    .iter()
                    .map(move |&azimuth| RayGeometry::new(takeoff, azimuth))
            })
            .collect())
    }
}

/// Coefficients evaluated for one ray of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiationSample {
    /// Ray the coefficients belong to.
    pub ray: RayGeometry,
    /// P, SH and SV coefficients.
    pub coefficients: RadiationCoefficients,
}

/// Options governing sweep execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepOpts {
    /// Worker threads used to evaluate rays; zero is treated as one and
    /// requests beyond the machine's parallelism are capped.
    pub threads: usize,
}

impl Default for SweepOpts {
    fn default() -> Self {
        Self { threads: 1 }
    }
}

impl SweepOpts {
    /// Size of the worker pool actually built, within
    /// `1..=available_parallelism`.
    pub fn effective_threads(&self) -> usize {
        let available = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        self.threads.clamp(1, available)
    }
}

/// Evaluates `tensor` on every ray of `grid`.
///
/// Samples are returned in grid order whatever the thread count.
pub fn sweep(
    tensor: &MomentTensor,
    grid: &RayGrid,
    opts: &SweepOpts,
) -> Result<SweepReport, RadError> {
    let rays = grid.rays()?;
    let threads = opts.effective_threads();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|err| RadError::Runtime(ErrorInfo::new("thread_pool", err.to_string())))?;

    let results: Result<Vec<_>, RadError> = pool.install(|| {
        rays.par_iter()
            .enumerate()
            .map(|(index, ray)| -> Result<(usize, RadiationSample), RadError> {
                let coefficients = radiation_for_ray(tensor, ray)?;
                Ok((
                    index,
                    RadiationSample {
                        ray: *ray,
                        coefficients,
                    },
                ))
            })
            .collect()
    });

    let mut ordered = results?;
    ordered.sort_by_key(|(index, _)| *index);
    let samples: Vec<RadiationSample> = ordered.into_iter().map(|(_, sample)| sample).collect();
    debug!("swept {} rays on {threads} thread(s)", samples.len());
    SweepReport::new(*tensor, *grid, samples)
}
