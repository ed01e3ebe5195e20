use log::debug;
use radpat_core::{FaultGeometry, RadError};
use radpat_source::build_moment_tensor;
use serde::{Deserialize, Serialize};

use crate::grid::{sweep, RayGrid, SweepOpts};
use crate::report::SweepReport;
use crate::serde::{from_json_str, from_yaml_str, to_yaml_string};

fn default_threads() -> usize {
    1
}

/// YAML or JSON configurable description of a radiation-pattern sweep.
///
/// ```yaml
/// fault:
///   strike: 90
///   dip: 90
///   rake: 180
/// grid:
///   takeoff: { start: 0, stop: 180, step: 5 }
///   azimuth: { start: -180, stop: 180, step: 5 }
/// threads: 4
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternConfig {
    /// Source fault; defaults to a 20 degree dipping thrust striking north.
    #[serde(default)]
    pub fault: FaultGeometry,
    /// Rays to evaluate.
    #[serde(default)]
    pub grid: RayGrid,
    /// Worker threads for the sweep.
    #[serde(default = "default_threads")]
    pub threads: usize,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            fault: FaultGeometry::default(),
            grid: RayGrid::default(),
            threads: default_threads(),
        }
    }
}

impl PatternConfig {
    /// Parses a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, RadError> {
        from_yaml_str(yaml)
    }

    /// Parses a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, RadError> {
        from_json_str(json)
    }

    /// Renders the configuration as YAML.
    pub fn to_yaml_string(&self) -> Result<String, RadError> {
        to_yaml_string(self)
    }

    /// Checks the fault and the grid without evaluating anything.
    pub fn validate(&self) -> Result<(), RadError> {
        self.fault.validate()?;
        self.grid.rays()?;
        Ok(())
    }

    /// Builds the fault's geographic moment tensor and sweeps the grid.
    pub fn run(&self) -> Result<SweepReport, RadError> {
        self.validate()?;
        let tensor = build_moment_tensor(&self.fault)?;
        debug!("running sweep for {:?}", self.fault);
        sweep(
            &tensor,
            &self.grid,
            &SweepOpts {
                threads: self.threads,
            },
        )
    }
}
