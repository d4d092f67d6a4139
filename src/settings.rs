//! # Settings Module
//!
//! ## Purpose
//! Holds the run parameters of each reaction order and the output options. The values the
//! menu uses are not typed in by the user, they come from here: either the built-in
//! defaults or a JSON file (`kinetics_config.json` next to the executable's working directory).
//!
//! ## Defaults
//! | Order | C0 | C0_B | k | window | step |
//! |-------|----|------|---|--------|------|
//! | zeroth | 1.0 | - | 0.1 | [0, 10] | 1 |
//! | first | 1.0 | - | 0.1 | [0, 10] | 1 |
//! | second | 1.0 | 1.0 | 0.1 | [0, 10] | 1 |
//!
//! The first order rate constant is known in two flavours, 0.1 and 0.4. 0.1 is the default,
//! 0.4 is available through [`RunPreset::first_order_fast`] or the settings file.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "zeroth_order": { "initial_concentration": 1.0, "second_initial_concentration": null,
//!                     "rate_constant": 0.1, "start_time": 0.0, "end_time": 10.0, "time_step": 1.0 },
//!   "first_order": { ... },
//!   "second_order": { ... },
//!   "output": { "data_file": "kinetics_data.txt", "script_file": "kinetics_plot.gp",
//!               "plot_command": "gnuplot", "launch_plot": true, "print_table": true }
//! }
//! ```
use crate::Kinetics::kinetics_error::KineticsError;
use crate::Kinetics::reaction_order_models::ReactionOrder;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_SETTINGS_FILE: &str = "kinetics_config.json";

/// Parameters of one simulation run: initial concentration(s), rate constant and time window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunPreset {
    pub initial_concentration: f64,
    /// initial concentration of the second reactant (second order only)
    #[serde(default)]
    pub second_initial_concentration: Option<f64>,
    pub rate_constant: f64,
    pub start_time: f64,
    pub end_time: f64,
    pub time_step: f64,
}

impl RunPreset {
    pub fn zeroth_order() -> Self {
        Self {
            initial_concentration: 1.0,
            second_initial_concentration: None,
            rate_constant: 0.1,
            start_time: 0.0,
            end_time: 10.0,
            time_step: 1.0,
        }
    }

    pub fn first_order() -> Self {
        Self {
            rate_constant: 0.1,
            ..Self::zeroth_order()
        }
    }

    /// first order with k = 0.4
    pub fn first_order_fast() -> Self {
        Self {
            rate_constant: 0.4,
            ..Self::zeroth_order()
        }
    }

    pub fn second_order() -> Self {
        Self {
            second_initial_concentration: Some(1.0),
            ..Self::zeroth_order()
        }
    }

    pub fn default_for(order: ReactionOrder) -> Self {
        match order {
            ReactionOrder::Zeroth => Self::zeroth_order(),
            ReactionOrder::First => Self::first_order(),
            ReactionOrder::Second => Self::second_order(),
        }
    }
}

/// Where the results go and whether gnuplot is started
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub data_file: String,
    pub script_file: String,
    pub plot_command: String,
    pub launch_plot: bool,
    pub print_table: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            data_file: "kinetics_data.txt".to_string(),
            script_file: "kinetics_plot.gp".to_string(),
            plot_command: "gnuplot".to_string(),
            launch_plot: true,
            print_table: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSettings {
    #[serde(default = "RunPreset::zeroth_order")]
    pub zeroth_order: RunPreset,
    #[serde(default = "RunPreset::first_order")]
    pub first_order: RunPreset,
    #[serde(default = "RunPreset::second_order")]
    pub second_order: RunPreset,
    #[serde(default)]
    pub output: OutputSettings,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            zeroth_order: RunPreset::zeroth_order(),
            first_order: RunPreset::first_order(),
            second_order: RunPreset::second_order(),
            output: OutputSettings::default(),
        }
    }
}

impl SimulationSettings {
    /// Reads settings from a JSON file.
    ///
    /// # Returns
    /// * `Ok(defaults)` - if the file does not exist
    /// * `Err(KineticsError::Config)` - if the file exists but is not valid settings JSON
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, KineticsError> {
        let path = path.as_ref();
        if !path.exists() {
            warn!(
                "settings file {} not found, using default parameters",
                path.display()
            );
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let settings: SimulationSettings = serde_json::from_str(&content)?;
        info!("settings loaded from {}", path.display());
        Ok(settings)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), KineticsError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), content)?;
        info!("settings saved to {}", path.as_ref().display());
        Ok(())
    }

    pub fn preset(&self, order: ReactionOrder) -> &RunPreset {
        match order {
            ReactionOrder::Zeroth => &self.zeroth_order,
            ReactionOrder::First => &self.first_order,
            ReactionOrder::Second => &self.second_order,
        }
    }

    pub fn preset_mut(&mut self, order: ReactionOrder) -> &mut RunPreset {
        match order {
            ReactionOrder::Zeroth => &mut self.zeroth_order,
            ReactionOrder::First => &mut self.first_order,
            ReactionOrder::Second => &mut self.second_order,
        }
    }
}
