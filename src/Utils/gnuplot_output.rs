//! Gnuplot script generation and gnuplot start.
//!
//! The script holds exactly one `plot` directive that points at the data file written by
//! [`DataFileWriter`](crate::Utils::series_output::DataFileWriter). Starting the external
//! program goes through [`PlotLauncher`] so tests can substitute it.
use super::series_output::SeriesSink;
use crate::Kinetics::kinetics_error::KineticsError;
use crate::Kinetics::reaction_order_models::ReactionOrder;
use crate::Kinetics::time_series::TimeSeries;
use crate::settings::OutputSettings;
use log::{info, warn};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Runs the plotting program on a script file
pub trait PlotLauncher {
    fn launch(&mut self, command: &str, script: &Path) -> Result<(), KineticsError>;
}

/// Spawns `<command> -persist <script>` and does not wait for the window to close
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandLauncher;

impl PlotLauncher for CommandLauncher {
    fn launch(&mut self, command: &str, script: &Path) -> Result<(), KineticsError> {
        Command::new(command).arg("-persist").arg(script).spawn()?;
        info!("{} started with {}", command, script.display());
        Ok(())
    }
}

pub fn gnuplot_script(data_file: &Path, title: &str) -> String {
    format!(
        "set xlabel \"Time\"\nset ylabel \"Concentration\"\nplot \"{}\" using 1:2 with linespoints title \"{}\"\n",
        data_file.display(),
        title
    )
}

pub struct GnuplotOutput<L: PlotLauncher> {
    script_file: PathBuf,
    data_file: PathBuf,
    plot_command: String,
    launch_plot: bool,
    launcher: L,
}

impl<L: PlotLauncher> GnuplotOutput<L> {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(
        script_file: P,
        data_file: Q,
        plot_command: &str,
        launch_plot: bool,
        launcher: L,
    ) -> Self {
        Self {
            script_file: script_file.as_ref().to_path_buf(),
            data_file: data_file.as_ref().to_path_buf(),
            plot_command: plot_command.to_string(),
            launch_plot,
            launcher,
        }
    }

    pub fn from_settings(output: &OutputSettings, launcher: L) -> Self {
        Self::new(
            &output.script_file,
            &output.data_file,
            &output.plot_command,
            output.launch_plot,
            launcher,
        )
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    fn write_script(&self, title: &str) -> Result<(), KineticsError> {
        let file = File::create(&self.script_file)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(gnuplot_script(&self.data_file, title).as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

impl<L: PlotLauncher> SeriesSink for GnuplotOutput<L> {
    fn consume(&mut self, order: ReactionOrder, series: &TimeSeries) -> Result<(), KineticsError> {
        if series.is_empty() {
            warn!("empty time series, the plot will be blank");
        }
        self.write_script(order.title())?;
        info!("gnuplot script written to {}", self.script_file.display());
        if self.launch_plot {
            self.launcher.launch(&self.plot_command, &self.script_file)?;
        }
        Ok(())
    }
}
