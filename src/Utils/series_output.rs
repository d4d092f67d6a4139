use crate::Kinetics::kinetics_error::KineticsError;
use crate::Kinetics::reaction_order_models::ReactionOrder;
use crate::Kinetics::time_series::TimeSeries;
use crate::Utils::gnuplot_output::{CommandLauncher, GnuplotOutput};
use crate::settings::OutputSettings;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Receiver of a finished simulation: console, data file, plotting tool...
pub trait SeriesSink {
    fn consume(&mut self, order: ReactionOrder, series: &TimeSeries) -> Result<(), KineticsError>;
}

/// Prints `Time: <t>, Concentration: <c>` lines and optionally a table of the samples
pub struct ConsoleReport<W: Write> {
    out: W,
    print_table: bool,
}

impl ConsoleReport<io::Stdout> {
    pub fn stdout(print_table: bool) -> Self {
        Self::new(io::stdout(), print_table)
    }
}

impl<W: Write> ConsoleReport<W> {
    pub fn new(out: W, print_table: bool) -> Self {
        Self { out, print_table }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SeriesSink for ConsoleReport<W> {
    fn consume(&mut self, order: ReactionOrder, series: &TimeSeries) -> Result<(), KineticsError> {
        writeln!(self.out, "\n=== {}: C(t) = {} ===", order, order.formula())?;
        for (t, c) in series {
            writeln!(self.out, "Time: {}, Concentration: {}", t, c)?;
        }
        if self.print_table {
            writeln!(self.out, "{}", series.pretty_table())?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Writes the samples as `<time> <concentration>` lines into a text file.
/// The file is created right before writing and closed when `consume` returns.
pub struct DataFileWriter {
    path: PathBuf,
}

impl DataFileWriter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SeriesSink for DataFileWriter {
    fn consume(&mut self, _order: ReactionOrder, series: &TimeSeries) -> Result<(), KineticsError> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(series.to_data_lines().as_bytes())?;
        writer.flush()?;
        info!("{} samples written to {}", series.len(), self.path.display());
        Ok(())
    }
}

/// Console report, data file and gnuplot script (+ gnuplot launch) as configured
pub fn sinks_from_settings(output: &OutputSettings) -> Vec<Box<dyn SeriesSink>> {
    vec![
        Box::new(ConsoleReport::stdout(output.print_table)),
        Box::new(DataFileWriter::new(&output.data_file)),
        Box::new(GnuplotOutput::from_settings(output, CommandLauncher)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kinetics::reaction_order_models::{KineticModel, KineticModelTrait, ZerothOrderModel};
    use std::fs;
    use tempfile::tempdir;

    fn zeroth_series() -> TimeSeries {
        let model: KineticModel = ZerothOrderModel::new(1.0, 0.1).unwrap().into();
        model.sample(0.0, 10.0, 1.0).unwrap()
    }

    #[test]
    fn test_data_file_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.txt");
        let mut writer = DataFileWriter::new(&path);
        writer
            .consume(ReactionOrder::Zeroth, &zeroth_series())
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "0.0 1.0");
        assert_eq!(lines[1], "1.0 0.9");
        assert_eq!(lines[10], "10.0 0.0");
        for line in lines {
            assert_eq!(line.split_whitespace().count(), 2);
        }
    }

    #[test]
    fn test_data_file_is_overwritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.txt");
        fs::write(&path, "old content\nold content\n".repeat(20)).unwrap();
        let mut writer = DataFileWriter::new(&path);
        writer
            .consume(ReactionOrder::Zeroth, &zeroth_series())
            .unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("old"));
        assert_eq!(content.lines().count(), 11);
    }

    #[test]
    fn test_data_file_in_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("data.txt");
        let mut writer = DataFileWriter::new(&path);
        let result = writer.consume(ReactionOrder::Zeroth, &zeroth_series());
        assert!(matches!(result, Err(KineticsError::Io(_))));
    }

    #[test]
    fn test_console_report() {
        let mut report = ConsoleReport::new(Vec::new(), false);
        report
            .consume(ReactionOrder::Zeroth, &zeroth_series())
            .unwrap();
        let text = String::from_utf8(report.into_inner()).unwrap();
        assert!(text.contains("Zeroth-order reaction"));
        assert!(text.contains("Time: 0, Concentration: 1"));
        assert_eq!(text.matches("Time: ").count(), 11);

        let mut report = ConsoleReport::new(Vec::new(), true);
        report
            .consume(ReactionOrder::Zeroth, &zeroth_series())
            .unwrap();
        let text = String::from_utf8(report.into_inner()).unwrap();
        assert!(text.contains("1.000000"));
    }
}
