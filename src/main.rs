use KiRate::Kinetics::kinetics_error::KineticsError;
use KiRate::Utils::series_output::sinks_from_settings;
use KiRate::cli::cli_main::run_interactive_menu;
use KiRate::settings::{DEFAULT_SETTINGS_FILE, SimulationSettings};
use log::{LevelFilter, error};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("logger is not initialized: {}", e);
    }
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), KineticsError> {
    let settings = SimulationSettings::load(DEFAULT_SETTINGS_FILE)?;
    let mut sinks = sinks_from_settings(&settings.output);
    let mut input = io::stdin().lock();
    let mut output = io::stdout();
    run_interactive_menu(&mut input, &mut output, &settings, &mut sinks)?;
    Ok(())
}
