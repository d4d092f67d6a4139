use crate::Kinetics::kinetics_error::KineticsError;
use crate::Kinetics::reaction_order_models::ReactionOrder;
use crate::Kinetics::simulation::simulate;
use crate::Kinetics::time_series::TimeSeries;
use crate::Utils::series_output::SeriesSink;
use crate::settings::SimulationSettings;
use log::{info, warn};
use std::io::{BufRead, Write};

/// Shows the reaction order menu, reads one choice and runs the chosen simulation.
///
/// The parameters of the run are taken from `settings`, the result is handed to every sink in turn.
///
/// # Returns
/// * `Ok(Some(series))` - simulation done and delivered to all sinks
/// * `Ok(None)` - the choice was not 1, 2 or 3 (or not a number), "Invalid choice!" was printed
/// * `Err(KineticsError)` - bad parameters in the settings, undefined formula or output failure
pub fn run_interactive_menu<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    settings: &SimulationSettings,
    sinks: &mut [Box<dyn SeriesSink>],
) -> Result<Option<TimeSeries>, KineticsError> {
    show_main_menu(output)?;
    let choice = get_user_input(input)?;

    let order = match parse_choice(&choice) {
        Ok(order) => order,
        Err(KineticsError::InvalidSelection(choice)) => {
            warn!("invalid menu choice {:?}", choice);
            writeln!(output, "Invalid choice!")?;
            return Ok(None);
        }
        Err(e) => return Err(e),
    };
    info!("chosen: {}", order);

    let series = simulate(order, settings.preset(order))?;
    for sink in sinks.iter_mut() {
        sink.consume(order, &series)?;
    }
    Ok(Some(series))
}

/* colors
Yellow (\x1b[33m) - Menu options (1, 2, 3)

Cyan (\x1b[36m) - "Enter your choice:" prompt

Reset (\x1b[0m) - Returns to normal color after each colored section
*/
fn show_main_menu<W: Write>(output: &mut W) -> Result<(), KineticsError> {
    writeln!(output, "Choose the type of reaction to simulate:")?;
    for order in ReactionOrder::ALL {
        writeln!(
            output,
            "\x1b[33m{}. {}\x1b[0m",
            order.menu_number(),
            order.title()
        )?;
    }
    write!(output, "\x1b[36mEnter your choice: \x1b[0m")?;
    output.flush()?;
    Ok(())
}

fn get_user_input<R: BufRead>(input: &mut R) -> Result<String, KineticsError> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

/// integer menu choice -> reaction order; empty input, text and numbers outside 1..=3 are invalid selections
pub fn parse_choice(choice: &str) -> Result<ReactionOrder, KineticsError> {
    let trimmed = choice.trim();
    let number: i64 = trimmed
        .parse()
        .map_err(|_| KineticsError::InvalidSelection(trimmed.to_string()))?;
    ReactionOrder::from_choice(number)
}
