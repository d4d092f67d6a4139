use super::kinetics_error::KineticsError;
use super::reaction_order_models::{
    FirstOrderModel, KineticModel, KineticModelTrait, ReactionOrder, SecondOrderModel,
    ZerothOrderModel,
};
use super::time_series::TimeSeries;
use crate::settings::RunPreset;
use log::info;

impl KineticModel {
    /// Creates the calculator of the given order from a preset.
    /// A second order preset without `C0_B` takes `C0_B = C0_A`.
    pub fn from_preset(order: ReactionOrder, preset: &RunPreset) -> Result<Self, KineticsError> {
        let model: KineticModel = match order {
            ReactionOrder::Zeroth => {
                ZerothOrderModel::new(preset.initial_concentration, preset.rate_constant)?.into()
            }
            ReactionOrder::First => {
                FirstOrderModel::new(preset.initial_concentration, preset.rate_constant)?.into()
            }
            ReactionOrder::Second => SecondOrderModel::new(
                preset.initial_concentration,
                preset
                    .second_initial_concentration
                    .unwrap_or(preset.initial_concentration),
                preset.rate_constant,
            )?
            .into(),
        };
        Ok(model)
    }
}

/// Builds the model of the chosen order and samples it over the preset window
pub fn simulate(order: ReactionOrder, preset: &RunPreset) -> Result<TimeSeries, KineticsError> {
    let model = KineticModel::from_preset(order, preset)?;
    info!(
        "{}: C = {}, k = {}, C0 = {}, window [{}, {}], step {}",
        order,
        order.formula(),
        preset.rate_constant,
        preset.initial_concentration,
        preset.start_time,
        preset.end_time,
        preset.time_step
    );
    let series = model.sample(preset.start_time, preset.end_time, preset.time_step)?;
    info!("{} samples computed", series.len());
    Ok(series)
}
