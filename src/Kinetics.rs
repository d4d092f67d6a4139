/// eng
/// Closed-form calculators of reactant concentration for reactions of zeroth, first and second order
/// (C0 - k*t, C0*exp(-k*t), 1/(1/C0_A + k*t)). Each calculator evaluates the concentration at a given time
/// and samples it on a fixed-step time grid.
///
///  # Examples
/// ```
/// use KiRate::Kinetics::reaction_order_models::{FirstOrderModel, KineticModel, KineticModelTrait};
/// let model: KineticModel = FirstOrderModel::new(1.0, 0.1).unwrap().into();
/// let series = model.sample(0.0, 10.0, 1.0).unwrap();
/// assert_eq!(series.len(), 11);
/// ```
pub mod reaction_order_models;
mod reaction_order_models_tests;
/// Fixed-step sampler and the time series it produces
///
/// # Examples
/// ```
/// use KiRate::Kinetics::time_series::{Sampler, TimeSeries};
/// let sampler = Sampler::new(|t| Ok(2.0 * t), 0.0, 1.0, 0.25).unwrap();
/// let series = TimeSeries::from_sampler(sampler).unwrap();
/// assert_eq!(series.to_data_lines().lines().count(), 5);
/// ```
pub mod time_series;
/// error type shared by the kinetics calculators and the output
pub mod kinetics_error;
/// model construction from the run presets of the settings
pub mod simulation;
