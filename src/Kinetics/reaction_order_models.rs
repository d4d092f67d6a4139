//! # Reaction order models
//!
//! Closed-form concentration of a reactant for reactions of zeroth, first and second order
//! with a constant rate constant `k`:
//!
//! | Order | Code | Concentration |
//! |-------|------|---------------|
//! | 0 | [`ZerothOrderModel`] | `C(t) = C0 - k*t` |
//! | 1 | [`FirstOrderModel`]  | `C(t) = C0*exp(-k*t)` |
//! | 2 | [`SecondOrderModel`] | `C(t) = 1/(1/C0_A + k*t)` |
//!
//! All three implement [`KineticModelTrait`] and are dispatched through the [`KineticModel`]
//! enum, so the caller picks a [`ReactionOrder`] and works with one type.
//!
//! ## Non-obvious details
//! - zeroth order is not clamped and goes negative once `t > C0/k`
//! - second order takes two initial concentrations but the formula only uses `C0_A`,
//!   `C0_B` is stored and reported but never enters the calculation
//! - second order fails with [`KineticsError::DomainError`] when `1/C0_A + k*t` is zero or
//!   not finite (`C0_A == 0`, or a negative `k` at `t = -1/(k*C0_A)`)
//!
//! ```rust, ignore
//! use KiRate::Kinetics::reaction_order_models::*;
//! let model: KineticModel = FirstOrderModel::new(1.0, 0.1)?.into();
//! let series = model.sample(0.0, 10.0, 1.0)?;
//! ```
use super::kinetics_error::KineticsError;
use super::time_series::{Sampler, TimeSeries};
use enum_dispatch::enum_dispatch;
use log::debug;
use std::fmt;

/// Reaction order as chosen in the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionOrder {
    Zeroth,
    First,
    Second,
}

impl ReactionOrder {
    pub const ALL: [ReactionOrder; 3] = [
        ReactionOrder::Zeroth,
        ReactionOrder::First,
        ReactionOrder::Second,
    ];

    /// 1, 2, 3 map to zeroth, first and second order, anything else is an invalid selection
    pub fn from_choice(choice: i64) -> Result<Self, KineticsError> {
        match choice {
            1 => Ok(ReactionOrder::Zeroth),
            2 => Ok(ReactionOrder::First),
            3 => Ok(ReactionOrder::Second),
            _ => Err(KineticsError::InvalidSelection(choice.to_string())),
        }
    }

    pub fn menu_number(&self) -> i64 {
        match self {
            ReactionOrder::Zeroth => 1,
            ReactionOrder::First => 2,
            ReactionOrder::Second => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReactionOrder::Zeroth => "Zeroth-order reaction",
            ReactionOrder::First => "First-order reaction",
            ReactionOrder::Second => "Second-order reaction",
        }
    }

    pub fn formula(&self) -> &'static str {
        match self {
            ReactionOrder::Zeroth => "C0 - k*t",
            ReactionOrder::First => "C0*exp(-k*t)",
            ReactionOrder::Second => "1/(1/C0_A + k*t)",
        }
    }
}

impl fmt::Display for ReactionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Rate constant and initial concentration(s) of one run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactionParameters {
    rate_constant: f64,
    initial_concentration: f64,
    /// second reactant of a second order reaction, not used by the formula
    second_initial_concentration: Option<f64>,
}

impl ReactionParameters {
    /// # Returns
    /// * `Err(KineticsError::InvalidParameter)` - if `k` or `C0` is not finite
    pub fn new(rate_constant: f64, initial_concentration: f64) -> Result<Self, KineticsError> {
        check_finite("rate constant", rate_constant)?;
        check_finite("initial concentration", initial_concentration)?;
        Ok(Self {
            rate_constant,
            initial_concentration,
            second_initial_concentration: None,
        })
    }

    pub fn with_two_concentrations(
        rate_constant: f64,
        initial_concentration_a: f64,
        initial_concentration_b: f64,
    ) -> Result<Self, KineticsError> {
        let mut params = Self::new(rate_constant, initial_concentration_a)?;
        check_finite("initial concentration of B", initial_concentration_b)?;
        params.second_initial_concentration = Some(initial_concentration_b);
        Ok(params)
    }

    pub fn rate_constant(&self) -> f64 {
        self.rate_constant
    }

    pub fn initial_concentration(&self) -> f64 {
        self.initial_concentration
    }

    pub fn second_initial_concentration(&self) -> Option<f64> {
        self.second_initial_concentration
    }
}

fn check_finite(name: &str, value: f64) -> Result<(), KineticsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(KineticsError::InvalidParameter(format!(
            "{} must be finite, got {}",
            name, value
        )))
    }
}

/// Common capability of the reaction order calculators
#[enum_dispatch]
pub trait KineticModelTrait {
    /// concentration of the reactant at time `t`
    fn concentration_at(&self, t: f64) -> Result<f64, KineticsError>;

    fn parameters(&self) -> &ReactionParameters;

    fn order(&self) -> ReactionOrder;

    /// Evaluates the model at `start, start+step, ...` up to and including `end`
    ///
    /// # Returns
    /// * `Err(KineticsError::InvalidParameter)` - step is not positive
    /// * `Err(KineticsError::DomainError)` - the formula is undefined at some sampled time
    fn sample(&self, start: f64, end: f64, step: f64) -> Result<TimeSeries, KineticsError> {
        debug!(
            "sampling {} on [{}, {}] with step {}",
            self.order(),
            start,
            end,
            step
        );
        let sampler = Sampler::new(|t| self.concentration_at(t), start, end, step)?;
        TimeSeries::from_sampler(sampler)
    }
}

/// `C(t) = C0 - k*t`
#[derive(Debug, Clone, PartialEq)]
pub struct ZerothOrderModel {
    params: ReactionParameters,
}

impl ZerothOrderModel {
    pub fn new(initial_concentration: f64, rate_constant: f64) -> Result<Self, KineticsError> {
        Ok(Self {
            params: ReactionParameters::new(rate_constant, initial_concentration)?,
        })
    }
}

impl KineticModelTrait for ZerothOrderModel {
    fn concentration_at(&self, t: f64) -> Result<f64, KineticsError> {
        Ok(self.params.initial_concentration - self.params.rate_constant * t)
    }

    fn parameters(&self) -> &ReactionParameters {
        &self.params
    }

    fn order(&self) -> ReactionOrder {
        ReactionOrder::Zeroth
    }
}

/// `C(t) = C0*exp(-k*t)`
#[derive(Debug, Clone, PartialEq)]
pub struct FirstOrderModel {
    params: ReactionParameters,
}

impl FirstOrderModel {
    pub fn new(initial_concentration: f64, rate_constant: f64) -> Result<Self, KineticsError> {
        Ok(Self {
            params: ReactionParameters::new(rate_constant, initial_concentration)?,
        })
    }
}

impl KineticModelTrait for FirstOrderModel {
    fn concentration_at(&self, t: f64) -> Result<f64, KineticsError> {
        Ok(self.params.initial_concentration * (-self.params.rate_constant * t).exp())
    }

    fn parameters(&self) -> &ReactionParameters {
        &self.params
    }

    fn order(&self) -> ReactionOrder {
        ReactionOrder::First
    }
}

/// `C(t) = 1/(1/C0_A + k*t)`, `C0_B` is kept but ignored
#[derive(Debug, Clone, PartialEq)]
pub struct SecondOrderModel {
    params: ReactionParameters,
}

impl SecondOrderModel {
    pub fn new(
        initial_concentration_a: f64,
        initial_concentration_b: f64,
        rate_constant: f64,
    ) -> Result<Self, KineticsError> {
        Ok(Self {
            params: ReactionParameters::with_two_concentrations(
                rate_constant,
                initial_concentration_a,
                initial_concentration_b,
            )?,
        })
    }
}

impl KineticModelTrait for SecondOrderModel {
    fn concentration_at(&self, t: f64) -> Result<f64, KineticsError> {
        let c0_a = self.params.initial_concentration;
        if c0_a == 0.0 {
            return Err(KineticsError::DomainError {
                t,
                reason: "initial concentration of A is zero, 1/C0_A is undefined".to_string(),
            });
        }
        let denominator = 1.0 / c0_a + self.params.rate_constant * t;
        if denominator == 0.0 || !denominator.is_finite() {
            return Err(KineticsError::DomainError {
                t,
                reason: format!("1/C0_A + k*t = {} has no finite reciprocal", denominator),
            });
        }
        Ok(1.0 / denominator)
    }

    fn parameters(&self) -> &ReactionParameters {
        &self.params
    }

    fn order(&self) -> ReactionOrder {
        ReactionOrder::Second
    }
}

/// One of the three reaction order calculators
#[enum_dispatch(KineticModelTrait)]
#[derive(Debug, Clone, PartialEq)]
pub enum KineticModel {
    Zeroth(ZerothOrderModel),
    First(FirstOrderModel),
    Second(SecondOrderModel),
}

impl KineticModel {
    /// Lazy counterpart of [`KineticModelTrait::sample`]: samples are computed while iterating
    pub fn sampler(
        &self,
        start: f64,
        end: f64,
        step: f64,
    ) -> Result<Sampler<impl Fn(f64) -> Result<f64, KineticsError> + '_>, KineticsError> {
        Sampler::new(move |t| self.concentration_at(t), start, end, step)
    }
}
