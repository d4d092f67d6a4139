//! # Time series of a reaction order model
//!
//! [`Sampler`] evaluates a concentration function on a fixed-step time grid and
//! [`TimeSeries`] keeps the produced `(time, concentration)` pairs.
//!
//! The grid point number `i` is `start + i*step`, it is not accumulated by repeated
//! addition of the step, so integer aligned windows never lose their last point.
//! A point lying above `end` by no more than `SNAP_TOLERANCE*step` is snapped to `end`.
//! Times are strictly increasing: a step below the floating-point resolution of the window
//! is an [`KineticsError::InvalidParameter`], never a run of repeated times.
//!
//! ```rust, ignore
//! use KiRate::Kinetics::time_series::{Sampler, TimeSeries};
//! let sampler = Sampler::new(|t| Ok(1.0 - 0.1 * t), 0.0, 10.0, 1.0)?;
//! let series = TimeSeries::from_sampler(sampler)?;
//! assert_eq!(series.len(), 11);
//! ```
use super::kinetics_error::KineticsError;
use prettytable::{Table, row};
use std::iter::FusedIterator;

/// relative (to the step) distance above the end of the window still counted as the end
pub const SNAP_TOLERANCE: f64 = 1e-9;

/// Lazy fixed-step evaluation of a concentration function over `[start, end]`
pub struct Sampler<F>
where
    F: Fn(f64) -> Result<f64, KineticsError>,
{
    concentration: F,
    start: f64,
    end: f64,
    step: f64,
    index: usize,
    last_time: Option<f64>,
    finished: bool,
}

impl<F> Sampler<F>
where
    F: Fn(f64) -> Result<f64, KineticsError>,
{
    /// # Returns
    /// * `Err(KineticsError::InvalidParameter)` - step is not positive, some bound is not finite
    ///   or the step vanishes when added to the bounds of the window
    pub fn new(concentration: F, start: f64, end: f64, step: f64) -> Result<Self, KineticsError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(KineticsError::InvalidParameter(format!(
                "time step must be positive and finite, got {}",
                step
            )));
        }
        if !start.is_finite() || !end.is_finite() {
            return Err(KineticsError::InvalidParameter(format!(
                "time window must be finite, got [{}, {}]",
                start, end
            )));
        }
        if start <= end && (start + step <= start || end - step >= end) {
            return Err(KineticsError::InvalidParameter(format!(
                "time step {} is below the floating-point resolution of [{}, {}]",
                step, start, end
            )));
        }
        Ok(Self {
            concentration,
            start,
            end,
            step,
            index: 0,
            last_time: None,
            finished: false,
        })
    }

    fn next_time(&self) -> Option<f64> {
        let t = self.start + self.index as f64 * self.step;
        if t <= self.end {
            Some(t)
        } else if t - self.end <= SNAP_TOLERANCE * self.step {
            Some(self.end)
        } else {
            None
        }
    }
}

impl<F> Iterator for Sampler<F>
where
    F: Fn(f64) -> Result<f64, KineticsError>,
{
    type Item = Result<(f64, f64), KineticsError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let Some(t) = self.next_time() else {
            self.finished = true;
            return None;
        };
        if let Some(previous) = self.last_time {
            if t <= previous {
                self.finished = true;
                if previous >= self.end {
                    return None;
                }
                return Some(Err(KineticsError::InvalidParameter(format!(
                    "time step {} does not advance time past {}",
                    self.step, previous
                ))));
            }
        }
        self.index += 1;
        self.last_time = Some(t);
        match (self.concentration)(t) {
            Ok(c) => Some(Ok((t, c))),
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl<F> FusedIterator for Sampler<F> where F: Fn(f64) -> Result<f64, KineticsError> {}

/// Ordered `(time, concentration)` samples of one simulation run
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeSeries {
    points: Vec<(f64, f64)>,
}

impl TimeSeries {
    /// Drains the sampler, the first failed evaluation aborts the whole series
    pub fn from_sampler<F>(sampler: Sampler<F>) -> Result<Self, KineticsError>
    where
        F: Fn(f64) -> Result<f64, KineticsError>,
    {
        let points = sampler.collect::<Result<Vec<(f64, f64)>, KineticsError>>()?;
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &(f64, f64)> {
        self.points.iter()
    }

    pub fn times(&self) -> Vec<f64> {
        self.points.iter().map(|(t, _)| *t).collect()
    }

    pub fn concentrations(&self) -> Vec<f64> {
        self.points.iter().map(|(_, c)| *c).collect()
    }

    pub fn first(&self) -> Option<(f64, f64)> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<(f64, f64)> {
        self.points.last().copied()
    }

    /// concentration of the first sample whose time is within `tol` of `t`
    pub fn value_at_time(&self, t: f64, tol: f64) -> Option<f64> {
        self.points
            .iter()
            .find(|(ti, _)| (ti - t).abs() <= tol)
            .map(|(_, c)| *c)
    }

    /// Data file body: `<time> <concentration>` per line, one decimal each, no header
    pub fn to_data_lines(&self) -> String {
        self.points
            .iter()
            .map(|(t, c)| format!("{} {}\n", one_decimal(*t), one_decimal(*c)))
            .collect()
    }

    pub fn pretty_table(&self) -> String {
        let mut table = Table::new();
        table.add_row(row!["t", "C"]);
        for (t, c) in &self.points {
            table.add_row(row![format!("{}", t), format!("{:.6}", c)]);
        }
        table.to_string()
    }
}

/// `{:.1}` without the sign of values that round to zero from below
fn one_decimal(value: f64) -> String {
    let formatted = format!("{:.1}", value);
    if formatted == "-0.0" {
        "0.0".to_string()
    } else {
        formatted
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a (f64, f64);
    type IntoIter = std::slice::Iter<'a, (f64, f64)>;
    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
