//! Seasonal trend + Fourier decomposition fitted in log space.
//!
//! The model is an additive decomposition over `ln(1 + value)`: a
//! piecewise-linear trend whose change-point deltas are heavily penalized,
//! a yearly Fourier seasonality, and a low-order monthly Fourier term. The
//! penalized least-squares system is solved directly, so fitting is
//! deterministic. Daily and weekly structure is deliberately absent: the
//! data is monthly-granularity and anything finer would fit noise.

use chrono::NaiveDate;

use domus_domain::{add_months, ForecastPoint, MonthPoint};

use crate::{
    transform::{from_log_space, to_log_space},
    CoreError,
};

const YEARLY_PERIOD_DAYS: f64 = 365.25;
const MONTHLY_PERIOD_DAYS: f64 = 30.5;
const YEARLY_ORDER: usize = 3;
const MONTHLY_ORDER: usize = 3;
/// Change-point deltas are penalized with `1 / TREND_FLEXIBILITY`, keeping
/// the trend smooth and slowly adapting.
const TREND_FLEXIBILITY: f64 = 0.01;
/// Seasonal coefficients are penalized with `1 / SEASONAL_PRIOR_SCALE`;
/// recurring yearly patterns are the dominant predictable signal and get
/// the loosest prior.
const SEASONAL_PRIOR_SCALE: f64 = 10.0;
const MAX_CHANGEPOINTS: usize = 8;
/// Change points cover only the leading share of history so the trend tail
/// stays anchored by recent data.
const CHANGEPOINT_RANGE: f64 = 0.8;
/// Ridge floor keeping the normal equations well conditioned.
const BASE_RIDGE: f64 = 1e-8;
const PIVOT_EPS: f64 = 1e-12;

const SEASONAL_COLUMNS: usize = 2 * (YEARLY_ORDER + MONTHLY_ORDER);

/// Fitted additive decomposition over log-transformed training values.
#[derive(Debug)]
pub struct SeasonalModel {
    origin: NaiveDate,
    span_days: f64,
    dates: Vec<NaiveDate>,
    changepoints: Vec<f64>,
    coefficients: Vec<f64>,
}

impl SeasonalModel {
    /// Fits trend, yearly, and monthly components on the training series.
    ///
    /// Fails with [`CoreError::ModelFit`] when the normal equations are
    /// singular or the solution is not finite. There is no fallback to the
    /// cold-start estimator.
    pub fn fit(training: &[MonthPoint]) -> Result<Self, CoreError> {
        if training.len() < 2 {
            return Err(CoreError::ModelFit("training series too short".into()));
        }
        let origin = training[0].date;
        let span_days = day_offset(origin, training[training.len() - 1].date);
        if span_days <= 0.0 {
            return Err(CoreError::ModelFit("training series has no time span".into()));
        }

        let changepoint_count = MAX_CHANGEPOINTS.min(training.len().saturating_sub(2));
        let changepoints: Vec<f64> = (1..=changepoint_count)
            .map(|index| CHANGEPOINT_RANGE * index as f64 / (changepoint_count as f64 + 1.0))
            .collect();

        let mut rows = Vec::with_capacity(training.len());
        let mut targets = Vec::with_capacity(training.len());
        for point in training {
            if !point.value.is_finite() {
                return Err(CoreError::ModelFit(format!(
                    "non-finite training value at {}",
                    point.date
                )));
            }
            let t_days = day_offset(origin, point.date);
            rows.push(feature_row(t_days, span_days, &changepoints));
            targets.push(to_log_space(point.value));
        }

        let penalties = penalty_diagonal(&changepoints);
        let coefficients = solve_ridge(&rows, &targets, &penalties)?;

        Ok(Self {
            origin,
            span_days,
            dates: training.iter().map(|point| point.date).collect(),
            changepoints,
            coefficients,
        })
    }

    /// Predicts over the full historical span plus `horizon` future months.
    ///
    /// Historical months are re-predicted so decomposition values exist for
    /// already-observed dates; the reconciler decides which points surface
    /// as forecasts.
    pub fn forecast(&self, horizon: u32) -> Vec<ForecastPoint> {
        let mut points: Vec<ForecastPoint> =
            self.dates.iter().map(|&date| self.point_at(date)).collect();
        let last = self.dates[self.dates.len() - 1];
        for step in 1..=horizon as i32 {
            points.push(self.point_at(add_months(last, step)));
        }
        points
    }

    /// Evaluates the fitted decomposition at one month start.
    fn point_at(&self, date: NaiveDate) -> ForecastPoint {
        let t_days = day_offset(self.origin, date);
        let row = feature_row(t_days, self.span_days, &self.changepoints);

        let trend_columns = 2 + self.changepoints.len();
        let trend_log: f64 = (0..trend_columns)
            .map(|column| self.coefficients[column] * row[column])
            .sum();
        let yearly_log: f64 = (trend_columns..trend_columns + 2 * YEARLY_ORDER)
            .map(|column| self.coefficients[column] * row[column])
            .sum();
        let monthly_log: f64 = (trend_columns + 2 * YEARLY_ORDER..row.len())
            .map(|column| self.coefficients[column] * row[column])
            .sum();

        ForecastPoint {
            date,
            predicted: from_log_space(trend_log + yearly_log + monthly_log),
            trend: Some(from_log_space(trend_log)),
            // The yearly component is reported in log-scale units; the
            // upstream contract never inverse-transforms it.
            seasonal: Some(yearly_log),
        }
    }
}

fn day_offset(origin: NaiveDate, date: NaiveDate) -> f64 {
    (date - origin).num_days() as f64
}

/// One design-matrix row: intercept, scaled time, hinge terms for each
/// change point, then yearly and monthly Fourier pairs.
fn feature_row(t_days: f64, span_days: f64, changepoints: &[f64]) -> Vec<f64> {
    let t = t_days / span_days;
    let mut row = Vec::with_capacity(2 + changepoints.len() + SEASONAL_COLUMNS);
    row.push(1.0);
    row.push(t);
    for &changepoint in changepoints {
        row.push((t - changepoint).max(0.0));
    }
    push_fourier(&mut row, t_days, YEARLY_PERIOD_DAYS, YEARLY_ORDER);
    push_fourier(&mut row, t_days, MONTHLY_PERIOD_DAYS, MONTHLY_ORDER);
    row
}

fn push_fourier(row: &mut Vec<f64>, t_days: f64, period: f64, order: usize) {
    for harmonic in 1..=order {
        let phase = 2.0 * std::f64::consts::PI * harmonic as f64 * t_days / period;
        row.push(phase.sin());
        row.push(phase.cos());
    }
}

fn penalty_diagonal(changepoints: &[f64]) -> Vec<f64> {
    let mut diagonal = vec![BASE_RIDGE; 2];
    diagonal.extend(std::iter::repeat(1.0 / TREND_FLEXIBILITY).take(changepoints.len()));
    diagonal.extend(std::iter::repeat(1.0 / SEASONAL_PRIOR_SCALE).take(SEASONAL_COLUMNS));
    diagonal
}

/// Solves `(XᵀX + diag(penalties)) β = Xᵀy` by Gaussian elimination with
/// partial pivoting.
fn solve_ridge(
    rows: &[Vec<f64>],
    targets: &[f64],
    penalties: &[f64],
) -> Result<Vec<f64>, CoreError> {
    let width = penalties.len();
    let mut system = vec![vec![0.0; width + 1]; width];

    for (row, &target) in rows.iter().zip(targets) {
        for i in 0..width {
            for j in 0..width {
                system[i][j] += row[i] * row[j];
            }
            system[i][width] += row[i] * target;
        }
    }
    for i in 0..width {
        system[i][i] += penalties[i];
    }

    for column in 0..width {
        let mut pivot_row = column;
        for candidate in column + 1..width {
            if system[candidate][column].abs() > system[pivot_row][column].abs() {
                pivot_row = candidate;
            }
        }
        if system[pivot_row][column].abs() < PIVOT_EPS {
            return Err(CoreError::ModelFit("normal equations are singular".into()));
        }
        system.swap(column, pivot_row);

        let pivot_values = system[column].clone();
        let pivot = pivot_values[column];
        for row in column + 1..width {
            let factor = system[row][column] / pivot;
            if factor == 0.0 {
                continue;
            }
            for index in column..=width {
                system[row][index] -= factor * pivot_values[index];
            }
        }
    }

    let mut beta = vec![0.0; width];
    for i in (0..width).rev() {
        let mut accumulator = system[i][width];
        for j in i + 1..width {
            accumulator -= system[i][j] * beta[j];
        }
        beta[i] = accumulator / system[i][i];
    }

    if beta.iter().any(|value| !value.is_finite()) {
        return Err(CoreError::ModelFit(
            "coefficients did not converge to finite values".into(),
        ));
    }
    Ok(beta)
}
