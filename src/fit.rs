//! Least-squares line fitting for waveguide insertion-loss measurements.
//!
//! The slope of insertion loss against waveguide length is the propagation
//! loss (dB/cm); the intercept is the coupling loss (dB).

use crate::error::FitError;
use std::fmt::Write as _;

/// Waveguide lengths (cm), three samples per length.
pub const LENGTHS_CM: [f64; 9] = [0.5, 0.5, 0.5, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0];

/// Single-mode waveguide insertion loss (dB).
pub const SINGLE_MODE_DB: [f64; 9] = [
    13.312, 13.178, 14.017, 16.238, 16.315, 16.068, 19.928, 20.015, 21.610,
];

/// Multimode waveguide insertion loss (dB).
pub const MULTIMODE_DB: [f64; 9] = [
    23.649, 22.815, 23.989, 27.252, 26.765, 26.546, 33.332, 32.786, 34.023,
];

/// x range the fitted line is drawn over.
pub const FIT_X_RANGE: [f64; 2] = [0.0, 2.0];

const MIN_POINTS: usize = 3;

/// Fitted `y = slope * x + intercept` with the covariance of the estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
    /// Covariance matrix of `(slope, intercept)`, scaled by the residual
    /// variance with `n - 2` degrees of freedom.
    pub covariance: [[f64; 2]; 2],
}

impl LineFit {
    #[must_use]
    pub fn slope_error(&self) -> f64 {
        self.covariance[0][0].sqrt()
    }

    #[must_use]
    pub fn intercept_error(&self) -> f64 {
        self.covariance[1][1].sqrt()
    }

    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Legend label for the fitted line.
    #[must_use]
    pub fn label(&self) -> String {
        format!("y = {:.1}x + {:.1}", self.slope, self.intercept)
    }
}

#[allow(clippy::cast_precision_loss)]
pub fn fit_line(x: &[f64], y: &[f64]) -> Result<LineFit, FitError> {
    if x.len() != y.len() {
        return Err(FitError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    if x.len() < MIN_POINTS {
        return Err(FitError::TooFewPoints {
            required: MIN_POINTS,
            actual: x.len(),
        });
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let sxx: f64 = x.iter().map(|xi| (xi - mean_x).powi(2)).sum();
    if sxx == 0.0 {
        return Err(FitError::DegenerateX);
    }
    let sxy: f64 = x
        .iter()
        .zip(y)
        .map(|(xi, yi)| (xi - mean_x) * (yi - mean_y))
        .sum();

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    let ssr: f64 = x
        .iter()
        .zip(y)
        .map(|(xi, yi)| (yi - (slope * xi + intercept)).powi(2))
        .sum();
    let residual_variance = ssr / (n - 2.0);

    // inv(A^T A) for A = [x 1], times the residual variance
    let sum_x2: f64 = x.iter().map(|xi| xi * xi).sum();
    let var_slope = residual_variance / sxx;
    let var_intercept = residual_variance * sum_x2 / (n * sxx);
    let cov = -residual_variance * mean_x / sxx;

    Ok(LineFit {
        slope,
        intercept,
        covariance: [[var_slope, cov], [cov, var_intercept]],
    })
}

/// One measured series and its fit.
#[derive(Debug, Clone)]
pub struct Series {
    pub name: &'static str,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub fit: LineFit,
}

impl Series {
    pub fn new(name: &'static str, x: &[f64], y: &[f64]) -> Result<Self, FitError> {
        let fit = fit_line(x, y)?;
        Ok(Self {
            name,
            x: x.to_vec(),
            y: y.to_vec(),
            fit,
        })
    }

    #[must_use]
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }

    #[must_use]
    pub fn fit_points(&self) -> Vec<(f64, f64)> {
        FIT_X_RANGE.iter().map(|&x| (x, self.fit.eval(x))).collect()
    }
}

/// Fit both built-in datasets.
pub fn builtin_series() -> Result<Vec<Series>, FitError> {
    Ok(vec![
        Series::new("Single-mode", &LENGTHS_CM, &SINGLE_MODE_DB)?,
        Series::new("Multimode", &LENGTHS_CM, &MULTIMODE_DB)?,
    ])
}

/// Propagation and coupling loss summary, one block per series.
#[must_use]
pub fn format_report(series: &[Series]) -> String {
    let mut out = String::new();
    for (i, s) in series.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{}:", s.name);
        let _ = writeln!(
            out,
            "  Propagation loss: ({:.1} +/- {:.1}) dB/cm",
            s.fit.slope,
            s.fit.slope_error()
        );
        let _ = writeln!(
            out,
            "  Coupling loss: ({:.1} +/- {:.1}) dB",
            s.fit.intercept,
            s.fit.intercept_error()
        );
    }
    out
}
