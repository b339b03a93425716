//! Ordinary least squares over the five features, with an intercept.
//!
//! The features and the target are centred on their means, the normal
//! equations of the centred problem are solved for the coefficients, and the
//! intercept is recovered from the means.

use crate::dataset::TrainingSample;
use crate::features::{Feature, FeatureVector, NUM_FEATURES};
use crate::utils::linear_algebra::{dot, solve};
use thiserror::Error;

/// The reasons a sample set cannot produce a model.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DegenerateDataError {
    #[error("the training set is empty")]
    Empty,

    #[error("need at least {needed} samples to fit, got {got}")]
    TooFewSamples { needed: usize, got: usize },

    #[error("sample {index} contains a non-finite value")]
    NonFinite { index: usize },

    #[error("the design matrix is rank deficient at feature '{feature}'")]
    RankDeficient { feature: &'static str },
}

/// A fitted linear model: one coefficient per feature plus an intercept.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FittedModel {
    coefficients: [f64; NUM_FEATURES],
    intercept: f64,
}

impl FittedModel {
    pub fn new(coefficients: [f64; NUM_FEATURES], intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    pub fn coefficients(&self) -> &[f64; NUM_FEATURES] {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Return the unclamped, unrounded prediction for 'features'.
    #[must_use]
    pub fn predict_raw(&self, features: &FeatureVector) -> f64 {
        self.intercept + dot(&self.coefficients, &features.to_array())
    }

    /// Return the coefficient of determination (R^2) over 'samples'.
    pub fn score(&self, samples: &[TrainingSample]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        let mean = samples.iter().map(|s| s.deep_sleep_ratio).sum::<f64>()
            / samples.len() as f64;
        let mut rss = 0.0;
        let mut tss = 0.0;
        for s in samples {
            let predicted = self.predict_raw(&s.feature_vector());
            let residual = s.deep_sleep_ratio - predicted;
            rss += residual * residual;
            tss += (s.deep_sleep_ratio - mean).powi(2);
        }
        if tss == 0.0 {
            return if rss == 0.0 { 1.0 } else { 0.0 };
        }
        1.0 - rss / tss
    }
}

/// Fit a least squares model to 'samples'.
pub fn fit(
    samples: &[TrainingSample],
) -> Result<FittedModel, DegenerateDataError> {
    if samples.is_empty() {
        return Err(DegenerateDataError::Empty);
    }
    // One degree of freedom per coefficient plus the intercept.
    let needed = NUM_FEATURES + 1;
    if samples.len() < needed {
        return Err(DegenerateDataError::TooFewSamples {
            needed,
            got: samples.len(),
        });
    }

    let rows: Vec<[f64; NUM_FEATURES]> =
        samples.iter().map(|s| s.features()).collect();
    let targets: Vec<f64> =
        samples.iter().map(|s| s.deep_sleep_ratio).collect();
    for (index, (row, y)) in rows.iter().zip(&targets).enumerate() {
        if !y.is_finite() || row.iter().any(|v| !v.is_finite()) {
            return Err(DegenerateDataError::NonFinite { index });
        }
    }

    let n = samples.len() as f64;
    let mut x_mean = [0.0; NUM_FEATURES];
    for row in &rows {
        for (m, v) in x_mean.iter_mut().zip(row) {
            *m += v / n;
        }
    }
    let y_mean = targets.iter().sum::<f64>() / n;

    // Build the normal equations (Xc^T Xc) b = Xc^T yc of the centred data.
    let mut gram = vec![vec![0.0; NUM_FEATURES]; NUM_FEATURES];
    let mut moment = vec![0.0; NUM_FEATURES];
    for (row, y) in rows.iter().zip(&targets) {
        let centred: Vec<f64> =
            row.iter().zip(&x_mean).map(|(v, m)| v - m).collect();
        let yc = y - y_mean;
        for i in 0..NUM_FEATURES {
            moment[i] += centred[i] * yc;
            for j in 0..NUM_FEATURES {
                gram[i][j] += centred[i] * centred[j];
            }
        }
    }

    let solution = solve(&gram, &moment).map_err(|col| {
        DegenerateDataError::RankDeficient {
            feature: Feature::ALL[col].name(),
        }
    })?;

    let mut coefficients = [0.0; NUM_FEATURES];
    coefficients.copy_from_slice(&solution);
    let intercept = y_mean - dot(&coefficients, &x_mean);
    Ok(FittedModel::new(coefficients, intercept))
}
