//! The deep sleep ratio predictor. The model is fitted on the shipped training
//! set the first time it is needed and shared for the rest of the process.

use crate::dataset::TRAINING_SET;
use crate::features::FeatureVector;
use crate::regression::{fit, DegenerateDataError, FittedModel};
use crate::utils::rounding::round_to;
use once_cell::sync::OnceCell;

/// The lowest ratio the predictor reports.
pub const MIN_RATIO: f64 = 5.0;
/// The highest ratio the predictor reports.
pub const MAX_RATIO: f64 = 35.0;

static MODEL: OnceCell<FittedModel> = OnceCell::new();

/// Return the model fitted on the shipped training set. The fit runs at most
/// once per process, concurrent first callers wait for it. A failed fit is not
/// cached.
pub fn train() -> Result<&'static FittedModel, DegenerateDataError> {
    MODEL.get_or_try_init(|| {
        let model = fit(&TRAINING_SET)?;
        log::info!(
            "Sleep pattern model ready (R^2 = {:.4} on {} samples).",
            model.score(&TRAINING_SET),
            TRAINING_SET.len()
        );
        Ok(model)
    })
}

/// Round 'raw' to one decimal place, then clamp it into the reported range.
/// The rounding must happen first.
pub fn clamp_ratio(raw: f64) -> f64 {
    // f64::min and f64::max discard a NaN operand, which keeps this total.
    round_to(raw, 1).min(MAX_RATIO).max(MIN_RATIO)
}

/// Predicts deep sleep ratios with a fitted model.
#[derive(Copy, Clone, Debug)]
pub struct Predictor {
    model: FittedModel,
}

impl Predictor {
    /// Create a predictor backed by the shared model, fitting it if this is
    /// the first use.
    pub fn new() -> Result<Self, DegenerateDataError> {
        Ok(Self { model: *train()? })
    }

    /// Create a predictor around a specific model.
    pub fn with_model(model: FittedModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &FittedModel {
        &self.model
    }

    /// Return the clamped deep sleep ratio for 'features'. Any input yields a
    /// value in [MIN_RATIO, MAX_RATIO], including inputs outside the ranges
    /// the host offers.
    #[must_use]
    pub fn predict(&self, features: &FeatureVector) -> f64 {
        clamp_ratio(self.model.predict_raw(features))
    }
}
