//! Predicts the share of deep sleep from a handful of bedtime measurements and
//! turns the prediction into a list of coaching interventions.

pub mod dataset;
pub mod features;
pub mod interventions;
pub mod predictor;
pub mod regression;
pub mod report;
pub mod utils;

pub use features::{Feature, FeatureVector};
pub use predictor::Predictor;
pub use regression::{DegenerateDataError, FittedModel};
pub use report::{assess, Assessment, Tier};
