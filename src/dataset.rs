//! The fixed set of nights the model is trained on.

use crate::features::{FeatureVector, NUM_FEATURES};

/// One recorded night: the bedtime measurements and the deep sleep ratio (%)
/// that followed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrainingSample {
    pub caffeine_mg: f64,
    pub exercise_intensity: u8,
    pub temperature_c: f64,
    pub noise_db: f64,
    pub avg_heart_rate: f64,
    pub deep_sleep_ratio: f64,
}

impl TrainingSample {
    pub const fn new(
        caffeine_mg: f64,
        exercise_intensity: u8,
        temperature_c: f64,
        noise_db: f64,
        avg_heart_rate: f64,
        deep_sleep_ratio: f64,
    ) -> Self {
        Self {
            caffeine_mg,
            exercise_intensity,
            temperature_c,
            noise_db,
            avg_heart_rate,
            deep_sleep_ratio,
        }
    }

    /// Return the feature row of this sample, in training order.
    pub fn features(&self) -> [f64; NUM_FEATURES] {
        self.feature_vector().to_array()
    }

    pub fn feature_vector(&self) -> FeatureVector {
        FeatureVector::new(
            self.caffeine_mg,
            self.exercise_intensity as f64,
            self.temperature_c,
            self.noise_db,
            self.avg_heart_rate,
        )
    }
}

/// The shipped training set. Never modified at runtime.
pub const TRAINING_SET: [TrainingSample; 8] = [
    TrainingSample::new(50.0, 3, 22.0, 40.0, 65.0, 20.0),
    TrainingSample::new(200.0, 0, 25.0, 65.0, 78.0, 10.0),
    TrainingSample::new(0.0, 1, 18.0, 30.0, 58.0, 30.0),
    TrainingSample::new(150.0, 5, 20.0, 55.0, 70.0, 25.0),
    TrainingSample::new(10.0, 0, 23.0, 45.0, 68.0, 18.0),
    TrainingSample::new(300.0, 2, 26.0, 70.0, 85.0, 5.0),
    TrainingSample::new(50.0, 4, 19.0, 35.0, 62.0, 28.0),
    TrainingSample::new(100.0, 1, 21.0, 50.0, 75.0, 15.0),
];
