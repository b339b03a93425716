//! The five bedtime measurements the predictor consumes, and the input ranges
//! the presenting host is expected to respect.

use std::fmt;

/// The number of features in a feature vector.
pub const NUM_FEATURES: usize = 5;

/// An inclusive range of accepted input values, with the step between them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InputRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl InputRange {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        debug_assert!(step > 0.0, "input steps must be positive");
        debug_assert!(min <= max);
        Self { min, max, step }
    }

    /// Return True if 'val' is inside the range and lands on a step.
    pub fn contains(&self, val: f64) -> bool {
        if !(self.min..=self.max).contains(&val) {
            return false;
        }
        let steps = (val - self.min) / self.step;
        (steps - steps.round()).abs() < 1e-9
    }
}

/// Names the features, in the order the model was trained on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Feature {
    Caffeine,
    Exercise,
    Temperature,
    Noise,
    HeartRate,
}

impl Feature {
    pub const ALL: [Feature; NUM_FEATURES] = [
        Feature::Caffeine,
        Feature::Exercise,
        Feature::Temperature,
        Feature::Noise,
        Feature::HeartRate,
    ];

    /// The short name used on the command line and in watch mode.
    pub fn name(&self) -> &'static str {
        match self {
            Feature::Caffeine => "caffeine",
            Feature::Exercise => "exercise",
            Feature::Temperature => "temperature",
            Feature::Noise => "noise",
            Feature::HeartRate => "heart-rate",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Feature::Caffeine => "Caffeine intake (mg)",
            Feature::Exercise => {
                "Pre-sleep exercise intensity (0 none .. 5 high)"
            }
            Feature::Temperature => "Bedroom temperature (°C)",
            Feature::Noise => "Bedroom noise level (dB)",
            Feature::HeartRate => "Average heart rate before bed (BPM)",
        }
    }

    /// The range the host must keep this input within. The predictor itself
    /// accepts any value.
    pub fn range(&self) -> InputRange {
        match self {
            Feature::Caffeine => InputRange::new(0.0, 300.0, 10.0),
            Feature::Exercise => InputRange::new(0.0, 5.0, 1.0),
            Feature::Temperature => InputRange::new(15.0, 28.0, 1.0),
            Feature::Noise => InputRange::new(30.0, 80.0, 5.0),
            Feature::HeartRate => InputRange::new(50.0, 100.0, 1.0),
        }
    }

    pub fn from_name(name: &str) -> Option<Feature> {
        Feature::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The current inputs, one value per feature.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FeatureVector {
    pub caffeine_mg: f64,
    pub exercise_intensity: f64,
    pub temperature_c: f64,
    pub noise_db: f64,
    pub avg_heart_rate: f64,
}

impl Default for FeatureVector {
    /// The starting position of the inputs before the user touches them.
    fn default() -> Self {
        Self::new(100.0, 2.0, 22.0, 50.0, 70.0)
    }
}

impl FeatureVector {
    pub fn new(
        caffeine_mg: f64,
        exercise_intensity: f64,
        temperature_c: f64,
        noise_db: f64,
        avg_heart_rate: f64,
    ) -> Self {
        Self {
            caffeine_mg,
            exercise_intensity,
            temperature_c,
            noise_db,
            avg_heart_rate,
        }
    }

    /// Return the values in training order.
    pub fn to_array(&self) -> [f64; NUM_FEATURES] {
        [
            self.caffeine_mg,
            self.exercise_intensity,
            self.temperature_c,
            self.noise_db,
            self.avg_heart_rate,
        ]
    }

    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Caffeine => self.caffeine_mg,
            Feature::Exercise => self.exercise_intensity,
            Feature::Temperature => self.temperature_c,
            Feature::Noise => self.noise_db,
            Feature::HeartRate => self.avg_heart_rate,
        }
    }

    pub fn set(&mut self, feature: Feature, val: f64) {
        let slot = match feature {
            Feature::Caffeine => &mut self.caffeine_mg,
            Feature::Exercise => &mut self.exercise_intensity,
            Feature::Temperature => &mut self.temperature_c,
            Feature::Noise => &mut self.noise_db,
            Feature::HeartRate => &mut self.avg_heart_rate,
        };
        *slot = val;
    }
}

impl From<[f64; NUM_FEATURES]> for FeatureVector {
    fn from(v: [f64; NUM_FEATURES]) -> Self {
        Self::new(v[0], v[1], v[2], v[3], v[4])
    }
}
