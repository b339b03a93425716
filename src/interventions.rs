//! The rule engine that maps the inputs and the predicted ratio to coaching
//! interventions.
//!
//! Rules 1 to 5 are independent and fire in a fixed order. The low activity
//! rule is only considered when the high intensity exercise rule did not fire.

use crate::features::FeatureVector;
use std::fmt;

/// The first line of every intervention list.
pub const HEADER: &str = "Recommended interventions:";

/// Bedroom temperatures at or above this call for cooling.
pub const WARM_ROOM_C: f64 = 23.0;
/// Bedroom temperatures at or below this call for heating.
pub const COLD_ROOM_C: f64 = 18.0;
pub const NOISY_ROOM_DB: f64 = 50.0;
/// Ratios below this trigger the lighting intervention.
pub const LOW_RATIO: f64 = 20.0;
pub const HIGH_CAFFEINE_MG: f64 = 150.0;
pub const HIGH_EXERCISE: f64 = 4.0;
pub const LOW_EXERCISE: f64 = 1.0;
/// Ratios below this, with no exercise, trigger the activity intervention.
pub const LOW_ACTIVITY_RATIO: f64 = 25.0;
/// Heart rates strictly above this count as poorly relaxed.
pub const RELAXED_HEART_RATE: f64 = 75.0;

/// A single coaching recommendation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Intervention {
    /// Move the bedroom toward 19-20°C. Carries the current temperature.
    Temperature(f64),
    /// Mask the room noise with white noise or meditation audio.
    Noise,
    /// Switch to warm light that supports melatonin release.
    Lighting,
    /// Wind down with herbal tea after a lot of caffeine.
    Caffeine,
    /// Calm down with a breathing exercise after hard exercise.
    Breathing,
    /// Get aerobic activity during the day.
    Activity,
}

impl fmt::Display for Intervention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intervention::Temperature(t) => write!(
                f,
                "Temperature: the bedroom is at {}°C, adjust it toward the \
                 19–20°C band.",
                t
            ),
            Intervention::Noise => f.write_str(
                "Noise: play white noise or meditation audio to mask the \
                 room noise.",
            ),
            Intervention::Lighting => f.write_str(
                "Lighting: switch to warm, red-toned light to help melatonin \
                 release.",
            ),
            Intervention::Caffeine => f.write_str(
                "Caffeine: sip a relaxing herbal tea and let your heart rate \
                 settle.",
            ),
            Intervention::Breathing => f.write_str(
                "Exercise: do a 5-minute breathing exercise in the hour \
                 before bed to lower your heart rate.",
            ),
            Intervention::Activity => f.write_str(
                "Activity: add some aerobic activity during the day to deepen \
                 your sleep.",
            ),
        }
    }
}

/// Return the interventions that fire for 'features' and 'ratio', in display
/// order.
pub fn triggered(features: &FeatureVector, ratio: f64) -> Vec<Intervention> {
    let mut list = Vec::new();

    let temp = features.temperature_c;
    if temp >= WARM_ROOM_C || temp <= COLD_ROOM_C {
        list.push(Intervention::Temperature(temp));
    }
    if features.noise_db >= NOISY_ROOM_DB {
        list.push(Intervention::Noise);
    }
    if ratio < LOW_RATIO {
        list.push(Intervention::Lighting);
    }
    if features.caffeine_mg >= HIGH_CAFFEINE_MG {
        list.push(Intervention::Caffeine);
    }
    if features.exercise_intensity >= HIGH_EXERCISE {
        list.push(Intervention::Breathing);
    } else if features.exercise_intensity < LOW_EXERCISE
        && ratio < LOW_ACTIVITY_RATIO
    {
        list.push(Intervention::Activity);
    }

    list
}

/// Return the intervention list for display: the header followed by one line
/// per triggered intervention. Never empty.
pub fn evaluate(features: &FeatureVector, ratio: f64) -> Vec<String> {
    let mut lines = vec![HEADER.to_string()];
    lines.extend(triggered(features, ratio).iter().map(|i| i.to_string()));
    lines
}

/// Describes how relaxed the heart rate is before bed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HeartRateStatus {
    LowRelaxation,
    Stable,
}

impl HeartRateStatus {
    pub fn from_heart_rate(bpm: f64) -> Self {
        if bpm > RELAXED_HEART_RATE {
            HeartRateStatus::LowRelaxation
        } else {
            HeartRateStatus::Stable
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            HeartRateStatus::LowRelaxation => {
                "Heart rate: on the high side, relaxation is low."
            }
            HeartRateStatus::Stable => {
                "Heart rate: stable, you are well prepared for sleep."
            }
        }
    }
}

/// Return the heart rate narrative for 'features'. Exactly one of the two
/// messages is produced.
pub fn heart_rate_narrative(features: &FeatureVector) -> &'static str {
    HeartRateStatus::from_heart_rate(features.avg_heart_rate).message()
}
