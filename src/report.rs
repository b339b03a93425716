//! Bundles a prediction and its interventions into the result the host shows
//! after every input change.

use crate::features::FeatureVector;
use crate::interventions::{evaluate, heart_rate_narrative};
use crate::predictor::Predictor;
use std::fmt;

/// A qualitative label for a deep sleep ratio.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tier {
    Optimal,
    NeedsImprovement,
    SevereDegradation,
}

impl Tier {
    pub const OPTIMAL_RATIO: f64 = 25.0;
    pub const ACCEPTABLE_RATIO: f64 = 15.0;

    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= Self::OPTIMAL_RATIO {
            Tier::Optimal
        } else if ratio >= Self::ACCEPTABLE_RATIO {
            Tier::NeedsImprovement
        } else {
            Tier::SevereDegradation
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Optimal => "optimal",
            Tier::NeedsImprovement => "needs improvement",
            Tier::SevereDegradation => "severe degradation",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the host renders for one set of inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct Assessment {
    /// The clamped deep sleep ratio (%).
    pub ratio: f64,
    pub tier: Tier,
    pub heart_rate: &'static str,
    /// The header line followed by the triggered interventions.
    pub interventions: Vec<String>,
}

/// Run the predictor and the rule engine over 'features'.
pub fn assess(predictor: &Predictor, features: &FeatureVector) -> Assessment {
    let ratio = predictor.predict(features);
    let assessment = Assessment {
        ratio,
        tier: Tier::from_ratio(ratio),
        heart_rate: heart_rate_narrative(features),
        interventions: evaluate(features, ratio),
    };
    log::debug!(
        "Assessed {:?}: {:.1}% ({}), {} interventions.",
        features,
        ratio,
        assessment.tier,
        assessment.interventions.len() - 1
    );
    assessment
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Predicted deep sleep ratio: {:.1}%", self.ratio)?;
        writeln!(f, "Outlook: {}", self.tier)?;
        writeln!(f, "{}", self.heart_rate)?;
        let mut lines = self.interventions.iter();
        if let Some(header) = lines.next() {
            writeln!(f, "{}", header)?;
        }
        for line in lines {
            writeln!(f, "- {}", line)?;
        }
        Ok(())
    }
}
