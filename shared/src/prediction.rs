use serde::Deserialize;
use strum_macros::{AsRefStr, Display};

pub const HIGH_CONFIDENCE: f64 = 0.8;
pub const MEDIUM_CONFIDENCE: f64 = 0.5;

/// Disease label and confidence returned by the prediction service.
///
/// Deserialization goes through [`RawPrediction`] so a body that parses as
/// JSON but carries a blank label or an out-of-range confidence is rejected.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(try_from = "RawPrediction")]
pub struct Prediction {
    pub disease: String,
    pub confidence: f64,
}

#[derive(Deserialize)]
struct RawPrediction {
    disease: String,
    confidence: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictionError {
    #[error("disease label is empty")]
    EmptyDisease,
    #[error("confidence {0} is outside [0, 1]")]
    ConfidenceOutOfRange(f64),
}

impl TryFrom<RawPrediction> for Prediction {
    type Error = PredictionError;

    fn try_from(raw: RawPrediction) -> Result<Self, Self::Error> {
        Prediction::new(raw.disease, raw.confidence)
    }
}

impl Prediction {
    pub fn new(disease: impl Into<String>, confidence: f64) -> Result<Self, PredictionError> {
        let disease = disease.into().trim().to_string();
        if disease.is_empty() {
            return Err(PredictionError::EmptyDisease);
        }
        if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
            return Err(PredictionError::ConfidenceOutOfRange(confidence));
        }
        Ok(Self {
            disease,
            confidence,
        })
    }

    pub fn tier(&self) -> ConfidenceTier {
        ConfidenceTier::from_confidence(self.confidence)
    }

    pub fn percent(&self) -> f64 {
        self.confidence * 100.0
    }

    /// Percentage with one decimal, e.g. `73.0%`.
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.percent())
    }

    pub fn bar_style(&self) -> String {
        format!("width: {}%", self.percent())
    }
}

/// Display bucket for a confidence value. The lowercase name doubles as the
/// CSS class of the confidence bar and message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= HIGH_CONFIDENCE {
            Self::High
        } else if confidence >= MEDIUM_CONFIDENCE {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::High => "High confidence - Result is reliable",
            Self::Medium => "Medium confidence - Consider retaking image",
            Self::Low => "Low confidence - Please retake with better lighting",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::High => "✓",
            Self::Medium | Self::Low => "⚠",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_are_exact() {
        assert_eq!(ConfidenceTier::from_confidence(1.0), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::from_confidence(0.8), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::from_confidence(0.799_999), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_confidence(0.5), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_confidence(0.499_999), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::from_confidence(0.0), ConfidenceTier::Low);
    }

    #[test]
    fn tier_names_are_css_classes() {
        assert_eq!(ConfidenceTier::High.to_string(), "high");
        assert_eq!(ConfidenceTier::Medium.as_ref(), "medium");
        assert_eq!(ConfidenceTier::Low.as_ref(), "low");
    }

    #[test]
    fn tier_messages() {
        assert!(ConfidenceTier::High.message().contains("reliable"));
        assert!(ConfidenceTier::Medium.message().contains("Consider retaking"));
        assert!(ConfidenceTier::Low.message().contains("better lighting"));
    }

    #[test]
    fn percent_label_has_one_decimal() {
        let prediction = Prediction::new("Early Blight", 0.73).unwrap();
        assert_eq!(prediction.percent_label(), "73.0%");
        assert_eq!(prediction.tier(), ConfidenceTier::Medium);

        let prediction = Prediction::new("Healthy", 0.98765).unwrap();
        assert_eq!(prediction.percent_label(), "98.8%");
    }

    #[test]
    fn bar_style_scales_to_percent() {
        let prediction = Prediction::new("Leaf Mold", 0.25).unwrap();
        assert_eq!(prediction.bar_style(), "width: 25%");
    }

    #[test]
    fn parses_valid_body_and_ignores_extra_fields() {
        let prediction: Prediction = serde_json::from_str(
            r#"{"disease":"Late Blight","confidence":0.91,"model":"v2"}"#,
        )
        .unwrap();
        assert_eq!(prediction, Prediction::new("Late Blight", 0.91).unwrap());
    }

    #[test]
    fn rejects_out_of_range_confidence() {
        let err = serde_json::from_str::<Prediction>(r#"{"disease":"X","confidence":1.5}"#);
        assert!(err.is_err());
        assert_eq!(
            Prediction::new("X", -0.1),
            Err(PredictionError::ConfidenceOutOfRange(-0.1))
        );
        assert!(Prediction::new("X", f64::NAN).is_err());
    }

    #[test]
    fn rejects_blank_disease() {
        assert_eq!(Prediction::new("   ", 0.5), Err(PredictionError::EmptyDisease));
        assert!(serde_json::from_str::<Prediction>(r#"{"disease":"","confidence":0.5}"#).is_err());
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(serde_json::from_str::<Prediction>(r#"{"disease":"Septoria"}"#).is_err());
        assert!(serde_json::from_str::<Prediction>(r#"{"confidence":0.4}"#).is_err());
    }
}
