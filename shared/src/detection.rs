use crate::error::SubmitError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body returned by `POST /detect`.
///
/// Failure bodies usually carry nothing but `error`, so every field
/// defaults when absent.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DetectionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub weed_count: u32,
    #[serde(default)]
    pub result_image: String,
    #[serde(default)]
    pub laser_coordinates: Vec<TargetRecord>,
}

/// Identifier of a target, shown exactly as the server sent it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum TargetId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetId::Number(n) => write!(f, "{}", n),
            TargetId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for TargetId {
    fn from(id: u64) -> Self {
        TargetId::Number(id.into())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TargetRecord {
    pub target_id: TargetId,
    /// Millimetres.
    pub x: f64,
    /// Millimetres.
    pub y: f64,
    pub class_name: String,
    pub confidence: f64,
}

impl TargetRecord {
    /// `0.873` renders as `87.3%`.
    pub fn confidence_percent(&self) -> String {
        format_percent(self.confidence)
    }
}

/// One decimal, exact ties rounded away from zero.
pub fn format_percent(probability: f64) -> String {
    let percent = probability * 100.0;
    let tenths = percent.abs() * 10.0;
    if tenths.fract() == 0.5 {
        let rounded = (tenths.floor() + 1.0) / 10.0;
        let sign = if percent < 0.0 { "-" } else { "" };
        return format!("{}{:.1}%", sign, rounded);
    }
    format!("{:.1}%", percent)
}

/// A successful detection, ready for the results view.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectionReport {
    pub weed_count: u32,
    pub result_image: String,
    pub targets: Vec<TargetRecord>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountMismatch {
    pub reported: u32,
    pub listed: usize,
}

impl fmt::Display for CountMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Server reported {} weeds but listed {} targets",
            self.reported, self.listed
        )
    }
}

impl DetectionReport {
    /// Targets are rendered regardless; this only flags the disagreement.
    pub fn count_mismatch(&self) -> Option<CountMismatch> {
        if self.weed_count as usize == self.targets.len() {
            None
        } else {
            Some(CountMismatch {
                reported: self.weed_count,
                listed: self.targets.len(),
            })
        }
    }
}

impl DetectionResponse {
    pub fn into_report(self) -> Result<DetectionReport, SubmitError> {
        if !self.success {
            let message = self
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(SubmitError::Rejected(message));
        }

        Ok(DetectionReport {
            weed_count: self.weed_count,
            result_image: self.result_image,
            targets: self.laser_coordinates,
        })
    }
}

/// Body of `GET /health`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub model_loaded: Option<bool>,
}

impl HealthStatus {
    pub fn model_missing(&self) -> bool {
        self.model_loaded == Some(false)
    }
}
