use crate::detection::{DetectionReport, TargetId};
use serde::Serialize;

pub const EXPORT_FILE_NAME: &str = "laser_coordinates.json";

/// Downloadable coordinate file for the laser system.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoordinateExport {
    pub total_targets: usize,
    pub targets: Vec<ExportedTarget>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportedTarget {
    pub target_id: TargetId,
    pub class: String,
    pub confidence: f64,
    pub laser_coordinates: LaserPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaserPoint {
    pub x: f64,
    pub y: f64,
    pub unit: &'static str,
}

impl From<&DetectionReport> for CoordinateExport {
    fn from(report: &DetectionReport) -> Self {
        let targets: Vec<ExportedTarget> = report
            .targets
            .iter()
            .map(|t| ExportedTarget {
                target_id: t.target_id.clone(),
                class: t.class_name.clone(),
                confidence: t.confidence,
                laser_coordinates: LaserPoint {
                    x: t.x,
                    y: t.y,
                    unit: "mm",
                },
            })
            .collect();

        Self {
            total_targets: targets.len(),
            targets,
        }
    }
}

impl CoordinateExport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
