use serde::Serialize;

use super::Rect;

/// Area ratio at or above which an object is reported as near.
pub const NEAR_THRESHOLD: f32 = 0.15;
/// Area ratio at or above which an object is reported as medium distance.
pub const MEDIUM_THRESHOLD: f32 = 0.03;

/// Horizontal third of the frame an object's center falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionBucket {
    Left,
    Center,
    Right,
}

/// Coarse distance estimated from how much of the frame a box covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceBucket {
    Near,
    Medium,
    Far,
}

/// Bucket a box by the horizontal position of its center.
///
/// A center lying exactly on a third boundary counts as `Center`. A frame with
/// no width has no thirds, so everything is `Center`.
pub fn position_bucket(bbox: &Rect, frame_width: u32, _frame_height: u32) -> PositionBucket {
    let frame_width = frame_width as f32;
    if frame_width <= 0.0 {
        return PositionBucket::Center;
    }

    // compare in thirds-space to avoid rounding the boundaries
    let scaled = bbox.center().0 * 3.0;
    if scaled < frame_width {
        PositionBucket::Left
    } else if scaled > 2.0 * frame_width {
        PositionBucket::Right
    } else {
        PositionBucket::Center
    }
}

/// Bucket a box by area ratio using the default thresholds.
pub fn distance_bucket(bbox: &Rect, frame_width: u32, frame_height: u32) -> DistanceBucket {
    DistanceThresholds::default().classify(bbox, frame_width, frame_height)
}

/// Area-ratio cut-offs for [`DistanceBucket`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceThresholds {
    pub near: f32,
    pub medium: f32,
}

impl Default for DistanceThresholds {
    fn default() -> Self {
        Self {
            near: NEAR_THRESHOLD,
            medium: MEDIUM_THRESHOLD,
        }
    }
}

impl DistanceThresholds {
    /// Classify `bbox` by the share of the frame it covers.
    pub fn classify(&self, bbox: &Rect, frame_width: u32, frame_height: u32) -> DistanceBucket {
        let frame_area = frame_width as f32 * frame_height as f32;
        if frame_area <= 0.0 {
            return DistanceBucket::Far;
        }

        let area_ratio = bbox.area() / frame_area;
        if area_ratio >= self.near {
            DistanceBucket::Near
        } else if area_ratio >= self.medium {
            DistanceBucket::Medium
        } else {
            DistanceBucket::Far
        }
    }
}
