//! Pure box geometry: overlap scoring and coarse spatial bucketing.

mod bucket;
mod rect;

pub use bucket::{
    DistanceBucket, DistanceThresholds, MEDIUM_THRESHOLD, NEAR_THRESHOLD, PositionBucket,
    distance_bucket, position_bucket,
};
pub use rect::{Rect, iou, iou_batch};
