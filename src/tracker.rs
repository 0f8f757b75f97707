mod iou_tracker;
mod matching;
mod track;
mod track_state;

pub use iou_tracker::{
    CONFIRM_FRAMES, TRACKING_IOU_THRESHOLD, Tracker, TrackerConfig, UNCONFIRM_FRAMES,
};
pub use matching::{AssignmentResult, Detection, greedy_assignment};
pub use track::Track;
pub use track_state::TrackState;
