//! Tracking and announcement arbitration for assistive scene narration.
//!
//! Per-frame detections go in; stable tracks and at most one announcement
//! intent per cycle come out. The crate never speaks, vibrates or reads a
//! clock itself: the host supplies `now` and dispatches the intent.

pub mod announcer;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod integration;
pub mod labels;
pub mod settings;
pub mod tracker;

pub use announcer::{
    AnnouncementIntent, AnnouncementState, Announcer, FirstPhrase, FixedPhrase, PhraseSelector,
    SeededPhrase,
};
pub use engine::{CycleResult, Engine};
pub use error::{EngineError, Result};
pub use geometry::{DistanceBucket, PositionBucket, Rect};
pub use integration::{AnnouncementPipeline, AnnouncementSink, DetectionBuilder, DetectionSource};
pub use settings::{DescriptionMode, Language, Settings};
pub use tracker::{Detection, Track, TrackState, Tracker, TrackerConfig};
