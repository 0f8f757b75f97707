//! Seams to the collaborators around the engine.
//!
//! The detector oracle and the speech/haptic sink live outside this crate.
//! These traits describe what the engine needs from them, and
//! [`AnnouncementPipeline`] drives one frame through detector, engine and sink.

mod builder;
mod detector;
mod pipeline;
mod sink;

pub use builder::DetectionBuilder;
pub use detector::DetectionSource;
pub use pipeline::AnnouncementPipeline;
pub use sink::AnnouncementSink;
