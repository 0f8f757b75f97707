//! AnnouncementPipeline for combining detection, the engine and an output sink.

use std::fmt::Display;

use tracing::warn;

use crate::announcer::{FirstPhrase, PhraseSelector};
use crate::engine::{CycleResult, Engine};
use crate::settings::Settings;

use super::{AnnouncementSink, DetectionSource};

/// Drives frames through a detector, the engine and a sink.
///
/// Collaborator failures never stop the loop: a failed detection counts as an
/// empty frame, and a failed announcement is logged and dropped.
pub struct AnnouncementPipeline<D, K, S = FirstPhrase> {
    detector: D,
    sink: K,
    engine: Engine<S>,
}

impl<D, K> AnnouncementPipeline<D, K, FirstPhrase>
where
    D: DetectionSource,
    D::Error: Display,
    K: AnnouncementSink,
    K::Error: Display,
{
    /// Create a pipeline with a fresh engine using the first phrasing.
    pub fn new(detector: D, sink: K) -> Self {
        Self::with_engine(detector, sink, Engine::new())
    }
}

impl<D, K, S> AnnouncementPipeline<D, K, S>
where
    D: DetectionSource,
    D::Error: Display,
    K: AnnouncementSink,
    K::Error: Display,
    S: PhraseSelector,
{
    pub fn with_engine(detector: D, sink: K, engine: Engine<S>) -> Self {
        Self {
            detector,
            sink,
            engine,
        }
    }

    /// Process a single frame and forward any announcement to the sink.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `settings` - Snapshot valid for this frame
    /// * `now` - Monotonic timestamp in milliseconds
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
        settings: &Settings,
        now: u64,
    ) -> CycleResult {
        let detections = match self.detector.detect(input, width, height) {
            Ok(detections) => detections,
            Err(e) => {
                warn!(error = %e, now, "detector failed, treating frame as empty");
                Vec::new()
            }
        };

        let result = self.engine.cycle(&detections, width, height, settings, now);

        if let Some(intent) = &result.announcement {
            if let Err(e) = self.sink.announce(intent) {
                warn!(error = %e, label = %intent.label, "announcement sink failed");
            }
        }

        result
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Get a reference to the underlying engine.
    pub fn engine(&self) -> &Engine<S> {
        &self.engine
    }

    /// Get a mutable reference to the underlying engine.
    pub fn engine_mut(&mut self) -> &mut Engine<S> {
        &mut self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::announcer::AnnouncementIntent;
    use crate::tracker::Detection;

    struct MockDetector {
        frames: Vec<Result<Vec<Detection>, String>>,
    }

    impl DetectionSource for MockDetector {
        type Error = String;

        fn detect(
            &mut self,
            _input: &[u8],
            _width: u32,
            _height: u32,
        ) -> Result<Vec<Detection>, Self::Error> {
            if self.frames.is_empty() {
                Ok(Vec::new())
            } else {
                self.frames.remove(0)
            }
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        spoken: Vec<AnnouncementIntent>,
        fail: bool,
    }

    impl AnnouncementSink for RecordingSink {
        type Error = String;

        fn announce(&mut self, intent: &AnnouncementIntent) -> Result<(), Self::Error> {
            if self.fail {
                return Err("speech engine unavailable".to_string());
            }
            self.spoken.push(intent.clone());
            Ok(())
        }
    }

    fn person() -> Detection {
        Detection::from_tlbr("person", 10.0, 10.0, 60.0, 110.0, 0.8)
    }

    #[test]
    fn test_pipeline_forwards_announcement() {
        let detector = MockDetector {
            frames: vec![Ok(vec![person()]), Ok(vec![person()])],
        };
        let mut pipeline = AnnouncementPipeline::new(detector, RecordingSink::default());
        let settings = Settings::default();

        assert!(pipeline.process_frame(&[], 640, 480, &settings, 0).announcement.is_none());
        assert!(pipeline.process_frame(&[], 640, 480, &settings, 100).announcement.is_some());
        assert_eq!(pipeline.sink().spoken.len(), 1);
        assert_eq!(pipeline.sink().spoken[0].label, "person");
    }

    #[test]
    fn test_detector_failure_counts_as_empty_frame() {
        let detector = MockDetector {
            frames: vec![
                Ok(vec![person()]),
                Err("model not loaded".to_string()),
                Ok(vec![person()]),
            ],
        };
        let mut pipeline = AnnouncementPipeline::new(detector, RecordingSink::default());
        let settings = Settings::default();

        pipeline.process_frame(&[], 640, 480, &settings, 0);
        let failed = pipeline.process_frame(&[], 640, 480, &settings, 100);
        assert_eq!(failed.tracks.len(), 1);
        assert_eq!(failed.tracks[0].lost_count, 1);

        let recovered = pipeline.process_frame(&[], 640, 480, &settings, 200);
        assert_eq!(recovered.tracks[0].id, 1);
        assert!(recovered.announcement.is_some());
    }

    #[test]
    fn test_sink_failure_does_not_stop_pipeline() {
        let detector = MockDetector {
            frames: vec![Ok(vec![person()]), Ok(vec![person()])],
        };
        let sink = RecordingSink {
            fail: true,
            ..RecordingSink::default()
        };
        let mut pipeline = AnnouncementPipeline::new(detector, sink);
        let settings = Settings::default();

        pipeline.process_frame(&[], 640, 480, &settings, 0);
        let result = pipeline.process_frame(&[], 640, 480, &settings, 100);
        assert!(result.announcement.is_some());
        assert!(pipeline.engine().state().last_global_speak_at.is_some());
    }
}
