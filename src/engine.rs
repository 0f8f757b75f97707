//! One detection cycle: normalize, track, arbitrate.

use serde::Serialize;
use tracing::{debug, trace};

use crate::announcer::{AnnouncementIntent, AnnouncementState, Announcer, FirstPhrase, PhraseSelector};
use crate::labels;
use crate::settings::Settings;
use crate::tracker::{Detection, Track, Tracker};

/// Everything a cycle hands back to the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleResult {
    /// Full live track set after the update, in id order
    pub tracks: Vec<Track>,
    pub announcement: Option<AnnouncementIntent>,
}

/// Owns the track set and the announcement state.
///
/// Calls must be sequential; `&mut self` on [`Engine::cycle`] enforces a single
/// writer. The engine never reads a clock: every timestamp comes from `now`.
#[derive(Debug, Clone, Default)]
pub struct Engine<S = FirstPhrase> {
    tracker: Tracker,
    state: AnnouncementState,
    announcer: Announcer<S>,
}

impl Engine<FirstPhrase> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: PhraseSelector> Engine<S> {
    /// Engine with default tracker settings and the given phrasing strategy.
    pub fn with_selector(selector: S) -> Self {
        Self::from_parts(Tracker::default(), AnnouncementState::new(), Announcer::new(selector))
    }

    /// Assemble an engine from explicit state, e.g. to resume or to test.
    pub fn from_parts(tracker: Tracker, state: AnnouncementState, announcer: Announcer<S>) -> Self {
        Self {
            tracker,
            state,
            announcer,
        }
    }

    /// Run one cycle against the settings snapshot taken for it.
    pub fn cycle(
        &mut self,
        detections: &[Detection],
        frame_width: u32,
        frame_height: u32,
        settings: &Settings,
        now: u64,
    ) -> CycleResult {
        let normalized: Vec<Detection> = detections
            .iter()
            .filter(|d| d.score.is_finite())
            .map(|d| Detection {
                class: labels::normalize(&d.class),
                ..d.clone()
            })
            .collect();
        if normalized.len() != detections.len() {
            trace!(
                dropped = detections.len() - normalized.len(),
                "dropped detections with non-finite scores"
            );
        }

        let tracks = self.tracker.update(&normalized, now).to_vec();
        let announcement = self.announcer.decide(
            self.tracker.confirmed_tracks(),
            settings,
            &mut self.state,
            frame_width,
            frame_height,
            now,
        );

        debug!(
            detections = normalized.len(),
            tracks = tracks.len(),
            announced = announcement.is_some(),
            now,
            "cycle complete"
        );

        CycleResult {
            tracks,
            announcement,
        }
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    pub fn state(&self) -> &AnnouncementState {
        &self.state
    }

    pub fn announcer_mut(&mut self) -> &mut Announcer<S> {
        &mut self.announcer
    }

    /// Forget all tracks and cooldowns.
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.state.reset();
    }
}
