use serde::Serialize;
use tracing::{debug, trace};

use crate::announcer::haptics::haptic_pattern;
use crate::announcer::phrasing::{FirstPhrase, PhraseSelector, compose_phrase};
use crate::announcer::state::AnnouncementState;
use crate::geometry::{DistanceBucket, DistanceThresholds, PositionBucket, position_bucket};
use crate::settings::Settings;
use crate::tracker::Track;

/// What the host should say and buzz this cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementIntent {
    pub track_id: u64,
    pub label: String,
    pub phrase: String,
    pub position: PositionBucket,
    pub distance: DistanceBucket,
    pub score: f32,
    /// Vibration on/off durations in milliseconds
    pub haptic_pattern: Vec<u32>,
}

/// Picks at most one confirmed track per cycle to announce.
///
/// Holds only the phrasing strategy and distance thresholds; cooldown state is
/// passed in so the caller owns it.
#[derive(Debug, Clone, Default)]
pub struct Announcer<S = FirstPhrase> {
    selector: S,
    distance_thresholds: DistanceThresholds,
}

impl<S: PhraseSelector> Announcer<S> {
    pub fn new(selector: S) -> Self {
        Self {
            selector,
            distance_thresholds: DistanceThresholds::default(),
        }
    }

    pub fn with_distance_thresholds(mut self, thresholds: DistanceThresholds) -> Self {
        self.distance_thresholds = thresholds;
        self
    }

    pub fn selector_mut(&mut self) -> &mut S {
        &mut self.selector
    }

    /// Decide whether and what to announce.
    ///
    /// `state` is only written when an intent is returned.
    pub fn decide<'a, I>(
        &mut self,
        confirmed: I,
        settings: &Settings,
        state: &mut AnnouncementState,
        frame_width: u32,
        frame_height: u32,
        now: u64,
    ) -> Option<AnnouncementIntent>
    where
        I: IntoIterator<Item = &'a Track>,
    {
        let mut eligible = confirmed
            .into_iter()
            .filter(|t| t.score >= settings.min_score)
            .peekable();
        if eligible.peek().is_none() {
            return None;
        }

        if state.global_cooling(now, settings.global_cooldown_ms) {
            trace!(now, "announcement suppressed by global cooldown");
            return None;
        }

        let rank = |t: &Track| settings.priority_rank(&t.label).unwrap_or(usize::MAX);
        let candidate = eligible.min_by(|a, b| {
            rank(*a)
                .cmp(&rank(*b))
                .then_with(|| b.score.total_cmp(&a.score))
                .then_with(|| a.id.cmp(&b.id))
        })?;

        if state.label_cooling(&candidate.label, now, settings.per_label_cooldown_ms) {
            trace!(label = %candidate.label, now, "announcement suppressed by label cooldown");
            return None;
        }

        let position = position_bucket(&candidate.bbox, frame_width, frame_height);
        let distance = self
            .distance_thresholds
            .classify(&candidate.bbox, frame_width, frame_height);
        let phrase = compose_phrase(
            &candidate.label,
            position,
            distance,
            candidate.score,
            settings.language,
            settings.description_mode,
            &mut self.selector,
        );

        state.record(&candidate.label, now);
        debug!(id = candidate.id, label = %candidate.label, %phrase, "announcing");

        Some(AnnouncementIntent {
            track_id: candidate.id,
            label: candidate.label.clone(),
            phrase,
            position,
            distance,
            score: candidate.score,
            haptic_pattern: haptic_pattern(&candidate.label),
        })
    }
}
