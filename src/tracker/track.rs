//! Single tracked object.

use serde::Serialize;

use crate::geometry::Rect;
use crate::tracker::matching::Detection;
use crate::tracker::track_state::TrackState;

/// One physical object followed across cycles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Track {
    /// Unique track identifier, monotonic per tracker
    pub id: u64,
    /// Normalized label of the detections feeding this track
    pub label: String,
    /// Last matched bounding box
    pub bbox: Rect,
    /// Confidence of the last matched detection
    pub score: f32,
    /// Number of cycles with a matching detection, including the first
    #[serde(skip)]
    pub seen_count: u32,
    /// Consecutive cycles without a matching detection
    #[serde(skip)]
    pub lost_count: u32,
    /// Current lifecycle state
    pub state: TrackState,
    /// Timestamp (ms) of the last matching detection
    #[serde(skip)]
    pub last_seen_at: u64,
}

impl Track {
    /// Start a tentative track from an unmatched detection.
    pub fn new(id: u64, detection: &Detection, now: u64) -> Self {
        Self {
            id,
            label: detection.class.clone(),
            bbox: detection.bbox,
            score: detection.score,
            seen_count: 1,
            lost_count: 0,
            state: TrackState::Tentative,
            last_seen_at: now,
        }
    }

    /// Absorb a matching detection.
    pub fn update(&mut self, detection: &Detection, now: u64) {
        self.bbox = detection.bbox;
        self.score = detection.score;
        self.last_seen_at = now;
        self.seen_count = self.seen_count.saturating_add(1);
        self.lost_count = 0;
    }

    pub fn mark_missed(&mut self) {
        self.lost_count = self.lost_count.saturating_add(1);
    }

    pub fn mark_confirmed(&mut self) {
        self.state = TrackState::Confirmed;
    }

    pub fn mark_removed(&mut self) {
        self.state = TrackState::Removed;
    }

    #[inline]
    pub fn is_confirmed(&self) -> bool {
        self.state == TrackState::Confirmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_lifecycle_counters() {
        let det = Detection::new("person", Rect::new(0.0, 0.0, 10.0, 10.0), 0.7);
        let mut track = Track::new(4, &det, 100);
        assert_eq!(track.seen_count, 1);
        assert_eq!(track.state, TrackState::Tentative);

        track.mark_missed();
        track.mark_missed();
        assert_eq!(track.lost_count, 2);

        let moved = Detection::new("person", Rect::new(2.0, 0.0, 10.0, 10.0), 0.9);
        track.update(&moved, 250);
        assert_eq!(track.seen_count, 2);
        assert_eq!(track.lost_count, 0);
        assert_eq!(track.last_seen_at, 250);
        assert_eq!(track.score, 0.9);
        assert_eq!(track.bbox, moved.bbox);
    }
}
