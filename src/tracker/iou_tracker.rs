//! Label-aware greedy IoU tracker with confirm/lose hysteresis.

use tracing::{debug, trace};

use crate::geometry::{Rect, iou_batch};
use crate::tracker::matching::{self, AssignmentResult, Detection};
use crate::tracker::track::Track;
use crate::tracker::track_state::TrackState;

/// Minimum IoU for a detection to continue an existing track.
pub const TRACKING_IOU_THRESHOLD: f32 = 0.3;
/// Matched cycles needed before a track is confirmed.
pub const CONFIRM_FRAMES: u32 = 2;
/// Consecutive missed cycles after which a track is dropped.
pub const UNCONFIRM_FRAMES: u32 = 3;

/// Configuration for the [`Tracker`].
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    pub iou_threshold: f32,
    pub confirm_frames: u32,
    pub unconfirm_frames: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            iou_threshold: TRACKING_IOU_THRESHOLD,
            confirm_frames: CONFIRM_FRAMES,
            unconfirm_frames: UNCONFIRM_FRAMES,
        }
    }
}

/// Owns the live track set and the id counter.
///
/// Association is greedy per detection rather than a global assignment, which
/// keeps the per-frame cost bounded and the outcome deterministic.
#[derive(Debug, Clone)]
pub struct Tracker {
    /// Live tracks, always ordered by ascending id
    tracks: Vec<Track>,
    next_id: u64,
    config: TrackerConfig,
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl Tracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            tracks: Vec::new(),
            next_id: 1,
            config,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Advance one cycle and return the full live set.
    pub fn update(&mut self, detections: &[Detection], now: u64) -> &[Track] {
        let track_rects: Vec<Rect> = self.tracks.iter().map(|t| t.bbox).collect();
        let det_rects: Vec<Rect> = detections.iter().map(|d| d.bbox).collect();
        let ious = iou_batch(&track_rects, &det_rects);

        let tracks = &self.tracks;
        let AssignmentResult {
            matches,
            unmatched_tracks,
            unmatched_detections,
        } = matching::greedy_assignment(&ious, self.config.iou_threshold, |row, col| {
            tracks[row].label == detections[col].class
        });

        for (itrack, idet) in matches {
            let track = &mut self.tracks[itrack];
            track.update(&detections[idet], now);
            trace!(id = track.id, label = %track.label, "track matched");
        }

        for itrack in unmatched_tracks {
            self.tracks[itrack].mark_missed();
        }

        for idet in unmatched_detections {
            let track = Track::new(self.next_id, &detections[idet], now);
            self.next_id += 1;
            debug!(id = track.id, label = %track.label, score = track.score, "new tentative track");
            self.tracks.push(track);
        }

        let confirm_frames = self.config.confirm_frames;
        let unconfirm_frames = self.config.unconfirm_frames;
        for track in self.tracks.iter_mut() {
            if track.state == TrackState::Tentative && track.seen_count >= confirm_frames {
                track.mark_confirmed();
                debug!(id = track.id, label = %track.label, "track confirmed");
            }
            if track.lost_count >= unconfirm_frames {
                track.mark_removed();
                debug!(id = track.id, label = %track.label, lost = track.lost_count, "track removed");
            }
        }
        self.tracks.retain(|t| t.state != TrackState::Removed);

        &self.tracks
    }

    /// All live tracks, in id order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Live tracks that have passed confirmation.
    pub fn confirmed_tracks(&self) -> impl Iterator<Item = &Track> + '_ {
        self.tracks.iter().filter(|t| t.is_confirmed())
    }

    /// Drop every track and restart ids at 1.
    pub fn reset(&mut self) {
        self.tracks.clear();
        self.next_id = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn det(class: &str, x: f32, y: f32, w: f32, h: f32, score: f32) -> Detection {
        Detection::new(class, Rect::new(x, y, w, h), score)
    }

    #[test]
    fn test_new_track_is_tentative() {
        let mut tracker = Tracker::default();
        let tracks = tracker.update(&[det("person", 10.0, 10.0, 50.0, 100.0, 0.8)], 0);
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].id, 1);
        assert_eq!(tracks[0].state, TrackState::Tentative);
        assert_eq!(tracker.confirmed_tracks().count(), 0);
    }

    #[test]
    fn test_confirmation_keeps_id() {
        let mut tracker = Tracker::default();
        let d = det("person", 10.0, 10.0, 50.0, 100.0, 0.8);
        tracker.update(&[d.clone()], 0);
        let tracks = tracker.update(&[d], 100);
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].id, 1);
        assert_eq!(tracks[0].state, TrackState::Confirmed);
        assert_eq!(tracks[0].seen_count, 2);
        assert_eq!(tracks[0].last_seen_at, 100);
    }

    #[test]
    fn test_labels_never_cross_match() {
        let mut tracker = Tracker::default();
        tracker.update(&[det("dog", 0.0, 0.0, 100.0, 100.0, 0.9)], 0);
        let tracks = tracker.update(&[det("cat", 0.0, 0.0, 100.0, 100.0, 0.9)], 100);
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].label, "dog");
        assert_eq!(tracks[0].lost_count, 1);
        assert_eq!(tracks[1].label, "cat");
        assert_eq!(tracks[1].id, 2);
    }

    #[test]
    fn test_below_threshold_spawns_new_track() {
        let mut tracker = Tracker::default();
        tracker.update(&[det("car", 0.0, 0.0, 100.0, 100.0, 0.9)], 0);
        // IoU = 2500 / 17500 ~ 0.14
        let tracks = tracker.update(&[det("car", 50.0, 50.0, 100.0, 100.0, 0.9)], 100);
        assert_eq!(tracks.len(), 2);
        assert!(tracks.iter().all(|t| t.state == TrackState::Tentative));
    }

    #[test]
    fn test_equal_iou_prefers_oldest_track() {
        let mut tracker = Tracker::default();
        tracker.update(
            &[
                det("chair", 0.0, 0.0, 100.0, 100.0, 0.9),
                det("chair", 20.0, 0.0, 100.0, 100.0, 0.9),
            ],
            0,
        );
        // Equidistant from both: IoU 0.9/1.1 against each
        let tracks = tracker.update(&[det("chair", 10.0, 0.0, 100.0, 100.0, 0.7)], 100);
        assert_eq!(tracks[0].id, 1);
        assert_eq!(tracks[0].seen_count, 2);
        assert_eq!(tracks[1].id, 2);
        assert_eq!(tracks[1].lost_count, 1);
    }

    #[test]
    fn test_eviction_after_unconfirm_frames() {
        let mut tracker = Tracker::default();
        let d = det("person", 10.0, 10.0, 50.0, 100.0, 0.8);
        tracker.update(&[d.clone()], 0);
        tracker.update(&[d], 100);

        assert_eq!(tracker.update(&[], 200).len(), 1);
        assert_eq!(tracker.update(&[], 300).len(), 1);
        assert!(tracker.update(&[], 400).is_empty());
    }

    #[test]
    fn test_tentative_tracks_are_evicted_too() {
        let mut tracker = Tracker::default();
        tracker.update(&[det("bench", 0.0, 0.0, 10.0, 10.0, 0.4)], 0);
        for now in [100, 200] {
            assert_eq!(tracker.update(&[], now).len(), 1);
        }
        assert!(tracker.update(&[], 300).is_empty());
    }

    #[test]
    fn test_ids_keep_increasing_after_eviction() {
        let mut tracker = Tracker::default();
        tracker.update(&[det("cup", 0.0, 0.0, 10.0, 10.0, 0.5)], 0);
        for now in 1..=3 {
            tracker.update(&[], now);
        }
        let tracks = tracker.update(&[det("cup", 0.0, 0.0, 10.0, 10.0, 0.5)], 4);
        assert_eq!(tracks[0].id, 2);
    }

    #[test]
    fn test_degenerate_detection_never_matches() {
        let mut tracker = Tracker::default();
        tracker.update(&[det("cup", 5.0, 5.0, 0.0, 0.0, 1.5)], 0);
        let tracks = tracker.update(&[det("cup", 5.0, 5.0, 0.0, 0.0, 1.5)], 1);
        assert_eq!(tracks.len(), 2);
    }

    #[test]
    fn test_reset() {
        let mut tracker = Tracker::default();
        tracker.update(&[det("cup", 0.0, 0.0, 10.0, 10.0, 0.5)], 0);
        tracker.reset();
        assert!(tracker.tracks().is_empty());
        let tracks = tracker.update(&[det("cup", 0.0, 0.0, 10.0, 10.0, 0.5)], 1);
        assert_eq!(tracks[0].id, 1);
    }

    #[test]
    fn test_custom_config() {
        let mut tracker = Tracker::new(TrackerConfig {
            iou_threshold: 0.5,
            confirm_frames: 1,
            unconfirm_frames: 1,
        });
        let tracks = tracker.update(&[det("cup", 0.0, 0.0, 10.0, 10.0, 0.5)], 0);
        assert_eq!(tracks[0].state, TrackState::Confirmed);
        assert!(tracker.update(&[], 1).is_empty());
    }
}
