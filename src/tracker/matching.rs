//! Matching utilities for label-aware greedy association.

use ndarray::Array2;
use serde::Deserialize;

use crate::geometry::Rect;

/// Detection input for the tracker.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Detection {
    /// Detector class name (normalized before it reaches the tracker)
    pub class: String,
    /// Detection confidence score
    pub score: f32,
    /// Bounding box in TLWH format
    pub bbox: Rect,
}

impl Detection {
    pub fn new(class: impl Into<String>, bbox: Rect, score: f32) -> Self {
        Self {
            class: class.into(),
            score,
            bbox,
        }
    }

    /// Build a detection from corner coordinates (x1, y1, x2, y2).
    pub fn from_tlbr(class: impl Into<String>, x1: f32, y1: f32, x2: f32, y2: f32, score: f32) -> Self {
        Self::new(class, Rect::from_tlbr(x1, y1, x2, y2), score)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentResult {
    pub matches: Vec<(usize, usize)>,
    pub unmatched_tracks: Vec<usize>,
    pub unmatched_detections: Vec<usize>,
}

/// Greedy per-detection assignment over an IoU matrix of shape (tracks, detections).
///
/// Detections are visited in order. Each takes the still-free eligible track
/// with the highest IoU, provided it reaches `thresh`. On equal IoU the lower
/// row wins, so rows must be ordered by track id.
pub fn greedy_assignment<F>(ious: &Array2<f32>, thresh: f32, eligible: F) -> AssignmentResult
where
    F: Fn(usize, usize) -> bool,
{
    let (num_rows, num_cols) = ious.dim();
    let mut row_taken = vec![false; num_rows];
    let mut matches = Vec::new();
    let mut unmatched_detections = Vec::new();

    for col in 0..num_cols {
        let mut best: Option<(usize, f32)> = None;
        for row in 0..num_rows {
            let iou = ious[[row, col]];
            if row_taken[row] || iou.is_nan() || !eligible(row, col) {
                continue;
            }
            match best {
                Some((_, best_iou)) if iou <= best_iou => {}
                _ => best = Some((row, iou)),
            }
        }

        match best {
            Some((row, iou)) if iou >= thresh => {
                row_taken[row] = true;
                matches.push((row, col));
            }
            _ => unmatched_detections.push(col),
        }
    }

    let unmatched_tracks = row_taken
        .iter()
        .enumerate()
        .filter_map(|(i, &taken)| if taken { None } else { Some(i) })
        .collect();

    AssignmentResult {
        matches,
        unmatched_tracks,
        unmatched_detections,
    }
}
