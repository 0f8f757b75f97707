use std::collections::HashMap;

/// Cooldown bookkeeping, written only after an announcement is emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnouncementState {
    /// When anything was last announced
    pub last_global_speak_at: Option<u64>,
    /// When each label was last announced
    pub last_spoken_at_by_label: HashMap<String, u64>,
}

impl AnnouncementState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `now` is still inside the global cooldown window.
    pub fn global_cooling(&self, now: u64, cooldown_ms: u64) -> bool {
        self.last_global_speak_at
            .is_some_and(|last| now.saturating_sub(last) < cooldown_ms)
    }

    /// Whether `label` was announced less than `cooldown_ms` before `now`.
    pub fn label_cooling(&self, label: &str, now: u64, cooldown_ms: u64) -> bool {
        self.last_spoken_at_by_label
            .get(label)
            .is_some_and(|&last| now.saturating_sub(last) < cooldown_ms)
    }

    pub fn record(&mut self, label: &str, now: u64) {
        self.last_global_speak_at = Some(now);
        self.last_spoken_at_by_label.insert(label.to_string(), now);
    }

    pub fn reset(&mut self) {
        self.last_global_speak_at = None;
        self.last_spoken_at_by_label.clear();
    }
}
