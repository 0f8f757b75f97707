/// Track state enumeration for object tracking lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackState {
    /// Newly created track, not yet seen often enough to trust
    #[default]
    Tentative,
    /// Seen on enough cycles to be treated as a real object
    Confirmed,
    /// Missed for too many cycles; evicted from the live set
    Removed,
}
