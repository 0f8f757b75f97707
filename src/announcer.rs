//! Announcement arbitration: which confirmed object to speak about, and when.

mod decision;
mod haptics;
mod phrasing;
mod state;

pub use decision::{AnnouncementIntent, Announcer};
pub use haptics::{DEFAULT_HAPTIC_PATTERN, haptic_pattern};
pub use phrasing::{FirstPhrase, FixedPhrase, PhraseSelector, SeededPhrase, compose_phrase};
pub use state::AnnouncementState;
