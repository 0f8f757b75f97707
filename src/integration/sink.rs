use crate::announcer::AnnouncementIntent;

/// Consumer of announcement intents: speech synthesis, vibration, or both.
///
/// Implementations own hardware rate limiting and any fallback (a plain tone
/// when no voice is available, for instance).
pub trait AnnouncementSink {
    type Error;

    fn announce(&mut self, intent: &AnnouncementIntent) -> Result<(), Self::Error>;
}
