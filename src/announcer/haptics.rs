use phf::phf_map;

/// Vibration used for labels without a dedicated pattern (ms on/off).
pub const DEFAULT_HAPTIC_PATTERN: &[u32] = &[200];

static PATTERNS: phf::Map<&'static str, &'static [u32]> = phf_map! {
    "person" => &[100, 50, 100],
    "car" => &[400, 100, 400],
    "bus" => &[400, 100, 400],
    "truck" => &[400, 100, 400],
    "motorcycle" => &[300, 100, 300],
    "bicycle" => &[150, 50, 150, 50, 150],
    "traffic light" => &[50, 50, 50, 50, 300],
    "stop sign" => &[500],
    "dog" => &[80, 40, 80, 40, 80],
    "cat" => &[80, 40, 80],
    "stairs" => &[600, 100, 600],
    "chair" => &[60],
    "bench" => &[60, 60, 60],
};

/// On/off vibration durations in milliseconds for a canonical label.
pub fn haptic_pattern(label: &str) -> Vec<u32> {
    PATTERNS
        .get(label)
        .copied()
        .unwrap_or(DEFAULT_HAPTIC_PATTERN)
        .to_vec()
}
