//! Canonical label names for detector classes.

use phf::phf_map;

/// Detector spellings mapped to the canonical label used everywhere else.
static ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "cellphone" => "cell phone",
    "cell_phone" => "cell phone",
    "mobile phone" => "cell phone",
    "phone" => "cell phone",
    "people" => "person",
    "pedestrian" => "person",
    "man" => "person",
    "woman" => "person",
    "motorbike" => "motorcycle",
    "bike" => "bicycle",
    "aeroplane" => "airplane",
    "tvmonitor" => "tv",
    "tv monitor" => "tv",
    "television" => "tv",
    "sofa" => "couch",
    "diningtable" => "dining table",
    "pottedplant" => "potted plant",
    "trafficlight" => "traffic light",
    "traffic_light" => "traffic light",
    "stopsign" => "stop sign",
    "stop_sign" => "stop sign",
    "fire_hydrant" => "fire hydrant",
    "staircase" => "stairs",
    "stairway" => "stairs",
    "puppy" => "dog",
    "kitten" => "cat",
};

/// Resolve a raw detector class to its canonical label.
///
/// The raw string is looked up first, then its trimmed lowercase form. Labels
/// without an alias are returned exactly as given.
pub fn normalize(raw: &str) -> String {
    if let Some(canonical) = ALIASES.get(raw) {
        return (*canonical).to_string();
    }
    let folded = raw.trim().to_ascii_lowercase();
    match ALIASES.get(folded.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => raw.to_string(),
    }
}
