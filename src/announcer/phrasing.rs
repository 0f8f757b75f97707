//! Per-language sentence tables and the phrasing strategy seam.

use phf::phf_map;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geometry::{DistanceBucket, PositionBucket};
use crate::settings::{DescriptionMode, Language};

/// Strategy for choosing among equivalent phrasings of the same label.
pub trait PhraseSelector {
    /// Return an index in `0..count`. `count` is never zero.
    fn pick(&mut self, count: usize) -> usize;
}

impl<T: PhraseSelector + ?Sized> PhraseSelector for Box<T> {
    fn pick(&mut self, count: usize) -> usize {
        (**self).pick(count)
    }
}

/// Always the first phrasing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstPhrase;

impl PhraseSelector for FirstPhrase {
    fn pick(&mut self, _count: usize) -> usize {
        0
    }
}

/// A fixed index, wrapped into range.
#[derive(Debug, Clone, Copy)]
pub struct FixedPhrase(pub usize);

impl PhraseSelector for FixedPhrase {
    fn pick(&mut self, count: usize) -> usize {
        self.0 % count
    }
}

/// Pseudo-random choice from a seedable generator.
#[derive(Debug, Clone)]
pub struct SeededPhrase {
    rng: StdRng,
}

impl SeededPhrase {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl PhraseSelector for SeededPhrase {
    fn pick(&mut self, count: usize) -> usize {
        self.rng.gen_range(0..count)
    }
}

static ENGLISH: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "person" => &["Person", "Someone", "There is a person"],
    "car" => &["Car", "A car", "There is a car"],
    "bus" => &["Bus", "A bus"],
    "truck" => &["Truck", "A truck"],
    "motorcycle" => &["Motorcycle", "A motorcycle"],
    "bicycle" => &["Bicycle", "A bike"],
    "traffic light" => &["Traffic light", "A traffic light"],
    "stop sign" => &["Stop sign", "A stop sign"],
    "dog" => &["Dog", "A dog", "There is a dog"],
    "cat" => &["Cat", "A cat"],
    "stairs" => &["Stairs", "Careful, stairs"],
    "chair" => &["Chair", "A chair"],
    "bench" => &["Bench", "A bench"],
    "cell phone" => &["Phone", "A cell phone"],
    "bottle" => &["Bottle", "A bottle"],
    "cup" => &["Cup", "A cup"],
    "door" => &["Door", "A door"],
};

static PORTUGUESE: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "person" => &["Pessoa", "Alguém", "Tem uma pessoa"],
    "car" => &["Carro", "Um carro", "Tem um carro"],
    "bus" => &["Ônibus", "Um ônibus"],
    "truck" => &["Caminhão", "Um caminhão"],
    "motorcycle" => &["Moto", "Uma moto"],
    "bicycle" => &["Bicicleta", "Uma bicicleta"],
    "traffic light" => &["Semáforo", "Um semáforo"],
    "stop sign" => &["Placa de pare", "Uma placa de pare"],
    "dog" => &["Cachorro", "Um cachorro", "Tem um cachorro"],
    "cat" => &["Gato", "Um gato"],
    "stairs" => &["Escada", "Cuidado, escada"],
    "chair" => &["Cadeira", "Uma cadeira"],
    "bench" => &["Banco", "Um banco"],
    "cell phone" => &["Celular", "Um celular"],
    "bottle" => &["Garrafa", "Uma garrafa"],
    "cup" => &["Copo", "Um copo"],
    "door" => &["Porta", "Uma porta"],
};

fn sentence_table(language: Language) -> &'static phf::Map<&'static str, &'static [&'static str]> {
    match language {
        Language::English => &ENGLISH,
        Language::Portuguese => &PORTUGUESE,
    }
}

fn position_words(language: Language, position: PositionBucket) -> &'static str {
    match (language, position) {
        (Language::English, PositionBucket::Left) => "on your left",
        (Language::English, PositionBucket::Center) => "in front of you",
        (Language::English, PositionBucket::Right) => "on your right",
        (Language::Portuguese, PositionBucket::Left) => "à sua esquerda",
        (Language::Portuguese, PositionBucket::Center) => "à sua frente",
        (Language::Portuguese, PositionBucket::Right) => "à sua direita",
    }
}

fn distance_words(language: Language, distance: DistanceBucket) -> &'static str {
    match (language, distance) {
        (Language::English, DistanceBucket::Near) => "very close",
        (Language::English, DistanceBucket::Medium) => "a few steps away",
        (Language::English, DistanceBucket::Far) => "far away",
        (Language::Portuguese, DistanceBucket::Near) => "muito perto",
        (Language::Portuguese, DistanceBucket::Medium) => "a alguns passos",
        (Language::Portuguese, DistanceBucket::Far) => "longe",
    }
}

fn confidence_words(language: Language, percent: u32) -> String {
    match language {
        Language::English => format!("{percent} percent confidence"),
        Language::Portuguese => format!("{percent} por cento de confiança"),
    }
}

fn base_sentence<S: PhraseSelector + ?Sized>(
    language: Language,
    label: &str,
    selector: &mut S,
) -> String {
    match sentence_table(language).get(label) {
        Some(candidates) if !candidates.is_empty() => {
            let idx = selector.pick(candidates.len()).min(candidates.len() - 1);
            candidates[idx].to_string()
        }
        _ => {
            let generic = match language {
                Language::English => format!("{label} detected"),
                Language::Portuguese => format!("{label} detectado"),
            };
            capitalize(&generic)
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Build the spoken sentence for one announcement.
pub fn compose_phrase<S: PhraseSelector + ?Sized>(
    label: &str,
    position: PositionBucket,
    distance: DistanceBucket,
    score: f32,
    language: Language,
    mode: DescriptionMode,
    selector: &mut S,
) -> String {
    let base = base_sentence(language, label, selector);
    let position = position_words(language, position);
    match mode {
        DescriptionMode::Short => format!("{base} {position}."),
        DescriptionMode::Detailed => {
            let percent = (score.clamp(0.0, 1.0) * 100.0).round() as u32;
            format!(
                "{base} {position}, {}, {}.",
                distance_words(language, distance),
                confidence_words(language, percent)
            )
        }
    }
}
