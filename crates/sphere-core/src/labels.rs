//! Label providers for demos and hosts.
//!
//! The geometry never generates its own labels; a host picks a source and
//! hands the resulting list to the controller.

use crate::constants::DEFAULT_LABEL_PREFIX;
use rand::prelude::*;

pub trait LabelSource {
    fn labels(&mut self) -> Vec<String>;
}

impl LabelSource for Vec<String> {
    fn labels(&mut self) -> Vec<String> {
        self.clone()
    }
}

/// `"<prefix> 0"`, `"<prefix> 1"`, ...
#[derive(Clone, Debug)]
pub struct NumberedLabels {
    pub count: usize,
    pub prefix: String,
}

impl NumberedLabels {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            prefix: DEFAULT_LABEL_PREFIX.to_string(),
        }
    }
}

impl LabelSource for NumberedLabels {
    fn labels(&mut self) -> Vec<String> {
        (0..self.count)
            .map(|i| format!("{} {}", self.prefix, i))
            .collect()
    }
}

const ONSETS: &[&str] = &[
    "b", "d", "f", "g", "k", "l", "m", "n", "p", "r", "s", "t", "v", "z", "br", "ch", "kr", "sh",
    "th", "tr",
];
const VOWELS: &[&str] = &["a", "e", "i", "o", "u", "ai", "ea", "io", "ou"];
const CODAS: &[&str] = &["", "", "n", "r", "s", "l", "th", "x", "nd"];

/// Pronounceable made-up names from a seeded generator.
///
/// Each call to [`LabelSource::labels`] continues the same random stream, so a
/// fixed seed always yields the same sequence of label sets.
pub struct RandomNames {
    count: usize,
    rng: StdRng,
}

impl RandomNames {
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn name(&mut self) -> String {
        let syllables = self.rng.gen_range(2..=3);
        let mut name = String::new();
        for _ in 0..syllables {
            name.push_str(ONSETS.choose(&mut self.rng).unwrap_or(&"b"));
            name.push_str(VOWELS.choose(&mut self.rng).unwrap_or(&"a"));
        }
        name.push_str(CODAS.choose(&mut self.rng).unwrap_or(&""));
        capitalize(&name)
    }
}

impl LabelSource for RandomNames {
    fn labels(&mut self) -> Vec<String> {
        (0..self.count).map(|_| self.name()).collect()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
