//! Translucent grays and ochres of the backdrop.

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Gray1,
    Gray2,
    Gray3,
    Ocre1,
    Ocre2,
    White,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::Gray1,
        Color::Gray2,
        Color::Gray3,
        Color::Ocre1,
        Color::Ocre2,
        Color::White,
    ];

    /// Default subset for triangles.
    pub const TRIANGLES: [Color; 4] = [Color::Gray1, Color::Gray2, Color::Ocre1, Color::White];

    /// Default subset for stepped patterns.
    pub const PATTERNS: [Color; 3] = [Color::Gray3, Color::Ocre2, Color::White];

    /// CSS color string accepted by `strokeStyle`.
    pub fn css(self) -> &'static str {
        match self {
            Self::Gray1 => "rgba(74, 74, 74, 0.4)",
            Self::Gray2 => "rgba(106, 106, 106, 0.3)",
            Self::Gray3 => "rgba(138, 138, 138, 0.2)",
            Self::Ocre1 => "rgba(212, 165, 116, 0.3)",
            Self::Ocre2 => "rgba(184, 134, 11, 0.2)",
            Self::White => "rgba(255, 255, 255, 0.15)",
        }
    }
}

/// Uniform choice. `choices` must not be empty.
pub fn pick<R: Rng + ?Sized>(rng: &mut R, choices: &[Color]) -> Color {
    choices[rng.gen_range(0..choices.len())]
}
