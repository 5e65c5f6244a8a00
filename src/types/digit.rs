//! Single-digit keys for interpretation tables

use serde::{Deserialize, Serialize};

/// A reduced value in 1..=9
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum Digit {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
}

impl Digit {
    pub const ALL: [Digit; 9] = [
        Digit::One,
        Digit::Two,
        Digit::Three,
        Digit::Four,
        Digit::Five,
        Digit::Six,
        Digit::Seven,
        Digit::Eight,
        Digit::Nine,
    ];

    /// `None` for 0 and anything above 9
    pub fn from_value(value: u32) -> Option<Digit> {
        match value {
            1..=9 => Some(Self::ALL[(value - 1) as usize]),
            _ => None,
        }
    }

    pub fn value(self) -> u32 {
        self as u32 + 1
    }
}

impl From<Digit> for u32 {
    fn from(digit: Digit) -> u32 {
        digit.value()
    }
}

impl TryFrom<u32> for Digit {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Digit::from_value(value).ok_or_else(|| format!("{} is not a digit in 1..=9", value))
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
