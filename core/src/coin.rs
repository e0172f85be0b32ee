use core::fmt;
use core::ops::Not;
use serde::{Deserialize, Serialize};

/// One of the two faces a coin can show.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coin {
    Heads,
    Tails,
}

impl Coin {
    pub const fn flipped(self) -> Self {
        match self {
            Self::Heads => Self::Tails,
            Self::Tails => Self::Heads,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Heads => 'H',
            Self::Tails => 'T',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'H' => Some(Self::Heads),
            'T' => Some(Self::Tails),
            _ => None,
        }
    }
}

impl Not for Coin {
    type Output = Coin;

    fn not(self) -> Self::Output {
        self.flipped()
    }
}

impl Default for Coin {
    fn default() -> Self {
        Self::Heads
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Heads => "Heads",
            Self::Tails => "Tails",
        })
    }
}
