use bitflags::bitflags;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Number of cups, and therefore coins, on the table.
pub const CUP_COUNT: usize = 4;

/// Position of a cup on the table, laid out as a 2x2 grid:
///
/// ```text
/// 0 1
/// 2 3
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Cup(u8);

impl Cup {
    pub const ALL: [Cup; CUP_COUNT] = [Cup(0), Cup(1), Cup(2), Cup(3)];

    pub fn new(index: u8) -> Result<Self> {
        if usize::from(index) < CUP_COUNT {
            Ok(Self(index))
        } else {
            Err(GameError::InvalidCup)
        }
    }

    /// Parses the 1-based number players see on the cups.
    pub fn from_label(label: u8) -> Result<Self> {
        label
            .checked_sub(1)
            .ok_or(GameError::InvalidCup)
            .and_then(Self::new)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn label(self) -> u8 {
        self.0 + 1
    }
}

impl TryFrom<u8> for Cup {
    type Error = GameError;

    fn try_from(index: u8) -> Result<Self> {
        Self::new(index)
    }
}

impl From<Cup> for u8 {
    fn from(cup: Cup) -> Self {
        cup.0
    }
}

impl fmt::Display for Cup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cup {}", self.label())
    }
}

bitflags! {
    /// Set of cups, one bit per position.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct CupSet: u8 {
        const CUP_1 = 1;
        const CUP_2 = 1 << 1;
        const CUP_3 = 1 << 2;
        const CUP_4 = 1 << 3;
    }
}

impl CupSet {
    pub fn has(self, cup: Cup) -> bool {
        self.contains(cup.into())
    }

    pub fn cups(self) -> impl Iterator<Item = Cup> {
        Cup::ALL.into_iter().filter(move |&cup| self.has(cup))
    }
}

impl From<Cup> for CupSet {
    fn from(cup: Cup) -> Self {
        Self::from_bits_retain(1 << cup.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cup_rejects_out_of_range_index() {
        assert_eq!(Cup::new(3).map(Cup::label), Ok(4));
        assert_eq!(Cup::new(4), Err(GameError::InvalidCup));
        assert_eq!(Cup::from_label(0), Err(GameError::InvalidCup));
        assert_eq!(Cup::from_label(1).map(Cup::index), Ok(0));
    }

    #[test]
    fn cup_set_tracks_members() {
        let mut set = CupSet::empty();
        set.insert(Cup::ALL[3].into());
        set.insert(Cup::ALL[1].into());

        assert!(set.has(Cup::ALL[1]));
        assert!(!set.has(Cup::ALL[0]));
        assert!(set.cups().eq([Cup::ALL[1], Cup::ALL[3]]));
    }
}
