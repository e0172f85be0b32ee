#![no_std]

use core::fmt;
use core::ops::{Index, IndexMut};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

pub use adversary::*;
pub use coin::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use strategy::*;
pub use types::*;
pub use view::*;

mod adversary;
mod coin;
mod engine;
mod error;
mod generator;
mod strategy;
mod types;
mod view;

/// Turn budget used when nothing else is configured.
pub const DEFAULT_MAX_TURNS: u32 = 50;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub max_turns: u32,
    pub display_mode: DisplayMode,
    pub adversarial: bool,
}

impl GameConfig {
    pub const fn new_unchecked(max_turns: u32) -> Self {
        Self {
            max_turns,
            display_mode: DisplayMode::Visible,
            adversarial: false,
        }
    }

    pub fn new(max_turns: u32) -> Self {
        Self::new_unchecked(max_turns.clamp(1, u32::MAX))
    }

    pub const fn with_display_mode(self, display_mode: DisplayMode) -> Self {
        Self {
            display_mode,
            ..self
        }
    }

    pub const fn with_adversarial(self, adversarial: bool) -> Self {
        Self {
            adversarial,
            ..self
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_MAX_TURNS)
    }
}

/// The four coins on the table, one per cup.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoinSet([Coin; CUP_COUNT]);

impl CoinSet {
    pub const fn new(faces: [Coin; CUP_COUNT]) -> Self {
        Self(faces)
    }

    pub const fn faces(&self) -> [Coin; CUP_COUNT] {
        self.0
    }

    pub fn count(&self, face: Coin) -> usize {
        self.0.iter().filter(|&&coin| coin == face).count()
    }

    pub fn is_uniform(&self) -> bool {
        self.0.iter().all(|&coin| coin == self.0[0])
    }

    /// Turns the coin under `cup` over and returns its new face.
    pub fn flip(&mut self, cup: Cup) -> Coin {
        let coin = &mut self[cup];
        *coin = coin.flipped();
        *coin
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cup, Coin)> + '_ {
        Cup::ALL.into_iter().map(|cup| (cup, self[cup]))
    }

    /// Builds a new set where position `i` holds the coin previously at `map[i]`.
    pub fn remapped(&self, map: [Cup; CUP_COUNT]) -> Self {
        Self(map.map(|from| self[from]))
    }
}

impl From<[Coin; CUP_COUNT]> for CoinSet {
    fn from(faces: [Coin; CUP_COUNT]) -> Self {
        Self::new(faces)
    }
}

impl Index<Cup> for CoinSet {
    type Output = Coin;

    fn index(&self, cup: Cup) -> &Self::Output {
        &self.0[cup.index()]
    }
}

impl IndexMut<Cup> for CoinSet {
    fn index_mut(&mut self, cup: Cup) -> &mut Self::Output {
        &mut self.0[cup.index()]
    }
}

impl FromStr for CoinSet {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let mut faces = [Coin::Heads; CUP_COUNT];
        let mut symbols = s.trim().chars();
        for face in faces.iter_mut() {
            *face = symbols
                .next()
                .and_then(Coin::from_symbol)
                .ok_or(GameError::InvalidCoinSet)?;
        }
        if symbols.next().is_some() {
            return Err(GameError::InvalidCoinSet);
        }
        Ok(Self(faces))
    }
}

impl fmt::Display for CoinSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for coin in self.0 {
            write!(f, "{}", coin.symbol())?;
        }
        Ok(())
    }
}

/// Which of the two selected cups to turn over.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipChoice {
    Neither,
    First,
    Second,
    Both,
}

impl FlipChoice {
    pub const ALL: [FlipChoice; 4] = [Self::Neither, Self::First, Self::Second, Self::Both];

    /// Flags for the first and second selected cup.
    pub const fn picks(self) -> [bool; 2] {
        use FlipChoice::*;
        match self {
            Neither => [false, false],
            First => [true, false],
            Second => [false, true],
            Both => [true, true],
        }
    }
}

/// Console numbering: 0 neither, 1 first, 2 second, 3 both.
impl TryFrom<u8> for FlipChoice {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(GameError::InvalidFlipChoice)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SelectOutcome {
    NoChange,
    Selected,
    Deselected,
    /// The oldest pick was dropped to make room.
    Replaced(Cup),
    /// The cup was already examined, so its coin was turned over instead.
    Flipped(Coin),
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ExamineOutcome {
    NoChange,
    /// Faces of the first and second selected cup.
    Revealed([Coin; 2]),
    /// Blind mode, the faces stay hidden from the player.
    Hidden,
}

impl ExamineOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlipOutcome {
    NoChange,
    Applied,
    Won,
}

impl FlipOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SpinOutcome {
    NoChange,
    Spun,
    Won,
    Lost,
}

impl SpinOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::ToString;

    #[test]
    fn coin_set_parses_and_displays_symbols() {
        let coins: CoinSet = "htHT".parse().unwrap();

        assert_eq!(
            coins.faces(),
            [Coin::Heads, Coin::Tails, Coin::Heads, Coin::Tails]
        );
        assert_eq!(coins.to_string(), "HTHT");
    }

    #[test]
    fn coin_set_rejects_wrong_length_or_symbols() {
        assert_eq!("HTH".parse::<CoinSet>(), Err(GameError::InvalidCoinSet));
        assert_eq!("HTHTH".parse::<CoinSet>(), Err(GameError::InvalidCoinSet));
        assert_eq!("HTXT".parse::<CoinSet>(), Err(GameError::InvalidCoinSet));
    }

    #[test]
    fn uniform_only_when_all_faces_match() {
        assert!("HHHH".parse::<CoinSet>().unwrap().is_uniform());
        assert!("TTTT".parse::<CoinSet>().unwrap().is_uniform());
        assert!(!"HHHT".parse::<CoinSet>().unwrap().is_uniform());
    }

    #[test]
    fn flip_choice_follows_console_numbering() {
        assert_eq!(FlipChoice::try_from(0), Ok(FlipChoice::Neither));
        assert_eq!(FlipChoice::try_from(3), Ok(FlipChoice::Both));
        assert_eq!(FlipChoice::try_from(4), Err(GameError::InvalidFlipChoice));
    }

    #[test]
    fn remapped_pulls_coins_from_source_cups() {
        let coins: CoinSet = "HTTT".parse().unwrap();
        let [a, b, c, d] = Cup::ALL;

        assert_eq!(coins.remapped([b, a, c, d]).to_string(), "THTT");
        assert_eq!(coins.remapped([a, a, a, a]).to_string(), "HHHH");
    }

    #[test]
    fn config_clamps_turn_budget() {
        assert_eq!(GameConfig::new(0).max_turns, 1);
        assert_eq!(GameConfig::default().max_turns, DEFAULT_MAX_TURNS);
    }
}
