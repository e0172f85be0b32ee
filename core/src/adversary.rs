//! Puzzle mode: before the player peeks, the table is turned to whichever
//! orientation helps them the least.

use serde::{Deserialize, Serialize};

use crate::*;

/// Score of an orientation that gives the player nothing useful.
pub const WORST_SCORE: u8 = 1;

/// Score of every other orientation.
pub const NEUTRAL_SCORE: u8 = 3;

/// Quarter turns of the 2x2 table, clockwise.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    Identity,
    Quarter,
    Half,
    ThreeQuarter,
}

impl Rotation {
    /// Candidates in tie-break order.
    pub const ALL: [Rotation; 4] = [
        Self::Identity,
        Self::Quarter,
        Self::Half,
        Self::ThreeQuarter,
    ];

    /// Source cup for every destination cup.
    pub const fn remap(self) -> [Cup; CUP_COUNT] {
        let [c0, c1, c2, c3] = Cup::ALL;
        match self {
            Self::Identity => [c0, c1, c2, c3],
            Self::Quarter => [c2, c0, c3, c1],
            Self::Half => [c3, c2, c1, c0],
            Self::ThreeQuarter => [c1, c3, c0, c2],
        }
    }

    /// Whether this turn leaves every cup in `examined` showing the face it had.
    pub fn keeps_faces(self, coins: &CoinSet, examined: CupSet) -> bool {
        let turned = self.apply(coins);
        examined.cups().all(|cup| turned[cup] == coins[cup])
    }

    pub const fn degrees(self) -> u16 {
        match self {
            Self::Identity => 0,
            Self::Quarter => 90,
            Self::Half => 180,
            Self::ThreeQuarter => 270,
        }
    }

    pub fn apply(self, coins: &CoinSet) -> CoinSet {
        coins.remapped(self.remap())
    }
}

/// Rates how little the player learns from `pair` on this table, lower is worse for them.
pub fn score_rotation(coins: &CoinSet, pair: [Cup; 2]) -> u8 {
    let total_heads = coins.count(Coin::Heads);
    let total_tails = CUP_COUNT - total_heads;
    let heads_in_selected = pair
        .iter()
        .filter(|&&cup| coins[cup] == Coin::Heads)
        .count();
    let tails_in_selected = pair.len() - heads_in_selected;

    let worst = (total_tails == 3 && tails_in_selected == 2)
        || (total_heads == 3 && heads_in_selected == 2)
        || (total_tails == 2 && heads_in_selected == 1);

    if worst { WORST_SCORE } else { NEUTRAL_SCORE }
}

/// Lowest scoring rotation, earliest one on ties.
pub fn worst_rotation(coins: &CoinSet, pair: [Cup; 2]) -> Rotation {
    worst_rotation_keeping(coins, pair, CupSet::empty())
}

/// Like [`worst_rotation`], but only among turns that leave the faces under `examined` as the
/// player saw them. Identity always qualifies.
pub fn worst_rotation_keeping(coins: &CoinSet, pair: [Cup; 2], examined: CupSet) -> Rotation {
    Rotation::ALL
        .into_iter()
        .filter(|rotation| rotation.keeps_faces(coins, examined))
        .min_by_key(|rotation| score_rotation(&rotation.apply(coins), pair))
        .unwrap_or(Rotation::Identity)
}

pub fn choose_worst_rotation(coins: &CoinSet, pair: [Cup; 2]) -> CoinSet {
    worst_rotation(coins, pair).apply(coins)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coins(s: &str) -> CoinSet {
        s.parse().unwrap()
    }

    fn pair(a: u8, b: u8) -> [Cup; 2] {
        [Cup::new(a).unwrap(), Cup::new(b).unwrap()]
    }

    #[test]
    fn rotations_move_coins_around_the_grid() {
        let table = coins("HHHT");

        assert_eq!(Rotation::Identity.apply(&table), table);
        assert_eq!(Rotation::Quarter.apply(&table), coins("HHTH"));
        assert_eq!(Rotation::Half.apply(&table), coins("THHH"));
        assert_eq!(Rotation::ThreeQuarter.apply(&table), coins("HTHH"));
    }

    #[test]
    fn four_quarter_turns_are_identity() {
        let table = coins("HTTT");
        let mut turned = table;
        for _ in 0..4 {
            turned = Rotation::Quarter.apply(&turned);
        }

        assert_eq!(turned, table);
    }

    #[test]
    fn scores_match_worst_patterns() {
        assert_eq!(score_rotation(&coins("HHHT"), pair(0, 1)), WORST_SCORE);
        assert_eq!(score_rotation(&coins("TTTH"), pair(0, 1)), WORST_SCORE);
        assert_eq!(score_rotation(&coins("HTHT"), pair(0, 1)), WORST_SCORE);
        assert_eq!(score_rotation(&coins("HHHT"), pair(2, 3)), NEUTRAL_SCORE);
        assert_eq!(score_rotation(&coins("HTTH"), pair(0, 3)), NEUTRAL_SCORE);
    }

    #[test]
    fn selection_is_deterministic() {
        let table = coins("HHHT");
        let first = worst_rotation(&table, pair(0, 1));

        for _ in 0..10 {
            assert_eq!(worst_rotation(&table, pair(0, 1)), first);
        }
        assert_eq!(first, Rotation::Identity);
    }

    #[test]
    fn picks_earliest_worst_rotation() {
        let table = coins("HHHT");

        // Half and ThreeQuarter both put two heads under cups 3 and 4.
        assert_eq!(worst_rotation(&table, pair(2, 3)), Rotation::Half);
        assert_eq!(choose_worst_rotation(&table, pair(2, 3)), coins("THHH"));
    }

    #[test]
    fn skips_turns_that_change_examined_faces() {
        let table = coins("TTTH");
        let mut examined = CupSet::empty();
        examined.insert(Cup::ALL[0].into());
        examined.insert(Cup::ALL[1].into());

        // Unrestricted, Half would put two tails under cups 3 and 4.
        assert_eq!(worst_rotation(&table, pair(2, 3)), Rotation::Half);
        assert!(!Rotation::Half.keeps_faces(&table, examined));
        assert!(Rotation::Quarter.keeps_faces(&table, examined));
        assert_eq!(
            worst_rotation_keeping(&table, pair(2, 3), examined),
            Rotation::Identity
        );
    }

    #[test]
    fn falls_back_to_identity_when_all_scores_tie() {
        let table = coins("HTTH");

        for rotation in Rotation::ALL {
            assert_eq!(
                score_rotation(&rotation.apply(&table), pair(0, 3)),
                NEUTRAL_SCORE
            );
        }
        assert_eq!(worst_rotation(&table, pair(0, 3)), Rotation::Identity);
    }
}
