use serde::{Deserialize, Serialize};

use crate::*;

/// What the player may see of a single coin.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CupFace {
    /// Not looked at since the last spin.
    Covered,
    Showing(Coin),
    /// Examined in blind mode, the face stays secret.
    Concealed,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CupView {
    pub cup: Cup,
    pub face: CupFace,
    pub selected: bool,
    pub examined: bool,
}

/// Player-safe snapshot of a [`GameState`] for front ends to draw.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableView {
    pub cups: [CupView; CUP_COUNT],
    /// 1-based turn shown to the player.
    pub turn_number: u32,
    pub max_turns: u32,
    pub display_mode: DisplayMode,
    pub adversarial: bool,
    pub phase: Phase,
    pub can_examine: bool,
    pub awaiting_flip: bool,
}

impl TableView {
    pub fn from_state(state: &GameState) -> Self {
        let finished = state.phase().is_finished();
        let examined = state.examined();
        let cups = Cup::ALL.map(|cup| {
            let was_examined = examined.has(cup);
            let face = match (finished, was_examined, state.display_mode()) {
                (true, _, _) => CupFace::Showing(state.coins()[cup]),
                (false, false, _) => CupFace::Covered,
                (false, true, DisplayMode::Visible) => CupFace::Showing(state.coins()[cup]),
                (false, true, DisplayMode::Blind) => CupFace::Concealed,
            };
            CupView {
                cup,
                face,
                selected: state.selected().contains(&cup),
                examined: was_examined,
            }
        });

        let awaiting_flip = state.is_awaiting_flip();
        Self {
            cups,
            turn_number: (state.turn() + 1).min(state.max_turns()),
            max_turns: state.max_turns(),
            display_mode: state.display_mode(),
            adversarial: state.is_adversarial(),
            phase: state.phase(),
            can_examine: state.is_active() && state.selected().len() == 2 && !awaiting_flip,
            awaiting_flip,
        }
    }

    pub fn cup(&self, cup: Cup) -> &CupView {
        &self.cups[cup.index()]
    }

    /// Cup grid rows as laid out on the table.
    pub fn rows(&self) -> impl Iterator<Item = &[CupView]> {
        self.cups.chunks(2)
    }
}
