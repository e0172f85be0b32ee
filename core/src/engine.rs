use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    NotStarted,
    Active,
    Won,
    Lost,
}

impl Phase {
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// Whether examined faces are shown to the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayMode {
    Visible,
    Blind,
}

impl DisplayMode {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Visible => Self::Blind,
            Self::Blind => Self::Visible,
        }
    }

    pub const fn is_blind(self) -> bool {
        matches!(self, Self::Blind)
    }
}

impl Default for DisplayMode {
    fn default() -> Self {
        Self::Visible
    }
}

/// Picked cups, oldest first.
pub type Selection = SmallVec<[Cup; 2]>;

/// Rules of a single session at the table.
///
/// The state holds the real faces of every coin; hiding them from the player is up to the caller,
/// see [`TableView`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    coins: CoinSet,
    turn: u32,
    max_turns: u32,
    selected: Selection,
    examined: CupSet,
    display_mode: DisplayMode,
    adversarial: bool,
    phase: Phase,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            coins: CoinSet::default(),
            turn: 0,
            max_turns: config.max_turns.max(1),
            selected: Selection::new(),
            examined: CupSet::empty(),
            display_mode: config.display_mode,
            adversarial: config.adversarial,
            phase: Default::default(),
        }
    }

    /// Deals fresh coins and starts over, keeping puzzle mode unless `adversarial` overrides it.
    ///
    /// A uniform deal is refused and leaves the current game untouched.
    pub fn new_game<G: CoinGenerator>(
        &mut self,
        generator: G,
        adversarial: Option<bool>,
    ) -> Result<()> {
        let coins = generator.generate();
        if coins.is_uniform() {
            log::warn!("Refusing uniform starting coins {}", coins);
            return Err(GameError::UniformStart);
        }

        if let Some(adversarial) = adversarial {
            self.adversarial = adversarial;
        }
        self.coins = coins;
        self.turn = 0;
        self.selected.clear();
        self.examined = CupSet::empty();
        self.phase = Phase::Active;
        log::debug!(
            "New game, {} turns, puzzle mode: {}",
            self.max_turns,
            self.adversarial
        );
        Ok(())
    }

    pub fn coins(&self) -> &CoinSet {
        &self.coins
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn max_turns(&self) -> u32 {
        self.max_turns
    }

    pub fn selected(&self) -> &[Cup] {
        &self.selected
    }

    pub fn examined(&self) -> CupSet {
        self.examined
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn is_adversarial(&self) -> bool {
        self.adversarial
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase.is_active()
    }

    pub fn did_win(&self) -> bool {
        matches!(self.phase, Phase::Won)
    }

    pub fn did_lose(&self) -> bool {
        matches!(self.phase, Phase::Lost)
    }

    pub fn check_win(&self) -> bool {
        self.coins.is_uniform()
    }

    /// Both picked cups have been looked at and a flip decision is pending.
    pub fn is_awaiting_flip(&self) -> bool {
        self.selected_pair()
            .is_some_and(|pair| pair.iter().all(|&cup| self.examined.has(cup)))
    }

    pub fn select_cup(&mut self, cup: Cup) -> SelectOutcome {
        use SelectOutcome::*;

        if !self.is_active() {
            return NoChange;
        }

        if self.flip_single_coin(cup).has_update() {
            return Flipped(self.coins[cup]);
        }

        if let Some(position) = self.selected.iter().position(|&picked| picked == cup) {
            self.selected.remove(position);
            Deselected
        } else if self.selected.len() < 2 {
            self.selected.push(cup);
            Selected
        } else {
            let evicted = self.selected.remove(0);
            self.selected.push(cup);
            Replaced(evicted)
        }
    }

    pub fn flip_single_coin(&mut self, cup: Cup) -> FlipOutcome {
        if !self.is_active() || !self.examined.has(cup) {
            return FlipOutcome::NoChange;
        }

        let face = self.coins.flip(cup);
        log::debug!("Turned over examined {}, now {}", cup, face);
        FlipOutcome::Applied
    }

    pub fn examine(&mut self) -> ExamineOutcome {
        let Some(pair) = self.selected_pair() else {
            return ExamineOutcome::NoChange;
        };
        if !self.is_active() || self.is_awaiting_flip() {
            return ExamineOutcome::NoChange;
        }

        if self.adversarial {
            let rotation = worst_rotation_keeping(&self.coins, pair, self.examined);
            self.coins = rotation.apply(&self.coins);
            log::debug!("Puzzle mode turned the table {} degrees", rotation.degrees());
        }

        for cup in pair {
            self.examined.insert(cup.into());
        }
        log::debug!("Examined {} and {}", pair[0], pair[1]);

        match self.display_mode {
            DisplayMode::Visible => ExamineOutcome::Revealed(pair.map(|cup| self.coins[cup])),
            DisplayMode::Blind => ExamineOutcome::Hidden,
        }
    }

    /// Applies the player's decision for the examined pair and clears the selection.
    ///
    /// Refused unless the current pair has been examined.
    pub fn flip_pair(&mut self, choice: FlipChoice) -> FlipOutcome {
        if !self.is_active() || !self.is_awaiting_flip() {
            return FlipOutcome::NoChange;
        }
        let Some(pair) = self.selected_pair() else {
            return FlipOutcome::NoChange;
        };

        for (cup, flip) in pair.into_iter().zip(choice.picks()) {
            if flip {
                self.coins.flip(cup);
            }
        }
        self.selected.clear();
        log::debug!("Flip {:?}, table is now {}", choice, self.coins);

        if self.check_win() {
            self.end_game(true);
            FlipOutcome::Won
        } else {
            FlipOutcome::Applied
        }
    }

    pub fn spin(&mut self) -> SpinOutcome {
        if !self.is_active() {
            return SpinOutcome::NoChange;
        }

        if self.check_win() {
            self.end_game(true);
            return SpinOutcome::Won;
        }

        self.turn += 1;
        if self.turn >= self.max_turns {
            self.end_game(false);
            return SpinOutcome::Lost;
        }

        self.selected.clear();
        self.examined = CupSet::empty();
        log::debug!("Spun the table, turn {} of {}", self.turn + 1, self.max_turns);
        SpinOutcome::Spun
    }

    /// Switching modes covers every examined cup again.
    pub fn toggle_display_mode(&mut self) -> DisplayMode {
        self.display_mode = self.display_mode.toggled();
        self.examined = CupSet::empty();
        log::debug!("Display mode is now {:?}", self.display_mode);
        self.display_mode
    }

    pub fn toggle_adversarial_mode(&mut self) -> bool {
        self.adversarial = !self.adversarial;
        log::debug!("Puzzle mode is now {}", self.adversarial);
        self.adversarial
    }

    fn selected_pair(&self) -> Option<[Cup; 2]> {
        match *self.selected.as_slice() {
            [first, second] => Some([first, second]),
            _ => None,
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.phase.is_finished() {
            return;
        }

        self.phase = if won { Phase::Won } else { Phase::Lost };
        log::debug!(
            "Game {} on turn {}, final table {}",
            if won { "won" } else { "lost" },
            self.turn,
            self.coins
        );
    }
}
