use anyhow::Result;
use dialoguer::{Input, Select};
use lazysusan_core::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::render;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Action {
    PickCup,
    Examine,
    Flip,
    Spin,
    Hint,
    ToggleBlind,
    TogglePuzzle,
    NewGame,
    Strategy,
    Quit,
}

impl Action {
    const fn label(self) -> &'static str {
        use Action::*;
        match self {
            PickCup => "Pick a cup",
            Examine => "Examine selected cups",
            Flip => "Flip coins",
            Spin => "Spin the Lazy Susan",
            Hint => "Suggest a flip",
            ToggleBlind => "Toggle blind mode",
            TogglePuzzle => "Toggle puzzle mode",
            NewGame => "New game",
            Strategy => "Strategy hint",
            Quit => "Quit",
        }
    }
}

/// One player at the console, game after game.
pub(crate) struct Session {
    state: GameState,
    rng: SmallRng,
    fixed_coins: Option<CoinSet>,
    last_examined: ExamineOutcome,
}

impl Session {
    pub(crate) fn new(config: GameConfig, seed: Option<u64>, fixed_coins: Option<CoinSet>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        log::info!("Session seed: {}", seed);
        Self {
            state: GameState::new(config),
            rng: SmallRng::seed_from_u64(seed),
            fixed_coins,
            last_examined: ExamineOutcome::NoChange,
        }
    }

    pub(crate) fn run(&mut self) -> Result<()> {
        println!("Welcome to the Lazy Susan coin game!");
        println!("Get all four coins showing the same face, heads or tails.");
        println!("Each turn pick two cups, look underneath and flip if you like.");
        println!("The table spins between turns, so you never know which cup is which.");
        self.deal()?;

        loop {
            render::table(&TableView::from_state(&self.state));
            let actions = self.available_actions();
            let labels: Vec<&str> = actions.iter().map(|action| action.label()).collect();
            let index = Select::new()
                .with_prompt("What next?")
                .report(false)
                .items(&labels[..])
                .default(0)
                .interact()?;

            if !self.apply(actions[index])? {
                println!("Thanks for playing!");
                return Ok(());
            }
        }
    }

    fn deal(&mut self) -> Result<()> {
        match self.fixed_coins {
            Some(coins) => self.state.new_game(coins, None)?,
            None => {
                let generator = RandomCoinGenerator::new(self.rng.random());
                self.state.new_game(generator, None)?
            }
        }
        self.last_examined = ExamineOutcome::NoChange;
        Ok(())
    }

    fn available_actions(&self) -> Vec<Action> {
        use Action::*;

        let view = TableView::from_state(&self.state);
        let active = self.state.is_active();
        let mut actions = Vec::new();
        if active {
            actions.push(PickCup);
        }
        if view.can_examine {
            actions.push(Examine);
        }
        if view.awaiting_flip {
            actions.extend([Flip, Hint]);
        }
        if active {
            actions.push(Spin);
        }
        actions.extend([ToggleBlind, TogglePuzzle, NewGame, Strategy, Quit]);
        actions
    }

    /// Returns `false` once the player wants to leave.
    fn apply(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::PickCup => {
                let cup = prompt_cup()?;
                let outcome = self.state.select_cup(cup);
                render::select_outcome(cup, outcome);
            }
            Action::Examine => {
                let outcome = self.state.examine();
                self.last_examined = outcome;
                render::examine_outcome(self.state.selected(), outcome);
            }
            Action::Flip => {
                let choice = self.prompt_flip()?;
                let outcome = self.state.flip_pair(choice);
                render::flip_outcome(outcome);
                render::game_over(&self.state);
            }
            Action::Spin => {
                println!("Spinning the Lazy Susan...");
                let outcome = self.state.spin();
                self.last_examined = ExamineOutcome::NoChange;
                render::spin_outcome(outcome);
                render::game_over(&self.state);
            }
            Action::Hint => match suggest_flip(&self.last_examined) {
                Some(choice) => println!(
                    "Try: {}",
                    render::flip_label(choice, self.state.selected())
                ),
                None => println!("Examine two cups first."),
            },
            Action::ToggleBlind => {
                let mode = self.state.toggle_display_mode();
                println!(
                    "Blind mode {}.",
                    if mode.is_blind() { "on" } else { "off" }
                );
            }
            Action::TogglePuzzle => {
                let adversarial = self.state.toggle_adversarial_mode();
                println!("Puzzle mode {}.", if adversarial { "on" } else { "off" });
            }
            Action::NewGame => {
                self.deal()?;
                println!("New game started! Select two cups to examine.");
            }
            Action::Strategy => println!("{}", STRATEGY_HINT),
            Action::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn prompt_flip(&self) -> Result<FlipChoice> {
        let labels =
            FlipChoice::ALL.map(|choice| render::flip_label(choice, self.state.selected()));
        let index = Select::new()
            .with_prompt("Which coins would you like to flip?")
            .report(false)
            .items(&labels[..])
            .default(0)
            .interact()?;
        let choice = FlipChoice::ALL
            .get(index)
            .copied()
            .ok_or(GameError::InvalidFlipChoice)?;
        Ok(choice)
    }
}

fn prompt_cup() -> Result<Cup> {
    let label: u8 = Input::new()
        .with_prompt("Cup (1-4)")
        .validate_with(|label: &u8| -> Result<(), GameError> {
            Cup::from_label(*label).map(|_| ())
        })
        .interact_text()?;
    Ok(Cup::from_label(label)?)
}
