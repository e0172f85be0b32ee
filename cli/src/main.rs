use anyhow::Context;
use clap::Parser;
use lazysusan_core::{CoinSet, DEFAULT_MAX_TURNS, DisplayMode, GameConfig, GameError};

mod render;
mod session;

#[derive(Parser, Debug)]
#[command(version, about = "The Lazy Susan coin game, in your terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Spins allowed before the game is lost
    #[arg(long, default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: u32,

    /// Keep examined coins hidden, flips become guesses
    #[arg(long)]
    blind: bool,

    /// Puzzle mode, the table turns against you before every peek
    #[arg(long)]
    puzzle: bool,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Start every game from this board, e.g. HTHT
    #[arg(long, value_parser = parse_start_coins)]
    coins: Option<CoinSet>,
}

impl Args {
    fn config(&self) -> GameConfig {
        let display_mode = if self.blind {
            DisplayMode::Blind
        } else {
            DisplayMode::Visible
        };
        GameConfig::new(self.max_turns)
            .with_display_mode(display_mode)
            .with_adversarial(self.puzzle)
    }
}

fn parse_start_coins(s: &str) -> Result<CoinSet, GameError> {
    let coins: CoinSet = s.parse()?;
    if coins.is_uniform() {
        Err(GameError::UniformStart)
    } else {
        Ok(coins)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    simplelog::TermLogger::init(
        args.verbose.log_level_filter(),
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .context("Error initializing logger")?;
    log::debug!("args: {:?}", args);

    let mut session = session::Session::new(args.config(), args.seed, args.coins);
    session.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn flags_map_onto_config() {
        let args =
            Args::try_parse_from(["lazysusan", "--max-turns", "8", "--blind", "--puzzle"]).unwrap();

        let config = args.config();

        assert_eq!(config.max_turns, 8);
        assert_eq!(config.display_mode, DisplayMode::Blind);
        assert!(config.adversarial);
    }

    #[test]
    fn defaults_match_classic_game() {
        let args = Args::try_parse_from(["lazysusan"]).unwrap();

        assert_eq!(args.config(), GameConfig::default());
        assert_eq!(args.seed, None);
        assert_eq!(args.coins, None);
    }

    #[test]
    fn start_coins_must_be_mixed() {
        assert_eq!(parse_start_coins("hthh"), "HTHH".parse::<CoinSet>());
        assert_eq!(parse_start_coins("HHHH"), Err(GameError::UniformStart));
        assert!(Args::try_parse_from(["lazysusan", "--coins", "TTTT"]).is_err());
        assert!(Args::try_parse_from(["lazysusan", "--coins", "HTX"]).is_err());
    }
}
