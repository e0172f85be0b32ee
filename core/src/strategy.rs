use crate::*;

/// Advice shown when the player asks for a hint.
pub const STRATEGY_HINT: &str = "\
Pick your cups in a consistent pattern, for example always two neighbours.
If the two coins differ, flip one of them so they match.
If they already match, leave them alone.
In blind mode keep the same pattern and flip exactly one coin each time.";

/// Suggested flip for what the player just saw, following [`STRATEGY_HINT`].
pub fn suggest_flip(outcome: &ExamineOutcome) -> Option<FlipChoice> {
    match *outcome {
        ExamineOutcome::NoChange => None,
        ExamineOutcome::Revealed([first, second]) if first == second => Some(FlipChoice::Neither),
        ExamineOutcome::Revealed(_) => Some(FlipChoice::First),
        ExamineOutcome::Hidden => Some(FlipChoice::First),
    }
}
