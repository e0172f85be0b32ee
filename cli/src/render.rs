use lazysusan_core::*;

pub(crate) fn table(view: &TableView) {
    println!();
    println!(
        "Turn {}/{}   {}{}",
        view.turn_number,
        view.max_turns,
        if view.display_mode.is_blind() {
            "blind mode"
        } else {
            "open mode"
        },
        if view.adversarial { ", puzzle mode" } else { "" }
    );
    for row in view.rows() {
        let cells: Vec<String> = row.iter().map(cup_cell).collect();
        println!("  {}", cells.join("  "));
    }
    println!();
}

pub(crate) fn cup_cell(view: &CupView) -> String {
    let face = match view.face {
        CupFace::Covered => "-----",
        CupFace::Showing(Coin::Heads) => "Heads",
        CupFace::Showing(Coin::Tails) => "Tails",
        CupFace::Concealed => " ??? ",
    };
    if view.selected {
        format!("[CUP {} {}]", view.cup.label(), face)
    } else {
        format!(" CUP {} {} ", view.cup.label(), face)
    }
}

pub(crate) fn flip_label(choice: FlipChoice, selected: &[Cup]) -> String {
    match (choice, selected) {
        (FlipChoice::Neither, _) => "Flip neither".to_string(),
        (FlipChoice::Both, _) => "Flip both".to_string(),
        (FlipChoice::First, [first, ..]) => format!("Flip only {}", first),
        (FlipChoice::Second, [_, second, ..]) => format!("Flip only {}", second),
        (FlipChoice::First, _) => "Flip the first cup".to_string(),
        (FlipChoice::Second, _) => "Flip the second cup".to_string(),
    }
}

pub(crate) fn select_outcome(cup: Cup, outcome: SelectOutcome) {
    match outcome {
        SelectOutcome::NoChange => println!("Nothing to pick right now."),
        SelectOutcome::Selected => println!("Picked {}.", cup),
        SelectOutcome::Deselected => println!("Put {} back.", cup),
        SelectOutcome::Replaced(evicted) => println!("Picked {} instead of {}.", cup, evicted),
        SelectOutcome::Flipped(face) => println!("Flipped {} to {}.", cup, face),
    }
}

pub(crate) fn examine_outcome(selected: &[Cup], outcome: ExamineOutcome) {
    match (outcome, selected) {
        (ExamineOutcome::Revealed([first_face, second_face]), [first, second]) => {
            println!("Under {} you see {}.", first, first_face);
            println!("Under {} you see {}.", second, second_face);
        }
        (ExamineOutcome::Revealed(_), _) => println!("You peek under the cups."),
        (ExamineOutcome::Hidden, _) => {
            println!("You cannot see the coins in blind mode! Choose your flip.")
        }
        (ExamineOutcome::NoChange, _) => println!("Pick two fresh cups to examine first."),
    }
}

pub(crate) fn flip_outcome(outcome: FlipOutcome) {
    match outcome {
        FlipOutcome::NoChange => println!("Examine two cups before flipping."),
        FlipOutcome::Applied => println!("Done. Spin when you are ready."),
        FlipOutcome::Won => {}
    }
}

pub(crate) fn spin_outcome(outcome: SpinOutcome) {
    match outcome {
        SpinOutcome::NoChange => println!("The game is over, start a new one."),
        SpinOutcome::Spun => println!("The Lazy Susan has spun! Select two cups to examine."),
        SpinOutcome::Won | SpinOutcome::Lost => {}
    }
}

pub(crate) fn game_over(state: &GameState) {
    if state.did_win() {
        println!("CONGRATULATIONS! You won in {} turn(s)!", state.turn() + 1);
    } else if state.did_lose() {
        println!(
            "Game over! You didn't win within {} turns.",
            state.max_turns()
        );
    } else {
        return;
    }
    println!("Final state: {}", state.coins());
}
