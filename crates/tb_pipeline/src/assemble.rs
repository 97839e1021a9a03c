//! ASSEMBLE stage: flatten rounds and matches into the immutable `Bracket`.

use tb_core::entities::{Bracket, BracketInput, BracketSides, Match, Round};

pub fn assemble(input: &BracketInput, rounds: Vec<Round>, matches: Vec<Match>) -> Bracket {
    debug_assert!(matches
        .windows(2)
        .all(|w| (w[0].round_index, w[0].match_id.index()) < (w[1].round_index, w[1].match_id.index())));

    Bracket {
        tournament_id: input.tournament_id.clone(),
        tournament_name: input.tournament_name.clone(),
        total_participants: input.participants.len(),
        rounds,
        matches,
        sides: BracketSides::from(&input.sides),
    }
}
