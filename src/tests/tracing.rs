use crate::engine::Search;
use crate::output::trace::TraceRecorder;
use crate::output::trace::ACCEPTED_PREFIX;
use crate::output::trace::REJECTED_PREFIX;

fn trace(n: usize) -> Vec<String> {
    let mut recorder = TraceRecorder::new();

    let mut search = Search::new(n);
    search.run(
        |_| {},
        |assignment, accepted| recorder.record(assignment, accepted),
    );

    recorder.lines().to_vec()
}

#[test]
fn every_event_describes_a_full_last_row_attempt() {
    // Events are only produced while filling the last row, so each one
    // renders all four rows of the board.
    for line in trace(4) {
        let positions = line
            .strip_prefix(ACCEPTED_PREFIX)
            .or_else(|| line.strip_prefix(REJECTED_PREFIX))
            .unwrap_or_else(|| panic!("unexpected trace line: {line}"));

        let tokens: Vec<_> = positions.split_whitespace().collect();
        assert_eq!(tokens.len(), 4, "partial attempt leaked into: {line}");

        for (token, letter) in tokens.iter().zip(['a', 'b', 'c', 'd']) {
            assert!(token.starts_with(letter), "bad token order in: {line}");
        }
    }
}

#[test]
fn accepted_events_match_the_solutions_in_order() {
    let accepted: Vec<_> = trace(4)
        .into_iter()
        .filter(|line| line.starts_with(ACCEPTED_PREFIX))
        .collect();

    assert_eq!(
        accepted,
        vec![
            format!("{ACCEPTED_PREFIX}a2 b4 c1 d3 "),
            format!("{ACCEPTED_PREFIX}a3 b1 c4 d2 "),
        ]
    );
}

#[test]
fn an_unsolvable_board_still_traces_its_rejections() {
    // n = 2 reaches the last row twice and rejects both columns each time.
    let lines = trace(2);

    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|line| line.starts_with(REJECTED_PREFIX)));
}

#[test]
fn the_trivial_board_produces_no_events() {
    assert!(trace(1).is_empty());
}

#[test]
fn events_keep_the_trailing_space_of_the_position_text() {
    for line in trace(4) {
        assert!(line.ends_with(' '), "missing trailing space: {line:?}");
    }
}
