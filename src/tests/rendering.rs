use crate::output::board::render;
use crate::output::board::BoardMatrix;

#[test]
fn matrix_cells_follow_rank_and_file_of_the_assignment() {
    let board = BoardMatrix::from_assignment(&[2, 4, 1, 3]);

    assert!(board.occupied(1, 0));
    assert!(board.occupied(3, 1));
    assert!(board.occupied(0, 2));
    assert!(board.occupied(2, 3));

    let occupied = (0..4)
        .flat_map(|row| (0..4).map(move |column| (row, column)))
        .filter(|&(row, column)| board.occupied(row, column))
        .count();
    assert_eq!(occupied, 4);
}

#[test]
fn four_queens_board_renders_byte_for_byte() {
    let board = BoardMatrix::from_assignment(&[2, 4, 1, 3]);

    let expected = vec![
        "    -------------------------",
        "4   |  *  |  R  |  *  |     |",
        "    -------------------------",
        "3   |     |  *  |     |  R  |",
        "    -------------------------",
        "2   |  R  |     |  *  |     |",
        "    -------------------------",
        "1   |     |  *  |  R  |  *  |",
        "    -------------------------",
        "       a     b     c     d",
    ];

    assert_eq!(render(&board), expected);
}

#[test]
fn trivial_board_renders_byte_for_byte() {
    let board = BoardMatrix::from_assignment(&[1]);

    let expected = vec!["    -------", "1   |  R  |", "    -------", "       a"];

    assert_eq!(render(&board), expected);
}

#[test]
fn rendering_is_idempotent() {
    let board = BoardMatrix::from_assignment(&[3, 1, 4, 2]);

    assert_eq!(render(&board), render(&board));
}

#[test]
fn two_digit_ranks_use_the_narrow_gutter() {
    let board = BoardMatrix::from_assignment(&[1, 3, 5, 7, 9, 2, 4, 6, 8, 10]);
    let lines = render(&board);

    // Ranks print from 10 down to 1; the separator width grows with n.
    assert_eq!(lines[0], format!("    {}", "-".repeat(61)));
    assert!(lines[1].starts_with("10  |"));
    assert!(lines[3].starts_with("9   |"));
    assert_eq!(lines[1].len(), lines[3].len());
}

#[test]
fn checkerboard_stars_sit_on_matching_parities() {
    // Rank 1 is odd, so its stars sit on the odd files b and d; the queen
    // on file c overrides the empty cell there.
    let board = BoardMatrix::from_assignment(&[2, 4, 1, 3]);
    let lines = render(&board);

    assert_eq!(lines[7], "1   |     |  *  |  R  |  *  |");
}
