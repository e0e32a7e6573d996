//! The chessboard rendering of a single solution.

/// An `n` x `n` grid of cells derived from one complete placement; a cell
/// holds 1 iff a queen stands on it.
///
/// The grid is indexed `(rank - 1, file)` with rank 1 at the bottom of the
/// printed board, so the queen of assignment row `i` with column value `v`
/// occupies cell `(v - 1, i)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardMatrix {
    size: usize,
    cells: Vec<u8>,
}

impl BoardMatrix {
    pub fn from_assignment(assignment: &[u32]) -> BoardMatrix {
        let size = assignment.len();
        let mut cells = vec![0; size * size];

        for (file, &value) in assignment.iter().enumerate() {
            cells[(value as usize - 1) * size + file] = 1;
        }

        BoardMatrix { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn occupied(&self, row: usize, column: usize) -> bool {
        self.cells[row * self.size + column] == 1
    }
}

/// Draws the board as fixed-width ASCII art, one element of the returned
/// vector per line.
///
/// Ranks are printed from the top of the board down, i.e. rank `n` first and
/// rank 1 last, each preceded by a separator of `6n + 1` dashes behind a
/// four-space margin. The rank number gutter is padded to the same width for
/// one- and two-digit numbers. Every cell is a six-character field: `  R  |`
/// under a queen, and otherwise a checkerboard where even ranks carry a star
/// on even files and odd ranks on odd files. A final separator and a line of
/// file letters close the drawing.
///
/// The function is a pure formatter; rendering the same matrix twice yields
/// identical lines.
pub fn render(board: &BoardMatrix) -> Vec<String> {
    let n = board.size();
    let separator = format!("    {}", "-".repeat(6 * n + 1));
    let mut lines = Vec::with_capacity(2 * n + 2);

    for rank in (1..=n).rev() {
        lines.push(separator.clone());

        let mut line = if rank < 10 {
            format!("{rank}   |")
        } else {
            format!("{rank}  |")
        };

        for file in 0..n {
            if board.occupied(rank - 1, file) {
                line.push_str("  R  |");
            } else if rank % 2 == file % 2 {
                line.push_str("  *  |");
            } else {
                line.push_str("     |");
            }
        }

        lines.push(line);
    }

    lines.push(separator);

    let mut letters = "  ".to_owned();
    for file in 0..n {
        let letter = (b'a' + file as u8) as char;
        letters.push_str(&format!("{letter:>6}"));
    }
    lines.push(letters);

    lines
}
