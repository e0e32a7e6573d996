//! Turning complete placements into their user-facing representations.

pub mod board;
pub mod trace;

/// Renders an assignment as the position list shared by every output form,
/// e.g. `"a2 b4 c1 d3 "` for the first solution on a 4 x 4 board.
///
/// Each row contributes its letter (row 0 is column `a` on the printed
/// board) followed by the 1-based column value and a single space, trailing
/// space included. Existing output and trace files use exactly this shape,
/// so it is kept verbatim.
pub fn positions_text(assignment: &[u32]) -> String {
    let mut text = String::new();

    for (row, &column) in assignment.iter().enumerate() {
        text.push((b'a' + row as u8) as char);
        text.push_str(&column.to_string());
        text.push(' ');
    }

    text
}

/// The sentence reported when the board admits no placement at all.
pub fn no_solution_message(n: i32) -> String {
    format!("The problem for n = {n} has no solution.")
}

/// The label line written above each rendered board.
pub fn solution_label(assignment: &[u32]) -> String {
    format!("Solution: {}", positions_text(assignment))
}

/// Collects the numbered solution lines of a run, in discovery order.
///
/// This is the sink for the plain text output modes; the graphical mode
/// bypasses it entirely and renders boards instead.
#[derive(Debug, Default)]
pub struct OutputLines {
    lines: Vec<String>,
}

impl OutputLines {
    /// Formats the given complete placement and appends it with the next
    /// 1-based solution number.
    pub fn push_solution(&mut self, assignment: &[u32]) {
        let number = self.lines.len() + 1;
        self.lines.push(format!("{number}: {}", positions_text(assignment)));
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
