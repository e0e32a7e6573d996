//! Recording of accepted and rejected placement attempts.

use crate::output::positions_text;

pub(crate) const ACCEPTED_PREFIX: &str =
    "Position accepted: |============================================> ";
pub(crate) const REJECTED_PREFIX: &str = "Rejected position: ";

/// Append-only log of the attempts made while filling the last row.
///
/// Every recorded attempt becomes one line, in attempt order, with no
/// deduplication: the same rejected prefix can appear many times when the
/// search reaches the last row through different partial placements. The
/// engine decides *which* attempts qualify; the recorder only formats them.
#[derive(Debug, Default)]
pub struct TraceRecorder {
    events: Vec<String>,
}

impl TraceRecorder {
    pub fn new() -> TraceRecorder {
        TraceRecorder::default()
    }

    /// Appends one accepted or rejected line for the given attempt.
    pub fn record(&mut self, assignment: &[u32], accepted: bool) {
        let positions = positions_text(assignment);
        let prefix = if accepted {
            ACCEPTED_PREFIX
        } else {
            REJECTED_PREFIX
        };

        self.events.push(format!("{prefix}{positions}"));
    }

    pub fn lines(&self) -> &[String] {
        &self.events
    }
}
