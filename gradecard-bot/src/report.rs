//! Fixed-width result report and message chunking.

use crate::parser::{CompletionStatus, SubjectRecord};

/// Telegram rejects messages longer than this many characters.
pub const MAX_MESSAGE_LEN: usize = 4096;

pub const DEFAULT_TITLE: &str = "IGNOU Result:";

const SEPARATOR_WIDTH: usize = 28;

const GLYPH_COMPLETED: &str = "✅";
const GLYPH_OTHER: &str = "☑️";

/// Ordered subject records, printed under [`DEFAULT_TITLE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultReport {
    records: Vec<SubjectRecord>,
}

impl ResultReport {
    pub fn new(records: Vec<SubjectRecord>) -> Self {
        Self { records }
    }

    /// Renders the report:
    ///
    /// ```text
    /// IGNOU Result:
    ///
    /// Subject    A    T/V   Status
    /// ----------------------------
    /// BCS-012    18   55    ✅
    /// ```
    ///
    /// Columns are left-justified to 10/4/5/7 characters; longer values overflow instead of
    /// being cut.
    pub fn render(&self) -> String {
        let mut out = format!("{}\n\n", DEFAULT_TITLE);
        out.push_str(&table_row("Subject", "A", "T/V", "Status"));
        out.push_str(&"-".repeat(SEPARATOR_WIDTH));
        out.push('\n');
        for record in &self.records {
            out.push_str(&table_row(
                &record.subject_name,
                &record.assignment_marks,
                &record.theory_or_viva_marks,
                status_glyph(&record.status),
            ));
        }
        out
    }

    /// Rendered report split into message-sized pieces.
    pub fn to_messages(&self) -> Vec<String> {
        split_message(&self.render(), MAX_MESSAGE_LEN)
    }
}

fn table_row(subject: &str, assignment: &str, theory: &str, status: &str) -> String {
    format!("{:<10} {:<4} {:<5} {:<7}\n", subject, assignment, theory, status)
}

pub fn status_glyph(status: &CompletionStatus) -> &'static str {
    match status {
        CompletionStatus::Completed => GLYPH_COMPLETED,
        CompletionStatus::Other(_) => GLYPH_OTHER,
    }
}

/// Splits `text` into consecutive pieces of at most `max_len` characters.
///
/// Cuts at fixed character offsets, so a piece may end mid-line. Every piece except the last
/// has exactly `max_len` characters, and joining the pieces gives back `text`. An empty input
/// yields no pieces. A `max_len` of zero is treated as one.
pub fn split_message(text: &str, max_len: usize) -> Vec<String> {
    let max_len = max_len.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut count = 0;

    for ch in text.chars() {
        current.push(ch);
        count += 1;
        if count == max_len {
            chunks.push(std::mem::take(&mut current));
            count = 0;
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
