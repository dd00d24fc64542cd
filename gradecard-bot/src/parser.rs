//! Grade card table parsing.
//!
//! The portal renders one `<tr valign="middle">` per subject. Cells 0 and 1 hold the subject code
//! and assignment marks, cell 8 the completion status. The second score sits in a different
//! column for lab subjects, see [`SubjectLayout`].

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::error::ParseError;

/// Selector for data rows; the portal marks them with mid-aligned cells.
const ROW_SELECTOR: &str = r#"tr[valign="middle"]"#;
const CELL_SELECTOR: &str = "td";

const SUBJECT_CELL: usize = 0;
const ASSIGNMENT_CELL: usize = 1;
const STATUS_CELL: usize = 8;
/// Rows shorter than this cannot carry a status and are rejected.
pub const MIN_CELLS: usize = STATUS_CELL + 1;

/// Which column carries the theory (or viva/practical) score.
///
/// Rule: a subject code containing an uppercase `L` (e.g. `BCSL-013`) is a lab subject and its
/// score is in cell 7; every other subject is a theory subject with its score in cell 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectLayout {
    Theory,
    Lab,
}

impl SubjectLayout {
    pub fn for_subject(subject_name: &str) -> Self {
        if subject_name.contains('L') {
            SubjectLayout::Lab
        } else {
            SubjectLayout::Theory
        }
    }

    pub fn score_cell(self) -> usize {
        match self {
            SubjectLayout::Theory => 6,
            SubjectLayout::Lab => 7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionStatus {
    Completed,
    /// Anything else, with the portal's text as shown (logged at debug).
    Other(String),
}

impl CompletionStatus {
    /// `COMPLETED` (exact, case-sensitive) is the only completed value.
    pub fn from_cell(text: &str) -> Self {
        if text == "COMPLETED" {
            CompletionStatus::Completed
        } else {
            CompletionStatus::Other(text.to_string())
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, CompletionStatus::Completed)
    }
}

/// One subject's result as shown on the grade card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectRecord {
    pub subject_name: String,
    pub assignment_marks: String,
    pub theory_or_viva_marks: String,
    pub status: CompletionStatus,
}

impl SubjectRecord {
    /// Builds a record from trimmed cell texts. Fails when fewer than [`MIN_CELLS`] cells are present.
    pub fn from_cells(row: usize, cells: &[String]) -> Result<Self, ParseError> {
        if cells.len() < MIN_CELLS {
            return Err(ParseError::MalformedRow {
                row,
                cells: cells.len(),
            });
        }
        let subject_name = cells[SUBJECT_CELL].clone();
        let layout = SubjectLayout::for_subject(&subject_name);
        Ok(Self {
            assignment_marks: cells[ASSIGNMENT_CELL].clone(),
            theory_or_viva_marks: cells[layout.score_cell()].clone(),
            status: CompletionStatus::from_cell(&cells[STATUS_CELL]),
            subject_name,
        })
    }
}

/// Extracts subject records from a grade card page, in row order.
///
/// Rows without `<td>` cells (e.g. a `<th>` header row carrying the same alignment) are not
/// data rows and are skipped silently, so a page made only of them is
/// [`ParseError::NoRecordsFound`] rather than an empty table. Rows with too few cells are
/// skipped with a warning; if every data row was short the first failure is returned. No data
/// rows at all means the enrollment number is unknown to the portal.
///
/// Rows must sit inside a `<table>`: the HTML5 tree builder discards a stray `<tr>` in body
/// context, so such markup also yields [`ParseError::NoRecordsFound`].
pub fn parse_gradecard(html: &str) -> Result<Vec<SubjectRecord>, ParseError> {
    let row_selector =
        Selector::parse(ROW_SELECTOR).map_err(|e| ParseError::Selector(e.to_string()))?;
    let cell_selector =
        Selector::parse(CELL_SELECTOR).map_err(|e| ParseError::Selector(e.to_string()))?;

    let document = Html::parse_document(html);
    let mut records = Vec::new();
    let mut first_malformed = None;
    let mut data_rows = 0usize;

    for (index, row) in document.select(&row_selector).enumerate() {
        let cells: Vec<String> = row.select(&cell_selector).map(cell_text).collect();
        if cells.is_empty() {
            continue;
        }
        data_rows += 1;

        match SubjectRecord::from_cells(index, &cells) {
            Ok(record) => {
                if let CompletionStatus::Other(status) = &record.status {
                    debug!(subject = %record.subject_name, status = %status, "Subject not completed");
                }
                records.push(record);
            }
            Err(e) => {
                warn!(row = index, cells = cells.len(), "Skipping malformed result row");
                first_malformed.get_or_insert(e);
            }
        }
    }

    debug!(data_rows, records = records.len(), "Parsed grade card");

    if !records.is_empty() {
        return Ok(records);
    }
    match first_malformed {
        Some(e) => Err(e),
        None => Err(ParseError::NoRecordsFound),
    }
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}
