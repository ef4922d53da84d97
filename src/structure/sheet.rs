//! Sheet snapshots and command application
//!
//! A sheet is a list of rows of strings. Field 0 of every row is its numeric
//! id, unique within the sheet; the remaining fields are the cell values.
//! Applying a row command never touches the sheet it is called on.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::operations::{del_rows, insert_rows, move_rows};
use crate::command::{parse_command, Command, CommandContext, CommandError, LineRange};

/// One sheet row: `[id, field1, field2, ...]`
pub type Row = Vec<String>;

/// A new row with the given id and `columns` empty fields
pub fn empty_row(id: u64, columns: usize) -> Row {
    let mut row = Vec::with_capacity(columns + 1);
    row.push(id.to_string());
    row.resize(columns + 1, String::new());
    row
}

/// One more than the largest id in `rows`, or `start` if that is larger
pub fn next_id(rows: &[Row], start: u64) -> u64 {
    rows.iter()
        .filter_map(|row| row.first()?.parse::<u64>().ok())
        .fold(start, |acc, id| acc.max(id.saturating_add(1)))
}

/// 1-based number of the last row that has any content, 0 if none does
pub fn last_line(rows: &[Row]) -> usize {
    rows.iter()
        .rposition(|row| row.iter().skip(1).any(|field| !field.is_empty()))
        .map_or(0, |index| index + 1)
}

/// Fit `row` to the shape of `template`: extra fields are dropped, missing
/// ones are taken from the template.
pub fn merge_row(template: &[String], row: &[String]) -> Row {
    if row.len() >= template.len() {
        return row[..template.len()].to_vec();
    }
    let mut merged = row.to_vec();
    merged.extend_from_slice(&template[row.len()..]);
    merged
}

/// Row command that does not fit the sheet it is applied to
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SheetError {
    #[error("Range {range} is outside the sheet ({rows} rows)")]
    RangeOutOfBounds { range: LineRange, rows: usize },

    #[error("Can not move {count} rows to line {dest} of a {rows} row sheet")]
    DestinationOutOfBounds { dest: usize, count: usize, rows: usize },
}

/// A snapshot of the rows being edited
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sheet {
    pub rows: Vec<Row>,
    /// Id handed to the next inserted row
    pub next_id: u64,
    /// Number of value fields per row, not counting the id
    pub columns: usize,
}

impl Sheet {
    /// A sheet of `blank_rows` empty rows
    pub fn new(columns: usize, blank_rows: usize) -> Self {
        let rows = (0..blank_rows as u64).map(|id| empty_row(id, columns)).collect();
        Self {
            rows,
            next_id: blank_rows as u64,
            columns,
        }
    }

    /// Wrap existing rows, picking the next id after the largest one present
    pub fn from_rows(rows: Vec<Row>, columns: usize) -> Self {
        let next_id = next_id(&rows, 0);
        Self {
            rows,
            next_id,
            columns,
        }
    }

    pub fn last_line(&self) -> usize {
        last_line(&self.rows)
    }

    /// Resolution context for a command typed on `current_line`
    pub fn context(&self, current_line: Option<usize>) -> CommandContext {
        CommandContext {
            current_line,
            last_line: Some(self.last_line()),
        }
    }

    /// Same rows reshaped to `columns` value fields
    pub fn with_columns(&self, columns: usize) -> Sheet {
        let template = empty_row(0, columns);
        Sheet {
            rows: self.rows.iter().map(|row| merge_row(&template, row)).collect(),
            next_id: self.next_id,
            columns,
        }
    }

    fn check_range(&self, range: LineRange) -> Result<(), SheetError> {
        if range.start == 0 || range.end > self.rows.len() {
            return Err(SheetError::RangeOutOfBounds {
                range,
                rows: self.rows.len(),
            });
        }
        Ok(())
    }

    /// Apply a resolved row command and return the new snapshot.
    ///
    /// File-level commands (`w`, `schema`, `share`) are left to the caller
    /// and give `Ok(None)`.
    pub fn apply(&self, command: &Command) -> Result<Option<Sheet>, SheetError> {
        let next = match command {
            Command::Insert { range, count } => {
                // Inserting before the row after the last one appends
                if range.start == 0 || range.start > self.rows.len() + 1 {
                    return Err(SheetError::RangeOutOfBounds {
                        range: *range,
                        rows: self.rows.len(),
                    });
                }
                let new_rows: Vec<Row> = (0..*count as u64)
                    .map(|n| empty_row(self.next_id + n, self.columns))
                    .collect();
                Sheet {
                    rows: insert_rows(&self.rows, range.start - 1, &new_rows),
                    next_id: self.next_id + *count as u64,
                    columns: self.columns,
                }
            }
            Command::Move { range, dest } => {
                self.check_range(*range)?;
                let count = range.line_count();
                if *dest > self.rows.len() - count {
                    return Err(SheetError::DestinationOutOfBounds {
                        dest: *dest,
                        count,
                        rows: self.rows.len(),
                    });
                }
                Sheet {
                    rows: move_rows(&self.rows, range.start - 1, range.end, Some(*dest)),
                    ..self.clone()
                }
            }
            Command::Delete { range } => {
                self.check_range(*range)?;
                Sheet {
                    rows: del_rows(&self.rows, range.start - 1, range.end),
                    ..self.clone()
                }
            }
            Command::Write(_) | Command::Schema(_) | Command::Share(_) => return Ok(None),
        };

        log::debug!(
            "applied :{} -> {} rows (was {})",
            command.name(),
            next.rows.len(),
            self.rows.len()
        );
        Ok(Some(next))
    }

    /// Parse `input` against this sheet and apply it.
    ///
    /// Returns the resolved command and, for row commands, the new
    /// snapshot. A command that parses but does not fit the rows is
    /// rejected as a whole.
    pub fn execute(
        &self,
        input: &str,
        current_line: Option<usize>,
    ) -> Result<(Command, Option<Sheet>), CommandError> {
        let command = parse_command(input, &self.context(current_line))?;
        let next = self.apply(&command)?;
        Ok((command, next))
    }
}
