// Applying command lines to sheet snapshots

use sheet_editor_wasm::command::{Command, CommandError, LineRange};
use sheet_editor_wasm::structure::{Row, Sheet, SheetError};

fn row(fields: &[&str]) -> Row {
    fields.iter().map(|s| s.to_string()).collect()
}

/// Five filled rows with ids 0..5 followed by two blank ones
fn groceries() -> Sheet {
    Sheet::from_rows(
        vec![
            row(&["0", "milk"]),
            row(&["1", "eggs"]),
            row(&["2", "bread"]),
            row(&["3", "apples"]),
            row(&["4", "coffee"]),
            row(&["5", ""]),
            row(&["6", ""]),
        ],
        1,
    )
}

fn items(sheet: &Sheet) -> Vec<&str> {
    sheet.rows.iter().map(|r| r[1].as_str()).collect()
}

fn ids(sheet: &Sheet) -> Vec<&str> {
    sheet.rows.iter().map(|r| r[0].as_str()).collect()
}

#[test]
fn test_context_uses_last_filled_row() {
    let sheet = groceries();
    assert_eq!(sheet.last_line(), 5);
    assert_eq!(sheet.next_id, 7);
    let ctx = sheet.context(Some(2));
    assert_eq!(ctx.current_line, Some(2));
    assert_eq!(ctx.last_line, Some(5));
}

#[test]
fn test_insert_before_line() {
    let sheet = groceries();
    let (command, next) = sheet.execute(":3i2", None).unwrap();
    assert_eq!(
        command,
        Command::Insert {
            range: LineRange::new(3, 3),
            count: 2,
        }
    );
    let next = next.unwrap();
    assert_eq!(
        items(&next),
        vec!["milk", "eggs", "", "", "bread", "apples", "coffee", "", ""]
    );
    assert_eq!(ids(&next)[2..4], ["7", "8"]);
    assert_eq!(next.next_id, 9);
}

#[test]
fn test_insert_at_cursor_defaults_to_one_row() {
    let sheet = groceries();
    let (_, next) = sheet.execute(":i", Some(1)).unwrap();
    let next = next.unwrap();
    assert_eq!(next.rows.len(), 8);
    assert_eq!(next.rows[0], row(&["7", ""]));
    assert_eq!(next.next_id, 8);
}

#[test]
fn test_ids_stay_unique_across_inserts() {
    let mut sheet = groceries();
    for _ in 0..3 {
        let (_, next) = sheet.execute(":1i2", None).unwrap();
        sheet = next.unwrap();
    }
    let mut seen = ids(&sheet);
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), sheet.rows.len());
}

#[test]
fn test_move_range_to_top() {
    let sheet = groceries();
    let (_, next) = sheet.execute(":4,5m0", None).unwrap();
    assert_eq!(
        items(&next.unwrap()),
        vec!["apples", "coffee", "milk", "eggs", "bread", "", ""]
    );
}

#[test]
fn test_move_relative_to_cursor() {
    let sheet = groceries();
    let (command, next) = sheet.execute(":.,+1m3", Some(1)).unwrap();
    assert_eq!(
        command,
        Command::Move {
            range: LineRange::new(1, 2),
            dest: 3,
        }
    );
    assert_eq!(
        items(&next.unwrap()),
        vec!["bread", "apples", "coffee", "milk", "eggs", "", ""]
    );
}

#[test]
fn test_delete_to_end() {
    let sheet = groceries();
    let (_, next) = sheet.execute(":.,$d", Some(2)).unwrap();
    let next = next.unwrap();
    assert_eq!(items(&next), vec!["milk", "", ""]);
    // Deleting never hands out ids again
    assert_eq!(next.next_id, 7);
}

#[test]
fn test_whole_sheet_delete() {
    let sheet = groceries();
    let (_, next) = sheet.execute(":%d", None).unwrap();
    assert_eq!(items(&next.unwrap()), vec!["", ""]);
}

#[test]
fn test_input_sheet_is_unchanged() {
    let sheet = groceries();
    let before = sheet.clone();
    let _ = sheet.execute(":2,4d", None);
    let _ = sheet.execute(":1,2m4", None);
    let _ = sheet.execute(":1i5", None);
    assert_eq!(sheet, before);
}

#[test]
fn test_range_past_last_line_is_rejected() {
    let sheet = groceries();
    assert_eq!(
        sheet.execute(":4,6d", None),
        Err(CommandError::RangeOutOfBounds { start: 4, end: 6 })
    );
    assert_eq!(
        sheet.execute(":1m6", None),
        Err(CommandError::DestinationOutOfBounds(6))
    );
}

#[test]
fn test_destination_past_remaining_rows_is_rejected() {
    // Move resolution only sees the last filled line; the sheet checks the
    // destination against the rows left after the move source is removed.
    let sheet = Sheet::from_rows(
        vec![row(&["0", "a"]), row(&["1", "b"]), row(&["2", "c"])],
        1,
    );
    assert_eq!(
        sheet.apply(&Command::Move {
            range: LineRange::new(1, 2),
            dest: 3,
        }),
        Err(SheetError::DestinationOutOfBounds {
            dest: 3,
            count: 2,
            rows: 3,
        })
    );
    assert!(sheet.execute(":1,2m1", None).is_ok());
}

#[test]
fn test_apply_checks_rows_for_unchecked_commands() {
    let sheet = groceries();
    let command = Command::Delete {
        range: LineRange::new(6, 9),
    };
    assert_eq!(
        sheet.apply(&command),
        Err(SheetError::RangeOutOfBounds {
            range: LineRange::new(6, 9),
            rows: 7,
        })
    );
    let err = CommandError::from(sheet.apply(&command).unwrap_err());
    assert_eq!(err.to_string(), "Range [6, 9] is outside the sheet (7 rows)");
}

#[test]
fn test_file_commands_leave_rows_to_caller() {
    let sheet = groceries();
    assert_eq!(
        sheet.execute(":w groceries", None),
        Ok((Command::Write("groceries".into()), None))
    );
    assert_eq!(
        sheet.execute(":w a/b", None),
        Err(CommandError::NameForbiddenChar('/'))
    );
}

#[test]
fn test_schema_switch_reshapes_rows() {
    let sheet = groceries();
    let (command, next) = sheet.execute(":schema dated", None).unwrap();
    assert_eq!(command, Command::Schema("dated".into()));
    assert!(next.is_none());

    let wider = sheet.with_columns(2);
    assert_eq!(wider.rows[0], row(&["0", "milk", ""]));
    assert_eq!(wider.last_line(), 5);
}
