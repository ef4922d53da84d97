//! Command line operations
//!
//! JavaScript entry points for the `:` command line of the sheet editor.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, deserialize_or_default, serialize};
use crate::command::{parse_command, CommandContext, CommandReply, CommandResult};
use crate::structure::Sheet;
use crate::{wasm_info, wasm_warn};

/// Parse and resolve a command line
///
/// # Parameters
/// - `input`: the command line, including the leading `:`
/// - `context`: `{currentLine?, lastLine?}`, may be `undefined`
///
/// # Returns
/// `{command: "i", range: {start, end}, arg}` and friends on success,
/// `{command: false, reason}` when the command is rejected
#[wasm_bindgen(js_name = parseCommand)]
pub fn parse_command_js(input: &str, context: JsValue) -> Result<JsValue, JsValue> {
    let context: CommandContext = deserialize_or_default(context, "Invalid command context")?;
    let result = parse_command(input, &context);
    if let Err(e) = &result {
        wasm_warn!("parseCommand({:?}): {}", input, e);
    }
    serialize(&CommandReply(&result), "parseCommand serialization error")
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApplyReply<'a> {
    result: CommandReply<'a>,
    sheet: &'a Sheet,
    changed: bool,
}

/// Parse a command line against a sheet and apply it
///
/// # Parameters
/// - `sheet_js`: `{rows, nextId, columns}`
/// - `input`: the command line, including the leading `:`
/// - `current_line`: 1-based line of the cursor, if any
///
/// # Returns
/// `{result, sheet, changed}`. `sheet` is the new snapshot for row
/// commands and the unchanged input otherwise; file-level commands are
/// returned in `result` for the caller to act on.
#[wasm_bindgen(js_name = applyCommand)]
pub fn apply_command(
    sheet_js: JsValue,
    input: &str,
    current_line: Option<u32>,
) -> Result<JsValue, JsValue> {
    let sheet: Sheet = deserialize(sheet_js, "Invalid sheet")?;

    let (result, next): (CommandResult, Option<Sheet>) =
        match sheet.execute(input, current_line.map(|line| line as usize)) {
            Ok((command, next)) => (Ok(command), next),
            Err(e) => {
                wasm_warn!("applyCommand({:?}): {}", input, e);
                (Err(e), None)
            }
        };

    if let Some(next) = &next {
        wasm_info!("applyCommand({:?}): {} -> {} rows", input, sheet.rows.len(), next.rows.len());
    }

    let reply = ApplyReply {
        result: CommandReply(&result),
        sheet: next.as_ref().unwrap_or(&sheet),
        changed: next.is_some(),
    };
    serialize(&reply, "applyCommand serialization error")
}
