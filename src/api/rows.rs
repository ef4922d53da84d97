//! Row operations
//!
//! JavaScript bindings for the copy-on-write row operations. Rows are
//! opaque JSON values here; the returned array is always a new one.

use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, serialize};
use crate::structure::{self, Row};
use crate::wasm_log;

/// Insert `to_insert` before `index`; `index === rows.length` appends
#[wasm_bindgen(js_name = insertRows)]
pub fn insert_rows(rows: JsValue, index: usize, to_insert: JsValue) -> Result<JsValue, JsValue> {
    let rows: Vec<Value> = deserialize(rows, "Invalid rows")?;
    let to_insert: Vec<Value> = deserialize(to_insert, "Invalid rows to insert")?;
    wasm_log!("insertRows: {} rows at {}", to_insert.len(), index);
    let next = structure::insert_rows(&rows, index, &to_insert);
    serialize(&next, "insertRows serialization error")
}

/// Move `[srcStart, srcEnd)` to `dstStart` in the array left after removal.
/// A negative `dstStart` drops the rows instead.
#[wasm_bindgen(js_name = moveRows)]
pub fn move_rows(
    rows: JsValue,
    src_start: usize,
    src_end: usize,
    dst_start: i32,
) -> Result<JsValue, JsValue> {
    let rows: Vec<Value> = deserialize(rows, "Invalid rows")?;
    let dst = usize::try_from(dst_start).ok();
    wasm_log!("moveRows: [{}, {}) -> {:?}", src_start, src_end, dst);
    let next = structure::move_rows(&rows, src_start, src_end, dst);
    serialize(&next, "moveRows serialization error")
}

/// Remove `[start, end)`
#[wasm_bindgen(js_name = delRows)]
pub fn del_rows(rows: JsValue, start: usize, end: usize) -> Result<JsValue, JsValue> {
    let rows: Vec<Value> = deserialize(rows, "Invalid rows")?;
    wasm_log!("delRows: [{}, {})", start, end);
    serialize(&structure::del_rows(&rows, start, end), "delRows serialization error")
}

/// 1-based number of the last row with content, 0 for a blank sheet
#[wasm_bindgen(js_name = lastLine)]
pub fn last_line(rows: JsValue) -> Result<usize, JsValue> {
    let rows: Vec<Row> = deserialize(rows, "Invalid rows")?;
    Ok(structure::last_line(&rows))
}
