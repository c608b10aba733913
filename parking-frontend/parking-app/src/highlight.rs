use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::{
    error::AppResult,
    selectors::{SELECTED_ROW_CLASS, TABLE_ROW_SELECTOR},
};

/// Every row present right now toggles `selected-row` on click.
/// Rows are independent, any number can be selected.
pub(crate) fn bind_row_highlight(document: &Document) -> AppResult<Vec<EventListener>> {
    let rows = document.query_selector_all(TABLE_ROW_SELECTOR)?;
    let mut listeners = Vec::with_capacity(rows.length() as usize);
    for index in 0..rows.length() {
        let Some(row) = rows.item(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        let target = row.clone();
        listeners.push(EventListener::new(&row, "click", move |_| {
            _ = target.class_list().toggle(SELECTED_ROW_CLASS);
        }));
    }
    Ok(listeners)
}
