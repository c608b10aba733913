//! Class names, ids and selectors the server-rendered pages use.

pub const TABLE_ROW_SELECTOR: &str = "table tr";
pub const SELECTED_ROW_CLASS: &str = "selected-row";

pub const SEARCH_INPUT_SELECTOR: &str = ".global-search-input";
pub const SEARCH_BUTTON_SELECTOR: &str = ".global-search-btn";

pub const RESULTS_ID: &str = "search-results";
pub const RESULTS_CLASS: &str = "search-results";
pub const RESULTS_CLASS_SELECTOR: &str = ".search-results";

pub const NOTICE_CLASS: &str = "floating-notice";
pub const NOTICE_VISIBLE_CLASS: &str = "visible";
