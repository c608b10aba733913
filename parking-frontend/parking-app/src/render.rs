use minijinja::{context, AutoEscape, Environment};
use parking_api_types::{present, ParkingLog, Scalar, SearchResponse, Vehicle};
use serde::Serialize;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use web_sys::{Document, Element, HtmlElement};

use crate::error::AppResult;
#[cfg(feature = "hydrate")]
use crate::{
    error::AppError,
    selectors::{RESULTS_CLASS, RESULTS_CLASS_SELECTOR, RESULTS_ID},
};

/// The `.html` suffix turns on HTML auto-escaping.
const RESULTS_TEMPLATE_NAME: &str = "search_results.html";
const RESULTS_TEMPLATE: &str = "\
    {% if vehicles %}\
        <h3>Registered Vehicles</h3>\
        <table class=\"table\"><thead><tr>\
            <th>Plate</th><th>Name</th><th>Type</th><th>Mobile</th>\
        </tr></thead><tbody>\
        {% for v in vehicles %}\
            <tr><td>{{ v.plate_number }}</td><td>{{ v.full_name }}</td>\
            <td>{{ v.vehicle_type }}</td><td>{{ v.mobile_no }}</td></tr>\
        {% endfor %}\
        </tbody></table>\
    {% endif %}\
    {% if logs %}\
        <h3>Parking Logs</h3>\
        <table class=\"table\"><thead><tr>\
            <th>ID</th><th>Plate</th><th>Time In</th><th>Time Out</th><th>Area</th>\
        </tr></thead><tbody>\
        {% for l in logs %}\
            <tr><td>{{ l.id }}</td><td>{{ l.plate_number }}</td><td>{{ l.time_in }}</td>\
            <td>{{ l.time_out }}</td><td>{{ l.parking_area }}</td></tr>\
        {% endfor %}\
        </tbody></table>\
    {% endif %}\
    {% if not vehicles and not logs %}<p>No results found.</p>{% endif %}";

const MISSING_LOG_FIELD: &str = "-";

/// How server values are written into the results markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Markup {
    Escaped,
    /// Values are inserted verbatim. Only for pages that relied on the
    /// backend sending markup in its fields.
    Raw,
}

#[derive(Serialize)]
struct VehicleRow {
    plate_number: String,
    full_name: String,
    vehicle_type: String,
    mobile_no: String,
}

impl From<&Vehicle> for VehicleRow {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            plate_number: shown(&vehicle.plate_number),
            full_name: shown(&vehicle.full_name),
            vehicle_type: or_missing(&vehicle.vehicle_type, ""),
            mobile_no: or_missing(&vehicle.mobile_no, ""),
        }
    }
}

#[derive(Serialize)]
struct LogRow {
    id: String,
    plate_number: String,
    time_in: String,
    time_out: String,
    parking_area: String,
}

impl From<&ParkingLog> for LogRow {
    fn from(log: &ParkingLog) -> Self {
        Self {
            id: shown(&log.id),
            plate_number: shown(&log.plate_number),
            time_in: or_missing(&log.time_in, MISSING_LOG_FIELD),
            time_out: or_missing(&log.time_out, MISSING_LOG_FIELD),
            parking_area: or_missing(&log.parking_area, MISSING_LOG_FIELD),
        }
    }
}

/// Required columns print whatever came back, an absent one is an empty cell.
fn shown(value: &Option<Scalar>) -> String {
    value.as_ref().map(Scalar::to_string).unwrap_or_default()
}

fn or_missing(value: &Option<Scalar>, missing: &str) -> String {
    present(value).map_or_else(|| missing.to_string(), Scalar::to_string)
}

fn environment(markup: Markup) -> AppResult<Environment<'static>> {
    let mut env = Environment::new();
    if markup == Markup::Raw {
        env.set_auto_escape_callback(|_| AutoEscape::None);
    }
    env.add_template(RESULTS_TEMPLATE_NAME, RESULTS_TEMPLATE)?;
    Ok(env)
}

/// Builds the full inner HTML of the results container.
pub fn render_results(response: &SearchResponse, markup: Markup) -> AppResult<String> {
    let env = environment(markup)?;
    let vehicles: Vec<VehicleRow> = response.vehicles().iter().map(VehicleRow::from).collect();
    let logs: Vec<LogRow> = response.logs().iter().map(LogRow::from).collect();
    let html = env
        .get_template(RESULTS_TEMPLATE_NAME)?
        .render(context! { vehicles, logs })?;
    Ok(html)
}

#[cfg(feature = "hydrate")]
fn html_element(element: Element) -> AppResult<HtmlElement> {
    element
        .dyn_into::<HtmlElement>()
        .map_err(|e| AppError::Dom(format!("<{}> is not an HtmlElement", e.tag_name())))
}

/// `#search-results`, then `.search-results`, otherwise a fresh
/// `div.search-results` placed at the top of the body.
#[cfg(feature = "hydrate")]
pub fn results_container(document: &Document) -> AppResult<HtmlElement> {
    let existing = match document.get_element_by_id(RESULTS_ID) {
        Some(element) => Some(element),
        None => document.query_selector(RESULTS_CLASS_SELECTOR)?,
    };
    if let Some(element) = existing {
        return html_element(element);
    }
    let body = document
        .body()
        .ok_or_else(|| AppError::Dom("document has no body".to_string()))?;
    let container = html_element(document.create_element("div")?)?;
    container.set_class_name(RESULTS_CLASS);
    body.insert_before(&container, body.first_child().as_ref())?;
    Ok(container)
}

/// Shows the results container and replaces everything in it.
#[cfg(feature = "hydrate")]
pub fn render_into_page(
    document: &Document,
    response: &SearchResponse,
    markup: Markup,
) -> AppResult<HtmlElement> {
    let container = results_container(document)?;
    container.style().set_property("display", "block")?;
    container.set_inner_html(&render_results(response, markup)?);
    Ok(container)
}
