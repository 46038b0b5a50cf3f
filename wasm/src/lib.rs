//! WebAssembly module for Agro-Info
//!
//! Runs the phase engine in the browser so the advisory screen works
//! offline once the page is loaded. Values cross the boundary as JSON
//! strings in the same shapes the backend returns.

use chrono::NaiveDate;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use shared::{FieldPolygon, GpsCoordinates, WeatherSnapshot};

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Empty input means no forecast is available
fn parse_weather(weather_json: &str) -> Result<Option<WeatherSnapshot>, serde_json::Error> {
    if weather_json.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(weather_json).map(Some)
}

/// Forecast for the overlay; unreadable input is logged and treated as missing
fn weather_or_none(weather_json: &str) -> Option<WeatherSnapshot> {
    match parse_weather(weather_json) {
        Ok(weather) => weather,
        Err(e) => {
            web_sys::console::warn_1(&JsValue::from_str(&format!(
                "Ignoring unreadable weather data: {}",
                e
            )));
            None
        }
    }
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, JsValue> {
    value
        .parse::<NaiveDate>()
        .map_err(|e| JsValue::from_str(&format!("Invalid {}: {}", field, e)))
}

/// Today's date in the browser's time zone
fn browser_today() -> Result<NaiveDate, JsValue> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .ok_or_else(|| JsValue::from_str("Browser clock returned an invalid date"))
}

/// Pre-planting checklist as a JSON array of strings
#[wasm_bindgen]
pub fn pre_planting_advice(crop: &str) -> Result<String, JsValue> {
    to_json(shared::advise(crop))
}

/// Phase and weather-adjusted recommendations as a `PhaseResolution` JSON object
///
/// Pass an empty string for `weather_json` when no forecast is available.
#[wasm_bindgen]
pub fn evaluate_phase(crop: &str, elapsed_days: i32, weather_json: &str) -> Result<String, JsValue> {
    let weather = weather_or_none(weather_json);
    let resolution = shared::evaluate(crop, i64::from(elapsed_days), weather.as_ref());
    to_json(&resolution)
}

/// Progress metrics as a `ProgressMetrics` JSON object
#[wasm_bindgen]
pub fn compute_progress(crop: &str, elapsed_days: i32, planting_date: &str) -> Result<String, JsValue> {
    let planting_date = parse_date("planting date", planting_date)?;
    to_json(&shared::compute(crop, i64::from(elapsed_days), planting_date))
}

/// Full advisory for a planting date
///
/// `today` defaults to the browser's local date.
#[wasm_bindgen]
pub fn evaluate_advisory(
    crop: &str,
    planting_date: &str,
    today: Option<String>,
    weather_json: &str,
) -> Result<String, JsValue> {
    let planting_date = parse_date("planting date", planting_date)?;
    let today = match today {
        Some(today) => parse_date("today", &today)?,
        None => browser_today()?,
    };
    let weather = weather_or_none(weather_json);

    to_json(&shared::build_advisory(crop, planting_date, today, weather.as_ref()))
}

/// Centroid of a drawn field as a `GpsCoordinates` JSON object
#[wasm_bindgen]
pub fn field_centroid(polygon_json: &str) -> Result<String, JsValue> {
    let vertices: Vec<GpsCoordinates> = serde_json::from_str(polygon_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid polygon JSON: {}", e)))?;
    let polygon = FieldPolygon::new(vertices);

    shared::validate_field_polygon(&polygon).map_err(JsValue::from_str)?;
    to_json(&polygon.centroid())
}

/// Whether a planting date is still in the future, which blocks evaluation
#[wasm_bindgen]
pub fn is_future_planting_date(planting_date: &str, today: &str) -> Result<bool, JsValue> {
    Ok(shared::is_future_planting_date(
        parse_date("planting date", planting_date)?,
        parse_date("today", today)?,
    ))
}
