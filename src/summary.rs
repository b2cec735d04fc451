// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Console formatting of activity summaries

use serde_json::Value;

const BORDER_WIDTH: usize = 50;

/// Formats an activity as a bordered text block. Missing fields fall back
/// to fixed defaults instead of failing; distance is reported in km and
/// moving time in minutes.
pub fn format_activity_summary(activity: &Value) -> String {
    let name = activity
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("Sin nombre");
    let activity_type = activity
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or("N/A");
    let start_date = activity
        .get("start_date_local")
        .and_then(Value::as_str)
        .unwrap_or("N/A");
    let distance_km = activity
        .get("distance")
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
        / 1000.0;
    let moving_time_min = activity
        .get("moving_time")
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
        / 60.0;
    let elevation_gain = activity
        .get("total_elevation_gain")
        .and_then(Value::as_f64)
        .unwrap_or(0.0);

    let border = "=".repeat(BORDER_WIDTH);

    format!(
        "{border}\n\
         Actividad: {name}\n\
         Tipo: {activity_type}\n\
         Fecha: {start_date}\n\
         Distancia: {distance_km:.2} km\n\
         Tiempo en movimiento: {moving_time_min:.2} min\n\
         Desnivel acumulado: {elevation_gain:.0} m\n\
         {border}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_activity_summary() {
        let activity = json!({
            "name": "Run",
            "type": "Run",
            "distance": 5000,
            "moving_time": 1800,
            "total_elevation_gain": 120,
            "start_date_local": "2024-01-01"
        });

        let summary = format_activity_summary(&activity);

        assert!(summary.contains("Actividad: Run"));
        assert!(summary.contains("Tipo: Run"));
        assert!(summary.contains("Fecha: 2024-01-01"));
        assert!(summary.contains("Distancia: 5.00 km"));
        assert!(summary.contains("Tiempo en movimiento: 30.00 min"));
        assert!(summary.contains("Desnivel acumulado: 120 m"));
    }

    #[test]
    fn test_format_activity_summary_defaults() {
        let summary = format_activity_summary(&json!({}));

        assert!(summary.contains("Actividad: Sin nombre"));
        assert!(summary.contains("Tipo: N/A"));
        assert!(summary.contains("Fecha: N/A"));
        assert!(summary.contains("Distancia: 0.00 km"));
        assert!(summary.contains("Tiempo en movimiento: 0.00 min"));
        assert!(summary.contains("Desnivel acumulado: 0 m"));
    }

    #[test]
    fn test_format_activity_summary_border() {
        let summary = format_activity_summary(&json!({"name": "Ride"}));

        let border = "=".repeat(50);
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines[0], border);
        assert_eq!(lines[lines.len() - 1], border);
    }

    #[test]
    fn test_format_activity_summary_ignores_wrong_types() {
        // A field of the wrong JSON type falls back to its default
        let activity = json!({
            "name": 42,
            "distance": "far"
        });

        let summary = format_activity_summary(&activity);

        assert!(summary.contains("Actividad: Sin nombre"));
        assert!(summary.contains("Distancia: 0.00 km"));
    }
}
