//! HTML rendering of the history table.
//!
//! The page template is compiled into the binary and registered once at
//! startup; handlers share the resulting [`Renderer`].

use chrono::{DateTime, Local};
use handlebars::{handlebars_helper, Handlebars, RenderError, TemplateError};

use crate::view::HistoryTable;

// ---

const INDEX_TEMPLATE: &str = include_str!("../html/index.html");
const INDEX: &str = "index";

/// Display format for reading times, e.g. `2025-03-26 01:45:00 PM`.
pub const DATE_FORMAT: &str = "%Y-%m-%d %I:%M:%S %p";

handlebars_helper!(format_date: |ts: str| {
    DateTime::parse_from_rfc3339(ts)
        .map(|t| t.with_timezone(&Local).format(DATE_FORMAT).to_string())
        .unwrap_or_else(|_| ts.to_string())
});

handlebars_helper!(format_temp: |temp_f: f64| format!("{temp_f:.1}"));

/// Compiled page templates.
pub struct Renderer {
    // ---
    registry: Handlebars<'static>,
}

impl Renderer {
    /// Compile the embedded templates and register the display helpers.
    pub fn new() -> Result<Self, TemplateError> {
        // ---
        let mut registry = Handlebars::new();
        registry.register_helper("format_date", Box::new(format_date));
        registry.register_helper("format_temp", Box::new(format_temp));
        registry.register_template_string(INDEX, INDEX_TEMPLATE)?;

        Ok(Self { registry })
    }

    /// Render the index page for `table`.
    pub fn index(&self, table: &HistoryTable) -> Result<String, RenderError> {
        self.registry.render(INDEX, table)
    }
}

#[cfg(test)]
mod tests {
    // ---
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::models::TemperatureReading;

    fn reading(temp_f: f32) -> TemperatureReading {
        // ---
        TemperatureReading {
            temp_f,
            timestamp: Utc.with_ymd_and_hms(2025, 3, 26, 18, 45, 0).unwrap(),
        }
    }

    #[test]
    fn test_renders_headers_and_cells() {
        // ---
        let renderer = Renderer::new().unwrap();
        let table = HistoryTable {
            headers: vec!["Attic".into(), "Office".into()],
            rows: vec![
                vec![Some(reading(70.5)), Some(reading(64.0))],
                vec![Some(reading(69.0)), None],
            ],
        };

        let html = renderer.index(&table).unwrap();

        assert!(html.contains("<th>Attic</th>"));
        assert!(html.contains("<th>Office</th>"));
        assert!(html.contains("70.5&deg;F"));
        assert!(html.contains("64.0&deg;F"));
        assert_eq!(html.matches("<td>").count(), 4);
        assert_eq!(html.matches("class=\"temp\"").count(), 3);
    }

    #[test]
    fn test_renders_empty_table() {
        // ---
        let renderer = Renderer::new().unwrap();

        let html = renderer.index(&HistoryTable::default()).unwrap();

        assert!(html.contains("No readings yet."));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn test_device_names_are_escaped() {
        // ---
        let renderer = Renderer::new().unwrap();
        let table = HistoryTable {
            headers: vec!["<b>Lab</b>".into()],
            rows: vec![vec![Some(reading(60.0))]],
        };

        let html = renderer.index(&table).unwrap();

        assert!(!html.contains("<b>Lab</b>"));
        assert!(html.contains("&lt;b&gt;Lab&lt;/b&gt;"));
    }

    #[test]
    fn test_time_cell_uses_display_format() {
        // ---
        let renderer = Renderer::new().unwrap();
        let ts = Utc.with_ymd_and_hms(2025, 3, 26, 18, 45, 7).unwrap();
        let table = HistoryTable {
            headers: vec!["Office".into()],
            rows: vec![vec![Some(TemperatureReading {
                temp_f: 71.0,
                timestamp: ts,
            })]],
        };

        let html = renderer.index(&table).unwrap();

        let shown = ts.with_timezone(&Local).format(DATE_FORMAT).to_string();
        assert!(html.contains(&format!("<div class=\"time\">{shown}</div>")));
        assert!(!html.contains("2025-03-26T18:45:07"));
    }

    #[test]
    fn test_date_format_shape() {
        // ---
        let ts = Utc.with_ymd_and_hms(2025, 3, 26, 18, 45, 7).unwrap();
        let shown = ts.format(DATE_FORMAT).to_string();

        assert_eq!(shown, "2025-03-26 06:45:07 PM");
    }
}
