use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => {
            let prefs = ui::prefs();
            let options = table::TableOptions {
                max_width: prefs.term_width,
                color: prefs.table_color,
            };
            Ok(render_sections(&serde_json::to_value(value)?, options))
        }
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

/// Objects become a field/value table followed by one titled section per
/// nested object or list. Lists of objects become row tables.
fn render_sections(value: &Value, options: table::TableOptions) -> String {
    match value {
        Value::Array(items) => render_rows(items, options),
        Value::Object(map) => {
            let mut sections = Vec::new();
            let scalars = field_rows(map);
            if !scalars.is_empty() {
                sections.push(table::render_table(&["field", "value"], &scalars, options));
            }
            for (key, nested) in map {
                match nested {
                    Value::Array(items) => {
                        sections.push(format!("{key}:\n{}", render_rows(items, options)));
                    }
                    Value::Object(inner) => {
                        let rows = field_rows(inner);
                        sections.push(format!(
                            "{key}:\n{}",
                            table::render_table(&["field", "value"], &rows, options)
                        ));
                    }
                    _ => {}
                }
            }
            sections.join("\n\n")
        }
        scalar => cell(scalar),
    }
}

fn field_rows(map: &Map<String, Value>) -> Vec<Vec<String>> {
    map.iter()
        .filter(|(_, value)| !value.is_array() && !value.is_object())
        .map(|(key, value)| vec![key.clone(), cell(value)])
        .collect()
}

fn render_rows(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(none)");
    }
    if !items.iter().all(Value::is_object) {
        let rows: Vec<Vec<String>> = items.iter().map(|item| vec![cell(item)]).collect();
        return table::render_table(&["value"], &rows, options);
    }

    let columns = column_order(items);
    let headers: Vec<&str> = columns.iter().map(String::as_str).collect();
    let rows: Vec<Vec<String>> = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            columns
                .iter()
                .map(|column| map.get(column).map_or_else(|| String::from("-"), cell))
                .collect()
        })
        .collect();
    table::render_table(&headers, &rows, options)
}

/// `id` leads, the rest follow in key order; `updated_at` is left to JSON output.
fn column_order(items: &[Value]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if key != "updated_at" && !columns.contains(key) {
                columns.push(key.clone());
            }
        }
    }
    columns.sort_by_key(|column| (column != "id", column.clone()));
    columns
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(text) => DateTime::parse_from_rfc3339(text).map_or_else(
            |_| text.clone(),
            |at| at.with_timezone(&Utc).format("%Y-%m-%d %H:%M").to_string(),
        ),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        nested => nested.to_string(),
    }
}
