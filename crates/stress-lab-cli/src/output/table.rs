use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{is_row_array, result_of, scalar_text};

/// Format output as tables: scalar and nested-object fields in a Field/Value
/// table, then one table per array of records (impacts, recovery, ...).
pub fn print_table(value: &Value) {
    let result = result_of(value);
    match result {
        Value::Object(map) => print_sections(map),
        Value::Array(arr) => print_rows(arr),
        _ => println!("{}", scalar_text(result)),
    }

    if let Some(Value::Array(warnings)) = value.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = value.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_sections(map: &Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        if is_row_array(val) {
            continue;
        }
        push_fields(&mut builder, key, val);
    }
    println!("{}", Table::from(builder));

    for (key, val) in map {
        if let Value::Array(rows) = val {
            if is_row_array(val) {
                println!("\n{}:", key);
                print_rows(rows);
            }
        }
    }
}

/// Flatten nested objects into dotted field names (`summary.final_value`).
fn push_fields(builder: &mut Builder, prefix: &str, value: &Value) {
    match value {
        Value::Object(inner) => {
            for (key, val) in inner {
                push_fields(builder, &format!("{}.{}", prefix, key), val);
            }
        }
        Value::Null => builder.push_record([prefix, "-"]),
        _ => builder.push_record([prefix.to_string(), scalar_text(value)]),
    }
}

fn print_rows(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(scalar_text).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }

        println!("{}", Table::from(builder));
    } else {
        for item in arr {
            println!("{}", scalar_text(item));
        }
    }
}
