use serde_json::{Map, Value};
use std::io;

use super::{is_row_array, result_of, scalar_text};

/// Arrays preferred as the CSV body, in order.
const ROW_KEYS: [&str; 3] = ["impacts", "points", "recovery"];

/// Write output as CSV to stdout.
///
/// Record arrays (per-asset impacts, recovery points, scenario lists) become
/// one row per record; anything else becomes a two-column field/value list.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match result_of(value) {
        Value::Object(map) => match primary_rows(map) {
            Some(rows) => write_rows(&mut wtr, rows),
            None => {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in map {
                    let _ = wtr.write_record([key.as_str(), &scalar_text(val)]);
                }
            }
        },
        Value::Array(arr) => write_rows(&mut wtr, arr),
        other => {
            let _ = wtr.write_record([&scalar_text(other)]);
        }
    }

    let _ = wtr.flush();
}

fn primary_rows(map: &Map<String, Value>) -> Option<&[Value]> {
    ROW_KEYS
        .iter()
        .filter_map(|k| map.get(*k))
        .find(|v| is_row_array(v))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
}

fn write_rows<W: io::Write>(wtr: &mut csv::Writer<W>, arr: &[Value]) {
    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        let _ = wtr.write_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(*h).map(scalar_text).unwrap_or_default())
                    .collect();
                let _ = wtr.write_record(&row);
            }
        }
    } else {
        for item in arr {
            let _ = wtr.write_record([&scalar_text(item)]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_impacts_preferred_over_recovery() {
        let result = json!({
            "recovery": [{"month": 0}],
            "impacts": [{"asset_name": "Bonds"}],
        });
        let rows = primary_rows(result.as_object().unwrap()).unwrap();
        assert_eq!(rows[0]["asset_name"], "Bonds");
    }

    #[test]
    fn test_write_rows_headers_from_first_record() {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        let rows = vec![
            json!({"month": 0, "has_recovered": false}),
            json!({"month": 1, "has_recovered": true}),
        ];
        write_rows(&mut wtr, &rows);
        let text = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        assert_eq!(text, "has_recovered,month\nfalse,0\ntrue,1\n");
    }
}
