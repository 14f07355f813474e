use serde_json::Value;

use super::{result_of, scalar_text};

/// Headline figures, by priority. Dotted paths reach into nested objects.
const PRIORITY_PATHS: [&str; 4] = [
    "summary.final_value",
    "months_to_recovery",
    "final_value",
    "key",
];

/// Print just the key answer value from the output.
pub fn print_minimal(value: &Value) {
    let result = result_of(value);

    for path in PRIORITY_PATHS {
        if let Some(val) = lookup_path(result, path) {
            if !val.is_null() {
                println!("{}", scalar_text(val));
                return;
            }
        }
    }

    if let Value::Array(items) = result {
        for item in items {
            if let Some(key) = item.get("key") {
                println!("{}", scalar_text(key));
            }
        }
        return;
    }

    println!("{}", scalar_text(result));
}

fn lookup_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |v, segment| v.get(segment))
}
