use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Read a piped JSON or YAML document from stdin.
///
/// Returns `None` when stdin is a terminal or nothing was piped.
pub fn read_stdin<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    parse_document(&buffer)
}

fn parse_document<T: DeserializeOwned>(raw: &str) -> Result<Option<T>, Box<dyn std::error::Error>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return Ok(Some(serde_json::from_str(trimmed)?));
    }
    let value: T = serde_yaml::from_str(trimmed)
        .map_err(|e| format!("Failed to parse stdin as JSON or YAML: {}", e))?;
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Doc {
        scenario: String,
    }

    #[test]
    fn test_blank_input_is_none() {
        assert_eq!(parse_document::<Doc>("  \n").unwrap(), None);
    }

    #[test]
    fn test_json_and_yaml_accepted() {
        let json: Option<Doc> = parse_document(r#"{"scenario": "covid_crash"}"#).unwrap();
        let yaml: Option<Doc> = parse_document("scenario: covid_crash\n").unwrap();
        assert_eq!(json, yaml);
        assert_eq!(json.unwrap().scenario, "covid_crash");
    }
}
