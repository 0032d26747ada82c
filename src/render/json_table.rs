use serde_json::{Map, Number, Value};

use super::{Table, TableSource};

/// Render `candidate` as a table when it is a JSON object or a non-empty
/// array of objects.
pub fn json_table(candidate: &str) -> Option<Table> {
    let value: Value = serde_json::from_str(candidate.trim()).ok()?;
    match value {
        Value::Array(items) => records_table(&items),
        Value::Object(map) => Some(key_value_table(&map)),
        _ => None,
    }
}

fn records_table(items: &[Value]) -> Option<Table> {
    if items.is_empty() {
        return None;
    }
    let records = items
        .iter()
        .map(Value::as_object)
        .collect::<Option<Vec<_>>>()?;

    // union of keys, first-seen order
    let mut columns: Vec<String> = Vec::new();
    for record in &records {
        for key in record.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }

    let rows = records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|column| record.get(column).map(cell_text).unwrap_or_default())
                .collect()
        })
        .collect();

    Some(Table {
        source: TableSource::Json,
        columns,
        rows,
    })
}

fn key_value_table(map: &Map<String, Value>) -> Table {
    Table {
        source: TableSource::Json,
        columns: vec!["Key".to_string(), "Value".to_string()],
        rows: map
            .iter()
            .map(|(key, value)| vec![key.clone(), cell_text(value)])
            .collect(),
    }
}

/// Strings verbatim, numbers in their shortest form, everything else as
/// compact JSON.
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        other => other.to_string(),
    }
}

/// Shortest text for a number: `1.0` prints as `1`, `1e2` as `100`.
/// Exponent form only below `1e-6` or from `1e21` up.
fn number_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    let Some(f) = n.as_f64().filter(|f| f.is_finite()) else {
        return n.to_string();
    };
    if f == 0.0 {
        return "0".to_string();
    }

    let magnitude = f.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{}", f);
    }
    let exp = format!("{:e}", f);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_render_empty_and_columns_union() {
        let table = json_table(r#"[{"a":1},{"b":"x","a":2},{"c":true}]"#).unwrap();
        assert_eq!(table.columns, vec!["a", "b", "c"]);
        assert_eq!(
            table.rows,
            vec![
                vec!["1".to_string(), String::new(), String::new()],
                vec!["2".to_string(), "x".to_string(), String::new()],
                vec![String::new(), String::new(), "true".to_string()],
            ]
        );
    }

    #[test]
    fn test_nested_values_are_serialized() {
        let table = json_table(r#"[{"tags":["a","b"],"meta":{"k":1},"none":null}]"#).unwrap();
        assert_eq!(table.rows[0], vec![r#"["a","b"]"#, r#"{"k":1}"#, "null"]);
    }

    #[test]
    fn test_object_renders_key_value_in_insertion_order() {
        let table = json_table(r#"{"state":"Karnataka","rate":38.5,"trend":"stable"}"#).unwrap();
        assert_eq!(table.columns, vec!["Key", "Value"]);
        assert_eq!(
            table.rows,
            vec![
                vec!["state", "Karnataka"],
                vec!["rate", "38.5"],
                vec!["trend", "stable"],
            ]
        );
    }

    #[test]
    fn test_whole_floats_print_without_fraction() {
        let table = json_table(r#"[{"a":1.0,"b":1e2,"c":2.50,"d":45.0}]"#).unwrap();
        assert_eq!(table.rows[0], vec!["1", "100", "2.5", "45"]);
    }

    #[test]
    fn test_number_extremes() {
        let table = json_table(
            r#"{"big":1e21,"tiny":1.5e-7,"small":0.000001,"neg_zero":-0.0,"neg":-3.25,"u":18446744073709551615}"#,
        )
        .unwrap();
        let values: Vec<&str> = table.rows.iter().map(|r| r[1].as_str()).collect();
        assert_eq!(
            values,
            vec!["1e+21", "1.5e-7", "0.000001", "0", "-3.25", "18446744073709551615"]
        );
    }

    #[test]
    fn test_non_tables_are_rejected() {
        assert!(json_table("[]").is_none());
        assert!(json_table("[1, 2, 3]").is_none());
        assert!(json_table(r#"[{"a":1}, 2]"#).is_none());
        assert!(json_table("\"just a string\"").is_none());
        assert!(json_table("true").is_none());
        assert!(json_table("{broken").is_none());
    }
}
