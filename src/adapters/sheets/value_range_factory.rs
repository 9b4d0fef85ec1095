use google_sheets4::api::ValueRange;
use serde_json::Value;
use std::borrow::Cow;

pub trait ValueRangeFactory {
    fn from_single_row<'a, T: Into<Cow<'a, str>> + Clone>(row_values: &[T]) -> Self;
}

fn wrap_value<'a, T: Into<Cow<'a, str>>>(value: T) -> Value {
    Value::String(value.into().into_owned())
}

impl ValueRangeFactory for ValueRange {
    fn from_single_row<'a, T: Into<Cow<'a, str>> + Clone>(row_values: &[T]) -> Self {
        let row = row_values
            .iter()
            .map(|cell| wrap_value(cell.clone()))
            .collect::<Vec<_>>();

        Self {
            major_dimension: Some("ROWS".to_string()),
            range: None,
            values: Some(vec![row]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_value() {
        let value = wrap_value("1");
        assert_eq!(value, Value::String("1".to_string()));
    }

    #[test]
    fn test_from_single_row() {
        let value_range = ValueRange::from_single_row(&["05/17/2024", "08:04:59", ""]);
        assert_eq!(
            value_range.major_dimension,
            Some("ROWS".to_string()),
            "Major dimension should be ROWS"
        );
        assert_eq!(value_range.range, None, "Range should be None");
        assert_eq!(
            value_range.values,
            Some(vec![vec![
                Value::String("05/17/2024".to_string()),
                Value::String("08:04:59".to_string()),
                Value::String(String::new()),
            ]]),
            "Values should be a single row, blanks kept as empty strings"
        );
    }

    #[test]
    fn test_from_owned_strings() {
        let row = vec!["acme_prod".to_string(), "serverless".to_string()];
        let value_range = ValueRange::from_single_row(&row);
        assert_eq!(value_range.values.unwrap()[0].len(), 2);
    }
}
