//! Conversion of raw field values into indexable text.

use std::fmt::Debug;

use crate::document::field_value::FieldValue;

/// Converts a raw field value into the text that gets analyzed into terms.
///
/// Returning `None` means the value contributes no terms.
pub trait ValueConverter: Send + Sync + Debug {
    /// Convert a value of `field` into indexable text.
    fn to_text(&self, field: &str, value: &FieldValue) -> Option<String>;

    /// Get the name of this converter (for debugging).
    fn name(&self) -> &'static str;
}

/// Only text values produce text; every other value is skipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextValueConverter;

impl ValueConverter for TextValueConverter {
    fn to_text(&self, _field: &str, value: &FieldValue) -> Option<String> {
        value.as_text().map(str::to_string)
    }

    fn name(&self) -> &'static str {
        "text"
    }
}

/// Renders text, numbers and booleans; binary and null values are skipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct DisplayValueConverter;

impl ValueConverter for DisplayValueConverter {
    fn to_text(&self, _field: &str, value: &FieldValue) -> Option<String> {
        match value {
            FieldValue::Text(text) => Some(text.clone()),
            FieldValue::Integer(_) | FieldValue::Float(_) => value.as_numeric(),
            FieldValue::Boolean(b) => Some(b.to_string()),
            FieldValue::Binary(_) | FieldValue::Null => None,
        }
    }

    fn name(&self) -> &'static str {
        "display"
    }
}
