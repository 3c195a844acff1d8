//! # Form Layer
//!
//! Commands declare what they need from the user as a [`FormSpec`]: an ordered
//! list of fields plus a single submit action. A [`FormHost`] presents it and
//! hands back a flat [`FormValues`] mapping, or `None` if the user dismissed
//! the form. The command layer never knows how the form was shown.
//!
//! - [`prompt::PromptHost`]: interactive terminal host
//! - [`scripted::ScriptedHost`]: test host with canned outcomes

use crate::error::Result;
use std::collections::HashMap;

pub mod prompt;
pub mod scripted;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text { default: String },
    Checkbox { default: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub key: String,
    pub label: String,
    pub help: String,
    pub kind: FieldKind,
}

/// Builder-style form declaration: title, ordered fields, one submit action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSpec {
    pub title: String,
    pub fields: Vec<Field>,
    pub submit_label: String,
}

impl FormSpec {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
            submit_label: "Save".to_string(),
        }
    }

    pub fn text(mut self, key: &str, label: &str, help: &str, default: &str) -> Self {
        self.fields.push(Field {
            key: key.to_string(),
            label: label.to_string(),
            help: help.to_string(),
            kind: FieldKind::Text {
                default: default.to_string(),
            },
        });
        self
    }

    pub fn checkbox(mut self, key: &str, label: &str, help: &str, default: bool) -> Self {
        self.fields.push(Field {
            key: key.to_string(),
            label: label.to_string(),
            help: help.to_string(),
            kind: FieldKind::Checkbox { default },
        });
        self
    }

    pub fn submit(mut self, label: &str) -> Self {
        self.submit_label = label.to_string();
        self
    }

    /// Looks up a declared field by key.
    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// The values a host would return if the user submitted without edits.
    pub fn default_values(&self) -> FormValues {
        let mut values = FormValues::new();
        for field in &self.fields {
            let value = match &field.kind {
                FieldKind::Text { default } => FormValue::Text(default.clone()),
                FieldKind::Checkbox { default } => FormValue::Flag(*default),
            };
            values.set(&field.key, value);
        }
        values
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    Flag(bool),
}

/// Flat mapping of field key to submitted value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: HashMap<String, FormValue>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: FormValue) {
        self.values.insert(key.to_string(), value);
    }

    /// Submitted text for `key`; empty if the field is missing or not text.
    pub fn text(&self, key: &str) -> String {
        match self.values.get(key) {
            Some(FormValue::Text(text)) => text.clone(),
            _ => String::new(),
        }
    }

    /// Submitted flag for `key`; false if the field is missing or not a flag.
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.values.get(key), Some(FormValue::Flag(true)))
    }
}

/// A surface able to present one [`FormSpec`] and collect one submission.
///
/// `Ok(None)` means the user dismissed the form; callers must treat that as
/// a full no-op.
pub trait FormHost {
    fn present(&mut self, form: &FormSpec) -> Result<Option<FormValues>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_declaration_order() {
        let form = FormSpec::new("Filter: New")
            .text("name", "Filter name", "", "Filter 1")
            .checkbox("protected", "Protected", "", false)
            .submit("Save settings");

        let keys: Vec<_> = form.fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["name", "protected"]);
        assert_eq!(form.submit_label, "Save settings");
    }

    #[test]
    fn default_values_echo_the_seeded_defaults() {
        let form = FormSpec::new("t")
            .text("library", "Library", "", "QGPL")
            .checkbox("protected", "Protected", "", true);

        let values = form.default_values();
        assert_eq!(values.text("library"), "QGPL");
        assert!(values.flag("protected"));
    }

    #[test]
    fn missing_keys_read_as_empty() {
        let values = FormValues::new();
        assert_eq!(values.text("nope"), "");
        assert!(!values.flag("nope"));
    }
}
