use crate::FieldError;

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Field-keyed collection of validation failures.
///
/// Fields keep the order in which their first error was recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: Vec<(&'static str, FieldError)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, error: FieldError) {
        self.entries.push((field, error));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of errors across all fields
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Errors recorded against `field`, in insertion order.
    pub fn on(&self, field: &str) -> Vec<FieldError> {
        self.entries
            .iter()
            .filter(|(f, _)| *f == field)
            .map(|(_, e)| *e)
            .collect()
    }

    /// Distinct field names with at least one error.
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields: Vec<&'static str> = Vec::new();
        for (field, _) in &self.entries {
            if !fields.contains(field) {
                fields.push(field);
            }
        }
        fields
    }

    /// Sentences suitable for an error list, e.g. "Looking for can't be blank".
    pub fn full_messages(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(field, error)| format!("{} {}", humanize(field), error))
            .collect()
    }

    /// Headline for an error list, e.g. "2 errors prohibited this project from being saved".
    pub fn summary(&self, entity: &str) -> String {
        let noun = if self.len() == 1 { "error" } else { "errors" };
        format!(
            "{} {} prohibited this {} from being saved",
            self.len(),
            noun,
            entity
        )
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_messages().join(", "))
    }
}

/// Serializes as `{ "field": ["message", ...], ... }`.
impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = self.fields();
        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for field in fields {
            let messages: Vec<String> = self.on(field).iter().map(|e| e.to_string()).collect();
            map.serialize_entry(field, &messages)?;
        }
        map.end()
    }
}

fn humanize(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
