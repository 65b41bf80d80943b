use std::collections::BTreeMap;

/// Value held by a single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Choice(String),
    Items(Vec<String>),
}

/// Mutable record accumulating field values across all steps of one wizard
/// session. Keys are field names; values are merged unconditionally and only
/// inspected when a step validates or the wizard finalizes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: BTreeMap<String, FieldValue>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditional merge; no validation happens at set time.
    pub fn set(&mut self, key: impl Into<String>, value: FieldValue) {
        self.values.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(FieldValue::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn choice(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(FieldValue::Choice(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Unset flags read as `false`.
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.values.get(key), Some(FieldValue::Flag(true)))
    }

    pub fn items(&self, key: &str) -> &[String] {
        match self.values.get(key) {
            Some(FieldValue::Items(values)) => values.as_slice(),
            _ => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_is_idempotent_for_equal_values() {
        let mut state = FormState::new();
        state.set("athlete", FieldValue::Text("Jordan".into()));
        let snapshot = state.clone();
        state.set("athlete", FieldValue::Text("Jordan".into()));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn typed_getters_ignore_mismatched_kinds() {
        let mut state = FormState::new();
        state.set("severity", FieldValue::Text("high".into()));
        assert_eq!(state.choice("severity"), None);
        assert!(!state.flag("severity"));
        assert!(state.items("severity").is_empty());
        assert_eq!(state.text("severity"), Some("high"));
    }

    #[test]
    fn unset_flag_reads_false() {
        let state = FormState::new();
        assert!(!state.flag("first_aid_given"));
    }
}
