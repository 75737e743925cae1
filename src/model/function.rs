//! Events function entity.

use super::identifiers::FunctionId;
use serde::{Deserialize, Serialize};

/// Kind of events function, as exposed to the rest of the editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionType {
    /// Performs something when its event runs.
    #[default]
    Action,
    /// Evaluates to true or false.
    Condition,
    /// Returns a number.
    Expression,
    /// Returns a string.
    StringExpression,
}

/// A named events function.
///
/// Only `name` takes part in filtering and uniqueness. The identity is owned
/// by the container and is not serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsFunction {
    #[serde(skip)]
    pub(crate) id: FunctionId,
    name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    full_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    description: String,
    #[serde(default)]
    function_type: FunctionType,
}

impl EventsFunction {
    /// Build a detached function. It gets an identity once appended.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: FunctionId::default(),
            name: name.into(),
            full_name: String::new(),
            description: String::new(),
            function_type: FunctionType::default(),
        }
    }

    /// Set the display name.
    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the function type.
    pub fn with_type(mut self, function_type: FunctionType) -> Self {
        self.function_type = function_type;
        self
    }

    /// Identity assigned by the owning container.
    pub fn id(&self) -> FunctionId {
        self.id
    }

    /// Name used for search and uniqueness.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Change the name. Uniqueness is the caller's concern.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Display name.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Free-form description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Kind of function.
    pub fn function_type(&self) -> FunctionType {
        self.function_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_function_defaults_to_action_with_empty_metadata() {
        let f = EventsFunction::new("Jump");
        assert_eq!(f.name(), "Jump");
        assert_eq!(f.full_name(), "");
        assert_eq!(f.description(), "");
        assert_eq!(f.function_type(), FunctionType::Action);
        assert_eq!(f.id(), FunctionId::default());
    }

    #[test]
    fn serializes_camel_case_and_skips_empty_metadata() {
        let f = EventsFunction::new("IsGrounded").with_type(FunctionType::Condition);
        let json = serde_json::to_string(&f).unwrap();
        assert_eq!(json, r#"{"name":"IsGrounded","functionType":"Condition"}"#);
    }

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let f: EventsFunction =
            serde_json::from_str(r#"{"name":"Speed","fullName":"Current speed"}"#).unwrap();
        assert_eq!(f.name(), "Speed");
        assert_eq!(f.full_name(), "Current speed");
        assert_eq!(f.function_type(), FunctionType::Action);
    }
}
