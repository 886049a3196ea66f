//! Managed-object data model
//!
//! [`ManagedObject`] models the provider's property-bag objects: a class
//! name, a property map, and the object path the provider assigns once the
//! object has been saved. Embedded objects (rule lists, schedules,
//! embedded properties) are ordinary property values and never carry a
//! path of their own.

use crate::error::{ProviderError, ProviderResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single property value on a managed object or in a method parameter
/// list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyValue {
    String(String),
    Integer(i64),
    Boolean(bool),
    StringArray(Vec<String>),
    IntegerArray(Vec<i64>),
    DateTime(DateTime<Utc>),
    Object(Box<ManagedObject>),
    ObjectArray(Vec<ManagedObject>),
}

/// Parameter list for provider method invocation.
///
/// Keyed deterministically so recorded invocations compare stably in tests.
pub type MethodParams = BTreeMap<String, PropertyValue>;

/// A provider-managed object: class name, property bag, and the object
/// path assigned on first save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedObject {
    class: String,

    #[serde(default)]
    path: Option<String>,

    #[serde(default)]
    properties: BTreeMap<String, PropertyValue>,
}

impl ManagedObject {
    /// Create a new, unsaved object of the given class
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            path: None,
            properties: BTreeMap::new(),
        }
    }

    /// Class name of the object
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Provider-assigned object path; `None` until the object is saved
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Assign the provider path. Provider implementations call this on
    /// save; embedded objects never get one.
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = Some(path.into());
    }

    /// Raw property lookup
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Raw property assignment
    pub fn set_property(&mut self, name: impl Into<String>, value: PropertyValue) {
        self.properties.insert(name.into(), value);
    }

    fn expect_property(&self, name: &str) -> ProviderResult<&PropertyValue> {
        self.properties
            .get(name)
            .ok_or_else(|| ProviderError::MissingProperty {
                class: self.class.clone(),
                property: name.to_string(),
            })
    }

    fn type_error(&self, name: &str, expected: &'static str) -> ProviderError {
        ProviderError::PropertyType {
            class: self.class.clone(),
            property: name.to_string(),
            expected,
        }
    }

    /// String property accessor
    pub fn string_value(&self, name: &str) -> ProviderResult<&str> {
        match self.expect_property(name)? {
            PropertyValue::String(value) => Ok(value),
            _ => Err(self.type_error(name, "string")),
        }
    }

    /// Integer property accessor
    pub fn integer_value(&self, name: &str) -> ProviderResult<i64> {
        match self.expect_property(name)? {
            PropertyValue::Integer(value) => Ok(*value),
            _ => Err(self.type_error(name, "integer")),
        }
    }

    /// Boolean property accessor
    pub fn boolean_value(&self, name: &str) -> ProviderResult<bool> {
        match self.expect_property(name)? {
            PropertyValue::Boolean(value) => Ok(*value),
            _ => Err(self.type_error(name, "boolean")),
        }
    }

    /// String-array property accessor
    pub fn string_array_value(&self, name: &str) -> ProviderResult<&[String]> {
        match self.expect_property(name)? {
            PropertyValue::StringArray(values) => Ok(values),
            _ => Err(self.type_error(name, "string array")),
        }
    }

    /// Embedded-object array accessor.
    ///
    /// An absent property reads as an empty list: freshly created objects
    /// have no rule or schedule arrays until one is assigned.
    pub fn array_items(&self, name: &str) -> ProviderResult<Vec<ManagedObject>> {
        match self.properties.get(name) {
            None => Ok(Vec::new()),
            Some(PropertyValue::ObjectArray(items)) => Ok(items.clone()),
            Some(_) => Err(self.type_error(name, "object array")),
        }
    }

    /// Set a string property
    pub fn set_string(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.set_property(name, PropertyValue::String(value.into()));
    }

    /// Set an integer property
    pub fn set_integer(&mut self, name: impl Into<String>, value: i64) {
        self.set_property(name, PropertyValue::Integer(value));
    }

    /// Set a boolean property
    pub fn set_boolean(&mut self, name: impl Into<String>, value: bool) {
        self.set_property(name, PropertyValue::Boolean(value));
    }

    /// Set a string-array property
    pub fn set_string_array(&mut self, name: impl Into<String>, values: Vec<String>) {
        self.set_property(name, PropertyValue::StringArray(values));
    }

    /// Set a datetime property
    pub fn set_datetime(&mut self, name: impl Into<String>, value: DateTime<Utc>) {
        self.set_property(name, PropertyValue::DateTime(value));
    }

    /// Replace an embedded-object array property
    pub fn set_array_items(&mut self, name: impl Into<String>, items: Vec<ManagedObject>) {
        self.set_property(name, PropertyValue::ObjectArray(items));
    }
}

#[cfg(test)]
#[path = "object_test.rs"]
mod tests;
