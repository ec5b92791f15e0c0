//! Changed-attribute reporting against a baseline.

use std::borrow::Cow;
use std::fmt;

use decohack_foundation::FeatureLevel;

use crate::annotation::Annotations;

/// One attribute whose value differs from baseline.
///
/// The name is the literal attribute key written to patch files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffField {
    /// Patch attribute name, e.g. `"Sprite number"`.
    pub name: Cow<'static, str>,
    /// Exported value.
    pub value: i64,
}

impl DiffField {
    /// Creates a field with a static name.
    #[must_use]
    pub fn new(name: &'static str, value: i64) -> Self {
        Self {
            name: Cow::Borrowed(name),
            value,
        }
    }

    /// Creates a field with a computed name.
    #[must_use]
    pub fn owned(name: String, value: i64) -> Self {
        Self {
            name: Cow::Owned(name),
            value,
        }
    }
}

impl fmt::Display for DiffField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

/// A table row that can report its differences from a baseline row.
pub trait Diffable: Clone {
    /// Returns the attributes of `self` that differ from `baseline`, in
    /// patch order. Attributes above `level` are never reported.
    fn diff(&self, baseline: &Self, level: FeatureLevel) -> Vec<DiffField>;

    /// The row's annotation map.
    fn annotations(&self) -> &Annotations;

    /// Mutable access to the row's annotation map.
    fn annotations_mut(&mut self) -> &mut Annotations;

    /// Overwrites every field of `self`, annotations included.
    fn copy_from(&mut self, other: &Self) {
        self.clone_from(other);
    }

    /// Returns the annotation stored under `key`.
    fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations().get(key)
    }

    /// Stores an annotation.
    fn set_annotation(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.annotations_mut().set(key, value);
    }

    /// Removes every annotation.
    fn clear_annotations(&mut self) {
        self.annotations_mut().clear();
    }
}

/// Accumulates changed fields in order.
#[derive(Debug, Default)]
pub(crate) struct DiffBuilder {
    fields: Vec<DiffField>,
}

impl DiffBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Pushes `name = value` when `value != base`.
    pub(crate) fn field(&mut self, name: &'static str, value: i64, base: i64) -> &mut Self {
        if value != base {
            self.fields.push(DiffField::new(name, value));
        }
        self
    }

    pub(crate) fn push(&mut self, field: DiffField) -> &mut Self {
        self.fields.push(field);
        self
    }

    pub(crate) fn build(self) -> Vec<DiffField> {
        self.fields
    }
}
