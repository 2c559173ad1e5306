use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpan {
    pub start: SourceLocation,
    pub end: SourceLocation,
}

impl SourceSpan {
    pub fn synthetic() -> Self {
        Self {
            start: SourceLocation { line: 1, column: 1 },
            end: SourceLocation { line: 1, column: 1 },
        }
    }
}

/// One `LocaleResource` element of a resource document, with its nested
/// children.
///
/// `value` is `Some` only when the source carried a non-blank `Value`; such a
/// node is persistable. A node without a value only contributes its name to
/// the namespace of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleResourceNode {
    pub name: String,
    pub value: Option<String>,
    pub namespace_prefix: String,
    pub children: Vec<LocaleResourceNode>,
    pub location: SourceSpan,
}

impl LocaleResourceNode {
    pub fn qualified_name(&self) -> String {
        qualify_name(&self.namespace_prefix, &self.name)
    }

    pub fn is_persistable(&self) -> bool {
        self.value.is_some()
    }
}

pub fn qualify_name(namespace_prefix: &str, name: &str) -> String {
    if namespace_prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", namespace_prefix, name)
    }
}

/// Parsed resource document: the root `Language` name and its root-level trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleResourceSet {
    pub language_name: Option<String>,
    pub resources: Vec<LocaleResourceNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatLocaleResource {
    pub name: String,
    pub value: String,
}
