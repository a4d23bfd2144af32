//! Schema documents driving model generation
//!
//! A schema maps entity names to field-sets, and each field-set maps field
//! names to field-type tokens. Insertion order is preserved so generated files
//! and the fields inside them follow the order of the source document.
//!
//! # Example Schema
//!
//! ```json
//! {
//!   "User": { "name": "string", "age": "int", "admin": "boolean" },
//!   "Post": { "title": "string", "body": "text" }
//! }
//! ```
//!
//! The same schema as TOML:
//!
//! ```toml
//! [User]
//! name = "string"
//! age = "int"
//!
//! [Post]
//! title = "string"
//! ```

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaffoldError};

/// Field name → field-type token; `None` stands for a missing/null token
pub type FieldSet = IndexMap<String, Option<String>>;

/// Entity name → field-set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    entities: IndexMap<String, FieldSet>,
}

impl Schema {
    /// Create an empty schema
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity built from `(field, token)` pairs
    ///
    /// # Examples
    ///
    /// ```
    /// # use sequelize_scaffold::scaffold::schema::Schema;
    /// let schema = Schema::new().with_entity("User", [("name", "string"), ("age", "int")]);
    /// assert_eq!(schema.len(), 1);
    /// ```
    #[must_use]
    pub fn with_entity<I, F, T>(mut self, name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = (F, T)>,
        F: Into<String>,
        T: Into<String>,
    {
        let fields = fields
            .into_iter()
            .map(|(field, token)| (field.into(), Some(token.into())))
            .collect();
        self.insert(name, fields);
        self
    }

    /// Insert or replace an entity
    pub fn insert(&mut self, name: impl Into<String>, fields: FieldSet) -> Option<FieldSet> {
        self.entities.insert(name.into(), fields)
    }

    /// Look up an entity's field-set
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldSet> {
        self.entities.get(name)
    }

    /// Iterate entities in document order
    pub fn entities(&self) -> impl Iterator<Item = (&str, &FieldSet)> {
        self.entities.iter().map(|(name, fields)| (name.as_str(), fields))
    }

    /// Number of entities
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the schema has no entities
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Parse a schema from a JSON document
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::SchemaParse`] if the document is not an object
    /// of objects whose values are strings or `null`.
    pub fn from_json_str(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| ScaffoldError::SchemaParse(e.to_string()))
    }

    /// Parse a schema from a TOML document
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::SchemaParse`] if the document is malformed.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| ScaffoldError::SchemaParse(e.to_string()))
    }

    /// Load a schema file, picking the format from its extension
    ///
    /// `.toml` files are read as TOML; everything else is read as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ScaffoldError::io(path, e))?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            Self::from_toml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    /// Check that every entity and field name can be spliced into generated code
    ///
    /// Entity names also become `const` bindings in the generated module, so
    /// reserved words are rejected for them. Field names are only object keys
    /// and may be reserved words. Field-type tokens are not checked: unknown
    /// tokens fall back to `STRING`.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidIdentifier`] for the first offending name.
    pub fn validate(&self) -> Result<()> {
        for (entity, fields) in self.entities() {
            if !is_js_identifier(entity) || is_reserved_word(entity) {
                return Err(ScaffoldError::InvalidIdentifier {
                    kind: "entity",
                    name: entity.to_string(),
                });
            }

            if let Some(field) = fields.keys().find(|field| !is_js_identifier(field)) {
                return Err(ScaffoldError::InvalidIdentifier {
                    kind: "field",
                    name: field.clone(),
                });
            }
        }

        Ok(())
    }
}

impl<K: Into<String>> FromIterator<(K, FieldSet)> for Schema {
    fn from_iter<I: IntoIterator<Item = (K, FieldSet)>>(iter: I) -> Self {
        Self {
            entities: iter.into_iter().map(|(name, fields)| (name.into(), fields)).collect(),
        }
    }
}

/// Whether `name` is a plain JavaScript identifier (`[A-Za-z_$][A-Za-z0-9_$]*`)
pub(crate) fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// ECMAScript reserved words, strict-mode reserved words and literals that
/// can't name a `const` binding
const RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Whether `name` is reserved and unusable as a binding name
pub(crate) fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}
