//! Field type mapping for Sequelize model generation
//!
//! Schema documents describe each field with a short type token. This module
//! maps those tokens to the `DataTypes` member Sequelize expects.
//!
//! # Supported Field Types
//!
//! - `string` - `DataTypes.STRING`
//! - `int` - `DataTypes.INTEGER`
//! - `boolean` - `DataTypes.BOOLEAN`
//!
//! Matching is exact and case-sensitive. Any other token (empty, missing,
//! misspelled, differently cased) maps to `DataTypes.STRING`; mapping never
//! fails.
//!
//! # Examples
//!
//! ```text
//! name: string   → DataTypes.STRING
//! age: int       → DataTypes.INTEGER
//! admin: boolean → DataTypes.BOOLEAN
//! bio: text      → DataTypes.STRING (fallback)
//! age: Int       → DataTypes.STRING (fallback, case-sensitive)
//! ```

use std::fmt;

/// Sequelize primitive type a field maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataType {
    /// Text column (`DataTypes.STRING`), also the fallback
    #[default]
    String,
    /// Integer column (`DataTypes.INTEGER`)
    Integer,
    /// Boolean column (`DataTypes.BOOLEAN`)
    Boolean,
}

impl DataType {
    /// Resolve a field-type token
    ///
    /// # Examples
    ///
    /// ```
    /// # use sequelize_scaffold::scaffold::field_type::DataType;
    /// assert_eq!(DataType::from_token(Some("int")), DataType::Integer);
    /// assert_eq!(DataType::from_token(Some("INT")), DataType::String);
    /// assert_eq!(DataType::from_token(None), DataType::String);
    /// ```
    #[must_use]
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("string") => Self::String,
            Some("int") => Self::Integer,
            Some("boolean") => Self::Boolean,
            _ => Self::default(),
        }
    }

    /// Name of the `DataTypes` member used in generated models
    #[must_use]
    pub const fn sequelize_type(self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::Integer => "INTEGER",
            Self::Boolean => "BOOLEAN",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sequelize_type())
    }
}

/// Map a field-type token straight to its Sequelize type identifier
///
/// # Examples
///
/// ```
/// # use sequelize_scaffold::scaffold::field_type::map_field_type;
/// assert_eq!(map_field_type(Some("boolean")), "BOOLEAN");
/// assert_eq!(map_field_type(Some("varchar")), "STRING");
/// ```
#[must_use]
pub fn map_field_type(token: Option<&str>) -> &'static str {
    DataType::from_token(token).sequelize_type()
}
