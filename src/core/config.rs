use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::MapperError;

fn default_separator() -> String {
    ",".to_string()
}

/// Column layout shared by the serializer and the deserializer.
///
/// `field_order` gives the columns, left to right, by logical field name.
/// `separator` delimits the columns; it is a literal string unless
/// `separator_is_pattern` is set, in which case lines are split with it as a
/// regular expression (output is always joined with the literal text).
///
/// # Examples
///
/// ```
/// use entity_csv::core::config::MappingConfigBuilder;
///
/// let config = MappingConfigBuilder::new()
///     .field_order(["StaffID", "FullName", "DateOfBirth"])
///     .separator(":")
///     .build();
///
/// assert_eq!(config.field_order(), ["StaffID", "FullName", "DateOfBirth"]);
/// assert_eq!(config.separator(), ":");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingConfig {
    #[serde(default)]
    field_order: Vec<String>,
    #[serde(default = "default_separator")]
    separator: String,
    #[serde(default)]
    separator_is_pattern: bool,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            field_order: Vec::new(),
            separator: default_separator(),
            separator_is_pattern: false,
        }
    }
}

impl MappingConfig {
    pub fn field_order(&self) -> &[String] {
        &self.field_order
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn separator_is_pattern(&self) -> bool {
        self.separator_is_pattern
    }

    /// Replaces the field order.
    pub fn set_field_order<I, S>(&mut self, field_order: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field_order = field_order.into_iter().map(Into::into).collect();
    }

    /// Replaces the separator with a literal string.
    pub fn set_separator(&mut self, separator: &str) {
        self.separator = separator.to_string();
        self.separator_is_pattern = false;
    }

    /// Replaces the separator with a regular expression used for splitting.
    pub fn set_separator_pattern(&mut self, pattern: &str) {
        self.separator = pattern.to_string();
        self.separator_is_pattern = true;
    }

    /// Builds the splitter for one call.
    ///
    /// # Errors
    ///
    /// Returns [`MapperError::InvalidSeparator`] when the separator is a
    /// pattern that does not compile, or is empty.
    pub fn splitter(&self) -> Result<Splitter<'_>, MapperError> {
        if self.separator.is_empty() {
            return Err(MapperError::InvalidSeparator(
                "separator must not be empty".to_string(),
            ));
        }

        if self.separator_is_pattern {
            let regex = Regex::new(&self.separator)
                .map_err(|error| MapperError::InvalidSeparator(error.to_string()))?;
            Ok(Splitter::Pattern(regex))
        } else {
            Ok(Splitter::Literal(&self.separator))
        }
    }
}

/// Splits a line into cells.
#[derive(Debug)]
pub enum Splitter<'a> {
    Literal(&'a str),
    Pattern(Regex),
}

impl Splitter<'_> {
    /// Cells of `line`, in order. Trailing empty cells are kept.
    pub fn split<'l>(&self, line: &'l str) -> Vec<&'l str> {
        match self {
            Splitter::Literal(separator) => line.split(*separator).collect(),
            Splitter::Pattern(regex) => regex.split(line).collect(),
        }
    }
}

/// Fluent builder of [`MappingConfig`].
///
/// Defaults: no field order, `,` as a literal separator.
#[derive(Default)]
pub struct MappingConfigBuilder {
    config: MappingConfig,
}

impl MappingConfigBuilder {
    /// Creates a builder holding the default configuration.
    pub fn new() -> Self {
        Self {
            config: MappingConfig::default(),
        }
    }

    /// Sets the field names, in column order.
    ///
    /// # Examples
    ///
    /// ```
    /// use entity_csv::core::config::MappingConfigBuilder;
    ///
    /// let config = MappingConfigBuilder::new().field_order(["Id", "Age"]).build();
    /// assert_eq!(config.field_order(), ["Id", "Age"]);
    /// ```
    pub fn field_order<I, S>(mut self, field_order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.set_field_order(field_order);
        self
    }

    /// Sets a literal separator, used as is for joining and splitting.
    pub fn separator(mut self, separator: &str) -> Self {
        self.config.set_separator(separator);
        self
    }

    /// Sets a regular expression used to split lines.
    ///
    /// The pattern is compiled on each deserialize call; an invalid one makes
    /// that call fail with [`MapperError::InvalidSeparator`].
    pub fn separator_pattern(mut self, pattern: &str) -> Self {
        self.config.set_separator_pattern(pattern);
        self
    }

    /// Returns the configuration.
    pub fn build(self) -> MappingConfig {
        self.config
    }
}
