use std::{io::Read, path::Path};

use log::{debug, error, warn};

use crate::{
    core::{
        accessor::{Entity, resolve_writer},
        config::MappingConfig,
        item::TextSource,
        value::{Value, coerce},
    },
    error::MapperError,
    item::file::{FileTextSource, StreamTextSource},
};

/// Where the column names of a text come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderMode {
    /// The first line holds the column names. It overrides the configured
    /// field order for this call and produces no entity.
    #[default]
    FirstLine,
    /// There is no header line: the configured field order names the columns.
    FieldOrder,
}

/// Why a data line did not produce an entity.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// The line does not have as many cells as the header has columns.
    ColumnCount { expected: usize, found: usize },
    /// A cell could not be coerced or written.
    Malformed(MapperError),
}

/// Result of one data line.
#[derive(Debug)]
pub enum RowOutcome<T> {
    Parsed(T),
    Skipped {
        /// 1-based line number in the input text.
        line: usize,
        reason: SkipReason,
    },
}

impl<T> RowOutcome<T> {
    pub fn is_parsed(&self) -> bool {
        matches!(self, RowOutcome::Parsed(_))
    }

    pub fn entity(self) -> Option<T> {
        match self {
            RowOutcome::Parsed(entity) => Some(entity),
            RowOutcome::Skipped { .. } => None,
        }
    }
}

/// Deserializes delimited text into entities of type `T`.
///
/// Lines whose cell count differs from the header, and lines with a cell that
/// cannot be coerced, are skipped. See [`deserialize_outcomes`] to learn why.
///
/// # Errors
///
/// Fails only when `T` cannot be instantiated or the separator pattern is
/// invalid.
///
/// # Examples
///
/// ```
/// use entity_csv::{
///     entity,
///     core::config::MappingConfig,
///     item::csv::csv_reader::{deserialize, HeaderMode},
/// };
///
/// #[derive(Default, Debug, PartialEq)]
/// struct City {
///     name: String,
///     pop: i32,
/// }
///
/// impl City {
///     fn set_name(&mut self, name: String) { self.name = name; }
///     fn set_pop(&mut self, pop: i32) { self.pop = pop; }
/// }
///
/// entity! {
///     City {
///         readers {}
///         writers { setName(String) => set_name, setPop(i32) => set_pop }
///     }
/// }
///
/// let text = "name,pop\nBoston,4628910\nConcord\nSalem,lots\n";
/// let cities: Vec<City> =
///     deserialize(text, &MappingConfig::default(), HeaderMode::FirstLine).unwrap();
///
/// assert_eq!(cities, vec![City { name: "Boston".to_string(), pop: 4628910 }]);
/// ```
pub fn deserialize<T: Entity>(
    text: &str,
    config: &MappingConfig,
    header: HeaderMode,
) -> Result<Vec<T>, MapperError> {
    let outcomes = deserialize_outcomes::<T>(text, config, header)?;
    Ok(outcomes.into_iter().filter_map(RowOutcome::entity).collect())
}

/// Deserializes delimited text, reporting the outcome of every data line.
///
/// The header line, when [`HeaderMode::FirstLine`] is used, has no outcome.
pub fn deserialize_outcomes<T: Entity>(
    text: &str,
    config: &MappingConfig,
    header: HeaderMode,
) -> Result<Vec<RowOutcome<T>>, MapperError> {
    let splitter = config.splitter()?;

    let mut headers: Vec<String> = config.field_order().to_vec();
    let mut header_pending = header == HeaderMode::FirstLine;
    let mut outcomes = Vec::new();

    debug!("Deserializing {} ({:?})", T::type_name(), header);

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;

        if header_pending {
            headers = splitter.split(line).into_iter().map(str::to_string).collect();
            header_pending = false;
            debug!("Header from line {}: {:?}", line_number, headers);
            continue;
        }

        let cells = splitter.split(line);

        if cells.len() != headers.len() {
            warn!(
                "Line {} skipped: {} cells for {} columns",
                line_number,
                cells.len(),
                headers.len()
            );
            outcomes.push(RowOutcome::Skipped {
                line: line_number,
                reason: SkipReason::ColumnCount {
                    expected: headers.len(),
                    found: cells.len(),
                },
            });
            continue;
        }

        match build_entity::<T>(&headers, &cells) {
            Ok(entity) => outcomes.push(RowOutcome::Parsed(entity)),
            Err(err) if err.is_fatal() => {
                error!("Line {}: {}", line_number, err);
                return Err(err);
            }
            Err(err) => {
                warn!("Line {} skipped: {}", line_number, err);
                outcomes.push(RowOutcome::Skipped {
                    line: line_number,
                    reason: SkipReason::Malformed(err),
                });
            }
        }
    }

    Ok(outcomes)
}

fn build_entity<T: Entity>(headers: &[String], cells: &[&str]) -> Result<T, MapperError> {
    let mut entity = T::instantiate()
        .ok_or_else(|| MapperError::UninstantiableType(T::type_name().to_string()))?;

    for (header, cell) in headers.iter().zip(cells) {
        let Some(writer) = resolve_writer::<T>(header.trim()) else {
            continue;
        };

        let cell = cell.trim();
        let value = if cell.is_empty() && writer.accepts_null() {
            Value::Null
        } else {
            coerce(writer.param_type(), cell)?
        };
        writer.invoke(&mut entity, value)?;
    }

    Ok(entity)
}

/// Reads a whole text from a [`TextSource`] and deserializes it.
pub struct CsvEntityReader<S: TextSource> {
    source: S,
    config: MappingConfig,
    header: HeaderMode,
}

impl<S: TextSource> CsvEntityReader<S> {
    /// Reads the source and returns every entity that could be built.
    pub fn read_all<T: Entity>(&self) -> Result<Vec<T>, MapperError> {
        let text = self.source.read_text()?;
        deserialize(&text, &self.config, self.header)
    }

    /// Reads the source and returns the outcome of every data line.
    pub fn read_outcomes<T: Entity>(&self) -> Result<Vec<RowOutcome<T>>, MapperError> {
        let text = self.source.read_text()?;
        deserialize_outcomes(&text, &self.config, self.header)
    }

    pub fn config(&self) -> &MappingConfig {
        &self.config
    }
}

/// Builder of [`CsvEntityReader`].
///
/// # Default Configuration
///
/// - [`MappingConfig::default`]: no field order, `,` separator
/// - Headers: enabled, the first line names the columns
///
/// Unlike a raw CSV reader, headers default to on because
/// [`serialize`](crate::item::csv::csv_writer::serialize) always writes one.
///
/// # Examples
///
/// ```
/// use entity_csv::item::csv::csv_reader::CsvEntityReaderBuilder;
///
/// // no header line: columns are named by the field order
/// let reader = CsvEntityReaderBuilder::new()
///     .field_order(["StaffID", "FullName"])
///     .separator(":")
///     .has_headers(false)
///     .from_reader("S01:Alice\n".as_bytes());
/// ```
pub struct CsvEntityReaderBuilder {
    config: MappingConfig,
    has_headers: bool,
}

impl Default for CsvEntityReaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvEntityReaderBuilder {
    /// Creates a builder with the default configuration and headers enabled.
    pub fn new() -> Self {
        Self {
            config: MappingConfig::default(),
            has_headers: true,
        }
    }

    /// Replaces the whole mapping configuration.
    pub fn config(mut self, config: MappingConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the column names used when the text has no header line.
    pub fn field_order<I, T>(mut self, field_order: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.config.set_field_order(field_order);
        self
    }

    /// Sets a literal cell separator.
    pub fn separator(mut self, separator: &str) -> Self {
        self.config.set_separator(separator);
        self
    }

    /// Splits lines on a regular expression instead of a literal separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use entity_csv::item::csv::csv_reader::CsvEntityReaderBuilder;
    ///
    /// let reader = CsvEntityReaderBuilder::new()
    ///     .separator_pattern(r"\s*;\s*")
    ///     .from_reader("Id ; Age\nS01 ; 41\n".as_bytes());
    /// ```
    pub fn separator_pattern(mut self, pattern: &str) -> Self {
        self.config.set_separator_pattern(pattern);
        self
    }

    /// Sets whether the first line of the text names the columns.
    ///
    /// When disabled, the configured field order is used and every line is
    /// data.
    pub fn has_headers(mut self, yes: bool) -> Self {
        self.has_headers = yes;
        self
    }

    /// Builds a reader of the file at `path`.
    ///
    /// The file is opened by each read, so a missing file is reported as
    /// [`MapperError::Io`] at that point.
    pub fn from_path<P: AsRef<Path>>(self, path: P) -> CsvEntityReader<FileTextSource> {
        self.from_source(FileTextSource::new(path))
    }

    /// Builds a reader of any [`Read`] stream, consumed by the first read.
    pub fn from_reader<R: Read>(self, rdr: R) -> CsvEntityReader<StreamTextSource<R>> {
        self.from_source(StreamTextSource::new(rdr))
    }

    /// Builds a reader of a custom [`TextSource`].
    pub fn from_source<S: TextSource>(self, source: S) -> CsvEntityReader<S> {
        let header = if self.has_headers {
            HeaderMode::FirstLine
        } else {
            HeaderMode::FieldOrder
        };

        CsvEntityReader {
            source,
            config: self.config,
            header,
        }
    }
}
