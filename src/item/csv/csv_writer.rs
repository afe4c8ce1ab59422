use std::{io::Write, path::Path};

use log::debug;

use crate::{
    core::{accessor::Readable, config::MappingConfig, item::TextSink},
    error::MapperError,
    item::file::{FileTextSink, StreamTextSink},
};

/// Serializes entities into delimited text.
///
/// The header lists, in `config` order, the fields for which the first entity
/// has a reader. Every entity then gets one line with the same columns, each
/// read against the entity's own type: an absent value, or a field the
/// entity has no reader for, gives an empty cell. Every line ends with `\n`.
///
/// An empty sequence gives an empty string, without header.
///
/// # Examples
///
/// ```
/// use entity_csv::{entity, core::config::MappingConfigBuilder, item::csv::csv_writer::serialize};
///
/// #[derive(Default)]
/// struct Car {
///     year: i16,
///     make: String,
/// }
///
/// impl Car {
///     fn year(&self) -> i16 { self.year }
///     fn make(&self) -> &str { &self.make }
/// }
///
/// entity! {
///     Car {
///         readers { getYear => year, getMake => make }
///         writers {}
///     }
/// }
///
/// let cars = vec![
///     Car { year: 1948, make: "Porsche".to_string() },
///     Car { year: 1995, make: "Peugeot".to_string() },
/// ];
/// let config = MappingConfigBuilder::new()
///     .field_order(["Make", "Model", "Year"])
///     .build();
///
/// assert_eq!(serialize(&cars, &config), "Make,Year\nPorsche,1948\nPeugeot,1995\n");
/// ```
pub fn serialize<'a, E, I>(entities: I, config: &MappingConfig) -> String
where
    I: IntoIterator<Item = &'a E>,
    E: Readable + ?Sized + 'a,
{
    let mut entities = entities.into_iter().peekable();

    let Some(first) = entities.peek() else {
        return String::new();
    };

    let columns: Vec<&str> = config
        .field_order()
        .iter()
        .map(String::as_str)
        .filter(|field_name| first.has_reader(field_name))
        .collect();

    debug!(
        "Serializing {} with columns {:?}",
        first.entity_type(),
        columns
    );

    let separator = config.separator();
    let mut csv = String::new();

    csv.push_str(&columns.join(separator));
    csv.push('\n');

    let mut count = 0;
    for entity in entities {
        let cells: Vec<String> = columns
            .iter()
            .map(|field_name| match entity.read_field(field_name) {
                Some(value) => value.to_string(),
                None => String::new(),
            })
            .collect();

        csv.push_str(&cells.join(separator));
        csv.push('\n');
        count += 1;
    }

    debug!("Serialized {} entities", count);

    csv
}

/// Serializes entities and hands the text to a [`TextSink`].
pub struct CsvEntityWriter<S: TextSink> {
    sink: S,
    config: MappingConfig,
}

impl<S: TextSink> CsvEntityWriter<S> {
    /// Writes the whole sequence, header included, then flushes the sink.
    pub fn write_all<'a, E, I>(&self, entities: I) -> Result<(), MapperError>
    where
        I: IntoIterator<Item = &'a E>,
        E: Readable + ?Sized + 'a,
    {
        let csv = serialize(entities, &self.config);
        self.sink.write_text(&csv)?;
        self.sink.flush()
    }

    pub fn config(&self) -> &MappingConfig {
        &self.config
    }

    pub fn into_inner(self) -> S {
        self.sink
    }
}

/// Builder of [`CsvEntityWriter`].
///
/// Defaults to [`MappingConfig::default`]: no field order, `,` separator.
#[derive(Default)]
pub struct CsvEntityWriterBuilder {
    config: MappingConfig,
}

impl CsvEntityWriterBuilder {
    /// Creates a builder with the default configuration.
    pub fn new() -> CsvEntityWriterBuilder {
        CsvEntityWriterBuilder {
            config: MappingConfig::default(),
        }
    }

    /// Replaces the whole mapping configuration.
    pub fn config(mut self, config: MappingConfig) -> CsvEntityWriterBuilder {
        self.config = config;
        self
    }

    /// Sets the candidate columns, in order. Fields the first entity cannot
    /// read are left out of the header.
    pub fn field_order<I, S>(mut self, field_order: I) -> CsvEntityWriterBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.set_field_order(field_order);
        self
    }

    /// Sets the text placed between cells.
    pub fn separator(mut self, separator: &str) -> CsvEntityWriterBuilder {
        self.config.set_separator(separator);
        self
    }

    /// Writes to `path`, created or truncated on each [`CsvEntityWriter::write_all`].
    pub fn from_path<P: AsRef<Path>>(self, path: P) -> CsvEntityWriter<FileTextSink> {
        self.from_sink(FileTextSink::new(path))
    }

    /// Writes to any [`Write`] stream, flushed after each write.
    ///
    /// # Examples
    ///
    /// ```
    /// use entity_csv::item::csv::csv_writer::CsvEntityWriterBuilder;
    ///
    /// let writer = CsvEntityWriterBuilder::new()
    ///     .field_order(["Id"])
    ///     .from_writer(Vec::new());
    /// assert_eq!(writer.config().field_order(), ["Id"]);
    /// ```
    pub fn from_writer<W: Write>(self, wtr: W) -> CsvEntityWriter<StreamTextSink<W>> {
        self.from_sink(StreamTextSink::new(wtr))
    }

    /// Writes to a custom [`TextSink`].
    pub fn from_sink<S: TextSink>(self, sink: S) -> CsvEntityWriter<S> {
        CsvEntityWriter {
            sink,
            config: self.config,
        }
    }
}
