//! Delimited-text support for entities.
//!
//! This module converts between entity collections and delimited text, with the
//! column order and separator taken from a [`MappingConfig`](crate::core::config::MappingConfig).
//!
//! # Module Architecture
//!
//! 1. **Serializer** ([`csv_writer::serialize`]): writes a header line and one
//!    line per entity, reading each column through the entity's `get…` accessor.
//!
//! 2. **Deserializer** ([`csv_reader::deserialize`]): builds one entity per
//!    well-formed line, coercing each cell to the parameter type of the
//!    matching `set…` accessor.
//!
//! Both come with a builder-configured wrapper ([`csv_writer::CsvEntityWriter`],
//! [`csv_reader::CsvEntityReader`]) that moves the whole text to or from a file
//! or stream.
//!
//! # Text Format
//!
//! This is not a general CSV dialect:
//! - lines end with `\n`
//! - no quoting, a separator can not appear inside a value
//! - no multi-line values
//! - dates are written and read as `dd/MM/yyyy`
//!
//! # Lenient Parsing
//!
//! - A line whose cell count differs from the header is skipped.
//! - A line with a cell that can not be coerced is skipped; the remaining
//!   lines are still processed.
//! - A column without accessor is left out when writing and ignored when
//!   reading.
//!
//! # Examples
//!
//! ```
//! use entity_csv::{
//!     entity,
//!     core::config::MappingConfigBuilder,
//!     item::csv::{
//!         csv_reader::{deserialize, HeaderMode},
//!         csv_writer::serialize,
//!     },
//! };
//!
//! #[derive(Default, Debug, PartialEq, Clone)]
//! struct Person {
//!     name: String,
//!     age: i8,
//! }
//!
//! impl Person {
//!     fn name(&self) -> &str { &self.name }
//!     fn set_name(&mut self, name: String) { self.name = name; }
//!     fn age(&self) -> i8 { self.age }
//!     fn set_age(&mut self, age: i8) { self.age = age; }
//! }
//!
//! entity! {
//!     Person {
//!         readers { getName => name, getAge => age }
//!         writers { setName(String) => set_name, setAge(i8) => set_age }
//!     }
//! }
//!
//! let people = vec![
//!     Person { name: "Alice".to_string(), age: 28 },
//!     Person { name: "Bob".to_string(), age: 35 },
//! ];
//! let config = MappingConfigBuilder::new()
//!     .field_order(["Age", "Name"])
//!     .separator(";")
//!     .build();
//!
//! let text = serialize(&people, &config);
//! assert_eq!(text, "Age;Name\n28;Alice\n35;Bob\n");
//!
//! let back: Vec<Person> = deserialize(&text, &config, HeaderMode::FirstLine).unwrap();
//! assert_eq!(back, people);
//! ```

/// A module providing facilities for reading entities from delimited text.
pub mod csv_reader;

/// A module providing facilities for writing entities as delimited text.
pub mod csv_writer;
