#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
 # Entity CSV for Rust

 A configuration-driven mapper between delimited text and your own record types.
 You declare the column order once, and the mapper writes a collection of entities
 as text, or builds entities back from text, going through each type's named
 accessors.

 ## Core Concepts

- **Entity:** a record type whose fields are reached through accessors named by
  convention: `getAge()` reads the `Age` field, `setAge(value)` writes it. The
  accessor table of a type is declared with the [`entity!`] macro, or by
  implementing [`Entity`](core::accessor::Entity) by hand.
- **MappingConfig:** the field order (column order, in both directions) and the
  column separator, `,` by default.
- **Serializer:** writes a header line with the fields that have a reader, then one
  line per entity.
- **Deserializer:** builds one entity per well-formed line, coercing each cell into
  the parameter type of the matching writer. Ragged lines and cells that do not
  parse are skipped, without failing the whole text.

 ## Supported Field Types

| **Type**                    | **Cell format**                                   |
|-----------------------------|---------------------------------------------------|
| `String`                    | as is                                             |
| `i8`, `i16`, `i32`, `i64`   | decimal, optional sign                            |
| `bool`                      | `true` in any case; anything else is `false`      |
| `f32`, `f64`                | decimal or exponent notation                      |
| `chrono::NaiveDate`         | `dd/MM/yyyy`                                      |
| `Option<T>`                 | `None` as an empty cell, and back                 |
| any other type              | raw cell text, see `FieldType::Other`             |

 ## Getting Started

```rust
use entity_csv::{
    entity,
    core::config::MappingConfigBuilder,
    item::csv::{
        csv_reader::{CsvEntityReaderBuilder, HeaderMode, deserialize},
        csv_writer::serialize,
    },
    error::MapperError,
};
use chrono::NaiveDate;

#[derive(Default, Debug, Clone, PartialEq)]
struct Staff {
    id: String,
    full_name: String,
    birth: NaiveDate,
}

impl Staff {
    fn id(&self) -> &str { &self.id }
    fn set_id(&mut self, id: String) { self.id = id; }
    fn full_name(&self) -> &str { &self.full_name }
    fn set_full_name(&mut self, name: String) { self.full_name = name; }
    fn birth(&self) -> NaiveDate { self.birth }
    fn set_birth(&mut self, birth: NaiveDate) { self.birth = birth; }
}

entity! {
    Staff {
        readers {
            getStaffID => id,
            getFullName => full_name,
            getDateOfBirth => birth,
        }
        writers {
            setStaffID(String) => set_id,
            setFullName(String) => set_full_name,
            setDateOfBirth(NaiveDate) => set_birth,
        }
    }
}

fn main() -> Result<(), MapperError> {
    let config = MappingConfigBuilder::new()
        .field_order(["StaffID", "FullName", "DateOfBirth"])
        .separator(":")
        .build();

    let staff = vec![Staff {
        id: "S01".to_string(),
        full_name: "Alice Martin".to_string(),
        birth: NaiveDate::from_ymd_opt(1990, 1, 5).unwrap(),
    }];

    let text = serialize(&staff, &config);
    assert_eq!(text, "StaffID:FullName:DateOfBirth\nS01:Alice Martin:05/01/1990\n");

    let back: Vec<Staff> = deserialize(&text, &config, HeaderMode::FirstLine)?;
    assert_eq!(back, staff);

    // the same through a reader, here without header line
    let reader = CsvEntityReaderBuilder::new()
        .config(config)
        .has_headers(false)
        .from_reader("S02:Bob Stone:12/12/1985\n".as_bytes());
    let read: Vec<Staff> = reader.read_all()?;
    assert_eq!(read[0].full_name, "Bob Stone");

    Ok(())
}
```

 ## License
 Licensed under either of

 -   Apache License, Version 2.0
     ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
 -   MIT license
     ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)

 at your option.

 ## Contribution
 Unless you explicitly state otherwise, any contribution intentionally submitted
 for inclusion in the work by you, as defined in the Apache-2.0 license, shall be
 dual licensed as above, without any additional terms or conditions

 */

/// Core module: accessors, coercion and mapping configuration
pub mod core;

/// Error types for mapping operations
pub mod error;

#[doc(inline)]
pub use error::*;

/// Text readers / writers (for exemple: delimited text and file adapters)
pub mod item;
