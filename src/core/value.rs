use std::{fmt, str::FromStr};

use chrono::NaiveDate;

use crate::error::MapperError;

/// Layout used to render and parse date cells.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Declared type of a writer parameter.
///
/// This is the closed set of types a cell can be coerced into. Any type
/// outside of it is described with [`FieldType::Other`] and receives the raw
/// cell text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    I8,
    I16,
    I32,
    I64,
    Bool,
    F32,
    F64,
    Date,
    Other(&'static str),
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Text => f.write_str("text"),
            FieldType::I8 => f.write_str("i8"),
            FieldType::I16 => f.write_str("i16"),
            FieldType::I32 => f.write_str("i32"),
            FieldType::I64 => f.write_str("i64"),
            FieldType::Bool => f.write_str("bool"),
            FieldType::F32 => f.write_str("f32"),
            FieldType::F64 => f.write_str("f64"),
            FieldType::Date => f.write_str("date (dd/MM/yyyy)"),
            FieldType::Other(name) => f.write_str(name),
        }
    }
}

/// A typed cell value, as produced by a reader or consumed by a writer.
///
/// [`Value::Null`] is the absent sentinel: it renders as an empty cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Bool(bool),
    F32(f32),
    F64(f64),
    Date(NaiveDate),
    Null,
}

impl Value {
    /// Type carried by this value, `None` for the absent sentinel.
    pub fn field_type(&self) -> Option<FieldType> {
        match self {
            Value::Text(_) => Some(FieldType::Text),
            Value::I8(_) => Some(FieldType::I8),
            Value::I16(_) => Some(FieldType::I16),
            Value::I32(_) => Some(FieldType::I32),
            Value::I64(_) => Some(FieldType::I64),
            Value::Bool(_) => Some(FieldType::Bool),
            Value::F32(_) => Some(FieldType::F32),
            Value::F64(_) => Some(FieldType::F64),
            Value::Date(_) => Some(FieldType::Date),
            Value::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// Canonical text form of a value, the one written into a cell.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.write_str(text),
            Value::I8(v) => write!(f, "{v}"),
            Value::I16(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::Date(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            Value::Null => Ok(()),
        }
    }
}

/// Converts a Rust field value into a [`Value`] for serialization.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

/// Converts a coerced [`Value`] back into a Rust field value.
///
/// `FIELD_TYPE` is the declared type used to coerce the cell text before
/// `from_value` is called. A `NULLABLE` type receives [`Value::Null`] for an
/// empty cell instead.
pub trait FromValue: Sized {
    const FIELD_TYPE: FieldType;
    const NULLABLE: bool = false;

    /// Returns `None` when `value` is not of the expected variant.
    fn from_value(value: Value) -> Option<Self>;
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl FromValue for String {
    const FIELD_TYPE: FieldType = FieldType::Text;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }
}

macro_rules! impl_copy_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Value {
                    Value::$variant(*self)
                }
            }

            impl FromValue for $ty {
                const FIELD_TYPE: FieldType = FieldType::$variant;

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_copy_value!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    bool => Bool,
    f32 => F32,
    f64 => F64,
    NaiveDate => Date,
);

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    const FIELD_TYPE: FieldType = T::FIELD_TYPE;
    const NULLABLE: bool = true;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            other => T::from_value(other).map(Some),
        }
    }
}

/// Coerces the text of a cell into a value of `target`.
///
/// The cell is taken as is: surrounding whitespace is not trimmed here.
/// Booleans never fail: anything other than a case-insensitive `true` is
/// `false`. Types outside the supported set get the text back unchanged.
///
/// # Errors
///
/// Returns [`MapperError::MalformedValue`] when the text does not parse as
/// `target`.
///
/// # Examples
///
/// ```
/// use entity_csv::core::value::{coerce, FieldType, Value};
///
/// assert_eq!(coerce(FieldType::I32, "-42").unwrap(), Value::I32(-42));
/// assert_eq!(coerce(FieldType::Bool, "yes").unwrap(), Value::Bool(false));
/// assert!(coerce(FieldType::Date, "2024-02-29").is_err());
/// ```
pub fn coerce(target: FieldType, cell: &str) -> Result<Value, MapperError> {
    match target {
        FieldType::Text | FieldType::Other(_) => Ok(Value::Text(cell.to_string())),
        FieldType::I8 => parse_number(cell, target).map(Value::I8),
        FieldType::I16 => parse_number(cell, target).map(Value::I16),
        FieldType::I32 => parse_number(cell, target).map(Value::I32),
        FieldType::I64 => parse_number(cell, target).map(Value::I64),
        FieldType::Bool => Ok(Value::Bool(cell.eq_ignore_ascii_case("true"))),
        FieldType::F32 => parse_number(cell, target).map(Value::F32),
        FieldType::F64 => parse_number(cell, target).map(Value::F64),
        FieldType::Date => parse_date(cell).map(Value::Date),
    }
}

fn parse_number<N: FromStr>(cell: &str, target: FieldType) -> Result<N, MapperError> {
    cell.parse::<N>().map_err(|_| malformed(cell, target))
}

/// Parses a `dd/MM/yyyy` date. Widths are strict: `1/2/2024` is rejected.
fn parse_date(cell: &str) -> Result<NaiveDate, MapperError> {
    let bytes = cell.as_bytes();
    let layout_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/',
            _ => b.is_ascii_digit(),
        });

    if !layout_ok {
        return Err(malformed(cell, FieldType::Date));
    }

    NaiveDate::parse_from_str(cell, DATE_FORMAT).map_err(|_| malformed(cell, FieldType::Date))
}

fn malformed(cell: &str, target: FieldType) -> MapperError {
    MapperError::MalformedValue {
        value: cell.to_string(),
        expected: target.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{FieldType, FromValue, ToValue, Value, coerce};
    use crate::error::MapperError;

    #[test]
    fn text_is_passed_through_untouched() {
        assert_eq!(
            coerce(FieldType::Text, "  Alice ").unwrap(),
            Value::Text("  Alice ".to_string())
        );
    }

    #[test]
    fn integers_are_parsed_strictly() {
        assert_eq!(coerce(FieldType::I8, "-128").unwrap(), Value::I8(-128));
        assert_eq!(coerce(FieldType::I16, "+300").unwrap(), Value::I16(300));
        assert_eq!(
            coerce(FieldType::I64, "9000000000").unwrap(),
            Value::I64(9_000_000_000)
        );

        assert!(coerce(FieldType::I8, "128").is_err());
        assert!(coerce(FieldType::I32, "1,000").is_err());
        assert!(coerce(FieldType::I32, " 5").is_err());
        assert!(coerce(FieldType::I32, "").is_err());
    }

    #[test]
    fn malformed_value_reports_text_and_type() {
        let error = coerce(FieldType::I32, "abc").unwrap_err();
        assert_eq!(
            error,
            MapperError::MalformedValue {
                value: "abc".to_string(),
                expected: "i32".to_string(),
            }
        );
    }

    #[test]
    fn boolean_is_loose() {
        assert_eq!(coerce(FieldType::Bool, "true").unwrap(), Value::Bool(true));
        assert_eq!(coerce(FieldType::Bool, "TRUE").unwrap(), Value::Bool(true));
        assert_eq!(coerce(FieldType::Bool, "False").unwrap(), Value::Bool(false));
        assert_eq!(coerce(FieldType::Bool, "yes").unwrap(), Value::Bool(false));
        assert_eq!(coerce(FieldType::Bool, "").unwrap(), Value::Bool(false));
    }

    #[test]
    fn floats_accept_exponent() {
        assert_eq!(coerce(FieldType::F64, "1.5e3").unwrap(), Value::F64(1500.0));
        assert_eq!(coerce(FieldType::F32, "-0.25").unwrap(), Value::F32(-0.25));
        assert!(coerce(FieldType::F64, "1.5.3").is_err());
    }

    #[test]
    fn date_boundaries() {
        assert_eq!(
            coerce(FieldType::Date, "29/02/2024").unwrap(),
            Value::Date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        );
        assert!(matches!(
            coerce(FieldType::Date, "31/02/2024"),
            Err(MapperError::MalformedValue { .. })
        ));
        assert!(matches!(
            coerce(FieldType::Date, "2024-02-29"),
            Err(MapperError::MalformedValue { .. })
        ));
        assert!(coerce(FieldType::Date, "29/02/2023").is_err());
        assert!(coerce(FieldType::Date, "1/2/2024").is_err());
    }

    #[test]
    fn unknown_type_falls_back_to_text() {
        assert_eq!(
            coerce(FieldType::Other("Uuid"), "not checked").unwrap(),
            Value::Text("not checked".to_string())
        );
    }

    #[test]
    fn canonical_text_of_values() {
        let date = NaiveDate::from_ymd_opt(2001, 9, 3).unwrap();
        assert_eq!(Value::Date(date).to_string(), "03/09/2001");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::F64(2.5).to_string(), "2.5");
        assert_eq!(Value::Null.to_string(), "");
    }

    #[test]
    fn optional_fields_use_the_absent_sentinel() {
        let missing: Option<i32> = None;
        assert_eq!(missing.to_value(), Value::Null);
        assert_eq!(Some(7).to_value(), Value::I32(7));

        assert_eq!(<Option<i32>>::FIELD_TYPE, FieldType::I32);
        assert!(<Option<i32>>::NULLABLE);
        assert!(!<i32>::NULLABLE);
        assert_eq!(<Option<i32>>::from_value(Value::Null), Some(None));
        assert_eq!(<Option<i32>>::from_value(Value::I32(3)), Some(Some(3)));
        assert_eq!(<Option<i32>>::from_value(Value::Bool(true)), None);
    }
}
