//! Accessor resolution.
//!
//! Entities expose their fields through named accessors only: a reader
//! `get<Field>` taking no argument and a writer `set<Field>` taking exactly
//! one. Each entity type publishes its accessors through [`Entity::methods`],
//! and [`resolve_reader`] / [`resolve_writer`] look them up by the naming
//! convention. A field without a matching accessor is not an error: callers
//! skip it.

use crate::{
    core::value::{FieldType, FromValue, Value},
    error::MapperError,
};

/// Invoker of a writer: receives the entity and one value per declared parameter.
pub type WriteFn<T> = fn(&mut T, Vec<Value>) -> Result<(), MapperError>;

/// Declared parameter of a writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub field_type: FieldType,
    /// An empty cell is passed as [`Value::Null`] instead of being coerced.
    pub nullable: bool,
}

impl Param {
    /// Parameter declared by a Rust type: `Option<T>` is nullable.
    pub fn of<P: FromValue>() -> Self {
        Param {
            field_type: P::FIELD_TYPE,
            nullable: P::NULLABLE,
        }
    }
}

impl From<FieldType> for Param {
    fn from(field_type: FieldType) -> Self {
        Param {
            field_type,
            nullable: false,
        }
    }
}

/// One accessor published by an entity type.
pub enum Method<T> {
    /// Zero-argument accessor returning the field value.
    Reader { name: String, read: fn(&T) -> Value },
    /// Accessor taking `params.len()` arguments.
    Writer {
        name: String,
        params: Vec<Param>,
        write: WriteFn<T>,
    },
}

impl<T> Method<T> {
    /// Reader published under `name`, e.g. `"getAge"`.
    pub fn reader(name: &str, read: fn(&T) -> Value) -> Self {
        Method::Reader {
            name: name.to_string(),
            read,
        }
    }

    /// Writer published under `name`, e.g. `"setAge"`.
    ///
    /// `params` accepts plain [`FieldType`]s (never nullable) or [`Param`]s.
    pub fn writer<P>(name: &str, params: impl IntoIterator<Item = P>, write: WriteFn<T>) -> Self
    where
        P: Into<Param>,
    {
        Method::Writer {
            name: name.to_string(),
            params: params.into_iter().map(Into::into).collect(),
            write,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Method::Reader { name, .. } => name,
            Method::Writer { name, .. } => name,
        }
    }
}

/// A record type whose fields are reachable through named accessors.
///
/// Implement it by hand, or with the [`entity!`](crate::entity) macro which
/// builds the accessor table from the type's getter and setter methods.
pub trait Entity: Sized + 'static {
    /// Name used in log and error messages.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Every accessor this type exposes.
    fn methods() -> Vec<Method<Self>>;

    /// Creates an entity with all fields at their default value.
    ///
    /// `None` means the type has no argument-less constructor.
    fn instantiate() -> Option<Self>;
}

/// A resolved reader bound to one entity type.
pub struct Reader<T> {
    name: String,
    read: fn(&T) -> Value,
}

impl<T> Reader<T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Calls the reader on `entity`.
    pub fn invoke(&self, entity: &T) -> Value {
        (self.read)(entity)
    }
}

/// A resolved single-parameter writer bound to one entity type.
pub struct Writer<T> {
    name: String,
    param: Param,
    write: WriteFn<T>,
}

impl<T> Writer<T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type of the only parameter.
    pub fn param_type(&self) -> FieldType {
        self.param.field_type
    }

    /// Whether the parameter takes [`Value::Null`] for an absent value.
    pub fn accepts_null(&self) -> bool {
        self.param.nullable
    }

    /// Calls the writer with `value` as its only argument.
    pub fn invoke(&self, entity: &mut T, value: Value) -> Result<(), MapperError> {
        (self.write)(entity, vec![value])
    }
}

/// Name of the reader of `field_name`: `"age"` gives `"getAge"`.
///
/// Returns `None` for an empty field name.
pub fn reader_name(field_name: &str) -> Option<String> {
    accessor_name("get", field_name)
}

/// Name of the writer of `field_name`: `"age"` gives `"setAge"`.
pub fn writer_name(field_name: &str) -> Option<String> {
    accessor_name("set", field_name)
}

fn accessor_name(prefix: &str, field_name: &str) -> Option<String> {
    let mut chars = field_name.chars();
    let first = chars.next()?;
    Some(format!("{prefix}{}{}", first.to_uppercase(), chars.as_str()))
}

/// Finds the zero-argument reader of `field_name` on `T`.
pub fn resolve_reader<T: Entity>(field_name: &str) -> Option<Reader<T>> {
    let accessor = reader_name(field_name)?;

    T::methods().into_iter().find_map(|method| match method {
        Method::Reader { name, read } if name == accessor => Some(Reader { name, read }),
        _ => None,
    })
}

/// Finds the writer of `field_name` on `T`, matched by name and by exactly
/// one parameter.
pub fn resolve_writer<T: Entity>(field_name: &str) -> Option<Writer<T>> {
    let accessor = writer_name(field_name)?;

    T::methods().into_iter().find_map(|method| match method {
        Method::Writer {
            name,
            params,
            write,
        } if name == accessor && params.len() == 1 => Some(Writer {
            name,
            param: params[0],
            write,
        }),
        _ => None,
    })
}

/// Object-safe read view over an entity.
///
/// The serializer works on `&dyn Readable` so that a sequence can mix entity
/// types; each entity is resolved against its own type.
pub trait Readable {
    fn entity_type(&self) -> &'static str;

    fn has_reader(&self, field_name: &str) -> bool;

    /// Value returned by the reader of `field_name`, `None` if there is no reader.
    fn read_field(&self, field_name: &str) -> Option<Value>;
}

impl<T: Entity> Readable for T {
    fn entity_type(&self) -> &'static str {
        T::type_name()
    }

    fn has_reader(&self, field_name: &str) -> bool {
        resolve_reader::<T>(field_name).is_some()
    }

    fn read_field(&self, field_name: &str) -> Option<Value> {
        resolve_reader::<T>(field_name).map(|reader| reader.invoke(self))
    }
}

/// Pulls the next writer argument and converts it to `P`.
#[doc(hidden)]
pub fn take_arg<P: FromValue>(
    accessor: &str,
    values: &mut impl Iterator<Item = Value>,
) -> Result<P, MapperError> {
    let value = values.next().ok_or_else(|| MapperError::WriterMismatch {
        accessor: accessor.to_string(),
        reason: "missing argument".to_string(),
    })?;

    let found = match value.field_type() {
        Some(field_type) => field_type.to_string(),
        None => "null".to_string(),
    };

    P::from_value(value).ok_or_else(|| MapperError::WriterMismatch {
        accessor: accessor.to_string(),
        reason: format!("expected {}, found {}", P::FIELD_TYPE, found),
    })
}

/// Implements [`Entity`] for a type from its getter and setter methods.
///
/// Accessor names are written as they are looked up (`getAge`, `setAge`), the
/// right-hand side names the Rust method to call. Writer parameter types must
/// implement [`FromValue`], reader return types [`ToValue`](crate::core::value::ToValue).
/// The type is instantiated with [`Default`].
///
/// # Examples
///
/// ```
/// use entity_csv::{entity, core::accessor::{resolve_reader, resolve_writer}};
///
/// #[derive(Default)]
/// struct Staff {
///     id: String,
///     age: i32,
/// }
///
/// impl Staff {
///     fn id(&self) -> &str { &self.id }
///     fn set_id(&mut self, id: String) { self.id = id; }
///     fn age(&self) -> i32 { self.age }
/// }
///
/// entity! {
///     Staff {
///         readers { getStaffID => id, getAge => age }
///         writers { setStaffID(String) => set_id }
///     }
/// }
///
/// assert!(resolve_reader::<Staff>("StaffID").is_some());
/// assert!(resolve_reader::<Staff>("age").is_some());
/// assert!(resolve_writer::<Staff>("Age").is_none());
/// ```
#[macro_export]
macro_rules! entity {
    (
        $ty:ty {
            readers { $($reader:ident => $getter:ident),* $(,)? }
            writers { $($writer:ident ( $($param:ty),* ) => $setter:ident),* $(,)? }
        }
    ) => {
        impl $crate::core::accessor::Entity for $ty {
            fn type_name() -> &'static str {
                stringify!($ty)
            }

            fn methods() -> ::std::vec::Vec<$crate::core::accessor::Method<Self>> {
                ::std::vec![
                    $(
                        $crate::core::accessor::Method::reader(
                            stringify!($reader),
                            |entity: &$ty| $crate::core::value::ToValue::to_value(&entity.$getter()),
                        ),
                    )*
                    $(
                        $crate::core::accessor::Method::writer(
                            stringify!($writer),
                            ::std::vec![$($crate::core::accessor::Param::of::<$param>()),*],
                            |entity: &mut $ty, values: ::std::vec::Vec<$crate::core::value::Value>| {
                                let accessor = stringify!($writer);
                                #[allow(unused_mut, unused_variables)]
                                let mut values = values.into_iter();
                                entity.$setter($(
                                    $crate::core::accessor::take_arg::<$param>(accessor, &mut values)?
                                ),*);
                                ::std::result::Result::Ok(())
                            },
                        ),
                    )*
                ]
            }

            fn instantiate() -> ::std::option::Option<Self> {
                ::std::option::Option::Some(<$ty as ::std::default::Default>::default())
            }
        }
    };
}
