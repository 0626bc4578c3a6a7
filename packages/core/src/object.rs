//! Declared object schemas.
//!
//! An [`Object`] is a named record with a fixed, ordered list of typed fields.
//! The list is declared up front in [`Object::FIELDS`] instead of being
//! discovered at runtime, so every codec sees the same shape.

use std::fmt;

use crate::{Error, Format, Kind, Map, Value};

/// One declared field of an object schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: Kind,
}

impl Field {
    pub const fn new(name: &'static str, kind: Kind) -> Self {
        Field { name, kind }
    }

    /// Whether `value` may be stored in this field.
    ///
    /// Float fields also accept integers, since JSON does not distinguish
    /// `1` from `1.0` once a value has gone through a text format.
    pub fn accepts(&self, value: &Value) -> bool {
        value.kind() == self.kind || (self.kind == Kind::Float && value.kind() == Kind::Integer)
    }
}

/// A record type with an explicit field schema.
///
/// Implementors convert to and from their ordered field values. Two objects
/// with equal field values are interchangeable.
pub trait Object: Sized {
    /// Identifies the type inside encoded payloads.
    const TYPE_TAG: &'static str;

    /// The declared fields, in encoding order.
    const FIELDS: &'static [Field];

    /// Field values in the order of [`Object::FIELDS`].
    fn field_values(&self) -> Vec<Value>;

    /// Build a fresh instance from field values in schema order.
    fn from_field_values(values: Vec<Value>) -> Result<Self, Error>;
}

/// Check that `values` match the declared schema of `T`.
pub fn check_fields<T: Object>(values: &[Value]) -> Result<(), Error> {
    if values.len() != T::FIELDS.len() {
        return Err(Error::type_validation(
            Format::VALUE,
            format!(
                "{} expects {} fields, found {}",
                T::TYPE_TAG,
                T::FIELDS.len(),
                values.len()
            ),
        ));
    }

    for (field, value) in T::FIELDS.iter().zip(values) {
        if !field.accepts(value) {
            return Err(Error::type_validation(
                Format::VALUE,
                format!(
                    "{}.{} expects {}, found {}",
                    T::TYPE_TAG,
                    field.name,
                    field.kind,
                    value.kind()
                ),
            ));
        }
    }

    Ok(())
}

/// A mapping view of an object.
///
/// With `attrs`, only the named fields are included; names the schema does
/// not declare are ignored. Keys follow schema order either way.
pub fn to_map<T: Object>(obj: &T, attrs: Option<&[&str]>) -> Map {
    T::FIELDS
        .iter()
        .zip(obj.field_values())
        .filter(|(field, _)| attrs.map_or(true, |attrs| attrs.contains(&field.name)))
        .map(|(field, value)| (field.name.to_string(), value))
        .collect()
}

/// Build a copy of `obj` with the fields named in `map` replaced.
///
/// Keys that are not declared fields are skipped.
pub fn reload_from_map<T: Object>(obj: &T, map: &Map) -> Result<T, Error> {
    let mut values = obj.field_values();
    for (key, value) in map {
        match T::FIELDS.iter().position(|field| field.name == key.as_str()) {
            Some(index) => values[index] = value.clone(),
            None => log::debug!("Skipping undeclared field {}.{}", T::TYPE_TAG, key),
        }
    }
    T::from_field_values(values)
}

/// A person-like record: a name, an age and a student flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomObject {
    pub name: String,
    pub age: i64,
    pub is_student: bool,
}

impl CustomObject {
    pub fn new(name: impl Into<String>, age: i64, is_student: bool) -> Self {
        CustomObject {
            name: name.into(),
            age,
            is_student,
        }
    }
}

impl Object for CustomObject {
    const TYPE_TAG: &'static str = "CustomObject";

    const FIELDS: &'static [Field] = &[
        Field::new("name", Kind::String),
        Field::new("age", Kind::Integer),
        Field::new("is_student", Kind::Bool),
    ];

    fn field_values(&self) -> Vec<Value> {
        vec![
            Value::String(self.name.clone()),
            Value::Integer(self.age),
            Value::Bool(self.is_student),
        ]
    }

    fn from_field_values(values: Vec<Value>) -> Result<Self, Error> {
        check_fields::<Self>(&values)?;

        match <[Value; 3]>::try_from(values) {
            Ok([Value::String(name), Value::Integer(age), Value::Bool(is_student)]) => {
                Ok(CustomObject {
                    name,
                    age,
                    is_student,
                })
            }
            _ => Err(Error::type_validation(
                Format::VALUE,
                "CustomObject fields out of shape",
            )),
        }
    }
}

impl fmt::Display for CustomObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Age: {}", self.age)?;
        write!(f, "Is Student: {}", self.is_student)
    }
}
