//! Serialization of Rust values into form entries.
//!
//! A struct or map becomes one entry per field, in field order. A top-level
//! sequence of `(name, value)` pairs works the same way and allows repeated
//! names. Field values map as follows:
//!
//! - **Primitives** (strings, numbers, booleans, chars, unit variants): one text entry
//! - **`None` and unit**: no entry
//! - **Sequences**: one entry per element, all under the field's name
//! - **Bytes** (`serialize_bytes`, e.g. via `serde_bytes`): one binary `file` entry
//! - **Nested structs and maps**: rejected with [`Error::UnsupportedType`]
//!
//! Note that a plain `Vec<u8>` serializes as a sequence of numbers, not as bytes.
//!
//! ## Examples
//!
//! ```rust
//! use form_encoding::to_url_encoded;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Search {
//!     q: String,
//!     tags: Vec<&'static str>,
//!     page: Option<u32>,
//! }
//!
//! let search = Search { q: "rust form".to_string(), tags: vec!["a", "b"], page: None };
//! assert_eq!(to_url_encoded(&search).unwrap(), "q=rust+form&tags=a&tags=b");
//! ```

use crate::{Error, Result};
use serde::ser::{self, Impossible, Serialize};

/// A field value produced by serialization, before it becomes an entry.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FieldValue {
    Text(String),
    Bytes(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Field {
    pub(crate) name: String,
    pub(crate) value: FieldValue,
}

/// Serializes `value` into a list of named fields.
pub(crate) fn to_fields<T>(value: &T) -> Result<Vec<Field>>
where
    T: ?Sized + Serialize,
{
    let mut fields = Vec::new();
    value.serialize(FormSerializer {
        fields: &mut fields,
    })?;
    Ok(fields)
}

fn top_level_error() -> Error {
    Error::unsupported_type("top-level value must be a struct, a map or a sequence of pairs")
}

/// Serializer for the top-level value: a struct, map or sequence of pairs.
struct FormSerializer<'a> {
    fields: &'a mut Vec<Field>,
}

impl<'a> ser::Serializer for FormSerializer<'a> {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = FieldCollector<'a>;
    type SerializeTuple = Impossible<(), Error>;
    type SerializeTupleStruct = Impossible<(), Error>;
    type SerializeTupleVariant = Impossible<(), Error>;
    type SerializeMap = FieldCollector<'a>;
    type SerializeStruct = FieldCollector<'a>;
    type SerializeStructVariant = Impossible<(), Error>;

    fn serialize_bool(self, _v: bool) -> Result<Self::Ok> {
        Err(top_level_error())
    }

    fn serialize_i8(self, _v: i8) -> Result<Self::Ok> {
        Err(top_level_error())
    }

    fn serialize_i16(self, _v: i16) -> Result<Self::Ok> {
        Err(top_level_error())
    }

    fn serialize_i32(self, _v: i32) -> Result<Self::Ok> {
        Err(top_level_error())
    }

    fn serialize_i64(self, _v: i64) -> Result<Self::Ok> {
        Err(top_level_error())
    }

    fn serialize_u8(self, _v: u8) -> Result<Self::Ok> {
        Err(top_level_error())
    }

    fn serialize_u16(self, _v: u16) -> Result<Self::Ok> {
        Err(top_level_error())
    }

    fn serialize_u32(self, _v: u32) -> Result<Self::Ok> {
        Err(top_level_error())
    }

    fn serialize_u64(self, _v: u64) -> Result<Self::Ok> {
        Err(top_level_error())
    }

    fn serialize_f32(self, _v: f32) -> Result<Self::Ok> {
        Err(top_level_error())
    }

    fn serialize_f64(self, _v: f64) -> Result<Self::Ok> {
        Err(top_level_error())
    }

    fn serialize_char(self, _v: char) -> Result<Self::Ok> {
        Err(top_level_error())
    }

    fn serialize_str(self, _v: &str) -> Result<Self::Ok> {
        Err(top_level_error())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Self::Ok> {
        Err(top_level_error())
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        Ok(())
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Self::Ok> {
        Err(top_level_error())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        Err(top_level_error())
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(FieldCollector::new(self.fields))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(top_level_error())
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(top_level_error())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(top_level_error())
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(FieldCollector::new(self.fields))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Ok(FieldCollector::new(self.fields))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(top_level_error())
    }
}

/// Collects named fields from a struct, a map or a sequence of pairs.
struct FieldCollector<'a> {
    fields: &'a mut Vec<Field>,
    pending_key: Option<String>,
}

impl<'a> FieldCollector<'a> {
    fn new(fields: &'a mut Vec<Field>) -> Self {
        FieldCollector {
            fields,
            pending_key: None,
        }
    }

    fn push_values<T>(&mut self, name: &str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        for value in value.serialize(ValueSerializer)? {
            self.fields.push(Field {
                name: name.to_string(),
                value,
            });
        }
        Ok(())
    }
}

impl<'a> ser::SerializeStruct for FieldCollector<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push_values(key, value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(())
    }
}

impl<'a> ser::SerializeMap for FieldCollector<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.pending_key = Some(key_to_string(key)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called before serialize_key"))?;
        self.push_values(&key, value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(())
    }
}

impl<'a> ser::SerializeSeq for FieldCollector<'a> {
    type Ok = ();
    type Error = Error;

    /// Each element is a `(name, value)` pair. The value maps like a struct
    /// field: `None` adds nothing and a sequence repeats the name.
    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.fields.extend(value.serialize(PairSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(())
    }
}

fn key_to_string<T>(key: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut values = key.serialize(ValueSerializer)?;
    match (values.pop(), values.is_empty()) {
        (Some(FieldValue::Text(text)), true) => Ok(text),
        _ => Err(Error::unsupported_type(
            "field names must serialize to a single string",
        )),
    }
}

fn pair_error() -> Error {
    Error::unsupported_type("sequence elements must be (name, value) pairs")
}

/// Serializer for one element of a top-level pair sequence.
struct PairSerializer;

impl ser::Serializer for PairSerializer {
    type Ok = Vec<Field>;
    type Error = Error;

    type SerializeSeq = PairFields;
    type SerializeTuple = PairFields;
    type SerializeTupleStruct = PairFields;
    type SerializeTupleVariant = Impossible<Vec<Field>, Error>;
    type SerializeMap = Impossible<Vec<Field>, Error>;
    type SerializeStruct = Impossible<Vec<Field>, Error>;
    type SerializeStructVariant = Impossible<Vec<Field>, Error>;

    fn serialize_bool(self, _v: bool) -> Result<Self::Ok> {
        Err(pair_error())
    }

    fn serialize_i8(self, _v: i8) -> Result<Self::Ok> {
        Err(pair_error())
    }

    fn serialize_i16(self, _v: i16) -> Result<Self::Ok> {
        Err(pair_error())
    }

    fn serialize_i32(self, _v: i32) -> Result<Self::Ok> {
        Err(pair_error())
    }

    fn serialize_i64(self, _v: i64) -> Result<Self::Ok> {
        Err(pair_error())
    }

    fn serialize_u8(self, _v: u8) -> Result<Self::Ok> {
        Err(pair_error())
    }

    fn serialize_u16(self, _v: u16) -> Result<Self::Ok> {
        Err(pair_error())
    }

    fn serialize_u32(self, _v: u32) -> Result<Self::Ok> {
        Err(pair_error())
    }

    fn serialize_u64(self, _v: u64) -> Result<Self::Ok> {
        Err(pair_error())
    }

    fn serialize_f32(self, _v: f32) -> Result<Self::Ok> {
        Err(pair_error())
    }

    fn serialize_f64(self, _v: f64) -> Result<Self::Ok> {
        Err(pair_error())
    }

    fn serialize_char(self, _v: char) -> Result<Self::Ok> {
        Err(pair_error())
    }

    fn serialize_str(self, _v: &str) -> Result<Self::Ok> {
        Err(pair_error())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Self::Ok> {
        Err(pair_error())
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        Ok(Vec::new())
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Err(pair_error())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        Err(pair_error())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Self::Ok> {
        Err(pair_error())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        Err(pair_error())
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(PairFields::default())
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Ok(PairFields::default())
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Ok(PairFields::default())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(pair_error())
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(pair_error())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(pair_error())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(pair_error())
    }
}

/// The first element names the field; every later element adds values to it.
#[derive(Default)]
struct PairFields {
    name: Option<String>,
    fields: Vec<Field>,
}

impl PairFields {
    fn push<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match &self.name {
            None => self.name = Some(key_to_string(value)?),
            Some(name) => {
                for value in value.serialize(ValueSerializer)? {
                    self.fields.push(Field {
                        name: name.clone(),
                        value,
                    });
                }
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Vec<Field>> {
        match self.name {
            Some(_) => Ok(self.fields),
            None => Err(pair_error()),
        }
    }
}

impl ser::SerializeSeq for PairFields {
    type Ok = Vec<Field>;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

impl ser::SerializeTuple for PairFields {
    type Ok = Vec<Field>;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

impl ser::SerializeTupleStruct for PairFields {
    type Ok = Vec<Field>;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

fn nested_error() -> Error {
    Error::unsupported_type("nested structs and maps have no form representation")
}

/// Serializer for a single field value; yields zero or more entry values.
struct ValueSerializer;

impl ser::Serializer for ValueSerializer {
    type Ok = Vec<FieldValue>;
    type Error = Error;

    type SerializeSeq = SeqValues;
    type SerializeTuple = SeqValues;
    type SerializeTupleStruct = SeqValues;
    type SerializeTupleVariant = Impossible<Vec<FieldValue>, Error>;
    type SerializeMap = Impossible<Vec<FieldValue>, Error>;
    type SerializeStruct = Impossible<Vec<FieldValue>, Error>;
    type SerializeStructVariant = Impossible<Vec<FieldValue>, Error>;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok> {
        self.serialize_str(if v { "true" } else { "false" })
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Self::Ok> {
        Ok(vec![FieldValue::Text(v.to_string())])
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Self::Ok> {
        Ok(vec![FieldValue::Text(v.to_string())])
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok> {
        Ok(vec![FieldValue::Text(v.to_string())])
    }

    fn serialize_f64(self, v: f64) -> Result<Self::Ok> {
        Ok(vec![FieldValue::Text(v.to_string())])
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        Ok(vec![FieldValue::Text(v.to_string())])
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        Ok(vec![FieldValue::Text(v.to_string())])
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Self::Ok> {
        Ok(vec![FieldValue::Bytes(v.to_vec())])
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        Ok(Vec::new())
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Ok(Vec::new())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        Ok(Vec::new())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        self.serialize_str(variant)
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(SeqValues(Vec::with_capacity(len.unwrap_or(0))))
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        Ok(SeqValues(Vec::with_capacity(len)))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Ok(SeqValues(Vec::with_capacity(len)))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(nested_error())
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(nested_error())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(nested_error())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(nested_error())
    }
}

/// Flattens sequence and tuple elements into consecutive values.
struct SeqValues(Vec<FieldValue>);

impl SeqValues {
    fn push<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.0.extend(value.serialize(ValueSerializer)?);
        Ok(())
    }
}

impl ser::SerializeSeq for SeqValues {
    type Ok = Vec<FieldValue>;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(self.0)
    }
}

impl ser::SerializeTuple for SeqValues {
    type Ok = Vec<FieldValue>;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(self.0)
    }
}

impl ser::SerializeTupleStruct for SeqValues {
    type Ok = Vec<FieldValue>;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(self.0)
    }
}
