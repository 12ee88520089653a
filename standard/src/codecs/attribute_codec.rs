use crate::errors::CodecError;
use crate::types::{AttributeValue, DataType, MessageAttribute, MessageAttributes};
use anyhow::anyhow;
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::collections::BTreeMap;
use std::io;

/// Converts a raw attribute value into its wire representation.
///
/// Floats always carry a fractional part (`10.0` is sent as `"10.0"`), so they decode back as
/// floats. String arrays are JSON encoded with `", "` between members and non-ASCII characters
/// escaped as `\uXXXX`.
///
/// Booleans are not a data type the remote service knows about, so they are sent as a `String`
/// holding `true` or `false`.
pub fn format_attribute(value: &AttributeValue) -> MessageAttribute {
    match value {
        AttributeValue::Integer(number) => {
            MessageAttribute::new(DataType::Number, number.to_string())
        }
        AttributeValue::Float(number) => {
            MessageAttribute::new(DataType::Number, format!("{number:?}"))
        }
        AttributeValue::StringArray(values) => {
            MessageAttribute::new(DataType::StringArray, encode_string_array(values))
        }
        AttributeValue::String(value) => MessageAttribute::new(DataType::String, value.as_str()),
        AttributeValue::Boolean(value) => {
            MessageAttribute::new(DataType::String, value.to_string())
        }
    }
}

/// JSON formatting with a space after array separators and ASCII-only output.
struct ArrayFormatter;

impl Formatter for ArrayFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }

        let mut units = [0u16; 2];

        for c in fragment.chars() {
            if c.is_ascii() {
                writer.write_all(&[c as u8])?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }

        Ok(())
    }
}

fn encode_string_array(values: &[String]) -> String {
    let mut encoded = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut encoded, ArrayFormatter);

    // Serializing strings into an in-memory buffer cannot fail.
    let _ = values.serialize(&mut serializer);

    String::from_utf8_lossy(&encoded).into_owned()
}

/// Formats every attribute of a context, keyed by attribute name.
pub fn format_attributes(attributes: &MessageAttributes) -> BTreeMap<String, MessageAttribute> {
    attributes
        .iter()
        .map(|(name, value)| (name.clone(), format_attribute(value)))
        .collect()
}

/// Converts a wire attribute back into a raw value.
///
/// A `Number` decodes to [AttributeValue::Integer] when its text is an integer, and to
/// [AttributeValue::Float] otherwise.
///
/// # Errors
///
/// Returns [CodecError::DecodeFailure] if the `StringValue` cannot be read as the declared
/// `DataType`.
pub fn parse_attribute(attribute: &MessageAttribute) -> Result<AttributeValue, CodecError> {
    let raw = attribute.string_value.as_str();

    match attribute.data_type {
        DataType::Number => {
            if let Ok(integer) = raw.parse::<i64>() {
                return Ok(AttributeValue::Integer(integer));
            }

            raw.parse::<f64>()
                .map(AttributeValue::Float)
                .map_err(|_| CodecError::DecodeFailure(anyhow!("'{raw}' is not a number")))
        }
        DataType::StringArray => serde_json::from_str::<Vec<String>>(raw)
            .map(AttributeValue::StringArray)
            .map_err(|err| CodecError::DecodeFailure(err.into())),
        DataType::String => Ok(AttributeValue::String(raw.to_owned())),
    }
}
