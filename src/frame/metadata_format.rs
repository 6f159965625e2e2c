use crate::{
    constants::{EMPTY_MSGPACK_MAP, PAYLOAD_FIELD_NAME},
    frame::{FramingError, SerializationError},
};
use serde::{Serialize, de::DeserializeOwned};
use std::io::Cursor;

/// A structured binary format used for the metadata section of a frame.
///
/// Both ends of a connection must agree on the format; the frame itself does
/// not record which one was used.
pub trait MetadataFormat<M> {
    /// Serializes a metadata record into bytes.
    fn serialize_metadata(metadata: &M) -> Result<Vec<u8>, SerializationError>;

    /// Deserializes a metadata record from exactly the bytes of the metadata
    /// section.
    fn deserialize_metadata(bytes: &[u8]) -> Result<M, FramingError>;
}

/// MessagePack with named fields (structs become maps keyed by field name).
///
/// This is the default format, readable by any MessagePack decoder on the
/// server side.
///
/// A top-level map may not carry a `"payload"` key, since the payload travels
/// outside the metadata. A zero-length metadata region decodes as an empty
/// map.
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackFormat;

impl<M> MetadataFormat<M> for MsgPackFormat
where
    M: Serialize + DeserializeOwned,
{
    fn serialize_metadata(metadata: &M) -> Result<Vec<u8>, SerializationError> {
        let bytes = rmp_serde::to_vec_named(metadata)
            .map_err(|e| SerializationError::Unrepresentable(e.to_string()))?;

        if has_payload_field(&bytes) {
            return Err(SerializationError::Unrepresentable(format!(
                "metadata must not contain a `{}` field",
                PAYLOAD_FIELD_NAME
            )));
        }

        Ok(bytes)
    }

    fn deserialize_metadata(bytes: &[u8]) -> Result<M, FramingError> {
        let bytes = if bytes.is_empty() {
            &EMPTY_MSGPACK_MAP[..]
        } else {
            bytes
        };

        let mut cursor = Cursor::new(bytes);

        let metadata = {
            let mut deserializer = rmp_serde::Deserializer::new(&mut cursor);
            M::deserialize(&mut deserializer)
                .map_err(|e| FramingError::MalformedMetadata(e.to_string()))?
        };

        // The header states the region length exactly; leftovers mean the
        // length and the record disagree.
        let consumed = cursor.position() as usize;
        if consumed != bytes.len() {
            return Err(FramingError::MalformedMetadata(format!(
                "{} trailing bytes after metadata record",
                bytes.len() - consumed
            )));
        }

        Ok(metadata)
    }
}

/// Whether serialized metadata is a map with a top-level `"payload"` key.
fn has_payload_field(bytes: &[u8]) -> bool {
    match rmpv::decode::read_value_ref(&mut &bytes[..]) {
        Ok(rmpv::ValueRef::Map(entries)) => entries
            .iter()
            .any(|(key, _)| match key {
                rmpv::ValueRef::String(name) => name.as_str() == Some(PAYLOAD_FIELD_NAME),
                _ => false,
            }),
        _ => false,
    }
}

/// `bitcode` encoding, for peers that share the Rust metadata types.
///
/// Metadata types must derive `bitcode::Encode` and `bitcode::Decode`. The
/// output is compact but not self-describing, so it is not interchangeable
/// with `MsgPackFormat`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitcodeFormat;

impl<M> MetadataFormat<M> for BitcodeFormat
where
    M: bitcode::Encode + for<'de> bitcode::Decode<'de>,
{
    fn serialize_metadata(metadata: &M) -> Result<Vec<u8>, SerializationError> {
        Ok(bitcode::encode(metadata))
    }

    fn deserialize_metadata(bytes: &[u8]) -> Result<M, FramingError> {
        bitcode::decode::<M>(bytes).map_err(|e| FramingError::MalformedMetadata(e.to_string()))
    }
}
