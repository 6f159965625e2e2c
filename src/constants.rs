// Client message framing constants

/// Byte offset of the metadata length field.
/// The field is a fixed-size 4-byte unsigned integer (u32), always big-endian,
/// holding the length in bytes of the serialized metadata section.
pub const MESSAGE_METADATA_LENGTH_OFFSET: usize = 0;

/// Size in bytes of the metadata length field (u32).
pub const MESSAGE_METADATA_LENGTH_SIZE: usize = 4;

/// Total size of the fixed-length header prefix before metadata.
/// Does not include metadata or payload data.
pub const MESSAGE_HEADER_SIZE: usize =
    MESSAGE_METADATA_LENGTH_OFFSET + MESSAGE_METADATA_LENGTH_SIZE; // 0 + 4 = 4

/// Name of the message field carried outside the metadata section.
pub const PAYLOAD_FIELD_NAME: &str = "payload";

/// MessagePack encoding of an empty map (fixmap, 0 entries).
/// A zero-length metadata section is read as this record.
pub const EMPTY_MSGPACK_MAP: [u8; 1] = [0x80];
