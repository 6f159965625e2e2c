use std::collections::BTreeMap;

/// Schemaless metadata: an arbitrary set of named fields.
///
/// Values may be strings, numbers, booleans, byte arrays, or nested
/// arrays/maps. Use this when the message shape is not known at compile time;
/// otherwise prefer a typed metadata struct.
///
/// The `"payload"` key is reserved: the payload travels in
/// `ClientMessage::payload`, and `MsgPackFormat` refuses to encode metadata
/// that also carries it.
pub type DynamicMetadata = BTreeMap<String, rmpv::Value>;

/// A client message: a structured metadata record plus an opaque payload.
///
/// The payload is kept apart from the metadata, so the metadata record is
/// "the message minus its payload".
#[derive(Debug, Clone, PartialEq)]
pub struct ClientMessage<M> {
    /// Every message field except the payload.
    ///
    /// Serialized with the chosen `MetadataFormat` and length-prefixed on the
    /// wire.
    pub metadata: M,

    /// Raw payload bytes.
    ///
    /// Never inspected, validated or transformed by the codec; its
    /// interpretation is left to the application layer.
    pub payload: Vec<u8>,
}

impl<M> ClientMessage<M> {
    pub fn new(metadata: M, payload: Vec<u8>) -> Self {
        Self { metadata, payload }
    }
}

/// A decoded client message whose payload borrows from the received frame.
///
/// Produced by `MessageCodec::decode_borrowed`. The payload is a shared slice
/// of the caller's buffer; the buffer cannot be mutated or freed while this
/// value is alive.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientMessageRef<'a, M> {
    pub metadata: M,
    pub payload: &'a [u8],
}

impl<M> ClientMessageRef<'_, M> {
    /// Copies the payload out of the frame, detaching the message from it.
    pub fn into_owned(self) -> ClientMessage<M> {
        ClientMessage {
            metadata: self.metadata,
            payload: self.payload.to_vec(),
        }
    }
}
