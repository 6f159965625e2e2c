use crate::{
    constants::{MESSAGE_HEADER_SIZE, MESSAGE_METADATA_LENGTH_OFFSET},
    frame::{
        ClientMessage, ClientMessageRef, FramingError, MetadataFormat, MsgPackFormat,
        SerializationError,
    },
};

/// Provides encoding and decoding of client messages to and from frames.
///
/// A frame is a single contiguous byte buffer:
///
/// ```text
/// +----------------------+-----------------------+-----------------+
/// | metadata length (4)  | metadata (length)     | payload (rest)  |
/// | u32, big-endian      | MetadataFormat bytes  | opaque bytes    |
/// +----------------------+-----------------------+-----------------+
/// ```
///
/// The header byte order is part of the protocol and is big-endian regardless
/// of the host platform. The payload carries no length of its own; it runs to
/// the end of the frame, so frames must be delimited by the transport.
///
/// `encode`/`decode` use `MsgPackFormat`. The `*_with` variants take the
/// metadata format as a type parameter.
///
/// The codec holds no state and may be used from any number of threads.
pub struct MessageCodec;

impl MessageCodec {
    /// Encodes a `ClientMessage` into a frame using MessagePack metadata.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<u8>)` holding the complete frame.
    /// - `Err(SerializationError)` if the metadata cannot be serialized or its
    ///   serialized form does not fit in the 4-byte length header.
    pub fn encode<M>(message: &ClientMessage<M>) -> Result<Vec<u8>, SerializationError>
    where
        MsgPackFormat: MetadataFormat<M>,
    {
        Self::encode_with::<MsgPackFormat, M>(message)
    }

    /// Encodes a `ClientMessage` into a frame using the metadata format `F`.
    ///
    /// The output buffer is allocated once at its final size and filled with
    /// three bulk copies, so the cost is linear in the frame size.
    pub fn encode_with<F, M>(message: &ClientMessage<M>) -> Result<Vec<u8>, SerializationError>
    where
        F: MetadataFormat<M>,
    {
        let metadata_bytes = F::serialize_metadata(&message.metadata)?;
        let header = encode_metadata_len(metadata_bytes.len())?;

        let mut buf = Vec::with_capacity(Self::encoded_len(
            metadata_bytes.len(),
            message.payload.len(),
        ));
        buf.extend_from_slice(&header);
        buf.extend_from_slice(&metadata_bytes);
        buf.extend_from_slice(&message.payload);

        tracing::trace!(
            metadata_len = metadata_bytes.len(),
            payload_len = message.payload.len(),
            "encoded client message"
        );

        Ok(buf)
    }

    /// Decodes a frame into an owned `ClientMessage` using MessagePack
    /// metadata.
    ///
    /// The payload is copied out of `buf`, so the returned message is
    /// independent of the input buffer.
    ///
    /// # Returns
    ///
    /// - `Ok(ClientMessage)` with the reconstructed metadata and payload.
    /// - `Err(FramingError)` if the header is truncated, the metadata region
    ///   is shorter than announced, or the metadata fails to deserialize.
    pub fn decode<M>(buf: &[u8]) -> Result<ClientMessage<M>, FramingError>
    where
        MsgPackFormat: MetadataFormat<M>,
    {
        Self::decode_with::<MsgPackFormat, M>(buf)
    }

    /// Decodes a frame into an owned `ClientMessage` using the metadata
    /// format `F`.
    pub fn decode_with<F, M>(buf: &[u8]) -> Result<ClientMessage<M>, FramingError>
    where
        F: MetadataFormat<M>,
    {
        Self::decode_borrowed_with::<F, M>(buf).map(ClientMessageRef::into_owned)
    }

    /// Decodes a frame using MessagePack metadata, borrowing the payload from
    /// `buf` instead of copying it.
    pub fn decode_borrowed<M>(buf: &[u8]) -> Result<ClientMessageRef<'_, M>, FramingError>
    where
        MsgPackFormat: MetadataFormat<M>,
    {
        Self::decode_borrowed_with::<MsgPackFormat, M>(buf)
    }

    /// Decodes a frame using the metadata format `F`, borrowing the payload
    /// from `buf`.
    pub fn decode_borrowed_with<F, M>(buf: &[u8]) -> Result<ClientMessageRef<'_, M>, FramingError>
    where
        F: MetadataFormat<M>,
    {
        let metadata_len = Self::read_metadata_len(buf)? as usize;

        let metadata_end = match MESSAGE_HEADER_SIZE.checked_add(metadata_len) {
            Some(end) if end <= buf.len() => end,
            _ => {
                tracing::debug!(
                    metadata_len,
                    frame_len = buf.len(),
                    "rejected frame with truncated metadata"
                );
                return Err(FramingError::TruncatedMetadata {
                    expected: metadata_len,
                    available: buf.len() - MESSAGE_HEADER_SIZE,
                });
            }
        };

        let metadata = F::deserialize_metadata(&buf[MESSAGE_HEADER_SIZE..metadata_end])
            .inspect_err(|err| {
                tracing::debug!(metadata_len, %err, "rejected frame with malformed metadata");
            })?;

        let payload = &buf[metadata_end..];

        tracing::trace!(
            metadata_len,
            payload_len = payload.len(),
            "decoded client message"
        );

        Ok(ClientMessageRef { metadata, payload })
    }

    /// Reads the metadata length from a frame header without touching the
    /// rest of the frame.
    ///
    /// Fails with `FramingError::TruncatedHeader` if `buf` is shorter than the
    /// header.
    pub fn read_metadata_len(buf: &[u8]) -> Result<u32, FramingError> {
        let header: [u8; MESSAGE_HEADER_SIZE] = buf
            .get(MESSAGE_METADATA_LENGTH_OFFSET..MESSAGE_HEADER_SIZE)
            .and_then(|bytes| bytes.try_into().ok())
            .ok_or_else(|| {
                tracing::debug!(frame_len = buf.len(), "rejected frame with truncated header");
                FramingError::TruncatedHeader { len: buf.len() }
            })?;

        Ok(u32::from_be_bytes(header))
    }

    /// Returns the exact frame size for the given metadata and payload sizes.
    #[inline]
    pub fn encoded_len(metadata_len: usize, payload_len: usize) -> usize {
        MESSAGE_HEADER_SIZE + metadata_len + payload_len
    }
}

/// Builds the big-endian length header, refusing lengths beyond `u32::MAX`.
fn encode_metadata_len(len: usize) -> Result<[u8; MESSAGE_HEADER_SIZE], SerializationError> {
    let len = u32::try_from(len).map_err(|_| SerializationError::MetadataTooLarge { len })?;

    Ok(len.to_be_bytes())
}
