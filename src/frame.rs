mod client_message;
mod message_codec;
mod message_error;
mod metadata_format;

pub use client_message::{ClientMessage, ClientMessageRef, DynamicMetadata};
pub use message_codec::MessageCodec;
pub use message_error::{FramingError, SerializationError};
pub use metadata_format::{BitcodeFormat, MetadataFormat, MsgPackFormat};
