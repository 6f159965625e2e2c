use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use syncframe::frame::ClientMessage;

/// Metadata announcing a new version of some synchronized state.
///
/// Serialized as `{ "type": "update", "version": <n> }` in MessagePack.
#[derive(Serialize, Deserialize, Encode, Decode, Debug, Clone, PartialEq)]
pub struct UpdateMetadata {
    #[serde(rename = "type")]
    pub kind: String,
    pub version: u32,
}

impl UpdateMetadata {
    pub const KIND: &'static str = "update";

    pub fn new(version: u32) -> Self {
        Self {
            kind: Self::KIND.to_string(),
            version,
        }
    }

    /// Wraps the metadata and an encoded state snapshot into a message.
    pub fn into_message(self, payload: Vec<u8>) -> UpdateMessage {
        ClientMessage::new(self, payload)
    }
}

pub type UpdateMessage = ClientMessage<UpdateMetadata>;
