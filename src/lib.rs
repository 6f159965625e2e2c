//! Binary framing for client messages sent to a synchronization server.
//!
//! A frame is laid out as `[metadata length: u32 BE][metadata][payload]`, where
//! the metadata is a structured record serialized with a [`frame::MetadataFormat`]
//! (MessagePack by default) and the payload is opaque bytes.

pub mod constants;
pub mod frame;
pub mod utils;
