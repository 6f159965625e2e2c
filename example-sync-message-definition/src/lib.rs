mod update;

pub use update::{UpdateMessage, UpdateMetadata};
