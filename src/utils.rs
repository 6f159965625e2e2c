mod captured_error;
mod try_capture;

pub use captured_error::CapturedError;
pub use try_capture::{try_capture, try_capture_result};
