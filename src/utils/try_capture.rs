use crate::utils::CapturedError;
use std::{
    error::Error,
    panic::{self, AssertUnwindSafe},
};

/// Runs `f`, converting a panic into `Err(CapturedError)` instead of unwinding
/// into the caller.
///
/// Panic payloads are normalized: a boxed error passes through as
/// `CapturedError::Error`, a string becomes `CapturedError::Message`, anything
/// else becomes `CapturedError::Unknown`.
///
/// Requires the `unwind` panic strategy; with `panic = "abort"` the process
/// aborts before anything can be captured. The default panic hook still runs,
/// so captured panics are reported on stderr unless a custom hook is set.
/// State touched by `f` before it panicked is left as it was.
pub fn try_capture<T, F>(f: F) -> Result<T, CapturedError>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let captured = CapturedError::from_panic(payload);
        tracing::debug!(error = %captured, "captured panic");
        captured
    })
}

/// Runs a fallible `f`, folding both its `Err` and any panic into
/// `CapturedError`.
///
/// An `Err(e)` is passed through as `CapturedError::Error(e.into())`.
pub fn try_capture_result<T, E, F>(f: F) -> Result<T, CapturedError>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<Box<dyn Error + Send + Sync + 'static>>,
{
    try_capture(f)?.map_err(|err| CapturedError::Error(err.into()))
}
