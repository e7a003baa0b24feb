use pulse_window::OptionsError;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// The operation reads from or writes to a scroll surface, but none is attached.
    #[error("no scroll surface is attached")]
    Detached,
    #[error(transparent)]
    Options(#[from] OptionsError),
}
