use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlagError {
    /// The flag value does not fit in an `i64` without losing information.
    #[error("flag value {value} does not fit in a signed 64-bit integer")]
    OutOfRange { value: i128 },
}
