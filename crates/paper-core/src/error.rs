//! Error types for the paper-trading coach.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Price input that the simulation refuses to ingest: NaN, infinite,
    /// zero, or negative. The session is not advanced for such a tick.
    #[error("invalid price: {value}")]
    InvalidPrice { value: String },

    /// Lookup of a strategy that is not in the tracked set, e.g. resetting
    /// a strategy the session was not configured with.
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    /// A lab operation was requested before any price arrived.
    #[error("no price history recorded yet")]
    EmptyHistory,

    #[error("configuration error: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
