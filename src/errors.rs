use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StartupError {
    /// The listener could not be bound. Fatal: the process exits rather
    /// than retrying or falling back to another port.
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: io::Error },
}

impl StartupError {
    pub fn bind(addr: impl Into<String>, source: io::Error) -> Self {
        Self::Bind {
            addr: addr.into(),
            source,
        }
    }
}
