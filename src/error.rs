use std::io;

use thiserror::Error;

/// Startup failures. Once the main loop runs nothing can fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to initialize terminal: {0}")]
    TerminalInit(#[source] io::Error),
    #[error("failed to start input listener: {0}")]
    Runtime(#[source] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_init_message_names_cause() {
        let err = Error::TerminalInit(io::Error::new(io::ErrorKind::NotFound, "no tty"));
        assert_eq!(err.to_string(), "failed to initialize terminal: no tty");
        assert!(std::error::Error::source(&err).is_some());
    }
}
