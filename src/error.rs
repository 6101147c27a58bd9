/// Errors that can occur when parsing a secret code.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SecretError {
    #[error("secret must have {expected} digits, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("secret contains non-digit character {0:?}")]
    NonDigit(char),

    #[error("secret repeats digit {0:?}")]
    RepeatedDigit(char),
}

/// Errors that end a game session before the secret is guessed.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("input closed before the secret was guessed")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while fitting a line.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FitError {
    #[error("x and y must have the same length (x: {x}, y: {y})")]
    LengthMismatch { x: usize, y: usize },

    #[error("need at least {required} points to estimate fit errors, got {actual}")]
    TooFewPoints { required: usize, actual: usize },

    #[error("all x values are equal; slope is undefined")]
    DegenerateX,
}

/// Errors that can occur while rendering or showing a figure.
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    #[error("failed to write figure to {path}: {source}")]
    Write {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
