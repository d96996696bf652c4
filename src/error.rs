use thiserror::Error;

/// Error types for jucegen operations.
///
/// Path errors are fatal by design: a bad path in a generated build file risks
/// writing the project somewhere unintended, so there is no fallback.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error(
        "Invalid path for '{field}': {detail}\n  Path: {path}\n\
         Paths written into generated build files must be plain ASCII.\n\
         CMake and Visual Studio mishandle accented characters on Windows (error MSB8066)."
    )]
    InvalidPath {
        field: String,
        path: String,
        detail: String,
    },

    #[error("End of input while waiting for a response")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
