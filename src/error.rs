use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// The human dismissed a prompt after the cancel handler already ran.
    #[error("Prompt cancelled by user.")]
    Cancelled,

    /// The human dismissed a prompt and no cancel handler was registered.
    ///
    /// Continuing would hand an invalid value to application code, so the
    /// prompt layer refuses to resume. Register a handler with
    /// [`Session::on_cancel`](crate::session::Session::on_cancel) first.
    #[error("Prompt cancelled with no cancel handler registered.")]
    UnhandledCancel,

    #[error("Invalid prompt configuration: {0}.")]
    InvalidConfig(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(io) => Error::IoError(io),
        }
    }
}

/// Convenience type alias for Results with this crate's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
