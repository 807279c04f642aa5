use crate::utils::exit_code::ExitCode;

/// Error returned by a command, carries the exit code of the process
pub struct Error {
    code: ExitCode,
    report: eyre::Report,
}

impl Error {
    pub fn code(&self) -> ExitCode {
        self.code
    }

    pub fn report(&self) -> &eyre::Report {
        &self.report
    }

    /// Attach a specific exit code to an error
    pub fn with_code(code: ExitCode, error: impl Into<eyre::Report>) -> Self {
        Self {
            code,
            report: error.into(),
        }
    }

    /// Input rejected before it reaches a store
    pub fn invalid_input(error: impl Into<eyre::Report>) -> Self {
        Self::with_code(ExitCode::DataError, error)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl<E> From<E> for Error
where
    E: Into<eyre::Report>,
{
    #[track_caller]
    fn from(error: E) -> Self {
        Self::with_code(ExitCode::Error, error)
    }
}
