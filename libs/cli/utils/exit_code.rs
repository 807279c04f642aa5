use core::fmt::Debug;
use std::process::Termination;

/// Exit codes of the cli, following `<sysexits.h>` where one applies.
///
/// Implements `std::process::Termination` so `main` can return a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// The program executed successfully. (EX_OK)
    Success = 0,

    /// A generic or unspecified error occurred.
    Error = 1,

    /// The input data was incorrect, e.g. a blank title or a malformed
    /// email. (EX_DATAERR)
    DataError = 65,

    /// A referenced checklist or task does not exist, or the reference is
    /// ambiguous. (EX_NOINPUT)
    NoInput = 66,

    /// No user is logged in, or the credentials were rejected. (EX_NOUSER)
    NoUser = 67,
}

impl ExitCode {
    /// Returns the integer value of the exit code.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl Termination for ExitCode {
    fn report(self) -> std::process::ExitCode {
        self.code().into()
    }
}
