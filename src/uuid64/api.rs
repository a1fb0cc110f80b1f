//! Dispatch for one invocation: parse flags, resolve the input, run the
//! selected conversion and render the outcome as a single line of text plus
//! an exit status. Pure over its arguments — the binary feeds it the real
//! process arguments and stdin, the tests feed it slices and cursors.

use std::ffi::OsString;
use std::io::Read;

use clap::Parser;

use crate::args::{Cli, USAGE};
use crate::codec;
use crate::input::resolve_input;

/// Final status of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
}

impl ExitStatus {
    /// Process exit code for this status.
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Error => 1,
        }
    }
}

/// Runs one conversion over the argument list (without the binary name) and
/// an input stream, returning the line to print and the status to exit with.
///
/// Every failure is terminal: a flag-parse or input-resolution failure
/// yields the usage text, a conversion failure yields its message, and no
/// second interpretation of the input is ever attempted.
pub fn run<I, T, R>(args: I, stdin: &mut R) -> (String, ExitStatus)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    R: Read,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(_) => return (USAGE.to_string(), ExitStatus::Error),
    };

    let input = match resolve_input(cli.input.first().map(String::as_str), stdin) {
        Ok(input) => input,
        Err(_) => return (USAGE.to_string(), ExitStatus::Error),
    };

    let result = if cli.reverse {
        codec::base64_to_uuid(&input)
    } else {
        codec::uuid_to_base64(&input)
    };

    match result {
        Ok(output) => (output, ExitStatus::Success),
        Err(e) => (e.to_string(), ExitStatus::Error),
    }
}
