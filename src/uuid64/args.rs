use clap::Parser;

/// Fixed usage text, emitted verbatim for every usage-class failure
/// (missing input, unknown flag).
pub const USAGE: &str = "\
Converts a UUID string to the base64 encoding of its 16 raw bytes

Usage:
    uuid64 [UUID]                converts a UUID string into a base64-encoded byte string
    uuid64 --reverse [BASE64]    converts a base64-encoded byte string back into a UUID string

When the value is omitted it is read from standard input.";

/// Command-line surface of the converter.
///
/// Parsed with `no_binary_name` so [`crate::api::run`] takes the argument
/// list after the program name, mirroring what the tests feed it.
#[derive(Parser, Debug)]
#[command(name = "uuid64", no_binary_name = true)]
#[command(
    about = "Converts UUID strings to base64-encoded byte strings and back",
    long_about = None
)]
pub struct Cli {
    /// Read a base64-encoded 16-byte value and print it as a UUID string
    #[arg(short, long)]
    pub reverse: bool,

    /// Value to convert; read from standard input when omitted.
    /// Extra values are ignored — only the first one is converted.
    pub input: Vec<String>,
}
