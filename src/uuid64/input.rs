use std::io::Read;

use crate::error::{Result, Uuid64Error};

/// Resolves the single input string for a run.
///
/// The first positional argument wins; without one, standard input is read
/// to end-of-stream (the only blocking read in the program — `stdin` is not
/// touched when an argument is present). Surrounding whitespace is trimmed
/// either way, and an empty result is an error. Content validation belongs
/// to the codec, not here.
pub fn resolve_input<R: Read>(arg: Option<&str>, stdin: &mut R) -> Result<String> {
    let raw = match arg {
        Some(value) => value.to_string(),
        None => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            buf
        }
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Uuid64Error::NoInput);
    }
    Ok(trimmed.to_string())
}
