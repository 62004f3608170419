//! Shared input and output handling for commands.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::CliError;

/// Read UTF-8 text from `path`, or stdin when no path is given.
///
/// At most `max_bytes` are accepted; larger input is a validation error.
pub(crate) fn read_input(path: Option<&Path>, max_bytes: u64) -> Result<String, CliError> {
    let limit = max_bytes.saturating_add(1);
    let mut bytes = Vec::new();
    match path {
        Some(path) => {
            File::open(path)?.take(limit).read_to_end(&mut bytes)?;
        }
        None => {
            std::io::stdin().lock().take(limit).read_to_end(&mut bytes)?;
        }
    }

    if u64::try_from(bytes.len()).unwrap_or(u64::MAX) > max_bytes {
        return Err(CliError::Validation(format!(
            "input exceeds the {max_bytes} byte limit"
        )));
    }

    String::from_utf8(bytes)
        .map_err(|_| CliError::Validation("input is not valid UTF-8".to_owned()))
}

/// Write `content` to `path`, or stdout when no path is given.
pub(crate) fn write_output(path: Option<&Path>, content: &str) -> Result<(), CliError> {
    match path {
        Some(path) => std::fs::write(path, content)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
