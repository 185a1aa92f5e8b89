//! Step outputs and workflow commands for the GitHub Actions runner

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

/// Append `name=value` in the `$GITHUB_OUTPUT` file format.
pub fn write_output<W: Write>(writer: &mut W, name: &str, value: &str) -> io::Result<()> {
    writeln!(writer, "{}={}", name, value)
}

/// Legacy `::set-output` workflow command for runners without `$GITHUB_OUTPUT`
pub fn set_output_command(name: &str, value: &str) -> String {
    format!("::set-output name={}::{}", name, escape_data(value))
}

/// `::error::` workflow command that surfaces a failure as an annotation
pub fn error_annotation(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// Publish a step output, either to the output file or as a workflow command on stdout
pub fn emit(output_file: Option<&Path>, name: &str, value: &str) -> io::Result<()> {
    match output_file {
        Some(path) => {
            debug!("Appending {} to {:?}", name, path);
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            write_output(&mut file, name, value)
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", set_output_command(name, value))
        }
    }
}

// Workflow command data must not break out of its line.
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
