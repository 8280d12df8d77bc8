use std::fs::OpenOptions;
use std::io::{self, BufRead, BufWriter, Write};

use anyhow::{Context, Result};
use camino::Utf8Path;
use chrono::Local;

/// Input that ends a session, compared case-insensitively.
pub const SENTINEL: &str = "stop";

/// Layout of the header line written at the start of every session.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Append a session to `path` reading lines from the real terminal.
pub fn append_interactive(path: &Utf8Path) -> Result<Vec<String>> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    append_session(path, stdin.lock(), stdout.lock())
}

/// Open `path` for appending (creating it when missing), write a timestamp
/// header and then the numbered lines read from `input` until the sentinel
/// or end of input. Returns the content lines that were written.
pub fn append_session<R, P>(path: &Utf8Path, input: R, prompts: P) -> Result<Vec<String>>
where
    R: BufRead,
    P: Write,
{
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening {} for append", path))?;
    let mut sink = BufWriter::new(file);

    let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
    let written = write_session(&mut sink, input, prompts, &timestamp)
        .with_context(|| format!("writing to {}", path))?;
    sink.flush().with_context(|| format!("flushing {}", path))?;

    tracing::info!(path = %path, lines = written.len(), "session appended");
    Ok(written)
}

/// Core loop of a session, independent of where lines come from or go to.
pub fn write_session<W, R, P>(
    sink: &mut W,
    mut input: R,
    mut prompts: P,
    timestamp: &str,
) -> Result<Vec<String>>
where
    W: Write,
    R: BufRead,
    P: Write,
{
    writeln!(sink, "{timestamp}").context("writing timestamp header")?;

    let mut written = Vec::new();
    let mut line_number = 1usize;
    loop {
        let label = format!("Enter content line {line_number}: ");
        let Some(content) = prompt(&mut input, &mut prompts, &label)? else {
            tracing::debug!(line_number, "input exhausted before sentinel; ending session");
            break;
        };
        if content.eq_ignore_ascii_case(SENTINEL) {
            break;
        }
        writeln!(sink, "{line_number} {content}")
            .with_context(|| format!("writing content line {line_number}"))?;
        written.push(content);
        line_number += 1;
    }

    Ok(written)
}

/// Show `label` and read one line. `None` means the input is exhausted.
fn prompt<R, P>(input: &mut R, prompts: &mut P, label: &str) -> Result<Option<String>>
where
    R: BufRead,
    P: Write,
{
    write!(prompts, "{label}").with_context(|| format!("writing prompt `{label}`"))?;
    prompts
        .flush()
        .with_context(|| format!("writing prompt `{label}`"))?;

    let mut buf = String::new();
    let read = input
        .read_line(&mut buf)
        .with_context(|| format!("reading input for `{label}`"))?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(['\n', '\r']).to_owned()))
}
