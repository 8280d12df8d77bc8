use std::io::{self, Write};

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};

use crate::cli::{Cli, Flags};
use crate::journal;
use crate::util::fs;

const NO_ARGUMENTS: &str = "No argument entered. Use -d for directories or -f for files.";
const NO_VALID_ARGUMENTS: &str = "Please enter valid -d or -f arguments.";

/// Why a command line produced no work.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Usage {
    NoArguments,
    NoValidArguments,
}

impl Usage {
    fn message(&self) -> &'static str {
        match self {
            Usage::NoArguments => NO_ARGUMENTS,
            Usage::NoValidArguments => NO_VALID_ARGUMENTS,
        }
    }
}

/// Work resolved from the flags: directory segments to create and an optional file.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Plan {
    segments: Vec<String>,
    file_name: Option<String>,
}

impl Plan {
    fn from_cli(cli: &Cli) -> Result<Self, Usage> {
        if cli.is_empty() {
            return Err(Usage::NoArguments);
        }

        let Flags { dirs, file } = cli.flags();
        let segments = dirs.unwrap_or_default();
        let file_name = file.flatten();
        if segments.is_empty() && file_name.is_none() {
            return Err(Usage::NoValidArguments);
        }

        Ok(Self {
            segments,
            file_name,
        })
    }

    /// Directory the plan operates in. Relative segments resolve against `base`.
    fn directory(&self, base: &Utf8Path) -> Utf8PathBuf {
        if self.segments.is_empty() {
            base.to_path_buf()
        } else {
            base.join(fs::join_segments(&self.segments))
        }
    }

    fn target_path(&self, base: &Utf8Path) -> Option<Utf8PathBuf> {
        self.file_name
            .as_ref()
            .map(|name| self.directory(base).join(name))
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let mut stdout = io::stdout();
    execute(
        &cli,
        &mut stdout,
        fs::current_working_dir,
        journal::append_interactive,
    )
}

/// Drive one invocation. The working directory is only resolved when a file
/// target needs it; `append` receives the target path.
fn execute<O, C, A>(cli: &Cli, out: &mut O, cwd: C, append: A) -> Result<()>
where
    O: Write,
    C: FnOnce() -> Result<Utf8PathBuf>,
    A: FnOnce(&Utf8Path) -> Result<Vec<String>>,
{
    let plan = match Plan::from_cli(cli) {
        Ok(plan) => plan,
        Err(usage) => {
            tracing::debug!(?usage, "nothing to do");
            writeln!(out, "{}", usage.message()).context("writing usage message")?;
            return Ok(());
        }
    };
    tracing::debug!(?plan, "resolved plan");

    if let Some(dir) = create_directory(&plan)? {
        writeln!(out, "Directory created: {}", dir).context("writing status")?;
    }

    if plan.file_name.is_some() {
        let base = cwd()?;
        if let Some(target) = plan.target_path(&base) {
            writeln!(out, "Creating file: {}", target).context("writing status")?;
            out.flush().context("writing status")?;
            append(&target)?;
        }
    }

    Ok(())
}

/// Create the plan's directory segments, returning the joined path when
/// any were given. Existing directories are left untouched.
fn create_directory(plan: &Plan) -> Result<Option<Utf8PathBuf>> {
    if plan.segments.is_empty() {
        return Ok(None);
    }
    let dir = fs::join_segments(&plan.segments);
    fs::ensure_dir(&dir)?;
    tracing::info!(path = %dir, "directory ready");
    Ok(Some(dir))
}
