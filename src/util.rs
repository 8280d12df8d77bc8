/// Filesystem helpers shared by the driver and the journal writer.
pub mod fs {
    use std::fs;

    use anyhow::{Context, Result, anyhow};
    use camino::{Utf8Path, Utf8PathBuf};

    /// Ensure a directory exists, creating it and any missing parents.
    pub fn ensure_dir(path: &Utf8Path) -> Result<()> {
        if !path.is_dir() {
            fs::create_dir_all(path).with_context(|| format!("creating directory {}", path))?;
        }
        Ok(())
    }

    /// Join directory segments left to right with the platform separator.
    pub fn join_segments<S: AsRef<str>>(segments: &[S]) -> Utf8PathBuf {
        segments
            .iter()
            .fold(Utf8PathBuf::new(), |path, segment| path.join(segment.as_ref()))
    }

    pub fn current_working_dir() -> Result<Utf8PathBuf> {
        let cwd = std::env::current_dir().context("determining current directory")?;
        Utf8PathBuf::from_path_buf(cwd).map_err(|_| anyhow!("current directory is not valid UTF-8"))
    }

}
