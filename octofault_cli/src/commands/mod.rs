//! CLI subcommand implementations.

pub mod decode;
pub mod faults;
pub mod fetch;

use std::path::Path;

use anyhow::{Context, Result};
use octofault_lib::FaultLog;

fn open_log(path: &Path) -> Result<FaultLog> {
    let log = FaultLog::open(path)
        .with_context(|| format!("failed to open fault log {}", path.display()))?;
    log.init()?;
    Ok(log)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::path::{Path, PathBuf};

    /// A file path under the system temp dir, removed (with SQLite side files) on drop.
    pub(crate) struct TempPath(PathBuf);

    impl TempPath {
        pub(crate) fn new(name: &str) -> Self {
            let path = std::env::temp_dir().join(format!(
                "octofault-{}-{}",
                std::process::id(),
                name
            ));
            let temp = Self(path);
            temp.remove();
            temp
        }

        pub(crate) fn path(&self) -> &Path {
            &self.0
        }

        fn remove(&self) {
            for suffix in ["", "-wal", "-shm"] {
                let mut file = self.0.clone().into_os_string();
                file.push(suffix);
                let _ = std::fs::remove_file(file);
            }
        }
    }

    impl Drop for TempPath {
        fn drop(&mut self) {
            self.remove();
        }
    }
}
