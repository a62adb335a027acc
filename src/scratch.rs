use crate::foundation::error::{StillcastError, StillcastResult};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Request-scoped scratch directory.
///
/// Every conversion gets its own uniquely named directory, so concurrent
/// requests never share file paths. The directory is removed when the value
/// is dropped; [`RequestScratch::release`] removes it eagerly and logs a
/// removal failure without propagating it.
pub struct RequestScratch {
    dir: Option<TempDir>,
    path: PathBuf,
}

impl RequestScratch {
    /// Allocate a fresh scratch directory under the system temp dir.
    pub fn new() -> StillcastResult<Self> {
        let dir = tempfile::Builder::new()
            .prefix("stillcast-")
            .tempdir()
            .map_err(|e| {
                StillcastError::ingest(format!("failed to allocate scratch directory: {e}"))
            })?;
        let path = dir.path().to_path_buf();
        Ok(Self {
            dir: Some(dir),
            path,
        })
    }

    /// The scratch directory's path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the directory now.
    ///
    /// Removal failure is logged and swallowed: cleanup must never fail a
    /// request whose primary operation already succeeded.
    pub fn release(mut self) {
        self.close_inner();
    }

    fn close_inner(&mut self) {
        if let Some(dir) = self.dir.take()
            && let Err(e) = dir.close()
        {
            let err = StillcastError::cleanup(format!(
                "failed to remove scratch directory '{}': {e}",
                self.path.display()
            ));
            tracing::warn!(error = %err, "scratch cleanup failed");
        }
    }
}

impl Drop for RequestScratch {
    fn drop(&mut self) {
        self.close_inner();
    }
}

#[cfg(test)]
#[path = "../tests/unit/scratch.rs"]
mod tests;
