//! File-system access seam.
//!
//! The resolver probes for candidate files, the pipeline reads source text,
//! and the correction pass needs the full source inventory. All three go
//! through [`SourceTree`] so the engine runs unchanged against a directory
//! on disk or an in-memory fixture.

mod disk;
mod memory;

pub use disk::DiskTree;
pub use memory::MemoryTree;

/// Read-only view of a project's files, addressed by root-relative paths.
pub trait SourceTree: Send + Sync {
    /// Whether a regular file exists at `path`.
    fn exists(&self, path: &str) -> bool;

    /// Raw bytes of the file at `path`.
    fn read(&self, path: &str) -> std::io::Result<Vec<u8>>;

    /// Every source file in the project, sorted, without a leading `./`.
    fn source_files(&self) -> Vec<String>;
}

impl<T: SourceTree + ?Sized> SourceTree for &T {
    fn exists(&self, path: &str) -> bool {
        (**self).exists(path)
    }

    fn read(&self, path: &str) -> std::io::Result<Vec<u8>> {
        (**self).read(path)
    }

    fn source_files(&self) -> Vec<String> {
        (**self).source_files()
    }
}
