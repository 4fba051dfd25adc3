use std::io;
use std::path::PathBuf;

/// Errors raised while writing a generated `.editorconfig`.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// The output stream rejected the write
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("directory {} does not exist", dir.display())]
    MissingDirectory { dir: PathBuf },

    #[error("{} already exists (use --force to overwrite)", path.display())]
    AlreadyExists { path: PathBuf },
}
