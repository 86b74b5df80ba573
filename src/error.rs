use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to load a worksheet as a table
#[derive(Debug, Error)]
pub enum SheetError {
    #[cfg(feature = "calamine")]
    #[error("{0}")]
    Workbook(#[from] calamine::Error),

    #[error("workbook contains no worksheets")]
    NoWorksheet,
}

/// Fatal startup failures of the file server
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("cannot enter serving directory '{}': {source}", .path.display())]
    RootDirectory { path: PathBuf, source: io::Error },

    #[error("{0}")]
    Address(String),

    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: io::Error },
}
