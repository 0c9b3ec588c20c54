use thiserror::Error;

/// Error taxonomy for the engine.
///
/// Only `Config` and `Parse` are fatal before the pipeline starts running.
/// `Cache` is recorded and logged but never bubbled up out of a running
/// pipeline (the enrich stage in `pipeline::run` treats a cache failure the
/// same as a cache miss). Collectors fail soft internally instead: each one
/// swallows its own upstream error and returns the variant unchanged, so
/// there is no collector-level error variant here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown {kind}: {code}")]
    Config { kind: &'static str, code: String },

    #[error("invalid target domain: {0}")]
    Parse(String),

    #[error("cache error: {0}")]
    Cache(String),

    #[error("output error: {0}")]
    Output(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Maps a fatal error to a process exit code: configuration errors and
    /// unreadable output exit non-zero, everything else the pipeline
    /// absorbs internally.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config { .. } | Error::Parse(_) => 2,
            Error::Output(_) => 3,
            Error::Cache(_) => 0,
        }
    }
}
