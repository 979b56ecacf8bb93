//! Error types for loading, recording and verifying turns.
//!
//! The decision pass itself never fails: a kingdom with no legal moves is a
//! normal game state and yields an empty order list.

use thiserror::Error;

use crate::ids::KingdomId;

/// Result type alias using [`WarlordError`].
pub type Result<T> = std::result::Result<T, WarlordError>;

/// Top-level error type for the engine's fallible edges.
#[derive(Debug, Error)]
pub enum WarlordError {
    /// Failed to read or write a file.
    #[error("IO error on '{path}': {source}")]
    Io {
        /// Path of the file involved.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// World snapshot could not be parsed.
    #[error("Failed to parse world snapshot '{path}': {message}")]
    SnapshotParse {
        /// Path (or label) of the snapshot source.
        path: String,
        /// Error message.
        message: String,
    },

    /// Decision config could not be parsed.
    #[error("Failed to parse decision config '{path}': {message}")]
    ConfigParse {
        /// Path (or label) of the config source.
        path: String,
        /// Error message.
        message: String,
    },

    /// A referenced kingdom or general does not exist in the snapshot.
    #[error("Unknown {kind} '{id}'")]
    UnknownEntity {
        /// Entity kind, e.g. `"kingdom"`.
        kind: &'static str,
        /// The missing id.
        id: String,
    },

    /// Snapshot failed referential integrity checks.
    #[error("Snapshot failed validation with {} issue(s)", .0.len())]
    InvalidSnapshot(Vec<String>),

    /// Binary encoding or decoding failed.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Turn record was written by an incompatible version.
    #[error("Turn record version mismatch: expected {expected}, got {found}")]
    RecordVersion {
        /// Version this build understands.
        expected: u32,
        /// Version found in the record.
        found: u32,
    },

    /// Re-running a recorded turn produced different orders.
    #[error("Turn for kingdom '{kingdom}' diverged: recorded hash {recorded}, replayed hash {replayed}")]
    RecordDiverged {
        /// Kingdom whose turn was replayed.
        kingdom: KingdomId,
        /// Hash stored in the record.
        recorded: u64,
        /// Hash of the replayed orders.
        replayed: u64,
    },
}
