//! Snapshot export and import.
//!
//! A snapshot is the whole circuit aggregate (components, wires, supply
//! mode) serialized as one flat JSON document, matching what the host UI
//! offers as a download. There is no versioning and no schema beyond the
//! types themselves; import is a best-effort parse that either yields a
//! circuit or a decode error.

use crate::circuit::Circuit;
use crate::error::{CircuitLabError, Result};

/// Serialize a circuit to pretty-printed JSON.
pub fn to_json(circuit: &Circuit) -> Result<String> {
    serde_json::to_string_pretty(circuit)
        .map_err(|source| CircuitLabError::SnapshotEncode { source })
}

/// Parse a circuit from snapshot JSON.
pub fn from_json(input: &str) -> Result<Circuit> {
    serde_json::from_str(input).map_err(|source| CircuitLabError::SnapshotDecode { source })
}

/// Read a snapshot file.
#[cfg(feature = "cli")]
pub fn read_file(path: &std::path::Path) -> Result<Circuit> {
    let content =
        std::fs::read_to_string(path).map_err(|source| CircuitLabError::FileReadError {
            path: path.display().to_string(),
            source,
        })?;
    from_json(&content)
}

/// Write a snapshot file.
#[cfg(feature = "cli")]
pub fn write_file(path: &std::path::Path, circuit: &Circuit) -> Result<()> {
    let json = to_json(circuit)?;
    std::fs::write(path, json).map_err(|source| CircuitLabError::FileWriteError {
        path: path.display().to_string(),
        source,
    })
}
