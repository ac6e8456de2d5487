//! Buffer snapshot for deterministic editing tests

use crate::{EditCursor, LineBuffer};
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Complete buffer state snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferSnapshot {
    pub cursor: EditCursor,
    pub lines: Vec<String>,
    pub line_count: usize,
}

impl BufferSnapshot {
    /// Capture the buffer and its caller-owned cursor
    pub fn capture(buffer: &LineBuffer, cursor: EditCursor) -> Self {
        Self {
            cursor,
            lines: buffer.lines().to_vec(),
            line_count: buffer.line_count(),
        }
    }

    /// Compute a deterministic hash of the snapshot state
    /// This is used for fast comparison in editing-trace tests
    #[cfg(test)]
    pub fn hash(&self) -> u64 {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();

        hasher.update(self.cursor.line.to_le_bytes());
        hasher.update(self.cursor.col.to_le_bytes());

        for line in &self.lines {
            hasher.update(line.as_bytes());
            hasher.update(b"\n");
        }

        hasher.update(self.line_count.to_le_bytes());

        let result = hasher.finalize();
        let bytes: [u8; 8] = result[..8].try_into().unwrap();
        u64::from_le_bytes(bytes)
    }
}
