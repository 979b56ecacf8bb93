//! Turn records for replay verification.
//!
//! A record stores the exact snapshot a kingdom decided on, the
//! configuration used, and the orders that came out. Re-running the engine
//! on the stored inputs must reproduce the orders bit for bit.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::assignment::Assignment;
use crate::config::DecisionConfig;
use crate::error::{Result, WarlordError};
use crate::ids::KingdomId;
use crate::planner::orders_hash;
use crate::scheduler::DecisionEngine;
use crate::world::WorldSnapshot;

/// Turn record format version for compatibility.
pub const RECORD_VERSION: u32 = 1;

/// One kingdom's recorded turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Record format version.
    pub version: u32,
    /// Kingdom whose turn was recorded.
    pub kingdom: KingdomId,
    /// Configuration the engine ran with.
    pub config: DecisionConfig,
    /// Encoded input snapshot.
    pub snapshot: Vec<u8>,
    /// Orders the engine produced.
    pub orders: Vec<Assignment>,
    /// Hash of `orders`.
    pub orders_hash: u64,
}

impl TurnRecord {
    /// Run the engine on `world` and record the result.
    pub fn capture(world: &WorldSnapshot, kingdom: &KingdomId, engine: &DecisionEngine) -> Result<Self> {
        let orders = engine.decide(world, kingdom);
        Ok(Self {
            version: RECORD_VERSION,
            kingdom: kingdom.clone(),
            config: engine.config().clone(),
            snapshot: world.to_bytes()?,
            orders_hash: orders_hash(&orders),
            orders,
        })
    }

    /// Decode the recorded snapshot.
    pub fn snapshot(&self) -> Result<WorldSnapshot> {
        WorldSnapshot::from_bytes(&self.snapshot)
    }

    /// Re-run the engine on the recorded inputs and compare.
    ///
    /// # Errors
    /// Returns [`WarlordError::RecordDiverged`] if the replayed orders differ.
    pub fn verify(&self) -> Result<()> {
        let world = self.snapshot()?;
        let engine = DecisionEngine::new(self.config.clone());
        let replayed = engine.decide(&world, &self.kingdom);
        let replayed_hash = orders_hash(&replayed);

        if replayed != self.orders || replayed_hash != self.orders_hash {
            return Err(WarlordError::RecordDiverged {
                kingdom: self.kingdom.clone(),
                recorded: self.orders_hash,
                replayed: replayed_hash,
            });
        }
        tracing::debug!(kingdom = %self.kingdom, orders = replayed.len(), "turn record verified");
        Ok(())
    }

    /// Save the record to a file.
    ///
    /// # Errors
    /// Returns an error if serialization or file writing fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = bincode::serialize(self)
            .map_err(|e| WarlordError::Encoding(format!("Failed to serialize turn record: {e}")))?;
        std::fs::write(path, bytes).map_err(|source| WarlordError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load a record from a file.
    ///
    /// # Errors
    /// Returns an error if reading or decoding fails, or the version differs.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| WarlordError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let record: Self = bincode::deserialize(&bytes).map_err(|e| {
            WarlordError::Encoding(format!("Failed to deserialize turn record: {e}"))
        })?;

        if record.version != RECORD_VERSION {
            return Err(WarlordError::RecordVersion {
                expected: RECORD_VERSION,
                found: record.version,
            });
        }

        Ok(record)
    }
}
