//! Session configuration for the RPC codec.

use std::env;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::RpcError;

const BATCH_SIZE_VAR: &str = "LOSSLESS_TREE_RPC_BATCH_SIZE";
const TRACE_VAR: &str = "LOSSLESS_TREE_RPC_TRACE";

/// Tunables shared by both ends of an RPC session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RpcConfig {
    /// Number of messages buffered before a batch is handed to the transport.
    /// A batch is also flushed at the end of every object.
    pub batch_size: usize,

    /// Label every outgoing message with the field it encodes. Receivers verify
    /// labels whenever they are present, so a sender/receiver ordering mismatch
    /// fails at the offending field instead of producing a corrupt tree.
    pub trace: bool,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            trace: false,
        }
    }
}

impl RpcConfig {
    /// Parses a JSON document; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, RpcError> {
        let config: RpcConfig = serde_json::from_str(json)?;
        Ok(config.normalized())
    }

    /// Defaults overridden by `LOSSLESS_TREE_RPC_BATCH_SIZE` and
    /// `LOSSLESS_TREE_RPC_TRACE`.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(value) = env::var(BATCH_SIZE_VAR) {
            match value.trim().parse::<usize>() {
                Ok(size) => self.batch_size = size,
                Err(e) => warn!("Ignoring {}={:?}: {}", BATCH_SIZE_VAR, value, e),
            }
        }
        if let Ok(value) = env::var(TRACE_VAR) {
            self.trace = matches!(value.trim(), "1" | "true" | "yes" | "on");
        }
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        if self.batch_size == 0 {
            warn!("RPC batch size of 0 is not usable, falling back to 1");
            self.batch_size = 1;
        }
        self
    }
}
