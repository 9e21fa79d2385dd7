use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use super::domain::{FlowState, FLOW_STORAGE_KEY};
use super::storage::StateStorage;

/// Whether a snapshot reached durable storage. The in-memory state is applied either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PersistOutcome {
    Persisted,
    Failed { reason: String },
}

impl PersistOutcome {
    pub fn is_persisted(&self) -> bool {
        matches!(self, PersistOutcome::Persisted)
    }
}

/// Result of merging a patch into the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateOutcome {
    pub persistence: PersistOutcome,
}

/// How the store was initialised from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadOutcome {
    Restored,
    Empty,
    Discarded { reason: String },
}

/// Single owner of the accumulated flow answers.
///
/// Reads and merges are synchronous and take `&mut self`, so merges are applied in the
/// order callers make them. Persistence is best-effort: failures are logged and
/// reported through the returned outcome but never undo the in-memory change.
pub struct FlowStore<S> {
    storage: Arc<S>,
    key: String,
    state: FlowState,
    load_outcome: LoadOutcome,
}

impl<S> FlowStore<S>
where
    S: StateStorage + 'static,
{
    /// Opens the store under the fixed flow key, restoring any persisted snapshot.
    pub fn open(storage: Arc<S>) -> Self {
        Self::open_with_key(storage, FLOW_STORAGE_KEY)
    }

    pub fn open_with_key(storage: Arc<S>, key: impl Into<String>) -> Self {
        let key = key.into();
        let (state, load_outcome) = restore(storage.as_ref(), &key);
        Self {
            storage,
            key,
            state,
            load_outcome,
        }
    }

    pub fn read(&self) -> FlowState {
        self.state.clone()
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Shallow-merges `patch` and persists the full snapshot.
    pub fn update(&mut self, patch: FlowState) -> UpdateOutcome {
        self.state.merge(patch);
        UpdateOutcome {
            persistence: self.persist(),
        }
    }

    /// Drops every answer and clears the persisted snapshot.
    pub fn reset(&mut self) -> PersistOutcome {
        self.state = FlowState::default();
        match self.storage.clear(&self.key) {
            Ok(()) => {
                debug!(key = %self.key, "flow state reset");
                PersistOutcome::Persisted
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to clear persisted flow state");
                PersistOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }

    fn persist(&self) -> PersistOutcome {
        let payload = match serde_json::to_string(&self.state) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to serialize flow state");
                return PersistOutcome::Failed {
                    reason: err.to_string(),
                };
            }
        };

        match self.storage.save(&self.key, &payload) {
            Ok(()) => PersistOutcome::Persisted,
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to persist flow state");
                PersistOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }
}

fn restore<S: StateStorage>(storage: &S, key: &str) -> (FlowState, LoadOutcome) {
    let payload = match storage.load(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => return (FlowState::default(), LoadOutcome::Empty),
        Err(err) => {
            warn!(key, error = %err, "persisted flow state unavailable, starting empty");
            return (
                FlowState::default(),
                LoadOutcome::Discarded {
                    reason: err.to_string(),
                },
            );
        }
    };

    match serde_json::from_str::<FlowState>(&payload) {
        Ok(state) => {
            debug!(key, "restored persisted flow state");
            (state, LoadOutcome::Restored)
        }
        Err(err) => {
            warn!(key, error = %err, "discarding unreadable flow state");
            (
                FlowState::default(),
                LoadOutcome::Discarded {
                    reason: err.to_string(),
                },
            )
        }
    }
}
