//! In-memory block store
//!
//! Holds every block entry behind one `parking_lot::RwLock`. A key index on
//! `(actor, target, scope)` makes insert-if-absent a single critical section.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{AccountId, BlockEntry, BlockId, BlockScope, BlockTarget};

use crate::error::RegistryResult;
use crate::ports::{BlockStore, InsertOutcome, NewBlock};

type BlockKey = (AccountId, BlockTarget, BlockScope);

#[derive(Default)]
struct StoreState {
    entries: BTreeMap<BlockId, BlockEntry>,
    by_key: HashMap<BlockKey, BlockId>,
}

/// Block store kept in process memory.
pub struct InMemoryBlockStore {
    state: RwLock<StoreState>,
    next_id: AtomicU64,
}

impl InMemoryBlockStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.state.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryBlockStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlockStore for InMemoryBlockStore {
    async fn insert_if_absent(&self, block: NewBlock) -> RegistryResult<InsertOutcome> {
        let key = (block.blocking_actor.clone(), block.target.clone(), block.scope);
        let mut state = self.state.write();

        if let Some(existing) = state.by_key.get(&key).and_then(|id| state.entries.get(id)) {
            return Ok(InsertOutcome::Existing(existing.clone()));
        }

        let id = BlockId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let entry = BlockEntry {
            id,
            blocking_actor: block.blocking_actor,
            target: block.target,
            scope: block.scope,
            created_at: block.created_at,
        };
        state.by_key.insert(key, id);
        state.entries.insert(id, entry.clone());
        Ok(InsertOutcome::Inserted(entry))
    }

    async fn remove(
        &self,
        actor: &AccountId,
        target: &BlockTarget,
        scope: BlockScope,
    ) -> RegistryResult<Option<BlockEntry>> {
        let key = (actor.clone(), target.clone(), scope);
        let mut state = self.state.write();
        let removed = state
            .by_key
            .remove(&key)
            .and_then(|id| state.entries.remove(&id));
        Ok(removed)
    }

    async fn select(
        &self,
        scope: BlockScope,
        actor: Option<&AccountId>,
    ) -> RegistryResult<Vec<BlockEntry>> {
        let state = self.state.read();
        Ok(state
            .entries
            .values()
            .filter(|entry| entry.scope == scope)
            .filter(|entry| actor.map_or(true, |a| &entry.blocking_actor == a))
            .cloned()
            .collect())
    }
}
