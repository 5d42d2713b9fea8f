use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tower_lsp::lsp_types::Url;
use tracing::debug;

use super::snapshot::{ProjectId, ProjectSnapshot};

/// Latest committed snapshot per buffer plus the request generation counter
/// used to drop results of superseded rebuilds.
///
/// Generations stay monotonic across close and reopen of a buffer.
#[derive(Debug, Default)]
pub struct ProjectStore {
    snapshots: DashMap<ProjectId, Arc<ProjectSnapshot>>,
    generations: DashMap<ProjectId, u64>,
    /// Last generation started before the buffer was closed. Rebuilds at or
    /// below it belong to a closed session and are never committed.
    closed_at: DashMap<ProjectId, u64>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a rebuild for `uri` and return its generation.
    pub fn begin_rebuild(
        &self,
        uri: &Url,
    ) -> u64 {
        let mut generation = self.generations.entry(ProjectId::for_uri(uri)).or_insert(0);
        *generation += 1;
        *generation
    }

    pub fn latest_generation(
        &self,
        uri: &Url,
    ) -> u64 {
        self.generations.get(&ProjectId::for_uri(uri)).map(|g| *g).unwrap_or(0)
    }

    /// Whether no rebuild newer than `generation` has been started.
    pub fn is_latest(
        &self,
        uri: &Url,
        generation: u64,
    ) -> bool {
        self.latest_generation(uri) == generation
    }

    /// Publish `snapshot` unless a snapshot of the same or a newer
    /// generation is already committed, or it was started before the buffer
    /// was last closed. Returns whether it was stored.
    pub fn commit(
        &self,
        snapshot: ProjectSnapshot,
    ) -> bool {
        if let Some(closed) = self.closed_at.get(&snapshot.id)
            && snapshot.generation <= *closed
        {
            debug!("Dropping snapshot {} for {}: started before close", snapshot.generation, snapshot.uri);
            return false;
        }
        match self.snapshots.entry(snapshot.id.clone()) {
            Entry::Occupied(mut current) => {
                if current.get().generation >= snapshot.generation {
                    debug!(
                        "Dropping stale snapshot {} for {} (committed {})",
                        snapshot.generation,
                        snapshot.uri,
                        current.get().generation
                    );
                    return false;
                }
                current.insert(Arc::new(snapshot));
            },
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(snapshot));
            },
        }
        true
    }

    pub fn get(
        &self,
        uri: &Url,
    ) -> Option<Arc<ProjectSnapshot>> {
        self.snapshots.get(&ProjectId::for_uri(uri)).map(|s| Arc::clone(s.value()))
    }

    /// Forget the snapshot of a closed buffer. The generation counter is
    /// kept so rebuilds still in flight cannot land after a reopen.
    pub fn remove(
        &self,
        uri: &Url,
    ) {
        let id = ProjectId::for_uri(uri);
        self.snapshots.remove(&id);
        let latest = self.generations.get(&id).map(|g| *g).unwrap_or(0);
        self.closed_at.insert(id, latest);
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
