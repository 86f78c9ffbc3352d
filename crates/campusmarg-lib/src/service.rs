//! Query front door: cache, planner and path log wired around one graph.

use std::sync::Arc;

use crate::cache::PathCache;
use crate::error::{Error, Result};
use crate::graph::GraphStore;
use crate::log::{NullPathLog, PathLog};
use crate::model::{Edge, Node, PathResult, RouteQuery};
use crate::routing::plan_route;

/// Owns the graph snapshot, the route cache and the path log.
///
/// Queries take `&self`; [`RouteService::reload`] takes `&mut self`, so a
/// snapshot swap is always an exclusive phase. Wrap the service in a lock to
/// share it between threads that also reload.
pub struct RouteService {
    store: GraphStore,
    cache: PathCache,
    path_log: Arc<dyn PathLog>,
}

impl RouteService {
    pub fn new(store: GraphStore) -> Self {
        Self {
            store,
            cache: PathCache::new(),
            path_log: Arc::new(NullPathLog),
        }
    }

    /// Hand every freshly computed route to `log`.
    pub fn with_path_log(mut self, log: Arc<dyn PathLog>) -> Self {
        self.path_log = log;
        self
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn cache(&self) -> &PathCache {
        &self.cache
    }

    /// Answer a route query.
    ///
    /// A cached route is returned with `cached = true`. Otherwise the route is
    /// planned, an empty path becomes [`Error::NoPathFound`], the result is
    /// cached and logged, and it is returned with `cached = false`. A failing
    /// path log is reported but does not fail the query.
    pub fn route(&self, query: &RouteQuery) -> Result<PathResult> {
        if let Some(hit) = self
            .cache
            .lookup(&query.origin_id, &query.destination_id, query.mode)
        {
            tracing::debug!(
                origin = %query.origin_id,
                destination = %query.destination_id,
                mode = %query.mode,
                "route served from cache"
            );
            return Ok(hit);
        }

        let result = plan_route(&self.store, query)?;
        if result.is_empty() {
            return Err(Error::NoPathFound {
                origin: query.origin_id.clone(),
                destination: query.destination_id.clone(),
            });
        }

        self.cache.save(&result);
        if let Err(err) = self.path_log.record(query, &result) {
            tracing::warn!(error = %err, "failed to record computed route");
        }

        tracing::info!(
            origin = %query.origin_id,
            destination = %query.destination_id,
            mode = %query.mode,
            steps = result.path.len(),
            distance = result.total_distance,
            "route computed"
        );
        Ok(result)
    }

    /// Swap in a new snapshot and forget routes computed on the old one.
    ///
    /// On [`Error::InvalidGraphState`] the previous snapshot and cache stay
    /// as they were.
    pub fn reload(&mut self, nodes: Vec<Node>, edges: Vec<Edge>) -> Result<()> {
        self.store.load(nodes, edges)?;
        self.cache.clear();
        Ok(())
    }
}
