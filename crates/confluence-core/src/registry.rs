//! Engine loading and the memoized engine-instance cache.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::engine::{Engine, EngineError};
use crate::engine_id::EngineId;

/// Resolves an engine identifier to a callable engine instance.
pub trait EngineLoader: Send + Sync {
    /// Construct the engine for `id`.
    fn load(&self, id: EngineId) -> Result<Arc<dyn Engine>, EngineError>;

    /// List every engine this loader can construct.
    fn available(&self) -> Vec<EngineId>;
}

type Constructor = Arc<dyn Fn() -> Arc<dyn Engine> + Send + Sync>;

/// Loader backed by constructors registered up front.
#[derive(Default)]
pub struct StaticLoader {
    constructors: HashMap<EngineId, Constructor>,
}

impl StaticLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor for `id`, replacing any previous one.
    #[must_use]
    pub fn with<F>(mut self, id: EngineId, constructor: F) -> Self
    where
        F: Fn() -> Arc<dyn Engine> + Send + Sync + 'static,
    {
        self.constructors.insert(id, Arc::new(constructor));
        self
    }

    /// Register an already-built engine instance under its own identifier.
    #[must_use]
    pub fn with_instance(self, engine: Arc<dyn Engine>) -> Self {
        let id = engine.id();
        self.with(id, move || Arc::clone(&engine))
    }
}

impl EngineLoader for StaticLoader {
    fn load(&self, id: EngineId) -> Result<Arc<dyn Engine>, EngineError> {
        self.constructors
            .get(&id)
            .map(|ctor| ctor())
            .ok_or(EngineError::Unavailable(id))
    }

    fn available(&self) -> Vec<EngineId> {
        let mut ids: Vec<EngineId> = self.constructors.keys().copied().collect();
        ids.sort();
        ids
    }
}

/// Lazily populated engine-instance cache.
///
/// Instances live until `clear` is called; there is no eviction. Two
/// threads racing on the same identifier may both construct the engine,
/// in which case the first insert wins and the other instance is dropped.
pub struct EngineCache {
    loader: Arc<dyn EngineLoader>,
    cache: RwLock<HashMap<EngineId, Arc<dyn Engine>>>,
}

impl EngineCache {
    #[must_use]
    pub fn new(loader: Arc<dyn EngineLoader>) -> Self {
        Self {
            loader,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Get the cached engine for `id`, loading it on first use.
    pub fn get(&self, id: EngineId) -> Result<Arc<dyn Engine>, EngineError> {
        if let Some(engine) = self.cache.read().get(&id) {
            return Ok(Arc::clone(engine));
        }

        let engine = self.loader.load(id)?;
        debug!(engine = %id, "engine instantiated");
        let mut cache = self.cache.write();
        let cached = cache.entry(id).or_insert(engine);
        Ok(Arc::clone(cached))
    }

    /// Engines the underlying loader can provide.
    #[must_use]
    pub fn available(&self) -> Vec<EngineId> {
        self.loader.available()
    }

    /// Drop every cached instance.
    pub fn clear(&self) {
        self.cache.write().clear();
    }

    /// Number of instantiated engines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::{json, Value};

    use super::*;
    use crate::progress::CancellationToken;
    use crate::result::CalculationResult;

    struct Fixed(EngineId);

    impl Engine for Fixed {
        fn calculate(
            &self,
            _input: &Value,
            _options: Option<&Value>,
            _cancel: &CancellationToken,
        ) -> Result<CalculationResult, EngineError> {
            Ok(CalculationResult::success(json!({}), std::time::Duration::ZERO))
        }

        fn id(&self) -> EngineId {
            self.0
        }
    }

    fn counting_loader(counter: Arc<AtomicUsize>) -> StaticLoader {
        StaticLoader::new().with(EngineId::Numerology, move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Arc::new(Fixed(EngineId::Numerology))
        })
    }

    #[test]
    fn cache_memoizes_instances() {
        let built = Arc::new(AtomicUsize::new(0));
        let cache = EngineCache::new(Arc::new(counting_loader(Arc::clone(&built))));
        let a = cache.get(EngineId::Numerology).unwrap();
        let b = cache.get(EngineId::Numerology).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(built.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn clear_forces_reload() {
        let built = Arc::new(AtomicUsize::new(0));
        let cache = EngineCache::new(Arc::new(counting_loader(Arc::clone(&built))));
        cache.get(EngineId::Numerology).unwrap();
        cache.clear();
        assert!(cache.is_empty());
        cache.get(EngineId::Numerology).unwrap();
        assert_eq!(built.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn unavailable_engine() {
        let cache = EngineCache::new(Arc::new(StaticLoader::new()));
        assert!(matches!(
            cache.get(EngineId::Tarot),
            Err(EngineError::Unavailable(EngineId::Tarot))
        ));
        assert!(cache.is_empty());
    }

    #[test]
    fn static_loader_lists_sorted() {
        let loader = StaticLoader::new()
            .with_instance(Arc::new(Fixed(EngineId::Tarot)))
            .with_instance(Arc::new(Fixed(EngineId::Numerology)));
        assert_eq!(loader.available(), vec![EngineId::Numerology, EngineId::Tarot]);
    }
}
