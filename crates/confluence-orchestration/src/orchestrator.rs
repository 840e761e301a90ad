//! Core orchestration: engine resolution, parallel and sequential execution,
//! and comprehensive readings.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use serde_json::{json, Map, Value};
use tracing::{debug, info, warn};

use confluence_core::{
    BirthData, CalculationResult, CancellationToken, EngineCache, EngineConfig, EngineError,
    EngineId, EngineLoader, ResultMap, ShapeContext, ShaperRegistry, DEFAULT_READING_ENGINES,
    PREVIOUS_RESULTS_KEY,
};

use crate::config::OrchestratorConfig;
use crate::dispatch::{Dispatcher, Job, Tally};
use crate::interfaces::{NullProgressReporter, ProgressReporter};
use crate::reading::ComprehensiveReading;

/// Runs engines and isolates their failures.
///
/// The orchestrator owns the engine-instance cache and the shaper table;
/// independent orchestrators share nothing.
pub struct Orchestrator {
    cache: EngineCache,
    shapers: ShaperRegistry,
    dispatcher: Dispatcher,
    config: OrchestratorConfig,
    reporter: Arc<dyn ProgressReporter>,
}

impl Orchestrator {
    /// Create an orchestrator over `loader` with the default shapers.
    #[must_use]
    pub fn new(loader: Arc<dyn EngineLoader>, config: OrchestratorConfig) -> Self {
        let config = config.normalize();
        let dispatcher = Dispatcher::new(config.max_workers, config.engine_timeout);
        Self {
            cache: EngineCache::new(loader),
            shapers: ShaperRegistry::with_defaults(),
            dispatcher,
            config,
            reporter: Arc::new(NullProgressReporter),
        }
    }

    /// Replace the shaper table.
    #[must_use]
    pub fn with_shapers(mut self, shapers: ShaperRegistry) -> Self {
        self.shapers = shapers;
        self
    }

    /// Attach a progress reporter.
    #[must_use]
    pub fn with_reporter(mut self, reporter: Arc<dyn ProgressReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    #[must_use]
    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Resolve and invoke one engine on the calling thread.
    ///
    /// The engine's result is returned verbatim and errors are propagated;
    /// the caller decides how to isolate them.
    pub fn run_single_engine(
        &self,
        engine: EngineId,
        input: &Value,
        config: Option<&Value>,
    ) -> Result<CalculationResult, EngineError> {
        let instance = self.cache.get(engine)?;
        instance.calculate(input, config, &CancellationToken::new())
    }

    /// Run every configured engine concurrently.
    ///
    /// The returned map has one entry per config; a failing, panicking or
    /// timed-out engine is recorded as a failed result and never affects
    /// its siblings.
    pub fn run_parallel_engines(&self, configs: &[EngineConfig]) -> ResultMap {
        let start = Instant::now();
        let jobs = configs
            .iter()
            .map(|cfg| self.job(cfg.name(), cfg.input().clone(), cfg.config().cloned()))
            .collect();
        let results = self.dispatcher.run(
            jobs,
            start + self.config.overall_deadline,
            self.reporter.as_ref(),
            Tally::whole(configs.len()),
        );
        self.reporter.complete();

        let mut map = ResultMap::new();
        for (cfg, result) in configs.iter().zip(results) {
            if map.insert(cfg.name(), result).is_some() {
                warn!(engine = %cfg.name(), "engine configured twice, keeping the last result");
            }
        }
        log_batch("parallel", &map, start.elapsed());
        map
    }

    /// Run engines one at a time, in order.
    ///
    /// Each engine's input receives a `previousResults` object holding the
    /// results of every strictly earlier engine. Failures are recorded and
    /// the sequence continues.
    pub fn run_sequential_engines(&self, configs: &[EngineConfig]) -> ResultMap {
        let start = Instant::now();
        let deadline = start + self.config.overall_deadline;
        let mut map = ResultMap::new();

        for (settled, cfg) in configs.iter().enumerate() {
            let input = with_previous_results(cfg.input(), &map);
            let job = self.job(cfg.name(), input, cfg.config().cloned());
            let tally = Tally {
                settled,
                total: configs.len(),
            };
            let result = self
                .dispatcher
                .run(vec![job], deadline, self.reporter.as_ref(), tally)
                .into_iter()
                .next()
                .unwrap_or_else(|| {
                    let err = EngineError::Calculation("no result produced".into());
                    CalculationResult::engine_error(&err, cfg.input(), Duration::ZERO)
                });
            if !result.is_success() {
                debug!(engine = %cfg.name(), code = ?result.error_code(), "sequential step failed, continuing");
            }
            map.insert(cfg.name(), result);
        }
        self.reporter.complete();
        log_batch("sequential", &map, start.elapsed());
        map
    }

    /// Shape one `EngineConfig` per engine from the birth data.
    ///
    /// Engines whose family has no registered shaper are skipped.
    pub fn build_engine_configs(
        &self,
        birth: &BirthData,
        engines: &[EngineId],
        ctx: &ShapeContext,
    ) -> Vec<EngineConfig> {
        engines
            .iter()
            .filter_map(|&engine| match self.shapers.shape(engine, birth, ctx) {
                Some(input) => Some(EngineConfig::new(engine, input)),
                None => {
                    debug!(engine = %engine, "no input shaper for engine family, skipping");
                    None
                }
            })
            .collect()
    }

    /// Run a comprehensive reading in parallel mode.
    ///
    /// Uses the default nine-engine set when `engines` is `None`.
    pub fn create_comprehensive_reading(
        &self,
        birth: &BirthData,
        engines: Option<&[EngineId]>,
    ) -> ComprehensiveReading {
        let start = Instant::now();
        let engines = engines.unwrap_or(&DEFAULT_READING_ENGINES);
        let configs = self.build_engine_configs(birth, engines, &ShapeContext::default());
        let results = self.run_parallel_engines(&configs);

        ComprehensiveReading {
            timestamp: Utc::now(),
            birth_data: birth.clone(),
            engines_used: configs.iter().map(EngineConfig::name).collect(),
            results,
            processing_time: start.elapsed().as_secs_f64() * 1000.0,
        }
    }

    /// Engines the loader can provide.
    #[must_use]
    pub fn available_engines(&self) -> Vec<EngineId> {
        self.cache.available()
    }

    /// Drop every memoized engine instance.
    pub fn clear_cache(&self) {
        self.cache.clear();
        debug!("engine cache cleared");
    }

    /// Number of memoized engine instances.
    #[must_use]
    pub fn cached_engines(&self) -> usize {
        self.cache.len()
    }

    fn job(&self, engine_id: EngineId, input: Value, options: Option<Value>) -> Job {
        Job {
            engine_id,
            engine: self.cache.get(engine_id),
            input,
            options,
        }
    }
}

/// Copy `input` with the accumulated results injected under `previousResults`.
fn with_previous_results(input: &Value, previous: &ResultMap) -> Value {
    let previous = serde_json::to_value(previous).unwrap_or_else(|e| {
        warn!(error = %e, "could not serialize previous results");
        Value::Object(Map::new())
    });
    match input {
        Value::Object(map) => {
            let mut map = map.clone();
            map.insert(PREVIOUS_RESULTS_KEY.to_string(), previous);
            Value::Object(map)
        }
        other => json!({ "input": other, PREVIOUS_RESULTS_KEY: previous }),
    }
}

fn log_batch(mode: &str, results: &ResultMap, elapsed: Duration) {
    let succeeded = results.values().filter(|r| r.is_success()).count();
    info!(
        mode,
        engines = results.len(),
        succeeded,
        elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        "engine batch finished"
    );
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use parking_lot::Mutex;

    use confluence_core::{CalculationError, Engine, StaticLoader, ENGINE_ERROR_CODE, ENGINE_TIMEOUT_CODE};

    use crate::interfaces::{EngineProgress, EngineStatus};

    use super::*;

    /// Engine that records its inputs and answers with a fixed output.
    struct Scripted {
        id: EngineId,
        output: Result<Value, EngineError>,
        delay: Duration,
        seen: Mutex<Vec<Value>>,
    }

    impl Scripted {
        fn ok(id: EngineId, output: Value) -> Arc<Self> {
            Arc::new(Self {
                id,
                output: Ok(output),
                delay: Duration::ZERO,
                seen: Mutex::new(Vec::new()),
            })
        }

        fn failing(id: EngineId, msg: &str) -> Arc<Self> {
            Arc::new(Self {
                id,
                output: Err(EngineError::Calculation(msg.into())),
                delay: Duration::ZERO,
                seen: Mutex::new(Vec::new()),
            })
        }

        fn slow(id: EngineId, delay: Duration) -> Arc<Self> {
            Arc::new(Self {
                id,
                output: Ok(json!({"slow": true})),
                delay,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    impl Engine for Scripted {
        fn calculate(
            &self,
            input: &Value,
            _options: Option<&Value>,
            cancel: &CancellationToken,
        ) -> Result<CalculationResult, EngineError> {
            self.seen.lock().push(input.clone());
            let until = Instant::now() + self.delay;
            while Instant::now() < until {
                cancel.check_cancelled()?;
                std::thread::sleep(Duration::from_millis(5));
            }
            self.output
                .clone()
                .map(|data| CalculationResult::success(data, Duration::ZERO))
        }

        fn id(&self) -> EngineId {
            self.id
        }
    }

    struct Panicking;

    impl Engine for Panicking {
        fn calculate(
            &self,
            _input: &Value,
            _options: Option<&Value>,
            _cancel: &CancellationToken,
        ) -> Result<CalculationResult, EngineError> {
            panic!("chart exploded");
        }

        fn id(&self) -> EngineId {
            EngineId::SigilForge
        }
    }

    /// Engine that blocks for `hold` without ever checking its token.
    struct Stubborn {
        id: EngineId,
        hold: Duration,
    }

    impl Engine for Stubborn {
        fn calculate(
            &self,
            _input: &Value,
            _options: Option<&Value>,
            _cancel: &CancellationToken,
        ) -> Result<CalculationResult, EngineError> {
            std::thread::sleep(self.hold);
            Ok(CalculationResult::success(json!({}), Duration::ZERO))
        }

        fn id(&self) -> EngineId {
            self.id
        }
    }

    #[derive(Default)]
    struct Recording {
        events: Mutex<Vec<EngineProgress>>,
        completions: AtomicUsize,
    }

    impl ProgressReporter for Recording {
        fn report(&self, update: &EngineProgress) {
            self.events.lock().push(update.clone());
        }

        fn complete(&self) {
            self.completions.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn single_worker(loader: StaticLoader) -> Orchestrator {
        let config = OrchestratorConfig {
            max_workers: 1,
            engine_timeout: Duration::from_millis(100),
            overall_deadline: Duration::from_millis(800),
        };
        Orchestrator::new(Arc::new(loader), config)
    }

    fn orchestrator(loader: StaticLoader) -> Orchestrator {
        Orchestrator::new(Arc::new(loader), OrchestratorConfig::default())
    }

    fn cfg(id: EngineId) -> EngineConfig {
        EngineConfig::new(id, json!({"engine": id.as_str()}))
    }

    #[test]
    fn single_engine_returns_verbatim() {
        let engine = Scripted::ok(EngineId::Numerology, json!({"rawData": {"lifePath": 7}}));
        let orch = orchestrator(StaticLoader::new().with_instance(engine));
        let result = orch
            .run_single_engine(EngineId::Numerology, &json!({}), None)
            .unwrap();
        assert!(result.is_success());
        assert_eq!(result.data().unwrap()["rawData"]["lifePath"], 7);
    }

    #[test]
    fn single_engine_propagates_errors() {
        let orch = orchestrator(StaticLoader::new().with_instance(Scripted::failing(EngineId::Tarot, "no deck")));
        let err = orch.run_single_engine(EngineId::Tarot, &json!({}), None).unwrap_err();
        assert_eq!(err, EngineError::Calculation("no deck".into()));

        let err = orch.run_single_engine(EngineId::IChing, &json!({}), None).unwrap_err();
        assert_eq!(err, EngineError::Unavailable(EngineId::IChing));
    }

    #[test]
    fn single_engine_passes_through_engine_defined_failures() {
        struct Rejecting;
        impl Engine for Rejecting {
            fn calculate(
                &self,
                _input: &Value,
                _options: Option<&Value>,
                _cancel: &CancellationToken,
            ) -> Result<CalculationResult, EngineError> {
                Ok(CalculationResult::failure(
                    CalculationError::new("VALIDATION_ERROR", "birthDate missing"),
                    Duration::ZERO,
                ))
            }
            fn id(&self) -> EngineId {
                EngineId::Biorhythm
            }
        }
        let orch = orchestrator(StaticLoader::new().with_instance(Arc::new(Rejecting)));
        let map = orch.run_parallel_engines(&[cfg(EngineId::Biorhythm)]);
        assert_eq!(map[&EngineId::Biorhythm].error_code(), Some("VALIDATION_ERROR"));
    }

    #[test]
    fn parallel_isolates_failures() {
        let loader = StaticLoader::new()
            .with_instance(Scripted::failing(EngineId::Numerology, "bad name"))
            .with_instance(Scripted::ok(EngineId::Biorhythm, json!({"rawData": {"x": 1}})));
        let orch = orchestrator(loader);
        let map = orch.run_parallel_engines(&[cfg(EngineId::Numerology), cfg(EngineId::Biorhythm)]);

        assert_eq!(map.len(), 2);
        let failed = &map[&EngineId::Numerology];
        assert!(!failed.is_success());
        assert_eq!(failed.error_code(), Some(ENGINE_ERROR_CODE));
        let err = failed.error.as_ref().unwrap();
        assert_eq!(err.context["input"], json!({"engine": "numerology"}));
        assert_eq!(err.suggestions, vec!["Check input parameters".to_string()]);
        assert!(map[&EngineId::Biorhythm].is_success());
    }

    #[test]
    fn parallel_records_unavailable_engines() {
        let orch = orchestrator(StaticLoader::new());
        let map = orch.run_parallel_engines(&[cfg(EngineId::Tarot), cfg(EngineId::IChing)]);
        assert_eq!(map.len(), 2);
        assert!(map.values().all(|r| r.error_code() == Some(ENGINE_ERROR_CODE)));
    }

    #[test]
    fn parallel_contains_panics() {
        let loader = StaticLoader::new()
            .with_instance(Arc::new(Panicking))
            .with_instance(Scripted::ok(EngineId::Tarot, json!({})));
        let orch = orchestrator(loader);
        let map = orch.run_parallel_engines(&[cfg(EngineId::SigilForge), cfg(EngineId::Tarot)]);
        let failed = &map[&EngineId::SigilForge];
        assert_eq!(failed.error_code(), Some(ENGINE_ERROR_CODE));
        assert!(failed.error.as_ref().unwrap().message.contains("chart exploded"));
        assert!(map[&EngineId::Tarot].is_success());
    }

    #[test]
    fn parallel_times_out_slow_engines() {
        let loader = StaticLoader::new()
            .with_instance(Scripted::slow(EngineId::Vimshottari, Duration::from_secs(10)))
            .with_instance(Scripted::ok(EngineId::Numerology, json!({})));
        let config = OrchestratorConfig {
            max_workers: 2,
            engine_timeout: Duration::from_millis(100),
            overall_deadline: Duration::from_secs(5),
        };
        let orch = Orchestrator::new(Arc::new(loader), config);
        let start = Instant::now();
        let map = orch.run_parallel_engines(&[cfg(EngineId::Vimshottari), cfg(EngineId::Numerology)]);
        assert!(start.elapsed() < Duration::from_secs(5));
        assert_eq!(map[&EngineId::Vimshottari].error_code(), Some(ENGINE_TIMEOUT_CODE));
        assert!(map[&EngineId::Numerology].is_success());
    }

    #[test]
    fn overall_deadline_expires_queued_engines() {
        let loader = StaticLoader::new()
            .with_instance(Scripted::slow(EngineId::HumanDesign, Duration::from_secs(10)))
            .with_instance(Scripted::ok(EngineId::GeneKeys, json!({})));
        let config = OrchestratorConfig {
            max_workers: 1,
            engine_timeout: Duration::from_secs(30),
            overall_deadline: Duration::from_millis(150),
        };
        let orch = Orchestrator::new(Arc::new(loader), config);
        let map = orch.run_parallel_engines(&[cfg(EngineId::HumanDesign), cfg(EngineId::GeneKeys)]);
        assert_eq!(map.len(), 2);
        assert_eq!(map[&EngineId::HumanDesign].error_code(), Some(ENGINE_TIMEOUT_CODE));
    }

    #[test]
    fn timed_out_engine_frees_its_worker_for_later_steps() {
        let loader = StaticLoader::new()
            .with_instance(Arc::new(Stubborn {
                id: EngineId::Vimshottari,
                hold: Duration::from_secs(3),
            }))
            .with_instance(Scripted::ok(EngineId::Numerology, json!({})));
        let orch = single_worker(loader);

        let map = orch.run_sequential_engines(&[cfg(EngineId::Vimshottari), cfg(EngineId::Numerology)]);
        assert_eq!(map[&EngineId::Vimshottari].error_code(), Some(ENGINE_TIMEOUT_CODE));
        assert!(map[&EngineId::Numerology].is_success());

        let map = orch.run_parallel_engines(&[cfg(EngineId::Numerology)]);
        assert!(map[&EngineId::Numerology].is_success());
    }

    #[test]
    fn timed_out_engine_frees_its_worker_within_a_batch() {
        let loader = StaticLoader::new()
            .with_instance(Arc::new(Stubborn {
                id: EngineId::HumanDesign,
                hold: Duration::from_secs(3),
            }))
            .with_instance(Scripted::ok(EngineId::GeneKeys, json!({})));
        let orch = single_worker(loader);
        let start = Instant::now();
        let map = orch.run_parallel_engines(&[cfg(EngineId::HumanDesign), cfg(EngineId::GeneKeys)]);
        assert!(start.elapsed() < Duration::from_secs(3));
        assert_eq!(map[&EngineId::HumanDesign].error_code(), Some(ENGINE_TIMEOUT_CODE));
        assert!(map[&EngineId::GeneKeys].is_success());
    }

    #[test]
    fn sequential_progress_counts_the_whole_run() {
        let loader = StaticLoader::new()
            .with_instance(Scripted::ok(EngineId::Numerology, json!({})))
            .with_instance(Scripted::failing(EngineId::Tarot, "no deck"))
            .with_instance(Scripted::ok(EngineId::IChing, json!({})));
        let reporter = Arc::new(Recording::default());
        let orch = orchestrator(loader).with_reporter(Arc::clone(&reporter) as Arc<dyn ProgressReporter>);
        orch.run_sequential_engines(&[cfg(EngineId::Numerology), cfg(EngineId::Tarot), cfg(EngineId::IChing)]);

        assert_eq!(reporter.completions.load(Ordering::SeqCst), 1);
        let events = reporter.events.lock();
        assert!(events.iter().all(|e| e.total == 3));
        let settled: Vec<usize> = events
            .iter()
            .filter(|e| e.status != EngineStatus::Started)
            .map(|e| e.completed)
            .collect();
        assert_eq!(settled, vec![1, 2, 3]);
    }

    #[test]
    fn parallel_run_completes_once() {
        let loader = StaticLoader::new()
            .with_instance(Scripted::ok(EngineId::Numerology, json!({})))
            .with_instance(Scripted::ok(EngineId::Tarot, json!({})));
        let reporter = Arc::new(Recording::default());
        let orch = orchestrator(loader).with_reporter(Arc::clone(&reporter) as Arc<dyn ProgressReporter>);
        orch.run_parallel_engines(&[cfg(EngineId::Numerology), cfg(EngineId::Tarot), cfg(EngineId::IChing)]);

        assert_eq!(reporter.completions.load(Ordering::SeqCst), 1);
        let events = reporter.events.lock();
        assert!(events.iter().all(|e| e.total == 3));
        assert_eq!(events.iter().map(|e| e.completed).max(), Some(3));
    }

    #[test]
    fn sequential_injects_previous_results() {
        let a = Scripted::ok(EngineId::Numerology, json!({"rawData": {"lifePath": 3}}));
        let b = Scripted::ok(EngineId::Tarot, json!({}));
        let loader = StaticLoader::new()
            .with_instance(Arc::clone(&a) as Arc<dyn Engine>)
            .with_instance(Arc::clone(&b) as Arc<dyn Engine>);
        let orch = orchestrator(loader);
        let map = orch.run_sequential_engines(&[cfg(EngineId::Numerology), cfg(EngineId::Tarot)]);

        let seen_a = a.seen.lock();
        assert_eq!(seen_a[0][PREVIOUS_RESULTS_KEY], json!({}));

        let seen_b = b.seen.lock();
        let second_input = &seen_b[0];
        let previous = second_input[PREVIOUS_RESULTS_KEY].as_object().unwrap();
        assert_eq!(previous.len(), 1);
        assert_eq!(
            previous["numerology"],
            serde_json::to_value(&map[&EngineId::Numerology]).unwrap()
        );
        assert_eq!(second_input["engine"], "tarot");
    }

    #[test]
    fn sequential_continues_after_failure() {
        let loader = StaticLoader::new()
            .with_instance(Scripted::failing(EngineId::Numerology, "x"))
            .with_instance(Scripted::ok(EngineId::Biorhythm, json!({})));
        let orch = orchestrator(loader);
        let map = orch.run_sequential_engines(&[cfg(EngineId::Numerology), cfg(EngineId::Biorhythm)]);
        assert_eq!(map.len(), 2);
        assert!(!map[&EngineId::Numerology].is_success());
        assert!(map[&EngineId::Biorhythm].is_success());
    }

    #[test]
    fn sequential_wraps_non_object_input() {
        let value = with_previous_results(&json!(5), &ResultMap::new());
        assert_eq!(value["input"], 5);
        assert!(value[PREVIOUS_RESULTS_KEY].is_object());
    }

    #[test]
    fn comprehensive_reading_uses_default_engines() {
        let mut loader = StaticLoader::new();
        for id in DEFAULT_READING_ENGINES {
            loader = loader.with_instance(Scripted::ok(id, json!({})));
        }
        let orch = orchestrator(loader);
        let birth = BirthData::new().with("fullName", "Ada").with("birthDate", "1815-12-10");
        let reading = orch.create_comprehensive_reading(&birth, None);
        assert_eq!(reading.engines_used, DEFAULT_READING_ENGINES.to_vec());
        assert_eq!(reading.results.len(), 9);
        assert!((reading.success_ratio() - 1.0).abs() < f64::EPSILON);
        assert!(reading.processing_time >= 0.0);
    }

    #[test]
    fn comprehensive_reading_skips_unshaped_engines() {
        let loader = StaticLoader::new()
            .with_instance(Scripted::ok(EngineId::Numerology, json!({})))
            .with_instance(Scripted::ok(EngineId::Tarot, json!({})));
        let mut shapers = ShaperRegistry::empty();
        shapers.register(
            confluence_core::EngineFamily::Basic,
            Arc::new(confluence_core::shaping::BasicShaper),
        );
        let orch = orchestrator(loader).with_shapers(shapers);
        let reading = orch.create_comprehensive_reading(
            &BirthData::new(),
            Some(&[EngineId::Numerology, EngineId::Tarot]),
        );
        assert_eq!(reading.engines_used, vec![EngineId::Numerology]);
        assert_eq!(reading.results.len(), 1);
    }

    #[test]
    fn cache_is_populated_lazily_and_cleared() {
        let built = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&built);
        let loader = StaticLoader::new().with(EngineId::Numerology, move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Scripted::ok(EngineId::Numerology, json!({})) as Arc<dyn Engine>
        });
        let orch = orchestrator(loader);
        assert_eq!(orch.cached_engines(), 0);
        orch.run_parallel_engines(&[cfg(EngineId::Numerology)]);
        orch.run_parallel_engines(&[cfg(EngineId::Numerology)]);
        assert_eq!(built.load(Ordering::SeqCst), 1);
        orch.clear_cache();
        assert_eq!(orch.cached_engines(), 0);
        orch.run_parallel_engines(&[cfg(EngineId::Numerology)]);
        assert_eq!(built.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn available_engines_come_from_loader() {
        let orch = orchestrator(StaticLoader::new().with_instance(Scripted::ok(EngineId::Enneagram, json!({}))));
        assert_eq!(orch.available_engines(), vec![EngineId::Enneagram]);
    }
}
