//! Bounded fan-out of engine invocations with per-engine and batch deadlines.
//!
//! Every job runs on its own named thread, but only after taking one of
//! `max_workers` permits from a bounded channel. A permit goes back when the
//! engine returns or when the collector expires it, so an engine that ignores
//! cancellation stops counting against the bound the moment it times out.
//! Workers report `Started` and `Finished` events over a channel; the calling
//! thread collects them with `recv_deadline`. Late results from expired
//! engines are discarded.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, unbounded, Receiver, RecvTimeoutError, Sender};
use serde_json::Value;
use tracing::{debug, warn};

use confluence_core::{CalculationResult, CancellationToken, Engine, EngineError, EngineId};

use crate::interfaces::{EngineProgress, EngineStatus, ProgressReporter};

/// One resolved engine invocation.
pub(crate) struct Job {
    pub engine_id: EngineId,
    pub engine: Result<Arc<dyn Engine>, EngineError>,
    pub input: Value,
    pub options: Option<Value>,
}

/// Where a dispatch sits inside the orchestrator call that issued it.
///
/// Progress is reported as `settled + completed` out of `total`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Tally {
    pub settled: usize,
    pub total: usize,
}

impl Tally {
    pub(crate) fn whole(total: usize) -> Self {
        Self { settled: 0, total }
    }
}

enum Event {
    Started { index: usize, at: Instant },
    Finished { index: usize, result: CalculationResult },
}

const QUEUED: u8 = 0;
const RUNNING: u8 = 1;
const SETTLED: u8 = 2;

/// Permit bookkeeping for one job.
///
/// Whichever side settles a running job first (the worker on return, the
/// collector on expiry) hands the permit back; the other side is a no-op.
struct Slot {
    state: AtomicU8,
    permits: Sender<()>,
}

impl Slot {
    fn new(permits: Sender<()>) -> Self {
        Self {
            state: AtomicU8::new(QUEUED),
            permits,
        }
    }

    /// Claim the slot for a worker that holds a permit.
    fn admit(&self) -> bool {
        self.state
            .compare_exchange(QUEUED, RUNNING, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    fn settle(&self) {
        if self.state.swap(SETTLED, Ordering::AcqRel) == RUNNING {
            self.give_back();
        }
    }

    fn give_back(&self) {
        // Permits are conserved, so the channel always has room.
        let _ = self.permits.send(());
    }
}

/// A job handed to its own thread.
struct Worker {
    index: usize,
    engine_id: EngineId,
    engine: Arc<dyn Engine>,
    input: Value,
    options: Option<Value>,
    cancel: CancellationToken,
    slot: Arc<Slot>,
    permits: Receiver<()>,
    events: Sender<Event>,
}

impl Worker {
    fn spawn(self) -> std::io::Result<()> {
        thread::Builder::new()
            .name(format!("confluence-{}", self.engine_id))
            .spawn(move || self.run())
            .map(drop)
    }

    fn run(self) {
        let Self {
            index,
            engine_id,
            engine,
            input,
            options,
            cancel,
            slot,
            permits,
            events,
        } = self;

        if permits.recv().is_err() {
            return;
        }
        if !slot.admit() {
            // Expired while queued.
            slot.give_back();
            return;
        }
        if cancel.is_cancelled() {
            slot.settle();
            return;
        }
        let at = Instant::now();
        if events.send(Event::Started { index, at }).is_err() {
            slot.settle();
            return;
        }
        debug!(engine = %engine_id, "engine started");
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            engine.calculate(&input, options.as_ref(), &cancel)
        }));
        slot.settle();
        let elapsed = at.elapsed();
        let result = match outcome {
            Ok(Ok(result)) => result,
            Ok(Err(err)) => CalculationResult::engine_error(&err, &input, elapsed),
            Err(payload) => {
                let err = EngineError::Panicked(panic_message(payload.as_ref()));
                warn!(engine = %engine_id, error = %err, "engine panicked");
                CalculationResult::engine_error(&err, &input, elapsed)
            }
        };
        // The receiver is gone once the batch has settled; late results are dropped.
        let _ = events.send(Event::Finished { index, result });
    }
}

pub(crate) struct Dispatcher {
    permit_tx: Sender<()>,
    permit_rx: Receiver<()>,
    engine_timeout: Duration,
}

impl Dispatcher {
    pub(crate) fn new(max_workers: usize, engine_timeout: Duration) -> Self {
        let max_workers = max_workers.max(1);
        let (permit_tx, permit_rx) = bounded(max_workers);
        for _ in 0..max_workers {
            let _ = permit_tx.send(());
        }
        Self {
            permit_tx,
            permit_rx,
            engine_timeout,
        }
    }

    /// Permits not currently held by a running engine.
    #[cfg(test)]
    pub(crate) fn idle_permits(&self) -> usize {
        self.permit_rx.len()
    }

    /// Run every job and return one result per job, in job order.
    ///
    /// Does not call [`ProgressReporter::complete`]; the caller decides when
    /// its whole operation is over.
    pub(crate) fn run(
        &self,
        jobs: Vec<Job>,
        deadline: Instant,
        reporter: &dyn ProgressReporter,
        tally: Tally,
    ) -> Vec<CalculationResult> {
        let total = jobs.len();
        let mut results: Vec<Option<CalculationResult>> = (0..total).map(|_| None).collect();
        let mut started: Vec<Option<Instant>> = vec![None; total];
        let mut tokens = Vec::with_capacity(total);
        let mut slots = Vec::with_capacity(total);
        let mut meta: Vec<(EngineId, Value)> = Vec::with_capacity(total);
        let mut completed = 0;
        let (tx, rx) = unbounded();

        let progress = |engine: EngineId, status: EngineStatus, done: usize, elapsed: Duration| {
            reporter.report(&EngineProgress {
                engine,
                status,
                completed: tally.settled + done,
                total: tally.total,
                elapsed,
            });
        };

        for (index, job) in jobs.into_iter().enumerate() {
            let cancel = CancellationToken::new();
            let slot = Arc::new(Slot::new(self.permit_tx.clone()));
            tokens.push(cancel.clone());
            slots.push(Arc::clone(&slot));
            meta.push((job.engine_id, job.input.clone()));

            let engine = match job.engine {
                Ok(engine) => engine,
                Err(err) => {
                    debug!(engine = %job.engine_id, error = %err, "engine could not be resolved");
                    results[index] = Some(CalculationResult::engine_error(&err, &job.input, Duration::ZERO));
                    completed += 1;
                    progress(job.engine_id, EngineStatus::Failed, completed, Duration::ZERO);
                    continue;
                }
            };

            let engine_id = job.engine_id;
            let spawned = Worker {
                index,
                engine_id,
                engine,
                input: job.input,
                options: job.options,
                cancel,
                slot,
                permits: self.permit_rx.clone(),
                events: tx.clone(),
            }
            .spawn();

            if let Err(e) = spawned {
                let err = EngineError::Calculation(format!("failed to start {engine_id} worker: {e}"));
                warn!(engine = %engine_id, error = %err, "engine worker could not be spawned");
                slots[index].settle();
                results[index] = Some(CalculationResult::engine_error(&err, &meta[index].1, Duration::ZERO));
                completed += 1;
                progress(engine_id, EngineStatus::Failed, completed, Duration::ZERO);
            }
        }
        drop(tx);

        while completed < total {
            let wait_until = started
                .iter()
                .zip(&results)
                .filter_map(|(at, result)| match (at, result) {
                    (Some(at), None) => Some(*at + self.engine_timeout),
                    _ => None,
                })
                .fold(deadline, Instant::min);

            match rx.recv_deadline(wait_until) {
                Ok(Event::Started { index, at }) => {
                    if results[index].is_none() {
                        started[index] = Some(at);
                        progress(meta[index].0, EngineStatus::Started, completed, Duration::ZERO);
                    }
                }
                Ok(Event::Finished { index, result }) => {
                    if results[index].is_none() {
                        let status = if result.is_success() {
                            EngineStatus::Succeeded
                        } else {
                            EngineStatus::Failed
                        };
                        let elapsed = started[index].map_or(Duration::ZERO, |at| at.elapsed());
                        results[index] = Some(result);
                        completed += 1;
                        progress(meta[index].0, status, completed, elapsed);
                    }
                }
                Err(RecvTimeoutError::Timeout) => {
                    let now = Instant::now();
                    let batch_expired = now >= deadline;
                    for index in 0..total {
                        if results[index].is_some() {
                            continue;
                        }
                        let engine_expired = started[index]
                            .is_some_and(|at| now >= at + self.engine_timeout);
                        if !(batch_expired || engine_expired) {
                            continue;
                        }
                        tokens[index].cancel();
                        slots[index].settle();
                        let (engine_id, input) = &meta[index];
                        let elapsed = started[index].map_or(Duration::ZERO, |at| now - at);
                        warn!(
                            engine = %engine_id,
                            elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
                            batch_deadline = batch_expired,
                            "engine timed out"
                        );
                        results[index] = Some(CalculationResult::timed_out(*engine_id, input, elapsed));
                        completed += 1;
                        progress(*engine_id, EngineStatus::TimedOut, completed, elapsed);
                    }
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        results
            .into_iter()
            .zip(meta)
            .map(|(result, (engine_id, input))| {
                result.unwrap_or_else(|| {
                    let err = EngineError::Calculation(format!("{engine_id} worker exited without a result"));
                    CalculationResult::engine_error(&err, &input, Duration::ZERO)
                })
            })
            .collect()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
