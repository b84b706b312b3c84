//! Worker pool for fork-join subdivision.
//!
//! A [`WorkerPool`] wraps a rayon thread pool. Subdivision runs inside
//! [`WorkerPool::install`], so every `rayon::join` it performs forks onto
//! that pool's workers.
//!
//! Two lifecycles are supported:
//! - process-wide: [`global_pool`] builds a default pool on first use and
//!   [`init_global_pool`] is the explicit initialization point. The pool lives
//!   until the process exits.
//! - owned: [`WorkerPool::new`] builds a pool the caller holds; dropping it
//!   shuts its workers down once pending work completes.

use std::sync::OnceLock;

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::interpolation::errors::PoolError;

pub const DEFAULT_THREAD_NAME: &str = "splitlerp-worker";

static GLOBAL_POOL: OnceLock<WorkerPool> = OnceLock::new();


/// Worker pool configuration
///
/// # Fields
/// - `num_threads` : worker count; hardware parallelism when unset
/// - `thread_name` : worker thread name prefix, suffixed with the worker index
///
/// # Construction
/// - Use [`PoolCfg::new`] then optional setters.
#[derive(Debug, Clone)]
pub struct PoolCfg {
    num_threads: Option<usize>,
    thread_name: String,
}

impl PoolCfg {
    pub fn new() -> Self {
        Self {
            num_threads: None,
            thread_name: DEFAULT_THREAD_NAME.to_string(),
        }
    }

    pub fn set_num_threads(mut self, v: usize) -> Result<Self, PoolError> {
        if v == 0 {
            return Err(PoolError::InvalidNumThreads { got: v });
        }
        self.num_threads = Some(v);
        Ok(self)
    }

    pub fn set_thread_name(mut self, v: impl Into<String>) -> Self {
        self.thread_name = v.into();
        self
    }

    // getters
    pub fn num_threads(&self) -> Option<usize> { self.num_threads }
    pub fn thread_name(&self) -> &str { &self.thread_name }
}

impl Default for PoolCfg {
    fn default() -> Self {
        Self::new()
    }
}


/// Fixed-size pool of work-stealing workers.
#[derive(Debug)]
pub struct WorkerPool {
    inner: ThreadPool,
}

impl WorkerPool {
    pub fn new(cfg: PoolCfg) -> Result<Self, PoolError> {
        let prefix  = cfg.thread_name.clone();
        let mut builder = ThreadPoolBuilder::new()
            .thread_name(move |idx| format!("{prefix}-{idx}"));
        if let Some(n) = cfg.num_threads {
            builder = builder.num_threads(n);
        }

        let inner = builder.build()?;
        tracing::info!(
            num_threads = inner.current_num_threads(),
            thread_name = %cfg.thread_name,
            "worker pool started"
        );

        Ok(Self { inner })
    }

    pub fn num_threads(&self) -> usize {
        self.inner.current_num_threads()
    }

    /// Runs `op` on one of this pool's workers and blocks until it returns.
    /// Any `rayon::join` inside `op` forks onto this pool.
    pub fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.inner.install(op)
    }
}


/// Process-wide pool, built with [`PoolCfg::new`] on first use.
pub fn global_pool() -> Result<&'static WorkerPool, PoolError> {
    if let Some(pool) = GLOBAL_POOL.get() {
        return Ok(pool);
    }
    // a pool built by a losing racer is dropped here
    let pool = WorkerPool::new(PoolCfg::new())?;
    Ok(GLOBAL_POOL.get_or_init(|| pool))
}

/// Builds the process-wide pool from `cfg`.
///
/// # Errors
/// - [`PoolError::AlreadyInitialized`] if the process-wide pool already exists,
///   whether from an earlier call or from lazy use via [`global_pool`].
/// - [`PoolError::Build`] if the workers cannot be spawned.
pub fn init_global_pool(cfg: PoolCfg) -> Result<&'static WorkerPool, PoolError> {
    if GLOBAL_POOL.get().is_some() {
        return Err(PoolError::AlreadyInitialized);
    }
    let pool = WorkerPool::new(cfg)?;
    GLOBAL_POOL.set(pool).map_err(|_| PoolError::AlreadyInitialized)?;
    global_pool()
}
