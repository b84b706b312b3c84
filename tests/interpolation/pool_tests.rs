use splitlerp::interpolation::chain::{self, ChainCfg};
use splitlerp::interpolation::errors::{InterpolationError, PoolError};
use splitlerp::interpolation::pairwise::{self, PairwiseCfg};
use splitlerp::interpolation::pool::{global_pool, init_global_pool, PoolCfg, WorkerPool};

type LerpResult = Result<(), InterpolationError>;

#[test]
fn zero_threads_rejected() {
    let err = PoolCfg::new().set_num_threads(0).unwrap_err();
    assert!(matches!(err, PoolError::InvalidNumThreads { got: 0 }));
}

#[test]
fn owned_pool_sizing() -> LerpResult {
    let pool = WorkerPool::new(PoolCfg::new().set_num_threads(3)?)?;
    assert_eq!(pool.num_threads(), 3);
    Ok(())
}

#[test]
fn default_pool_uses_available_parallelism() -> LerpResult {
    let cfg = PoolCfg::new();
    assert_eq!(cfg.num_threads(), None);

    let pool = WorkerPool::new(cfg)?;
    assert!(pool.num_threads() >= 1);
    Ok(())
}

#[test]
fn worker_threads_are_named() -> LerpResult {
    let pool = WorkerPool::new(
        PoolCfg::new()
            .set_num_threads(1)?
            .set_thread_name("lerp-test"),
    )?;

    let name = pool.install(|| std::thread::current().name().map(str::to_owned));
    assert_eq!(name.as_deref(), Some("lerp-test-0"));
    Ok(())
}

#[test]
fn results_independent_of_pool_size() -> LerpResult {
    crate::init_tracing();
    let single = WorkerPool::new(PoolCfg::new().set_num_threads(1)?)?;
    let many   = WorkerPool::new(PoolCfg::new().set_num_threads(4)?)?;

    let pair = PairwiseCfg::new()
        .set_start(-0.37)?
        .set_end(12.91)?
        .set_steps(3 << 10)?;
    assert_eq!(
        pairwise::interpolate_in(pair, &single)?.evaluated,
        pairwise::interpolate_in(pair, &many)?.evaluated,
    );

    let values = [1.1, -2.2, 3.3, -4.4, 5.5];
    let chained = ChainCfg::new()
        .set_values(&values)?
        .set_steps(256)?;
    assert_eq!(
        chain::interpolate_in(chained, &single)?.evaluated,
        chain::interpolate_in(chained, &many)?.evaluated,
    );
    Ok(())
}

#[test]
fn dropped_pool_releases_workers() -> LerpResult {
    let cfg = PairwiseCfg::new()
        .set_start(0.0)?
        .set_end(1.0)?
        .set_steps(32)?;

    let first = {
        let pool = WorkerPool::new(PoolCfg::new().set_num_threads(2)?)?;
        pairwise::interpolate_in(cfg, &pool)?
    };
    let pool   = WorkerPool::new(PoolCfg::new().set_num_threads(2)?)?;
    let second = pairwise::interpolate_in(cfg, &pool)?;
    assert_eq!(first.evaluated, second.evaluated);
    Ok(())
}

#[test]
fn global_pool_initializes_once() -> LerpResult {
    let pool = global_pool()?;
    assert!(pool.num_threads() >= 1);

    let again = global_pool()?;
    assert!(std::ptr::eq(pool, again));

    let err = init_global_pool(PoolCfg::new()).unwrap_err();
    assert!(matches!(err, PoolError::AlreadyInitialized));
    Ok(())
}
