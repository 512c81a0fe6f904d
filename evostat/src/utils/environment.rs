use crate::utils::{DefaultRandom, GenericResult, Random, ThreadPool};
use std::sync::Arc;

/// A logger type which is called with various information.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences run behavior.
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random>,

    /// A thread pool used to evaluate candidates.
    pub pool: ThreadPool,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(random: Arc<dyn Random>, parallelism: usize, logger: InfoLogger) -> GenericResult<Self> {
        let pool = ThreadPool::new(parallelism.max(1))?;

        Ok(Self { random, pool, logger })
    }

    /// Creates an instance of `Environment` with repeatable random generator.
    pub fn new_repeatable(seed: u64, logger: InfoLogger) -> GenericResult<Self> {
        Self::new(Arc::new(DefaultRandom::new_repeatable(seed)), get_cpus(), logger)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            random: Arc::new(DefaultRandom::default()),
            pool: ThreadPool::new(get_cpus()).expect("cannot build a thread pool"),
            logger: Arc::new(|msg: &str| println!("{msg}")),
        }
    }
}

/// Returns amount of CPUs.
#[cfg(not(target_arch = "wasm32"))]
pub fn get_cpus() -> usize {
    num_cpus::get()
}

/// Returns amount of CPUs.
#[cfg(target_arch = "wasm32")]
pub fn get_cpus() -> usize {
    1
}
