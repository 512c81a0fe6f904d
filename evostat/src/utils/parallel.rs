#[cfg(test)]
#[path = "../../tests/unit/utils/parallel_test.rs"]
mod parallel_test;

use rayon::prelude::*;
use rayon::{ThreadPool as RayonThreadPool, ThreadPoolBuilder};

/// Represents a thread pool wrapper.
pub struct ThreadPool {
    inner: RayonThreadPool,
}

impl ThreadPool {
    /// Creates a new instance of `ThreadPool`.
    pub fn new(num_threads: usize) -> Result<Self, String> {
        ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map(|inner| Self { inner })
            .map_err(|err| format!("cannot build a thread pool: {err}"))
    }

    /// Executes given operation on thread pool.
    pub fn execute<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.inner.install(op)
    }
}

/// Applies action to every item in parallel, each call gets exclusive access to its own item.
pub fn parallel_foreach_mut<T, F>(source: &mut [T], action: F)
where
    T: Send + Sync,
    F: Fn(&mut T) + Send + Sync,
{
    source.par_iter_mut().for_each(action)
}
