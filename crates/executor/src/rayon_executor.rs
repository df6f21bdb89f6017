use crate::Executor;
use log::debug;
use rayon::prelude::*;
use std::sync::Arc;

/// Work-stealing executor backed by a rayon thread pool.
///
/// Without an explicit thread count the global pool is used.
#[derive(Clone, Debug, Default)]
pub struct RayonExecutor {
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl RayonExecutor {
    pub fn new() -> Self {
        Self { pool: None }
    }

    /// Dedicated pool with `threads` workers. Falls back to the global pool if it cannot be built.
    pub fn with_threads(threads: usize) -> Self {
        match rayon::ThreadPoolBuilder::new()
            .num_threads(threads.max(1))
            .build()
        {
            Ok(pool) => Self {
                pool: Some(Arc::new(pool)),
            },
            Err(e) => {
                debug!("falling back to the global rayon pool: {}", e);
                Self::new()
            }
        }
    }
}

impl Executor for RayonExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        // Indexed parallel iterators collect in input order.
        match &self.pool {
            Some(pool) => pool.install(|| items.into_par_iter().map(f).collect()),
            None => items.into_par_iter().map(f).collect(),
        }
    }

    fn parallelism(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    fn name(&self) -> &'static str {
        "rayon"
    }
}
