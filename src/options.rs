//! Runtime knobs for the parallel reducers.

/// Controls thread usage and chunk/page sizing for [`crate::reducers::ChunkReducer`]
/// and [`crate::reducers::SpectralSequenceReducer`]. Sequential reducers ignore
/// every field here.
#[derive(Debug, Clone, Copy)]
pub struct ReductionOptions {
    /// Number of threads to use. `0` lets rayon pick (`current_num_threads`).
    pub num_threads: usize,
    /// Overrides the `sqrt(N)` default chunk size used by [`crate::reducers::ChunkReducer`].
    pub chunk_size: Option<usize>,
    /// Overrides the default window step used by [`crate::reducers::SpectralSequenceReducer`].
    pub step: Option<usize>,
    /// Minimum slice length before rayon splits work further (mirrors `with_min_len`).
    pub min_par_len: usize,
}

impl Default for ReductionOptions {
    fn default() -> Self {
        Self {
            num_threads: 0,
            chunk_size: None,
            step: None,
            min_par_len: 1,
        }
    }
}

impl ReductionOptions {
    pub(crate) fn effective_chunk_size(&self, num_cols: usize) -> usize {
        self.chunk_size
            .unwrap_or_else(|| (num_cols as f64).sqrt().ceil() as usize)
            .max(1)
    }

    pub(crate) fn effective_step(&self, num_cols: usize) -> usize {
        self.step
            .unwrap_or_else(|| (num_cols as f64).sqrt().ceil() as usize)
            .max(1)
    }

    /// Runs `f` on a thread pool sized by `num_threads` when the
    /// `local_thread_pool` feature is enabled; otherwise `f` just runs on the
    /// global rayon pool (`num_threads`/`min_par_len` are then advisory only).
    pub(crate) fn with_pool<R>(&self, f: impl FnOnce() -> R + Send) -> R
    where
        R: Send,
    {
        #[cfg(feature = "local_thread_pool")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(self.num_threads)
                .build()
                .expect("failed to build thread pool")
                .install(f)
        }
        #[cfg(not(feature = "local_thread_pool"))]
        {
            f()
        }
    }
}
