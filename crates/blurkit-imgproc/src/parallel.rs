use std::ops::Range;

use rayon::prelude::*;
use thiserror::Error;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),
}

/// Controls how row-wise operations are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Use the global Rayon thread pool to process rows in parallel.
    #[default]
    ParallelRows,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    /// Use this primarily for benchmarking or specific isolation needs.
    Fixed(usize),
}

impl ExecutionStrategy {
    /// Pick a strategy from an optional thread count.
    ///
    /// `None` uses the global pool, `Some(1)` runs serially and any other
    /// count builds a local pool of that size.
    pub fn from_threads(threads: Option<usize>) -> Self {
        match threads {
            None => ExecutionStrategy::ParallelRows,
            Some(1) => ExecutionStrategy::Serial,
            Some(n) => ExecutionStrategy::Fixed(n),
        }
    }
}

/// Apply a function to a subset of the rows of an interleaved buffer.
///
/// `dst` is split in rows of `row_stride` elements; `f` receives the row index
/// and exclusive access to that row, for every row index in `rows`. Each row
/// is handed to exactly one worker so no synchronization is needed.
///
/// # Arguments
///
/// * `strategy` - The execution strategy.
/// * `dst` - The destination buffer, a whole number of rows long.
/// * `row_stride` - Number of elements per row. Nothing runs when zero.
/// * `rows` - The row indices to visit.
/// * `f` - The operation to run on each visited row.
pub fn for_each_row_with<T, F>(
    strategy: ExecutionStrategy,
    dst: &mut [T],
    row_stride: usize,
    rows: Range<usize>,
    f: F,
) -> Result<(), ParallelError>
where
    T: Send,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    if let ExecutionStrategy::Fixed(0) = strategy {
        return Err(ParallelError::InvalidThreadCount(0));
    }

    if row_stride == 0 || rows.is_empty() {
        return Ok(());
    }

    let end = (rows.end * row_stride).min(dst.len());
    let start = (rows.start * row_stride).min(end);
    let dst = &mut dst[start..end];
    let first_row = rows.start;

    match strategy {
        ExecutionStrategy::Serial => {
            dst.chunks_exact_mut(row_stride)
                .enumerate()
                .for_each(|(i, row)| f(first_row + i, row));
        }
        ExecutionStrategy::ParallelRows => {
            dst.par_chunks_exact_mut(row_stride)
                .enumerate()
                .for_each(|(i, row)| f(first_row + i, row));
        }
        ExecutionStrategy::Fixed(n) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ParallelError::BuildError(e.to_string()))?;

            pool.install(|| {
                dst.par_chunks_exact_mut(row_stride)
                    .enumerate()
                    .for_each(|(i, row)| f(first_row + i, row));
            });
        }
    }

    Ok(())
}
