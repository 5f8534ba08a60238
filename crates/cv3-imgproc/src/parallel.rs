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

    /// The number of rows per task must be valid.
    #[error("rows per chunk must be > 0 for RowChunks strategy")]
    InvalidRowChunk(usize),

    /// Input and output sizes do not match.
    #[error("source and destination must hold the same number of pixels")]
    SizeMismatch,
}

/// Controls how the per pixel work of a conversion is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool with one task per image row.
    #[default]
    ParallelRows,

    /// Use the global Rayon thread pool with one task per `n` image rows.
    ///
    /// Larger chunks reduce scheduling overhead on wide, short images.
    RowChunks(usize),

    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    /// Use this primarily for benchmarking or specific isolation needs.
    Fixed(usize),
}

/// Apply a function to each pixel pair of two interleaved buffers.
///
/// # Arguments
///
/// * `strategy` - The execution strategy.
/// * `src` - The source pixels, `src_channels` values per pixel.
/// * `src_channels` - The number of channels of the source.
/// * `dst` - The destination pixels, `dst_channels` values per pixel.
/// * `dst_channels` - The number of channels of the destination.
/// * `cols` - The number of pixels per row.
/// * `f` - The operation applied to each (source, destination) pixel pair.
///
/// Precondition: `src_channels` and `dst_channels` are greater than zero.
pub fn par_iter_pixels<T1, T2>(
    strategy: ExecutionStrategy,
    src: &[T1],
    src_channels: usize,
    dst: &mut [T2],
    dst_channels: usize,
    cols: usize,
    f: impl Fn(&[T1], &mut [T2]) + Send + Sync,
) -> Result<(), ParallelError>
where
    T1: Send + Sync,
    T2: Send + Sync,
{
    match strategy {
        ExecutionStrategy::RowChunks(0) => return Err(ParallelError::InvalidRowChunk(0)),
        ExecutionStrategy::Fixed(0) => return Err(ParallelError::InvalidThreadCount(0)),
        _ => {}
    }

    if src.len() / src_channels != dst.len() / dst_channels {
        return Err(ParallelError::SizeMismatch);
    }

    // nothing to do, and zero sized chunks are not allowed below
    if src.is_empty() || cols == 0 {
        return Ok(());
    }

    let src_stride = src_channels * cols;
    let dst_stride = dst_channels * cols;

    let row_op = |(src_rows, dst_rows): (&[T1], &mut [T2])| {
        src_rows
            .chunks_exact(src_channels)
            .zip(dst_rows.chunks_exact_mut(dst_channels))
            .for_each(|(src_pixel, dst_pixel)| f(src_pixel, dst_pixel));
    };

    log::trace!("iterating {} pixels with {strategy:?}", src.len() / src_channels);

    match strategy {
        ExecutionStrategy::Serial => {
            src.chunks_exact(src_stride)
                .zip(dst.chunks_exact_mut(dst_stride))
                .for_each(row_op);
        }
        ExecutionStrategy::ParallelRows => {
            src.par_chunks_exact(src_stride)
                .zip(dst.par_chunks_exact_mut(dst_stride))
                .for_each(row_op);
        }
        ExecutionStrategy::RowChunks(rows) => {
            src.par_chunks(src_stride * rows)
                .zip(dst.par_chunks_mut(dst_stride * rows))
                .for_each(row_op);
        }
        ExecutionStrategy::Fixed(n) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ParallelError::BuildError(e.to_string()))?;

            pool.install(|| {
                src.par_chunks_exact(src_stride)
                    .zip(dst.par_chunks_exact_mut(dst_stride))
                    .for_each(row_op);
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_pairs(strategy: ExecutionStrategy) -> Result<Vec<u32>, ParallelError> {
        // 2 rows x 3 cols of 2 channel pixels
        let src = vec![1u32, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        let mut dst = vec![0u32; 6];
        par_iter_pixels(strategy, &src, 2, &mut dst, 1, 3, |s, d| d[0] = s[0] + s[1])?;
        Ok(dst)
    }

    #[test]
    fn test_execute_serial() -> Result<(), ParallelError> {
        assert_eq!(sum_pairs(ExecutionStrategy::Serial)?, vec![3, 7, 11, 15, 19, 23]);
        Ok(())
    }

    #[test]
    fn test_execute_parallel_rows() -> Result<(), ParallelError> {
        assert_eq!(
            sum_pairs(ExecutionStrategy::ParallelRows)?,
            vec![3, 7, 11, 15, 19, 23]
        );
        Ok(())
    }

    #[test]
    fn test_execute_row_chunks() -> Result<(), ParallelError> {
        // a chunk larger than the image is fine
        assert_eq!(
            sum_pairs(ExecutionStrategy::RowChunks(5))?,
            vec![3, 7, 11, 15, 19, 23]
        );
        Ok(())
    }

    #[test]
    fn test_execute_row_chunks_invalid() {
        let res = sum_pairs(ExecutionStrategy::RowChunks(0));
        assert!(matches!(res, Err(ParallelError::InvalidRowChunk(0))));
    }

    #[test]
    fn test_execute_fixed_success() -> Result<(), ParallelError> {
        assert_eq!(sum_pairs(ExecutionStrategy::Fixed(2))?, vec![3, 7, 11, 15, 19, 23]);
        Ok(())
    }

    #[test]
    fn test_execute_fixed_error() {
        let res = sum_pairs(ExecutionStrategy::Fixed(0));
        assert!(matches!(res, Err(ParallelError::InvalidThreadCount(0))));
    }

    #[test]
    fn test_execute_size_mismatch() {
        let src = vec![1u8; 6];
        let mut dst = vec![0u8; 4];
        let res = par_iter_pixels(ExecutionStrategy::Serial, &src, 3, &mut dst, 1, 2, |_, _| {});
        assert_eq!(res, Err(ParallelError::SizeMismatch));
    }

    #[test]
    fn test_execute_empty() -> Result<(), ParallelError> {
        let src: Vec<u8> = vec![];
        let mut dst: Vec<u8> = vec![];
        par_iter_pixels(ExecutionStrategy::ParallelRows, &src, 3, &mut dst, 4, 0, |_, _| {})?;

        // invalid strategies are rejected even when there is no work
        for (strategy, err) in [
            (ExecutionStrategy::RowChunks(0), ParallelError::InvalidRowChunk(0)),
            (ExecutionStrategy::Fixed(0), ParallelError::InvalidThreadCount(0)),
        ] {
            let res = par_iter_pixels(strategy, &src, 3, &mut dst, 4, 0, |_, _| {});
            assert_eq!(res, Err(err));
        }

        Ok(())
    }
}
