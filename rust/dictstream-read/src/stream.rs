//! Pagination of block production into an iteration protocol.

use log::debug;

use dictstream_column::block::Block;
use dictstream_common::{Result, verify_arg};

/// A producer of blocks for caller-specified row windows.
///
/// Implementations fix their total row count up front; `produce_block` is
/// called with non-overlapping, monotonically increasing windows whose union
/// covers `[0, total_row_count)`.
pub trait BlockSource {
    /// The total number of rows this source can produce.
    fn total_row_count(&self) -> usize;

    /// A human-readable component name for diagnostics.
    fn name(&self) -> &str;

    /// Produces one block covering exactly `[start, start + length)`.
    fn produce_block(&self, start: usize, length: usize) -> Result<Block>;
}

/// Drives a [`BlockSource`] through consecutive windows of at most
/// `max_block_size` rows, yielding one block per window until the source's
/// total row count is exhausted.
///
/// A production failure is yielded once and terminates the stream; block
/// production errors are not transient.
pub struct BlockStream<S: BlockSource> {
    source: S,
    max_block_size: usize,
    next_row: usize,
    failed: bool,
}

impl<S: BlockSource> BlockStream<S> {
    /// Creates a stream over `source` with the given maximum rows per block.
    ///
    /// Fails if `max_block_size` is zero.
    pub fn new(source: S, max_block_size: usize) -> Result<BlockStream<S>> {
        verify_arg!(max_block_size, max_block_size > 0);
        debug!(
            "block stream over {}: {} rows, max block size {}",
            source.name(),
            source.total_row_count(),
            max_block_size
        );
        Ok(BlockStream {
            source,
            max_block_size,
            next_row: 0,
            failed: false,
        })
    }

    /// Returns the underlying source.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: BlockSource> Iterator for BlockStream<S> {
    type Item = Result<Block>;

    fn next(&mut self) -> Option<Result<Block>> {
        if self.failed {
            return None;
        }
        let total = self.source.total_row_count();
        if self.next_row >= total {
            return None;
        }
        let start = self.next_row;
        let length = (total - start).min(self.max_block_size);

        let block = match self.source.produce_block(start, length) {
            Ok(block) => block,
            Err(err) => {
                self.failed = true;
                return Some(Err(err));
            }
        };
        self.next_row += length;
        Some(Ok(block))
    }
}
