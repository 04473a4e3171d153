//! Filter block builder implementation.
//!
//! Builds the per-table filter region from a stream of keys and data-block
//! boundary notifications.

use crate::block::FILTER_BASE_LG;
use crate::coding::put_fixed32;
use crate::config::Options;
use crate::error::Result;
use crate::policy::FilterPolicy;
use bytes::Bytes;

/// FilterBlockBuilder accumulates keys per data block and materializes one
/// filter per granularity span of file offsets.
///
/// The embedding table writer drives it in strict order: `add_key` for every
/// key placed into the data block being written, `start_block` with the file
/// offset of each new data block (offsets must be non-decreasing), and a
/// single `finish` when the table file closes. `finish` consumes the
/// builder, so a finished builder can neither be finished again nor fed
/// more keys.
///
/// Usage:
/// ```
/// use tablefilter::{BloomFilterPolicy, FilterBlockBuilder};
///
/// let policy = BloomFilterPolicy::default();
/// let mut builder = FilterBlockBuilder::new(&policy);
/// builder.start_block(0);
/// builder.add_key(b"key1");
/// builder.add_key(b"key2");
/// let region = builder.finish();
/// assert!(!region.is_empty());
/// ```
pub struct FilterBlockBuilder<'a> {
    policy: &'a dyn FilterPolicy,
    /// Flattened contents of all pending keys
    keys: Vec<u8>,
    /// Start offset of each pending key within `keys`
    start: Vec<usize>,
    /// Filter bytes emitted so far
    result: Vec<u8>,
    /// Start offset of each emitted filter within `result`
    filter_offsets: Vec<u32>,
    /// log2 of the byte span covered by one filter
    base_lg: u8,
}

impl<'a> FilterBlockBuilder<'a> {
    /// Create a builder with the default granularity.
    pub fn new(policy: &'a dyn FilterPolicy) -> Self {
        Self::with_base_lg(policy, FILTER_BASE_LG)
    }

    /// Create a builder with the granularity taken from `options`.
    pub fn with_options(policy: &'a dyn FilterPolicy, options: &Options) -> Result<Self> {
        options.validate()?;
        Ok(Self::with_base_lg(policy, options.granularity_shift))
    }

    fn with_base_lg(policy: &'a dyn FilterPolicy, base_lg: u8) -> Self {
        Self {
            policy,
            keys: Vec::new(),
            start: Vec::new(),
            result: Vec::new(),
            filter_offsets: Vec::new(),
            base_lg,
        }
    }

    /// Notify the builder that a new data block will start at file offset
    /// `block_offset`.
    ///
    /// Emits one filter per granularity span crossed since the previous
    /// notification, including empty spans that received no keys.
    ///
    /// # Panics
    ///
    /// Panics if `block_offset` maps to a span earlier than one already
    /// emitted. Offsets must be non-decreasing across calls; a violation is
    /// a bug in the embedding table writer.
    pub fn start_block(&mut self, block_offset: u64) {
        let filter_index = block_offset >> self.base_lg;
        assert!(
            filter_index >= self.filter_offsets.len() as u64,
            "data block offsets must be non-decreasing"
        );
        while filter_index > self.filter_offsets.len() as u64 {
            self.generate_filter();
        }
    }

    /// Record a key destined for the data block currently being written.
    ///
    /// Keys accumulate until the next `start_block` or `finish` call.
    /// Duplicate and zero-length keys are accepted as-is; deduplication, if
    /// any, is the policy's concern.
    pub fn add_key(&mut self, key: &[u8]) {
        self.start.push(self.keys.len());
        self.keys.extend_from_slice(key);
    }

    /// Number of filters emitted so far.
    pub fn num_filters(&self) -> usize {
        self.filter_offsets.len()
    }

    /// Number of keys waiting to be folded into the next filter.
    pub fn num_pending_keys(&self) -> usize {
        self.start.len()
    }

    /// Current size of the filter bytes emitted so far, excluding the
    /// directory and trailer appended by `finish`.
    pub fn current_size(&self) -> usize {
        self.result.len()
    }

    /// Finish the region and return the complete bytes.
    ///
    /// Folds any pending keys into one final filter, then appends the
    /// directory of per-filter offsets, the directory's own starting
    /// offset, and the granularity byte.
    pub fn finish(mut self) -> Bytes {
        if !self.start.is_empty() {
            self.generate_filter();
        }

        // Append the per-filter offset directory
        let array_offset = self.result.len() as u32;
        for offset in &self.filter_offsets {
            put_fixed32(&mut self.result, *offset);
        }

        put_fixed32(&mut self.result, array_offset);
        self.result.push(self.base_lg);

        log::trace!(
            "finished filter region: {} filters, {} bytes",
            self.filter_offsets.len(),
            self.result.len()
        );

        Bytes::from(self.result)
    }

    /// Fold the pending key set into one filter and clear it.
    fn generate_filter(&mut self) {
        let num_keys = self.start.len();
        let filter_offset = self.result.len() as u32;
        self.filter_offsets.push(filter_offset);

        if num_keys == 0 {
            // Empty span: directory entry only, no filter bytes
            return;
        }

        // Rebuild the key slice list from the flattened arena. Slices are
        // recomputed here rather than cached across `add_key` calls, which
        // may reallocate the arena.
        self.start.push(self.keys.len());
        let mut tmp_keys: Vec<&[u8]> = Vec::with_capacity(num_keys);
        for i in 0..num_keys {
            tmp_keys.push(&self.keys[self.start[i]..self.start[i + 1]]);
        }

        self.policy.create_filter(&tmp_keys, &mut self.result);

        log::trace!(
            "filter {}: {} keys, {} bytes",
            self.filter_offsets.len() - 1,
            num_keys,
            self.result.len() - filter_offset as usize
        );

        self.keys.clear();
        self.start.clear();
    }
}
