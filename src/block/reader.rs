//! Filter block reader implementation.
//!
//! Parses a finished filter region's trailer once and answers stateless
//! membership queries against the correct per-span filter.

use crate::block::TRAILER_SIZE;
use crate::coding::decode_fixed32;
use crate::error::{Error, Result};
use crate::policy::FilterPolicy;

/// FilterBlockReader answers membership queries against a finished filter
/// region.
///
/// The reader borrows the region bytes for its lifetime and never copies
/// them; the embedding table reader owns the bytes for as long as the table
/// stays open. Queries are read-only and side-effect free, so one reader
/// can be shared across threads without synchronization.
///
/// Construction never fails. A malformed region degrades the reader to a
/// state where every query answers `true` ("maybe present"), and the caller
/// falls back to reading the data block itself. Degraded is terminal: there
/// is no transition back for the reader's lifetime.
pub struct FilterBlockReader<'a> {
    policy: &'a dyn FilterPolicy,
    /// The whole filter region
    data: &'a [u8],
    /// Byte position of the offset directory within `data`
    directory_start: usize,
    /// Number of filters addressed by the directory
    num_filters: usize,
    /// log2 of the byte span covered by one filter
    base_lg: u8,
}

/// Trailer fields parsed once at construction.
struct Trailer {
    directory_start: usize,
    num_filters: usize,
    base_lg: u8,
}

fn parse_trailer(contents: &[u8]) -> Result<Trailer> {
    let n = contents.len();
    if n < TRAILER_SIZE {
        return Err(Error::corruption("filter region shorter than its trailer"));
    }

    let base_lg = contents[n - 1];
    let directory_start = decode_fixed32(&contents[n - TRAILER_SIZE..]) as usize;
    if directory_start > n - TRAILER_SIZE {
        return Err(Error::corruption("filter directory starts past the trailer"));
    }

    Ok(Trailer {
        directory_start,
        num_filters: (n - TRAILER_SIZE - directory_start) / 4,
        base_lg,
    })
}

impl<'a> FilterBlockReader<'a> {
    /// Create a reader over a finished filter region.
    ///
    /// Never returns an error: a region too short to hold its trailer, or
    /// one whose directory offset points past the trailer, yields a reader
    /// that reports every key as possibly present.
    pub fn new(policy: &'a dyn FilterPolicy, contents: &'a [u8]) -> Self {
        match parse_trailer(contents) {
            Ok(trailer) => Self {
                policy,
                data: contents,
                directory_start: trailer.directory_start,
                num_filters: trailer.num_filters,
                base_lg: trailer.base_lg,
            },
            Err(e) => {
                log::warn!("rejected filter region of {} bytes: {}", contents.len(), e);
                Self {
                    policy,
                    data: contents,
                    directory_start: 0,
                    num_filters: 0,
                    base_lg: 0,
                }
            }
        }
    }

    /// Number of filters addressable through the directory.
    ///
    /// Zero for both an empty region and a rejected one.
    pub fn num_filters(&self) -> usize {
        self.num_filters
    }

    /// Granularity shift recorded in the region's trailer.
    pub fn granularity_shift(&self) -> u8 {
        self.base_lg
    }

    /// Check whether `key` may be present in the data block at file offset
    /// `block_offset`.
    ///
    /// `false` means the key is definitely absent from that block. `true`
    /// means the caller must read the block and check for real; it covers
    /// genuine candidates as well as every case where the region gives no
    /// usable answer.
    pub fn key_may_match(&self, block_offset: u64, key: &[u8]) -> bool {
        let index = match block_offset.checked_shr(u32::from(self.base_lg)) {
            Some(index) => index,
            // A shift wider than the offset only comes from a trailer this
            // version does not understand
            None => return true,
        };
        if index >= self.num_filters as u64 {
            return true;
        }
        let index = index as usize;

        let entry = self.directory_start + index * 4;
        let start = decode_fixed32(&self.data[entry..]) as usize;
        let limit = decode_fixed32(&self.data[entry + 4..]) as usize;

        if start == limit {
            // Empty filter: no key in this span was ever indexed
            return false;
        }
        if start < limit && limit <= self.directory_start {
            return self.policy.key_may_match(key, &self.data[start..limit]);
        }

        // Inverted or out-of-range offsets are treated as potential matches
        true
    }
}
