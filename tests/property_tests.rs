//! Property tests for the filter region format and its invariants

use proptest::prelude::*;
use tablefilter::block::TRAILER_SIZE;
use tablefilter::{BloomFilterPolicy, FilterBlockBuilder, FilterBlockReader};

/// A table-writing session: data blocks at increasing offsets, each with
/// its own key set.
fn arb_blocks() -> impl Strategy<Value = Vec<(u64, Vec<Vec<u8>>)>> {
    prop::collection::vec(
        (
            0u64..1_000_000,
            prop::collection::vec(prop::collection::vec(any::<u8>(), 0..24), 0..8),
        ),
        1..12,
    )
    .prop_map(|mut blocks| {
        blocks.sort_by_key(|(offset, _)| *offset);
        blocks
    })
}

fn build_region(blocks: &[(u64, Vec<Vec<u8>>)]) -> bytes::Bytes {
    let policy = BloomFilterPolicy::default();
    let mut builder = FilterBlockBuilder::new(&policy);
    for (offset, keys) in blocks {
        builder.start_block(*offset);
        for key in keys {
            builder.add_key(key);
        }
    }
    builder.finish()
}

proptest! {
    /// Every key added for a block is reported as possibly present when
    /// queried with that block's offset, and repeating the query gives the
    /// same answer.
    #[test]
    fn no_false_negatives(blocks in arb_blocks()) {
        let region = build_region(&blocks);
        let policy = BloomFilterPolicy::default();
        let reader = FilterBlockReader::new(&policy, &region);

        for (offset, keys) in &blocks {
            for key in keys {
                prop_assert!(reader.key_may_match(*offset, key));
                prop_assert!(reader.key_may_match(*offset, key));
            }
        }
    }

    /// The directory decoded from a finished region is non-decreasing, its
    /// final entry does not pass its own start, and the region length adds
    /// up exactly.
    #[test]
    fn directory_is_monotonic(blocks in arb_blocks()) {
        let region = build_region(&blocks);
        let n = region.len();
        prop_assert!(n >= TRAILER_SIZE);

        let directory_start =
            u32::from_le_bytes(region[n - 5..n - 1].try_into().unwrap()) as usize;
        prop_assert!(directory_start <= n - TRAILER_SIZE);

        let directory = &region[directory_start..n - TRAILER_SIZE];
        prop_assert_eq!(directory.len() % 4, 0);

        let mut previous = 0usize;
        for entry in directory.chunks_exact(4) {
            let offset = u32::from_le_bytes(entry.try_into().unwrap()) as usize;
            prop_assert!(offset >= previous);
            prop_assert!(offset <= directory_start);
            previous = offset;
        }

        // The directory-start field doubles as the final limit sentinel
        prop_assert!(directory_start >= previous);
    }

    /// A region stripped below its trailer always fails open.
    #[test]
    fn truncation_below_trailer_fails_open(
        blocks in arb_blocks(),
        len in 0usize..TRAILER_SIZE,
        probe_offset in any::<u64>(),
        probe_key in prop::collection::vec(any::<u8>(), 0..24),
    ) {
        let region = build_region(&blocks);
        let policy = BloomFilterPolicy::default();

        let reader = FilterBlockReader::new(&policy, &region[..len.min(region.len())]);
        prop_assert!(reader.key_may_match(probe_offset, &probe_key));
    }

    /// A directory offset pointing past the trailer always fails open.
    #[test]
    fn corrupt_directory_start_fails_open(
        blocks in arb_blocks(),
        probe_offset in any::<u64>(),
        probe_key in prop::collection::vec(any::<u8>(), 0..24),
    ) {
        let mut region = build_region(&blocks).to_vec();
        let n = region.len();
        let bad_start = (n - TRAILER_SIZE + 1) as u32;
        region[n - 5..n - 1].copy_from_slice(&bad_start.to_le_bytes());

        let policy = BloomFilterPolicy::default();
        let reader = FilterBlockReader::new(&policy, &region);
        prop_assert_eq!(reader.num_filters(), 0);
        prop_assert!(reader.key_may_match(probe_offset, &probe_key));
    }
}
