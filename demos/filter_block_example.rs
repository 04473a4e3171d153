//! Example demonstrating the filter block builder and reader
//!
//! This example plays both roles of the embedding table: the writer side
//! feeds keys and data-block boundaries into the builder, and the reader
//! side queries the finished region to decide which block reads can be
//! skipped.

use tablefilter::{BloomFilterPolicy, FilterBlockBuilder, FilterBlockReader};

fn main() {
    env_logger::init();

    println!("=== TableFilter Filter Block Example ===\n");

    let policy = BloomFilterPolicy::default();

    // Writer side: three data blocks at offsets 0, 4096 and 8192
    let mut builder = FilterBlockBuilder::new(&policy);

    builder.start_block(0);
    for user in ["user:1001", "user:1002", "user:1003"] {
        builder.add_key(user.as_bytes());
    }

    builder.start_block(4096);
    for user in ["user:2001", "user:2002"] {
        builder.add_key(user.as_bytes());
    }

    builder.start_block(8192);
    builder.add_key(b"user:3001");

    let region = builder.finish();
    println!("Finished filter region: {} bytes\n", region.len());

    // Reader side: query per (block offset, key)
    let reader = FilterBlockReader::new(&policy, &region);
    println!("Filters in region: {}", reader.num_filters());
    println!("Granularity: 2^{} bytes per filter\n", reader.granularity_shift());

    println!("Queries against the block at offset 0:");
    for key in ["user:1001", "user:2001", "user:9999"] {
        let may_match = reader.key_may_match(0, key.as_bytes());
        println!("  {} may match? {}", key, may_match);
    }

    println!("\nQueries against the block at offset 4096:");
    for key in ["user:2001", "user:1001"] {
        let may_match = reader.key_may_match(4096, key.as_bytes());
        println!("  {} may match? {}", key, may_match);
    }

    // An offset past the indexed range can never rule a key out
    println!("\nQuery outside the indexed range:");
    println!(
        "  user:1001 at offset 1000000 may match? {} (fail-open)",
        reader.key_may_match(1_000_000, b"user:1001")
    );
}
