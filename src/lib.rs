//! # TableFilter - Block-Level Filter Index for SSTables
//!
//! TableFilter is the per-table auxiliary index that lets an LSM-Tree storage
//! engine skip disk reads for keys that provably do not exist in a given data
//! block. While a table file is written, a stream of keys and data-block
//! boundaries is fed into a builder that emits one compact, self-describing
//! byte region. At read time, given only a data-block's file offset and a
//! candidate key, a reader over that region answers "definitely absent" or
//! "maybe present" without touching the data block itself.
//!
//! ## Architecture
//!
//! The crate consists of a few small components:
//!
//! - **FilterBlockBuilder**: Groups incoming keys into fixed-size file-offset
//!   buckets and materializes one filter per bucket
//! - **FilterBlockReader**: Borrowed view over a finished region that answers
//!   stateless membership queries
//! - **FilterPolicy**: Pluggable probabilistic-membership algorithm
//! - **BloomFilterPolicy**: The canonical policy implementation
//!
//! ## Example Usage
//!
//! ```rust
//! use tablefilter::{BloomFilterPolicy, FilterBlockBuilder, FilterBlockReader};
//!
//! let policy = BloomFilterPolicy::default();
//!
//! // Table-writing side: feed keys and block boundaries
//! let mut builder = FilterBlockBuilder::new(&policy);
//! builder.start_block(0);
//! builder.add_key(b"alpha");
//! builder.add_key(b"beta");
//! let region = builder.finish();
//!
//! // Table-reading side: query against the finished region
//! let reader = FilterBlockReader::new(&policy, &region);
//! assert!(reader.key_may_match(0, b"alpha"));
//! assert!(reader.key_may_match(0, b"beta"));
//! ```
//!
//! ## Fail-Open Convention
//!
//! The index is purely an optimization. Any uncertainty on the read side
//! (a truncated region, an out-of-range directory offset) resolves to
//! "maybe present", so the caller falls back to reading the data block.
//! A real key is never silently skipped.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Module declarations
pub mod block;
pub mod coding;
pub mod config;
pub mod error;
pub mod policy;

// Re-exports
pub use block::{FilterBlockBuilder, FilterBlockReader};
pub use config::Options;
pub use error::{Error, Result};
pub use policy::{BloomFilterPolicy, FilterPolicy};
