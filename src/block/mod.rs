//! Filter block construction and lookup.
//!
//! A filter block is a byte region embedded in an SSTable that stores one
//! probabilistic filter per fixed-size span of data-block file offsets. The
//! builder produces the region while the table is written; the reader
//! answers membership queries against it while the table is open.
//!
//! ## Region Format
//!
//! ```text
//! [Filter 0]
//! [Filter 1]
//! ...
//! [Filter N-1]
//! [Offset of Filter 0   : 4B LE]
//! [Offset of Filter 1   : 4B LE]
//! ...
//! [Offset of Filter N-1 : 4B LE]
//! [Offset of offset array : 4B LE]
//! [Granularity shift : 1B]
//! ```
//!
//! All offsets are relative to the start of the region. A data block at
//! file offset `o` is covered by filter number `o >> granularity_shift`.
//! Two consecutive directory entries being equal marks an empty filter: no
//! key in that span of offsets was ever indexed.

pub mod builder;
pub mod reader;

pub use builder::FilterBlockBuilder;
pub use reader::FilterBlockReader;

/// Default granularity shift: one filter per 2KB of data-block offsets
pub const FILTER_BASE_LG: u8 = 11;

/// Bucket byte span at the default granularity
pub const FILTER_BASE: u64 = 1 << FILTER_BASE_LG;

/// Region trailer size: 4-byte directory offset plus the granularity byte
pub const TRAILER_SIZE: usize = 5;
