//! Shared data model for the callscope collector.
//!
//! Everything the CLI prints is described here: one serde struct per JSON
//! report, plus the record types they carry. The collector library fills
//! these in; the runner stamps and prints them.

pub mod ami;
pub mod cdr;
pub mod recording;
pub mod report;
pub mod system;

pub use ami::*;
pub use cdr::*;
pub use recording::*;
pub use report::*;
pub use system::*;
