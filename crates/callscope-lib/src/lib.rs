//! Collector library for Asterisk-compatible telephony servers.
//!
//! Each module owns one data source:
//! - [`cdr`]: call detail records out of the cdr-csv Master file
//! - [`recordings`]: audio files under the monitor spool
//! - [`sysinfo`]: installation details and detected paths
//! - [`ami`]: manager.conf inspection and provisioning
//! - [`dates`]: the date formats CDR columns show up in
//!
//! Collectors discover the conventional Asterisk paths by default and
//! accept explicit paths for tests. All fallible operations return
//! [`CollectorError`], which maps onto the coarse error codes the CLI
//! reports.

pub mod ami;
pub mod cdr;
pub mod dates;
pub mod error;
pub mod paths;
pub mod recordings;
pub mod sysinfo;

pub use error::{CollectorError, Result};
