//! One-shot rewriter migrating the app's Dart pages from runtime
//! `l10n.t('key')` string lookups to generated `AppLocalizations`
//! property accesses.
//!
//! The rewrite is table-driven and idempotent: running it over already
//! converted sources changes nothing.

pub mod mapping;
mod rewrite;

pub use rewrite::{convert_file, convert_source, TARGET_FILES};
