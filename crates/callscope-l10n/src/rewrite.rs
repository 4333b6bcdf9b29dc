use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use regex::{Captures, Regex};

use crate::mapping;

/// Pages that still use the lookup style, relative to the project root.
pub const TARGET_FILES: &[&str] = &[
    "lib/presentation/pages/login_page.dart",
    "lib/presentation/pages/dashboard_page.dart",
    "lib/presentation/pages/settings_page.dart",
    "lib/presentation/pages/cdr_page.dart",
];

/// `AppLocalizations.of(context)` returns a nullable in gen-l10n output;
/// the converted accessors need the non-null assertion. Matching requires
/// the bare `;` so already-converted lines (ending `)!;`) pass through.
fn deref_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"final l10n = AppLocalizations\.of\(context\);").expect("static pattern")
    })
}

/// `l10n.t('key')` or `l10n.t("key")`. The two quote styles are separate
/// alternatives so a mixed-quote call never matches.
fn lookup_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"l10n\.t\((?:'([A-Za-z0-9_]+)'|"([A-Za-z0-9_]+)")\)"#)
            .expect("static pattern")
    })
}

/// Applies both rewrites to one source text. Unknown keys are left as
/// lookup calls so the Dart analyzer flags them instead of this tool
/// silently inventing a getter.
pub fn convert_source(source: &str) -> String {
    let source = deref_regex().replace_all(source, "final l10n = AppLocalizations.of(context)!;");

    lookup_regex()
        .replace_all(&source, |caps: &Captures| {
            let key = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or_default();
            match mapping::camel_key(key) {
                Some(camel) => format!("l10n.{camel}"),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Converts one file in place. Returns whether the file changed; an
/// already-converted file is read but not rewritten.
pub fn convert_file(path: &Path) -> Result<bool> {
    let source =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let converted = convert_source(&source);

    if converted == source {
        return Ok(false);
    }
    fs::write(path, &converted).with_context(|| format!("writing {}", path.display()))?;
    Ok(true)
}
