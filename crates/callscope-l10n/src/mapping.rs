//! The snake_case to camelCase key rename table.
//!
//! One row per localization key the app ever looked up through
//! `l10n.t(...)`. The right-hand side must match the getter names
//! `flutter gen-l10n` derives from the ARB files, so the table is kept
//! literal instead of applying a case conversion.

use std::collections::HashMap;
use std::sync::OnceLock;

pub const KEY_MAPPING: &[(&str, &str)] = &[
    ("app_title", "appTitle"),
    ("saved_servers", "savedServers"),
    ("add_server", "addServer"),
    ("no_servers", "noServers"),
    ("add_server_to_start", "addServerToStart"),
    ("server_name", "serverName"),
    ("ip_address", "ipAddress"),
    ("port", "port"),
    ("username", "username"),
    ("password", "password"),
    ("add_new_server", "addNewServer"),
    ("edit_server", "editServer"),
    ("save", "save"),
    ("cancel", "cancel"),
    ("delete_server", "deleteServer"),
    ("delete_confirm", "deleteConfirm"),
    ("delete", "delete"),
    ("edit", "edit"),
    ("active", "active"),
    ("mock_mode", "mockMode"),
    ("mock_mode_desc", "mockModeDesc"),
    ("logout", "logout"),
    ("logout_confirm", "logoutConfirm"),
    ("nav_dashboard", "navDashboard"),
    ("nav_extensions", "navExtensions"),
    ("nav_calls", "navCalls"),
    ("nav_queues", "navQueues"),
    ("nav_reports", "navReports"),
    ("dashboard", "dashboard"),
    ("extensions", "extensions"),
    ("active_calls", "activeCalls"),
    ("queues", "queues"),
    ("waiting", "waiting"),
    ("available", "available"),
    ("call", "call"),
    ("online", "online"),
    ("offline", "offline"),
    ("recent_calls", "recentCalls"),
    ("no_active_calls", "noActiveCalls"),
    ("duration", "duration"),
    ("cdr_title", "cdrTitle"),
    ("record_count", "recordCount"),
    ("records", "records"),
    ("export_csv", "exportCsv"),
    ("answered", "answered"),
    ("no_answer", "noAnswer"),
    ("busy", "busy"),
    ("failed", "failed"),
    ("status", "status"),
    ("no_records", "noRecords"),
    ("loading_error", "loadingError"),
    ("retry_button", "retryButton"),
    ("filter_calls", "filterCalls"),
    ("date_range", "dateRange"),
    ("from_date", "fromDate"),
    ("to_date", "toDate"),
    ("source_number", "sourceNumber"),
    ("destination_number", "destinationNumber"),
    ("call_status", "callStatus"),
    ("all", "all"),
    ("apply_filter", "applyFilter"),
    ("saved", "saved"),
    ("save_error", "saveError"),
    ("file_saved", "fileSaved"),
    ("path", "path"),
    ("file_save_error", "fileSaveError"),
    ("saving", "saving"),
    ("filter", "filter"),
    ("field_required", "fieldRequired"),
    ("name_required", "nameRequired"),
    ("ip_required", "ipRequired"),
    ("port_required", "portRequired"),
    ("overall_stats", "overallStats"),
    ("last_updated", "lastUpdated"),
    ("average_wait", "averageWait"),
    ("seconds", "seconds"),
    ("view_all", "viewAll"),
    ("auto_refresh", "autoRefresh"),
    ("interval", "interval"),
    ("retry", "retry"),
    ("loading", "loading"),
    ("error", "error"),
    ("refresh", "refresh"),
    ("settings", "settings"),
    ("language", "language"),
    ("theme", "theme"),
    ("light", "light"),
    ("dark", "dark"),
    ("system", "system"),
];

/// The generated getter name for a snake_case key, if the key is known.
pub fn camel_key(snake: &str) -> Option<&'static str> {
    static INDEX: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    INDEX
        .get_or_init(|| KEY_MAPPING.iter().copied().collect())
        .get(snake)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys_resolve() {
        assert_eq!(camel_key("app_title"), Some("appTitle"));
        assert_eq!(camel_key("no_active_calls"), Some("noActiveCalls"));
        // keys without underscores map to themselves
        assert_eq!(camel_key("port"), Some("port"));
    }

    #[test]
    fn test_unknown_keys_resolve_to_none() {
        assert_eq!(camel_key("mystery_key"), None);
        assert_eq!(camel_key(""), None);
    }

    #[test]
    fn test_mapping_has_no_duplicate_keys() {
        let mut keys: Vec<&str> = KEY_MAPPING.iter().map(|(snake, _)| *snake).collect();
        keys.sort_unstable();
        let before = keys.len();
        keys.dedup();
        assert_eq!(keys.len(), before);
    }
}
