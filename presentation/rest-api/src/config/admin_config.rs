use serde::Deserialize;
use std::env;

use business::domain::auth::allowlist::{AdminAccount, AdminDirectory};

#[derive(Debug, Deserialize)]
struct AdminAccountEntry {
    email: String,
    password_hash: String,
    #[serde(default)]
    display_name: String,
}

/// Load the admin allowlist from environment variables
///
/// Environment variables:
/// - ADMIN_ACCOUNTS: JSON array of objects with `email`,
///   `password_hash` (lowercase hex SHA-256) and `display_name`
///
/// A missing or malformed value yields an empty directory, which
/// disables admin login.
pub fn init_admin_directory() -> AdminDirectory {
    let raw = match env::var("ADMIN_ACCOUNTS") {
        Ok(raw) => raw,
        Err(_) => {
            tracing::warn!("ADMIN_ACCOUNTS not set, admin login disabled");
            return AdminDirectory::default();
        }
    };

    match serde_json::from_str::<Vec<AdminAccountEntry>>(&raw) {
        Ok(entries) => AdminDirectory::new(
            entries
                .into_iter()
                .map(|e| AdminAccount {
                    email: e.email,
                    password_hash: e.password_hash,
                    display_name: e.display_name,
                })
                .collect(),
        ),
        Err(err) => {
            tracing::warn!("ADMIN_ACCOUNTS is not valid JSON ({err}), admin login disabled");
            AdminDirectory::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_account_entries() {
        let raw = r#"[{"email":"admin@lumina.co","password_hash":"abc123","display_name":"Lumina Admin"}]"#;
        let entries: Vec<AdminAccountEntry> = serde_json::from_str(raw).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].email, "admin@lumina.co");
        assert_eq!(entries[0].display_name, "Lumina Admin");
    }

    #[test]
    fn should_default_display_name_when_absent() {
        let raw = r#"[{"email":"admin@lumina.co","password_hash":"abc123"}]"#;
        let entries: Vec<AdminAccountEntry> = serde_json::from_str(raw).unwrap();

        assert!(entries[0].display_name.is_empty());
    }
}
