use sha2::{Digest, Sha256};

/// One allowlisted admin account. Passwords are never stored in clear:
/// `password_hash` is lowercase hex SHA-256.
#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
}

/// The fixed set of accounts allowed to log in with email + password.
/// Supplied as configuration at startup; an empty directory disables
/// admin login entirely.
#[derive(Debug, Clone, Default)]
pub struct AdminDirectory {
    accounts: Vec<AdminAccount>,
}

impl AdminDirectory {
    pub fn new(accounts: Vec<AdminAccount>) -> Self {
        Self { accounts }
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Whether the email belongs to an allowlisted admin. Used by the
    /// federated flow to decide the initial role of a fresh user record.
    pub fn contains(&self, email: &str) -> bool {
        self.accounts.iter().any(|a| a.email == email)
    }

    /// Verifies an email + password pair. Unknown emails and wrong
    /// passwords are indistinguishable to the caller.
    pub fn verify(&self, email: &str, password: &str) -> Option<&AdminAccount> {
        let account = self.accounts.iter().find(|a| a.email == email)?;
        let hash = format!("{:x}", Sha256::digest(password.as_bytes()));
        if hash == account.password_hash {
            Some(account)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> AdminDirectory {
        // sha256("lumina-secret")
        AdminDirectory::new(vec![AdminAccount {
            email: "admin@lumina.co".to_string(),
            password_hash: format!("{:x}", Sha256::digest(b"lumina-secret")),
            display_name: "Lumina Admin".to_string(),
        }])
    }

    #[test]
    fn should_verify_correct_password() {
        let dir = directory();
        let account = dir.verify("admin@lumina.co", "lumina-secret");
        assert_eq!(account.unwrap().display_name, "Lumina Admin");
    }

    #[test]
    fn should_reject_wrong_password() {
        assert!(directory().verify("admin@lumina.co", "guess").is_none());
    }

    #[test]
    fn should_reject_unknown_email() {
        assert!(directory().verify("nobody@lumina.co", "lumina-secret").is_none());
    }

    #[test]
    fn should_report_allowlisted_emails() {
        let dir = directory();
        assert!(dir.contains("admin@lumina.co"));
        assert!(!dir.contains("customer@example.com"));
    }
}
