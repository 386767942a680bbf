//! Caller-scoped session state.
//!
//! The admin flag lives on an explicit [`Session`] that is handed to every
//! operation needing it. Nothing is stored globally and nothing outlives the
//! process.
//!
//! [`PlaceholderCredentials`] is an equality check against fixed values. It is
//! not a security boundary; swap in a real [`CredentialCheck`] before exposing
//! admin operations to anyone.

use crate::model::Language;
use tracing::info;
use uuid::Uuid;

pub trait CredentialCheck {
    fn verify(&self, user: &str, password: &str) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderCredentials;

impl CredentialCheck for PlaceholderCredentials {
    fn verify(&self, user: &str, password: &str) -> bool {
        user == "admin" && password == "admin123"
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    pub language: Language,
    is_admin: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl Session {
    pub fn new(language: Language) -> Self {
        Self {
            id: Uuid::new_v4(),
            language,
            is_admin: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Grants admin rights when `check` accepts the credentials. Returns whether it did.
    pub fn login<C: CredentialCheck + ?Sized>(
        &mut self,
        check: &C,
        user: &str,
        password: &str,
    ) -> bool {
        if check.verify(user, password) {
            self.is_admin = true;
            info!(session = %self.id, "admin login");
            true
        } else {
            info!(session = %self.id, "rejected admin login");
            false
        }
    }

    pub fn logout(&mut self) {
        if self.is_admin {
            info!(session = %self.id, "admin logout");
        }
        self.is_admin = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_accepts_only_fixed_pair() {
        let check = PlaceholderCredentials;
        assert!(check.verify("admin", "admin123"));
        assert!(!check.verify("admin", "admin"));
        assert!(!check.verify("root", "admin123"));
    }

    #[test]
    fn login_and_logout_flip_the_flag() {
        let mut session = Session::default();
        assert!(!session.is_admin());
        assert!(!session.login(&PlaceholderCredentials, "admin", "nope"));
        assert!(!session.is_admin());
        assert!(session.login(&PlaceholderCredentials, "admin", "admin123"));
        assert!(session.is_admin());
        session.logout();
        assert!(!session.is_admin());
    }

    #[test]
    fn sessions_are_independent() {
        let mut a = Session::new(Language::En);
        let b = Session::new(Language::En);
        a.login(&PlaceholderCredentials, "admin", "admin123");
        assert!(!b.is_admin());
        assert_ne!(a.id(), b.id());
    }
}
