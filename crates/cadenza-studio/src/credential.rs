use cadenza_core::SessionId;
use dashmap::DashMap;
use secrecy::{ExposeSecret, SecretString};

/// Session-scoped storage for the upstream API key
///
/// Keys live only in process memory for the lifetime of the session
/// entry; nothing is ever written to disk.
#[derive(Default)]
pub struct CredentialStore {
    keys: DashMap<SessionId, SecretString>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The key currently stored for a session, empty when absent
    pub fn current(&self, session: SessionId) -> String {
        self.keys
            .get(&session)
            .map(|key| key.expose_secret().to_owned())
            .unwrap_or_default()
    }

    /// Apply the remember policy for one submission
    ///
    /// A remembered key always overwrites the stored value. An
    /// unremembered key that differs from the stored value clears it.
    /// Anything else (empty key, or resubmitting the stored key without
    /// the remember flag) leaves the store untouched.
    pub fn apply(&self, session: SessionId, submitted: &str, remember: bool) {
        if remember {
            self.keys.insert(session, SecretString::from(submitted.to_owned()));
        } else if !submitted.is_empty() && self.current(session) != submitted {
            self.keys.insert(session, SecretString::from(String::new()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_session_reads_empty() {
        let store = CredentialStore::new();
        assert_eq!(store.current(SessionId::generate()), "");
    }

    #[test]
    fn remembered_key_overwrites_unconditionally() {
        let store = CredentialStore::new();
        let session = SessionId::generate();

        store.apply(session, "sk-old", true);
        assert_eq!(store.current(session), "sk-old");

        store.apply(session, "sk-new", true);
        assert_eq!(store.current(session), "sk-new");

        store.apply(session, "", true);
        assert_eq!(store.current(session), "");
    }

    #[test]
    fn differing_unremembered_key_clears_store() {
        let store = CredentialStore::new();
        let session = SessionId::generate();

        store.apply(session, "sk-stored", true);
        store.apply(session, "sk-other", false);
        assert_eq!(store.current(session), "");
    }

    #[test]
    fn matching_unremembered_key_is_kept() {
        let store = CredentialStore::new();
        let session = SessionId::generate();

        store.apply(session, "sk-stored", true);
        store.apply(session, "sk-stored", false);
        assert_eq!(store.current(session), "sk-stored");
    }

    #[test]
    fn empty_unremembered_key_is_a_no_op() {
        let store = CredentialStore::new();
        let session = SessionId::generate();

        store.apply(session, "sk-stored", true);
        store.apply(session, "", false);
        assert_eq!(store.current(session), "sk-stored");
    }

    #[test]
    fn sessions_are_isolated() {
        let store = CredentialStore::new();
        let first = SessionId::generate();
        let second = SessionId::generate();

        store.apply(first, "sk-first", true);
        assert_eq!(store.current(first), "sk-first");
        assert_eq!(store.current(second), "");
    }
}
