//! Identity resolution for score submissions.
//!
//! The original system keys score rows by the machine's network hostname, which
//! conflates "user" with "machine": two users on one host collide, and one user
//! on two hosts gets two disjoint rows. That is a known limitation, kept as-is.
//! The trait exists so a future identity scheme (token, session) can be swapped
//! in without touching the store logic.

/// Resolves a stable identifier for the current caller
pub trait IdentityResolver: Send + Sync {
    fn resolve(&self) -> String;
}

/// Production resolver: the OS-reported network hostname
#[derive(Debug, Clone, Default)]
pub struct HostnameIdentity;

impl IdentityResolver for HostnameIdentity {
    fn resolve(&self) -> String {
        hostname::get()
            .map(|h| h.to_string_lossy().to_string())
            .unwrap_or_else(|_| "unknown".to_string())
    }
}

/// Fixed-identifier resolver, used by tests to avoid depending on the host machine
#[derive(Debug, Clone)]
pub struct FixedIdentity(pub String);

impl IdentityResolver for FixedIdentity {
    fn resolve(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hostname_identity_is_nonempty_and_stable() {
        let resolver = HostnameIdentity;
        let first = resolver.resolve();
        assert!(!first.is_empty());
        assert_eq!(first, resolver.resolve());
    }

    #[test]
    fn test_fixed_identity_returns_configured_value() {
        let resolver = FixedIdentity("test-host-1".to_string());
        assert_eq!(resolver.resolve(), "test-host-1");
    }
}
