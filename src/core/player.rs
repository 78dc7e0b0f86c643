//! Opaque identifiers supplied by the embedding layer.
//!
//! ## PlayerId
//!
//! Identifies a player across answer submissions and scoring. The engine
//! only compares and hashes it; display-name resolution belongs to the
//! caller.
//!
//! ## SessionId
//!
//! Identifies a channel/session in the director's registry. At most one
//! round runs per session.

use serde::{Deserialize, Serialize};

/// Opaque player handle.
///
/// Chat platforms typically hand out 64-bit user IDs; anything that fits
/// in a `u64` works. The engine never interprets the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}

/// Opaque session/channel handle for the director's registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    /// Create a new session ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p = PlayerId::new(42);
        assert_eq!(p.raw(), 42);
        assert_eq!(format!("{}", p), "Player(42)");
        assert_eq!(p, PlayerId::new(42));
        assert_ne!(p, PlayerId::new(43));
    }

    #[test]
    fn test_session_id_basics() {
        let s = SessionId::new(7);
        assert_eq!(s.raw(), 7);
        assert_eq!(format!("{}", s), "Session(7)");
    }

    #[test]
    fn test_id_serialization() {
        let p = PlayerId::new(123);
        let json = serde_json::to_string(&p).unwrap();
        let back: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
