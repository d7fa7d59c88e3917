use serde::{Deserialize, Serialize};

use crate::model::ids::UserId;

/// The authenticated user's profile as returned by the login exchange.
///
/// `avatar` is resolved exactly once at the wire boundary from whichever of
/// the remote's optional picture fields is present; nothing downstream
/// re-derives it. Serialized as-is into the local vault so `restore()` can
/// reproduce the profile without another network call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    avatar: Option<String>,
}

impl User {
    #[must_use]
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        avatar: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            avatar: avatar.filter(|a| !a.trim().is_empty()),
        }
    }

    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    /// First letter of the display name, for the fallback avatar badge.
    #[must_use]
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map_or_else(|| "?".to_string(), |ch| ch.to_uppercase().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_avatar_is_treated_as_absent() {
        let user = User::new(UserId::new("u1"), "Ada", "ada@example.com", Some("  ".into()));
        assert_eq!(user.avatar(), None);
    }

    #[test]
    fn initial_upper_cases_first_char() {
        let user = User::new(UserId::new("u1"), "ada", "ada@example.com", None);
        assert_eq!(user.initial(), "A");
    }

    #[test]
    fn initial_falls_back_for_empty_name() {
        let user = User::new(UserId::new("u1"), "", "x@example.com", None);
        assert_eq!(user.initial(), "?");
    }
}
