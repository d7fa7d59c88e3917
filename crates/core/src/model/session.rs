use crate::model::user::User;

/// The locally cached identity: a bearer token plus the user profile it was
/// issued for. Constructed only as fully authenticated or fully anonymous,
/// so token and user can never drift apart in memory.
///
/// The token is never validated locally; an expired or revoked token only
/// surfaces when an authenticated API call fails.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    credentials: Option<(String, User)>,
}

impl Session {
    #[must_use]
    pub fn anonymous() -> Self {
        Self { credentials: None }
    }

    #[must_use]
    pub fn authenticated(token: impl Into<String>, user: User) -> Self {
        Self {
            credentials: Some((token.into(), user)),
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.credentials.as_ref().map(|(token, _)| token.as_str())
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.credentials.as_ref().map(|(_, user)| user)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ids::UserId;

    #[test]
    fn anonymous_session_has_neither_token_nor_user() {
        let session = Session::anonymous();
        assert_eq!(session.token(), None);
        assert!(session.user().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn authenticated_session_exposes_both() {
        let user = User::new(UserId::new("u1"), "Ada", "ada@example.com", None);
        let session = Session::authenticated("tok-1", user.clone());
        assert_eq!(session.token(), Some("tok-1"));
        assert_eq!(session.user(), Some(&user));
        assert!(session.is_authenticated());
    }
}
