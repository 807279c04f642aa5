use serde_derive::{Deserialize, Serialize};

/// A locally registered account.
///
/// The password is kept in plaintext, this is a local simulation of an
/// account system and must not be used to protect anything.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct StoredUser {
    /// lower-cased at signup
    pub email: String,
    pub name: String,
    pub password: String,
}

impl StoredUser {
    /// Compare ignoring case. `email` is also trimmed, command line input
    /// often carries stray whitespace and stored emails never do.
    pub fn has_email(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_email_ignores_case_and_surrounding_whitespace() {
        let user = StoredUser {
            email: "ada@example.com".to_owned(),
            name: "Ada".to_owned(),
            password: "secret1".to_owned(),
        };
        assert!(user.has_email("ADA@example.com"));
        assert!(user.has_email(" ada@example.com\n"));
        assert!(!user.has_email("ada@example.org"));
    }
}
