use serde_derive::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMotivation {
    pub id: String,
    pub text: String,
    /// unix timestamp in milliseconds
    pub created_at: u64,
    pub user_email: String,
}

impl UserMotivation {
    /// Compare ignoring case, `email` is trimmed like in [`super::user::StoredUser::has_email`]
    pub fn belongs_to(&self, email: &str) -> bool {
        self.user_email.to_lowercase() == email.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_belongs_to() {
        let motivation = UserMotivation {
            id: "motivation-1".to_owned(),
            text: "Keep going".to_owned(),
            created_at: 0,
            user_email: "ada@example.com".to_owned(),
        };
        assert!(motivation.belongs_to("Ada@Example.com "));
        assert!(!motivation.belongs_to("bob@example.com"));
    }
}
