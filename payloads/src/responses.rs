use serde::{Deserialize, Serialize};

/// Public profile of a GitHub user, as served by `GET /users/{login}`.
///
/// Only the fields the profile view displays are modelled. Everything else
/// in the document is ignored, and `name`/`bio` are frequently `null` on
/// real accounts, so both are optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubUser {
    pub name: Option<String>,
    pub bio: Option<String>,
}

impl GithubUser {
    /// The display name, or an empty string when unset.
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// The bio, or an empty string when unset.
    pub fn bio_or_empty(&self) -> &str {
        self.bio.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::GithubUser;

    #[test]
    fn test_missing_and_null_fields() {
        let user: GithubUser = serde_json::from_str("{}").unwrap();
        assert_eq!(user, GithubUser::default());
        assert_eq!(user.name_or_empty(), "");

        let user: GithubUser = serde_json::from_str(
            r#"{"login": "kedoska", "name": null, "bio": "Hacker", "id": 1}"#,
        )
        .unwrap();
        assert_eq!(user.name, None);
        assert_eq!(user.bio_or_empty(), "Hacker");
    }
}
