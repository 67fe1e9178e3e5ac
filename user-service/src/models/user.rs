use serde::{Deserialize, Serialize};

/// A row of the users table.
///
/// `User::default()` is the empty value: a store that has no row for an id
/// may hand it back instead of `None`, and callers treat both the same way.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// True for the empty value, i.e. no persisted row behind it.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn default_user_is_empty() {
        assert!(User::default().is_empty());
        assert!(!User::new("u1", "Alice").is_empty());
    }

    #[test]
    fn reads_id_from_document_key() {
        let user: User = bson::from_document(doc! { "_id": "u1", "name": "Alice" }).unwrap();
        assert_eq!(user, User::new("u1", "Alice"));
    }

    #[test]
    fn missing_name_reads_as_empty() {
        let user: User = bson::from_document(doc! { "_id": "u2" }).unwrap();
        assert_eq!(user.name, "");
        assert!(!user.is_empty());
    }
}
