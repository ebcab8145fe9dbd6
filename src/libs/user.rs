use serde::{Deserialize, Serialize};

pub type UserId = i64;

/// A registered account. `password_hash` holds the Argon2id digest in PHC
/// string form, never the password itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Option<UserId>,
    pub username: String,
    pub password_hash: String,
}

impl User {
    pub fn new(username: &str, password_hash: &str) -> Self {
        User {
            id: None,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        }
    }
}
