use crate::db::db::Db;
use crate::libs::auth;
use crate::libs::errors::{PlannerError, Result};
use crate::libs::user::{User, UserId};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};

const SCHEMA_USERS: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER NOT NULL PRIMARY KEY,
    username TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";
const INSERT_USER: &str = "INSERT INTO users (username, password) VALUES (?1, ?2)";
const SELECT_USER_BY_USERNAME: &str = "SELECT id, username, password FROM users WHERE username = ?1";
const SELECT_USER_BY_ID: &str = "SELECT id, username, password FROM users WHERE id = ?1";

pub struct Users {
    conn: Connection,
}

impl Users {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_USERS, [])?;
        Ok(Self { conn: db.conn })
    }

    /// Register a new account, storing only the salted password digest
    pub fn register(&mut self, username: &str, password: &str) -> Result<User> {
        let password_hash = auth::hash_password(password)?;
        match self.conn.execute(INSERT_USER, params![username, password_hash]) {
            Ok(_) => {}
            Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
                return Err(PlannerError::DuplicateUser(username.to_string()));
            }
            Err(e) => return Err(e.into()),
        }
        Ok(User {
            id: Some(self.conn.last_insert_rowid()),
            username: username.to_string(),
            password_hash,
        })
    }

    /// Check a username and password pair against stored accounts.
    ///
    /// Fails with the same [`PlannerError::UserNotFound`] whether the
    /// username is unknown or the password is wrong, so callers cannot tell
    /// which part of the credentials missed.
    pub fn authenticate(&mut self, username: &str, password: &str) -> Result<User> {
        let user = self.get_by_username(username)?.ok_or(PlannerError::UserNotFound)?;
        if !auth::verify_password(password, &user.password_hash)? {
            return Err(PlannerError::UserNotFound);
        }
        Ok(user)
    }

    /// Get a user by username
    pub fn get_by_username(&mut self, username: &str) -> Result<Option<User>> {
        self.conn
            .query_row(SELECT_USER_BY_USERNAME, params![username], |row| {
                Ok(User {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    password_hash: row.get(2)?,
                })
            })
            .optional()
            .map_err(Into::into)
    }

    /// Get a user by ID
    pub fn get_by_id(&mut self, id: UserId) -> Result<Option<User>> {
        self.conn
            .query_row(SELECT_USER_BY_ID, params![id], |row| {
                Ok(User {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    password_hash: row.get(2)?,
                })
            })
            .optional()
            .map_err(Into::into)
    }
}
