use crate::db::migrations;
use crate::libs::data_storage::DataStorage;
use crate::libs::errors::Result;
use crate::libs::messages::Message;
use crate::msg_error;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "dayplan.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the planner database and brings its schema up to date.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let mut conn: Connection = Connection::open(db_file_path).map_err(|e| {
            msg_error!(Message::DbConnectionFailed);
            e
        })?;
        migrations::init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Opens the planner database without applying migrations.
    ///
    /// Used by migration tooling and tests that inspect or prepare the
    /// schema by hand.
    pub fn new_without_migrations() -> Result<Connection> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let conn = Connection::open(db_file_path)?;

        Ok(conn)
    }
}
