use super::db::Db;
use crate::libs::errors::{PlannerError, Result};
use crate::libs::task::{Task, TaskFilter, TaskId, TaskStatus};
use crate::libs::user::UserId;
use chrono::Weekday;
use rusqlite::{params, Connection, OptionalExtension, ToSql};

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER NOT NULL PRIMARY KEY,
    user_id INTEGER REFERENCES users(id),
    task TEXT NOT NULL,
    due_datetime TIMESTAMP NOT NULL,
    status TEXT NOT NULL DEFAULT 'Not yet started'
        CHECK (status IN ('Completed', 'In Progress', 'Not yet started', 'Canceled')),
    category TEXT NOT NULL
        CHECK (category IN ('Strategic', 'New Learning', 'Improve', 'Achievement'))
);";
const INSERT_TASK: &str = "INSERT INTO tasks (user_id, task, due_datetime, status, category) VALUES (?1, ?2, ?3, ?4, ?5)";
const UPDATE_STATUS: &str = "UPDATE tasks SET status = ?2 WHERE id = ?1";
const SELECT_TASKS: &str = "SELECT id, user_id, task, due_datetime, status, category FROM tasks";
const SELECT_TASK_BY_ID: &str = "SELECT id, user_id, task, due_datetime, status, category FROM tasks WHERE id = ?1";
const WHERE_OWNER: &str = "user_id = ?";
const WHERE_ANONYMOUS: &str = "user_id IS NULL";
const WHERE_DUE_DATE: &str = "DATE(due_datetime) = ?";
const WHERE_DUE_BETWEEN: &str = "DATE(due_datetime) BETWEEN ? AND ?";
const WHERE_DUE_MONTH: &str = "strftime('%Y-%m', due_datetime) = strftime('%Y-%m', ?)";
const ORDER_BY_DUE: &str = "ORDER BY due_datetime";

pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Tasks> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_TASKS, [])?;

        Ok(Tasks { conn: db.conn })
    }

    /// Insert a new task and return its id.
    ///
    /// Task text consisting only of whitespace is rejected with
    /// [`PlannerError::EmptyTask`] before anything is written.
    pub fn insert(&mut self, task: &Task) -> Result<TaskId> {
        if task.text.trim().is_empty() {
            return Err(PlannerError::EmptyTask);
        }
        self.conn
            .execute(INSERT_TASK, params![task.user_id, task.text, task.due_at, task.status, task.category])?;

        Ok(self.conn.last_insert_rowid())
    }

    /// Get a task by ID
    pub fn get_by_id(&mut self, id: TaskId) -> Result<Option<Task>> {
        self.conn
            .query_row(SELECT_TASK_BY_ID, params![id], |row| {
                Ok(Task {
                    id: row.get(0)?,
                    user_id: row.get(1)?,
                    text: row.get(2)?,
                    due_at: row.get(3)?,
                    status: row.get(4)?,
                    category: row.get(5)?,
                })
            })
            .optional()
            .map_err(Into::into)
    }

    /// Change the status of an existing task.
    ///
    /// Only the status column is touched. Unknown ids fail with
    /// [`PlannerError::TaskNotFound`] and leave the store unchanged.
    pub fn set_status(&mut self, id: TaskId, status: TaskStatus) -> Result<()> {
        let affected = self.conn.execute(UPDATE_STATUS, params![id, status])?;
        if affected == 0 {
            return Err(PlannerError::TaskNotFound(id));
        }
        Ok(())
    }

    /// Fetch tasks for one owner context, narrowed by a schedule filter.
    ///
    /// `owner` is `None` for the anonymous context, which sees only tasks
    /// stored without an account. Day filters match every task due on that
    /// calendar date regardless of time; week filters span Monday through
    /// Sunday of the week containing the given date. Results come back in
    /// due order.
    pub fn fetch(&mut self, owner: Option<UserId>, filter: TaskFilter) -> Result<Vec<Task>> {
        let mut clauses: Vec<&str> = Vec::new();
        let mut params: Vec<Box<dyn ToSql>> = Vec::new();

        match owner {
            Some(user_id) => {
                clauses.push(WHERE_OWNER);
                params.push(Box::new(user_id));
            }
            None => clauses.push(WHERE_ANONYMOUS),
        }

        match filter {
            TaskFilter::All => {}
            TaskFilter::Date(date) => {
                clauses.push(WHERE_DUE_DATE);
                params.push(Box::new(date));
            }
            TaskFilter::Week(date) => {
                let week = date.week(Weekday::Mon);
                clauses.push(WHERE_DUE_BETWEEN);
                params.push(Box::new(week.first_day()));
                params.push(Box::new(week.last_day()));
            }
            TaskFilter::Month(date) => {
                clauses.push(WHERE_DUE_MONTH);
                params.push(Box::new(date));
            }
        }

        let sql = format!("{} WHERE {} {}", SELECT_TASKS, clauses.join(" AND "), ORDER_BY_DUE);
        let params_refs: Vec<&dyn ToSql> = params.iter().map(|b| b.as_ref()).collect();

        let mut stmt = self.conn.prepare(&sql)?;
        let task_iter = stmt.query_map(params_refs.as_slice(), |row| {
            Ok(Task {
                id: row.get(0)?,
                user_id: row.get(1)?,
                text: row.get(2)?,
                due_at: row.get(3)?,
                status: row.get(4)?,
                category: row.get(5)?,
            })
        })?;
        let mut tasks = Vec::new();
        for task_result in task_iter {
            tasks.push(task_result?);
        }

        Ok(tasks)
    }
}
