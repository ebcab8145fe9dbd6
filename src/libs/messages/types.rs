#[derive(Debug, Clone)]
pub enum Message {
    // === DATABASE MESSAGES ===
    /// Opening the planner database file failed.
    DbConnectionFailed,

    // === MIGRATION MESSAGES ===
    /// Pending migration count, reported before a run starts.
    MigrationsFound(usize),
    /// Version and name of the migration being applied.
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    /// Version that failed and the error that stopped it.
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    MigrationHistory,
    NothingToRollback,
    /// Recorded version and the target being rolled back to.
    RollingBack(u32, u32),
    RollbackCompleted(u32),
}
