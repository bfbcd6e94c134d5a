//! Raw SQL file application.
//!
//! The session table used by the web tier is owned by a plain `.sql` file
//! rather than a SeaORM migration; this module reads such a file and executes
//! it as one unprepared batch.

use sea_orm::{ConnectionTrait, DatabaseConnection};
use std::fs;
use std::path::Path;

use crate::error::{AppError, AppResult};

/// Read a SQL file, rejecting missing and empty files.
pub fn read_sql_file(path: &Path) -> AppResult<String> {
    let sql = fs::read_to_string(path).map_err(|e| {
        AppError::Io(format!("Failed to read SQL file {}: {}", path.display(), e))
    })?;

    if sql.trim().is_empty() {
        return Err(AppError::InvalidInput(format!(
            "SQL file {} is empty",
            path.display()
        )));
    }

    Ok(sql)
}

/// Apply a SQL file against the database as a single unprepared batch.
pub async fn apply_sql_file(db: &DatabaseConnection, path: &Path) -> AppResult<()> {
    let sql = read_sql_file(path)?;
    db.execute_unprepared(&sql).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_valid_file() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        writeln!(file, "CREATE TABLE IF NOT EXISTS t (id INT);").expect("write");

        let sql = read_sql_file(file.path()).expect("read should succeed");
        assert!(sql.contains("CREATE TABLE"));
    }

    #[test]
    fn test_missing_file_error_names_path() {
        let result = read_sql_file(Path::new("/nonexistent/rigops/session_table.sql"));
        let err = result.expect_err("missing file should be an error");
        assert!(err.to_string().contains("session_table.sql"));
    }

    #[test]
    fn test_empty_file_rejected() {
        let file = tempfile::NamedTempFile::new().expect("create temp file");

        let result = read_sql_file(file.path());
        let err = result.expect_err("empty file should be an error");
        assert!(err.to_string().contains("is empty"));
    }

    #[test]
    fn test_whitespace_only_file_rejected() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        write!(file, "\n\n   \t\n").expect("write");

        let result = read_sql_file(file.path());
        assert!(result.is_err());
    }
}
