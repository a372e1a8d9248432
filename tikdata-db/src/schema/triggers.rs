/// A timestamp column whose inserted values are checked against the
/// accepted date layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateColumn {
    /// Name of the `BEFORE INSERT` trigger guarding the column
    pub trigger: &'static str,
    pub table: &'static str,
    pub column: &'static str,
    /// Primary key recorded as `row_id` in the log
    pub row_key: &'static str,
}

impl DateColumn {
    const fn new(
        trigger: &'static str,
        table: &'static str,
        column: &'static str,
        row_key: &'static str,
    ) -> Self {
        Self {
            trigger,
            table,
            column,
            row_key,
        }
    }
}

/// Date columns covered by format-validation triggers
pub const DATE_COLUMNS: &[DateColumn] = &[
    DateColumn::new("validate_post_date", "posts", "post_date", "post_id"),
    DateColumn::new("validate_comment_date", "comments", "comment_date", "comment_id"),
    DateColumn::new("validate_message_date", "direct_messages", "message_date", "message_id"),
    DateColumn::new("validate_like_date", "liked_videos", "like_date", "like_id"),
    DateColumn::new("validate_login_date", "login_history", "login_date", "login_id"),
    DateColumn::new("validate_search_date", "searches", "search_date", "search_id"),
];

/// GLOB patterns a date value must match one of
pub const DATE_PATTERNS: [&str; 3] = [
    "????-??-?? ??:??:??",
    "????-??-??T??:??:??*",
    "????-??-??",
];

/// Trigger that logs a malformed value of `date` without blocking the insert
pub fn date_trigger_sql(date: &DateColumn) -> String {
    let column = date.column;
    let mismatches = DATE_PATTERNS
        .iter()
        .map(|pattern| format!("    NEW.{column} NOT GLOB '{pattern}'"))
        .collect::<Vec<_>>()
        .join(" AND\n");

    format!(
        "CREATE TRIGGER IF NOT EXISTS {name}
BEFORE INSERT ON {table}
FOR EACH ROW
WHEN (
    NEW.{column} IS NOT NULL AND
    NEW.{column} != '' AND
{mismatches}
)
BEGIN
    INSERT INTO date_validation_log (table_name, user_id, column_name, invalid_value, row_id, validation_type)
    VALUES ('{table}', NEW.user_id, '{column}', NEW.{column}, NEW.{row_key}, 'format_validation');
END;
",
        name = date.trigger,
        table = date.table,
        row_key = date.row_key,
    )
}

pub fn date_triggers_sql() -> String {
    DATE_COLUMNS
        .iter()
        .map(date_trigger_sql)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Triggers on `users`. Issues are recorded in `data_validation_log`;
/// none of them reject the row.
pub const USER_TRIGGERS: &str = r#"
CREATE TRIGGER IF NOT EXISTS validate_user_data
AFTER INSERT ON users
FOR EACH ROW
BEGIN
    INSERT INTO data_validation_log (table_name, user_id, column_name, issue_type, invalid_value, validation_type)
    SELECT 'users', NEW.user_id, 'username', 'length_validation', NEW.username, 'data_validation'
    WHERE LENGTH(NEW.username) < 3 OR LENGTH(NEW.username) > 50;

    INSERT INTO data_validation_log (table_name, user_id, column_name, issue_type, invalid_value, validation_type)
    SELECT 'users', NEW.user_id, 'email', 'format_validation', NEW.email, 'data_validation'
    WHERE NEW.email IS NOT NULL AND NEW.email != '' AND NEW.email NOT LIKE '%_@_%._%';
END;

CREATE TRIGGER IF NOT EXISTS prevent_duplicate_username
AFTER INSERT ON users
FOR EACH ROW
WHEN (SELECT COUNT(*) FROM users WHERE username = NEW.username) > 1
BEGIN
    INSERT INTO data_validation_log (table_name, user_id, column_name, issue_type, invalid_value, validation_type)
    VALUES ('users', NEW.user_id, 'username', 'duplicate_username', NEW.username, 'data_validation');
END;

CREATE TRIGGER IF NOT EXISTS update_user_timestamp
AFTER UPDATE ON users
FOR EACH ROW
BEGIN
    UPDATE users SET updated_at = CURRENT_TIMESTAMP WHERE user_id = NEW.user_id;
END;
"#;

pub const USER_TRIGGER_NAMES: [&str; 3] = [
    "validate_user_data",
    "prevent_duplicate_username",
    "update_user_timestamp",
];
