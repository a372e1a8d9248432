use serde::{Deserialize, Serialize};

/// Kind of object recorded in `sqlite_master`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Table,
    Index,
    Trigger,
    View,
}

impl ObjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Table => "table",
            ObjectKind::Index => "index",
            ObjectKind::Trigger => "trigger",
            ObjectKind::View => "view",
        }
    }
}

/// `issue_type` values written to `data_validation_log`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    LengthValidation,
    FormatValidation,
    DuplicateUsername,
}

impl IssueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::LengthValidation => "length_validation",
            IssueType::FormatValidation => "format_validation",
            IssueType::DuplicateUsername => "duplicate_username",
        }
    }
}

/// Grade reported by `vw_user_data_quality`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DataQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl DataQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataQuality::Excellent => "Excellent",
            DataQuality::Good => "Good",
            DataQuality::Fair => "Fair",
            DataQuality::Poor => "Poor",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Excellent" => Some(DataQuality::Excellent),
            "Good" => Some(DataQuality::Good),
            "Fair" => Some(DataQuality::Fair),
            "Poor" => Some(DataQuality::Poor),
            _ => None,
        }
    }

    /// Same thresholds as the view's CASE expression
    pub fn from_issue_count(total_issues: i64) -> Self {
        match total_issues {
            i64::MIN..=0 => DataQuality::Excellent,
            1..=10 => DataQuality::Good,
            11..=50 => DataQuality::Fair,
            _ => DataQuality::Poor,
        }
    }
}

/// SQLite `journal_mode` pragma values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum JournalMode {
    Delete,
    Truncate,
    Persist,
    Memory,
    #[default]
    Wal,
    Off,
}

impl JournalMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            JournalMode::Delete => "DELETE",
            JournalMode::Truncate => "TRUNCATE",
            JournalMode::Persist => "PERSIST",
            JournalMode::Memory => "MEMORY",
            JournalMode::Wal => "WAL",
            JournalMode::Off => "OFF",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "DELETE" => Some(JournalMode::Delete),
            "TRUNCATE" => Some(JournalMode::Truncate),
            "PERSIST" => Some(JournalMode::Persist),
            "MEMORY" => Some(JournalMode::Memory),
            "WAL" => Some(JournalMode::Wal),
            "OFF" => Some(JournalMode::Off),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_kind_matches_sqlite_master_type() {
        assert_eq!(ObjectKind::Table.as_str(), "table");
        assert_eq!(ObjectKind::Index.as_str(), "index");
        assert_eq!(ObjectKind::Trigger.as_str(), "trigger");
        assert_eq!(ObjectKind::View.as_str(), "view");
    }

    #[test]
    fn test_data_quality_thresholds() {
        assert_eq!(DataQuality::from_issue_count(0), DataQuality::Excellent);
        assert_eq!(DataQuality::from_issue_count(1), DataQuality::Good);
        assert_eq!(DataQuality::from_issue_count(10), DataQuality::Good);
        assert_eq!(DataQuality::from_issue_count(11), DataQuality::Fair);
        assert_eq!(DataQuality::from_issue_count(50), DataQuality::Fair);
        assert_eq!(DataQuality::from_issue_count(51), DataQuality::Poor);
    }

    #[test]
    fn test_issue_type_strings_match_log_values() {
        assert_eq!(IssueType::LengthValidation.as_str(), "length_validation");
        assert_eq!(IssueType::FormatValidation.as_str(), "format_validation");
        assert_eq!(IssueType::DuplicateUsername.as_str(), "duplicate_username");
    }

    #[test]
    fn test_journal_mode_parse() {
        assert_eq!(JournalMode::parse(" wal "), Some(JournalMode::Wal));
        assert_eq!(JournalMode::parse("delete"), Some(JournalMode::Delete));
        assert_eq!(JournalMode::parse("rollback"), None);
        assert_eq!(JournalMode::default(), JournalMode::Wal);
    }
}
