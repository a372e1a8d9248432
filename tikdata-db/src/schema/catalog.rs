use tikdata_types::ObjectKind;

use super::tables::INDEXES;
use super::triggers::{DATE_COLUMNS, USER_TRIGGER_NAMES};

pub const TABLE_NAMES: [&str; 30] = [
    "users",
    "posts",
    "comments",
    "deleted_posts",
    "direct_messages",
    "group_chats",
    "live_comments",
    "followers",
    "following",
    "blocked_users",
    "liked_videos",
    "favorite_collections",
    "favorite_videos",
    "favorite_comments",
    "favorite_effects",
    "favorite_hashtags",
    "favorite_sounds",
    "user_hashtags",
    "reposts",
    "share_history",
    "coin_purchases",
    "purchased_gifts",
    "sent_gifts",
    "product_browsing",
    "login_history",
    "searches",
    "watched_lives",
    "live_sessions",
    "date_validation_log",
    "data_validation_log",
];

pub const VIEW_NAMES: [&str; 12] = [
    "vw_user_activity_summary",
    "vw_monthly_activity",
    "vw_engagement_metrics",
    "vw_date_validation_report",
    "vw_data_validation_report",
    "vw_user_data_quality",
    "vw_top_search_terms",
    "vw_most_liked_content",
    "vw_user_relationships",
    "vw_active_users",
    "vw_user_statistics",
    "vw_table_statistics",
];

pub fn trigger_names() -> Vec<String> {
    DATE_COLUMNS
        .iter()
        .map(|d| d.trigger.to_string())
        .chain(USER_TRIGGER_NAMES.iter().map(|name| name.to_string()))
        .collect()
}

/// Names of every `CREATE INDEX` in the index script
pub fn index_names() -> Vec<&'static str> {
    INDEXES
        .lines()
        .filter_map(|line| line.trim().strip_prefix("CREATE INDEX IF NOT EXISTS "))
        .filter_map(|rest| rest.split_whitespace().next())
        .collect()
}

/// Every object a fully provisioned database contains
pub fn expected_objects() -> Vec<(ObjectKind, String)> {
    let tables = TABLE_NAMES
        .iter()
        .map(|name| (ObjectKind::Table, name.to_string()));
    let views = VIEW_NAMES
        .iter()
        .map(|name| (ObjectKind::View, name.to_string()));
    let triggers = trigger_names()
        .into_iter()
        .map(|name| (ObjectKind::Trigger, name));
    let indexes = index_names()
        .into_iter()
        .map(|name| (ObjectKind::Index, name.to_string()));

    tables.chain(views).chain(triggers).chain(indexes).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_names_parsed_from_script() {
        let names = index_names();
        assert_eq!(names.len(), 41);
        assert!(names.contains(&"idx_users_username"));
        assert!(names.contains(&"idx_data_validation_user"));
        assert!(names.iter().all(|name| name.starts_with("idx_")));
    }

    #[test]
    fn test_every_date_column_belongs_to_a_known_table() {
        for date in DATE_COLUMNS {
            assert!(
                TABLE_NAMES.contains(&date.table),
                "{} is not a schema table",
                date.table
            );
        }
    }

    #[test]
    fn test_expected_object_totals() {
        let objects = expected_objects();
        let count = |kind: ObjectKind| objects.iter().filter(|(k, _)| *k == kind).count();

        assert_eq!(count(ObjectKind::Table), 30);
        assert_eq!(count(ObjectKind::View), 12);
        assert_eq!(count(ObjectKind::Trigger), DATE_COLUMNS.len() + 3);
        assert_eq!(count(ObjectKind::Index), 41);
    }
}
