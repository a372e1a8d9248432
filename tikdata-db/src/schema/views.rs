/// Reporting views. Soft-deleted users (`is_deleted = 1`) are excluded
/// everywhere except `vw_user_statistics`.
pub const VIEWS: &str = r#"
CREATE VIEW IF NOT EXISTS vw_user_activity_summary AS
SELECT
    u.user_id,
    u.username,
    u.display_name,
    u.follower_count,
    u.following_count,
    (SELECT COUNT(*) FROM posts p WHERE p.user_id = u.user_id) AS total_posts,
    (SELECT COUNT(*) FROM comments c WHERE c.user_id = u.user_id) AS total_comments,
    (SELECT COUNT(*) FROM liked_videos l WHERE l.user_id = u.user_id) AS total_likes,
    (SELECT COUNT(*) FROM followers f WHERE f.user_id = u.user_id) AS total_followers,
    (SELECT COUNT(*) FROM following f WHERE f.user_id = u.user_id) AS total_following,
    (SELECT MAX(login_date) FROM login_history l WHERE l.user_id = u.user_id) AS last_login,
    (SELECT COUNT(*) FROM searches s WHERE s.user_id = u.user_id) AS total_searches,
    (SELECT COUNT(*) FROM live_sessions ls WHERE ls.user_id = u.user_id) AS total_lives,
    u.created_at,
    u.updated_at
FROM users u
WHERE u.is_deleted = 0;

CREATE VIEW IF NOT EXISTS vw_monthly_activity AS
SELECT user_id, strftime('%Y-%m', post_date) AS month, 'posts' AS activity_type, COUNT(*) AS count
FROM posts
WHERE post_date IS NOT NULL
GROUP BY user_id, strftime('%Y-%m', post_date)
UNION ALL
SELECT user_id, strftime('%Y-%m', comment_date) AS month, 'comments' AS activity_type, COUNT(*) AS count
FROM comments
WHERE comment_date IS NOT NULL
GROUP BY user_id, strftime('%Y-%m', comment_date)
UNION ALL
SELECT user_id, strftime('%Y-%m', like_date) AS month, 'likes' AS activity_type, COUNT(*) AS count
FROM liked_videos
WHERE like_date IS NOT NULL
GROUP BY user_id, strftime('%Y-%m', like_date)
UNION ALL
SELECT user_id, strftime('%Y-%m', search_date) AS month, 'searches' AS activity_type, COUNT(*) AS count
FROM searches
WHERE search_date IS NOT NULL
GROUP BY user_id, strftime('%Y-%m', search_date)
ORDER BY month DESC, user_id, activity_type;

CREATE VIEW IF NOT EXISTS vw_engagement_metrics AS
SELECT
    u.user_id,
    u.username,
    COALESCE(p.post_count, 0) AS posts,
    COALESCE(c.comment_count, 0) AS comments,
    COALESCE(l.like_count, 0) AS likes,
    COALESCE(f1.follower_count, 0) AS followers,
    COALESCE(f2.following_count, 0) AS following,
    COALESCE(s.search_count, 0) AS searches,
    COALESCE(ls.live_count, 0) AS lives,
    COALESCE(p.post_count, 0) + COALESCE(c.comment_count, 0) + COALESCE(l.like_count, 0) AS total_engagement
FROM users u
LEFT JOIN (SELECT user_id, COUNT(*) AS post_count FROM posts GROUP BY user_id) p
    ON u.user_id = p.user_id
LEFT JOIN (SELECT user_id, COUNT(*) AS comment_count FROM comments GROUP BY user_id) c
    ON u.user_id = c.user_id
LEFT JOIN (SELECT user_id, COUNT(*) AS like_count FROM liked_videos GROUP BY user_id) l
    ON u.user_id = l.user_id
LEFT JOIN (SELECT user_id, COUNT(*) AS follower_count FROM followers GROUP BY user_id) f1
    ON u.user_id = f1.user_id
LEFT JOIN (SELECT user_id, COUNT(*) AS following_count FROM following GROUP BY user_id) f2
    ON u.user_id = f2.user_id
LEFT JOIN (SELECT user_id, COUNT(*) AS search_count FROM searches GROUP BY user_id) s
    ON u.user_id = s.user_id
LEFT JOIN (SELECT user_id, COUNT(*) AS live_count FROM live_sessions GROUP BY user_id) ls
    ON u.user_id = ls.user_id
WHERE u.is_deleted = 0
ORDER BY total_engagement DESC;

CREATE VIEW IF NOT EXISTS vw_date_validation_report AS
SELECT
    dvl.table_name,
    dvl.user_id,
    u.username,
    dvl.column_name,
    COUNT(*) AS invalid_count,
    GROUP_CONCAT(DISTINCT SUBSTR(dvl.invalid_value, 1, 50)) AS sample_values,
    MIN(dvl.created_at) AS first_detected,
    MAX(dvl.created_at) AS last_detected
FROM date_validation_log dvl
JOIN users u ON dvl.user_id = u.user_id
WHERE u.is_deleted = 0
GROUP BY dvl.table_name, dvl.user_id, dvl.column_name
ORDER BY invalid_count DESC, dvl.user_id;

CREATE VIEW IF NOT EXISTS vw_data_validation_report AS
SELECT
    dvl.table_name,
    dvl.user_id,
    u.username,
    dvl.column_name,
    dvl.issue_type,
    COUNT(*) AS issue_count,
    GROUP_CONCAT(DISTINCT SUBSTR(dvl.invalid_value, 1, 50)) AS sample_values
FROM data_validation_log dvl
JOIN users u ON dvl.user_id = u.user_id
WHERE u.is_deleted = 0
GROUP BY dvl.table_name, dvl.user_id, dvl.column_name, dvl.issue_type
ORDER BY issue_count DESC, dvl.user_id;

CREATE VIEW IF NOT EXISTS vw_user_data_quality AS
SELECT
    u.user_id,
    u.username,
    COALESCE(d.date_issues, 0) AS date_validation_issues,
    COALESCE(v.data_issues, 0) AS data_validation_issues,
    COALESCE(d.date_issues, 0) + COALESCE(v.data_issues, 0) AS total_issues,
    CASE
        WHEN COALESCE(d.date_issues, 0) + COALESCE(v.data_issues, 0) = 0 THEN 'Excellent'
        WHEN COALESCE(d.date_issues, 0) + COALESCE(v.data_issues, 0) <= 10 THEN 'Good'
        WHEN COALESCE(d.date_issues, 0) + COALESCE(v.data_issues, 0) <= 50 THEN 'Fair'
        ELSE 'Poor'
    END AS data_quality
FROM users u
LEFT JOIN (SELECT user_id, COUNT(*) AS date_issues FROM date_validation_log GROUP BY user_id) d
    ON u.user_id = d.user_id
LEFT JOIN (SELECT user_id, COUNT(*) AS data_issues FROM data_validation_log GROUP BY user_id) v
    ON u.user_id = v.user_id
WHERE u.is_deleted = 0
ORDER BY total_issues DESC;

CREATE VIEW IF NOT EXISTS vw_top_search_terms AS
SELECT
    s.user_id,
    u.username,
    s.search_term,
    COUNT(*) AS search_count,
    MIN(s.search_date) AS first_searched,
    MAX(s.search_date) AS last_searched
FROM searches s
JOIN users u ON s.user_id = u.user_id
WHERE u.is_deleted = 0
GROUP BY s.user_id, s.search_term
ORDER BY search_count DESC;

CREATE VIEW IF NOT EXISTS vw_most_liked_content AS
SELECT
    p.user_id,
    u.username,
    p.post_id,
    p.video_link,
    p.likes_count,
    p.post_date,
    p.content_disclosure
FROM posts p
JOIN users u ON p.user_id = u.user_id
WHERE u.is_deleted = 0 AND p.likes_count > 0
ORDER BY p.likes_count DESC
LIMIT 100;

CREATE VIEW IF NOT EXISTS vw_user_relationships AS
SELECT
    u1.user_id AS user_id,
    u1.username AS username,
    COUNT(DISTINCT f1.follower_username) AS followers_count,
    COUNT(DISTINCT f2.following_username) AS following_count,
    COUNT(DISTINCT b.blocked_username) AS blocked_count
FROM users u1
LEFT JOIN followers f1 ON u1.user_id = f1.user_id
LEFT JOIN following f2 ON u1.user_id = f2.user_id
LEFT JOIN blocked_users b ON u1.user_id = b.user_id
WHERE u1.is_deleted = 0
GROUP BY u1.user_id, u1.username;

CREATE VIEW IF NOT EXISTS vw_active_users AS
SELECT * FROM users WHERE is_deleted = 0 ORDER BY created_at DESC;

CREATE VIEW IF NOT EXISTS vw_user_statistics AS
SELECT
    COUNT(DISTINCT user_id) AS total_users,
    COUNT(DISTINCT CASE WHEN is_deleted = 0 THEN user_id END) AS active_users,
    COUNT(DISTINCT CASE WHEN is_deleted = 1 THEN user_id END) AS deleted_users,
    MIN(created_at) AS first_user_joined,
    MAX(created_at) AS last_user_joined
FROM users;

CREATE VIEW IF NOT EXISTS vw_table_statistics AS
SELECT 'users' AS table_name, COUNT(*) AS row_count FROM users WHERE is_deleted = 0
UNION ALL
SELECT 'posts' AS table_name, COUNT(*) AS row_count FROM posts
UNION ALL
SELECT 'comments' AS table_name, COUNT(*) AS row_count FROM comments
UNION ALL
SELECT 'liked_videos' AS table_name, COUNT(*) AS row_count FROM liked_videos
UNION ALL
SELECT 'followers' AS table_name, COUNT(*) AS row_count FROM followers
UNION ALL
SELECT 'following' AS table_name, COUNT(*) AS row_count FROM following
UNION ALL
SELECT 'searches' AS table_name, COUNT(*) AS row_count FROM searches
UNION ALL
SELECT 'login_history' AS table_name, COUNT(*) AS row_count FROM login_history
ORDER BY row_count DESC;
"#;
