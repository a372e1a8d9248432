/// Tables for one exported account's activity history.
/// Every child table carries `user_id` with a cascading foreign key to `users`.
pub const TABLES: &str = r#"
-- Account identity
CREATE TABLE IF NOT EXISTS users (
    user_id INTEGER PRIMARY KEY,
    username TEXT NOT NULL,
    display_name TEXT,
    email TEXT,
    bio_description TEXT,
    birth_date TEXT,
    account_region TEXT,
    follower_count INTEGER DEFAULT 0,
    following_count INTEGER DEFAULT 0,
    is_deleted INTEGER DEFAULT 0,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);

-- Content
CREATE TABLE IF NOT EXISTS posts (
    user_id INTEGER NOT NULL,
    post_id INTEGER PRIMARY KEY AUTOINCREMENT,
    post_date TIMESTAMP,
    video_link TEXT,
    likes_count INTEGER,
    who_can_view TEXT,
    allow_comments TEXT,
    allow_stitches TEXT,
    allow_duets TEXT,
    allow_stickers TEXT,
    allow_sharing_to_story TEXT,
    content_disclosure TEXT,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS comments (
    user_id INTEGER NOT NULL,
    comment_id INTEGER PRIMARY KEY AUTOINCREMENT,
    comment_date TIMESTAMP,
    comment_text TEXT,
    photo_url TEXT,
    video_url TEXT,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS deleted_posts (
    user_id INTEGER NOT NULL,
    post_id INTEGER PRIMARY KEY AUTOINCREMENT,
    post_date TIMESTAMP,
    delete_date TIMESTAMP,
    video_link TEXT,
    likes_count INTEGER,
    content_disclosure TEXT,
    ai_generated TEXT,
    sound_used TEXT,
    location TEXT,
    title TEXT,
    add_yours_text TEXT,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);

-- Messaging
CREATE TABLE IF NOT EXISTS direct_messages (
    user_id INTEGER NOT NULL,
    message_id INTEGER PRIMARY KEY AUTOINCREMENT,
    message_date TIMESTAMP,
    sender_username TEXT,
    message_content TEXT,
    chat_identifier TEXT,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS group_chats (
    user_id INTEGER NOT NULL,
    message_id INTEGER PRIMARY KEY AUTOINCREMENT,
    message_date TIMESTAMP,
    sender_username TEXT,
    message_content TEXT,
    group_chat_identifier TEXT,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS live_comments (
    user_id INTEGER NOT NULL,
    comment_id INTEGER PRIMARY KEY AUTOINCREMENT,
    comment_time TIMESTAMP,
    comment_content TEXT,
    raw_time INTEGER,
    room_id TEXT,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);

-- Social graph
CREATE TABLE IF NOT EXISTS followers (
    user_id INTEGER NOT NULL,
    follower_id INTEGER PRIMARY KEY AUTOINCREMENT,
    follow_date TIMESTAMP,
    follower_username TEXT,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS following (
    user_id INTEGER NOT NULL,
    following_id INTEGER PRIMARY KEY AUTOINCREMENT,
    follow_date TIMESTAMP,
    following_username TEXT,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS blocked_users (
    user_id INTEGER NOT NULL,
    block_id INTEGER PRIMARY KEY AUTOINCREMENT,
    block_date TIMESTAMP,
    blocked_username TEXT,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);

-- Engagement
CREATE TABLE IF NOT EXISTS liked_videos (
    user_id INTEGER NOT NULL,
    like_id INTEGER PRIMARY KEY AUTOINCREMENT,
    like_date TIMESTAMP,
    video_link TEXT,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS favorite_collections (
    user_id INTEGER NOT NULL,
    collection_id INTEGER PRIMARY KEY AUTOINCREMENT,
    favorite_date TIMESTAMP,
    collection_name TEXT,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS favorite_videos (
    user_id INTEGER NOT NULL,
    video_id INTEGER PRIMARY KEY AUTOINCREMENT,
    favorite_date TIMESTAMP,
    video_link TEXT,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS favorite_comments (
    user_id INTEGER NOT NULL,
    favorite_comment_id INTEGER PRIMARY KEY AUTOINCREMENT,
    comment_text TEXT,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS favorite_effects (
    user_id INTEGER NOT NULL,
    effect_id INTEGER PRIMARY KEY AUTOINCREMENT,
    effect_date TIMESTAMP,
    effect_link TEXT,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS favorite_hashtags (
    user_id INTEGER NOT NULL,
    hashtag_id INTEGER PRIMARY KEY AUTOINCREMENT,
    favorite_date TIMESTAMP,
    hashtag_link TEXT,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS favorite_sounds (
    user_id INTEGER NOT NULL,
    sound_id INTEGER PRIMARY KEY AUTOINCREMENT,
    favorite_date TIMESTAMP,
    sound_link TEXT,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS user_hashtags (
    user_id INTEGER NOT NULL,
    hashtag_id INTEGER PRIMARY KEY AUTOINCREMENT,
    hashtag_name TEXT,
    hashtag_link TEXT,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS reposts (
    user_id INTEGER NOT NULL,
    repost_id INTEGER PRIMARY KEY AUTOINCREMENT,
    repost_date TIMESTAMP,
    video_link TEXT,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS share_history (
    user_id INTEGER NOT NULL,
    share_id INTEGER PRIMARY KEY AUTOINCREMENT,
    share_date TIMESTAMP,
    shared_content TEXT,
    shared_link TEXT,
    share_method TEXT,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);

-- Commerce
CREATE TABLE IF NOT EXISTS coin_purchases (
    user_id INTEGER NOT NULL,
    purchase_id INTEGER PRIMARY KEY AUTOINCREMENT,
    purchase_date TIMESTAMP,
    purchase_type TEXT,
    coin_amount INTEGER,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS purchased_gifts (
    user_id INTEGER NOT NULL,
    purchase_id INTEGER PRIMARY KEY AUTOINCREMENT,
    purchase_date TIMESTAMP,
    price TEXT,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS sent_gifts (
    user_id INTEGER NOT NULL,
    gift_id INTEGER PRIMARY KEY AUTOINCREMENT,
    send_date TIMESTAMP,
    gift_amount TEXT,
    recipient_username TEXT,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS product_browsing (
    user_id INTEGER NOT NULL,
    browse_id INTEGER PRIMARY KEY AUTOINCREMENT,
    browsing_date TIMESTAMP,
    shop_name TEXT,
    product_name TEXT,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);

-- Session telemetry
CREATE TABLE IF NOT EXISTS login_history (
    user_id INTEGER NOT NULL,
    login_id INTEGER PRIMARY KEY AUTOINCREMENT,
    login_date TIMESTAMP,
    ip_address TEXT,
    device_model TEXT,
    device_system TEXT,
    network_type TEXT,
    carrier TEXT,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS searches (
    user_id INTEGER NOT NULL,
    search_id INTEGER PRIMARY KEY AUTOINCREMENT,
    search_date TIMESTAMP,
    search_term TEXT,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS watched_lives (
    user_id INTEGER NOT NULL,
    watch_id INTEGER PRIMARY KEY AUTOINCREMENT,
    watch_time TIMESTAMP,
    live_link TEXT,
    room_id TEXT,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS live_sessions (
    user_id INTEGER NOT NULL,
    live_id INTEGER PRIMARY KEY AUTOINCREMENT,
    live_start_time TIMESTAMP,
    live_end_time TIMESTAMP,
    room_id TEXT,
    cover_uri TEXT,
    replay_url TEXT,
    total_earning TEXT,
    total_likes INTEGER,
    total_views INTEGER,
    quality_setting TEXT,
    room_title TEXT,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);

-- Audit logs for rows that failed a format check at insert time
CREATE TABLE IF NOT EXISTS date_validation_log (
    log_id INTEGER PRIMARY KEY AUTOINCREMENT,
    table_name TEXT NOT NULL,
    user_id INTEGER NOT NULL,
    column_name TEXT NOT NULL,
    invalid_value TEXT,
    row_id INTEGER,
    validation_type TEXT DEFAULT 'format_validation',
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS data_validation_log (
    log_id INTEGER PRIMARY KEY AUTOINCREMENT,
    table_name TEXT NOT NULL,
    user_id INTEGER NOT NULL,
    column_name TEXT NOT NULL,
    issue_type TEXT,
    invalid_value TEXT,
    validation_type TEXT DEFAULT 'data_validation',
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);
"#;

/// Lookup indexes; every dated child table gets a `(user_id, date)` index
pub const INDEXES: &str = r#"
CREATE INDEX IF NOT EXISTS idx_users_username ON users(username);
CREATE INDEX IF NOT EXISTS idx_users_created_at ON users(created_at);
CREATE INDEX IF NOT EXISTS idx_users_is_deleted ON users(is_deleted);

CREATE INDEX IF NOT EXISTS idx_comments_user_date ON comments(user_id, comment_date);
CREATE INDEX IF NOT EXISTS idx_posts_user_date ON posts(user_id, post_date);
CREATE INDEX IF NOT EXISTS idx_direct_messages_user_date ON direct_messages(user_id, message_date);
CREATE INDEX IF NOT EXISTS idx_group_chats_user_date ON group_chats(user_id, message_date);
CREATE INDEX IF NOT EXISTS idx_liked_videos_user_date ON liked_videos(user_id, like_date);
CREATE INDEX IF NOT EXISTS idx_followers_user_date ON followers(user_id, follow_date);
CREATE INDEX IF NOT EXISTS idx_following_user_date ON following(user_id, follow_date);
CREATE INDEX IF NOT EXISTS idx_login_history_user_date ON login_history(user_id, login_date);
CREATE INDEX IF NOT EXISTS idx_searches_user_date ON searches(user_id, search_date);
CREATE INDEX IF NOT EXISTS idx_coin_purchases_user_date ON coin_purchases(user_id, purchase_date);
CREATE INDEX IF NOT EXISTS idx_favorite_videos_user_date ON favorite_videos(user_id, favorite_date);
CREATE INDEX IF NOT EXISTS idx_blocked_users_user_date ON blocked_users(user_id, block_date);
CREATE INDEX IF NOT EXISTS idx_deleted_posts_user_date ON deleted_posts(user_id, post_date);
CREATE INDEX IF NOT EXISTS idx_live_sessions_user_date ON live_sessions(user_id, live_start_time);
CREATE INDEX IF NOT EXISTS idx_watched_lives_user_date ON watched_lives(user_id, watch_time);
CREATE INDEX IF NOT EXISTS idx_reposts_user_date ON reposts(user_id, repost_date);
CREATE INDEX IF NOT EXISTS idx_share_history_user_date ON share_history(user_id, share_date);
CREATE INDEX IF NOT EXISTS idx_sent_gifts_user_date ON sent_gifts(user_id, send_date);
CREATE INDEX IF NOT EXISTS idx_purchased_gifts_user_date ON purchased_gifts(user_id, purchase_date);

CREATE INDEX IF NOT EXISTS idx_comments_date ON comments(comment_date);
CREATE INDEX IF NOT EXISTS idx_posts_date ON posts(post_date);
CREATE INDEX IF NOT EXISTS idx_direct_messages_date ON direct_messages(message_date);
CREATE INDEX IF NOT EXISTS idx_liked_videos_date ON liked_videos(like_date);
CREATE INDEX IF NOT EXISTS idx_login_history_date ON login_history(login_date);
CREATE INDEX IF NOT EXISTS idx_searches_date ON searches(search_date);
CREATE INDEX IF NOT EXISTS idx_followers_date ON followers(follow_date);
CREATE INDEX IF NOT EXISTS idx_following_date ON following(follow_date);
CREATE INDEX IF NOT EXISTS idx_favorite_videos_date ON favorite_videos(favorite_date);
CREATE INDEX IF NOT EXISTS idx_live_sessions_start ON live_sessions(live_start_time);
CREATE INDEX IF NOT EXISTS idx_live_sessions_end ON live_sessions(live_end_time);

CREATE INDEX IF NOT EXISTS idx_comments_text ON comments(comment_text);
CREATE INDEX IF NOT EXISTS idx_searches_term ON searches(search_term);
CREATE INDEX IF NOT EXISTS idx_followers_username ON followers(follower_username);
CREATE INDEX IF NOT EXISTS idx_following_username ON following(following_username);
CREATE INDEX IF NOT EXISTS idx_blocked_users_username ON blocked_users(blocked_username);

CREATE INDEX IF NOT EXISTS idx_date_validation_user ON date_validation_log(user_id, table_name);
CREATE INDEX IF NOT EXISTS idx_date_validation_created ON date_validation_log(created_at);
CREATE INDEX IF NOT EXISTS idx_data_validation_user ON data_validation_log(user_id, table_name);
"#;
