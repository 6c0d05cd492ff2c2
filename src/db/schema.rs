/// Table definitions in creation order. Every statement is
/// `CREATE TABLE IF NOT EXISTS`, so the whole list is replayed on each start.
pub const TABLES: &[(&str, &str)] = &[
    (
        "plants",
        "CREATE TABLE IF NOT EXISTS plants (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            species TEXT,
            age TEXT,
            planting_date DATETIME,
            location TEXT,
            health_status TEXT,
            last_care DATETIME,
            image_url TEXT,
            category TEXT,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )",
    ),
    (
        "growth_logs",
        "CREATE TABLE IF NOT EXISTS growth_logs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            plant_id INTEGER,
            height REAL,
            leaf_count INTEGER,
            health_score INTEGER,
            note TEXT,
            image_url TEXT,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY(plant_id) REFERENCES plants(id)
        )",
    ),
    (
        "supplies",
        "CREATE TABLE IF NOT EXISTS supplies (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            category TEXT,
            description TEXT,
            price REAL,
            usage_guide TEXT,
            side_effects TEXT,
            store_url TEXT,
            image_url TEXT
        )",
    ),
    (
        "saved_news",
        "CREATE TABLE IF NOT EXISTS saved_news (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT,
            url TEXT,
            snippet TEXT,
            summary TEXT,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )",
    ),
    (
        "diary",
        "CREATE TABLE IF NOT EXISTS diary (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            plant_id INTEGER,
            content TEXT,
            image_url TEXT,
            type TEXT,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY(plant_id) REFERENCES plants(id)
        )",
    ),
    (
        "community_posts",
        "CREATE TABLE IF NOT EXISTS community_posts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            author TEXT,
            nickname TEXT,
            content TEXT,
            image_url TEXT,
            likes INTEGER DEFAULT 0,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )",
    ),
    (
        "comments",
        "CREATE TABLE IF NOT EXISTS comments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            post_id INTEGER,
            author TEXT,
            content TEXT,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY(post_id) REFERENCES community_posts(id)
        )",
    ),
    (
        "comment_replies",
        "CREATE TABLE IF NOT EXISTS comment_replies (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            comment_id INTEGER,
            author TEXT,
            content TEXT,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY(comment_id) REFERENCES comments(id)
        )",
    ),
    (
        "expenses",
        "CREATE TABLE IF NOT EXISTS expenses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            plant_id INTEGER,
            type TEXT,
            amount REAL,
            description TEXT,
            date DATETIME DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY(plant_id) REFERENCES plants(id)
        )",
    ),
    (
        "reminders",
        "CREATE TABLE IF NOT EXISTS reminders (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            plant_id INTEGER,
            title TEXT,
            time DATETIME,
            status TEXT DEFAULT 'pending',
            FOREIGN KEY(plant_id) REFERENCES plants(id)
        )",
    ),
    (
        "news_bookmarks",
        "CREATE TABLE IF NOT EXISTS news_bookmarks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT,
            url TEXT,
            snippet TEXT,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )",
    ),
];
