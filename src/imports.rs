pub const IMPORTS: &str = r#"
    PRAGMA synchronous = normal;
    PRAGMA temp_store = memory;

    CREATE TABLE IF NOT EXISTS comics (
        id INTEGER NOT NULL,
        imageURL TEXT,

        PRIMARY KEY (id)
    );

    CREATE TABLE IF NOT EXISTS prefs (
        key TEXT NOT NULL,
        val TEXT NOT NULL,

        PRIMARY KEY (key)
    );
"#;
