//! SQL statements for the `todo_items` table. Pure data, no I/O.

/// Creates the table when it does not exist yet. The schema is never altered
/// afterwards. `status` deliberately has no CHECK constraint; unknown values
/// are rejected when rows are read.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS todo_items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    status TEXT NOT NULL DEFAULT 'Doing',
    int_example INTEGER NOT NULL DEFAULT 0,
    double_example REAL NOT NULL DEFAULT 0,
    created_at TEXT DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ', 'now')),
    updated_at TEXT DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ', 'now'))
);

CREATE INDEX IF NOT EXISTS idx_todo_items_status ON todo_items(status);
"#;

pub const INSERT_ITEM: &str = r#"
INSERT INTO todo_items (title, description)
VALUES (?1, ?2)
"#;

pub const COUNT_LIVE_ITEMS: &str = r#"
SELECT COUNT(*) FROM todo_items
WHERE status <> 'Deleted'
"#;

pub const SELECT_LIVE_ITEMS_PAGE: &str = r#"
SELECT id, title, description, status, int_example, double_example, created_at, updated_at
FROM todo_items
WHERE status <> 'Deleted'
ORDER BY id DESC
LIMIT ?1 OFFSET ?2
"#;

pub const SELECT_ITEM_BY_ID: &str = r#"
SELECT id, title, description, status, int_example, double_example, created_at, updated_at
FROM todo_items
WHERE id = ?1
"#;

pub const SOFT_DELETE_ITEM: &str = r#"
UPDATE todo_items
SET status = 'Deleted', updated_at = strftime('%Y-%m-%dT%H:%M:%SZ', 'now')
WHERE id = ?1
"#;

/// Builds the partial UPDATE for the given column names. Values bind as
/// `?1..?n` in the same order and the id binds last as `?{n+1}`.
pub fn update_item_sql(columns: &[&str]) -> String {
    let assignments: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{column} = ?{}", i + 1))
        .collect();
    format!(
        "UPDATE todo_items SET {}, updated_at = strftime('%Y-%m-%dT%H:%M:%SZ', 'now') WHERE id = ?{}",
        assignments.join(", "),
        columns.len() + 1
    )
}
