//! Database schema and migrations for Mirolite.
//!
//! This module contains all database migrations that will be applied
//! sequentially when the database is first opened or upgraded.

/// Database migrations.
///
/// Each migration is a SQL script that will be executed in order.
/// The schema_version table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: Roles and users for authentication
    r#"
-- Roles referenced by users; no behavior beyond the foreign key
CREATE TABLE roles (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    name    TEXT NOT NULL UNIQUE
);

INSERT INTO roles (name) VALUES ('member');
INSERT INTO roles (name) VALUES ('admin');

-- Users table for authentication
CREATE TABLE users (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    username    TEXT NOT NULL UNIQUE,
    email       TEXT NOT NULL UNIQUE,
    password    TEXT NOT NULL,           -- Argon2 hash
    role_id     INTEGER NOT NULL DEFAULT 1 REFERENCES roles(id),
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL
);

CREATE INDEX idx_users_email ON users(email);
"#,
    // v2: Boards with ownership and visibility
    r#"
CREATE TABLE boards (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    creator_id  INTEGER NOT NULL REFERENCES users(id),
    is_public   INTEGER NOT NULL DEFAULT 0,
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL
);

CREATE INDEX idx_boards_creator_id ON boards(creator_id);
"#,
    // v3: Explicit per-user board permissions
    r#"
CREATE TABLE board_permissions (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    board_id    INTEGER NOT NULL REFERENCES boards(id),
    user_id     INTEGER NOT NULL REFERENCES users(id),
    can_edit    INTEGER NOT NULL DEFAULT 0,
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL,
    UNIQUE(board_id, user_id)
);

CREATE INDEX idx_board_permissions_board_id ON board_permissions(board_id);
CREATE INDEX idx_board_permissions_user_id ON board_permissions(user_id);
"#,
    // v4: Positioned canvas elements
    r#"
CREATE TABLE board_elements (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    board_id    INTEGER NOT NULL REFERENCES boards(id),
    type        TEXT NOT NULL,
    content     TEXT NOT NULL DEFAULT '',
    position_x  INTEGER NOT NULL DEFAULT 0,
    position_y  INTEGER NOT NULL DEFAULT 0,
    width       INTEGER NOT NULL DEFAULT 0,
    height      INTEGER NOT NULL DEFAULT 0,
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL
);

CREATE INDEX idx_board_elements_board_id ON board_elements(board_id);
"#,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_not_empty() {
        assert!(!MIGRATIONS.is_empty());
    }

    #[test]
    fn test_first_migration_contains_users_table() {
        let first = MIGRATIONS[0];
        assert!(first.contains("CREATE TABLE users"));
        assert!(first.contains("username"));
        assert!(first.contains("password"));
        assert!(first.contains("email"));
    }

    #[test]
    fn test_permission_migration_enforces_uniqueness() {
        let sql = MIGRATIONS[2];
        assert!(sql.contains("UNIQUE(board_id, user_id)"));
    }
}
