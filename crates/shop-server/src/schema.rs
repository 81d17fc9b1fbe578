//! Relational schema of the shop. Every statement is idempotent so the script can be
//! applied on each start.

pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS product (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT    NOT NULL UNIQUE,
    description TEXT    NOT NULL DEFAULT '',
    price       INTEGER NOT NULL CHECK (price >= 0)
);

CREATE TABLE IF NOT EXISTS product_image (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    product_id  INTEGER NOT NULL REFERENCES product (id) ON DELETE CASCADE,
    image_path  TEXT    NOT NULL
);

CREATE TABLE IF NOT EXISTS sales_outlet (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    address     TEXT    NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS product_stock (
    sales_outlet_id INTEGER NOT NULL REFERENCES sales_outlet (id) ON DELETE CASCADE,
    product_id      INTEGER NOT NULL REFERENCES product (id) ON DELETE CASCADE,
    size            INTEGER NOT NULL,
    amount          INTEGER NOT NULL CHECK (amount >= 0),
    PRIMARY KEY (sales_outlet_id, product_id, size)
);

CREATE TABLE IF NOT EXISTS "user" (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    name          TEXT NOT NULL,
    surname       TEXT NOT NULL,
    email         TEXT NOT NULL UNIQUE,
    role          TEXT NOT NULL DEFAULT 'user'
                  CHECK (role IN ('anonymous', 'user', 'seller', 'accountant', 'admin')),
    phone         TEXT,
    password_hash TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS "order" (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id         INTEGER NOT NULL REFERENCES "user" (id),
    sales_outlet_id INTEGER NOT NULL REFERENCES sales_outlet (id),
    created_at      TEXT    NOT NULL DEFAULT CURRENT_TIMESTAMP,
    status_name     TEXT    NOT NULL DEFAULT 'ordered'
);

CREATE TABLE IF NOT EXISTS order_item (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    order_id    INTEGER NOT NULL REFERENCES "order" (id) ON DELETE CASCADE,
    product_id  INTEGER NOT NULL REFERENCES product (id),
    amount      INTEGER NOT NULL CHECK (amount > 0),
    price       INTEGER NOT NULL CHECK (price >= 0),
    size        INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_product_image_product ON product_image (product_id);
CREATE INDEX IF NOT EXISTS idx_order_user ON "order" (user_id);
CREATE INDEX IF NOT EXISTS idx_order_outlet ON "order" (sales_outlet_id);
CREATE INDEX IF NOT EXISTS idx_order_item_order ON order_item (order_id);
"#;
