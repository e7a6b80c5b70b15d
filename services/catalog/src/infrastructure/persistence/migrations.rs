//! 内嵌的数据库迁移

use sportshop_adapter_postgres::Migration;

const CREATE_CATALOG_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS categories (
    id BIGSERIAL PRIMARY KEY,
    code VARCHAR(100) NOT NULL,
    description VARCHAR(500) NOT NULL DEFAULT '',
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NULL
);

CREATE TABLE IF NOT EXISTS products (
    id BIGSERIAL PRIMARY KEY,
    name VARCHAR(200) NOT NULL,
    price NUMERIC(18, 2) NOT NULL,
    stock INTEGER NOT NULL,
    brand VARCHAR(100) NOT NULL,
    category_id BIGINT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NULL,
    CONSTRAINT fk_products_category FOREIGN KEY (category_id)
        REFERENCES categories (id) ON DELETE NO ACTION
);

CREATE INDEX IF NOT EXISTS idx_products_category_id ON products (category_id);
"#;

/// 按版本排列的迁移列表
pub fn migrations() -> Vec<Migration> {
    vec![Migration::new(1, "create_catalog_tables", CREATE_CATALOG_TABLES)]
}
