//! Tests for companies module
//!
//! These tests verify the company schema rules the handlers rely on:
//! - Website uniqueness
//! - address_line2 default

#[cfg(test)]
mod tests {
    use crate::common::migrations::run_migrations;
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    async fn memory_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        run_migrations(&pool).await.expect("migrations");
        pool
    }

    #[tokio::test]
    async fn test_website_is_unique() {
        let pool = memory_pool().await;

        sqlx::query(
            r#"
            INSERT INTO companies (id, name, website, description, address_line1,
                                   postal_code, state, city, country)
            VALUES ('C_AAAAAA', 'Acme', 'https://acme.example', 'Widgets', '1 Acme Way',
                    '00100', 'Central', 'Metro', 'Freedonia')
            "#,
        )
        .execute(&pool)
        .await
        .expect("first insert");

        let duplicate = sqlx::query(
            r#"
            INSERT INTO companies (id, name, website, description, address_line1,
                                   postal_code, state, city, country)
            VALUES ('C_BBBBBB', 'Other', 'https://acme.example', 'Gadgets', '2 Other St',
                    '00200', 'Central', 'Metro', 'Freedonia')
            "#,
        )
        .execute(&pool)
        .await;

        assert!(duplicate.is_err());
    }

    #[tokio::test]
    async fn test_address_line2_defaults_to_empty() {
        let pool = memory_pool().await;

        sqlx::query(
            r#"
            INSERT INTO companies (id, name, website, description, address_line1,
                                   postal_code, state, city, country)
            VALUES ('C_AAAAAA', 'Acme', 'https://acme.example', 'Widgets', '1 Acme Way',
                    '00100', 'Central', 'Metro', 'Freedonia')
            "#,
        )
        .execute(&pool)
        .await
        .expect("insert");

        let stored: (String,) =
            sqlx::query_as("SELECT address_line2 FROM companies WHERE id = 'C_AAAAAA'")
                .fetch_one(&pool)
                .await
                .expect("stored row");
        assert_eq!(stored.0, "");
    }
}
