//! Tests for notifications module

#[cfg(test)]
mod tests {
    use crate::common::migrations::run_migrations;
    use crate::common::Validator;
    use crate::notifications::models::{CreateNotificationRequest, Notification};
    use crate::notifications::validators::NotificationValidator;
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

    async fn seed_user(pool: &SqlitePool, id: &str, email: &str) {
        sqlx::query("INSERT INTO users (id, name, email, password) VALUES (?, 'Dina', ?, 'hash')")
            .bind(id)
            .bind(email)
            .execute(pool)
            .await
            .expect("seed user");
    }

    async fn seed_notification(pool: &SqlitePool, id: &str, user_id: &str, is_read: bool) {
        sqlx::query(
            "INSERT INTO notifications (id, content, category, is_read, user_id) VALUES (?, 'Interview scheduled', 'interview', ?, ?)",
        )
        .bind(id)
        .bind(is_read)
        .bind(user_id)
        .execute(pool)
        .await
        .expect("seed notification");
    }

    #[test]
    fn test_notification_validator_requires_every_field() {
        let valid = CreateNotificationRequest {
            content: Some("Interview scheduled".to_string()),
            category: Some("interview".to_string()),
            is_read: Some(false),
            user_id: Some("U_AAAAAA".to_string()),
        };
        assert!(NotificationValidator.validate(&valid).is_valid);

        let missing_flag = CreateNotificationRequest {
            is_read: None,
            ..valid
        };
        let result = NotificationValidator.validate(&missing_flag);
        assert!(!result.is_valid);
        assert_eq!(
            result.first_message(),
            Some("Content, Category, Is read and User id is required.")
        );
    }

    #[tokio::test]
    async fn test_single_mark_read_is_scoped_to_the_owner() {
        let pool = memory_pool().await;
        seed_user(&pool, "U_AAAAAA", "dina@example.com").await;
        seed_user(&pool, "U_BBBBBB", "omar@example.com").await;
        seed_notification(&pool, "N_AAAAAA", "U_AAAAAA", false).await;

        // Another user cannot claim the row
        let foreign: Option<(String,)> =
            sqlx::query_as("SELECT id FROM notifications WHERE id = ? AND user_id = ?")
                .bind("N_AAAAAA")
                .bind("U_BBBBBB")
                .fetch_optional(&pool)
                .await
                .expect("foreign lookup");
        assert!(foreign.is_none());

        let owned: Option<(String,)> =
            sqlx::query_as("SELECT id FROM notifications WHERE id = ? AND user_id = ?")
                .bind("N_AAAAAA")
                .bind("U_AAAAAA")
                .fetch_optional(&pool)
                .await
                .expect("owned lookup");
        assert!(owned.is_some());
    }

    #[tokio::test]
    async fn test_bulk_mark_read_counts_every_row_it_touched() {
        let pool = memory_pool().await;
        seed_user(&pool, "U_AAAAAA", "dina@example.com").await;
        seed_user(&pool, "U_BBBBBB", "omar@example.com").await;
        seed_notification(&pool, "N_AAAAAA", "U_AAAAAA", false).await;
        seed_notification(&pool, "N_BBBBBB", "U_AAAAAA", true).await;
        seed_notification(&pool, "N_CCCCCC", "U_BBBBBB", false).await;

        let result = sqlx::query("UPDATE notifications SET is_read = 1 WHERE user_id = ?")
            .bind("U_AAAAAA")
            .execute(&pool)
            .await
            .expect("bulk update");
        assert_eq!(result.rows_affected(), 2);

        let rows: Vec<Notification> =
            sqlx::query_as("SELECT * FROM notifications WHERE user_id = ?")
                .bind("U_AAAAAA")
                .fetch_all(&pool)
                .await
                .expect("rows");
        assert!(rows.iter().all(|notification| notification.is_read));

        // The other user's rows are untouched
        let other: Vec<Notification> =
            sqlx::query_as("SELECT * FROM notifications WHERE user_id = ?")
                .bind("U_BBBBBB")
                .fetch_all(&pool)
                .await
                .expect("other rows");
        assert!(!other[0].is_read);
    }

    #[tokio::test]
    async fn test_notifications_cascade_with_their_user() {
        let pool = memory_pool().await;
        seed_user(&pool, "U_AAAAAA", "dina@example.com").await;
        seed_notification(&pool, "N_AAAAAA", "U_AAAAAA", false).await;

        sqlx::query("DELETE FROM users WHERE id = 'U_AAAAAA'")
            .execute(&pool)
            .await
            .expect("delete user");

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM notifications")
            .fetch_one(&pool)
            .await
            .expect("count");
        assert_eq!(count, 0);
    }
}
