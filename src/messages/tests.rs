//! Tests for messages module
//!
//! Covers the broadcast hub fan-out and sweep, the unread filter the
//! recipient route relies on, and the create-message validation.

#[cfg(test)]
mod tests {
    use crate::common::migrations::run_migrations;
    use crate::common::Validator;
    use crate::messages::models::{CreateMessageRequest, Message};
    use crate::messages::services::ChatHub;
    use crate::messages::validators::MessageValidator;
    use axum::extract::ws::Message as Frame;
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;
    use tokio::sync::mpsc;

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

    #[tokio::test]
    async fn test_broadcast_reaches_every_connection() {
        let hub = ChatHub::new();
        let (tx_a, mut rx_a) = mpsc::unbounded_channel::<Frame>();
        let (tx_b, mut rx_b) = mpsc::unbounded_channel::<Frame>();
        hub.register("conn-a".to_string(), tx_a).await;
        hub.register("conn-b".to_string(), tx_b).await;

        let delivered = hub.broadcast(Frame::Text("hello".to_string())).await;

        assert_eq!(delivered, 2);
        assert_eq!(rx_a.recv().await, Some(Frame::Text("hello".to_string())));
        assert_eq!(rx_b.recv().await, Some(Frame::Text("hello".to_string())));
    }

    #[tokio::test]
    async fn test_sweep_drops_closed_connections() {
        let hub = ChatHub::new();
        let (tx_a, rx_a) = mpsc::unbounded_channel::<Frame>();
        let (tx_b, _rx_b) = mpsc::unbounded_channel::<Frame>();
        hub.register("conn-a".to_string(), tx_a).await;
        hub.register("conn-b".to_string(), tx_b).await;

        drop(rx_a);
        hub.sweep_closed().await;

        assert_eq!(hub.connection_count().await, 1);
        assert_eq!(hub.broadcast(Frame::Text("still here".to_string())).await, 1);
    }

    #[tokio::test]
    async fn test_unregister_removes_the_connection() {
        let hub = ChatHub::new();
        let (tx, _rx) = mpsc::unbounded_channel::<Frame>();
        hub.register("conn-a".to_string(), tx).await;

        hub.unregister("conn-a").await;

        assert_eq!(hub.connection_count().await, 0);
    }

    #[test]
    fn test_message_validator_requires_every_field() {
        let valid = CreateMessageRequest {
            content: Some("hi".to_string()),
            is_read: Some(false),
            created_date: Some("2024-03-01".to_string()),
            recipient_id: Some("U_BBBBBB".to_string()),
            sender_id: Some("U_AAAAAA".to_string()),
        };
        assert!(MessageValidator.validate(&valid).is_valid);

        let missing_flag = CreateMessageRequest {
            is_read: None,
            ..valid
        };
        let result = MessageValidator.validate(&missing_flag);
        assert!(!result.is_valid);
        assert_eq!(
            result.first_message(),
            Some("Content, Is read, Created date, Recipient id and Sender id is required.")
        );
    }

    #[tokio::test]
    async fn test_unread_filter_only_returns_unread_rows() {
        let pool = memory_pool().await;
        seed_user(&pool, "U_AAAAAA", "dina@example.com").await;
        seed_user(&pool, "U_BBBBBB", "omar@example.com").await;

        sqlx::query(
            r#"
            INSERT INTO messages (id, content, is_read, created_date, recipient_id, sender_id)
            VALUES
                ('M_AAAAAA', 'seen', 1, '2024-03-01', 'U_BBBBBB', 'U_AAAAAA'),
                ('M_BBBBBB', 'new', 0, '2024-03-02', 'U_BBBBBB', 'U_AAAAAA'),
                ('M_CCCCCC', 'other way', 0, '2024-03-03', 'U_AAAAAA', 'U_BBBBBB')
            "#,
        )
        .execute(&pool)
        .await
        .expect("seed messages");

        let unread: Vec<Message> = sqlx::query_as(
            "SELECT * FROM messages WHERE recipient_id = ? AND is_read = 0",
        )
        .bind("U_BBBBBB")
        .fetch_all(&pool)
        .await
        .expect("unread rows");

        assert_eq!(unread.len(), 1);
        assert_eq!(unread[0].content, "new");
        assert!(!unread[0].is_read);
    }
}
