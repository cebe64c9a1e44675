use redis::{Client, aio::MultiplexedConnection};
use tracing::info;

/// Single multiplexed connection shared by every storage call. Clones are
/// handles onto the same socket, so no request opens its own connection.
#[derive(Clone)]
pub struct RedisService {
    conn: MultiplexedConnection,
}

impl RedisService {
    pub async fn new(connection_string: &str) -> Result<Self, redis::RedisError> {
        let client = Client::open(connection_string)?;
        let mut conn = client.get_multiplexed_async_connection().await?;

        let pong: String = redis::cmd("PING").query_async(&mut conn).await?;
        info!(reply = %pong, "redis storage connection ready");

        Ok(Self { conn })
    }

    pub fn get_conn(&self) -> MultiplexedConnection {
        self.conn.clone()
    }
}
