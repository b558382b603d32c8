use async_trait::async_trait;

use crate::domain::models::{User, UserName};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user and returns the identifier echoed back by the store.
    async fn insert(&self, user: &User) -> anyhow::Result<i64>;
    async fn list(&self) -> anyhow::Result<Vec<User>>;
    /// Returns the number of rows changed; zero means no user has this id.
    async fn update(&self, id: i64, name: &UserName) -> anyhow::Result<u64>;
    async fn delete(&self, id: i64) -> anyhow::Result<u64>;
}
