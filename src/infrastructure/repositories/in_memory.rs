use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    models::{User, UserName},
    repositories::UserRepository,
};

/// Process-local store keyed by id. Iterates in id order.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<i64, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> anyhow::Result<i64> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            anyhow::bail!("duplicate key value violates unique constraint: id {}", user.id);
        }
        users.insert(user.id, user.clone());
        Ok(user.id)
    }

    async fn list(&self) -> anyhow::Result<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn update(&self, id: i64, name: &UserName) -> anyhow::Result<u64> {
        let mut users = self.users.write().await;
        match users.get_mut(&id) {
            Some(user) => {
                user.rename(name);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> anyhow::Result<u64> {
        let mut users = self.users.write().await;
        Ok(users.remove(&id).map_or(0, |_| 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, first_name: &str, last_name: &str) -> User {
        User {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    #[tokio::test]
    async fn duplicate_id_is_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.insert(&user(7, "Grace", "Hopper")).await.unwrap();

        let err = repo.insert(&user(7, "Alan", "Turing")).await.unwrap_err();

        assert!(err.to_string().contains("duplicate key"));
        assert_eq!(repo.list().await.unwrap(), vec![user(7, "Grace", "Hopper")]);
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let repo = InMemoryUserRepository::new();
        repo.insert(&user(3, "Edsger", "Dijkstra")).await.unwrap();
        repo.insert(&user(1, "Ada", "Lovelace")).await.unwrap();

        let ids: Vec<i64> = repo.list().await.unwrap().iter().map(|u| u.id).collect();

        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn update_and_delete_report_zero_for_unknown_id() {
        let repo = InMemoryUserRepository::new();
        let name = UserName {
            first_name: "No".into(),
            last_name: "One".into(),
        };

        assert_eq!(repo.update(99, &name).await.unwrap(), 0);
        assert_eq!(repo.delete(99).await.unwrap(), 0);
    }
}
