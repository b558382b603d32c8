use std::sync::Arc;

use crate::domain::{models::User, repositories::UserRepository};

pub struct ListUsersUseCase {
    repo: Arc<dyn UserRepository>,
}

impl ListUsersUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> anyhow::Result<Vec<User>> {
        self.repo.list().await
    }
}
