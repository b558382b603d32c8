use std::sync::Arc;

use tracing::info;

use crate::domain::{models::User, repositories::UserRepository};

pub struct CreateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

pub struct CreateUserRequest {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

pub struct CreatedUser {
    pub id: i64,
}

impl CreateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: CreateUserRequest) -> anyhow::Result<CreatedUser> {
        let user = User {
            id: request.id,
            first_name: request.first_name,
            last_name: request.last_name,
        };

        let id = self.repo.insert(&user).await?;
        info!(user_id = id, "user created");

        Ok(CreatedUser { id })
    }
}
