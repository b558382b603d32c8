use std::sync::Arc;

use tracing::info;

use crate::{
    application::usecases::MutationOutcome,
    domain::{models::UserName, repositories::UserRepository},
};

pub struct UpdateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

pub struct UpdateUserRequest {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl UpdateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: UpdateUserRequest) -> anyhow::Result<MutationOutcome> {
        let name = UserName {
            first_name: request.first_name,
            last_name: request.last_name,
        };

        let rows_affected = self.repo.update(request.id, &name).await?;
        let outcome = MutationOutcome::from_rows_affected(rows_affected);
        if let MutationOutcome::Applied { rows_affected } = outcome {
            info!(user_id = request.id, rows_affected, "user updated");
        }

        Ok(outcome)
    }
}
