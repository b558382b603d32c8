use std::sync::Arc;

use tracing::info;

use crate::{application::usecases::MutationOutcome, domain::repositories::UserRepository};

pub struct DeleteUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: i64) -> anyhow::Result<MutationOutcome> {
        let rows_affected = self.repo.delete(id).await?;
        let outcome = MutationOutcome::from_rows_affected(rows_affected);
        if let MutationOutcome::Applied { rows_affected } = outcome {
            info!(user_id = id, rows_affected, "user deleted");
        }

        Ok(outcome)
    }
}
