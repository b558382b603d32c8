pub mod create_user;
pub mod delete_user;
pub mod list_users;
pub mod update_user;

/// Result of a statement that targets a single user by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied { rows_affected: u64 },
    NotFound,
}

impl MutationOutcome {
    pub fn from_rows_affected(rows_affected: u64) -> Self {
        match rows_affected {
            0 => MutationOutcome::NotFound,
            rows_affected => MutationOutcome::Applied { rows_affected },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{
        MutationOutcome,
        create_user::{CreateUserRequest, CreateUserUseCase},
        delete_user::DeleteUserUseCase,
        list_users::ListUsersUseCase,
        update_user::{UpdateUserRequest, UpdateUserUseCase},
    };
    use crate::{
        domain::{models::User, repositories::UserRepository},
        infrastructure::repositories::in_memory::InMemoryUserRepository,
    };

    fn ada() -> CreateUserRequest {
        CreateUserRequest {
            id: 1,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
        }
    }

    #[test]
    fn zero_rows_is_not_found() {
        assert_eq!(MutationOutcome::from_rows_affected(0), MutationOutcome::NotFound);
        assert_eq!(
            MutationOutcome::from_rows_affected(2),
            MutationOutcome::Applied { rows_affected: 2 }
        );
    }

    #[tokio::test]
    async fn update_keeps_id_and_replaces_name() {
        let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        CreateUserUseCase::new(repo.clone()).execute(ada()).await.unwrap();

        let outcome = UpdateUserUseCase::new(repo.clone())
            .execute(UpdateUserRequest {
                id: 1,
                first_name: "Ada".into(),
                last_name: "King".into(),
            })
            .await
            .unwrap();
        assert_eq!(outcome, MutationOutcome::Applied { rows_affected: 1 });

        let users = ListUsersUseCase::new(repo).execute().await.unwrap();
        assert_eq!(
            users,
            vec![User {
                id: 1,
                first_name: "Ada".into(),
                last_name: "King".into(),
            }]
        );
    }

    #[tokio::test]
    async fn update_of_missing_user_is_not_found() {
        let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());

        let outcome = UpdateUserUseCase::new(repo.clone())
            .execute(UpdateUserRequest {
                id: 42,
                first_name: "Nobody".into(),
                last_name: "Here".into(),
            })
            .await
            .unwrap();

        assert_eq!(outcome, MutationOutcome::NotFound);
        assert!(ListUsersUseCase::new(repo).execute().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn repeated_delete_is_not_found() {
        let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        CreateUserUseCase::new(repo.clone()).execute(ada()).await.unwrap();
        let delete = DeleteUserUseCase::new(repo);

        assert_eq!(
            delete.execute(1).await.unwrap(),
            MutationOutcome::Applied { rows_affected: 1 }
        );
        assert_eq!(delete.execute(1).await.unwrap(), MutationOutcome::NotFound);
    }
}
