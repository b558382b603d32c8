use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use tracing::error;

use crate::{
    application::usecases::{create_user::CreateUserRequest, update_user::UpdateUserRequest},
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::{map_mutation, map_user},
        requests::{CreateUserRequestDto, UpdateUserRequestDto},
        responses::{
            CreateUserApiResponse, CreatedUserDto, ErrorDto, ListUsersApiResponse,
            MutateUserApiResponse,
        },
    },
};

#[derive(Clone)]
pub struct UsersEndpoints {
    state: Arc<ApiState>,
}

impl UsersEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl UsersEndpoints {
    #[oai(path = "/users", method = "post", tag = EndpointsTags::Users)]
    pub async fn create_user(&self, request: Json<CreateUserRequestDto>) -> CreateUserApiResponse {
        let request = request.0;
        let payload = CreateUserRequest {
            id: request.id,
            first_name: request.first_name,
            last_name: request.last_name,
        };

        match self.state.create_user_usecase.execute(payload).await {
            Ok(created) => CreateUserApiResponse::Created(Json(CreatedUserDto { id: created.id })),
            Err(err) => CreateUserApiResponse::InternalError(internal_error(err)),
        }
    }

    #[oai(path = "/users", method = "get", tag = EndpointsTags::Users)]
    pub async fn list_users(&self) -> ListUsersApiResponse {
        match self.state.list_users_usecase.execute().await {
            Ok(users) => ListUsersApiResponse::Ok(Json(users.iter().map(map_user).collect())),
            Err(err) => ListUsersApiResponse::InternalError(internal_error(err)),
        }
    }

    #[oai(path = "/users/:id", method = "put", tag = EndpointsTags::Users)]
    pub async fn update_user(
        &self,
        id: Path<i64>,
        request: Json<UpdateUserRequestDto>,
    ) -> MutateUserApiResponse {
        let request = request.0;
        let payload = UpdateUserRequest {
            id: id.0,
            first_name: request.first_name,
            last_name: request.last_name,
        };

        match self.state.update_user_usecase.execute(payload).await {
            Ok(outcome) => map_mutation(outcome),
            Err(err) => MutateUserApiResponse::InternalError(internal_error(err)),
        }
    }

    #[oai(path = "/users/:id", method = "delete", tag = EndpointsTags::Users)]
    pub async fn delete_user(&self, id: Path<i64>) -> MutateUserApiResponse {
        match self.state.delete_user_usecase.execute(id.0).await {
            Ok(outcome) => map_mutation(outcome),
            Err(err) => MutateUserApiResponse::InternalError(internal_error(err)),
        }
    }
}

/// Store failures are passed through to the caller as-is.
fn internal_error(err: anyhow::Error) -> Json<ErrorDto> {
    error!(error = %err, "store operation failed");
    ErrorDto::json(err.to_string())
}
