use poem_openapi::payload::Json;

use crate::{
    application::usecases::MutationOutcome,
    domain::models::User,
    presentation::http::responses::{ErrorDto, MutateUserApiResponse, RowsAffectedDto, UserDto},
};

pub const USER_NOT_FOUND: &str = "User not found";

pub fn map_user(user: &User) -> UserDto {
    UserDto {
        id: user.id,
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
    }
}

pub fn map_mutation(outcome: MutationOutcome) -> MutateUserApiResponse {
    match outcome {
        MutationOutcome::Applied { rows_affected } => {
            MutateUserApiResponse::Ok(Json(RowsAffectedDto { rows_affected }))
        }
        MutationOutcome::NotFound => MutateUserApiResponse::NotFound(ErrorDto::json(USER_NOT_FOUND)),
    }
}
