use poem_openapi::{ApiResponse, Object, payload::Json};

#[derive(Object, Debug)]
#[oai(rename_all = "snake_case")]
pub struct UserDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Object, Debug)]
#[oai(rename_all = "snake_case")]
pub struct CreatedUserDto {
    pub id: i64,
}

#[derive(Object, Debug)]
#[oai(rename_all = "snake_case")]
pub struct RowsAffectedDto {
    pub rows_affected: u64,
}

/// Body of every error response.
#[derive(Object, Debug)]
pub struct ErrorDto {
    pub error: String,
}

impl ErrorDto {
    pub fn json(message: impl Into<String>) -> Json<ErrorDto> {
        Json(ErrorDto {
            error: message.into(),
        })
    }
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "create_bad_request")]
pub enum CreateUserApiResponse {
    #[oai(status = 201)]
    Created(Json<CreatedUserDto>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorDto>),
    #[oai(status = 500)]
    InternalError(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum ListUsersApiResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<UserDto>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorDto>),
}

/// Shared by update and delete.
#[derive(ApiResponse)]
#[oai(bad_request_handler = "mutate_bad_request")]
pub enum MutateUserApiResponse {
    #[oai(status = 200)]
    Ok(Json<RowsAffectedDto>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorDto>),
    #[oai(status = 404)]
    NotFound(Json<ErrorDto>),
    #[oai(status = 500)]
    InternalError(Json<ErrorDto>),
}

fn create_bad_request(err: poem::Error) -> CreateUserApiResponse {
    CreateUserApiResponse::BadRequest(ErrorDto::json(err.to_string()))
}

fn mutate_bad_request(err: poem::Error) -> MutateUserApiResponse {
    MutateUserApiResponse::BadRequest(ErrorDto::json(err.to_string()))
}
