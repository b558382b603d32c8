use poem_openapi::Object;

#[derive(Object, Debug)]
#[oai(rename_all = "snake_case")]
pub struct CreateUserRequestDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// Any `id` in the body is ignored; the path segment names the user.
#[derive(Object, Debug)]
#[oai(rename_all = "snake_case")]
pub struct UpdateUserRequestDto {
    pub first_name: String,
    pub last_name: String,
}
