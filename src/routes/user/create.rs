use crate::db::sqlite_service::Session;
use crate::types::error::ErrorBody;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserCreate, UserRes};
use actix_web::{post, web};

#[utoipa::path(
    post,
    path = "/users/",
    tag = "User Operations",
    summary = "Create a new user",
    description = "This endpoint allows you to create a new user with name, email, and password.",
    request_body = RUserCreate,
    responses(
        (status = 200, description = "The created user", body = UserRes),
        (status = 400, description = "Email already registered", body = ErrorBody),
        (status = 422, description = "Invalid request body", body = ErrorBody),
    )
)]
#[post("/")]
pub async fn create_user(
    session: Session,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserRes> {
    let user = session.create_user(body.into_inner()).await?;

    Ok(ApiResponse::Ok(user.into()))
}
