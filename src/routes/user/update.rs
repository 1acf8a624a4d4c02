use crate::db::sqlite_service::Session;
use crate::types::error::ErrorBody;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserUpdate, UserRes};
use actix_web::{put, web};

#[utoipa::path(
    put,
    path = "/users/{user_id}",
    tag = "User Operations",
    summary = "Update the existing user",
    description = "This endpoint allows you to update the existing user with name, email, and password. Empty fields are left unchanged.",
    params(("user_id" = i64, Path, description = "Identifier of the user")),
    request_body = RUserUpdate,
    responses(
        (status = 200, description = "The updated user", body = UserRes),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 422, description = "Invalid request body or identifier", body = ErrorBody),
    )
)]
#[put("/{user_id}")]
pub async fn update_user(
    session: Session,
    path: web::Path<i64>,
    body: web::Json<RUserUpdate>,
) -> ApiResult<UserRes> {
    let user_id = path.into_inner();
    let user = session
        .update_user(user_id, body.into_inner().changes())
        .await?;

    Ok(ApiResponse::Ok(user.into()))
}
