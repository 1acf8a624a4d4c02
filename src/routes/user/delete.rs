use crate::db::sqlite_service::Session;
use crate::types::error::ErrorBody;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserRes;
use actix_web::{delete, web};

#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    tag = "User Operations",
    summary = "Delete the existing user",
    description = "This endpoint allows you to delete an existing user. The response echoes the removed user.",
    params(("user_id" = i64, Path, description = "Identifier of the user")),
    responses(
        (status = 200, description = "The user as it was before removal", body = UserRes),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 422, description = "Invalid identifier", body = ErrorBody),
    )
)]
#[delete("/{user_id}")]
pub async fn delete_user(session: Session, path: web::Path<i64>) -> ApiResult<UserRes> {
    let user = session.delete_user(path.into_inner()).await?;

    Ok(ApiResponse::Ok(user.into()))
}
