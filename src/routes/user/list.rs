use crate::db::sqlite_service::Session;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserRes;
use actix_web::get;

#[utoipa::path(
    get,
    path = "/users/",
    tag = "User Operations",
    summary = "Get all the list of the user",
    description = "This endpoint allows you to list all users with their id, name, and email.",
    responses(
        (status = 200, description = "Every stored user, in storage order", body = Vec<UserRes>),
    )
)]
#[get("/")]
pub async fn list_users(session: Session) -> ApiResult<Vec<UserRes>> {
    let users = session.list_users().await?;

    Ok(ApiResponse::Ok(users.into_iter().map(UserRes::from).collect()))
}
