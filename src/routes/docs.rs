use utoipa::OpenApi;

use crate::config::ApiInfo;
use crate::routes::user::{create, delete, list, update};
use crate::types::{
    error::ErrorBody,
    user::{RUserCreate, RUserUpdate, UserRes},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_user,
        list::list_users,
        update::update_user,
        delete::delete_user,
    ),
    components(schemas(RUserCreate, RUserUpdate, UserRes, ErrorBody)),
    tags((name = "User Operations", description = "Create, list, update and delete users."))
)]
struct ApiDoc;

pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = ApiInfo::TITLE.to_string();
    doc.info.description = Some(ApiInfo::DESCRIPTION.to_string());
    doc.info.version = ApiInfo::VERSION.to_string();
    doc
}
