use crate::config::ApiInfo;
use crate::types::error::AppError;
use actix_web::{error::{JsonPayloadError, PathError}, web, HttpRequest};
use utoipa_swagger_ui::SwaggerUi;

pub mod docs;
pub mod redirect;
pub mod user;

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Validation(err.to_string()).into()
}

fn path_error(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Validation(err.to_string()).into()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error));
    cfg.app_data(web::PathConfig::default().error_handler(path_error));

    // Registered ahead of the scopes so the bare paths redirect instead of 404.
    cfg.service(web::resource("/users").to(redirect::trailing_slash));
    cfg.service(web::resource(ApiInfo::DOCS_PATH).to(redirect::trailing_slash));

    cfg.service(
        web::scope("/users")
            .service(user::create::create_user)
            .service(user::list::list_users)
            .service(user::update::update_user)
            .service(user::delete::delete_user),
    );

    cfg.service(
        SwaggerUi::new(format!("{}/{{_:.*}}", ApiInfo::DOCS_PATH))
            .url(ApiInfo::OPENAPI_PATH, docs::openapi()),
    );
}
