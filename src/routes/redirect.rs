use crate::types::response::ApiResponse;
use actix_web::HttpRequest;

/// Sends a path missing its trailing slash to the slashed route, keeping the query.
pub async fn trailing_slash(req: HttpRequest) -> ApiResponse<()> {
    let location = match req.query_string() {
        "" => format!("{}/", req.path()),
        query => format!("{}/?{}", req.path(), query),
    };

    ApiResponse::TemporaryRedirect(location)
}
