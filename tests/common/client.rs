#![allow(dead_code)]

use actix_web::{web, App};
use user_service::{
    db::sqlite_service::SqliteService,
    types::{error::AppError, user::RUserCreate},
};
use entity::user::Model as UserModel;

pub struct TestClient {
    pub db: web::Data<SqliteService>,
}

impl TestClient {
    pub fn new(db: web::Data<SqliteService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.db.clone())
            .configure(user_service::routes::configure_routes)
    }

    #[allow(dead_code)]
    pub async fn create_test_user(&self, email: Option<String>) -> Result<UserModel, AppError> {
        let email = email.unwrap_or_else(|| "seed@test.com".to_string());

        self.db
            .session()
            .create_user(RUserCreate {
                id: None,
                name: "Test User".to_string(),
                email,
                password: "secret".to_string(),
            })
            .await
    }
}
