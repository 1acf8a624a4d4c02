use actix_web::web;
use user_service::db::sqlite_service::{Session, SqliteService};

pub mod client;

pub struct TestContext {
    pub db: web::Data<SqliteService>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let db = SqliteService::new("sqlite::memory:")
            .await
            .expect("Failed to initialize SqliteService");

        TestContext {
            db: web::Data::new(db),
        }
    }

    #[allow(dead_code)]
    pub fn session(&self) -> Session {
        self.db.session()
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use user_service::types::user::{RUserCreate, RUserUpdate};

    pub fn sample_user() -> RUserCreate {
        sample_user_with_email("a@x.com")
    }

    pub fn sample_user_with_email(email: &str) -> RUserCreate {
        RUserCreate {
            id: None,
            name: "Alice".to_string(),
            email: email.to_string(),
            password: "p1".to_string(),
        }
    }

    pub fn update(name: &str, email: &str, password: &str) -> RUserUpdate {
        RUserUpdate {
            id: None,
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }
}
