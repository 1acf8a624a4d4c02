use std::future::{ready, Ready};

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};
use tracing::{info, trace};

use crate::types::error::AppError;

/// Owns the single connection to the SQLite file.
#[derive(Clone)]
pub struct SqliteService {
    pub(crate) db: DatabaseConnection,
}

impl SqliteService {
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        info!("Connecting to SQLite at {}...", uri);
        let db = Database::connect(Self::connect_options(uri)).await?;

        info!("Ensuring users table exists...");
        Self::ensure_tables(&db).await?;
        info!("Connected to SQLite.");
        Ok(Self { db })
    }

    // One connection; statements are logged at debug so the default info filter stays quiet.
    fn connect_options(uri: &str) -> ConnectOptions {
        let mut options = ConnectOptions::new(uri);
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);
        options
    }

    // Create-if-absent only. An existing table is left as it is.
    async fn ensure_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
        let backend = db.get_database_backend();
        let mut stmt = Schema::new(backend).create_table_from_entity(entity::user::Entity);
        stmt.if_not_exists();
        db.execute(backend.build(&stmt)).await?;
        Ok(())
    }

    pub fn session(&self) -> Session {
        trace!("session acquired");
        Session {
            conn: self.db.clone(),
        }
    }
}

/// Unit of work for exactly one request.
///
/// Handlers take it as an extractor argument. It is released when the handler
/// future is dropped, on success and on error alike.
pub struct Session {
    conn: DatabaseConnection,
}

impl Session {
    pub(crate) fn conn(&self) -> &DatabaseConnection {
        &self.conn
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        trace!("session released");
    }
}

impl FromRequest for Session {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let session = req
            .app_data::<web::Data<SqliteService>>()
            .map(|service| service.session())
            .ok_or_else(|| AppError::Internal("storage handle is not registered".to_string()));
        ready(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statements_are_logged_below_info() {
        let options = SqliteService::connect_options("sqlite::memory:");
        assert!(options.get_sqlx_logging());
        assert_eq!(options.get_sqlx_logging_level(), log::LevelFilter::Debug);
        assert_eq!(options.get_max_connections(), Some(1));
    }
}
