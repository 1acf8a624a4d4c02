pub mod sqlite_service;
pub mod user;
