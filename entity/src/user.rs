use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    // SQLite only auto-increments an INTEGER primary key.
    #[sea_orm(primary_key, column_type = "Integer")]
    pub id: i64,
    pub name: String,
    // Uniqueness is checked by the service before insert, not by the table.
    pub email: String,
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
