use crate::db::sqlite_service::Session;
use crate::types::{
    error::AppError,
    user::{RUserCreate, UserChanges},
};
use entity::user::{ActiveModel as UserActive, Column, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, NotSet, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};
use tracing::debug;

impl Session {
    pub async fn email_registered(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(Column::Email.eq(email))
            .count(self.conn())
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: i64) -> Result<UserModel, AppError> {
        User::find_by_id(id)
            .one(self.conn())
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Inserts without checking the email. Storage assigns the id.
    pub async fn insert_user(&self, payload: RUserCreate) -> Result<UserModel, AppError> {
        let user = UserActive {
            id: NotSet,
            name: Set(payload.name),
            email: Set(payload.email),
            password: Set(payload.password),
        }
        .insert(self.conn())
        .await?;
        debug!("inserted user {}", user.id);
        Ok(user)
    }

    /// The email check and the insert are separate statements; concurrent
    /// creates with the same email can both succeed.
    pub async fn create_user(&self, payload: RUserCreate) -> Result<UserModel, AppError> {
        if self.email_registered(&payload.email).await? {
            return Err(AppError::EmailRegistered);
        }
        self.insert_user(payload).await
    }

    pub async fn list_users(&self) -> Result<Vec<UserModel>, AppError> {
        Ok(User::find()
            .order_by_asc(Column::Id)
            .all(self.conn())
            .await?)
    }

    pub async fn update_user(&self, id: i64, changes: UserChanges) -> Result<UserModel, AppError> {
        let user = self.get_user_by_id(id).await?;
        if changes.is_empty() {
            return Ok(user);
        }

        let mut am: UserActive = user.into();
        if let Some(name) = changes.name {
            am.name = Set(name);
        }
        if let Some(email) = changes.email {
            am.email = Set(email);
        }
        if let Some(password) = changes.password {
            am.password = Set(password);
        }
        let user = am.update(self.conn()).await?;
        debug!("updated user {}", user.id);
        Ok(user)
    }

    /// Returns the row as it was before removal.
    pub async fn delete_user(&self, id: i64) -> Result<UserModel, AppError> {
        let user = self.get_user_by_id(id).await?;
        User::delete_by_id(user.id).exec(self.conn()).await?;
        debug!("deleted user {}", user.id);
        Ok(user)
    }
}
