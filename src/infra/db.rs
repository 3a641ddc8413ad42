use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use uuid::Uuid;

use portal_verify_schema::users;

use crate::domain::repository::UserDirectory;
use crate::domain::types::PortalUser;
use crate::error::VerifyServiceError;
use crate::infra::password::{hash_password, verify_password};

/// User directory backed by the portal `users` table.
#[derive(Clone)]
pub struct DbUserDirectory {
    pub db: DatabaseConnection,
}

impl UserDirectory for DbUserDirectory {
    async fn find_by_phone_number(
        &self,
        phone_number: &str,
        role: Option<&str>,
    ) -> Result<Option<PortalUser>, VerifyServiceError> {
        let mut query =
            users::Entity::find().filter(users::Column::PhoneNumber.eq(phone_number));
        if let Some(role) = role {
            query = query.filter(users::Column::Role.eq(role));
        }
        let model = query
            .one(&self.db)
            .await
            .context("find user by phone number")?;
        Ok(model.map(user_from_model))
    }

    async fn find_active_by_phone_number(
        &self,
        phone_number: &str,
    ) -> Result<Option<PortalUser>, VerifyServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::PhoneNumber.eq(phone_number))
            .filter(users::Column::IsActive.eq(true))
            .one(&self.db)
            .await
            .context("find active user by phone number")?;
        Ok(model.map(user_from_model))
    }

    async fn verify_credential(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<PortalUser>, VerifyServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .filter(users::Column::IsActive.eq(true))
            .one(&self.db)
            .await
            .context("find user by username")?;
        Ok(model
            .map(user_from_model)
            .filter(|user| verify_password(password, &user.password_hash)))
    }

    async fn set_password(
        &self,
        user_id: Uuid,
        password: &str,
    ) -> Result<(), VerifyServiceError> {
        let hash = hash_password(password)?;
        users::ActiveModel {
            id: Set(user_id),
            password_hash: Set(hash),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update password hash")?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> PortalUser {
    PortalUser {
        id: model.id,
        username: model.username,
        phone_number: model.phone_number,
        password_hash: model.password_hash,
        role: model.role,
        is_active: model.is_active,
        created_at: model.created_at,
    }
}
