//! Database operations for users.

use chrono::Utc;
use sea_orm::*;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{User, UserRole};

/// Insert a new user with an already-hashed password.
pub async fn insert(
    db: &DatabaseConnection,
    email: &str,
    name: &str,
    role: UserRole,
    password_hash: &str,
) -> AppResult<User> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let model = crate::entity::user::ActiveModel {
        id: Set(id),
        email: Set(email.to_string()),
        name: Set(name.to_string()),
        role: Set(role.as_str().to_string()),
        password_hash: Set(password_hash.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };

    crate::entity::user::Entity::insert(model).exec(db).await?;

    // Fetch back the inserted user
    let inserted = crate::entity::user::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::Database("Failed to fetch newly inserted user".to_string()))?;

    Ok(model_to_user(inserted))
}

/// Find a user by email. Returns the full row, password hash included.
pub async fn find_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> AppResult<Option<crate::entity::user::Model>> {
    let result = crate::entity::user::Entity::find()
        .filter(crate::entity::user::Column::Email.eq(email))
        .one(db)
        .await?;

    Ok(result)
}

/// List all users, newest first. Password hashes are stripped.
pub async fn list_all(db: &DatabaseConnection) -> AppResult<Vec<User>> {
    let results = crate::entity::user::Entity::find()
        .order_by_desc(crate::entity::user::Column::CreatedAt)
        .all(db)
        .await?;

    Ok(results.into_iter().map(model_to_user).collect())
}

/// List all user rows ordered by email, for the hash audit tool.
pub async fn list_with_hashes(
    db: &DatabaseConnection,
) -> AppResult<Vec<crate::entity::user::Model>> {
    let results = crate::entity::user::Entity::find()
        .order_by_asc(crate::entity::user::Column::Email)
        .all(db)
        .await?;

    Ok(results)
}

/// Count all users.
pub async fn count(db: &DatabaseConnection) -> AppResult<u64> {
    let total = crate::entity::user::Entity::find().count(db).await?;
    Ok(total)
}

/// Replace a user's password hash. `updated_at` is bumped by the row trigger.
pub async fn update_password_hash(
    db: &DatabaseConnection,
    model: crate::entity::user::Model,
    new_hash: &str,
) -> AppResult<User> {
    let mut active: crate::entity::user::ActiveModel = model.into();
    active.password_hash = Set(new_hash.to_string());
    let updated = active.update(db).await?;

    Ok(model_to_user(updated))
}

pub(crate) fn model_to_user(m: crate::entity::user::Model) -> User {
    User {
        id: m.id.to_string(),
        email: m.email,
        name: m.name,
        role: m.role,
        created_at: m.created_at,
    }
}
