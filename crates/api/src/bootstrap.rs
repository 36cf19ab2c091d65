//! Startup tasks that run once before the server accepts connections.

use apnaghar_core::status::UserRole;
use apnaghar_db::models::user::CreateUser;
use apnaghar_db::repositories::UserRepo;
use apnaghar_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::AdminBootstrap;
use crate::error::{AppError, AppResult};

/// Create the configured admin account unless a user with that email exists.
///
/// Returns `true` if an account was created. An existing account is left
/// untouched, including its role and password.
pub async fn ensure_admin(pool: &DbPool, admin: &AdminBootstrap) -> AppResult<bool> {
    let email = admin.email.trim().to_lowercase();
    if UserRepo::find_by_email(pool, &email).await?.is_some() {
        return Ok(false);
    }

    let password_hash = hash_password(&admin.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            name: admin.name.clone(),
            email,
            phone: None,
            password_hash,
            role: UserRole::Admin,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "Admin account created");
    Ok(true)
}
