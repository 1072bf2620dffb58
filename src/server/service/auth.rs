//! Registration, login, logout and account removal.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::{
    model::user::{LoginDto, RegisterDto, Role},
    server::{
        data::{session::SessionRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::{
            session::Identity,
            user::{CreateUserParam, User, UserCredentials},
        },
        service::{
            password::{PasswordService, MAX_PASSWORD_BYTES},
            session::SessionService,
            token::TokenSigner,
        },
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenSigner,
    passwords: &'a PasswordService,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenSigner,
        passwords: &'a PasswordService,
    ) -> Self {
        Self {
            db,
            tokens,
            passwords,
        }
    }

    /// Creates an account and signs it in.
    ///
    /// If the session cannot be issued the new account is deleted again, so a retry with the
    /// same email does not hit a conflict.
    ///
    /// # Returns
    /// - `Ok((User, token))` - Account created with a live session
    /// - `Err(AppError::BadRequest)` - Missing fields, unknown role or over-long password
    /// - `Err(AppError::Conflict)` - Email already registered; nothing is written
    /// - `Err(AppError)` - Hashing or persistence failure
    pub async fn register(&self, dto: RegisterDto) -> Result<(User, String), AppError> {
        let name = dto.name.trim().to_string();
        let email = dto.email.trim().to_string();

        if name.is_empty() || email.is_empty() || dto.password.is_empty() {
            return Err(AppError::BadRequest(
                "name, email, and password are required".to_string(),
            ));
        }
        if dto.password.len() > MAX_PASSWORD_BYTES {
            return Err(AppError::BadRequest(format!(
                "password must be at most {} bytes",
                MAX_PASSWORD_BYTES
            )));
        }
        let role = parse_role(&dto.role)?;

        let password_hash = self.passwords.hash(&dto.password).await?;

        let entity = UserRepository::new(self.db)
            .create(CreateUserParam {
                name,
                email,
                password_hash,
                role,
                company: dto.company,
                phone: dto.phone,
            })
            .await
            .map_err(map_duplicate_email)?;

        let user = User::from_entity(entity)?;
        let token = match SessionService::new(self.db, self.tokens).issue(&user).await {
            Ok(token) => token,
            Err(e) => {
                if let Err(cleanup) = UserRepository::new(self.db).delete(user.id).await {
                    tracing::error!(
                        "Failed to remove user {} after session issue failed: {}",
                        user.id,
                        cleanup
                    );
                }
                return Err(e);
            }
        };

        tracing::info!("Registered user {} as {}", user.id, user.role);

        Ok((user, token))
    }

    /// Checks credentials and issues a new session.
    ///
    /// Unknown email and wrong password produce the same error.
    ///
    /// # Returns
    /// - `Ok((User, token))` - Credentials accepted; a new, independent session
    /// - `Err(AppError::BadRequest)` - Email or password missing
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - No such account or wrong password
    pub async fn login(&self, dto: LoginDto) -> Result<(User, String), AppError> {
        let email = dto.email.trim();
        if email.is_empty() || dto.password.is_empty() {
            return Err(AppError::BadRequest(
                "email and password are required".to_string(),
            ));
        }

        let Some(entity) = UserRepository::new(self.db).find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };
        let credentials = UserCredentials::from_entity(entity)?;

        if !self
            .passwords
            .verify(&dto.password, &credentials.password_hash)
            .await
        {
            return Err(AuthError::InvalidCredentials.into());
        }

        let user = credentials.user;
        let token = SessionService::new(self.db, self.tokens).issue(&user).await?;

        Ok((user, token))
    }

    /// Revokes the session for `token`. Succeeds whether or not a session existed.
    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        let revoked = SessionService::new(self.db, self.tokens)
            .revoke(token)
            .await?;

        if !revoked {
            tracing::debug!("Logout for a token with no session row");
        }

        Ok(())
    }

    /// Deletes the caller's account together with all of its sessions and listings.
    pub async fn delete_account(&self, identity: Identity) -> Result<(), AppError> {
        let sessions = SessionRepository::new(self.db)
            .count_by_user(identity.user_id)
            .await?;

        if !UserRepository::new(self.db).delete(identity.user_id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!(
            "Deleted user {} and revoked {} sessions",
            identity.user_id,
            sessions
        );

        Ok(())
    }
}

fn parse_role(raw: &str) -> Result<Role, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::BadRequest(
            "role is required: member, business_owner or event_owner".to_string(),
        ));
    }

    raw.parse::<Role>().map_err(|e| {
        AppError::BadRequest(format!(
            "{}: expected member, business_owner or event_owner",
            e
        ))
    })
}

fn map_duplicate_email(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict("Email already exists".to_string())
        }
        _ => AppError::DbErr(err),
    }
}
