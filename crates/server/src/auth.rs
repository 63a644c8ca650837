use crate::{error::ApiError, state::AppState};
use axum::{extract::FromRequestParts, http::request::Parts};
use database::{
    entities::user,
    error::ServiceError,
    services::{profile::ProfileService, user::UserService},
};
use log::debug;
use tower_oauth2_resource_server::claims::DefaultClaims;

/// The user behind the bearer token.
///
/// Relies on the OAuth2 layer having placed validated claims in the request
/// extensions; a missing `sub` or an unknown subject is unauthorized.
pub struct CurrentUser(pub user::Model);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let subject = parts
            .extensions
            .get::<DefaultClaims>()
            .and_then(|claims| claims.sub.clone())
            .ok_or(ApiError::Unauthorized)?;

        match UserService::find_by_subject(&state.db, &subject).await {
            Ok(user) => Ok(Self(user)),
            Err(ServiceError::NotFound(message)) => {
                debug!("{message}");
                Err(ApiError::Unauthorized)
            }
            Err(err) => Err(err.into()),
        }
    }
}

impl CurrentUser {
    pub fn user_id(&self) -> i32 {
        self.0.user_id
    }

    /// Teacher id owned by the caller, or not-found when they have no profile
    pub async fn teacher_id(&self, state: &AppState) -> Result<i32, ApiError> {
        Ok(ProfileService::teacher_id_for_user(&state.db, self.user_id()).await?)
    }
}
