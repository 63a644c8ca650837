use crate::{
    entities::user,
    error::{ServiceError, ServiceResult},
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

pub struct UserService;

impl UserService {
    /// Resolves the `sub` claim of an access token to its user row
    pub async fn find_by_subject(
        db: &DatabaseConnection,
        subject: &str,
    ) -> ServiceResult<user::Model> {
        user::Entity::find()
            .filter(user::Column::AuthSubject.eq(subject))
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("No user for subject {subject}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{seed_user, setup};

    #[tokio::test]
    async fn resolves_subject() {
        let db = setup().await;
        let user = seed_user(&db, "auth0|42").await;

        let found = UserService::find_by_subject(&db, "auth0|42").await.unwrap();
        assert_eq!(found.user_id, user.user_id);
        assert_eq!(found.role, "student");

        let err = UserService::find_by_subject(&db, "auth0|43").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
