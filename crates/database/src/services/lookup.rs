use crate::entities::{city, grade_level, language, subject};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

/// Read-only reference tables, each ordered by id
pub struct LookupService;

impl LookupService {
    pub async fn languages(db: &DatabaseConnection) -> Result<Vec<language::Model>, DbErr> {
        language::Entity::find()
            .order_by_asc(language::Column::LanguageId)
            .all(db)
            .await
    }

    pub async fn subjects(db: &DatabaseConnection) -> Result<Vec<subject::Model>, DbErr> {
        subject::Entity::find()
            .order_by_asc(subject::Column::SubjectId)
            .all(db)
            .await
    }

    pub async fn grade_levels(db: &DatabaseConnection) -> Result<Vec<grade_level::Model>, DbErr> {
        grade_level::Entity::find()
            .order_by_asc(grade_level::Column::GradeLevelId)
            .all(db)
            .await
    }

    pub async fn cities(db: &DatabaseConnection) -> Result<Vec<city::Model>, DbErr> {
        city::Entity::find()
            .order_by_asc(city::Column::CityId)
            .all(db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{seed_lookups, setup};

    #[tokio::test]
    async fn lists_are_ordered_by_id() {
        let db = setup().await;
        let seeded = seed_lookups(&db).await;

        let languages: Vec<_> = LookupService::languages(&db)
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.language_id)
            .collect();
        assert_eq!(languages, seeded.languages);

        let grade_levels = LookupService::grade_levels(&db).await.unwrap();
        assert_eq!(grade_levels.len(), seeded.grade_levels.len());
        assert_eq!(grade_levels[0].level, "Primary");

        assert_eq!(LookupService::cities(&db).await.unwrap()[0].city_name, "Lahore");
    }

    #[tokio::test]
    async fn empty_tables_give_empty_lists() {
        let db = setup().await;
        assert!(LookupService::subjects(&db).await.unwrap().is_empty());
    }
}
