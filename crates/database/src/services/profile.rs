use crate::{
    entities::{
        city, grade_level, language, subject, teacher, teacher_grade_level, teacher_language,
        teacher_subject, user,
    },
    error::{ServiceError, ServiceResult},
};
use log::{info, warn};
use models::profile::{NewTeacherProfile, TeacherProfilePatch};
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
    sea_query::Expr,
};
use serde::Serialize;
use std::collections::HashMap;

/// A teacher joined with its account, city and linked lookups
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeacherProfile {
    pub teacher: teacher::Model,
    pub user: user::Model,
    pub city: Option<city::Model>,
    pub languages: Vec<language::Model>,
    pub subjects: Vec<subject::Model>,
    pub grade_levels: Vec<grade_level::Model>,
}

pub struct ProfileService;

impl ProfileService {
    /// Inserts the teacher row for `user_id`.
    ///
    /// A second profile for the same user fails on the unique `user_id`.
    pub async fn create_profile(
        db: &DatabaseConnection,
        user_id: i32,
        profile: NewTeacherProfile,
    ) -> Result<teacher::Model, DbErr> {
        let teacher = teacher::ActiveModel {
            user_id: Set(user_id),
            teaching_mode: Set(profile.teaching_mode),
            bio: Set(profile.bio),
            experience_years: Set(profile.experience_years),
            hourly_rate: Set(profile.hourly_rate),
            education: Set(profile.education),
            duration_per_session: Set(profile.duration_per_session),
            is_verified: Set(false),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!("Created teacher {} for user {user_id}", teacher.teacher_id);
        Ok(teacher)
    }

    /// Applies the present fields of `patch` and stamps `updated_at` with the database clock
    pub async fn update_profile(
        db: &DatabaseConnection,
        user_id: i32,
        patch: TeacherProfilePatch,
    ) -> ServiceResult<teacher::Model> {
        let changes = teacher::ActiveModel {
            teaching_mode: patch.teaching_mode.map_or(NotSet, Set),
            bio: patch.bio.map_or(NotSet, Set),
            experience_years: patch.experience_years.map_or(NotSet, Set),
            hourly_rate: patch.hourly_rate.map_or(NotSet, Set),
            education: patch.education.map_or(NotSet, Set),
            duration_per_session: patch.duration_per_session.map_or(NotSet, Set),
            ..Default::default()
        };

        let txn = db.begin().await?;

        let result = teacher::Entity::update_many()
            .set(changes)
            .col_expr(teacher::Column::UpdatedAt, Expr::current_timestamp().into())
            .filter(teacher::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            return Err(Self::no_teacher(user_id));
        }

        let updated = teacher::Entity::find()
            .filter(teacher::Column::UserId.eq(user_id))
            .one(&txn)
            .await?
            .ok_or_else(|| Self::no_teacher(user_id))?;

        txn.commit().await?;
        Ok(updated)
    }

    pub async fn find_by_user(
        db: &DatabaseConnection,
        user_id: i32,
    ) -> Result<Option<teacher::Model>, DbErr> {
        teacher::Entity::find()
            .filter(teacher::Column::UserId.eq(user_id))
            .one(db)
            .await
    }

    /// Resolves the teacher owned by `user_id`
    pub async fn teacher_id_for_user(db: &DatabaseConnection, user_id: i32) -> ServiceResult<i32> {
        teacher::Entity::find()
            .select_only()
            .column(teacher::Column::TeacherId)
            .filter(teacher::Column::UserId.eq(user_id))
            .into_tuple::<i32>()
            .one(db)
            .await?
            .ok_or_else(|| Self::no_teacher(user_id))
    }

    pub async fn teacher_exists(db: &DatabaseConnection, teacher_id: i32) -> Result<bool, DbErr> {
        let count = teacher::Entity::find_by_id(teacher_id).count(db).await?;
        Ok(count > 0)
    }

    pub async fn get_profile(
        db: &DatabaseConnection,
        teacher_id: i32,
    ) -> ServiceResult<TeacherProfile> {
        let teacher = teacher::Entity::find_by_id(teacher_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("Teacher {teacher_id} not found")))?;

        Self::single(db, teacher).await
    }

    pub async fn get_profile_by_user(
        db: &DatabaseConnection,
        user_id: i32,
    ) -> ServiceResult<TeacherProfile> {
        let teacher = Self::find_by_user(db, user_id)
            .await?
            .ok_or_else(|| Self::no_teacher(user_id))?;

        Self::single(db, teacher).await
    }

    /// Every teacher, ordered by id
    pub async fn list_profiles(db: &DatabaseConnection) -> Result<Vec<TeacherProfile>, DbErr> {
        let teachers = teacher::Entity::find()
            .order_by_asc(teacher::Column::TeacherId)
            .all(db)
            .await?;

        Self::assemble(db, teachers).await
    }

    /// Deletes the user; the teacher row and everything it owns cascade
    pub async fn delete_profile(db: &DatabaseConnection, user_id: i32) -> Result<u64, DbErr> {
        let result = user::Entity::delete_by_id(user_id).exec(db).await?;

        if result.rows_affected > 0 {
            info!("Deleted user {user_id} and the records it owns");
        }
        Ok(result.rows_affected)
    }

    async fn single(
        db: &DatabaseConnection,
        teacher: teacher::Model,
    ) -> ServiceResult<TeacherProfile> {
        let teacher_id = teacher.teacher_id;

        Self::assemble(db, vec![teacher])
            .await?
            .pop()
            .ok_or_else(|| ServiceError::not_found(format!("Teacher {teacher_id} has no user")))
    }

    /// Joins each teacher with its user, city and lookups in one query per table
    async fn assemble<C: ConnectionTrait>(
        db: &C,
        teachers: Vec<teacher::Model>,
    ) -> Result<Vec<TeacherProfile>, DbErr> {
        if teachers.is_empty() {
            return Ok(Vec::new());
        }

        let teacher_ids: Vec<i32> = teachers.iter().map(|t| t.teacher_id).collect();
        let user_ids: Vec<i32> = teachers.iter().map(|t| t.user_id).collect();

        let mut users: HashMap<i32, (user::Model, Option<city::Model>)> = user::Entity::find()
            .filter(user::Column::UserId.is_in(user_ids))
            .find_also_related(city::Entity)
            .all(db)
            .await?
            .into_iter()
            .map(|(user, city)| (user.user_id, (user, city)))
            .collect();

        let mut languages = group_by_teacher(
            teacher_language::Entity::find()
                .filter(teacher_language::Column::TeacherId.is_in(teacher_ids.clone()))
                .find_also_related(language::Entity)
                .all(db)
                .await?
                .into_iter()
                .map(|(link, language)| (link.teacher_id, language)),
        );
        let mut subjects = group_by_teacher(
            teacher_subject::Entity::find()
                .filter(teacher_subject::Column::TeacherId.is_in(teacher_ids.clone()))
                .find_also_related(subject::Entity)
                .all(db)
                .await?
                .into_iter()
                .map(|(link, subject)| (link.teacher_id, subject)),
        );
        let mut grade_levels = group_by_teacher(
            teacher_grade_level::Entity::find()
                .filter(teacher_grade_level::Column::TeacherId.is_in(teacher_ids))
                .find_also_related(grade_level::Entity)
                .all(db)
                .await?
                .into_iter()
                .map(|(link, grade_level)| (link.teacher_id, grade_level)),
        );

        let mut profiles = Vec::with_capacity(teachers.len());
        for teacher in teachers {
            let Some((user, city)) = users.remove(&teacher.user_id) else {
                warn!(
                    "Teacher {} references missing user {}",
                    teacher.teacher_id, teacher.user_id
                );
                continue;
            };

            let mut languages = languages.remove(&teacher.teacher_id).unwrap_or_default();
            languages.sort_by_key(|l| l.language_id);
            languages.dedup_by_key(|l| l.language_id);

            let mut subjects = subjects.remove(&teacher.teacher_id).unwrap_or_default();
            subjects.sort_by_key(|s| s.subject_id);
            subjects.dedup_by_key(|s| s.subject_id);

            let mut grade_levels = grade_levels.remove(&teacher.teacher_id).unwrap_or_default();
            grade_levels.sort_by_key(|g| g.grade_level_id);
            grade_levels.dedup_by_key(|g| g.grade_level_id);

            profiles.push(TeacherProfile {
                teacher,
                user,
                city,
                languages,
                subjects,
                grade_levels,
            });
        }

        Ok(profiles)
    }

    fn no_teacher(user_id: i32) -> ServiceError {
        ServiceError::not_found(format!("User {user_id} has no teacher profile"))
    }
}

fn group_by_teacher<T>(rows: impl Iterator<Item = (i32, Option<T>)>) -> HashMap<i32, Vec<T>> {
    let mut grouped: HashMap<i32, Vec<T>> = HashMap::new();
    for (teacher_id, item) in rows {
        if let Some(item) = item {
            grouped.entry(teacher_id).or_default().push(item);
        }
    }
    grouped
}
