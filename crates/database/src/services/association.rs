use crate::entities::{teacher_grade_level, teacher_language, teacher_subject};
use log::info;
use models::association::{AssociationKind, distinct_ids};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, TransactionTrait,
};

/// A join table linking teachers to one lookup entity
pub trait TeacherLink: EntityTrait
where
    <Self as EntityTrait>::Model: IntoActiveModel<Self::Link>,
{
    type Link: ActiveModelTrait<Entity = Self> + Send;

    fn teacher_column() -> Self::Column;
    fn link(teacher_id: i32, target_id: i32) -> Self::Link;
}

impl TeacherLink for teacher_language::Entity {
    type Link = teacher_language::ActiveModel;

    fn teacher_column() -> Self::Column {
        teacher_language::Column::TeacherId
    }

    fn link(teacher_id: i32, language_id: i32) -> Self::Link {
        teacher_language::ActiveModel {
            teacher_id: Set(teacher_id),
            language_id: Set(language_id),
        }
    }
}

impl TeacherLink for teacher_subject::Entity {
    type Link = teacher_subject::ActiveModel;

    fn teacher_column() -> Self::Column {
        teacher_subject::Column::TeacherId
    }

    fn link(teacher_id: i32, subject_id: i32) -> Self::Link {
        teacher_subject::ActiveModel {
            teacher_id: Set(teacher_id),
            subject_id: Set(subject_id),
        }
    }
}

impl TeacherLink for teacher_grade_level::Entity {
    type Link = teacher_grade_level::ActiveModel;

    fn teacher_column() -> Self::Column {
        teacher_grade_level::Column::TeacherId
    }

    fn link(teacher_id: i32, grade_level_id: i32) -> Self::Link {
        teacher_grade_level::ActiveModel {
            teacher_id: Set(teacher_id),
            grade_level_id: Set(grade_level_id),
        }
    }
}

pub struct AssociationService;

impl AssociationService {
    /// Replaces the teacher's links of one kind with `ids`.
    ///
    /// Duplicate ids collapse to one link and an empty slice clears the kind.
    /// Returns the ids now linked, in first-seen order.
    pub async fn update_associations(
        db: &DatabaseConnection,
        teacher_id: i32,
        kind: AssociationKind,
        ids: &[i32],
    ) -> Result<Vec<i32>, DbErr> {
        let ids = distinct_ids(ids);

        match kind {
            AssociationKind::Languages => {
                Self::replace_links::<teacher_language::Entity>(db, teacher_id, &ids).await?
            }
            AssociationKind::Subjects => {
                Self::replace_links::<teacher_subject::Entity>(db, teacher_id, &ids).await?
            }
            AssociationKind::GradeLevels => {
                Self::replace_links::<teacher_grade_level::Entity>(db, teacher_id, &ids).await?
            }
        }

        info!("Linked teacher {teacher_id} to {} {kind}", ids.len());
        Ok(ids)
    }

    async fn replace_links<E: TeacherLink>(
        db: &DatabaseConnection,
        teacher_id: i32,
        ids: &[i32],
    ) -> Result<(), DbErr>
    where
        E::Model: IntoActiveModel<E::Link>,
    {
        let txn = db.begin().await?;

        E::delete_many()
            .filter(E::teacher_column().eq(teacher_id))
            .exec(&txn)
            .await?;

        if !ids.is_empty() {
            E::insert_many(ids.iter().map(|&id| E::link(teacher_id, id)))
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await
    }
}
