use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create cities table
        manager
            .create_table(
                Table::create()
                    .table(Cities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cities::CityId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Cities::CityName).string().not_null())
                    .col(ColumnDef::new(Cities::Region).string())
                    .to_owned(),
            )
            .await?;

        // Create users table; rows are provisioned by the identity provider
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::UserId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::AuthSubject)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::PhoneNumber).string())
                    .col(ColumnDef::new(Users::Gender).string())
                    .col(ColumnDef::new(Users::Dob).date())
                    .col(ColumnDef::new(Users::ProfilePicture).string())
                    .col(ColumnDef::new(Users::CityId).integer())
                    .col(ColumnDef::new(Users::Area).string())
                    .col(
                        ColumnDef::new(Users::Role)
                            .string()
                            .not_null()
                            .default("student"),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-users-city_id")
                            .from(Users::Table, Users::CityId)
                            .to(Cities::Table, Cities::CityId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create lookup tables
        manager
            .create_table(
                Table::create()
                    .table(Languages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Languages::LanguageId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Languages::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::SubjectId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subjects::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GradeLevels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GradeLevels::GradeLevelId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GradeLevels::Level).string().not_null())
                    .col(ColumnDef::new(GradeLevels::SubLevel).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create teachers table, one row per user
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teachers::TeacherId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Teachers::UserId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Teachers::TeachingMode).text().not_null())
                    .col(ColumnDef::new(Teachers::Bio).text().not_null())
                    .col(
                        ColumnDef::new(Teachers::ExperienceYears)
                            .integer()
                            .not_null()
                            .check(Expr::col(Teachers::ExperienceYears).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Teachers::HourlyRate)
                            .double()
                            .not_null()
                            .check(Expr::col(Teachers::HourlyRate).gt(0)),
                    )
                    .col(ColumnDef::new(Teachers::Education).string().not_null())
                    .col(
                        ColumnDef::new(Teachers::DurationPerSession)
                            .integer()
                            .not_null()
                            .default(60),
                    )
                    .col(
                        ColumnDef::new(Teachers::IsVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Teachers::Rating).double())
                    .col(
                        ColumnDef::new(Teachers::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Teachers::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-teachers-user_id")
                            .from(Teachers::Table, Teachers::UserId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create teacher_availability table
        manager
            .create_table(
                Table::create()
                    .table(TeacherAvailability::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeacherAvailability::AvailabilityId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TeacherAvailability::TeacherId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TeacherAvailability::Day).text().not_null())
                    .col(
                        ColumnDef::new(TeacherAvailability::StartTime)
                            .time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeacherAvailability::EndTime)
                            .time()
                            .not_null(),
                    )
                    .check(
                        Expr::col(TeacherAvailability::EndTime)
                            .gt(Expr::col(TeacherAvailability::StartTime)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-teacher_availability-teacher_id")
                            .from(TeacherAvailability::Table, TeacherAvailability::TeacherId)
                            .to(Teachers::Table, Teachers::TeacherId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create teacher_languages junction table (many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(TeacherLanguages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeacherLanguages::TeacherId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeacherLanguages::LanguageId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(TeacherLanguages::TeacherId)
                            .col(TeacherLanguages::LanguageId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-teacher_languages-teacher_id")
                            .from(TeacherLanguages::Table, TeacherLanguages::TeacherId)
                            .to(Teachers::Table, Teachers::TeacherId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-teacher_languages-language_id")
                            .from(TeacherLanguages::Table, TeacherLanguages::LanguageId)
                            .to(Languages::Table, Languages::LanguageId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create teacher_subjects junction table (many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(TeacherSubjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeacherSubjects::TeacherId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeacherSubjects::SubjectId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(TeacherSubjects::TeacherId)
                            .col(TeacherSubjects::SubjectId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-teacher_subjects-teacher_id")
                            .from(TeacherSubjects::Table, TeacherSubjects::TeacherId)
                            .to(Teachers::Table, Teachers::TeacherId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-teacher_subjects-subject_id")
                            .from(TeacherSubjects::Table, TeacherSubjects::SubjectId)
                            .to(Subjects::Table, Subjects::SubjectId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create teacher_grade_levels junction table (many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(TeacherGradeLevels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeacherGradeLevels::TeacherId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeacherGradeLevels::GradeLevelId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(TeacherGradeLevels::TeacherId)
                            .col(TeacherGradeLevels::GradeLevelId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-teacher_grade_levels-teacher_id")
                            .from(TeacherGradeLevels::Table, TeacherGradeLevels::TeacherId)
                            .to(Teachers::Table, Teachers::TeacherId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-teacher_grade_levels-grade_level_id")
                            .from(
                                TeacherGradeLevels::Table,
                                TeacherGradeLevels::GradeLevelId,
                            )
                            .to(GradeLevels::Table, GradeLevels::GradeLevelId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create bookings table
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bookings::BookingId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Bookings::TeacherId).integer().not_null())
                    .col(ColumnDef::new(Bookings::StudentId).integer().not_null())
                    .col(ColumnDef::new(Bookings::Day).text().not_null())
                    .col(ColumnDef::new(Bookings::StartTime).time().not_null())
                    .col(ColumnDef::new(Bookings::EndTime).time().not_null())
                    .col(ColumnDef::new(Bookings::Note).text())
                    .col(
                        ColumnDef::new(Bookings::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .check(Expr::col(Bookings::EndTime).gt(Expr::col(Bookings::StartTime)))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-bookings-teacher_id")
                            .from(Bookings::Table, Bookings::TeacherId)
                            .to(Teachers::Table, Teachers::TeacherId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-bookings-student_id")
                            .from(Bookings::Table, Bookings::StudentId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create notifications table
        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notifications::NotificationId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Notifications::UserId).integer().not_null())
                    .col(ColumnDef::new(Notifications::Message).text().not_null())
                    .col(
                        ColumnDef::new(Notifications::IsRead)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Notifications::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-notifications-user_id")
                            .from(Notifications::Table, Notifications::UserId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order due to foreign key constraints
        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TeacherGradeLevels::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TeacherSubjects::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TeacherLanguages::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TeacherAvailability::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(GradeLevels::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Languages::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Cities::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Cities {
    Table,
    CityId,
    CityName,
    Region,
}

#[derive(Iden)]
enum Users {
    Table,
    UserId,
    AuthSubject,
    Name,
    Email,
    PhoneNumber,
    Gender,
    Dob,
    ProfilePicture,
    CityId,
    Area,
    Role,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Languages {
    Table,
    LanguageId,
    Name,
}

#[derive(Iden)]
enum Subjects {
    Table,
    SubjectId,
    Name,
}

#[derive(Iden)]
enum GradeLevels {
    Table,
    GradeLevelId,
    Level,
    SubLevel,
}

#[derive(Iden)]
enum Teachers {
    Table,
    TeacherId,
    UserId,
    TeachingMode,
    Bio,
    ExperienceYears,
    HourlyRate,
    Education,
    DurationPerSession,
    IsVerified,
    Rating,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum TeacherAvailability {
    Table,
    AvailabilityId,
    TeacherId,
    Day,
    StartTime,
    EndTime,
}

#[derive(Iden)]
enum TeacherLanguages {
    Table,
    TeacherId,
    LanguageId,
}

#[derive(Iden)]
enum TeacherSubjects {
    Table,
    TeacherId,
    SubjectId,
}

#[derive(Iden)]
enum TeacherGradeLevels {
    Table,
    TeacherId,
    GradeLevelId,
}

#[derive(Iden)]
enum Bookings {
    Table,
    BookingId,
    TeacherId,
    StudentId,
    Day,
    StartTime,
    EndTime,
    Note,
    CreatedAt,
}

#[derive(Iden)]
enum Notifications {
    Table,
    NotificationId,
    UserId,
    Message,
    IsRead,
    CreatedAt,
}
