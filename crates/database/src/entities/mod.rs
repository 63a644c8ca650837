pub mod booking;
pub mod city;
pub mod grade_level;
pub mod language;
pub mod notification;
pub mod subject;
pub mod teacher;
pub mod teacher_availability;
pub mod teacher_grade_level;
pub mod teacher_language;
pub mod teacher_subject;
pub mod user;

