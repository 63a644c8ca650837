pub mod association;
pub mod availability;
pub mod booking;
pub mod lookup;
pub mod notification;
pub mod profile;
pub mod user;
