pub mod association;
pub mod availability;
pub mod clock;
pub mod days;
pub mod profile;

#[cfg(feature = "database")]
mod column;
