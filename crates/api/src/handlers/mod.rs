pub mod appointment;
pub mod style;
