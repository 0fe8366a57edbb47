//! # Salon Core
//!
//! Domain types shared by the persistence and HTTP layers of the salon booking
//! service: clients, haircut styles, appointments, the error taxonomy, and the
//! [`store::AppointmentStore`] seam the HTTP layer is written against.

pub mod errors;
pub mod models;
pub mod store;
