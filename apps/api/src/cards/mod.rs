//! Card CRUD — persistence and route handlers for contact cards.

pub mod handlers;
pub mod repo;
