pub mod auth;
pub mod hotel;
pub mod user;

mod router;
pub use router::get_router;
