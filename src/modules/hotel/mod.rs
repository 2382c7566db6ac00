pub mod repository;
pub mod routes;

pub use routes::get_router;
