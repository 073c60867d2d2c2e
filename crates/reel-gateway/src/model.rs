mod message;
mod movie;

pub use message::{ErrorResponse, HealthResponse, MessageResponse};
pub use movie::ListMoviesQuery;
