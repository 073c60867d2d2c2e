mod health;
mod movies;

pub use health::{fallback_handler, health_handler, method_not_allowed_handler, root_handler};
pub use movies::{
    create_movie_handler, delete_movie_handler, get_movie_handler, list_movies_handler,
    update_movie_handler,
};
