use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ListMoviesQuery {
    pub genre: Option<String>,
}
