use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Display;
use std::str::FromStr;

/// The fixed set of genres a movie may be tagged with.
///
/// Parsing is case-insensitive; the canonical spelling is what gets stored
/// and serialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Crime,
    Drama,
    Fantasy,
    Horror,
    Romance,
    SciFi,
    Thriller,
}

impl Genre {
    pub const ALL: [Genre; 10] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Comedy,
        Genre::Crime,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Romance,
        Genre::SciFi,
        Genre::Thriller,
    ];

    /// Returns the canonical name of the genre.
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Comedy => "Comedy",
            Genre::Crime => "Crime",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Romance => "Romance",
            Genre::SciFi => "Sci-Fi",
            Genre::Thriller => "Thriller",
        }
    }

    /// Comma separated list of every canonical name, for error messages.
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(Genre::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGenre(pub String);

impl Display for UnknownGenre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown genre '{}'", self.0)
    }
}

impl std::error::Error for UnknownGenre {}

impl FromStr for Genre {
    type Err = UnknownGenre;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|genre| genre.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownGenre(s.to_string()))
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Genre {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Genre {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("drama".parse::<Genre>().unwrap(), Genre::Drama);
        assert_eq!("DRAMA".parse::<Genre>().unwrap(), Genre::Drama);
        assert_eq!("sci-fi".parse::<Genre>().unwrap(), Genre::SciFi);
    }

    #[test]
    fn parse_unknown() {
        assert!("Documentary".parse::<Genre>().is_err());
        assert!("".parse::<Genre>().is_err());
        assert!("SciFi".parse::<Genre>().is_err());
    }

    #[test]
    fn serializes_canonical_name() {
        let json = serde_json::to_string(&vec![Genre::SciFi, Genre::Crime]).unwrap();
        assert_eq!(json, r#"["Sci-Fi","Crime"]"#);
    }

    #[test]
    fn deserialize_normalizes_case() {
        let genres: Vec<Genre> = serde_json::from_str(r#"["action","THRILLER"]"#).unwrap();
        assert_eq!(genres, vec![Genre::Action, Genre::Thriller]);
    }

    #[test]
    fn every_name_round_trips() {
        for genre in Genre::ALL {
            assert_eq!(genre.as_str().parse::<Genre>().unwrap(), genre);
        }
    }
}
