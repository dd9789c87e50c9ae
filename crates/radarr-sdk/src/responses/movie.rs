use arr_models::values::round2;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::de;
use crate::enums::MovieStatus;

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Language {
    #[serde(default, deserialize_with = "de::null_default")]
    pub id: i64,
    #[serde(default = "unknown_language", deserialize_with = "null_language")]
    pub name: String,
}

impl Default for Language {
    fn default() -> Self {
        Self {
            id: 0,
            name: unknown_language(),
        }
    }
}

fn unknown_language() -> String {
    "Unknown".to_string()
}

fn null_language<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(unknown_language))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RatingValue {
    #[serde(default, deserialize_with = "de::null_default")]
    pub votes: u64,
    #[serde(default, deserialize_with = "de::null_default")]
    pub value: f64,
    #[serde(default, rename(deserialize = "type"), deserialize_with = "de::null_default")]
    pub rating_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct MediaCover {
    #[serde(default, deserialize_with = "de::null_default")]
    pub cover_type: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub url: String,
    pub remote_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct AlternativeTitle {
    #[serde(default, deserialize_with = "de::null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub source_type: String,
}

/// A movie as returned by `movie`, `movie/{id}`, the lookup endpoints,
/// the calendar and the wanted lists.
///
/// Every field tolerates being absent: ids and sizes default to 0, strings to
/// empty, flags to false, collections to empty, and optional scalars to `None`.
/// `status` defaults to `"unknown"` and the original language to `"Unknown"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Movie {
    #[serde(default, deserialize_with = "de::null_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "de::null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub sort_title: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub original_title: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub original_language: Language,
    pub year: Option<u32>,
    pub tmdb_id: Option<u32>,
    pub imdb_id: Option<String>,
    #[serde(default = "de::unknown", deserialize_with = "de::null_unknown")]
    pub status: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub overview: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub monitored: bool,
    #[serde(default, deserialize_with = "de::null_default")]
    pub has_file: bool,
    #[serde(default, deserialize_with = "de::null_default")]
    pub path: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub quality_profile_id: i64,
    /// Minutes
    pub runtime: Option<u32>,
    pub added: Option<String>,
    pub in_cinemas: Option<String>,
    pub physical_release: Option<String>,
    pub digital_release: Option<String>,
    #[serde(default, deserialize_with = "de::null_default")]
    pub genres: Vec<String>,
    #[serde(default, deserialize_with = "de::null_default")]
    pub ratings: BTreeMap<String, RatingValue>,
    pub movie_file: Option<Value>,
    #[serde(default, deserialize_with = "de::null_default")]
    pub images: Vec<MediaCover>,
    #[serde(default, deserialize_with = "de::null_default")]
    pub alternative_titles: Vec<AlternativeTitle>,
    #[serde(default, deserialize_with = "de::null_default")]
    pub size_on_disk: u64,
    #[serde(default, deserialize_with = "de::null_default")]
    pub is_available: bool,
    pub folder_name: Option<String>,
}

impl Movie {
    pub fn is_released(&self) -> bool {
        self.status == MovieStatus::Released.as_str()
    }

    pub fn is_downloaded(&self) -> bool {
        self.has_file
    }

    pub fn is_monitored(&self) -> bool {
        self.monitored
    }

    pub fn size_on_disk_gb(&self) -> f64 {
        round2(self.size_on_disk as f64 / BYTES_PER_GB)
    }

    /// `None` for `"unknown"` or any status outside Radarr's vocabulary
    pub fn status_kind(&self) -> Option<MovieStatus> {
        self.status.parse().ok()
    }

    pub fn image(&self, cover_type: &str) -> Option<&MediaCover> {
        self.images.iter().find(|image| image.cover_type == cover_type)
    }
}

/// An ordered list of movies with filtered views. Filters never modify the
/// collection they are called on.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct MovieCollection {
    movies: Vec<Movie>,
}

impl MovieCollection {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    pub fn all(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn first(&self) -> Option<&Movie> {
        self.movies.first()
    }

    pub fn last(&self) -> Option<&Movie> {
        self.movies.last()
    }

    pub fn get(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }

    pub fn monitored(&self) -> Self {
        self.filtered(|movie| movie.monitored)
    }

    pub fn downloaded(&self) -> Self {
        self.filtered(|movie| movie.has_file)
    }

    /// Monitored movies without a file
    pub fn missing(&self) -> Self {
        self.filtered(|movie| movie.monitored && !movie.has_file)
    }

    pub fn into_vec(self) -> Vec<Movie> {
        self.movies
    }

    fn filtered(&self, predicate: impl Fn(&Movie) -> bool) -> Self {
        self.movies.iter().filter(|movie| predicate(movie)).cloned().collect()
    }
}

impl IntoIterator for MovieCollection {
    type Item = Movie;
    type IntoIter = std::vec::IntoIter<Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.into_iter()
    }
}

impl<'a> IntoIterator for &'a MovieCollection {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}

impl FromIterator<Movie> for MovieCollection {
    fn from_iter<I: IntoIterator<Item = Movie>>(iter: I) -> Self {
        Self {
            movies: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Movie>> for MovieCollection {
    fn from(movies: Vec<Movie>) -> Self {
        Self { movies }
    }
}
