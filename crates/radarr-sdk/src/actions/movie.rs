use serde_json::{Map, Value};
use std::sync::Arc;

use super::{parse, parse_object};
use crate::client::RestClient;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::options::QueryParams;
use crate::responses::{Movie, MovieCollection};

pub struct MovieActions {
    client: Arc<dyn RestClient>,
}

impl MovieActions {
    pub fn new(client: Arc<dyn RestClient>) -> Self {
        Self { client }
    }

    /// Every movie in the library, or only the one with the given TMDb id
    pub async fn all(&self, tmdb_id: Option<u32>) -> Result<MovieCollection> {
        let mut params = QueryParams::new();
        params.set_opt("tmdbId", tmdb_id);
        parse(self.client.get(Endpoint::Movie.into(), &params).await?)
    }

    pub async fn get(&self, id: i64) -> Result<Movie> {
        parse(self.client.get(Endpoint::MovieById.with_id(id), &QueryParams::new()).await?)
    }

    /// Search the metadata provider by free text
    pub async fn lookup(&self, term: &str) -> Result<MovieCollection> {
        let params = QueryParams::new().with("term", term);
        parse(self.client.get(Endpoint::MovieLookup.into(), &params).await?)
    }

    pub async fn lookup_by_tmdb(&self, tmdb_id: u32) -> Result<Movie> {
        let params = QueryParams::new().with("tmdbId", tmdb_id);
        parse(self.client.get(Endpoint::MovieLookupTmdb.into(), &params).await?)
    }

    pub async fn lookup_by_imdb(&self, imdb_id: &str) -> Result<Movie> {
        let params = QueryParams::new().with("imdbId", imdb_id);
        parse(self.client.get(Endpoint::MovieLookupImdb.into(), &params).await?)
    }

    pub async fn add(&self, movie: Map<String, Value>) -> Result<Movie> {
        parse_object(self.client.post(Endpoint::Movie.into(), &Value::Object(movie)).await?)
    }

    /// `PUT movie/{id}`. The id is sent in the body too; an `id` already in
    /// `movie` takes precedence.
    pub async fn update(&self, id: i64, movie: Map<String, Value>) -> Result<Movie> {
        let mut body = Map::new();
        body.insert("id".to_string(), Value::from(id));
        body.extend(movie);
        parse_object(self.client.put(Endpoint::MovieById.with_id(id), &Value::Object(body)).await?)
    }

    pub async fn delete(
        &self,
        id: i64,
        delete_files: bool,
        add_import_exclusion: bool,
    ) -> Result<()> {
        let params = QueryParams::new()
            .with("deleteFiles", delete_files)
            .with("addImportExclusion", add_import_exclusion);
        self.client.delete(Endpoint::MovieById.with_id(id), &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{factory, FakeRestClient, HttpMethod};
    use serde_json::json;

    fn setup() -> (Arc<FakeRestClient>, MovieActions) {
        let fake = Arc::new(FakeRestClient::new());
        let actions = MovieActions::new(fake.clone());
        (fake, actions)
    }

    #[tokio::test]
    async fn test_all() {
        let (fake, movies) = setup();
        fake.on_get(Endpoint::Movie, json!([factory::movie(1), factory::missing_movie(2)]));

        let all = movies.all(None).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all.missing().len(), 1);
        assert!(fake.last_call().unwrap().params.is_empty());
    }

    #[tokio::test]
    async fn test_all_filtered_by_tmdb_id() {
        let (fake, movies) = setup();
        movies.all(Some(603)).await.unwrap();
        assert_eq!(fake.last_call().unwrap().params.get("tmdbId"), Some("603"));
    }

    #[tokio::test]
    async fn test_get_substitutes_id() {
        let (fake, movies) = setup();
        fake.on_get(Endpoint::MovieById.with_id(5), factory::movie(5));

        let movie = movies.get(5).await.unwrap();
        assert_eq!(movie.id, 5);
        assert_eq!(movie.title, "Movie 5");
    }

    #[tokio::test]
    async fn test_get_with_empty_response_uses_defaults() {
        let (_fake, movies) = setup();
        let movie = movies.get(77).await.unwrap();
        assert_eq!(movie.id, 0);
        assert_eq!(movie.status, "unknown");
    }

    #[tokio::test]
    async fn test_lookups() {
        let (fake, movies) = setup();
        fake.on_get(Endpoint::MovieLookup, json!([factory::movie(1)]));

        assert_eq!(movies.lookup("the matrix").await.unwrap().len(), 1);
        assert_eq!(fake.last_call().unwrap().params.get("term"), Some("the matrix"));

        movies.lookup_by_tmdb(603).await.unwrap();
        assert_eq!(fake.last_call().unwrap().params.get("tmdbId"), Some("603"));

        movies.lookup_by_imdb("tt0133093").await.unwrap();
        assert_eq!(fake.last_call().unwrap().params.get("imdbId"), Some("tt0133093"));
    }

    #[tokio::test]
    async fn test_add_posts_body() {
        let (fake, movies) = setup();
        fake.on_post(Endpoint::Movie, factory::movie(9));

        let mut body = Map::new();
        body.insert("tmdbId".to_string(), json!(603));
        body.insert("qualityProfileId".to_string(), json!(1));
        let added = movies.add(body).await.unwrap();

        assert_eq!(added.id, 9);
        let call = fake.last_call().unwrap();
        assert_eq!(call.method, HttpMethod::Post);
        assert_eq!(call.body, Some(json!({"tmdbId": 603, "qualityProfileId": 1})));
    }

    #[tokio::test]
    async fn test_add_with_empty_response_uses_defaults() {
        let (fake, movies) = setup();
        let added = movies.add(Map::new()).await.unwrap();
        assert_eq!(added.id, 0);
        assert_eq!(added.status, "unknown");
        assert!(added.title.is_empty());

        fake.on_post(Endpoint::Movie, Value::Null);
        assert_eq!(movies.add(Map::new()).await.unwrap().id, 0);
    }

    #[tokio::test]
    async fn test_update_merges_id() {
        let (fake, movies) = setup();
        fake.on_put(Endpoint::MovieById.with_id(4), factory::movie(4));

        let mut body = Map::new();
        body.insert("monitored".to_string(), json!(false));
        movies.update(4, body).await.unwrap();

        let call = fake.last_call().unwrap();
        assert_eq!(call.route, Endpoint::MovieById.with_id(4));
        assert_eq!(call.body, Some(json!({"id": 4, "monitored": false})));
    }

    #[tokio::test]
    async fn test_delete_params() {
        let (fake, movies) = setup();
        movies.delete(3, true, false).await.unwrap();

        let call = fake.last_call().unwrap();
        assert_eq!(call.method, HttpMethod::Delete);
        assert_eq!(call.route, Endpoint::MovieById.with_id(3));
        assert_eq!(call.params.get("deleteFiles"), Some("true"));
        assert_eq!(call.params.get("addImportExclusion"), Some("false"));
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let (fake, movies) = setup();
        fake.fail(HttpMethod::Get, Endpoint::Movie, 401, "Unauthorized");
        assert!(movies.all(None).await.is_err());
    }
}
