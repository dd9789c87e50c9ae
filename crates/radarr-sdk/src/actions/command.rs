use serde_json::{json, Map, Value};
use std::sync::Arc;

use super::{parse, parse_object};
use crate::client::RestClient;
use crate::endpoint::Endpoint;
use crate::enums::CommandName;
use crate::error::Result;
use crate::options::QueryParams;
use crate::responses::Command;

pub struct CommandActions {
    client: Arc<dyn RestClient>,
}

impl CommandActions {
    pub fn new(client: Arc<dyn RestClient>) -> Self {
        Self { client }
    }

    pub async fn all(&self) -> Result<Vec<Command>> {
        parse(self.client.get(Endpoint::Command.into(), &QueryParams::new()).await?)
    }

    pub async fn get(&self, id: i64) -> Result<Command> {
        parse(self.client.get(Endpoint::CommandById.with_id(id), &QueryParams::new()).await?)
    }

    /// Queue a command. `body` carries the command's arguments next to its name.
    pub async fn run(&self, name: CommandName, body: Map<String, Value>) -> Result<Command> {
        let mut payload = Map::new();
        payload.insert("name".to_string(), Value::from(name.as_str()));
        payload.extend(body);
        parse_object(self.client.post(Endpoint::Command.into(), &Value::Object(payload)).await?)
    }

    pub async fn cancel(&self, id: i64) -> Result<()> {
        self.client
            .delete(Endpoint::CommandById.with_id(id), &QueryParams::new())
            .await
    }

    /// Refresh metadata for the given movies, or for the whole library when `ids` is empty
    pub async fn refresh(&self, ids: &[i64]) -> Result<Command> {
        let mut body = Map::new();
        if !ids.is_empty() {
            body.insert("movieIds".to_string(), json!(ids));
        }
        self.run(CommandName::RefreshMovie, body).await
    }

    pub async fn missing(&self) -> Result<Command> {
        self.run(CommandName::MissingMoviesSearch, Map::new()).await
    }

    pub async fn cutoff_unmet(&self) -> Result<Command> {
        self.run(CommandName::CutoffUnmetMoviesSearch, Map::new()).await
    }

    pub async fn search_movies(&self, ids: &[i64]) -> Result<Command> {
        self.run(CommandName::MoviesSearch, movie_ids(ids)).await
    }

    pub async fn rename_movies(&self, ids: &[i64]) -> Result<Command> {
        self.run(CommandName::RenameMovie, movie_ids(ids)).await
    }

    pub async fn rename_files(&self, movie_id: i64, file_ids: &[i64]) -> Result<Command> {
        let mut body = Map::new();
        body.insert("movieId".to_string(), json!(movie_id));
        body.insert("files".to_string(), json!(file_ids));
        self.run(CommandName::RenameFiles, body).await
    }

    pub async fn rss_sync(&self) -> Result<Command> {
        self.run(CommandName::RssSync, Map::new()).await
    }

    pub async fn backup(&self) -> Result<Command> {
        self.run(CommandName::Backup, Map::new()).await
    }
}

fn movie_ids(ids: &[i64]) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert("movieIds".to_string(), json!(ids));
    body
}
