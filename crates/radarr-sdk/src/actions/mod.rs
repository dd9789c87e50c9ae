//! One module per Radarr resource. Each call assembles its parameters, makes
//! exactly one request through the [`RestClient`](crate::client::RestClient)
//! and parses the response.

mod calendar;
mod command;
mod history;
mod movie;
mod queue;
mod system;
mod wanted;

pub use calendar::CalendarActions;
pub use command::CommandActions;
pub use history::HistoryActions;
pub use movie::MovieActions;
pub use queue::QueueActions;
pub use system::SystemActions;
pub use wanted::WantedActions;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;

fn parse<T: DeserializeOwned>(value: Value) -> Result<T> {
    Ok(serde_json::from_value(value)?)
}

/// Like [`parse`], but `null` or an empty list parses as an empty object.
/// Endpoints such as `command` and `movie` list on GET and return one object on
/// POST, so their registered default is `[]`.
fn parse_object<T: DeserializeOwned>(value: Value) -> Result<T> {
    match value {
        Value::Null => parse(Value::Object(Default::default())),
        Value::Array(items) if items.is_empty() => parse(Value::Object(Default::default())),
        value => parse(value),
    }
}
