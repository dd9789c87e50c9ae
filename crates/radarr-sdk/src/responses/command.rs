use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::de;

/// A queued, running or finished command from `command`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Command {
    #[serde(default, deserialize_with = "de::null_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "de::null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub command_name: String,
    pub message: Option<String>,
    pub body: Option<Value>,
    #[serde(default, deserialize_with = "de::null_default")]
    pub priority: String,
    #[serde(default = "de::unknown", deserialize_with = "de::null_unknown")]
    pub status: String,
    pub result: Option<String>,
    pub queued: Option<String>,
    pub started: Option<String>,
    pub ended: Option<String>,
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "de::null_default")]
    pub trigger: String,
    pub state_change_time: Option<String>,
    #[serde(default, deserialize_with = "de::null_default")]
    pub send_updates_to_client: bool,
    #[serde(default, deserialize_with = "de::null_default")]
    pub update_scheduled_task: bool,
}

impl Command {
    pub fn is_completed(&self) -> bool {
        self.status == "completed"
    }

    pub fn is_failed(&self) -> bool {
        self.status == "failed"
    }

    pub fn is_running(&self) -> bool {
        matches!(self.status.as_str(), "queued" | "started")
    }
}
