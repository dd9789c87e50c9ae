//! Response models. Deserialization reads Radarr's camelCase payloads and
//! fills documented defaults for anything missing; serialization writes a
//! snake_case projection.

mod command;
mod de;
mod history;
mod movie;
mod page;
mod queue;
mod system;

pub use command::Command;
pub use history::{HistoryPage, HistoryRecord};
pub use movie::{AlternativeTitle, Language, MediaCover, Movie, MovieCollection, RatingValue};
pub use page::Page;
pub use queue::{QueuePage, QueueRecord, QueueStatus};
pub use system::{Backup, DiskSpace, HealthCheck, ScheduledTask, SystemStatus};
