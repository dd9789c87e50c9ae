use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Release status of a movie as Radarr reports it
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum MovieStatus {
    Tba,
    Announced,
    InCinemas,
    Released,
    Deleted,
}

impl MovieStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovieStatus::Tba => "tba",
            MovieStatus::Announced => "announced",
            MovieStatus::InCinemas => "inCinemas",
            MovieStatus::Released => "released",
            MovieStatus::Deleted => "deleted",
        }
    }
}

impl FromStr for MovieStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tba" => Ok(MovieStatus::Tba),
            "announced" => Ok(MovieStatus::Announced),
            "inCinemas" => Ok(MovieStatus::InCinemas),
            "released" => Ok(MovieStatus::Released),
            "deleted" => Ok(MovieStatus::Deleted),
            _ => Err(format!("Invalid movie status: {}", s)),
        }
    }
}

/// History event types. Responses carry the camelCase name, while the
/// `eventType` query filter takes the numeric id.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum HistoryEventType {
    Unknown,
    Grabbed,
    DownloadFolderImported,
    DownloadFailed,
    MovieFileDeleted,
    MovieFolderImported,
    MovieFileRenamed,
    DownloadIgnored,
}

impl HistoryEventType {
    pub fn numeric_value(&self) -> u8 {
        match self {
            HistoryEventType::Unknown => 0,
            HistoryEventType::Grabbed => 1,
            HistoryEventType::DownloadFolderImported => 3,
            HistoryEventType::DownloadFailed => 4,
            HistoryEventType::MovieFileDeleted => 6,
            HistoryEventType::MovieFolderImported => 7,
            HistoryEventType::MovieFileRenamed => 8,
            HistoryEventType::DownloadIgnored => 9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryEventType::Unknown => "unknown",
            HistoryEventType::Grabbed => "grabbed",
            HistoryEventType::DownloadFolderImported => "downloadFolderImported",
            HistoryEventType::DownloadFailed => "downloadFailed",
            HistoryEventType::MovieFileDeleted => "movieFileDeleted",
            HistoryEventType::MovieFolderImported => "movieFolderImported",
            HistoryEventType::MovieFileRenamed => "movieFileRenamed",
            HistoryEventType::DownloadIgnored => "downloadIgnored",
        }
    }
}

impl FromStr for HistoryEventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unknown" => Ok(HistoryEventType::Unknown),
            "grabbed" => Ok(HistoryEventType::Grabbed),
            "downloadFolderImported" => Ok(HistoryEventType::DownloadFolderImported),
            "downloadFailed" => Ok(HistoryEventType::DownloadFailed),
            "movieFileDeleted" => Ok(HistoryEventType::MovieFileDeleted),
            "movieFolderImported" => Ok(HistoryEventType::MovieFolderImported),
            "movieFileRenamed" => Ok(HistoryEventType::MovieFileRenamed),
            "downloadIgnored" => Ok(HistoryEventType::DownloadIgnored),
            _ => Err(format!("Invalid history event type: {}", s)),
        }
    }
}

/// Commands accepted by `POST /command`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CommandName {
    RefreshMovie,
    RescanMovie,
    MoviesSearch,
    DownloadedMoviesScan,
    RssSync,
    RenameMovie,
    RenameFiles,
    Backup,
    MissingMoviesSearch,
    CutoffUnmetMoviesSearch,
    ManualImport,
    InteractiveImport,
}

impl CommandName {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandName::RefreshMovie => "RefreshMovie",
            CommandName::RescanMovie => "RescanMovie",
            CommandName::MoviesSearch => "MoviesSearch",
            CommandName::DownloadedMoviesScan => "DownloadedMoviesScan",
            CommandName::RssSync => "RssSync",
            CommandName::RenameMovie => "RenameMovie",
            CommandName::RenameFiles => "RenameFiles",
            CommandName::Backup => "Backup",
            CommandName::MissingMoviesSearch => "MissingMoviesSearch",
            CommandName::CutoffUnmetMoviesSearch => "CutoffUnmetMoviesSearch",
            CommandName::ManualImport => "ManualImport",
            CommandName::InteractiveImport => "InteractiveImport",
        }
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}
