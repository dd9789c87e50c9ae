use serde::{Deserialize, Serialize};

/// The *arr backend a canonical record was collected from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Service {
    Radarr,
    Sonarr,
    Lidarr,
    Readarr,
}

impl Service {
    pub fn name(&self) -> &'static str {
        match self {
            Service::Radarr => "radarr",
            Service::Sonarr => "sonarr",
            Service::Lidarr => "lidarr",
            Service::Readarr => "readarr",
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
