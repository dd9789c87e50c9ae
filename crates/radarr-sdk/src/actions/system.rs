use std::sync::Arc;

use super::parse;
use crate::client::RestClient;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::options::QueryParams;
use crate::responses::{Backup, DiskSpace, HealthCheck, ScheduledTask, SystemStatus};

pub struct SystemActions {
    client: Arc<dyn RestClient>,
}

impl SystemActions {
    pub fn new(client: Arc<dyn RestClient>) -> Self {
        Self { client }
    }

    pub async fn status(&self) -> Result<SystemStatus> {
        parse(self.client.get(Endpoint::SystemStatus.into(), &QueryParams::new()).await?)
    }

    pub async fn health(&self) -> Result<Vec<HealthCheck>> {
        parse(self.client.get(Endpoint::Health.into(), &QueryParams::new()).await?)
    }

    pub async fn disk_space(&self) -> Result<Vec<DiskSpace>> {
        parse(self.client.get(Endpoint::DiskSpace.into(), &QueryParams::new()).await?)
    }

    pub async fn tasks(&self) -> Result<Vec<ScheduledTask>> {
        parse(self.client.get(Endpoint::SystemTask.into(), &QueryParams::new()).await?)
    }

    pub async fn task(&self, id: i64) -> Result<ScheduledTask> {
        parse(self.client.get(Endpoint::SystemTaskById.with_id(id), &QueryParams::new()).await?)
    }

    pub async fn backups(&self) -> Result<Vec<Backup>> {
        parse(self.client.get(Endpoint::SystemBackup.into(), &QueryParams::new()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{factory, FakeRestClient};
    use serde_json::json;

    fn setup() -> (Arc<FakeRestClient>, SystemActions) {
        let fake = Arc::new(FakeRestClient::new());
        let actions = SystemActions::new(fake.clone());
        (fake, actions)
    }

    #[tokio::test]
    async fn test_status() {
        let (fake, system) = setup();
        fake.on_get(Endpoint::SystemStatus, factory::system_status());

        let status = system.status().await.unwrap();
        assert_eq!(status.version, "5.2.6.8376");
        assert!(status.is_docker);
    }

    #[tokio::test]
    async fn test_health() {
        let (fake, system) = setup();
        fake.on_get(
            Endpoint::Health,
            json!([factory::health_check(
                "IndexerStatusCheck",
                "error",
                "All indexers are unavailable"
            )]),
        );

        let checks = system.health().await.unwrap();
        assert_eq!(checks.len(), 1);
        assert!(checks[0].is_error());
        assert!(system.health().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_disk_space() {
        let (fake, system) = setup();
        fake.on_get(
            Endpoint::DiskSpace,
            json!([{
                "path": "/movies",
                "label": "media",
                "freeSpace": 536_870_912u64,
                "totalSpace": 1_073_741_824u64
            }]),
        );

        let disks = system.disk_space().await.unwrap();
        assert_eq!(disks[0].label, "media");
        assert_eq!(disks[0].used_percentage(), 50.0);
    }

    #[tokio::test]
    async fn test_tasks() {
        let (fake, system) = setup();
        fake.on_get(
            Endpoint::SystemTask,
            json!([{"id": 1, "name": "Backup", "taskName": "Backup", "interval": 10080}]),
        );
        fake.on_get(
            Endpoint::SystemTaskById.with_id(1),
            json!({"id": 1, "name": "Backup", "lastDuration": "00:00:03"}),
        );

        assert_eq!(system.tasks().await.unwrap()[0].interval, 10080);
        let task = system.task(1).await.unwrap();
        assert_eq!(task.last_run_duration(), Some(std::time::Duration::from_secs(3)));
    }

    #[tokio::test]
    async fn test_backups() {
        let (fake, system) = setup();
        fake.on_get(
            Endpoint::SystemBackup,
            json!([{"id": 1, "name": "radarr_backup.zip", "type": "manual", "size": 1024}]),
        );
        let backups = system.backups().await.unwrap();
        assert_eq!(backups[0].backup_type, "manual");
    }
}
