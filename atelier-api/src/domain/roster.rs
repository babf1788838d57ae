use tokio::sync::RwLock;

use super::{
    models::{Worker, WorkerId},
    RosterError,
};

/// The workers known to the dashboard. Workers are added and their hours
/// edited, never removed.
#[derive(Debug, Default)]
pub struct WorkerRoster {
    workers: RwLock<Vec<Worker>>,
}

impl WorkerRoster {
    pub fn new(workers: Vec<Worker>) -> Self {
        Self {
            workers: RwLock::new(workers),
        }
    }

    /// The three bench workers of the demo workshop.
    pub fn demo() -> Self {
        Self::new(vec![
            Worker::new("1", "Jordi").with_hours(40.0, 0.0),
            Worker::new("2", "Maria").with_hours(35.0, 2.0),
            Worker::new("3", "Hans").with_hours(42.0, 5.0),
        ])
    }

    /// Snapshot in insertion order.
    pub async fn list(&self) -> Vec<Worker> {
        self.workers.read().await.clone()
    }

    /// Add a worker with the default weekly hours.
    pub async fn add(&self, name: &str) -> Result<Worker, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::BlankName);
        }

        let worker = Worker::new(WorkerId::generate(), name);
        self.workers.write().await.push(worker.clone());
        Ok(worker)
    }

    /// Set the weekly extra hours, and the base hours when given.
    pub async fn set_hours(
        &self,
        id: &WorkerId,
        extra_hours: f64,
        base_hours: Option<f64>,
    ) -> Result<Worker, RosterError> {
        let valid = |h: f64| h.is_finite() && h >= 0.0;
        if !valid(extra_hours) || base_hours.is_some_and(|h| !valid(h)) {
            return Err(RosterError::InvalidHours);
        }

        let mut workers = self.workers.write().await;
        let worker = workers
            .iter_mut()
            .find(|w| &w.id == id)
            .ok_or_else(|| RosterError::NotFound(id.clone()))?;

        worker.extra_hours = extra_hours;
        if let Some(base) = base_hours {
            worker.base_hours = base;
        }
        Ok(worker.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn add_uses_default_hours_and_appends() {
        let roster = WorkerRoster::demo();
        let added = roster.add("  Lea ").await.unwrap();

        assert_eq!(added.name, "Lea");
        assert_eq!(added.base_hours, 40.0);
        assert_eq!(added.extra_hours, 0.0);

        let workers = roster.list().await;
        assert_eq!(workers.len(), 4);
        assert_eq!(workers.last().unwrap().id, added.id);
    }

    #[tokio::test]
    async fn add_rejects_blank_names() {
        let roster = WorkerRoster::default();
        assert!(matches!(roster.add("   ").await, Err(RosterError::BlankName)));
    }

    #[tokio::test]
    async fn set_hours_updates_extra_and_optionally_base() {
        let roster = WorkerRoster::demo();
        let maria = WorkerId::from("2");

        let updated = roster.set_hours(&maria, 6.0, None).await.unwrap();
        assert_eq!(updated.base_hours, 35.0);
        assert_eq!(updated.capacity(), 41.0);

        let updated = roster.set_hours(&maria, 0.0, Some(30.0)).await.unwrap();
        assert_eq!(updated.capacity(), 30.0);
        assert!(roster.list().await.contains(&updated));
    }

    #[tokio::test]
    async fn set_hours_rejects_unknown_workers_and_negative_hours() {
        let roster = WorkerRoster::demo();

        let missing = roster.set_hours(&WorkerId::from("9"), 1.0, None).await;
        assert!(matches!(missing, Err(RosterError::NotFound(_))));

        let negative = roster.set_hours(&WorkerId::from("1"), -1.0, None).await;
        assert!(matches!(negative, Err(RosterError::InvalidHours)));
    }
}
