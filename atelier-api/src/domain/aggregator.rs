//! KPI reductions over project records.
//!
//! Everything here is a pure function of its inputs: "today" is always passed
//! in, nothing reads the clock, nothing fails. Missing numbers count as zero
//! and worker ids that do not resolve count as unassigned.

use std::collections::{BTreeMap, HashMap};

use itertools::Itertools;
use time::Date;

use super::{
    models::{ProjectRecord, Status, Worker, WorkerId},
    TimeWindow,
};

/// Which records a summary is computed over.
#[derive(Debug, Clone, Copy)]
pub struct RecordFilter<'a> {
    pub window: TimeWindow,
    pub today: Date,
    pub worker: Option<&'a WorkerId>,
}

impl<'a> RecordFilter<'a> {
    pub fn new(window: TimeWindow, today: Date) -> Self {
        Self {
            window,
            today,
            worker: None,
        }
    }

    pub fn with_worker(mut self, worker: Option<&'a WorkerId>) -> Self {
        self.worker = worker;
        self
    }

    pub fn matches(&self, record: &ProjectRecord) -> bool {
        if let Some(worker) = self.worker {
            if record.assigned_worker.as_ref() != Some(worker) {
                return false;
            }
        }
        self.window.contains(self.today, record.start_date)
    }

    /// The matching records, in input order.
    pub fn apply<'r>(&self, records: &'r [ProjectRecord]) -> Vec<&'r ProjectRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.pending + self.in_progress + self.completed
    }

    fn add(&mut self, status: Status) {
        match status {
            Status::Pending => self.pending += 1,
            Status::InProgress => self.in_progress += 1,
            Status::Completed => self.completed += 1,
        }
    }
}

/// KPI summary of a filtered record set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub counts: StatusCounts,
    /// Revenue of completed records, CHF.
    pub completed_revenue: f64,
    /// Estimated hours of open (not completed) records per assigned worker id.
    pub hours_by_worker: BTreeMap<WorkerId, f64>,
    /// Estimated hours of open records with no worker assigned.
    pub unassigned_hours: f64,
}

pub fn summarize(records: &[ProjectRecord], filter: &RecordFilter<'_>) -> Summary {
    summarize_refs(&filter.apply(records))
}

/// Summary over records that have already been filtered.
pub fn summarize_refs(records: &[&ProjectRecord]) -> Summary {
    let mut summary = Summary {
        total: records.len(),
        ..Default::default()
    };

    for record in records {
        summary.counts.add(record.status);

        if record.is_completed() {
            summary.completed_revenue += record.revenue();
            continue;
        }

        let hours = record.estimated_hours();
        match &record.assigned_worker {
            Some(worker) => *summary.hours_by_worker.entry(worker.clone()).or_default() += hours,
            None => summary.unassigned_hours += hours,
        }
    }

    summary
}

/// One worker's open load against their weekly capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadEntry {
    pub worker_id: WorkerId,
    pub name: String,
    pub assigned_hours: f64,
    pub capacity_hours: f64,
    /// `assigned / capacity` as a rounded percentage; 0 without capacity.
    pub utilization_percent: u32,
    pub overloaded: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkloadReport {
    /// One entry per known worker, in roster order.
    pub workers: Vec<WorkloadEntry>,
    /// Open hours with no worker or with a worker id the roster does not know.
    pub unassigned_hours: f64,
}

pub fn workload_report(summary: &Summary, workers: &[Worker]) -> WorkloadReport {
    let entries = workers
        .iter()
        .map(|worker| {
            let assigned_hours = summary
                .hours_by_worker
                .get(&worker.id)
                .copied()
                .unwrap_or(0.0);
            let capacity_hours = worker.capacity();
            let utilization_percent = if capacity_hours > 0.0 {
                (assigned_hours / capacity_hours * 100.0).round().max(0.0) as u32
            } else {
                0
            };

            WorkloadEntry {
                worker_id: worker.id.clone(),
                name: worker.name.clone(),
                assigned_hours,
                capacity_hours,
                utilization_percent,
                overloaded: assigned_hours > capacity_hours,
            }
        })
        .collect();

    let dangling_hours: f64 = summary
        .hours_by_worker
        .iter()
        .filter(|(id, _)| !workers.iter().any(|w| &w.id == *id))
        .map(|(_, hours)| hours)
        .sum();

    WorkloadReport {
        workers: entries,
        unassigned_hours: summary.unassigned_hours + dangling_hours,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRevenue {
    /// `YYYY-MM` of the projects' start date.
    pub month: String,
    pub revenue: f64,
}

/// Completed revenue grouped by start month, oldest month first.
pub fn revenue_by_month(records: &[&ProjectRecord]) -> Vec<MonthlyRevenue> {
    let mut by_month: HashMap<String, f64> = HashMap::new();

    for record in records.iter().filter(|r| r.is_completed()) {
        let key = format!(
            "{:04}-{:02}",
            record.start_date.year(),
            u8::from(record.start_date.month())
        );
        *by_month.entry(key).or_default() += record.revenue();
    }

    by_month
        .into_iter()
        .sorted_by(|a, b| a.0.cmp(&b.0))
        .map(|(month, revenue)| MonthlyRevenue { month, revenue })
        .collect()
}
