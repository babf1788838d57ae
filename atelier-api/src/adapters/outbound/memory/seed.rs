use time::{macros::date, Date};

use crate::domain::models::{
    Category, ProjectDetails, ProjectId, ProjectRecord, Status, WorkerId,
};

struct Sample {
    id: &'static str,
    category: Category,
    start: Date,
    deadline: Date,
    name: &'static str,
    client: &'static str,
    status: Status,
    worker: &'static str,
    estimated: f64,
    actual: f64,
    per_unit: f64,
    agreed: f64,
    units: Option<u32>,
    details: ProjectDetails,
}

impl From<Sample> for ProjectRecord {
    fn from(s: Sample) -> Self {
        ProjectRecord {
            id: ProjectId::new(s.id),
            category: s.category,
            project_name: s.name.to_string(),
            client: s.client.to_string(),
            start_date: s.start,
            deadline: Some(s.deadline),
            status: s.status,
            assigned_worker: Some(WorkerId::new(s.worker)),
            estimated_minutes: s.estimated,
            actual_minutes: s.actual,
            price_per_unit: s.per_unit,
            agreed_price: Some(s.agreed),
            unit_count: s.units,
            details: s.details,
        }
    }
}

fn text(s: &str) -> Option<String> {
    Some(s.to_string())
}

pub(super) fn demo_projects() -> Vec<ProjectRecord> {
    vec![
        Sample {
            id: "p1",
            category: Category::Pave,
            start: date!(2025 - 10 - 28),
            deadline: date!(2025 - 11 - 05),
            name: "Pomona Ring midi",
            client: "Ann Perica",
            status: Status::InProgress,
            worker: "1",
            estimated: 1165.0,
            actual: 500.0,
            per_unit: 17.0,
            agreed: 2500.0,
            units: Some(148),
            details: ProjectDetails {
                stone_type: text("weiße Diamanten"),
                material: text("WG + GG + Roségold"),
                style: text("wildes Pavé, Honeycomb"),
                layout: text("nicht vorhanden"),
                fixation: text("einfache Fixierung"),
                gold_weight: Some(3.0),
                ..Default::default()
            },
        },
        Sample {
            id: "p2",
            category: Category::Pave,
            start: date!(2025 - 08 - 15),
            deadline: date!(2025 - 08 - 30),
            name: "Ornamentina nur Pavé für Mandaringranat",
            client: "Beyer",
            status: Status::Completed,
            worker: "2",
            estimated: 300.0,
            actual: 300.0,
            per_unit: 17.0,
            agreed: 1500.0,
            units: Some(28),
            details: ProjectDetails {
                stone_type: text("weiße Diamanten"),
                material: text("WG + GG + Roségold"),
                style: text("Fadenpavé"),
                layout: text("nicht vorhanden"),
                fixation: text("einfache Fixierung"),
                gold_weight: Some(0.3),
                ..Default::default()
            },
        },
        Sample {
            id: "p3",
            category: Category::Pave,
            start: date!(2025 - 09 - 01),
            deadline: date!(2025 - 09 - 20),
            name: "Vintage Sapphire Restauration",
            client: "Lohri",
            status: Status::Completed,
            worker: "1",
            estimated: 1500.0,
            actual: 1500.0,
            per_unit: 25.0,
            agreed: 3200.0,
            units: Some(50),
            details: ProjectDetails {
                stone_type: text("Saphir"),
                material: text("Platin"),
                style: text("Castle"),
                ..Default::default()
            },
        },
        Sample {
            id: "f1",
            category: Category::Fassung,
            start: date!(2025 - 10 - 28),
            deadline: date!(2025 - 11 - 10),
            name: "Pomona Ring bold",
            client: "Ann Perica",
            status: Status::Pending,
            worker: "3",
            estimated: 120.0,
            actual: 0.0,
            per_unit: 70.0,
            agreed: 1500.0,
            units: None,
            details: ProjectDetails {
                shape: text("Tropfen"),
                material: text("WG + GG + Roségold"),
                style: text("runde Griffe"),
                gold_weight: Some(0.1),
                ..Default::default()
            },
        },
        Sample {
            id: "a1",
            category: Category::Alliance,
            start: date!(2025 - 10 - 23),
            deadline: date!(2025 - 11 - 15),
            name: "Alliance Champagnerfarbige Diamanten",
            client: "Beyer",
            status: Status::InProgress,
            worker: "1",
            estimated: 778.0,
            actual: 100.0,
            per_unit: 59.0,
            agreed: 950.0,
            units: Some(16),
            details: ProjectDetails {
                stone_size: Some(4.1),
                stone_type: text("Korund + farbige Diamanten"),
                material: text("Rotgold"),
                style: text("Fishtail"),
                shape: text("eckig"),
                gold_weight: Some(5.2),
                ..Default::default()
            },
        },
        Sample {
            id: "a2",
            category: Category::Alliance,
            start: date!(2025 - 11 - 01),
            deadline: date!(2025 - 11 - 20),
            name: "Turmalin-Tsavo Ring",
            client: "Beyer",
            status: Status::Pending,
            worker: "2",
            estimated: 288.0,
            actual: 0.0,
            per_unit: 24.0,
            agreed: 800.0,
            units: Some(20),
            details: ProjectDetails {
                stone_size: Some(2.0),
                stone_type: text("empfindliche Steine"),
                material: text("WG + GG + Roségold"),
                style: text("Arkaden"),
                shape: text("rund"),
                gold_weight: Some(0.5),
                ..Default::default()
            },
        },
        Sample {
            id: "a3",
            category: Category::Alliance,
            start: date!(2025 - 07 - 10),
            deadline: date!(2025 - 07 - 25),
            name: "Summer Collection Set",
            client: "Meister",
            status: Status::Completed,
            worker: "3",
            estimated: 600.0,
            actual: 600.0,
            per_unit: 50.0,
            agreed: 4500.0,
            units: Some(30),
            details: ProjectDetails {
                stone_size: Some(3.0),
                stone_type: text("Diamonds"),
                material: text("Gold"),
                ..Default::default()
            },
        },
    ]
    .into_iter()
    .map(ProjectRecord::from)
    .collect()
}
