use std::cmp::Ordering;

use serde::Deserialize;
use strum::{Display, EnumString};

use super::models::ProjectRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum SortKey {
    Name,
    Client,
    #[default]
    StartDate,
    Deadline,
    Status,
    Revenue,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Stable sort of the project table. Records without a deadline always sort
/// last when sorting by deadline, whatever the order.
pub fn sort_records(records: &mut [&ProjectRecord], key: SortKey, order: SortOrder) {
    records.sort_by(|a, b| compare(a, b, key, order));
}

fn compare(a: &ProjectRecord, b: &ProjectRecord, key: SortKey, order: SortOrder) -> Ordering {
    let directed = |ordering: Ordering| match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    };

    match key {
        SortKey::Name => directed(
            a.project_name
                .to_lowercase()
                .cmp(&b.project_name.to_lowercase()),
        ),
        SortKey::Client => directed(a.client.to_lowercase().cmp(&b.client.to_lowercase())),
        SortKey::StartDate => directed(a.start_date.cmp(&b.start_date)),
        SortKey::Deadline => match (a.deadline, b.deadline) {
            (Some(x), Some(y)) => directed(x.cmp(&y)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortKey::Status => directed(a.status.cmp(&b.status)),
        SortKey::Revenue => directed(a.revenue().total_cmp(&b.revenue())),
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;
    use crate::domain::models::{fixtures::record, Status};

    fn ids(records: &[&ProjectRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn deadline_sort_puts_missing_deadlines_last_both_ways() {
        let mut a = record("a", date!(2025 - 01 - 01));
        a.deadline = Some(date!(2025 - 02 - 01));
        let b = record("b", date!(2025 - 01 - 01));
        let mut c = record("c", date!(2025 - 01 - 01));
        c.deadline = Some(date!(2025 - 01 - 15));
        let all = [a, b, c];

        let mut refs: Vec<&ProjectRecord> = all.iter().collect();
        sort_records(&mut refs, SortKey::Deadline, SortOrder::Asc);
        assert_eq!(ids(&refs), vec!["c", "a", "b"]);

        sort_records(&mut refs, SortKey::Deadline, SortOrder::Desc);
        assert_eq!(ids(&refs), vec!["a", "c", "b"]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let mut x = record("x", date!(2025 - 01 - 01));
        x.status = Status::InProgress;
        let y = record("y", date!(2025 - 01 - 02));
        let mut z = record("z", date!(2025 - 01 - 03));
        z.status = Status::InProgress;
        let all = [x, y, z];

        let mut refs: Vec<&ProjectRecord> = all.iter().collect();
        sort_records(&mut refs, SortKey::Status, SortOrder::Asc);
        assert_eq!(ids(&refs), vec!["y", "x", "z"]);
    }

    #[test]
    fn revenue_sort_uses_fallback_price() {
        let mut cheap = record("cheap", date!(2025 - 01 - 01));
        cheap.agreed_price = Some(100.0);
        let mut units = record("units", date!(2025 - 01 - 01));
        units.price_per_unit = 50.0;
        units.unit_count = Some(10);
        let all = [cheap, units];

        let mut refs: Vec<&ProjectRecord> = all.iter().collect();
        sort_records(&mut refs, SortKey::Revenue, SortOrder::Desc);
        assert_eq!(ids(&refs), vec!["units", "cheap"]);
    }

    #[test]
    fn parses_query_values() {
        assert_eq!("startDate".parse::<SortKey>().unwrap(), SortKey::StartDate);
        assert_eq!("client".parse::<SortKey>().unwrap(), SortKey::Client);
        assert_eq!("ASC".parse::<SortOrder>().unwrap(), SortOrder::Asc);
    }
}
