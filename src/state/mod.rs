//! Dashboard derived state
//!
//! Pure helpers over the fetched alert collection: status counts, filtering,
//! sorting and server-confirmed replacement. Nothing here mutates the source
//! list except where a `&mut Vec` is taken explicitly.

use chrono::DateTime;
use std::cmp::Ordering;

use crate::types::{Alert, AlertStatus};

/// Status predicate for the dashboard list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    InProgress,
    Resolved,
}

impl StatusFilter {
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Pending => "Pending",
            StatusFilter::InProgress => "In Progress",
            StatusFilter::Resolved => "Resolved",
        }
    }

    pub fn variants() -> &'static [StatusFilter] {
        &[
            StatusFilter::All,
            StatusFilter::Pending,
            StatusFilter::InProgress,
            StatusFilter::Resolved,
        ]
    }

    pub fn matches(&self, status: AlertStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == AlertStatus::Pending,
            StatusFilter::InProgress => status == AlertStatus::InProgress,
            StatusFilter::Resolved => status == AlertStatus::Resolved,
        }
    }

    /// Select the presented subsequence, preserving relative order.
    pub fn apply(&self, alerts: &[Alert]) -> Vec<Alert> {
        alerts
            .iter()
            .filter(|a| self.matches(a.status))
            .cloned()
            .collect()
    }

    pub fn count(&self, stats: &AlertStats) -> usize {
        match self {
            StatusFilter::All => stats.total,
            StatusFilter::Pending => stats.pending,
            StatusFilter::InProgress => stats.in_progress,
            StatusFilter::Resolved => stats.resolved,
        }
    }
}

/// Per-status counts over the full collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlertStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

impl AlertStats {
    pub fn compute(alerts: &[Alert]) -> Self {
        let mut stats = Self {
            total: alerts.len(),
            ..Self::default()
        };
        for alert in alerts {
            match alert.status {
                AlertStatus::Pending => stats.pending += 1,
                AlertStatus::InProgress => stats.in_progress += 1,
                AlertStatus::Resolved => stats.resolved += 1,
            }
        }
        stats
    }
}

// ============================================================================
// Sorting (table view)
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Timestamp,
    Id,
    Name,
    Status,
}

impl SortField {
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Id => "ID",
            SortField::Name => "Name",
            SortField::Timestamp => "Time",
            SortField::Status => "Status",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortDir {
    Ascending,
    #[default]
    Descending,
}

impl SortDir {
    pub fn toggled(self) -> Self {
        match self {
            SortDir::Ascending => SortDir::Descending,
            SortDir::Descending => SortDir::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDir::Ascending => "\u{25B2}",
            SortDir::Descending => "\u{25BC}",
        }
    }
}

/// Next (field, direction) after a column-header click: the active column
/// toggles its direction, a new column starts ascending.
pub fn next_sort(
    field: SortField,
    dir: SortDir,
    clicked: SortField,
) -> (SortField, SortDir) {
    if field == clicked {
        (field, dir.toggled())
    } else {
        (clicked, SortDir::Ascending)
    }
}

fn status_rank(status: AlertStatus) -> u8 {
    match status {
        AlertStatus::Pending => 0,
        AlertStatus::InProgress => 1,
        AlertStatus::Resolved => 2,
    }
}

fn compare(a: &Alert, b: &Alert, field: SortField) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Name => a
            .name
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .cmp(&b.name.as_deref().unwrap_or("").to_lowercase()),
        // Compare parsed instants; unparseable timestamps sort first
        SortField::Timestamp => {
            let ta = DateTime::parse_from_rfc3339(&a.timestamp).ok();
            let tb = DateTime::parse_from_rfc3339(&b.timestamp).ok();
            ta.cmp(&tb)
        }
        SortField::Status => status_rank(a.status).cmp(&status_rank(b.status)),
    }
}

/// Stable sort of a presented sequence by the chosen column.
pub fn sort_alerts(alerts: &mut [Alert], field: SortField, dir: SortDir) {
    alerts.sort_by(|a, b| {
        let ordering = compare(a, b, field);
        match dir {
            SortDir::Ascending => ordering,
            SortDir::Descending => ordering.reverse(),
        }
    });
}

/// Replace the element with the same id by the server-returned object.
/// Leaves the list untouched when the id is unknown.
pub fn replace_alert(alerts: &mut Vec<Alert>, updated: Alert) {
    if let Some(slot) = alerts.iter_mut().find(|a| a.id == updated.id) {
        *slot = updated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(id: i64, status: AlertStatus, name: &str, timestamp: &str) -> Alert {
        Alert {
            id,
            name: Some(name.to_string()),
            phone: Some("9876543210".to_string()),
            latitude: 12.9,
            longitude: 77.6,
            message: None,
            status,
            timestamp: timestamp.to_string(),
        }
    }

    fn sample() -> Vec<Alert> {
        vec![
            alert(1, AlertStatus::Pending, "Asha", "2024-05-01T10:00:00Z"),
            alert(2, AlertStatus::Resolved, "Ben", "2024-05-01T09:00:00Z"),
            alert(3, AlertStatus::Pending, "Cara", "2024-05-02T08:00:00Z"),
            alert(4, AlertStatus::InProgress, "Dev", "2024-04-30T23:59:00Z"),
        ]
    }

    #[test]
    fn stats_count_every_status() {
        let stats = AlertStats::compute(&sample());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.resolved, 1);
    }

    #[test]
    fn filter_preserves_relative_order() {
        let alerts = sample();
        let pending = StatusFilter::Pending.apply(&alerts);
        assert_eq!(
            pending.iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
        // source untouched
        assert_eq!(alerts.len(), 4);
    }

    #[test]
    fn all_filter_is_identity() {
        let alerts = sample();
        assert_eq!(StatusFilter::All.apply(&alerts), alerts);
    }

    #[test]
    fn timestamp_sort_uses_parsed_dates() {
        // offsets make lexical and instant ordering disagree
        let mut alerts = vec![
            alert(1, AlertStatus::Pending, "a", "2024-05-01T12:00:00+05:30"),
            alert(2, AlertStatus::Pending, "b", "2024-05-01T08:00:00+00:00"),
        ];
        sort_alerts(&mut alerts, SortField::Timestamp, SortDir::Ascending);
        // 12:00+05:30 is 06:30 UTC, before 08:00 UTC
        assert_eq!(alerts[0].id, 1);
    }

    #[test]
    fn descending_reverses_order() {
        let mut alerts = sample();
        sort_alerts(&mut alerts, SortField::Id, SortDir::Descending);
        assert_eq!(
            alerts.iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![4, 3, 2, 1]
        );
    }

    #[test]
    fn header_clicks_toggle_then_reset() {
        let (field, dir) = next_sort(SortField::Timestamp, SortDir::Descending, SortField::Timestamp);
        assert_eq!((field, dir), (SortField::Timestamp, SortDir::Ascending));

        let (field, dir) = next_sort(field, dir, SortField::Timestamp);
        assert_eq!(dir, SortDir::Descending);

        // switching column always starts ascending
        let (field, dir) = next_sort(field, dir, SortField::Name);
        assert_eq!((field, dir), (SortField::Name, SortDir::Ascending));
    }

    #[test]
    fn name_sort_ignores_case() {
        let mut alerts = vec![
            alert(1, AlertStatus::Pending, "beta", "2024-05-01T10:00:00Z"),
            alert(2, AlertStatus::Pending, "Alpha", "2024-05-01T10:00:00Z"),
        ];
        sort_alerts(&mut alerts, SortField::Name, SortDir::Ascending);
        assert_eq!(alerts[0].id, 2);
    }

    #[test]
    fn replacement_is_by_identity() {
        let mut alerts = sample();
        let mut updated = alerts[1].clone();
        updated.status = AlertStatus::InProgress;
        replace_alert(&mut alerts, updated);
        assert_eq!(alerts[1].status, AlertStatus::InProgress);
        assert_eq!(alerts[0].status, AlertStatus::Pending);
    }

    #[test]
    fn replacement_with_unknown_id_is_a_no_op() {
        let mut alerts = sample();
        let ghost = alert(99, AlertStatus::Resolved, "x", "2024-05-01T10:00:00Z");
        replace_alert(&mut alerts, ghost);
        assert_eq!(alerts, sample());
    }
}
