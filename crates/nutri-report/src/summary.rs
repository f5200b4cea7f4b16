//! Recent-history summary for one child.

use chrono::{DateTime, Utc};
use nutri_model::{Child, DISCLAIMER, MeasurementRecord, NutritionStatus};

/// Records shown in a summary unless the caller asks otherwise.
pub const DEFAULT_RECENT: usize = 5;

/// Direction of the latest status relative to the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Improving,
    Stable,
    Worsening,
}

impl Trend {
    fn between(previous: NutritionStatus, latest: NutritionStatus) -> Self {
        match latest.cmp(&previous) {
            std::cmp::Ordering::Less => Trend::Improving,
            std::cmp::Ordering::Equal => Trend::Stable,
            std::cmp::Ordering::Greater => Trend::Worsening,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Improving => "improving",
            Trend::Stable => "stable",
            Trend::Worsening => "worsening",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChildSummary {
    pub child: Child,
    /// The most recent records, oldest first.
    pub recent: Vec<MeasurementRecord>,
    pub total_measurements: usize,
}

impl ChildSummary {
    /// Keep the last `last` records of an oldest-first history. At least
    /// one record is kept so a non-empty history always has a latest status.
    pub fn build(child: &Child, records: &[MeasurementRecord], last: usize) -> Self {
        let start = records.len().saturating_sub(last.max(1));
        Self {
            child: child.clone(),
            recent: records[start..].to_vec(),
            total_measurements: records.len(),
        }
    }

    pub fn latest(&self) -> Option<&MeasurementRecord> {
        self.recent.last()
    }

    pub fn latest_status(&self) -> Option<NutritionStatus> {
        self.latest().map(|record| record.status)
    }

    /// `None` until there are two records to compare.
    pub fn trend(&self) -> Option<Trend> {
        match self.recent.as_slice() {
            [.., previous, latest] => Some(Trend::between(previous.status, latest.status)),
            _ => None,
        }
    }
}

pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

/// Plain-text summary: child header, one line per recent record, then the
/// latest status with its recommendation and the disclaimer.
pub fn render_summary(summary: &ChildSummary) -> String {
    let child = &summary.child;
    let mut out = format!(
        "Summary for {}\nAge: {} months\nSex: {}\n\n",
        child.name,
        child.age_months,
        child.sex.label()
    );

    match summary.latest() {
        None => out.push_str("No measurements yet.\n"),
        Some(latest) => {
            for record in &summary.recent {
                out.push_str(&record_line(record));
                out.push('\n');
            }
            let trend = summary
                .trend()
                .map(|trend| format!(" ({})", trend.as_str()))
                .unwrap_or_default();
            out.push_str(&format!(
                "\nLatest Status: {}{trend}\n\n{}\n",
                latest.status,
                latest.status.recommendation()
            ));
        }
    }
    out.push('\n');
    out.push_str(DISCLAIMER);
    out
}

fn record_line(record: &MeasurementRecord) -> String {
    let bmi_z = record
        .bmi_z
        .map_or_else(|| "N/A".to_string(), |z| format!("{z:.2}"));
    let muac = record
        .muac_mm
        .map_or_else(|| "N/A".to_string(), |muac| format!("{muac}mm"));
    format!(
        "{}: {} (BMI Z: {} | Weight: {}kg | Height: {}cm | MUAC: {})",
        format_date(&record.recorded_at),
        record.status,
        bmi_z,
        record.weight_kg,
        record.height_cm,
        muac
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use nutri_model::{CaregiverId, ChildId, Sex};

    fn child() -> Child {
        Child {
            id: ChildId::new(1),
            caregiver_id: CaregiverId::new(1),
            name: "Neema".to_string(),
            age_months: 4,
            sex: Sex::Female,
            registered_at: DateTime::from_timestamp(1_740_000_000, 0).unwrap(),
        }
    }

    fn records(statuses: &[NutritionStatus]) -> Vec<MeasurementRecord> {
        let start = DateTime::from_timestamp(1_740_000_000, 0).unwrap();
        statuses
            .iter()
            .enumerate()
            .map(|(i, status)| MeasurementRecord {
                child_id: ChildId::new(1),
                recorded_at: start + Duration::days(i as i64 * 7),
                age_months: 4,
                weight_kg: 5.5,
                height_cm: 60.0,
                muac_mm: None,
                bmi: 15.28,
                bmi_z: Some(0.0),
                status: *status,
            })
            .collect()
    }

    #[test]
    fn keeps_only_the_last_records() {
        let history = records(&[NutritionStatus::Normal; 7]);
        let summary = ChildSummary::build(&child(), &history, DEFAULT_RECENT);
        assert_eq!(summary.recent.len(), 5);
        assert_eq!(summary.total_measurements, 7);
        assert_eq!(summary.recent[0], history[2]);
    }

    #[test]
    fn trend_compares_last_two() {
        let summary = ChildSummary::build(
            &child(),
            &records(&[NutritionStatus::Sam, NutritionStatus::Mam]),
            5,
        );
        assert_eq!(summary.trend(), Some(Trend::Improving));
        let summary = ChildSummary::build(&child(), &records(&[NutritionStatus::Mam]), 5);
        assert_eq!(summary.trend(), None);
    }

    #[test]
    fn zero_zscore_is_not_reported_missing() {
        let line = record_line(&records(&[NutritionStatus::Normal])[0]);
        assert!(line.contains("BMI Z: 0.00"));
        assert!(line.contains("MUAC: N/A"));
    }

    #[test]
    fn empty_history_renders_placeholder() {
        let summary = ChildSummary::build(&child(), &[], 5);
        assert_eq!(summary.latest_status(), None);
        let text = render_summary(&summary);
        assert!(text.contains("No measurements yet."));
        assert!(text.ends_with(DISCLAIMER));
    }
}
