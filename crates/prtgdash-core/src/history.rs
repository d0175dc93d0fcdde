// ── Historical aggregation ──
//
// Walks a day window oldest-first, fetching each sensor's samples for each
// day one after another, and reduces every day to a single (in, out) pair.
// Fetch failures are logged and count as "no data"; a day is never dropped.

use std::future::Future;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::CoreError;
use crate::model::{DailyTotal, HistoricRecord, bits_to_mbps};

/// Anything that can hand out one sensor's samples for one calendar day.
pub trait HistorySource {
    fn day_samples(
        &self,
        sensor_id: &str,
        day: NaiveDate,
    ) -> impl Future<Output = Result<Vec<HistoricRecord>, CoreError>>;
}

/// How per-sensor day maxima combine into the daily total.
///
/// `Max` reports the single busiest sensor of the day ("worst single
/// link") and is the default. `Sum` adds the sensors' maxima, an upper
/// bound on whole-network throughput since the peaks need not coincide.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CrossSensorReduction {
    #[default]
    Max,
    Sum,
}

impl CrossSensorReduction {
    fn combine(self, acc: Option<f64>, value: f64) -> f64 {
        match (self, acc) {
            (_, None) => value,
            (Self::Max, Some(a)) => a.max(value),
            (Self::Sum, Some(a)) => a + value,
        }
    }
}

/// Running maxima of inbound and outbound speed, in bits/s.
///
/// The two maxima are tracked independently; they may come from different
/// samples. `None` means no usable sample for that direction.
pub fn day_maxima(records: &[HistoricRecord]) -> (Option<f64>, Option<f64>) {
    records.iter().fold((None, None), |(max_in, max_out), record| {
        (
            max_of(max_in, record.traffic_in.bits_per_sec()),
            max_of(max_out, record.traffic_out.bits_per_sec()),
        )
    })
}

fn max_of(acc: Option<f64>, value: Option<f64>) -> Option<f64> {
    match (acc, value) {
        (Some(a), Some(v)) => Some(a.max(v)),
        (a, None) => a,
        (None, v) => v,
    }
}

/// Longest trend window, in days.
pub const MAX_TREND_DAYS: u32 = 3650;

/// The `days` complete days before `today`, oldest first.
///
/// `days` is capped at [`MAX_TREND_DAYS`]; the window also stops at the
/// earliest representable date.
pub fn day_window(days: u32, today: NaiveDate) -> Vec<NaiveDate> {
    let mut window: Vec<NaiveDate> = (1..=u64::from(days.min(MAX_TREND_DAYS)))
        .map_while(|back| today.checked_sub_days(Days::new(back)))
        .collect();
    window.reverse();
    window
}

/// Reduces historic samples of several sensors into one row per day.
pub struct HistoricalAggregator<'a, S> {
    source: &'a S,
    reduction: CrossSensorReduction,
}

impl<'a, S: HistorySource> HistoricalAggregator<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            reduction: CrossSensorReduction::default(),
        }
    }

    pub fn with_reduction(mut self, reduction: CrossSensorReduction) -> Self {
        self.reduction = reduction;
        self
    }

    /// One [`DailyTotal`] per day in `[today - days, today - 1]`, oldest first.
    ///
    /// Issues `sensor_ids.len() * days` sequential fetches.
    pub async fn daily_totals(
        &self,
        sensor_ids: &[String],
        days: u32,
        today: NaiveDate,
    ) -> Vec<DailyTotal> {
        let window = day_window(days, today);
        let mut totals = Vec::with_capacity(window.len());

        for day in window {
            totals.push(self.day_total(sensor_ids, day).await);
        }

        totals
    }

    async fn day_total(&self, sensor_ids: &[String], day: NaiveDate) -> DailyTotal {
        let mut total_in: Option<f64> = None;
        let mut total_out: Option<f64> = None;

        for sensor_id in sensor_ids {
            let records = match self.source.day_samples(sensor_id, day).await {
                Ok(records) => records,
                Err(e) => {
                    warn!(sensor_id = %sensor_id, %day, error = %e, "no historic data for sensor");
                    continue;
                }
            };

            let (max_in, max_out) = day_maxima(&records);
            debug!(sensor_id = %sensor_id, %day, ?max_in, ?max_out, "sensor day maxima");

            if let Some(v) = max_in {
                total_in = Some(self.reduction.combine(total_in, v));
            }
            if let Some(v) = max_out {
                total_out = Some(self.reduction.combine(total_out, v));
            }
        }

        DailyTotal {
            date: day,
            total_in_mbps: bits_to_mbps(total_in.unwrap_or(0.0)),
            total_out_mbps: bits_to_mbps(total_out.unwrap_or(0.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::RawReading;

    /// In-memory source keyed by (sensor, day); unknown pairs fail.
    #[derive(Default)]
    struct FakeHistory {
        samples: HashMap<(String, NaiveDate), Vec<HistoricRecord>>,
        calls: RefCell<Vec<(String, NaiveDate)>>,
    }

    impl FakeHistory {
        fn with(mut self, sensor: &str, day: NaiveDate, in_out: &[(f64, f64)]) -> Self {
            let records = in_out
                .iter()
                .map(|&(i, o)| HistoricRecord {
                    datetime: None,
                    traffic_in: RawReading::Number(i),
                    traffic_out: RawReading::Number(o),
                })
                .collect();
            self.samples.insert((sensor.into(), day), records);
            self
        }

        fn with_records(mut self, sensor: &str, day: NaiveDate, records: Vec<HistoricRecord>) -> Self {
            self.samples.insert((sensor.into(), day), records);
            self
        }
    }

    impl HistorySource for FakeHistory {
        async fn day_samples(
            &self,
            sensor_id: &str,
            day: NaiveDate,
        ) -> Result<Vec<HistoricRecord>, CoreError> {
            self.calls.borrow_mut().push((sensor_id.into(), day));
            self.samples
                .get(&(sensor_id.to_string(), day))
                .cloned()
                .ok_or_else(|| CoreError::Api {
                    message: "boom".into(),
                    status: Some(500),
                })
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[tokio::test]
    async fn cross_sensor_total_is_max_not_sum() {
        let day = date(2026, 10, 15);
        let source = FakeHistory::default()
            .with("S1", day, &[(40_000_000.0, 1_000_000.0), (100_000_000.0, 2_000_000.0)])
            .with("S2", day, &[(250_000_000.0, 3_000_000.0)]);

        let totals = HistoricalAggregator::new(&source)
            .daily_totals(&ids(&["S1", "S2"]), 1, date(2026, 10, 16))
            .await;

        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].date, day);
        assert_eq!(totals[0].total_in_mbps, 250.0);
        assert_ne!(totals[0].total_in_mbps, 350.0);
        assert_eq!(totals[0].total_out_mbps, 3.0);
    }

    #[tokio::test]
    async fn sum_reduction_adds_sensor_maxima() {
        let day = date(2026, 10, 15);
        let source = FakeHistory::default()
            .with("S1", day, &[(100_000_000.0, 1_000_000.0)])
            .with("S2", day, &[(250_000_000.0, 3_000_000.0)]);

        let totals = HistoricalAggregator::new(&source)
            .with_reduction(CrossSensorReduction::Sum)
            .daily_totals(&ids(&["S1", "S2"]), 1, date(2026, 10, 16))
            .await;

        assert_eq!(totals[0].total_in_mbps, 350.0);
        assert_eq!(totals[0].total_out_mbps, 4.0);
    }

    #[tokio::test]
    async fn in_and_out_maxima_are_independent() {
        let day = date(2026, 10, 15);
        let source = FakeHistory::default()
            .with("S1", day, &[(9_000_000.0, 1_000_000.0), (1_000_000.0, 7_000_000.0)]);

        let totals = HistoricalAggregator::new(&source)
            .daily_totals(&ids(&["S1"]), 1, date(2026, 10, 16))
            .await;

        assert_eq!(totals[0].total_in_mbps, 9.0);
        assert_eq!(totals[0].total_out_mbps, 7.0);
    }

    #[tokio::test]
    async fn seven_days_without_data_yield_seven_zero_rows() {
        let source = FakeHistory::default();
        let today = date(2026, 10, 16);

        let totals = HistoricalAggregator::new(&source)
            .daily_totals(&ids(&["12435", "12506"]), 7, today)
            .await;

        assert_eq!(totals.len(), 7);
        let dates: Vec<String> = totals.iter().map(DailyTotal::date_string).collect();
        assert_eq!(
            dates,
            vec![
                "2026-10-09",
                "2026-10-10",
                "2026-10-11",
                "2026-10-12",
                "2026-10-13",
                "2026-10-14",
                "2026-10-15"
            ]
        );
        for row in &totals {
            assert_eq!(row.total_in_mbps, 0.0);
            assert_eq!(row.total_out_mbps, 0.0);
        }
        assert_eq!(source.calls.borrow().len(), 14);
    }

    #[tokio::test]
    async fn failing_sensor_does_not_abort_the_day() {
        let day = date(2026, 10, 15);
        // S1 has no entry and fails; S2 still counts.
        let source = FakeHistory::default().with("S2", day, &[(12_000_000.0, 6_000_000.0)]);

        let totals = HistoricalAggregator::new(&source)
            .daily_totals(&ids(&["S1", "S2"]), 2, date(2026, 10, 16))
            .await;

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0], DailyTotal::empty(date(2026, 10, 14)));
        assert_eq!(totals[1].total_in_mbps, 12.0);
        assert_eq!(totals[1].total_out_mbps, 6.0);
    }

    #[tokio::test]
    async fn malformed_records_are_skipped() {
        let day = date(2026, 10, 15);
        let records = vec![
            HistoricRecord {
                datetime: Some("10/15/2026 00:00:00 - 01:00:00".into()),
                traffic_in: RawReading::Text("-".into()),
                traffic_out: RawReading::Text(String::new()),
            },
            HistoricRecord {
                datetime: Some("10/15/2026 01:00:00 - 02:00:00".into()),
                traffic_in: RawReading::Text("4500000".into()),
                traffic_out: RawReading::Text("garbage".into()),
            },
        ];
        let source = FakeHistory::default().with_records("S1", day, records);

        let totals = HistoricalAggregator::new(&source)
            .daily_totals(&ids(&["S1"]), 1, date(2026, 10, 16))
            .await;

        assert_eq!(totals[0].total_in_mbps, 4.5);
        assert_eq!(totals[0].total_out_mbps, 0.0);
    }

    #[tokio::test]
    async fn zero_days_is_empty() {
        let source = FakeHistory::default();
        let totals = HistoricalAggregator::new(&source)
            .daily_totals(&ids(&["S1"]), 0, date(2026, 10, 16))
            .await;
        assert!(totals.is_empty());
        assert!(source.calls.borrow().is_empty());
    }

    #[test]
    fn window_crosses_month_boundary() {
        let window = day_window(3, date(2026, 11, 2));
        assert_eq!(window, vec![date(2026, 10, 30), date(2026, 10, 31), date(2026, 11, 1)]);
    }

    #[test]
    fn window_is_capped() {
        let today = date(2026, 10, 16);
        let window = day_window(u32::MAX, today);
        assert_eq!(window.len(), usize::try_from(MAX_TREND_DAYS).expect("fits in usize"));
        assert_eq!(window.last(), Some(&date(2026, 10, 15)));

        assert_eq!(day_window(2, NaiveDate::MIN), Vec::<NaiveDate>::new());
    }

    #[test]
    fn reduction_parses_from_config_strings() {
        assert_eq!("max".parse::<CrossSensorReduction>().ok(), Some(CrossSensorReduction::Max));
        assert_eq!("sum".parse::<CrossSensorReduction>().ok(), Some(CrossSensorReduction::Sum));
        assert_eq!(CrossSensorReduction::Sum.to_string(), "sum");
    }
}
