// ── Current totals ──
//
// The "all sensors combined" figure of the overview: a plain sum of each
// sensor's current peak. Unlike the daily trend there is no reduction
// choice here.

use crate::model::{PeakTotals, SensorPeaks, round2};

pub fn summarize_peaks(peaks: &[SensorPeaks]) -> PeakTotals {
    let (total_in, total_out) = peaks.iter().fold((0.0, 0.0), |(i, o), p| {
        (i + p.peak_in_mbps, o + p.peak_out_mbps)
    });

    PeakTotals {
        total_peak_in_mbps: round2(total_in),
        total_peak_out_mbps: round2(total_out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peaks(name: &str, peak_in: f64, peak_out: f64) -> SensorPeaks {
        SensorPeaks {
            name: name.into(),
            id: "0".into(),
            peak_in_mbps: peak_in,
            peak_out_mbps: peak_out,
            avg_in_mbps: 0.0,
            avg_out_mbps: 0.0,
        }
    }

    #[test]
    fn totals_sum_every_sensor() {
        let totals = summarize_peaks(&[
            peaks("Firstlight", 104.5, 20.25),
            peaks("NNINIX", 0.0, 0.0),
            peaks("HE", 33.1, 10.0),
        ]);
        assert_eq!(totals.total_peak_in_mbps, 137.6);
        assert_eq!(totals.total_peak_out_mbps, 30.25);
    }

    #[test]
    fn no_sensors_is_zero() {
        assert_eq!(summarize_peaks(&[]), PeakTotals::default());
    }
}
