// ── Channel-table normalization ──
//
// Turns the channels of one sensor into `BandwidthStats`. Pure: no I/O and
// no error path; unusable fields simply produce no key.

use crate::model::{BandwidthStats, ChannelSample, RawReading, bits_to_mbps};

/// A raw bits/s reading as Mbps, or `None` when the field is unusable.
pub fn reading_mbps(reading: &RawReading) -> Option<f64> {
    reading.bits_per_sec().map(bits_to_mbps)
}

/// Build `"<name>_max"` / `"<name>_avg"` entries for every usable field.
///
/// Later channels with the same name overwrite earlier ones.
pub fn normalize_channels(channels: &[ChannelSample]) -> BandwidthStats {
    let mut stats = BandwidthStats::new();

    for channel in channels {
        if let Some(mbps) = reading_mbps(&channel.maximum_raw) {
            stats.insert(BandwidthStats::max_key(&channel.name), mbps);
        }
        if let Some(mbps) = reading_mbps(&channel.average_raw) {
            stats.insert(BandwidthStats::avg_key(&channel.name), mbps);
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn channel(name: &str, max: RawReading, avg: RawReading) -> ChannelSample {
        ChannelSample {
            name: name.into(),
            maximum_raw: max,
            average_raw: avg,
        }
    }

    fn text(s: &str) -> RawReading {
        RawReading::Text(s.into())
    }

    #[test]
    fn traffic_in_example() {
        let stats = normalize_channels(&[channel(
            "Traffic In",
            text("104500000"),
            text("50000000"),
        )]);

        let expected: BandwidthStats = [
            ("Traffic In_max".to_string(), 104.5),
            ("Traffic In_avg".to_string(), 50.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(stats, expected);
    }

    #[test]
    fn numeric_values_are_rounded_mbps() {
        let stats = normalize_channels(&[channel(
            "Traffic Out",
            RawReading::Number(9_876_543.0),
            RawReading::Number(1_005.0),
        )]);
        assert_eq!(stats.get("Traffic Out_max"), Some(9.88));
        assert_eq!(stats.get("Traffic Out_avg"), Some(0.0));
    }

    #[test]
    fn blank_values_emit_no_key() {
        for blank in [RawReading::Missing, text(""), text(" ")] {
            let stats = normalize_channels(&[channel("Traffic In", blank.clone(), blank)]);
            assert!(!stats.contains_key("Traffic In_max"));
            assert!(!stats.contains_key("Traffic In_avg"));
        }
    }

    #[test]
    fn non_numeric_value_is_skipped_silently() {
        let stats = normalize_channels(&[channel("Traffic In", text("abc"), text("12000000"))]);
        assert!(!stats.contains_key("Traffic In_max"));
        assert_eq!(stats.get("Traffic In_avg"), Some(12.0));
    }

    #[test]
    fn empty_channel_list_is_empty_mapping() {
        assert!(normalize_channels(&[]).is_empty());
    }

    #[test]
    fn missing_name_uses_empty_prefix() {
        let stats = normalize_channels(&[channel("", text("3000000"), RawReading::Missing)]);
        assert_eq!(stats.get("_max"), Some(3.0));
    }

    #[test]
    fn duplicate_names_keep_last_value() {
        let stats = normalize_channels(&[
            channel("Traffic In", text("1000000"), RawReading::Missing),
            channel("Traffic In", text("2000000"), RawReading::Missing),
        ]);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats.get("Traffic In_max"), Some(2.0));
    }

    #[test]
    fn absent_keys_display_as_zero() {
        let stats = normalize_channels(&[channel("Traffic In", text("5000000"), text("-"))]);
        assert_eq!(stats.peak_in(), 5.0);
        assert_eq!(stats.avg_in(), 0.0);
        assert_eq!(stats.peak_out(), 0.0);
    }
}
