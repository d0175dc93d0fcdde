// ── API-to-domain type conversions ──
//
// Bridges raw `prtgdash_api` response rows into `prtgdash_core::model`
// types. Raw values stay uninterpreted (`RawReading`); numeric conversion
// happens in the normalizer and aggregator.

use prtgdash_api::{ChannelRow, HistoricRow, SensorRow};
use serde_json::Value;

use crate::model::{ChannelSample, HistoricRecord, RawReading, SensorEntry};

/// Historic column holding inbound speed in bits/s.
pub const TRAFFIC_IN_SPEED: &str = "Traffic In (Speed)";
/// Historic column holding outbound speed in bits/s.
pub const TRAFFIC_OUT_SPEED: &str = "Traffic Out (Speed)";

/// A text cell; numbers are rendered, anything else counts as absent.
fn text_cell(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// An object ID cell, given as a JSON number or a numeric string.
fn id_cell(value: Option<&Value>) -> Option<u64> {
    match value? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl From<ChannelRow> for ChannelSample {
    fn from(row: ChannelRow) -> Self {
        Self {
            name: text_cell(row.name).unwrap_or_default(),
            maximum_raw: RawReading::from(row.maximum_raw),
            average_raw: RawReading::from(row.average_raw),
        }
    }
}

impl From<HistoricRow> for HistoricRecord {
    fn from(row: HistoricRow) -> Self {
        Self {
            traffic_in: RawReading::from_json(row.fields.get(TRAFFIC_IN_SPEED)),
            traffic_out: RawReading::from_json(row.fields.get(TRAFFIC_OUT_SPEED)),
            datetime: text_cell(row.datetime),
        }
    }
}

impl SensorEntry {
    /// `None` when the row carries no usable object ID.
    pub fn from_row(row: SensorRow) -> Option<Self> {
        Some(Self {
            id: id_cell(row.objid.as_ref())?,
            name: text_cell(row.sensor).unwrap_or_default(),
            device: text_cell(row.device),
            status: text_cell(row.status),
        })
    }
}
