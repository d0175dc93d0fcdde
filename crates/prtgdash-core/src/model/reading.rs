// ── Raw numeric readings ──

use serde_json::Value;

/// A value exactly as PRTG reported it, before numeric conversion.
///
/// PRTG mixes JSON numbers, numeric strings, `"-"` placeholders and empty
/// strings in the same column. Conversion is explicit through
/// [`bits_per_sec`](Self::bits_per_sec) so callers decide what a gap means.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawReading {
    /// Absent or `null`.
    #[default]
    Missing,
    Number(f64),
    Text(String),
}

impl RawReading {
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Missing,
            Some(Value::Number(n)) => n.as_f64().map_or(Self::Missing, Self::Number),
            Some(Value::String(s)) => Self::Text(s.clone()),
            Some(other) => Self::Text(other.to_string()),
        }
    }

    /// The reading in bits per second, or `None` when it is missing, blank,
    /// or not a number.
    ///
    /// Non-finite values (`"inf"`, `"NaN"`, `"1e400"`) parse but are
    /// rejected as well.
    pub fn bits_per_sec(&self) -> Option<f64> {
        let value = match self {
            Self::Missing => return None,
            Self::Number(v) => *v,
            Self::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok()?
            }
        };
        value.is_finite().then_some(value)
    }
}

impl From<Option<Value>> for RawReading {
    fn from(value: Option<Value>) -> Self {
        Self::from_json(value.as_ref())
    }
}

/// Round to two decimal places, exact halves to even.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// bits/s → Mbps, rounded to two decimals.
pub fn bits_to_mbps(bits_per_sec: f64) -> f64 {
    round2(bits_per_sec / 1_000_000.0)
}
