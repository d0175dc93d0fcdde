// Historic data endpoint
//
// Time-series samples for one sensor over a past window. Column names are
// channel captions ("Traffic In (Speed)") because `usecaption=1` is set.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::client::PrtgClient;
use crate::error::Error;
use crate::models::{HistoricData, HistoricRow};

/// Timestamp layout PRTG expects for `sdate` / `edate`.
pub const PRTG_DATE_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

impl PrtgClient {
    /// Fetch historic samples for a sensor between `start` and `end`.
    ///
    /// `GET /api/historicdata.json?id={sensor_id}&avg={avg_secs}&sdate=..&edate=..&usecaption=1`
    ///
    /// `avg_secs == 0` asks for raw (unaveraged) samples.
    pub async fn fetch_historic_data(
        &self,
        sensor_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
        avg_secs: u32,
    ) -> Result<Vec<HistoricRow>, Error> {
        let url = self.endpoint_url(
            "api/historicdata.json",
            &[
                ("id", sensor_id.into()),
                ("avg", avg_secs.to_string()),
                ("sdate", start.format(PRTG_DATE_FORMAT).to_string()),
                ("edate", end.format(PRTG_DATE_FORMAT).to_string()),
                ("usecaption", "1".into()),
            ],
        )?;
        debug!(sensor_id, %start, %end, avg_secs, "fetching historic data");

        let data: HistoricData = self.get_json(url).await?;
        Ok(data.histdata)
    }
}
