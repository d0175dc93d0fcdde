// Channel table endpoint
//
// Current per-channel aggregates for one sensor. Only the raw columns are
// requested; the formatted ones carry localized units that are useless
// for arithmetic.

use tracing::debug;

use crate::client::PrtgClient;
use crate::error::Error;
use crate::models::{ChannelRow, ChannelTable};

impl PrtgClient {
    /// Fetch the channel table of a sensor.
    ///
    /// `GET /api/table.json?content=channels&columns=name,maximum_raw,average_raw&id={sensor_id}`
    pub async fn fetch_channels(&self, sensor_id: &str) -> Result<Vec<ChannelRow>, Error> {
        let url = self.endpoint_url(
            "api/table.json",
            &[
                ("content", "channels".into()),
                ("columns", "name,maximum_raw,average_raw".into()),
                ("id", sensor_id.into()),
            ],
        )?;
        debug!(sensor_id, "fetching channel table");

        let table: ChannelTable = self.get_json(url).await?;
        Ok(table.channels)
    }
}
