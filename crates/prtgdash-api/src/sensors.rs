// Sensor table endpoint

use tracing::debug;

use crate::client::PrtgClient;
use crate::error::Error;
use crate::models::{SensorRow, SensorTable};

impl PrtgClient {
    /// List every sensor visible to the API user.
    ///
    /// `GET /api/table.json?content=sensors&columns=objid,sensor,device,status`
    pub async fn list_sensors(&self) -> Result<Vec<SensorRow>, Error> {
        let url = self.endpoint_url(
            "api/table.json",
            &[
                ("content", "sensors".into()),
                ("columns", "objid,sensor,device,status".into()),
            ],
        )?;
        debug!("listing sensors");

        let table: SensorTable = self.get_json(url).await?;
        Ok(table.sensors)
    }
}
