// Graph image endpoint
//
// `chart.png` renders server-side; a 200 is not enough to trust the body
// because an expired session yields an HTML page with status 200.

use tracing::debug;

use crate::client::PrtgClient;
use crate::error::Error;
use crate::models::{GraphImage, GraphPeriod};

impl PrtgClient {
    /// Download the graph of a sensor as a PNG.
    ///
    /// `GET /chart.png?id={sensor_id}&graphid={period}&width=..&height=..&avg=0&graphstyling=base`
    pub async fn fetch_graph(
        &self,
        sensor_id: &str,
        period: GraphPeriod,
        width: u32,
        height: u32,
    ) -> Result<GraphImage, Error> {
        let url = self.endpoint_url(
            "chart.png",
            &[
                ("id", sensor_id.into()),
                ("graphid", period.graph_id().to_string()),
                ("width", width.to_string()),
                ("height", height.to_string()),
                ("avg", "0".into()),
                ("graphstyling", "base".into()),
            ],
        )?;
        debug!(sensor_id, graph_id = period.graph_id(), "fetching graph");

        let (content_type, bytes) = self.get_bytes(url).await?;
        if !content_type.contains("image") {
            return Err(Error::UnexpectedContentType {
                expected: "image/*",
                got: content_type,
            });
        }

        Ok(GraphImage {
            content_type,
            bytes,
        })
    }
}
