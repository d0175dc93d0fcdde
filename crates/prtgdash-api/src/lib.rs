// prtgdash-api: Async Rust client for the PRTG Network Monitor HTTP API

pub mod channels;
pub mod client;
pub mod error;
pub mod graph;
pub mod history;
pub mod models;
pub mod sensors;
pub mod transport;

pub use client::{Credentials, PrtgClient};
pub use error::Error;
pub use models::{
    ChannelRow, ChannelTable, GraphImage, GraphPeriod, HistoricData, HistoricRow, SensorRow,
    SensorTable,
};
pub use transport::{TlsMode, TransportConfig};
