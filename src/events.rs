use serde::Serialize;

use crate::config::Configuration;

/// Inbound registration from one host module instance.
#[derive(Debug)]
pub struct RegisterConfig(pub Configuration);

/// Outbound discovery result, correlated by the registering identifier.
///
/// Serializes as `{"identifier": .., "imageList": [..]}` for the host
/// transport.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageListReady {
    pub identifier: String,
    pub image_list: Vec<String>,
}
