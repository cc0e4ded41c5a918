use std::fmt::Display;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single interface block of a device configuration.
///
/// Addresses are kept exactly as written in the config. They are only
/// interpreted later, when the topology groups interfaces by subnet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    pub ip: Option<String>,
    pub mask: Option<String>,
    pub shutdown: bool,
}

impl Interface {
    pub fn is_up(&self) -> bool {
        !self.shutdown
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OspfNetwork {
    pub network: String,
    pub wildcard: String,
    pub area: u32,
}

impl Display for OspfNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} area {}", self.network, self.wildcard, self.area)
    }
}

/// Contents of a `router ospf <process>` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OspfConfig {
    pub process: u32,
    pub router_id: Option<String>,
    pub networks: Vec<OspfNetwork>,
}

impl OspfConfig {
    pub fn new(process: u32) -> Self {
        Self {
            process,
            router_id: None,
            networks: Vec::new(),
        }
    }
}

/// Routing protocol state of a device. Absent protocols are left out of the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ospf: Option<OspfConfig>,
}

/// One parsed running-config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub hostname: Option<String>,
    pub interfaces: IndexMap<String, Interface>,
    #[serde(default)]
    pub routing: Routing,
}

impl Device {
    pub fn ospf(&self) -> Option<&OspfConfig> {
        self.routing.ospf.as_ref()
    }

    /// Interfaces carrying both an address and a mask, in config order.
    pub fn addressed_interfaces(&self) -> impl Iterator<Item = (&String, &Interface)> {
        self.interfaces
            .iter()
            .filter(|(_, intf)| intf.ip.is_some() && intf.mask.is_some())
    }
}
