use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// An interface of a router, addressed by device key and interface name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Endpoint {
    pub router: String,
    pub intf: String,
}

impl Endpoint {
    pub fn new(router: impl Into<String>, intf: impl Into<String>) -> Self {
        Self {
            router: router.into(),
            intf: intf.into(),
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.router, self.intf)
    }
}

/// Point-to-point adjacency inferred from two interfaces sharing a subnet.
///
/// Subnets with more than two members are expanded into one link per pair,
/// so a switched segment shows up as a clique rather than a single shared node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub subnet: String,
    pub endpoints: [Endpoint; 2],
}

impl Link {
    pub fn new(subnet: impl Into<String>, a: Endpoint, b: Endpoint) -> Self {
        Self {
            subnet: subnet.into(),
            endpoints: [a, b],
        }
    }

    pub fn touches(&self, router: &str) -> bool {
        self.endpoints.iter().any(|ep| ep.router == router)
    }
}

impl Display for Link {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}  <-->  {}   ({})",
            self.endpoints[0], self.endpoints[1], self.subnet
        )
    }
}

/// A subnet seen on exactly one interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lan {
    pub subnet: String,
    pub router: String,
    pub intf: String,
}

impl Lan {
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(self.router.clone(), self.intf.clone())
    }
}

impl Display for Lan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}   ({})", self.router, self.intf, self.subnet)
    }
}
