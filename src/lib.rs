/*!
Builds a network topology from Cisco IOS running-configs.

Each config is parsed into a [`network::router::Device`]; interfaces are then
grouped by the subnet they sit on. Subnets shared by two or more devices become
point-to-point links (one per pair), subnets seen once become LAN stubs.
*/

pub mod data_aquisition;
pub mod network;
pub mod parsers;
pub mod topology;

pub use network::{
    edge::{Endpoint, Lan, Link},
    router::{Device, Interface, OspfConfig, OspfNetwork, Routing},
};
pub use topology::{
    ConfigInput, ConfigSource, Topology, TopologyBuilder, TopologyError, TopologyResult,
    build_topology, build_topology_from_files,
};
