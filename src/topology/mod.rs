/*!
Topology module

Structure:
- `source`: the `ConfigSource` trait feeding ordered config inputs to the builder,
            plus the error type that aborts a build.
- `resolver`: derives the canonical network of an interface address.
- `builder`: parses every input and infers links and LANs from shared subnets.
- `store`: the finished `Topology` value.
- `report`: plain-text summary of a topology.
*/

pub mod builder;
pub mod report;
pub mod resolver;
pub mod source;
pub mod store;

pub use builder::{TopologyBuilder, build_topology, build_topology_from_files};
pub use source::{ConfigInput, ConfigSource, StaticSource, TopologyError, TopologyResult};
pub use store::Topology;
