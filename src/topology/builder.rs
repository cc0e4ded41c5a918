use std::path::Path;

use indexmap::IndexMap;
use log::{debug, info, warn};

use crate::{
    data_aquisition::files::FileSource,
    network::{
        edge::{Endpoint, Lan, Link},
        router::Device,
    },
    parsers::ios_parser::parse_config_text,
    topology::{
        resolver::canonical_network,
        source::{ConfigInput, ConfigSource, TopologyResult},
        store::Topology,
    },
};

/// Accumulates parsed devices and turns them into a [`Topology`].
///
/// Devices are keyed by hostname, or by the input's fallback key when no
/// hostname is configured. A later device with the same key replaces the
/// earlier one; nothing is merged.
#[derive(Debug, Default)]
pub struct TopologyBuilder {
    routers: IndexMap<String, Device>,
}

impl TopologyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses one input and records the resulting device. Returns the device key.
    pub fn add_input(&mut self, input: &ConfigInput) -> String {
        let device = parse_config_text(&input.text);
        let key = device
            .hostname
            .clone()
            .unwrap_or_else(|| input.fallback_key());
        debug!(
            "parsed {} as {} ({} interfaces)",
            input.id,
            key,
            device.interfaces.len()
        );
        if self.routers.insert(key.clone(), device).is_some() {
            warn!("device {key} from {} replaces an earlier device with the same key", input.id);
        }
        key
    }

    pub fn add_inputs<'a, I>(&mut self, inputs: I)
    where
        I: IntoIterator<Item = &'a ConfigInput>,
    {
        for input in inputs {
            self.add_input(input);
        }
    }

    /// Groups every addressed interface by canonical network, in router then interface order.
    pub fn subnet_groups(&self) -> IndexMap<String, Vec<Endpoint>> {
        group_by_subnet(&self.routers)
    }

    pub fn build(self) -> Topology {
        let groups = group_by_subnet(&self.routers);
        let (links, lans) = classify_groups(&groups);
        info!(
            "built topology: {} routers, {} links, {} lans",
            self.routers.len(),
            links.len(),
            lans.len()
        );
        Topology {
            routers: self.routers,
            links,
            lans,
        }
    }

    /// Fetches every input from `source` and builds. A failed fetch aborts the build.
    pub fn build_from_source<S: ConfigSource>(source: &mut S) -> TopologyResult<Topology> {
        let inputs = source.fetch_inputs()?;
        let mut builder = Self::new();
        builder.add_inputs(&inputs);
        Ok(builder.build())
    }
}

fn group_by_subnet(routers: &IndexMap<String, Device>) -> IndexMap<String, Vec<Endpoint>> {
    let mut groups: IndexMap<String, Vec<Endpoint>> = IndexMap::new();
    for (router, device) in routers {
        for (intf, data) in device.addressed_interfaces() {
            match canonical_network(data.ip.as_deref(), data.mask.as_deref()) {
                Some(subnet) => groups
                    .entry(subnet)
                    .or_default()
                    .push(Endpoint::new(router.clone(), intf.clone())),
                None => debug!(
                    "skipping {router}:{intf}, no usable network for {:?} {:?}",
                    data.ip, data.mask
                ),
            }
        }
    }
    groups
}

/// Shared subnets become a link per endpoint pair; single-endpoint subnets become LANs.
fn classify_groups(groups: &IndexMap<String, Vec<Endpoint>>) -> (Vec<Link>, Vec<Lan>) {
    let mut links = Vec::new();
    let mut lans = Vec::new();
    for (subnet, endpoints) in groups {
        match endpoints.as_slice() {
            [] => {}
            [only] => lans.push(Lan {
                subnet: subnet.clone(),
                router: only.router.clone(),
                intf: only.intf.clone(),
            }),
            _ => {
                for (i, a) in endpoints.iter().enumerate() {
                    for b in &endpoints[i + 1..] {
                        links.push(Link::new(subnet.clone(), a.clone(), b.clone()));
                    }
                }
            }
        }
    }
    (links, lans)
}

/// Builds a topology from the given inputs, in order.
pub fn build_topology(inputs: &[ConfigInput]) -> Topology {
    let mut builder = TopologyBuilder::new();
    builder.add_inputs(inputs);
    builder.build()
}

/// Reads every path in order and builds a topology. The first unreadable file aborts the build.
pub fn build_topology_from_files<P: AsRef<Path>>(paths: &[P]) -> TopologyResult<Topology> {
    let mut source = FileSource::new(paths.iter().map(|p| p.as_ref().to_path_buf()).collect());
    TopologyBuilder::build_from_source(&mut source)
}
