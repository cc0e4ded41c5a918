use std::collections::HashMap;

use petgraph::{Undirected, graph::NodeIndex, stable_graph::StableGraph, visit::EdgeRef};

use crate::{network::edge::Endpoint, topology::store::Topology};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphNode {
    Router(String),
    /// A LAN stub, keyed by its subnet.
    Lan(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphEdge {
    /// Router to router over a shared subnet.
    Link { subnet: String, endpoints: [Endpoint; 2] },
    /// Router to one of its LAN stubs.
    Attachment { intf: String },
}

/// Undirected graph view of a [`Topology`].
///
/// One node per router and per LAN subnet. Each link and each LAN attachment becomes an edge.
#[derive(Debug, Default)]
pub struct TopologyGraph {
    pub graph: StableGraph<GraphNode, GraphEdge, Undirected>,
    router_index: HashMap<String, NodeIndex>,
}

impl TopologyGraph {
    /// Builds the graph. Links or LANs naming an unknown router are skipped.
    pub fn from_topology(topology: &Topology) -> Self {
        let mut graph = StableGraph::default();
        let mut router_index = HashMap::with_capacity(topology.routers.len());
        for key in topology.routers.keys() {
            let index = graph.add_node(GraphNode::Router(key.clone()));
            router_index.insert(key.clone(), index);
        }

        for link in &topology.links {
            let [a, b] = &link.endpoints;
            let ends = (router_index.get(&a.router), router_index.get(&b.router));
            if let (Some(&ia), Some(&ib)) = ends {
                graph.add_edge(
                    ia,
                    ib,
                    GraphEdge::Link {
                        subnet: link.subnet.clone(),
                        endpoints: link.endpoints.clone(),
                    },
                );
            }
        }

        for lan in &topology.lans {
            if let Some(&router) = router_index.get(&lan.router) {
                let lan_node = graph.add_node(GraphNode::Lan(lan.subnet.clone()));
                graph.add_edge(router, lan_node, GraphEdge::Attachment { intf: lan.intf.clone() });
            }
        }

        Self { graph, router_index }
    }

    pub fn router_node(&self, key: &str) -> Option<NodeIndex> {
        self.router_index.get(key).copied()
    }

    /// Routers directly linked to `key`, one entry per link, in edge order.
    pub fn router_neighbors(&self, key: &str) -> Vec<&str> {
        let Some(index) = self.router_node(key) else {
            return Vec::new();
        };
        let mut edges: Vec<_> = self
            .graph
            .edges(index)
            .filter(|edge| matches!(edge.weight(), GraphEdge::Link { .. }))
            .collect();
        edges.sort_by_key(|edge| edge.id());
        edges
            .into_iter()
            .filter_map(|edge| {
                let other = if edge.source() == index { edge.target() } else { edge.source() };
                match &self.graph[other] {
                    GraphNode::Router(name) => Some(name.as_str()),
                    GraphNode::Lan(_) => None,
                }
            })
            .collect()
    }

    /// Subnets of the LAN stubs hanging off `key`.
    pub fn lan_subnets(&self, key: &str) -> Vec<&str> {
        let Some(index) = self.router_node(key) else {
            return Vec::new();
        };
        let mut subnets: Vec<(_, &str)> = self
            .graph
            .edges(index)
            .filter_map(|edge| {
                let other = if edge.source() == index { edge.target() } else { edge.source() };
                match &self.graph[other] {
                    GraphNode::Lan(subnet) => Some((edge.id(), subnet.as_str())),
                    GraphNode::Router(_) => None,
                }
            })
            .collect();
        subnets.sort_by_key(|(id, _)| *id);
        subnets.into_iter().map(|(_, subnet)| subnet).collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::edge::{Lan, Link};
    use crate::topology::{builder::build_topology, source::ConfigInput};

    #[test]
    fn test_graph_from_topology() {
        let topo = build_topology(&[
            ConfigInput::new("a", "hostname A\ninterface e0\n ip address 10.0.0.1 255.255.255.0\ninterface e1\n ip address 192.168.1.1 255.255.255.0"),
            ConfigInput::new("b", "hostname B\ninterface e0\n ip address 10.0.0.2 255.255.255.0"),
            ConfigInput::new("c", "hostname C\ninterface e0\n ip address 10.0.0.3 255.255.255.0"),
        ]);
        let graph = TopologyGraph::from_topology(&topo);

        // 3 routers + 1 LAN; 3 mesh links + 1 attachment
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.router_neighbors("A"), vec!["B", "C"]);
        assert_eq!(graph.router_neighbors("C"), vec!["A", "B"]);
        assert_eq!(graph.lan_subnets("A"), vec!["192.168.1.0/24"]);
        assert!(graph.lan_subnets("B").is_empty());
        assert!(graph.router_neighbors("Z").is_empty());
    }

    #[test]
    fn test_dangling_references_are_skipped() {
        let mut topo = Topology::default();
        topo.routers.insert("A".to_string(), Default::default());
        topo.links.push(Link::new(
            "10.0.0.0/30",
            Endpoint::new("A", "e0"),
            Endpoint::new("X", "e0"),
        ));
        topo.lans.push(Lan {
            subnet: "192.168.9.0/24".to_string(),
            router: "X".to_string(),
            intf: "e1".to_string(),
        });

        let graph = TopologyGraph::from_topology(&topo);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.router_node("A").is_some());
    }
}
