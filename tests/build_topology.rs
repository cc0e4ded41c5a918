use std::fs;

use ios_topology::{
    ConfigInput, Endpoint, Lan, Link, Topology, TopologyBuilder, TopologyError,
    build_topology, build_topology_from_files,
    data_aquisition::files::FileSource,
    network::network_graph::TopologyGraph,
    topology::StaticSource,
};
use pretty_assertions::assert_eq;

const R1: &str = include_str!("../test_data/configs/r1.txt");
const R2: &str = include_str!("../test_data/configs/r2.txt");
const R3: &str = include_str!("../test_data/configs/r3.txt");

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn write_fixtures(dir: &std::path::Path) {
    fs::write(dir.join("r1.txt"), R1).unwrap();
    fs::write(dir.join("r2.txt"), R2).unwrap();
    fs::write(dir.join("r3.txt"), R3).unwrap();
}

fn expected_links() -> Vec<Link> {
    vec![
        Link::new(
            "10.0.12.0/30",
            Endpoint::new("R1", "GigabitEthernet0/0"),
            Endpoint::new("R2", "GigabitEthernet0/0"),
        ),
        Link::new(
            "10.0.123.0/24",
            Endpoint::new("R1", "GigabitEthernet0/1"),
            Endpoint::new("R2", "GigabitEthernet0/1"),
        ),
        Link::new(
            "10.0.123.0/24",
            Endpoint::new("R1", "GigabitEthernet0/1"),
            Endpoint::new("r3", "GigabitEthernet0/1"),
        ),
        Link::new(
            "10.0.123.0/24",
            Endpoint::new("R2", "GigabitEthernet0/1"),
            Endpoint::new("r3", "GigabitEthernet0/1"),
        ),
    ]
}

fn expected_lans() -> Vec<Lan> {
    vec![
        Lan {
            subnet: "1.1.1.1/32".to_string(),
            router: "R1".to_string(),
            intf: "Loopback0".to_string(),
        },
        Lan {
            subnet: "192.168.2.0/24".to_string(),
            router: "R2".to_string(),
            intf: "GigabitEthernet0/2".to_string(),
        },
    ]
}

#[test]
fn test_build_from_discovered_files() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());

    let mut source = FileSource::discover(dir.path(), "*.txt").unwrap();
    let topo = TopologyBuilder::build_from_source(&mut source).unwrap();

    let keys: Vec<_> = topo.routers.keys().cloned().collect();
    assert_eq!(keys, vec!["R1", "R2", "r3"]);
    assert_eq!(topo.links, expected_links());
    assert_eq!(topo.lans, expected_lans());

    let r3 = &topo.routers["r3"];
    assert_eq!(r3.hostname, None);
    assert_eq!(r3.interfaces["GigabitEthernet0/0"].mask.as_deref(), Some("255.255.256.0"));
    assert_eq!(r3.interfaces["GigabitEthernet0/3"].ip, None);
    assert!(r3.routing.ospf.is_none());
}

#[test]
fn test_build_from_paths_matches_in_memory_build() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let paths = ["r1.txt", "r2.txt", "r3.txt"].map(|name| dir.path().join(name));

    let from_files = build_topology_from_files(&paths).unwrap();
    let in_memory = build_topology(&[
        ConfigInput::new("r1.txt", R1),
        ConfigInput::new("r2.txt", R2),
        ConfigInput::new("r3.txt", R3),
    ]);
    assert_eq!(from_files, in_memory);
}

#[test]
fn test_unreadable_input_aborts_build() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let paths = vec![dir.path().join("r1.txt"), dir.path().join("r9.txt")];

    let err = build_topology_from_files(&paths).unwrap_err();
    assert!(matches!(err, TopologyError::Io { .. }));
    assert!(err.to_string().contains("r9.txt"));
}

#[test]
fn test_json_output_shape() {
    let topo = build_topology(&[
        ConfigInput::new("r1.txt", R1),
        ConfigInput::new("r2.txt", R2),
    ]);
    let value: serde_json::Value = serde_json::to_value(&topo).unwrap();

    let r1 = &value["routers"]["R1"];
    assert_eq!(r1["hostname"], "R1");
    assert_eq!(r1["interfaces"]["GigabitEthernet0/2"]["ip"], serde_json::Value::Null);
    assert_eq!(r1["interfaces"]["GigabitEthernet0/2"]["shutdown"], true);
    assert_eq!(r1["routing"]["ospf"]["process"], 1);
    assert_eq!(r1["routing"]["ospf"]["networks"][2]["area"], 0);
    assert_eq!(value["routers"]["R2"]["routing"]["ospf"]["networks"][2]["area"], 10);

    let link = &value["links"][0];
    assert_eq!(link["subnet"], "10.0.12.0/30");
    assert_eq!(link["endpoints"][1]["router"], "R2");
    assert_eq!(value["lans"][0]["intf"], "Loopback0");

    let back: Topology = serde_json::from_value(value).unwrap();
    assert_eq!(back, topo);
}

#[test]
fn test_rebuilds_are_byte_identical() {
    let mut source = StaticSource::new(vec![
        ConfigInput::new("r3.txt", R3),
        ConfigInput::new("r2.txt", R2),
        ConfigInput::new("r1.txt", R1),
    ]);
    let first = TopologyBuilder::build_from_source(&mut source).unwrap().to_json_pretty().unwrap();
    let second = TopologyBuilder::build_from_source(&mut source).unwrap().to_json_pretty().unwrap();
    assert_eq!(first, second);

    // Input order drives link orientation.
    let topo = Topology::from_json(&first).unwrap();
    assert_eq!(topo.links[0].subnet, "10.0.123.0/24");
    assert_eq!(topo.links[0].endpoints[0].router, "r3");
}

#[test]
fn test_graph_view_of_fixture_topology() {
    let topo = build_topology(&[
        ConfigInput::new("r1.txt", R1),
        ConfigInput::new("r2.txt", R2),
        ConfigInput::new("r3.txt", R3),
    ]);
    let graph = TopologyGraph::from_topology(&topo);

    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.edge_count(), 6);
    assert_eq!(graph.router_neighbors("R1"), vec!["R2", "R2", "r3"]);
    assert_eq!(graph.lan_subnets("R2"), vec!["192.168.2.0/24"]);
}
