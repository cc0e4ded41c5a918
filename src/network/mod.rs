/*
 * This module defines the device and adjacency records that make up a topology.
 * It also provides an undirected graph view over a finished topology.
 */

pub mod router;
pub mod edge;
pub mod network_graph;
