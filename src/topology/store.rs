/*!
The finished topology value.

`Topology` is what the builder hands back and what every consumer (JSON export,
report, graph view) reads. Its serialized shape is fixed:
`{ routers: { <key>: Device }, links: [Link], lans: [Lan] }`, with routers kept
in the order they were first inserted.
*/

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::network::{
    edge::{Endpoint, Lan, Link},
    router::{Device, Interface},
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    pub routers: IndexMap<String, Device>,
    pub links: Vec<Link>,
    pub lans: Vec<Lan>,
}

impl Topology {
    pub fn is_empty(&self) -> bool {
        self.routers.is_empty()
    }

    pub fn router(&self, key: &str) -> Option<&Device> {
        self.routers.get(key)
    }

    pub fn interface(&self, endpoint: &Endpoint) -> Option<&Interface> {
        self.routers.get(&endpoint.router)?.interfaces.get(&endpoint.intf)
    }

    /// Links with `router` on either end, in link order.
    pub fn links_of<'a>(&'a self, router: &'a str) -> impl Iterator<Item = &'a Link> + 'a {
        self.links.iter().filter(move |link| link.touches(router))
    }

    pub fn lans_of<'a>(&'a self, router: &'a str) -> impl Iterator<Item = &'a Lan> + 'a {
        self.lans.iter().filter(move |lan| lan.router == router)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
