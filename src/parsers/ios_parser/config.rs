/*!
Line-oriented parser for Cisco IOS running-config text.

The parser is a small state machine. Every line is classified by an ordered
list of matchers: the global ones (`hostname`, `interface`, `router ospf`)
are tried in any state, followed by the ones scoped to the current block.
Lines no matcher accepts are skipped and leave the state untouched.
*/

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::network::router::{Device, Interface, OspfConfig, OspfNetwork};

static HOSTNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*hostname\s+(\S+)").unwrap());
static INTERFACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*interface\s+(\S+)").unwrap());
static IP_ADDRESS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*ip\s+address\s+(\d+\.\d+\.\d+\.\d+)\s+(\d+\.\d+\.\d+\.\d+)").unwrap()
});
static SHUTDOWN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*shutdown\s*$").unwrap());
static ROUTER_OSPF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*router\s+ospf\s+(\d+)").unwrap());
static ROUTER_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*router-id\s+(\d+\.\d+\.\d+\.\d+)").unwrap());
static OSPF_NETWORK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*network\s+(\d+\.\d+\.\d+\.\d+)\s+(\d+\.\d+\.\d+\.\d+)\s+area\s+(\d+)")
        .unwrap()
});

/// Block the parser is currently in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParserState {
    #[default]
    TopLevel,
    /// Inside `interface <name>`.
    InInterface(String),
    /// Inside `router ospf <process>`.
    InRouterOspf,
}

/// A recognized config statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLine {
    Hostname(String),
    Interface(String),
    IpAddress { ip: String, mask: String },
    Shutdown,
    RouterOspf(u32),
    RouterId(String),
    Network(OspfNetwork),
}

type LineMatcher = fn(&str) -> Option<ConfigLine>;

const GLOBAL_MATCHERS: &[LineMatcher] = &[match_hostname, match_interface, match_router_ospf];
const INTERFACE_MATCHERS: &[LineMatcher] = &[match_ip_address, match_shutdown];
const ROUTER_OSPF_MATCHERS: &[LineMatcher] = &[match_router_id, match_ospf_network];

impl ParserState {
    fn scoped_matchers(&self) -> &'static [LineMatcher] {
        match self {
            ParserState::TopLevel => &[],
            ParserState::InInterface(_) => INTERFACE_MATCHERS,
            ParserState::InRouterOspf => ROUTER_OSPF_MATCHERS,
        }
    }

    /// Classifies a line against the matchers valid in this state.
    pub fn classify(&self, line: &str) -> Option<ConfigLine> {
        let line = line.trim_end();
        GLOBAL_MATCHERS
            .iter()
            .chain(self.scoped_matchers())
            .find_map(|matcher| matcher(line))
    }
}

fn match_hostname(line: &str) -> Option<ConfigLine> {
    let caps = HOSTNAME_RE.captures(line)?;
    Some(ConfigLine::Hostname(caps[1].to_string()))
}

fn match_interface(line: &str) -> Option<ConfigLine> {
    let caps = INTERFACE_RE.captures(line)?;
    Some(ConfigLine::Interface(caps[1].to_string()))
}

fn match_router_ospf(line: &str) -> Option<ConfigLine> {
    let caps = ROUTER_OSPF_RE.captures(line)?;
    let process = caps[1].parse().ok()?;
    Some(ConfigLine::RouterOspf(process))
}

fn match_ip_address(line: &str) -> Option<ConfigLine> {
    let caps = IP_ADDRESS_RE.captures(line)?;
    Some(ConfigLine::IpAddress {
        ip: caps[1].to_string(),
        mask: caps[2].to_string(),
    })
}

fn match_shutdown(line: &str) -> Option<ConfigLine> {
    SHUTDOWN_RE.is_match(line).then_some(ConfigLine::Shutdown)
}

fn match_router_id(line: &str) -> Option<ConfigLine> {
    let caps = ROUTER_ID_RE.captures(line)?;
    Some(ConfigLine::RouterId(caps[1].to_string()))
}

fn match_ospf_network(line: &str) -> Option<ConfigLine> {
    let caps = OSPF_NETWORK_RE.captures(line)?;
    let area = caps[3].parse().ok()?;
    Some(ConfigLine::Network(OspfNetwork {
        network: caps[1].to_string(),
        wildcard: caps[2].to_string(),
        area,
    }))
}

/// Incremental parser producing one [`Device`].
#[derive(Debug, Default)]
pub struct ConfigParser {
    state: ParserState,
    device: Device,
}

impl ConfigParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ParserState {
        &self.state
    }

    /// Feeds one line. Never fails; unrecognized lines are ignored.
    pub fn feed_line(&mut self, line: &str) {
        if let Some(statement) = self.state.classify(line) {
            self.apply(statement);
        }
    }

    fn apply(&mut self, statement: ConfigLine) {
        match statement {
            ConfigLine::Hostname(name) => {
                self.device.hostname = Some(name);
            }
            ConfigLine::Interface(name) => {
                self.device.interfaces.entry(name.clone()).or_default();
                trace!("entering interface {name}");
                self.state = ParserState::InInterface(name);
            }
            ConfigLine::IpAddress { ip, mask } => {
                if let Some(intf) = self.current_interface() {
                    intf.ip = Some(ip);
                    intf.mask = Some(mask);
                }
            }
            ConfigLine::Shutdown => {
                if let Some(intf) = self.current_interface() {
                    intf.shutdown = true;
                }
            }
            ConfigLine::RouterOspf(process) => {
                // A second `router ospf` block folds into the first one.
                self.device
                    .routing
                    .ospf
                    .get_or_insert_with(|| OspfConfig::new(process));
                trace!("entering router ospf {process}");
                self.state = ParserState::InRouterOspf;
            }
            ConfigLine::RouterId(id) => {
                if let Some(ospf) = self.device.routing.ospf.as_mut() {
                    ospf.router_id = Some(id);
                }
            }
            ConfigLine::Network(network) => {
                if let Some(ospf) = self.device.routing.ospf.as_mut() {
                    ospf.networks.push(network);
                }
            }
        }
    }

    fn current_interface(&mut self) -> Option<&mut Interface> {
        match &self.state {
            ParserState::InInterface(name) => self.device.interfaces.get_mut(name),
            _ => None,
        }
    }

    pub fn finish(self) -> Device {
        self.device
    }
}

/// Parses a sequence of config lines into a [`Device`].
pub fn parse_config_lines<I>(lines: I) -> Device
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut parser = ConfigParser::new();
    for line in lines {
        parser.feed_line(line.as_ref());
    }
    parser.finish()
}

/// Parses a whole running-config.
pub fn parse_config_text(text: &str) -> Device {
    parse_config_lines(text.lines())
}
