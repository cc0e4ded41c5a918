use std::net::Ipv4Addr;

use ipnetwork::Ipv4Network;

use crate::parsers::ios_parser::mask::mask_to_prefix;

/// Derives the network an interface sits on, with host bits cleared.
///
/// Returns `None` when either half is missing or unusable. An address that is
/// not itself the network address is normalized, not rejected.
pub fn interface_network(ip: Option<&str>, mask: Option<&str>) -> Option<Ipv4Network> {
    let (ip, mask) = (ip?, mask?);
    let addr: Ipv4Addr = ip.parse().ok()?;
    let prefix = mask_to_prefix(mask).ok()?;
    let host = Ipv4Network::new(addr, prefix).ok()?;
    Ipv4Network::new(host.network(), prefix).ok()
}

/// Same as [`interface_network`], rendered as `a.b.c.d/len` for use as a grouping key.
pub fn canonical_network(ip: Option<&str>, mask: Option<&str>) -> Option<String> {
    interface_network(ip, mask).map(|net| net.to_string())
}
