use std::time::SystemTime;

use crate::topology::{source::ConfigInput, store::Topology};

/// Renders the plain-text topology report.
///
/// `inputs` lists what the topology was built from; only their identifiers are printed.
pub fn render_report(
    topology: &Topology,
    inputs: &[ConfigInput],
    generated_at: SystemTime,
) -> String {
    let mut lines: Vec<String> = vec![
        "TOPOLOGY CREATION REPORT".to_string(),
        "========================".to_string(),
        format!("Generated at: {}", humantime::format_rfc3339_seconds(generated_at)),
        String::new(),
    ];

    lines.push("[1] Parsed configuration files:".to_string());
    lines.extend(inputs.iter().map(|input| format!("    - {}", input.id)));
    lines.push(String::new());

    lines.push("[2] Routers discovered:".to_string());
    lines.extend(topology.routers.keys().map(|key| format!("    - {key}")));
    lines.push(String::new());

    lines.push("[3] Interfaces and IPs:".to_string());
    for (key, device) in &topology.routers {
        lines.push(format!("    {key}:"));
        for (name, intf) in &device.interfaces {
            lines.push(format!(
                "        - {}: {} {} [{}]",
                name,
                intf.ip.as_deref().unwrap_or("unset"),
                intf.mask.as_deref().unwrap_or(""),
                if intf.shutdown { "shutdown" } else { "up" }
            ));
        }
    }
    lines.push(String::new());

    lines.push("[4] Links inferred from shared subnets:".to_string());
    if topology.links.is_empty() {
        lines.push("    - None".to_string());
    } else {
        lines.extend(topology.links.iter().map(|link| format!("    - {link}")));
    }
    lines.push(String::new());

    lines.push("[5] LANs detected (single-router subnets):".to_string());
    if topology.lans.is_empty() {
        lines.push("    - None".to_string());
    } else {
        lines.extend(topology.lans.iter().map(|lan| format!("    - {lan}")));
    }
    lines.push(String::new());

    lines.push("[6] OSPF Summary:".to_string());
    for (key, device) in &topology.routers {
        match device.ospf() {
            Some(ospf) => {
                let networks = if ospf.networks.is_empty() {
                    "no networks".to_string()
                } else {
                    ospf.networks
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                lines.push(format!(
                    "    - {}: process {} rid {} | {}",
                    key,
                    ospf.process,
                    ospf.router_id.as_deref().unwrap_or("not set"),
                    networks
                ));
            }
            None => lines.push(format!("    - {key}: OSPF not configured")),
        }
    }
    lines.push(String::new());

    lines.join("\n")
}
