/*
This module turns Cisco IOS running-config text into `Device` records.

--- data_aquisition module ---
Config files on disk, or text handed in by the caller
|
| Raw config text, one blob per device
v
--- ios_parser module ---
`config`: line state machine producing a `Device`
`mask`: dotted-decimal mask to prefix length
|
v
--- topology module ---
Subnet grouping into links and LANs
*/

pub mod config;
pub mod mask;

pub use config::{ConfigParser, parse_config_lines, parse_config_text};
pub use mask::{MaskError, mask_to_prefix};
