use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaskError {
    #[error("invalid subnet mask: {0}")]
    InvalidMask(String),
}

/// Converts a dotted-decimal mask into a prefix length by counting set bits.
///
/// Contiguity is not checked: `255.0.255.0` is accepted and yields 16.
pub fn mask_to_prefix(mask: &str) -> Result<u8, MaskError> {
    let octets: Vec<&str> = mask.split('.').collect();
    if octets.len() != 4 {
        return Err(MaskError::InvalidMask(mask.to_string()));
    }

    let mut prefix = 0u8;
    for octet in octets {
        let value: u8 = octet
            .parse()
            .map_err(|_| MaskError::InvalidMask(mask.to_string()))?;
        prefix += value.count_ones() as u8;
    }
    Ok(prefix)
}
