use crate::error::{Result, SlicerError};

pub const KIB: u64 = 1024;
pub const MIB: u64 = 1024 * KIB;
pub const GIB: u64 = 1024 * MIB;

/// Default chunk size: 1 GiB.
pub const DEFAULT_BLOCK_SIZE: u64 = GIB;

/// Parse a byte count such as `4096`, `512K`, `64MiB` or `1g`.
///
/// Suffixes are binary (1024-based) and case-insensitive. Zero is rejected.
pub fn parse_size(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    let split = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (digits, suffix) = trimmed.split_at(split);

    if digits.is_empty() {
        return Err(SlicerError::InvalidSize(input.to_string()));
    }
    let value: u64 = digits
        .parse()
        .map_err(|_| SlicerError::InvalidSize(input.to_string()))?;

    let multiplier = match suffix.trim().to_ascii_lowercase().as_str() {
        "" | "b" => 1,
        "k" | "kb" | "kib" => KIB,
        "m" | "mb" | "mib" => MIB,
        "g" | "gb" | "gib" => GIB,
        _ => return Err(SlicerError::InvalidSize(input.to_string())),
    };

    let size = value
        .checked_mul(multiplier)
        .ok_or_else(|| SlicerError::InvalidSize(format!("{input} overflows")))?;
    if size == 0 {
        return Err(SlicerError::InvalidSize(format!("{input} is zero")));
    }
    Ok(size)
}

/// Human-readable size for console output.
pub fn format_bytes(bytes: u64) -> String {
    if bytes >= GIB {
        format!("{:.1} GiB", bytes as f64 / GIB as f64)
    } else if bytes >= MIB {
        format!("{:.1} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes} B")
    }
}
