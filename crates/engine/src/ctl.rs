use log::debug;
use thiserror::Error;

/// Number of fields in a window's `ctl` record: id, tag length, body
/// length, is-directory, is-dirty, width, font, tab width.
pub const CTL_FIELD_COUNT: usize = 8;

/// Position of the dirty flag in the `ctl` record.
pub const DIRTY_FIELD: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("wanted {} fields, got {got}", CTL_FIELD_COUNT)]
pub struct FieldCountMismatch {
    pub got: usize,
}

/// Boolean literals as acme and its tools spell them.
pub fn parse_bool(token: &[u8]) -> Option<bool> {
    match token {
        b"1" | b"t" | b"T" | b"TRUE" | b"true" | b"True" => Some(true),
        b"0" | b"f" | b"F" | b"FALSE" | b"false" | b"False" => Some(false),
        _ => None,
    }
}

/// Extract the dirty flag from a raw `ctl` record.
///
/// The field count is checked strictly. An unreadable flag is taken as
/// clean.
pub fn parse_dirty(ctl: &[u8]) -> Result<bool, FieldCountMismatch> {
    let fields: Vec<&[u8]> = ctl
        .split(|b| b.is_ascii_whitespace())
        .filter(|f| !f.is_empty())
        .collect();

    if fields.len() != CTL_FIELD_COUNT {
        return Err(FieldCountMismatch { got: fields.len() });
    }

    let token = fields[DIRTY_FIELD];
    Ok(parse_bool(token).unwrap_or_else(|| {
        debug!(
            "[ctl] non-boolean dirty flag {:?}, treating as clean",
            String::from_utf8_lossy(token)
        );
        false
    }))
}

#[cfg(test)]
#[path = "ctl_tests.rs"]
mod tests;
