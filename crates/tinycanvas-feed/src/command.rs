//! Command-line format.
//!
//! One command per line: `X,Y,STATUS` as ASCII decimal integers. Lines that
//! are blank (after trimming) or start with `#` are ignored; anything else
//! that fails to parse is malformed and skipped by the caller. Fields parse
//! as `u16`, so negatives are malformed by construction while values ≥ 256
//! pass through to be rejected as out-of-range coordinates by the device.

/// Whether a complete line carries no command at all (blank or comment).
///
/// Ignored lines are distinct from malformed ones: they are expected
/// content and not worth a diagnostic.
pub fn is_ignored(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Parse one command line into its three bus words.
///
/// Returns `None` for the wrong field count or non-integer fields. Fields
/// may carry surrounding whitespace.
pub fn parse_line(line: &str) -> Option<[u16; 3]> {
    let mut fields = line.split(',');
    let x = fields.next()?.trim().parse().ok()?;
    let y = fields.next()?.trim().parse().ok()?;
    let status = fields.next()?.trim().parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some([x, y, status])
}
