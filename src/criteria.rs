//! Criteria Module
//!
//! Selection axes used when no explicit window IDs are given, plus the
//! lenient numeric parsing the command line relies on.

use x11rb::protocol::xproto::Window;

/// Tri-state policy for one selection axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Criterion {
    /// Axis does not take part in filtering
    #[default]
    Ignore,
    /// Candidate must match the reference value
    Same,
    /// Candidate must differ from the reference value
    Different,
}

impl Criterion {
    pub fn is_ignored(self) -> bool {
        self == Criterion::Ignore
    }

    /// Evaluate the axis for a candidate value against the reference value.
    ///
    /// A missing candidate or reference value fails any active axis.
    pub fn accepts<T: PartialEq>(self, reference: Option<&T>, candidate: Option<&T>) -> bool {
        match self {
            Criterion::Ignore => true,
            Criterion::Same => matches!((reference, candidate), (Some(r), Some(c)) if r == c),
            Criterion::Different => {
                matches!((reference, candidate), (Some(r), Some(c)) if r != c)
            }
        }
    }
}

/// Selection criteria over window identity, class and desktop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Criteria {
    /// Only `Ignore` and `Different` are reachable from the command line
    pub identity: Criterion,
    pub class: Criterion,
    pub desktop: Criterion,
}

impl Criteria {
    /// True when every axis is `Ignore`
    pub fn is_empty(&self) -> bool {
        self.identity.is_ignored() && self.class.is_ignored() && self.desktop.is_ignored()
    }

    /// The active window is needed as a reference for identity and class comparisons
    pub fn needs_reference(&self) -> bool {
        !self.identity.is_ignored() || !self.class.is_ignored()
    }
}

/// Parse a window ID with C `strtol(s, &end, 0)` rules, requiring the whole
/// token to be consumed.
///
/// Accepts an optional sign, `0x`/`0X` hex and leading-zero octal. Returns
/// `None` for empty tokens, trailing garbage, and values that do not fit a
/// 32-bit window ID.
pub fn parse_window_id(token: &str) -> Option<Window> {
    let s = token.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (16, hex)
    } else if s.len() > 1 && s.starts_with('0') {
        (8, &s[1..])
    } else {
        (10, s)
    };

    // from_str_radix would also take a second sign here
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }

    let value = u32::from_str_radix(digits, radix).ok()?;
    if negative && value != 0 {
        return None;
    }
    Some(value)
}

/// Parse an event code the way C `atoi` does, truncated to the 8-bit
/// protocol field. Non-numeric input yields 0.
pub fn parse_event_code(value: &str) -> u8 {
    let s = value.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut code: i64 = 0;
    for b in s.bytes().take_while(u8::is_ascii_digit) {
        code = code.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }
    if negative {
        code = -code;
    }
    code as u8
}
