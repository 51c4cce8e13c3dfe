//! URL query-string codec for filter state.
//!
//! The storefront keeps the active filters in the address bar so a
//! filtered view can be shared or reloaded. Values are JSON-encoded
//! (arrays for the selection sets, a bare boolean for the discount
//! toggle) and percent-escaped. Parsing degrades field-wise: a
//! malformed value leaves that field at its default and never fails
//! the whole parse.

use std::collections::BTreeSet;

use crate::filter::FilterState;

/// Recognized query keys, in canonical emit order.
const KEY_PRICE_RANGE: &str = "priceRange";
const KEY_STYLES: &str = "styles";
const KEY_MATERIALS: &str = "materials";
const KEY_BRANDS: &str = "brands";
const KEY_SHOW_DISCOUNTED: &str = "showDiscounted";

impl FilterState {
    /// Parse filter state from a URL query string.
    ///
    /// Unrecognized keys are ignored; a value that fails to parse
    /// leaves its field at the default. Parsed price ranges are
    /// ordered and clamped into bounds.
    pub fn from_query(query: &str) -> Self {
        let mut state = FilterState::default();
        let query = query.strip_prefix('?').unwrap_or(query);
        if query.is_empty() {
            return state;
        }

        for pair in query.split('&') {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let value = parts.next().unwrap_or("");
            let decoded = percent_decode(value);

            match key {
                KEY_PRICE_RANGE => {
                    if let Ok([min, max]) = serde_json::from_str::<[i64; 2]>(&decoded) {
                        state.set_price_range(min, max);
                    }
                }
                KEY_STYLES => {
                    if let Some(set) = parse_string_set(&decoded) {
                        state.styles = set;
                    }
                }
                KEY_MATERIALS => {
                    if let Some(set) = parse_string_set(&decoded) {
                        state.materials = set;
                    }
                }
                KEY_BRANDS => {
                    if let Some(set) = parse_string_set(&decoded) {
                        state.brands = set;
                    }
                }
                KEY_SHOW_DISCOUNTED => {
                    if let Ok(flag) = serde_json::from_str::<bool>(&decoded) {
                        state.show_discounted = flag;
                    }
                }
                _ => {}
            }
        }

        state
    }

    /// Serialize to a URL query string, omitting default-valued keys.
    ///
    /// The default state serializes to the empty string; key order is
    /// fixed, and set values serialize in their canonical order, so
    /// equal states always produce equal strings.
    pub fn to_query(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        if !self.price_is_default() {
            let range = [self.price_range.0, self.price_range.1];
            if let Ok(json) = serde_json::to_string(&range) {
                parts.push(format!("{}={}", KEY_PRICE_RANGE, percent_encode(&json)));
            }
        }
        push_set(&mut parts, KEY_STYLES, &self.styles);
        push_set(&mut parts, KEY_MATERIALS, &self.materials);
        push_set(&mut parts, KEY_BRANDS, &self.brands);
        if self.show_discounted {
            parts.push(format!("{}=true", KEY_SHOW_DISCOUNTED));
        }

        parts.join("&")
    }
}

fn parse_string_set(json: &str) -> Option<BTreeSet<String>> {
    serde_json::from_str::<Vec<String>>(json)
        .ok()
        .map(|values| values.into_iter().collect())
}

fn push_set(parts: &mut Vec<String>, key: &str, set: &BTreeSet<String>) {
    if set.is_empty() {
        return;
    }
    if let Ok(json) = serde_json::to_string(set) {
        parts.push(format!("{}={}", key, percent_encode(&json)));
    }
}

/// Percent-escape everything outside the unreserved set.
fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Decode percent-escapes and `+` into bytes, then UTF-8.
fn percent_decode(s: &str) -> String {
    let mut bytes = Vec::with_capacity(s.len());
    let mut iter = s.bytes();

    while let Some(b) = iter.next() {
        match b {
            b'%' => {
                let hi = iter.next();
                let lo = iter.next();
                let decoded = match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        let hex = [hi, lo];
                        std::str::from_utf8(&hex)
                            .ok()
                            .and_then(|h| u8::from_str_radix(h, 16).ok())
                    }
                    _ => None,
                };
                match decoded {
                    Some(byte) => bytes.push(byte),
                    None => bytes.push(b'%'),
                }
            }
            b'+' => bytes.push(b' '),
            other => bytes.push(other),
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}
