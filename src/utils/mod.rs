use once_cell::sync::Lazy;
use regex::Regex;

static TIME_GROUPS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:(\d+)h)?(?:(\d+)m)?(?:(\d+)s)?$").unwrap());

/// Look up a query parameter on a raw URL string.
///
/// Works on scheme-less strings too, which is why this avoids a full URL
/// parser. Empty values are treated as absent.
pub fn query_param(url: &str, key: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    let query = query.split_once('#').map(|(q, _)| q).unwrap_or(query);
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k == key && !v.is_empty()).then(|| v.to_string())
    })
}

/// Parse a start-time value as found in `t=` / `start=` parameters: either
/// bare seconds (`"90"`) or hour/minute/second groups (`"1h2m30s"`).
/// Values too large for a `u64` total are treated as absent, not a panic.
pub fn parse_time_offset(value: &str) -> Option<u64> {
    if value.is_empty() {
        return None;
    }
    if let Ok(seconds) = value.parse::<u64>() {
        return Some(seconds);
    }
    let caps = TIME_GROUPS.captures(value)?;
    let group = |i: usize| match caps.get(i) {
        Some(m) => m.as_str().parse::<u64>().ok(),
        None => Some(0),
    };
    group(1)?
        .checked_mul(3600)?
        .checked_add(group(2)?.checked_mul(60)?)?
        .checked_add(group(3)?)
}
