use std::cmp::Ordering;

use once_cell::sync::Lazy;
use regex::Regex;

// Matches ">V1.2.1", "> 1.2.2" etc. in the rendered releases page: a
// closing tag, optional whitespace, optional V, then dotted numbers.
static VERSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r">\s*[Vv]?(\d+(?:\.\d+)+)").expect("version regex"));

/// Compare dotted numeric versions field by field; missing fields count
/// as zero, so "1.2" == "1.2.0".
pub fn compare(a: &str, b: &str) -> Ordering {
    let parts_a: Vec<u64> = a.split('.').map(|p| p.parse().unwrap_or(0)).collect();
    let parts_b: Vec<u64> = b.split('.').map(|p| p.parse().unwrap_or(0)).collect();
    let len = parts_a.len().max(parts_b.len());
    for i in 0..len {
        let va = parts_a.get(i).copied().unwrap_or(0);
        let vb = parts_b.get(i).copied().unwrap_or(0);
        match va.cmp(&vb) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// Highest version number mentioned in the releases page body.
pub fn extract_highest(body: &str) -> Option<String> {
    let mut highest: Option<String> = None;
    for caps in VERSION_RE.captures_iter(body) {
        let ver = caps[1].to_string();
        match &highest {
            Some(current) if compare(&ver, current) != Ordering::Greater => {}
            _ => highest = Some(ver),
        }
    }
    highest
}

/// Strip a leading v/V and any trailing qualifier ("1.3.0 Beta" -> "1.3.0").
pub fn clean(version: &str) -> String {
    let lower = version.trim().to_lowercase();
    let stripped = lower.strip_prefix('v').unwrap_or(&lower);
    stripped.split(' ').next().unwrap_or("").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_orders_numerically() {
        assert_eq!(compare("1.2.1", "1.2"), Ordering::Greater);
        assert_eq!(compare("1.2", "1.2.0"), Ordering::Equal);
        assert_eq!(compare("1.10", "1.9"), Ordering::Greater);
        assert_eq!(compare("2.0", "10.0"), Ordering::Less);
        assert_eq!(compare("1.3.0.1", "1.3.0"), Ordering::Greater);
    }

    #[test]
    fn extracts_highest_version_from_page() {
        let body = r#"<a href="/releases/tag/v1.2.1">V1.2.1</a>
            <span> 1.3.0</span> <b>v1.2.9</b> no version here"#;
        assert_eq!(extract_highest(body).as_deref(), Some("1.3.0"));
    }

    #[test]
    fn extract_ignores_bare_numbers() {
        assert_eq!(extract_highest("<td>42</td>"), None);
        assert_eq!(extract_highest(""), None);
    }

    #[test]
    fn clean_strips_prefix_and_qualifier() {
        assert_eq!(clean("V1.3.0 Beta"), "1.3.0");
        assert_eq!(clean("v2.1"), "2.1");
        assert_eq!(clean("1.0"), "1.0");
    }
}
