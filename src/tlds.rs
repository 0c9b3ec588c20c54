//! Static TLD/public-suffix table.
//!
//! Backs both the domain parser (`domain::parse`) and the `tld`/`tld2`/`tld3`
//! substitution algorithms, so the two can never disagree about what counts
//! as a suffix. Not a full public-suffix-list mirror — just the common
//! single/double/triple-label suffixes a typosquatting run cares about.

/// Single-label suffixes, most common first (order matters for `tld`'s
/// substitution list determinism under test).
pub const SINGLE: &[&str] = &[
    "com", "net", "org", "info", "biz", "io", "co", "me", "tv", "cc", "us",
    "uk", "de", "fr", "es", "it", "nl", "ru", "cn", "jp", "br", "in", "ca",
    "au", "xyz", "top", "online", "site", "shop", "app", "dev", "tech",
    "store", "club", "pro", "name", "mobi", "asia", "vip", "icu", "link",
    "live",
];

/// Two-label suffixes (`co.uk` style).
pub const DOUBLE: &[&str] = &[
    "co.uk", "org.uk", "me.uk", "co.jp", "co.in", "co.nz", "co.za", "com.au",
    "net.au", "org.au", "com.br", "com.cn", "net.cn", "org.cn", "com.mx",
    "com.tr", "com.sg", "co.kr", "co.id", "com.hk", "org.hk",
];

/// Three-label suffixes.
pub const TRIPLE: &[&str] = &["co.com.au", "parliament.uk", "sch.uk"];

/// Returns every known suffix, longest label-count first so a greedy
/// longest-suffix match (used by the parser) finds `co.uk` before `uk`.
pub fn all() -> Vec<&'static str> {
    let mut out = Vec::with_capacity(TRIPLE.len() + DOUBLE.len() + SINGLE.len());
    out.extend_from_slice(TRIPLE);
    out.extend_from_slice(DOUBLE);
    out.extend_from_slice(SINGLE);
    out
}

fn label_count(suffix: &str) -> usize {
    suffix.matches('.').count() + 1
}

/// Finds the longest known suffix that `labels` (already split on `.`) ends
/// with. Falls back to the last label if nothing in the table matches, so
/// `Valid()` can still be computed for unknown TLDs.
pub fn longest_match(labels: &[&str]) -> String {
    let mut candidates: Vec<&str> = all();
    candidates.sort_by_key(|s| std::cmp::Reverse(label_count(s)));

    for suffix in candidates {
        let n = label_count(suffix);
        if n > labels.len() {
            continue;
        }
        let tail = &labels[labels.len() - n..];
        let joined = tail.join(".");
        if joined.eq_ignore_ascii_case(suffix) {
            return joined;
        }
    }

    labels.last().map(|s| s.to_string()).unwrap_or_default()
}

pub fn is_two_label(suffix: &str) -> bool {
    label_count(suffix) == 2
}

pub fn is_three_label(suffix: &str) -> bool {
    label_count(suffix) == 3
}
