use rustc_hash::FxHashMap;

/// Which kind of configured rule produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Pattern matches one fully-qualified domain name.
    Exact,
    /// `*.`-prefixed pattern; matches the base domain and every subdomain.
    SuffixWildcard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch<'a> {
    pub ip: &'a str,
    pub kind: RuleKind,
}

/// Static domain-override table, split at build time into an exact map and a
/// suffix map. Immutable after load; lookups take no locks.
///
/// IP values are carried verbatim — an address that fails to parse simply
/// yields no answer record at the wire layer (operator error).
#[derive(Debug, Default)]
pub struct RuleTable {
    exact: FxHashMap<String, String>,
    suffix: FxHashMap<String, String>,
}

impl RuleTable {
    /// Split configured `pattern -> ip` rules into the two maps.
    ///
    /// Keys are lowercased and stripped of any trailing dot so they compare
    /// equal to normalized query names. Duplicate patterns: last write wins.
    pub fn build<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut exact = FxHashMap::default();
        let mut suffix = FxHashMap::default();

        for (pattern, ip) in rules {
            let pattern = pattern.trim_end_matches('.').to_ascii_lowercase();
            if let Some(base) = pattern.strip_prefix("*.") {
                suffix.insert(base.to_string(), ip);
            } else {
                exact.insert(pattern, ip);
            }
        }

        Self { exact, suffix }
    }

    /// Look up `domain` (already normalized: lowercase, no trailing dot).
    ///
    /// Exact rules take precedence. The suffix walk tests the full domain
    /// first, then strips the leftmost label and retries, so `*.example.com`
    /// matches `example.com` itself as well as any depth of subdomain.
    pub fn lookup(&self, domain: &str) -> Option<RuleMatch<'_>> {
        if let Some(ip) = self.exact.get(domain) {
            return Some(RuleMatch {
                ip,
                kind: RuleKind::Exact,
            });
        }

        let mut candidate = domain;
        loop {
            if let Some(ip) = self.suffix.get(candidate) {
                return Some(RuleMatch {
                    ip,
                    kind: RuleKind::SuffixWildcard,
                });
            }
            match candidate.split_once('.') {
                Some((_, parent)) => candidate = parent,
                None => break,
            }
        }

        None
    }

    pub fn exact_count(&self) -> usize {
        self.exact.len()
    }

    pub fn wildcard_count(&self) -> usize {
        self.suffix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.suffix.is_empty()
    }
}
