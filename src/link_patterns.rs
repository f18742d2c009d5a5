use regex::Regex;

use crate::error::ScrapeResult;

/// Which index page a link pattern applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// The meeting calendar, authoritative for recent years.
    Calendar,
    /// The per-year `fomchistorical<year>.htm` pages.
    Historical,
}

// Append rows here when the site grows a new URL convention.
const LINK_PATTERNS: &[(PageKind, &str)] = &[
    (PageKind::Calendar, r"^/monetarypolicy/fomcminutes\d{8}.htm"),
    (PageKind::Historical, r"^/monetarypolicy/fomc\d+"),
    (PageKind::Historical, r"^/monetarypolicy/fomcminutes"),
    (PageKind::Historical, r"^/fomc/minutes"),
    (PageKind::Historical, r"^/fomc/MINUTES"),
];

const RELEASE_ANNOTATION: &str = r"\(Released (\w*) (\d{1,2}), (\d{4})\)";

pub struct LinkPatterns {
    patterns: Vec<(PageKind, Regex)>,
    release_annotation: Regex,
}

impl LinkPatterns {
    pub fn new() -> ScrapeResult<Self> {
        let patterns = LINK_PATTERNS
            .iter()
            .map(|(kind, pattern)| Ok((*kind, Regex::new(pattern)?)))
            .collect::<ScrapeResult<Vec<_>>>()?;
        let release_annotation = Regex::new(RELEASE_ANNOTATION)?;
        Ok(Self {
            patterns,
            release_annotation,
        })
    }

    /// Whether `href` is a minutes document link on a page of `kind`.
    pub fn matches(&self, kind: PageKind, href: &str) -> bool {
        if href.to_ascii_lowercase().ends_with(".pdf") {
            return false;
        }
        self.patterns
            .iter()
            .filter(|(k, _)| *k == kind)
            .any(|(_, re)| re.is_match(href))
    }

    /// Every `(Released <Month> <Day>, <Year>)` annotation in `text`, joined
    /// as `Month-Day-Year`.
    pub fn release_date_triples(&self, text: &str) -> Vec<String> {
        self.release_annotation
            .captures_iter(text)
            .map(|caps| format!("{}-{}-{}", &caps[1], &caps[2], &caps[3]))
            .collect()
    }
}
