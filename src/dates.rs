use chrono::NaiveDate;
use regex::Regex;

use crate::error::{ScrapeError, ScrapeResult};

const RELEASE_DATE_FORMATS: [&str; 2] = ["%B-%d-%Y", "%b-%d-%Y"];

// Before 2000 some minutes links carry the first day of a two-day meeting.
// Each pair maps that first day onto the second.
const MEETING_DATE_CORRECTIONS: [((i32, u32, u32), (i32, u32, u32)); 8] = [
    ((1996, 1, 30), (1996, 1, 31)),
    ((1996, 7, 2), (1996, 7, 3)),
    ((1997, 2, 4), (1997, 2, 5)),
    ((1997, 7, 1), (1997, 7, 2)),
    ((1998, 2, 3), (1998, 2, 4)),
    ((1998, 6, 30), (1998, 7, 1)),
    ((1999, 2, 2), (1999, 2, 3)),
    ((1999, 6, 29), (1999, 6, 30)),
];

/// Parses a `Month-Day-Year` triple such as `January-5-1999` or `Jan-5-1999`.
pub fn parse_release_date(text: &str) -> ScrapeResult<NaiveDate> {
    RELEASE_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .ok_or_else(|| ScrapeError::DateParse(text.to_string()))
}

pub struct LinkDateExtractor {
    // First run of eight digits in a link, read as YYYYMMDD.
    date_regex: Regex,
}

impl LinkDateExtractor {
    pub fn new() -> ScrapeResult<Self> {
        let date_regex = Regex::new(r"(\d{4})(\d{2})(\d{2})")?;
        Ok(Self { date_regex })
    }

    pub fn date_from_link(&self, link: &str) -> ScrapeResult<NaiveDate> {
        let Some(caps) = self.date_regex.captures(link) else {
            return Err(ScrapeError::MissingLinkDate(link.to_string()));
        };
        let year = caps[1].parse::<i32>();
        let month = caps[2].parse::<u32>();
        let day = caps[3].parse::<u32>();
        match (year, month, day) {
            (Ok(y), Ok(m), Ok(d)) => NaiveDate::from_ymd_opt(y, m, d)
                .ok_or_else(|| ScrapeError::DateParse(caps[0].to_string())),
            _ => Err(ScrapeError::DateParse(caps[0].to_string())),
        }
    }
}

/// Shifts the known first-day meeting dates onto the second day of the meeting.
pub fn correct_meeting_date(date: NaiveDate) -> NaiveDate {
    MEETING_DATE_CORRECTIONS
        .iter()
        .find(|((y, m, d), _)| NaiveDate::from_ymd_opt(*y, *m, *d) == Some(date))
        .and_then(|(_, (y, m, d))| NaiveDate::from_ymd_opt(*y, *m, *d))
        .unwrap_or(date)
}
