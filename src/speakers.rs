use chrono::NaiveDate;

// (first day, last day, chair). Gaps between terms fall through to "other".
const CHAIR_TERMS: [((i32, u32, u32), (i32, u32, u32), &str); 7] = [
    ((1970, 2, 1), (1978, 3, 7), "Arthur Burns"),
    ((1978, 3, 8), (1979, 8, 5), "William Miller"),
    ((1979, 8, 6), (1987, 8, 10), "Paul Volcker"),
    ((1987, 8, 11), (2006, 1, 31), "Alan Greenspan"),
    ((2006, 2, 1), (2014, 1, 31), "Ben Bernanke"),
    ((2014, 2, 3), (2018, 2, 3), "Janet Yellen"),
    ((2018, 2, 5), (9999, 12, 31), "Jerome Powell"),
];

pub const UNKNOWN_SPEAKER: &str = "other";

/// Chair of the committee on the given meeting date.
pub fn speaker_from_date(date: NaiveDate) -> &'static str {
    CHAIR_TERMS
        .iter()
        .find(|((fy, fm, fd), (ty, tm, td), _)| {
            let from = NaiveDate::from_ymd_opt(*fy, *fm, *fd);
            let to = NaiveDate::from_ymd_opt(*ty, *tm, *td);
            matches!((from, to), (Some(from), Some(to)) if from <= date && date <= to)
        })
        .map(|(_, _, chair)| *chair)
        .unwrap_or(UNKNOWN_SPEAKER)
}
