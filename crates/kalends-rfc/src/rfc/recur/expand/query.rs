//! Range queries over the occurrence sequence.

use chrono::NaiveDate;

use crate::rfc::recur::core::Recurrence;

impl Recurrence {
    /// First occurrence after `date` (or on it, when `inclusive`).
    #[must_use]
    pub fn after(&self, date: NaiveDate, inclusive: bool) -> Option<NaiveDate> {
        self.occurrences()
            .find(|day| if inclusive { *day >= date } else { *day > date })
    }

    /// ## Summary
    /// Last occurrence before `date` (or on it, when `inclusive`).
    ///
    /// Scans forward from the start, so the cost grows with the distance
    /// between `dtstart` and `date`.
    #[must_use]
    pub fn before(&self, date: NaiveDate, inclusive: bool) -> Option<NaiveDate> {
        self.occurrences()
            .take_while(|day| if inclusive { *day <= date } else { *day < date })
            .last()
    }

    /// ## Summary
    /// All occurrences between `start` and `end`, in order.
    ///
    /// With `inclusive` the bounds themselves may be returned.
    #[must_use]
    pub fn between(&self, start: NaiveDate, end: NaiveDate, inclusive: bool) -> Vec<NaiveDate> {
        self.occurrences()
            .skip_while(|day| if inclusive { *day < start } else { *day <= start })
            .take_while(|day| if inclusive { *day <= end } else { *day < end })
            .collect()
    }

    /// Whether `date` is one of the occurrences.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.after(date, true) == Some(date)
    }

    /// Total number of occurrences, or `None` for an unbounded rule.
    #[must_use]
    pub fn occurrence_count(&self) -> Option<usize> {
        self.is_bounded().then(|| self.occurrences().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn tuesdays() -> Recurrence {
        "DTSTART:19900102\nRRULE:FREQ=WEEKLY;BYDAY=TU;UNTIL=19900329"
            .parse()
            .expect("valid rule")
    }

    #[test]
    fn after_and_before() {
        let rule = tuesdays();
        assert_eq!(rule.after(date(1990, 1, 9), false), Some(date(1990, 1, 16)));
        assert_eq!(rule.after(date(1990, 1, 9), true), Some(date(1990, 1, 9)));
        assert_eq!(rule.after(date(1990, 3, 27), false), None);
        assert_eq!(rule.before(date(1990, 1, 9), false), Some(date(1990, 1, 2)));
        assert_eq!(rule.before(date(1990, 1, 9), true), Some(date(1990, 1, 9)));
        assert_eq!(rule.before(date(1990, 1, 2), false), None);
        assert_eq!(rule.before(date(2000, 1, 1), false), Some(date(1990, 3, 27)));
    }

    #[test]
    fn between_respects_inclusivity() {
        let rule = tuesdays();
        assert_eq!(
            rule.between(date(1990, 1, 2), date(1990, 1, 16), false),
            vec![date(1990, 1, 9)]
        );
        assert_eq!(
            rule.between(date(1990, 1, 2), date(1990, 1, 16), true),
            vec![date(1990, 1, 2), date(1990, 1, 9), date(1990, 1, 16)]
        );
        assert!(rule.between(date(1990, 1, 17), date(1990, 1, 22), true).is_empty());
    }

    #[test]
    fn contains_checks_membership() {
        let rule = tuesdays();
        assert!(rule.contains(date(1990, 2, 6)));
        assert!(!rule.contains(date(1990, 2, 7)));
        assert!(!rule.contains(date(1990, 4, 3)));
        assert!(!rule.contains(date(1989, 12, 26)));
    }

    #[test]
    fn occurrence_count_needs_a_bound() {
        assert_eq!(tuesdays().occurrence_count(), Some(13));
        let open = Recurrence::daily()
            .with_dtstart(date(1990, 1, 1))
            .build()
            .expect("valid rule");
        assert_eq!(open.occurrence_count(), None);
    }
}
