use super::locale::{Locale, fill};
use crate::rfc::recur::core::WeekdayNum;

impl WeekdayNum {
    /// ## Summary
    /// Describes the day `offset` days away from this weekday.
    ///
    /// With no offset this is "Tuesday" or "2nd Tuesday". Otherwise it names
    /// the shifted weekday, anchored on the ordinal one when there is one:
    /// "Monday before the 2nd Tuesday". `plural` picks the plural name table,
    /// for lists such as "Tuesdays and Thursdays".
    #[must_use]
    pub fn describe(&self, offset: i64, plural: bool, locale: &Locale) -> String {
        let weekday = locale.weekday_name(self.weekday, plural);
        let Some(n) = self.ordinal else {
            return locale
                .weekday_name(self.weekday.shifted(offset), plural)
                .to_string();
        };
        let ordinal = locale.to_ordinal(i64::from(n));
        if offset == 0 {
            return fill(
                locale.phrases.ordinal_weekday,
                &[("ordinal", &ordinal), ("weekday", weekday)],
            );
        }
        let other = locale.weekday_name(self.weekday.shifted(offset), plural);
        let template = if offset < 0 {
            locale.phrases.weekday_before
        } else {
            locale.phrases.weekday_after
        };
        fill(
            template,
            &[("other", other), ("ordinal", &ordinal), ("weekday", weekday)],
        )
    }
}
