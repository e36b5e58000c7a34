//! Calendar paging domain: one item per day, pages generated on demand.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use paging_core::{FnDataSource, FnResolver};

/// Paging item for a single calendar day.
///
/// Identity, ordering, and hashing are all keyed on the date alone, so
/// two items for the same day compare equal no matter when they were
/// constructed. The display strings are formatted once up front and
/// carried along, like the menu labels in a date picker strip.
#[derive(Clone, Debug)]
pub struct CalendarItem {
    date: NaiveDate,
    date_text: String,
    weekday_text: String,
}

impl CalendarItem {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            date_text: date.format("%d").to_string(),
            weekday_text: date.format("%a").to_string(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Day-of-month label, e.g. `07`.
    pub fn date_text(&self) -> &str {
        &self.date_text
    }

    /// Short weekday label, e.g. `Tue`.
    pub fn weekday_text(&self) -> &str {
        &self.weekday_text
    }
}

impl PartialEq for CalendarItem {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
    }
}

impl Eq for CalendarItem {}

impl PartialOrd for CalendarItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarItem {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date)
    }
}

impl Hash for CalendarItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.date.hash(state);
    }
}

/// Rendered content for one day's page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarPage {
    title: String,
}

impl CalendarPage {
    fn new(item: &CalendarItem) -> Self {
        Self {
            title: item.date().format("%A, %-d %B %Y").to_string(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Data source stepping one day at a time in both directions.
///
/// `pred_opt`/`succ_opt` return `None` at the ends of chrono's
/// representable range, which the cursor treats as natural boundaries.
pub fn day_source() -> FnDataSource<
    impl Fn(&CalendarItem) -> Option<CalendarItem>,
    impl Fn(&CalendarItem) -> Option<CalendarItem>,
> {
    FnDataSource::new(
        |item: &CalendarItem| item.date().pred_opt().map(CalendarItem::new),
        |item: &CalendarItem| item.date().succ_opt().map(CalendarItem::new),
    )
}

/// Resolver formatting a [`CalendarPage`] per day.
pub fn page_resolver() -> FnResolver<impl FnMut(&CalendarItem) -> CalendarPage, CalendarPage> {
    FnResolver::new(|item: &CalendarItem| CalendarPage::new(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use paging_core::PagingCursor;

    fn day(year: i32, month: u32, day: u32) -> CalendarItem {
        CalendarItem::new(NaiveDate::from_ymd_opt(year, month, day).unwrap())
    }

    #[test]
    fn items_for_same_day_are_equal() {
        assert_eq!(day(2024, 2, 29), day(2024, 2, 29));
        assert!(day(2024, 2, 28) < day(2024, 3, 1));
    }

    #[test]
    fn source_steps_across_month_boundary() {
        let mut cursor = PagingCursor::new(day_source(), page_resolver(), day(2024, 1, 31));
        cursor.advance().unwrap();
        let window = cursor.current_window();
        assert_eq!(window.current(), &day(2024, 2, 1));
        assert_eq!(window.previous(), Some(&day(2024, 1, 31)));
        assert_eq!(window.next(), Some(&day(2024, 2, 2)));
    }

    #[test]
    fn page_titles_follow_the_selected_day() {
        let mut cursor = PagingCursor::new(day_source(), page_resolver(), day(2026, 8, 26));
        assert_eq!(cursor.current_content().title(), "Wednesday, 26 August 2026");
        cursor.retreat().unwrap();
        assert_eq!(cursor.current_content().title(), "Tuesday, 25 August 2026");
    }

    #[test]
    fn today_jump_resets_the_window() {
        let mut cursor = PagingCursor::new(day_source(), page_resolver(), day(2020, 1, 1));
        cursor.advance().unwrap();
        cursor.select(day(2026, 8, 26));
        let window = cursor.current_window();
        assert_eq!(window.previous(), Some(&day(2026, 8, 25)));
        assert_eq!(window.next(), Some(&day(2026, 8, 27)));
    }
}
