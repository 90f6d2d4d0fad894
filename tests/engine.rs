#[cfg(test)]
mod tests {
    use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
    use taskdeck::libs::engine::apply_on;
    use taskdeck::libs::task::{SortOrder, Task, TaskFilter};

    const TODAY: (i32, u32, u32) = (2024, 6, 15);

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(TODAY.0, TODAY.1, TODAY.2).unwrap()
    }

    /// Noon local time on the given day, so the local calendar date of the
    /// instant is stable regardless of the test machine's time zone.
    fn local_noon(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Local.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap().with_timezone(&Utc)
    }

    fn task(id: i64, title: &str) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: None,
            due_date: None,
            is_completed: false,
            category: None,
            tags: vec![],
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::minutes(id),
            updated_at: None,
        }
    }

    fn due(mut t: Task, year: i32, month: u32, day: u32) -> Task {
        t.due_date = Some(local_noon(year, month, day));
        t
    }

    fn completed(mut t: Task) -> Task {
        t.is_completed = true;
        t
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn filter_all_passes_everything() {
        let tasks = vec![task(1, "a"), completed(task(2, "b"))];
        let out = apply_on(&tasks, &TaskFilter::All, None, SortOrder::DateCreated, today());
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn active_and_completed_split_by_completion() {
        let tasks = vec![task(1, "Buy milk"), completed(task(2, "Pay rent"))];

        let active = apply_on(&tasks, &TaskFilter::Active, None, SortOrder::DateCreated, today());
        assert_eq!(titles(&active), vec!["Buy milk"]);

        let done = apply_on(&tasks, &TaskFilter::Completed, None, SortOrder::DateCreated, today());
        assert_eq!(titles(&done), vec!["Pay rent"]);
    }

    #[test]
    fn today_matches_only_the_local_calendar_date() {
        let tasks = vec![
            due(task(1, "due today"), 2024, 6, 15),
            due(task(2, "due tomorrow"), 2024, 6, 16),
            task(3, "no due date"),
        ];
        let out = apply_on(&tasks, &TaskFilter::Today, None, SortOrder::DateCreated, today());
        assert_eq!(titles(&out), vec!["due today"]);
    }

    #[test]
    fn this_week_is_inclusive_on_both_ends() {
        let tasks = vec![
            due(task(1, "today"), 2024, 6, 15),
            due(task(2, "in 7 days"), 2024, 6, 22),
            due(task(3, "in 8 days"), 2024, 6, 23),
            due(task(4, "yesterday"), 2024, 6, 14),
        ];
        let out = apply_on(&tasks, &TaskFilter::ThisWeek, None, SortOrder::DateCreated, today());
        assert_eq!(titles(&out), vec!["today", "in 7 days"]);
    }

    #[test]
    fn this_month_spans_one_calendar_month() {
        let tasks = vec![
            due(task(1, "today"), 2024, 6, 15),
            due(task(2, "in a month"), 2024, 7, 15),
            due(task(3, "past a month"), 2024, 7, 16),
        ];
        let out = apply_on(&tasks, &TaskFilter::ThisMonth, None, SortOrder::DateCreated, today());
        assert_eq!(titles(&out), vec!["today", "in a month"]);
    }

    #[test]
    fn custom_range_is_inclusive_and_requires_a_due_date() {
        let filter = TaskFilter::Custom {
            start: NaiveDate::from_ymd_opt(2024, 6, 10),
            end: NaiveDate::from_ymd_opt(2024, 6, 20),
        };
        let tasks = vec![
            due(task(1, "at start"), 2024, 6, 10),
            due(task(2, "at end"), 2024, 6, 20),
            due(task(3, "outside"), 2024, 6, 21),
            task(4, "no due date"),
        ];
        let out = apply_on(&tasks, &filter, None, SortOrder::DateCreated, today());
        assert_eq!(titles(&out), vec!["at start", "at end"]);
    }

    #[test]
    fn custom_range_without_bounds_passes_everything() {
        let filter = TaskFilter::Custom { start: None, end: None };
        let tasks = vec![due(task(1, "dated"), 2030, 1, 1), task(2, "undated"), completed(task(3, "done"))];
        let out = apply_on(&tasks, &filter, None, SortOrder::DateCreated, today());
        assert_eq!(out.len(), 3);

        // One missing bound behaves the same way.
        let half_open = TaskFilter::Custom {
            start: NaiveDate::from_ymd_opt(2024, 6, 10),
            end: None,
        };
        let out = apply_on(&tasks, &half_open, None, SortOrder::DateCreated, today());
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn category_filter_requires_exact_match() {
        let mut work = task(1, "report");
        work.category = Some("Work".to_string());
        let mut home = task(2, "laundry");
        home.category = Some("Personal".to_string());
        let uncategorized = task(3, "misc");

        let tasks = vec![work, home, uncategorized];
        let out = apply_on(&tasks, &TaskFilter::All, Some("Work"), SortOrder::DateCreated, today());
        assert_eq!(titles(&out), vec!["report"]);

        // Tasks without a category never match a category selection.
        let out = apply_on(&tasks, &TaskFilter::All, Some(""), SortOrder::DateCreated, today());
        assert!(out.is_empty());
    }

    #[test]
    fn due_date_sort_puts_absent_dates_first() {
        let tasks = vec![
            due(task(1, "jan 3"), 2024, 1, 3),
            task(2, "no date"),
            due(task(3, "jan 1"), 2024, 1, 1),
        ];
        let out = apply_on(&tasks, &TaskFilter::All, None, SortOrder::DueDate, today());
        assert_eq!(titles(&out), vec!["no date", "jan 1", "jan 3"]);
    }

    #[test]
    fn modified_sort_puts_never_updated_first() {
        let mut touched = task(1, "touched");
        touched.updated_at = Some(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap());
        let untouched = task(2, "untouched");

        let out = apply_on(&[touched, untouched], &TaskFilter::All, None, SortOrder::DateModified, today());
        assert_eq!(titles(&out), vec!["untouched", "touched"]);
    }

    #[test]
    fn title_sort_is_case_sensitive() {
        let tasks = vec![task(1, "banana"), task(2, "Apple"), task(3, "apple")];
        let out = apply_on(&tasks, &TaskFilter::All, None, SortOrder::Title, today());
        assert_eq!(titles(&out), vec!["Apple", "apple", "banana"]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let stamp = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let mut first = task(1, "first");
        first.created_at = stamp;
        let mut second = task(2, "second");
        second.created_at = stamp;
        let mut third = task(3, "third");
        third.created_at = stamp;

        let out = apply_on(&[first, second, third], &TaskFilter::All, None, SortOrder::DateCreated, today());
        assert_eq!(titles(&out), vec!["first", "second", "third"]);
    }
}
