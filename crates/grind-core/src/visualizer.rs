//! Completion statistics for a plan.
//!
//! All calendar arithmetic (daily buckets, the streak and the history window)
//! happens in a single time zone, the system local zone unless overridden
//! with [`ProgressVisualizer::with_time_zone`]. A completion at 23:30 local
//! time counts for that local day even if it is already the next day in UTC.

use std::collections::BTreeMap;

use jiff::{civil::Date, tz::TimeZone, Span, Timestamp};

use crate::models::Plan;

/// Longest history the report shows.
pub const MAX_HISTORY_DAYS: usize = 30;

/// Width of the progress bar in the report.
pub const PROGRESS_BAR_WIDTH: usize = 30;

const FILLED: char = '█';
const EMPTY: char = '░';
const IDLE_DAY: char = '·';

/// Read-only statistics over a plan snapshot.
#[derive(Debug)]
pub struct ProgressVisualizer<'a> {
    plan: &'a Plan,
    time_zone: TimeZone,
    today: Date,
    by_day: BTreeMap<Date, usize>,
}

impl<'a> ProgressVisualizer<'a> {
    /// Creates a visualizer bucketing days in the system time zone.
    pub fn new(plan: &'a Plan) -> Self {
        Self::with_time_zone(plan, TimeZone::system())
    }

    /// Creates a visualizer bucketing days in `time_zone`.
    pub fn with_time_zone(plan: &'a Plan, time_zone: TimeZone) -> Self {
        let today = Timestamp::now().to_zoned(time_zone.clone()).date();

        let mut by_day = BTreeMap::new();
        for completed_at in plan
            .questions
            .iter()
            .filter(|q| q.completed)
            .filter_map(|q| q.completed_at)
        {
            let day = completed_at.to_zoned(time_zone.clone()).date();
            *by_day.entry(day).or_insert(0) += 1;
        }

        Self {
            plan,
            time_zone,
            today,
            by_day,
        }
    }

    /// Pins the date treated as "today".
    pub fn with_today(mut self, today: Date) -> Self {
        self.today = today;
        self
    }

    /// Fraction of completed questions, `0.0` for an empty plan.
    pub fn completion_ratio(&self) -> f64 {
        let total = self.plan.total_count();
        if total == 0 {
            return 0.0;
        }
        self.plan.completed_count() as f64 / total as f64
    }

    /// A `width`-cell bar with `floor(width * ratio)` filled cells.
    pub fn progress_bar(&self, width: usize) -> String {
        let total = self.plan.total_count();
        let filled = if total == 0 {
            0
        } else {
            width * self.plan.completed_count() / total
        };

        let mut bar = String::with_capacity(width * FILLED.len_utf8());
        bar.extend(std::iter::repeat(FILLED).take(filled));
        bar.extend(std::iter::repeat(EMPTY).take(width - filled));
        bar
    }

    /// Completed questions per calendar day.
    ///
    /// Questions without a completion time are left out.
    pub fn completions_by_day(&self) -> &BTreeMap<Date, usize> {
        &self.by_day
    }

    /// Consecutive days, ending today, with at least one completion.
    ///
    /// Zero when nothing was completed today, whatever happened yesterday.
    pub fn current_streak(&self) -> usize {
        let mut streak = 0;
        let mut day = self.today;
        while self.by_day.get(&day).is_some_and(|count| *count > 0) {
            streak += 1;
            day = match day.yesterday() {
                Ok(previous) => previous,
                Err(_) => break,
            };
        }
        streak
    }

    /// Number of days the history covers: `days_window`, capped at
    /// [`MAX_HISTORY_DAYS`] and at the days elapsed since the plan started
    /// (today included). Always at least one.
    pub fn history_window(&self, days_window: usize) -> usize {
        let started = self.plan.started_at.to_zoned(self.time_zone.clone()).date();
        let elapsed = started
            .until(self.today)
            .map(|span| span.get_days())
            .unwrap_or(0);
        let since_start = usize::try_from(elapsed).unwrap_or(0) + 1;

        days_window.min(MAX_HISTORY_DAYS).min(since_start).max(1)
    }

    /// Day-by-day bar chart of the last `days` days, oldest first.
    pub fn render_history(&self, days: usize) -> String {
        if self.by_day.is_empty() {
            return "No completions yet!".to_string();
        }

        let mut lines = Vec::with_capacity(days);
        for offset in (0..days as i64).rev() {
            let Ok(date) = self.today.checked_sub(Span::new().days(offset)) else {
                continue;
            };
            let count = self.by_day.get(&date).copied().unwrap_or(0);

            let bar = if count > 0 {
                FILLED.to_string().repeat(count)
            } else {
                IDLE_DAY.to_string()
            };
            let label = if offset == 0 {
                "Today".to_string()
            } else if offset % 3 == 0 {
                date.strftime("%b %d").to_string()
            } else {
                String::new()
            };
            let count_suffix = if count > 0 {
                format!(" ({count})")
            } else {
                String::new()
            };

            lines.push(format!("  {label:>8} {bar}{count_suffix}"));
        }
        lines.join("\n")
    }

    /// Full statistics report with at most `days_window` days of history.
    pub fn render(&self, days_window: usize) -> String {
        let total = self.plan.total_count();
        let completed = self.plan.completed_count();
        let window = self.history_window(days_window);

        [
            format!("Completion of `{}` stats:", self.plan.name),
            format!(
                "Progress: [{}] {completed}/{total} ({:.1}%)",
                self.progress_bar(PROGRESS_BAR_WIDTH),
                self.completion_ratio() * 100.0
            ),
            format!("🔥 Current streak: {} days", self.current_streak()),
            String::new(),
            format!("Last {window} days:"),
            self.render_history(window),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, tz};

    use super::*;
    use crate::models::Question;

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    fn create_test_plan(size: usize, started_at: &str) -> Plan {
        let mut plan = Plan::new(
            "Top Interview 150",
            (1..=size)
                .map(|i| Question::new(i.to_string(), format!("Question {i}")).unwrap())
                .collect(),
        )
        .unwrap();
        plan.started_at = ts(started_at);
        plan
    }

    fn utc(plan: &Plan) -> ProgressVisualizer<'_> {
        ProgressVisualizer::with_time_zone(plan, TimeZone::UTC).with_today(date(2024, 3, 10))
    }

    #[test]
    fn test_completion_ratio_empty_plan() {
        let plan = Plan::new("Empty", Vec::new()).unwrap();
        let vis = ProgressVisualizer::with_time_zone(&plan, TimeZone::UTC);
        assert_eq!(vis.completion_ratio(), 0.0);
        assert_eq!(vis.progress_bar(10), "░".repeat(10));
    }

    #[test]
    fn test_completion_ratio_bounds() {
        let mut plan = create_test_plan(4, "2024-03-01T00:00:00Z");
        assert_eq!(utc(&plan).completion_ratio(), 0.0);

        plan.mark_complete(&["1"], ts("2024-03-10T08:00:00Z"));
        assert_eq!(utc(&plan).completion_ratio(), 0.25);

        plan.mark_complete(&["2", "3", "4"], ts("2024-03-10T08:00:00Z"));
        assert_eq!(utc(&plan).completion_ratio(), 1.0);
    }

    #[test]
    fn test_progress_bar_half() {
        let mut plan = create_test_plan(10, "2024-03-01T00:00:00Z");
        plan.mark_complete(&["1", "2", "3", "4", "5"], ts("2024-03-10T08:00:00Z"));

        let bar = utc(&plan).progress_bar(30);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 15);
        assert_eq!(bar.chars().filter(|c| *c == '░').count(), 15);
        assert!(bar.starts_with('█'));
    }

    #[test]
    fn test_progress_bar_rounds_down() {
        let mut plan = create_test_plan(3, "2024-03-01T00:00:00Z");
        plan.mark_complete(&["1"], ts("2024-03-10T08:00:00Z"));

        // 10 * 1/3 = 3.33 -> 3 filled cells
        let bar = utc(&plan).progress_bar(10);
        assert_eq!(bar, format!("{}{}", "█".repeat(3), "░".repeat(7)));
    }

    #[test]
    fn test_completions_by_day_skips_missing_timestamps() {
        let mut plan = create_test_plan(5, "2024-03-01T00:00:00Z");
        plan.mark_complete(&["1", "2"], ts("2024-03-09T08:00:00Z"));
        plan.mark_complete(&["3"], ts("2024-03-10T08:00:00Z"));
        plan.questions[3].completed = true;

        let vis = utc(&plan);
        let by_day = vis.completions_by_day();
        assert_eq!(by_day.len(), 2);
        assert_eq!(by_day[&date(2024, 3, 9)], 2);
        assert_eq!(by_day[&date(2024, 3, 10)], 1);
    }

    #[test]
    fn test_completions_bucketed_in_given_time_zone() {
        let mut plan = create_test_plan(2, "2024-03-01T00:00:00Z");
        plan.mark_complete(&["1"], ts("2024-03-10T23:30:00Z"));

        let tokyo = ProgressVisualizer::with_time_zone(&plan, TimeZone::fixed(tz::offset(9)));
        assert!(tokyo.completions_by_day().contains_key(&date(2024, 3, 11)));

        let vis = utc(&plan);
        assert!(vis.completions_by_day().contains_key(&date(2024, 3, 10)));
    }

    #[test]
    fn test_streak_counts_today() {
        let mut plan = create_test_plan(10, "2024-03-01T00:00:00Z");
        plan.mark_complete(&["1", "2", "3"], ts("2024-03-10T08:00:00Z"));
        assert_eq!(utc(&plan).current_streak(), 1);
    }

    #[test]
    fn test_streak_requires_today() {
        let mut plan = create_test_plan(10, "2024-03-01T00:00:00Z");
        plan.mark_complete(&["1", "2"], ts("2024-03-09T08:00:00Z"));
        plan.mark_complete(&["3"], ts("2024-03-08T08:00:00Z"));
        assert_eq!(utc(&plan).current_streak(), 0);
    }

    #[test]
    fn test_streak_stops_at_gap() {
        let mut plan = create_test_plan(10, "2024-03-01T00:00:00Z");
        plan.mark_complete(&["1"], ts("2024-03-10T08:00:00Z"));
        plan.mark_complete(&["2"], ts("2024-03-09T21:00:00Z"));
        plan.mark_complete(&["3"], ts("2024-03-08T01:00:00Z"));
        plan.mark_complete(&["4"], ts("2024-03-06T01:00:00Z"));
        assert_eq!(utc(&plan).current_streak(), 3);
    }

    #[test]
    fn test_history_window_bounds() {
        let plan = create_test_plan(1, "2024-03-01T12:00:00Z");
        let vis = utc(&plan);
        assert_eq!(vis.history_window(30), 10);
        assert_eq!(vis.history_window(5), 5);

        let old = create_test_plan(1, "2023-01-01T00:00:00Z");
        assert_eq!(utc(&old).history_window(90), MAX_HISTORY_DAYS);

        let fresh = create_test_plan(1, "2024-03-10T07:00:00Z");
        assert_eq!(utc(&fresh).history_window(30), 1);

        let future = create_test_plan(1, "2024-04-01T00:00:00Z");
        assert_eq!(utc(&future).history_window(30), 1);
    }

    #[test]
    fn test_render_history_without_completions() {
        let plan = create_test_plan(3, "2024-03-01T00:00:00Z");
        assert_eq!(utc(&plan).render_history(7), "No completions yet!");
    }

    #[test]
    fn test_render_history_lines() {
        let mut plan = create_test_plan(5, "2024-03-01T00:00:00Z");
        plan.mark_complete(&["1", "2"], ts("2024-03-10T08:00:00Z"));
        plan.mark_complete(&["3"], ts("2024-03-07T08:00:00Z"));

        let history = utc(&plan).render_history(4);
        let lines: Vec<&str> = history.lines().collect();
        assert_eq!(
            lines,
            vec![
                "    Mar 07 █ (1)",
                "           ·",
                "           ·",
                "     Today ██ (2)",
            ]
        );
    }

    #[test]
    fn test_render_report() {
        let mut plan = create_test_plan(10, "2024-03-08T09:00:00Z");
        plan.mark_complete(&["1", "2", "3"], ts("2024-03-10T08:00:00Z"));

        let report = utc(&plan).render(30);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "Completion of `Top Interview 150` stats:");
        assert_eq!(
            lines[1],
            format!("Progress: [{}{}] 3/10 (30.0%)", "█".repeat(9), "░".repeat(21))
        );
        assert_eq!(lines[2], "🔥 Current streak: 1 days");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "Last 3 days:");
        assert_eq!(lines.len(), 8);
        assert!(lines[7].contains("Today ███ (3)"));
    }

    #[test]
    fn test_render_report_percentage_one_decimal() {
        let mut plan = create_test_plan(3, "2024-03-01T00:00:00Z");
        plan.mark_complete(&["1"], ts("2024-03-10T08:00:00Z"));
        assert!(utc(&plan).render(30).contains("1/3 (33.3%)"));
    }
}
