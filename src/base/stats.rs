use crate::base;
use crate::base::Activity;
use crate::base::Expense;

/// Number of entries reported by the top-earning-days ranking.
pub const TOP_DAYS: usize = 5;

/// Weekday names indexed from Sunday, matching [`base::Date::weekday_from_sunday`].
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Domingo",
    "Lunes",
    "Martes",
    "Miércoles",
    "Jueves",
    "Viernes",
    "Sábado",
];

/// Zero-guarded division. Every displayed ratio in the application goes
/// through here, so an empty period yields 0 instead of NaN or infinity.
pub fn ratio(num: f64, den: f64) -> f64 {
    if den == 0.0 { 0.0 } else { num / den }
}

/// Period-wide sums. The ratio metrics derived from them are methods so
/// that every call site shares the same zero guards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub earned: base::Cents,
    pub spent: base::Cents,
    pub hours: base::Hours,
    pub activity_count: usize,
    pub expense_count: usize,
}

impl Totals {
    pub fn compute(activities: &[Activity], expenses: &[Expense]) -> Self {
        Self {
            earned: activities.iter().map(Activity::earned).sum(),
            spent: expenses.iter().map(Expense::amount).sum(),
            hours: activities.iter().map(Activity::hours).sum(),
            activity_count: activities.len(),
            expense_count: expenses.len(),
        }
    }

    pub fn net(&self) -> base::Cents {
        self.earned - self.spent
    }

    /// Earnings per worked hour, in currency units.
    pub fn per_hour(&self) -> f64 {
        ratio(self.earned.to_units(), self.hours.to_decimal())
    }

    /// Net balance as a percentage of gross earnings.
    pub fn profit_pct(&self) -> f64 {
        ratio(self.net().to_units(), self.earned.to_units()) * 100.0
    }

    /// Currency units spent per unit earned.
    pub fn spent_per_earned(&self) -> f64 {
        ratio(self.spent.to_units(), self.earned.to_units())
    }

    /// Mean worked hours per recorded activity, rounded to the minute.
    pub fn avg_hours_per_activity(&self) -> base::Hours {
        let minutes = ratio(self.hours.minutes() as f64, self.activity_count as f64);
        base::Hours::from_minutes(minutes.round() as u32)
    }
}

/// One group of the per-category expense breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryLine {
    pub category: base::Category,
    pub amount: base::Cents,
    pub count: usize,
}

impl CategoryLine {
    /// This group's share of `total`, as a percentage.
    pub fn share(&self, total: base::Cents) -> f64 {
        ratio(self.amount.to_units(), total.to_units()) * 100.0
    }
}

/// Groups expenses by category and orders the groups by descending amount.
/// Categories without expenses are omitted. Ties keep declaration order.
pub fn category_breakdown(expenses: &[Expense]) -> Vec<CategoryLine> {
    let mut m = std::collections::BTreeMap::<base::Category, (base::Cents, usize)>::new();
    for e in expenses {
        let entry = m.entry(e.category()).or_default();
        entry.0 += e.amount();
        entry.1 += 1;
    }
    let mut lines = m
        .into_iter()
        .map(|(category, (amount, count))| CategoryLine {
            category,
            amount,
            count,
        })
        .collect::<Vec<_>>();
    lines.sort_by(|a, b| b.amount.cmp(&a.amount));
    lines
}

/// One calendar day's aggregated figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayLine {
    pub date: base::Date,
    pub earned: base::Cents,
    pub spent: base::Cents,
    pub hours: base::Hours,
}

impl DayLine {
    pub fn balance(&self) -> base::Cents {
        self.earned - self.spent
    }

    pub fn per_hour(&self) -> f64 {
        ratio(self.earned.to_units(), self.hours.to_decimal())
    }

    /// Balance as a percentage of the day's earnings.
    pub fn efficiency(&self) -> f64 {
        ratio(self.balance().to_units(), self.earned.to_units()) * 100.0
    }
}

fn day_lines<F>(activities: &[Activity], expenses: &[Expense], keep: F) -> Vec<DayLine>
where
    F: Fn(&DayLine) -> bool,
{
    let empty = |date| DayLine {
        date,
        earned: base::Cents(0),
        spent: base::Cents(0),
        hours: base::Hours::from_minutes(0),
    };
    let mut m = std::collections::BTreeMap::<base::Date, DayLine>::new();
    for a in activities {
        let line = m.entry(a.date()).or_insert_with(|| empty(a.date()));
        line.earned += a.earned();
        line.hours += a.hours();
    }
    for e in expenses {
        let line = m.entry(e.date()).or_insert_with(|| empty(e.date()));
        line.spent += e.amount();
    }
    m.into_values().filter(|line| keep(line)).collect()
}

/// Pairs each worked day's earnings against the expenses dated the same
/// day, ascending by date. Days without activity are skipped even when
/// they carry expenses.
pub fn daily_balance(activities: &[Activity], expenses: &[Expense]) -> Vec<DayLine> {
    let worked = activities
        .iter()
        .map(Activity::date)
        .collect::<std::collections::BTreeSet<_>>();
    day_lines(activities, expenses, |line| worked.contains(&line.date))
}

/// Aggregates every day carrying an activity or an expense, ascending by
/// date. This is the daily performance table of the report.
pub fn daily_analysis(activities: &[Activity], expenses: &[Expense]) -> Vec<DayLine> {
    day_lines(activities, expenses, |_| true)
}

/// Sums worked hours per ISO week. Keys are the Monday of each week,
/// ascending.
pub fn weekly_hours(activities: &[Activity]) -> Vec<(base::Date, base::Hours)> {
    let mut m = std::collections::BTreeMap::<base::Date, base::Hours>::new();
    for a in activities {
        *m.entry(a.date().monday_of_week()).or_default() += a.hours();
    }
    m.into_iter().collect()
}

/// One weekday's bucket of the weekday performance ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekdayLine {
    /// Day of week counted from Sunday, 0..=6.
    pub weekday: u8,
    /// Distinct worked dates falling on this weekday.
    pub days: usize,
    pub earned: base::Cents,
    pub hours: base::Hours,
}

impl WeekdayLine {
    pub fn name(&self) -> &'static str {
        WEEKDAY_NAMES[usize::from(self.weekday)]
    }

    /// Mean earnings per worked day, in currency units.
    pub fn avg_per_day(&self) -> f64 {
        ratio(self.earned.to_units(), self.days as f64)
    }

    pub fn hourly_rate(&self) -> f64 {
        ratio(self.earned.to_units(), self.hours.to_decimal())
    }
}

/// Buckets activities by day of week and ranks the buckets by descending
/// average earnings per worked day. The first entry is the best weekday.
/// Weekdays with no activity are omitted.
pub fn weekday_performance(activities: &[Activity]) -> Vec<WeekdayLine> {
    let mut buckets: [WeekdayLine; 7] = Default::default();
    let mut dates: [std::collections::BTreeSet<base::Date>; 7] = Default::default();
    for a in activities {
        let wd = a.date().weekday_from_sunday();
        let bucket = &mut buckets[usize::from(wd)];
        bucket.weekday = wd;
        bucket.earned += a.earned();
        bucket.hours += a.hours();
        dates[usize::from(wd)].insert(a.date());
    }
    for (bucket, dates) in buckets.iter_mut().zip(&dates) {
        bucket.days = dates.len();
    }
    let mut lines = buckets
        .into_iter()
        .filter(|line| line.days > 0)
        .collect::<Vec<_>>();
    lines.sort_by(|a, b| b.avg_per_day().total_cmp(&a.avg_per_day()));
    lines
}

/// The five highest-earning activity records, descending by earnings.
pub fn top_days(activities: &[Activity]) -> Vec<Activity> {
    let mut sorted = activities.to_vec();
    sorted.sort_by(|a, b| b.earned().cmp(&a.earned()));
    sorted.truncate(TOP_DAYS);
    sorted
}

/// Summary of fuel ("Nafta") expenses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FuelStats {
    pub total: base::Cents,
    pub count: usize,
    /// Mean days between fill-ups, rounded. 0 with fewer than two fill-ups.
    pub avg_days_between: i64,
}

impl FuelStats {
    /// Mean amount per fill-up, in currency units.
    pub fn avg_per_fill(&self) -> f64 {
        ratio(self.total.to_units(), self.count as f64)
    }

    /// Fuel spending as a percentage of `earned`.
    pub fn share_of_earnings(&self, earned: base::Cents) -> f64 {
        ratio(self.total.to_units(), earned.to_units()) * 100.0
    }
}

pub fn fuel_analysis(expenses: &[Expense]) -> FuelStats {
    let mut stats = FuelStats::default();
    let mut first = base::Date::MAX;
    let mut last = base::Date::MIN;
    for e in expenses {
        if e.category() != base::Category::Nafta {
            continue;
        }
        stats.total += e.amount();
        stats.count += 1;
        first = first.min(e.date());
        last = last.max(e.date());
    }
    if stats.count >= 2 {
        let span = first.days_until(last) as f64;
        stats.avg_days_between = ratio(span, (stats.count - 1) as f64).round() as i64;
    }
    stats
}

/// Length of the longest run of calendar-consecutive worked dates.
/// Returns 0 with no activities and 1 with a single worked date.
pub fn longest_streak(activities: &[Activity]) -> usize {
    let dates = activities
        .iter()
        .map(Activity::date)
        .collect::<std::collections::BTreeSet<_>>();
    let mut best = 0;
    let mut current = 0;
    let mut prev: Option<base::Date> = None;
    for dt in dates {
        current = match prev {
            Some(p) if p.days_until(dt) == 1 => current + 1,
            _ => 1,
        };
        best = best.max(current);
        prev = Some(dt);
    }
    best
}

/// The smallest interval covering every record date, or `Interval::EMPTY`
/// if there are none.
pub fn spanned_interval(activities: &[Activity], expenses: &[Expense]) -> base::Interval {
    let dates = || {
        activities
            .iter()
            .map(Activity::date)
            .chain(expenses.iter().map(Expense::date))
    };
    match (dates().min(), dates().max()) {
        (Some(start), Some(end)) => base::Interval { start, end },
        _ => base::Interval::EMPTY,
    }
}

/// Percentage of calendar days in `interval` with at least one activity.
pub fn work_frequency(activities: &[Activity], interval: base::Interval) -> f64 {
    let worked = activities
        .iter()
        .map(Activity::date)
        .filter(|&dt| interval.contains(dt))
        .collect::<std::collections::BTreeSet<_>>();
    ratio(worked.len() as f64, interval.days() as f64) * 100.0
}
