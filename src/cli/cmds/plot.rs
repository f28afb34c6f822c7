use crate::base;
use crate::base::stats;
use crate::cli;

/// Plot earnings, balance, hours or spending as a bar chart
#[derive(clap::Parser)]
pub struct Plot {
    #[arg(
        help = cli::sharedopts::INTERVAL_HELP,
        long_help = cli::sharedopts::INTERVAL_HELP_LONG,
    )]
    interval: Option<base::Interval>,

    #[command(flatten)]
    mode: Mode,
}

#[derive(clap::Args)]
#[group(required = false, multiple = false)]
struct Mode {
    /// One bar per worked day, sized by earnings [default]
    ///
    /// The default interval is the past 2 weeks
    #[arg(long)]
    earnings: bool,

    /// One bar per worked day, sized by net balance
    ///
    /// The default interval is the past 2 weeks
    #[arg(long)]
    balance: bool,

    /// One bar per week, sized by hours worked
    ///
    /// The default interval is the past 3 months
    #[arg(long)]
    hours: bool,

    /// One bar per expense category, sized by amount spent
    ///
    /// The default interval is all time
    #[arg(long)]
    categories: bool,
}

impl Plot {
    pub fn run(
        self,
        activities: &base::Table<base::Activity>,
        expenses: &base::Table<base::Expense>,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        let interval = self.interval.unwrap_or_else(|| {
            let default = if self.mode.categories {
                ":"
            } else if self.mode.hours {
                "m-3:D"
            } else {
                "d-14:D"
            };
            default
                .parse()
                .expect("value should be convertible to Interval object")
        });
        let activities = activities
            .in_interval(interval)
            .cloned()
            .collect::<Vec<_>>();
        let expenses = expenses
            .in_interval(interval)
            .cloned()
            .collect::<Vec<_>>();

        let entries = if self.mode.categories {
            stats::category_breakdown(&expenses)
                .into_iter()
                .map(|line| base::BarchartEntry {
                    label: line.category.to_string(),
                    value: line.amount.0,
                    rendered: cli::util::money(line.amount),
                })
                .collect()
        } else if self.mode.hours {
            stats::weekly_hours(&activities)
                .into_iter()
                .map(|(monday, hours)| base::BarchartEntry {
                    label: monday.to_string(),
                    value: i64::from(hours.minutes()),
                    rendered: hours.to_string(),
                })
                .collect()
        } else if self.mode.balance {
            stats::daily_balance(&activities, &expenses)
                .into_iter()
                .map(|line| base::BarchartEntry {
                    label: line.date.to_string(),
                    value: line.balance().0,
                    rendered: cli::util::money(line.balance()),
                })
                .collect()
        } else {
            stats::daily_balance(&activities, &expenses)
                .into_iter()
                .map(|line| base::BarchartEntry {
                    label: line.date.to_string(),
                    value: line.earned.0,
                    rendered: cli::util::money(line.earned),
                })
                .collect()
        };

        let chart_config = base::BarchartConfig {
            charset: cli::util::charset_from_config(config),
            term_width: terminal_size::terminal_size()
                .map(|(w, _)| w.0)
                .unwrap_or_default() as usize,
            entries,
        };
        Ok(cli::Output::Barchart(chart_config))
    }
}
