use crate::base;
use crate::cli;

/// View records
#[derive(clap::Parser)]
pub struct View {
    #[arg(
        default_value = ":",
        help = cli::sharedopts::INTERVAL_HELP,
        long_help = cli::sharedopts::INTERVAL_HELP_LONG,
    )]
    interval: base::Interval,
}

impl View {
    pub fn run(
        self,
        activities: &base::Table<base::Activity>,
        expenses: &base::Table<base::Expense>,
    ) -> anyhow::Result<cli::Output> {
        let activities = activities
            .in_interval(self.interval)
            .cloned()
            .collect::<Vec<_>>();
        let expenses = expenses
            .in_interval(self.interval)
            .cloned()
            .collect::<Vec<_>>();
        let listing = cli::util::listing(&activities, &expenses);
        Ok(if listing.is_empty() {
            cli::Output::Str("No records.".into())
        } else {
            cli::Output::Str(listing)
        })
    }
}
