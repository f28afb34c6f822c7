use anyhow::Context;

use crate::base;
use crate::cli;

/// Export a spreadsheet report for a period
#[derive(clap::Parser)]
pub struct Export {
    #[arg(
        default_value = ":",
        help = cli::sharedopts::INTERVAL_HELP,
        long_help = cli::sharedopts::INTERVAL_HELP_LONG,
    )]
    interval: base::Interval,

    /// Output directory [default: the repository directory]
    #[arg(long)]
    dir: Option<std::path::PathBuf>,

    /// Write one CSV file per sheet instead of a single XLSX workbook
    #[arg(long)]
    csv: bool,
}

impl Export {
    pub fn run(
        self,
        activities: &base::Table<base::Activity>,
        expenses: &base::Table<base::Expense>,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        let activities = activities
            .in_interval(self.interval)
            .cloned()
            .collect::<Vec<_>>();
        let expenses = expenses
            .in_interval(self.interval)
            .cloned()
            .collect::<Vec<_>>();
        let report = base::report::build(&activities, &expenses, self.interval);
        let dir = self.dir.unwrap_or_else(|| fs.dir().to_path_buf());

        let mut out = String::new();
        if self.csv {
            let paths = base::csvout::write(&report, &dir)
                .with_context(|| format!("failed to write CSV files to '{}'", dir.display()))?;
            for path in paths {
                out.push_str(&format!("Written: '{}'\n", path.display()));
            }
        } else {
            let path = dir.join(base::report::filename(self.interval));
            base::xlsx::write(&report, &path)
                .with_context(|| format!("failed to write '{}'", path.display()))?;
            out.push_str(&format!("Written: '{}'\n", path.display()));
        }
        Ok(cli::Output::Str(out))
    }
}
