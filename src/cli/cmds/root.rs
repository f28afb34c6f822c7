use anyhow::Context;

use crate::base;
use crate::cli;

/// Earnings and expense tracker for rideshare drivers
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Work(cli::cmds::work::Work),
    Spend(cli::cmds::spend::Spend),
    Edit(cli::cmds::edit::Edit),
    Rm(cli::cmds::rm::Rm),
    View(cli::cmds::view::View),
    Sum(cli::cmds::sum::Sum),
    Stats(cli::cmds::stats::Stats),
    Plot(cli::cmds::plot::Plot),
    Export(cli::cmds::export::Export),
}

impl Root {
    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        if let Commands::Init(cmd) = self.command {
            return cmd.run(fs);
        }

        if !fs.is_repo() {
            anyhow::bail!("not a repository")
        }
        let config = fs
            .read::<base::Config>()
            .with_context(|| format!("failed to read '{}'", fs.path::<base::Config>().display()))?;
        let activities = fs.read::<base::Table<base::Activity>>().with_context(|| {
            format!(
                "failed to read '{}'",
                fs.path::<base::Table<base::Activity>>().display()
            )
        })?;
        let expenses = fs.read::<base::Table<base::Expense>>().with_context(|| {
            format!(
                "failed to read '{}'",
                fs.path::<base::Table<base::Expense>>().display()
            )
        })?;

        match self.command {
            Commands::Init(_) => unreachable!(),
            Commands::Work(cmd) => cmd.run(activities, fs),
            Commands::Spend(cmd) => cmd.run(expenses, fs),
            Commands::Edit(cmd) => cmd.run(activities, expenses, fs),
            Commands::Rm(cmd) => cmd.run(activities, expenses, fs),
            Commands::View(cmd) => cmd.run(&activities, &expenses),
            Commands::Sum(cmd) => cmd.run(&activities, &expenses),
            Commands::Stats(cmd) => cmd.run(&activities, &expenses),
            Commands::Plot(cmd) => cmd.run(&activities, &expenses, &config),
            Commands::Export(cmd) => cmd.run(&activities, &expenses, fs),
        }
    }
}
