use anyhow::Context;

use crate::base;
use crate::cli;

/// Remove a record by id
#[derive(clap::Parser)]
pub struct Rm {
    /// Id of the record to remove
    id: base::Id,

    /// Execute the removal instead of displaying dry run changes
    #[arg(long)]
    confirm: bool,
}

impl Rm {
    pub fn run(
        self,
        mut activities: base::Table<base::Activity>,
        mut expenses: base::Table<base::Expense>,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        let line = if let Some(a) = activities.get(self.id) {
            let line = cli::util::activity_line(a);
            if self.confirm {
                activities.remove(self.id);
                fs.write(&activities).with_context(|| {
                    format!(
                        "failed to write '{}'",
                        fs.path::<base::Table<base::Activity>>().display()
                    )
                })?;
            }
            line
        } else if let Some(e) = expenses.get(self.id) {
            let line = cli::util::expense_line(e);
            if self.confirm {
                expenses.remove(self.id);
                fs.write(&expenses).with_context(|| {
                    format!(
                        "failed to write '{}'",
                        fs.path::<base::Table<base::Expense>>().display()
                    )
                })?;
            }
            line
        } else {
            anyhow::bail!("nonexistent record")
        };

        Ok(cli::Output::Str(if self.confirm {
            format!("Removed: {}", line)
        } else {
            format!("Would remove: {}\nPass '--confirm' to execute.", line)
        }))
    }
}
