use anyhow::Context;

use crate::base;
use crate::cli;

/// Record a categorized expense
#[derive(clap::Parser)]
pub struct Spend {
    /// Expense date
    date: base::Date,

    /// Expense amount, always stored non-negative
    #[arg(allow_negative_numbers = true)]
    amount: base::Cents,

    /// Expense category, case-insensitive
    ///
    /// One of: Nafta, Comida, Mantenimiento, Peajes, Lavado, Otros.
    category: base::Category,

    /// Optional comments about the expense
    #[arg(short, long, default_value_t, hide_default_value = true)]
    note: String,
}

impl Spend {
    pub fn run(
        &self,
        mut expenses: base::Table<base::Expense>,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        let e = base::Expense::new(self.date, self.amount, self.category, self.note.clone());
        let line = cli::util::expense_line(&e);
        expenses.insert(e);
        fs.write(&expenses).with_context(|| {
            format!(
                "failed to write '{}'",
                fs.path::<base::Table<base::Expense>>().display()
            )
        })?;
        Ok(cli::Output::Str(line))
    }
}
