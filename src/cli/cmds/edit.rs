use anyhow::Context;

use crate::base;
use crate::cli;

/// Edit a record by id
#[derive(clap::Parser)]
pub struct Edit {
    /// Id of the record to edit
    id: base::Id,

    /// New date
    #[arg(long)]
    date: Option<base::Date>,

    /// New monetary amount, always stored non-negative
    #[arg(long, allow_negative_numbers = true)]
    amount: Option<base::Cents>,

    /// New whole hours worked (activities only)
    ///
    /// Together with '--minutes', replaces the stored duration.
    #[arg(long)]
    hours: Option<u32>,

    /// New additional minutes worked (activities only)
    #[arg(long)]
    minutes: Option<u32>,

    /// New category (expenses only)
    #[arg(long)]
    category: Option<base::Category>,

    /// New comment, pass an empty string to clear
    #[arg(long)]
    note: Option<String>,
}

impl Edit {
    pub fn run(
        self,
        mut activities: base::Table<base::Activity>,
        mut expenses: base::Table<base::Expense>,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        if self.date.is_none()
            && self.amount.is_none()
            && self.hours.is_none()
            && self.minutes.is_none()
            && self.category.is_none()
            && self.note.is_none()
        {
            anyhow::bail!("nothing to change")
        }

        if let Some(a) = activities.get_mut(self.id) {
            if self.category.is_some() {
                anyhow::bail!("'--category' only applies to expenses")
            }
            if let Some(date) = self.date {
                a.set_date(date);
            }
            if let Some(amount) = self.amount {
                a.set_earned(amount);
            }
            let mut adjusted = false;
            if self.hours.is_some() || self.minutes.is_some() {
                let (hours, clamped) = base::Hours::from_parts_clamped(
                    self.hours.unwrap_or_default(),
                    self.minutes.unwrap_or_default(),
                );
                a.set_hours(hours);
                adjusted = clamped;
            }
            if let Some(note) = self.note {
                a.set_note(note);
            }
            let line = cli::util::activity_line(a);
            fs.write(&activities).with_context(|| {
                format!(
                    "failed to write '{}'",
                    fs.path::<base::Table<base::Activity>>().display()
                )
            })?;
            let mut out = String::new();
            if adjusted {
                out.push_str("Hours were out of range and have been clamped.\n");
            }
            out.push_str(&line);
            return Ok(cli::Output::Str(out));
        }

        if let Some(e) = expenses.get_mut(self.id) {
            if self.hours.is_some() || self.minutes.is_some() {
                anyhow::bail!("'--hours' and '--minutes' only apply to activities")
            }
            if let Some(date) = self.date {
                e.set_date(date);
            }
            if let Some(amount) = self.amount {
                e.set_amount(amount);
            }
            if let Some(category) = self.category {
                e.set_category(category);
            }
            if let Some(note) = self.note {
                e.set_note(note);
            }
            let line = cli::util::expense_line(e);
            fs.write(&expenses).with_context(|| {
                format!(
                    "failed to write '{}'",
                    fs.path::<base::Table<base::Expense>>().display()
                )
            })?;
            return Ok(cli::Output::Str(line));
        }

        anyhow::bail!("nonexistent record")
    }
}
