use anyhow::Context;

use crate::base;
use crate::cli;

/// Record a day's earnings and hours
#[derive(clap::Parser)]
pub struct Work {
    /// Activity date
    date: base::Date,

    /// Money earned, always stored non-negative
    #[arg(allow_negative_numbers = true)]
    earned: base::Cents,

    /// Whole hours worked, capped at 23
    #[arg(short = 'H', long, default_value_t = 0)]
    hours: u32,

    /// Additional minutes worked, capped at 60
    #[arg(short = 'M', long, default_value_t = 0)]
    minutes: u32,

    /// Optional comments about the day
    #[arg(short, long, default_value_t, hide_default_value = true)]
    note: String,
}

impl Work {
    pub fn run(
        &self,
        mut activities: base::Table<base::Activity>,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        let (hours, adjusted) = base::Hours::from_parts_clamped(self.hours, self.minutes);
        let a = base::Activity::new(self.date, self.earned, hours, self.note.clone());
        let line = cli::util::activity_line(&a);
        activities.insert(a);
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
        Ok(cli::Output::Str(out))
    }
}
