use crate::base;
use crate::base::stats;
use crate::cli;

/// View period totals
#[derive(clap::Parser)]
pub struct Sum {
    #[arg(
        default_value = ":",
        help = cli::sharedopts::INTERVAL_HELP,
        long_help = cli::sharedopts::INTERVAL_HELP_LONG,
    )]
    interval: base::Interval,
}

impl Sum {
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
        let totals = stats::Totals::compute(&activities, &expenses);

        let mut out = String::new();
        out.push_str(&format!("Ingresos: {}\n", cli::util::money(totals.earned)));
        out.push_str(&format!("Gastos: {}\n", cli::util::money(totals.spent)));
        out.push_str(&format!("Balance: {}\n", cli::util::money(totals.net())));
        out.push_str(&format!(
            "Horas: {} ({} registros)\n",
            totals.hours, totals.activity_count
        ));
        out.push_str(&format!(
            "Ganancia por hora: {}/h\n",
            cli::util::money(base::Cents((totals.per_hour() * 100.0).round() as i64))
        ));
        out.push_str(&format!(
            "Margen de ganancia: {:.1}%",
            totals.profit_pct()
        ));

        let breakdown = stats::category_breakdown(&expenses);
        if !breakdown.is_empty() {
            out.push_str("\n\nGastos por categoría:");
            for line in &breakdown {
                out.push_str(&format!(
                    "\n  {}: {} ({:.1}%, {} reg.)",
                    line.category,
                    cli::util::money(line.amount),
                    line.share(totals.spent),
                    line.count,
                ));
            }
        }
        Ok(cli::Output::Str(out))
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    const ACTIVITIES: &str = r#"
        {"i":1,"d":"2024-01-01","e":10000,"h":300}
        {"i":3,"d":"2024-02-05","e":8000,"h":240}
    "#;
    const EXPENSES: &str = r#"
        {"i":2,"d":"2024-01-01","a":2000,"c":"Nafta"}
    "#;

    cli::testing::generate_testcases![
        (
            everything,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "sum"],
                    res: cli::testing::ResultMatcher::OkExact(cli::Output::Str(
                        indoc!(
                            "
                            Ingresos: $180.00
                            Gastos: $20.00
                            Balance: $160.00
                            Horas: 9h (2 registros)
                            Ganancia por hora: $20.00/h
                            Margen de ganancia: 88.9%

                            Gastos por categoría:
                              Nafta: $20.00 (100.0%, 1 reg.)"
                        )
                        .into()
                    )),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config("{}")
                    .with_activities(ACTIVITIES)
                    .with_expenses(EXPENSES),
            }
        ),
        (
            empty_interval_is_zero_guarded,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "sum", "2023-01-01:2023-12-31"],
                    res: cli::testing::ResultMatcher::OkExact(cli::Output::Str(
                        indoc!(
                            "
                            Ingresos: $0.00
                            Gastos: $0.00
                            Balance: $0.00
                            Horas: 0h (0 registros)
                            Ganancia por hora: $0.00/h
                            Margen de ganancia: 0.0%"
                        )
                        .into()
                    )),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config("{}")
                    .with_activities(ACTIVITIES)
                    .with_expenses(EXPENSES),
            }
        ),
        (
            single_day,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "sum", "2024-01-01"],
                    res: cli::testing::ResultMatcher::OkStrGlob("*balance: $80.00*"),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config("{}")
                    .with_activities(ACTIVITIES)
                    .with_expenses(EXPENSES),
            }
        ),
    ];
}
