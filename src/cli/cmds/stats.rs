use crate::base;
use crate::base::stats;
use crate::cli;

/// View work-pattern and fuel statistics
#[derive(clap::Parser)]
pub struct Stats {
    #[arg(
        default_value = ":",
        help = cli::sharedopts::INTERVAL_HELP,
        long_help = cli::sharedopts::INTERVAL_HELP_LONG,
    )]
    interval: base::Interval,
}

impl Stats {
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
        if activities.is_empty() && expenses.is_empty() {
            return Ok(cli::Output::Str("No records.".to_string()));
        }

        let totals = stats::Totals::compute(&activities, &expenses);
        let freq_interval = clamp_to_records(self.interval, &activities, &expenses);
        let worked = activities
            .iter()
            .map(base::Activity::date)
            .filter(|&dt| freq_interval.contains(dt))
            .collect::<std::collections::BTreeSet<_>>();

        let mut out = String::new();
        out.push_str(&format!(
            "Racha más larga: {}\n",
            dias(stats::longest_streak(&activities))
        ));
        out.push_str(&format!(
            "Frecuencia de trabajo: {:.1}% ({} de {})\n",
            stats::work_frequency(&activities, freq_interval),
            worked.len(),
            dias(usize::try_from(freq_interval.days()).unwrap_or(0)),
        ));

        let weekdays = stats::weekday_performance(&activities);
        if !weekdays.is_empty() {
            out.push_str("\nRendimiento por día de la semana:\n");
            for line in &weekdays {
                out.push_str(&format!(
                    "  {}: {}/día, {}/h ({})\n",
                    line.name(),
                    money_units(line.avg_per_day()),
                    money_units(line.hourly_rate()),
                    dias(line.days),
                ));
            }
        }

        let top = stats::top_days(&activities);
        if !top.is_empty() {
            out.push_str("\nMejores días:\n");
            for a in &top {
                out.push_str(&format!(
                    "  {}  {}  {}\n",
                    a.date(),
                    cli::util::money(a.earned()),
                    a.hours(),
                ));
            }
        }

        let fuel = stats::fuel_analysis(&expenses);
        if fuel.count > 0 {
            out.push_str(&format!(
                "\nNafta: {} en {}, {} por carga",
                cli::util::money(fuel.total),
                cargas(fuel.count),
                money_units(fuel.avg_per_fill()),
            ));
            if fuel.avg_days_between > 0 {
                out.push_str(&format!(", cada {} días", fuel.avg_days_between));
            }
            out.push_str(&format!(
                " ({:.1}% de los ingresos)\n",
                fuel.share_of_earnings(totals.earned)
            ));
        }

        Ok(cli::Output::Str(out))
    }
}

/// Replaces unbounded interval ends with the first and last record dates,
/// so the work-frequency denominator stays meaningful for open intervals.
fn clamp_to_records(
    interval: base::Interval,
    activities: &[base::Activity],
    expenses: &[base::Expense],
) -> base::Interval {
    let span = stats::spanned_interval(activities, expenses);
    base::Interval {
        start: if interval.start == base::Date::MIN {
            span.start
        } else {
            interval.start
        },
        end: if interval.end == base::Date::MAX {
            span.end
        } else {
            interval.end
        },
    }
}

fn money_units(units: f64) -> String {
    cli::util::money(base::Cents((units * 100.0).round() as i64))
}

fn dias(n: usize) -> String {
    if n == 1 {
        "1 día".to_string()
    } else {
        format!("{n} días")
    }
}

fn cargas(n: usize) -> String {
    if n == 1 {
        "1 carga".to_string()
    } else {
        format!("{n} cargas")
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    const ACTIVITIES: &str = r#"
        {"i":1,"d":"2024-01-01","e":10000,"h":300}
        {"i":2,"d":"2024-01-02","e":8000,"h":240}
        {"i":3,"d":"2024-01-03","e":6000,"h":240}
        {"i":4,"d":"2024-01-05","e":12000,"h":360}
    "#;
    const EXPENSES: &str = r#"
        {"i":5,"d":"2024-01-01","a":2000,"c":"Nafta"}
        {"i":6,"d":"2024-01-04","a":3000,"c":"Nafta"}
        {"i":7,"d":"2024-01-02","a":750,"c":"Comida"}
    "#;

    cli::testing::generate_testcases![
        (
            everything,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "stats"],
                    res: cli::testing::ResultMatcher::OkExact(cli::Output::Str(
                        indoc!(
                            "
                            Racha más larga: 3 días
                            Frecuencia de trabajo: 80.0% (4 de 5 días)

                            Rendimiento por día de la semana:
                              Viernes: $120.00/día, $20.00/h (1 día)
                              Lunes: $100.00/día, $20.00/h (1 día)
                              Martes: $80.00/día, $20.00/h (1 día)
                              Miércoles: $60.00/día, $15.00/h (1 día)

                            Mejores días:
                              2024-01-05  $120.00  6h
                              2024-01-01  $100.00  5h
                              2024-01-02  $80.00  4h
                              2024-01-03  $60.00  4h

                            Nafta: $50.00 en 2 cargas, $25.00 por carga, cada 3 días (13.9% de los ingresos)
                            "
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
            explicit_interval_bounds_frequency,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "stats", "2024-01-01:2024-01-03"],
                    res: cli::testing::ResultMatcher::OkStrGlob(
                        "Racha más larga: 3 días\n\
                         Frecuencia de trabajo: 100.0% (3 de 3 días)\n*\
                         Nafta: $20.00 en 1 carga, $20.00 por carga (8.3% de los ingresos)\n"
                    ),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config("{}")
                    .with_activities(ACTIVITIES)
                    .with_expenses(EXPENSES),
            }
        ),
        (
            empty_repo,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "stats"],
                    res: cli::testing::ResultMatcher::OkExact(cli::Output::Str(
                        "No records.".into()
                    )),
                }],
                initial_state: cli::testing::StrState::new().with_config("{}"),
            }
        ),
    ];
}
