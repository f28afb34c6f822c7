use crate::base;
use crate::base::Activity;
use crate::base::Expense;
use crate::base::stats;

/// One logical sheet of the report. Sheet names and column ordering are
/// the external contract for anyone consuming the export programmatically;
/// column widths are presentation only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: &'static str,
    pub widths: &'static [u16],
    pub rows: Vec<Vec<String>>,
}

/// The four-sheet financial report over a filtered period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub sheets: Vec<Sheet>,
}

/// Renders a monetary quantity with a currency sign and a leading minus
/// for negative balances.
fn money(c: base::Cents) -> String {
    if c.is_negative() {
        format!("-${}", c.abs())
    } else {
        format!("${}", c)
    }
}

/// Renders a currency-unit ratio, rounded to the cent.
fn money_units(v: f64) -> String {
    money(base::Cents((v * 100.0).round() as i64))
}

fn pct(v: f64) -> String {
    format!("{:.1}%", v)
}

/// Renders an interval bound, empty when unbounded.
fn bound(dt: base::Date, unbounded: base::Date) -> String {
    if dt == unbounded {
        String::new()
    } else {
        dt.dmy()
    }
}

/// The export filename, encoding the interval's bounds as `dd-mm-yyyy`.
/// Unbounded ends render as `inicio` and `fin`.
pub fn filename(interval: base::Interval) -> String {
    let from = if interval.start == base::Date::MIN {
        "inicio".to_string()
    } else {
        interval.start.dmy().replace('/', "-")
    };
    let to = if interval.end == base::Date::MAX {
        "fin".to_string()
    } else {
        interval.end.dmy().replace('/', "-")
    };
    format!("informe-{}-al-{}.xlsx", from, to)
}

/// Builds the report from an already-filtered period. An empty period
/// produces zeroed summary rows rather than failing.
pub fn build(activities: &[Activity], expenses: &[Expense], interval: base::Interval) -> Report {
    let totals = stats::Totals::compute(activities, expenses);
    Report {
        sheets: vec![
            summary_sheet(&totals, interval),
            categories_sheet(expenses, &totals),
            transactions_sheet(activities, expenses, &totals),
            daily_sheet(activities, expenses),
        ],
    }
}

fn summary_sheet(totals: &stats::Totals, interval: base::Interval) -> Sheet {
    let rows = vec![
        vec!["INFORME FINANCIERO".into()],
        vec![],
        vec!["PERÍODO DE ANÁLISIS".into()],
        vec!["Desde:".into(), bound(interval.start, base::Date::MIN)],
        vec!["Hasta:".into(), bound(interval.end, base::Date::MAX)],
        vec!["Generado:".into(), base::Date::today().dmy()],
        vec![],
        vec!["RESUMEN FINANCIERO".into()],
        vec!["Total Ingresos".into(), money(totals.earned)],
        vec!["Total Gastos".into(), money(totals.spent)],
        vec!["Balance Neto".into(), money(totals.net())],
        vec![],
        vec!["MÉTRICAS OPERATIVAS".into()],
        vec!["Horas Trabajadas".into(), totals.hours.to_string()],
        vec![
            "Días Trabajados".into(),
            format!("{} días", totals.activity_count),
        ],
        vec![
            "Promedio Horas/Día".into(),
            totals.avg_hours_per_activity().to_string(),
        ],
        vec![],
        vec!["ANÁLISIS DE RENDIMIENTO".into()],
        vec![
            "Ganancia por Hora".into(),
            format!("{}/h", money_units(totals.per_hour())),
        ],
        vec!["Margen de Ganancia".into(), pct(totals.profit_pct())],
        vec![
            "Gasto por Peso Ganado".into(),
            format!("${:.2}", totals.spent_per_earned()),
        ],
    ];
    Sheet {
        name: "Resumen Ejecutivo",
        widths: &[28, 25],
        rows,
    }
}

fn categories_sheet(expenses: &[Expense], totals: &stats::Totals) -> Sheet {
    let mut rows = vec![
        vec!["ANÁLISIS DE GASTOS POR CATEGORÍA".into()],
        vec![],
        vec![
            "Categoría".into(),
            "Monto Total".into(),
            "% del Total".into(),
            "Cantidad".into(),
        ],
        vec!["".into(); 4],
    ];
    for line in stats::category_breakdown(expenses) {
        rows.push(vec![
            line.category.to_string(),
            money(line.amount),
            pct(line.share(totals.spent)),
            format!("{} reg.", line.count),
        ]);
    }
    rows.push(vec![]);
    rows.push(vec![
        "TOTAL GASTOS".into(),
        money(totals.spent),
        "100.0%".into(),
        format!("{} reg.", totals.expense_count),
    ]);
    Sheet {
        name: "Gastos por Categoría",
        widths: &[20, 18, 12, 12],
        rows,
    }
}

fn transactions_sheet(
    activities: &[Activity],
    expenses: &[Expense],
    totals: &stats::Totals,
) -> Sheet {
    let mut rows = vec![
        vec!["DETALLE COMPLETO DE TRANSACCIONES".into()],
        vec![],
        vec![
            "Fecha".into(),
            "Tipo".into(),
            "Categoría/Detalle".into(),
            "Monto".into(),
            "Horas".into(),
            "Comentario".into(),
        ],
        vec!["".into(); 6],
    ];

    let mut transactions = Vec::with_capacity(activities.len() + expenses.len());
    for a in activities {
        transactions.push((
            a.date(),
            vec![
                a.date().dmy(),
                "INGRESO".into(),
                format!("Trabajo ({})", a.hours()),
                money(a.earned()),
                if a.hours().is_zero() {
                    String::new()
                } else {
                    a.hours().to_string()
                },
                a.note().into(),
            ],
        ));
    }
    for e in expenses {
        transactions.push((
            e.date(),
            vec![
                e.date().dmy(),
                "GASTO".into(),
                e.category().to_string(),
                money(e.amount()),
                String::new(),
                e.note().into(),
            ],
        ));
    }
    // Newest first; same-day entries keep activities ahead of expenses.
    transactions.sort_by(|a, b| b.0.cmp(&a.0));
    rows.extend(transactions.into_iter().map(|(_, row)| row));

    let totals_row = |label: &str, amount: base::Cents| {
        let mut row = vec!["".into(); 6];
        row[0] = label.into();
        row[3] = money(amount);
        row
    };
    rows.push(vec![]);
    rows.push(vec!["TOTALES:".into()]);
    rows.push(totals_row("Ingresos:", totals.earned));
    rows.push(totals_row("Gastos:", totals.spent));
    rows.push(totals_row("Balance:", totals.net()));

    Sheet {
        name: "Detalle Transacciones",
        widths: &[12, 10, 25, 18, 8, 35],
        rows,
    }
}

fn daily_sheet(activities: &[Activity], expenses: &[Expense]) -> Sheet {
    let mut rows = vec![
        vec!["ANÁLISIS DE PERFORMANCE DIARIA".into()],
        vec![],
        vec![
            "Fecha".into(),
            "Ingresos".into(),
            "Gastos".into(),
            "Balance".into(),
            "Horas".into(),
            "$/Hora".into(),
            "Eficiencia".into(),
        ],
        vec!["".into(); 7],
    ];

    let lines = stats::daily_analysis(activities, expenses);
    for line in lines.iter().rev() {
        rows.push(vec![
            line.date.dmy(),
            money(line.earned),
            money(line.spent),
            money(line.balance()),
            line.hours.to_string(),
            money_units(line.per_hour()),
            pct(line.efficiency()),
        ]);
    }

    let days = lines.len() as f64;
    let earned = lines.iter().map(|l| l.earned).sum::<base::Cents>();
    let spent = lines.iter().map(|l| l.spent).sum::<base::Cents>();
    let minutes = lines.iter().map(|l| l.hours.minutes()).sum::<u32>();
    let avg_hours =
        base::Hours::from_minutes(stats::ratio(minutes as f64, days).round() as u32);
    rows.push(vec![]);
    rows.push(vec!["PROMEDIOS DIARIOS:".into()]);
    rows.push(vec![
        "Promedio Ingresos:".into(),
        money_units(stats::ratio(earned.to_units(), days)),
    ]);
    rows.push(vec![
        "Promedio Gastos:".into(),
        money_units(stats::ratio(spent.to_units(), days)),
    ]);
    rows.push(vec!["Promedio Horas:".into(), avg_hours.to_string()]);

    Sheet {
        name: "Análisis Diario",
        widths: &[12, 18, 18, 18, 10, 18, 12],
        rows,
    }
}
