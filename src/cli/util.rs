use crate::base;

pub fn charset_from_config(config: &base::Config) -> base::Charset {
    let mut charset = base::Charset::default();
    if config.use_unicode_symbols {
        charset = charset.with_unicode()
    }
    if config.use_colored_output {
        charset = charset.with_color()
    }
    charset
}

pub fn money(c: base::Cents) -> String {
    if c.is_negative() {
        format!("-${}", c.abs())
    } else {
        format!("${}", c)
    }
}

fn line(date: base::Date, id: base::Id, body: String, note: &str) -> String {
    let mut s = format!("{}  [{}]  {}", date, id, body);
    if !note.is_empty() {
        s.push_str("  ");
        s.push_str(note);
    }
    s
}

pub fn activity_line(a: &base::Activity) -> String {
    line(
        a.date(),
        a.id(),
        format!("INGRESO  {}  {}", money(a.earned()), a.hours()),
        a.note(),
    )
}

pub fn expense_line(e: &base::Expense) -> String {
    line(
        e.date(),
        e.id(),
        format!("GASTO  {}  {}", money(e.amount()), e.category()),
        e.note(),
    )
}

/// Renders both record kinds as a single ledger, newest first; same-date
/// records are ordered by descending id, so the latest entry is on top.
/// Returns the empty string if there is nothing to show.
pub fn listing(activities: &[base::Activity], expenses: &[base::Expense]) -> String {
    let mut lines = Vec::with_capacity(activities.len() + expenses.len());
    for a in activities {
        lines.push((a.date(), a.id(), activity_line(a)));
    }
    for e in expenses {
        lines.push((e.date(), e.id(), expense_line(e)));
    }
    lines.sort_by(|a, b| (b.0, b.1).cmp(&(a.0, a.1)));
    lines
        .into_iter()
        .map(|(_, _, s)| s + "\n")
        .collect::<String>()
}
