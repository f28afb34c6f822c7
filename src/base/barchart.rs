use crate::base;

pub const MIN_TERM_WIDTH: usize = 60;
const BOUNDING_SPACES_COUNT: usize = 2;

/// One bar of a chart: a left-hand label, the signed magnitude that sizes
/// the bar, and the human-readable value printed after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub label: String,
    pub value: i64,
    pub rendered: String,
}

pub struct Barchart {
    charset: base::Charset,
    entries: Vec<Entry>,
    label_charlen: usize,
    max_abs_val: i64,
    max_barlen: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub term_width: usize,
    pub entries: Vec<Entry>,
}

impl Config {
    pub fn to_barchart(&self) -> Barchart {
        let label_charlen = self
            .entries
            .iter()
            .map(|e| e.label.chars().count())
            .max()
            .unwrap_or_default();
        let rendered_charlen = self
            .entries
            .iter()
            .map(|e| e.rendered.chars().count())
            .max()
            .unwrap_or_default();
        let max_abs_val = self
            .entries
            .iter()
            .map(|e| e.value.abs())
            .max()
            .unwrap_or_default();
        let max_barlen = self.term_width.max(MIN_TERM_WIDTH)
            - label_charlen
            - BOUNDING_SPACES_COUNT
            - 1 // vertical divider just before bar
            - rendered_charlen;

        Barchart {
            charset: self.charset.clone(),
            entries: self.entries.clone(),
            label_charlen,
            max_abs_val,
            max_barlen,
        }
    }
}

impl Barchart {
    fn barlen(&self, value: i64) -> usize {
        if self.max_abs_val == 0 {
            return 0;
        }
        let x = (value.abs() as f64) / (self.max_abs_val as f64) * (self.max_barlen as f64);
        self.max_barlen.min(x.round() as usize)
    }

    fn draw(&self, w: &mut impl std::fmt::Write, entry: &Entry) -> std::fmt::Result {
        write!(
            w,
            "{:>width$} {}",
            entry.label,
            self.charset.chart_axis,
            width = self.label_charlen
        )?;
        let barlen = self.barlen(entry.value);
        if barlen > 0 {
            let c = if entry.value >= 0 {
                self.charset.chart_bar_pos
            } else {
                self.charset.chart_bar_neg
            };
            let mut bars = c.to_string().repeat(barlen);
            if self.charset.color {
                bars = if entry.value >= 0 {
                    colored::Colorize::green(bars.as_str()).to_string()
                } else {
                    colored::Colorize::red(bars.as_str()).to_string()
                };
            }
            w.write_str(&bars)?;
            w.write_char(' ')?;
        }
        writeln!(w, "{}", entry.rendered)?;
        Ok(())
    }
}

impl std::fmt::Display for Barchart {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for entry in &self.entries {
            self.draw(f, entry)?;
        }
        Ok(())
    }
}
