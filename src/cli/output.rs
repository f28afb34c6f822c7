use crate::base;

/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq, Eq)]
pub enum Output {
    Str(String),
    Barchart(base::BarchartConfig),
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Str(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::Barchart(config) => {
                if config.entries.is_empty() {
                    writeln!(f, "No records.")
                } else {
                    write!(f, "{}", config.to_barchart())
                }
            }
        }
    }
}
