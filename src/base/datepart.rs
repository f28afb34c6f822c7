/// Calendar resolution used by interval shorthands and subinterval
/// iteration.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Datepart {
    Year,
    Month,
    Day,
}
