/// Expense categories. A closed set: category-dependent branches (report
/// grouping, fuel analysis) rely on exhaustive matching.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    /// Fuel. The fill-up analysis is keyed on this variant.
    Nafta,
    Comida,
    Mantenimiento,
    Peajes,
    Lavado,
    Otros,
}
