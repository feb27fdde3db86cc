//! Column vocabulary for the EDB export.
//! Source labels as they appear in the CSV header, and the labels used after cleaning.

pub const SRC_LOCATION_CODE: &str = "GeoFIPS";
pub const SRC_LOCATION_NAME: &str = "GeoName";
pub const SRC_REGION: &str = "Region";
pub const SRC_DESCRIPTION: &str = "Description";

pub const LOCATION_CODE: &str = "Código Local";
pub const LOCATION_NAME: &str = "Localidade";
pub const REGION: &str = "Região";
pub const DESCRIPTION: &str = "Descrição";
pub const YEAR: &str = "Ano";
pub const VALUE: &str = "Valor";

/// Identifying columns in the source file. A row missing any of them is unusable.
pub const SOURCE_KEYS: [&str; 4] = [
    SRC_LOCATION_CODE,
    SRC_LOCATION_NAME,
    SRC_REGION,
    SRC_DESCRIPTION,
];

/// Identifying columns after renaming, in output order.
pub const KEYS: [&str; 4] = [LOCATION_CODE, LOCATION_NAME, REGION, DESCRIPTION];

/// Source label -> target label.
pub const RENAME_MAP: [(&str, &str); 8] = [
    (SRC_LOCATION_CODE, LOCATION_CODE),
    (SRC_LOCATION_NAME, LOCATION_NAME),
    (SRC_REGION, REGION),
    ("TableName", "Tabela"),
    ("LineCode", "Código de Linha"),
    ("IndustryClassification", "Classificação Industrial"),
    (SRC_DESCRIPTION, DESCRIPTION),
    ("Unit", "Unidade"),
];

/// Look up the target label for a source column, falling back to the source label.
pub fn rename(label: &str) -> &str {
    RENAME_MAP
        .iter()
        .find(|(src, _)| *src == label)
        .map(|(_, dst)| *dst)
        .unwrap_or(label)
}

/// A column holds a year when its name is made only of numeric characters.
pub fn is_year_label(label: &str) -> bool {
    !label.is_empty() && label.chars().all(char::is_numeric)
}
