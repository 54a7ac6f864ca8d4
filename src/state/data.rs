/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the database layer and the UI layer.

/// Number of columns shown in the table view
pub const COLUMN_COUNT: usize = 7;

/// Column names in the order used everywhere (table, form, database)
pub const COLUMNS: [&str; COLUMN_COUNT] = [
    "number",
    "name",
    "category",
    "description",
    "weight",
    "height",
    "image_path",
];

/// A single Pokémon in the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Pokédex number, user-supplied primary key
    pub number: i64,
    pub name: String,
    /// Free-form type, e.g. "Grass" or "Grass/Poison"
    pub category: String,
    pub description: String,
    /// Weight in kg (None when not filled in)
    pub weight: Option<f64>,
    /// Height in m (None when not filled in)
    pub height: Option<f64>,
    /// Path to a picture on disk. Rows written before the image
    /// column existed have no value here.
    pub image_path: Option<String>,
}

impl Record {
    /// Convert to the display form used by the table view.
    /// Missing values become empty strings, never "None".
    pub fn to_row(&self) -> RecordRow {
        RecordRow {
            number: self.number,
            cells: [
                self.number.to_string(),
                self.name.clone(),
                self.category.clone(),
                self.description.clone(),
                display_float(self.weight),
                display_float(self.height),
                self.image_path.clone().unwrap_or_default(),
            ],
        }
    }
}

/// One row of the table view, as cached by the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct RecordRow {
    pub number: i64,
    /// Display values in `COLUMNS` order
    pub cells: [String; COLUMN_COUNT],
}

impl RecordRow {
    pub fn image_path(&self) -> &str {
        &self.cells[6]
    }
}

/// Raw form values exactly as the user typed them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordInput {
    pub number: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub weight: String,
    pub height: String,
    pub image_path: String,
}

/// Parse a float, returning None for empty or non-numeric text
pub fn parse_float_or_none(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    value.parse().ok()
}

fn display_float(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_float_or_none() {
        assert_eq!(parse_float_or_none("6.9"), Some(6.9));
        assert_eq!(parse_float_or_none("  0.7 "), Some(0.7));
        assert_eq!(parse_float_or_none("12"), Some(12.0));
        assert_eq!(parse_float_or_none(""), None);
        assert_eq!(parse_float_or_none("   "), None);
        assert_eq!(parse_float_or_none("heavy"), None);
    }

    #[test]
    fn test_row_uses_empty_strings_for_missing_values() {
        let record = Record {
            number: 25,
            name: "Pikachu".to_string(),
            category: "Electric".to_string(),
            description: String::new(),
            weight: None,
            height: Some(0.4),
            image_path: None,
        };

        let row = record.to_row();

        assert_eq!(row.number, 25);
        assert_eq!(
            row.cells,
            ["25", "Pikachu", "Electric", "", "", "0.4", ""].map(String::from)
        );
        assert!(!row.cells.iter().any(|c| c == "None" || c == "null"));
    }
}
