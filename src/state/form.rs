/// Form fields and the cached table view
///
/// The presentation layer owns one `Form`. Handlers mutate it directly;
/// the table cache is replaced wholesale after every write.

use super::data::{Record, RecordInput, RecordRow};

#[derive(Debug, Default)]
pub struct Form {
    /// Current text of the input fields
    pub fields: RecordInput,
    /// Rows shown in the table, in database order
    rows: Vec<RecordRow>,
    /// Index into `rows` of the selected row
    selected: Option<usize>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[RecordRow] {
        &self.rows
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Pokédex number of the selected row, if any
    pub fn selected_number(&self) -> Option<i64> {
        self.selected
            .and_then(|index| self.rows.get(index))
            .map(|row| row.number)
    }

    /// Discard the table cache and rebuild it from `records`.
    /// The selection does not survive a reload; the fields do.
    pub fn reload(&mut self, records: &[Record]) {
        self.rows = records.iter().map(Record::to_row).collect();
        self.selected = None;
    }

    /// Select a row and copy its display values into the fields.
    ///
    /// Returns the row's image path, or None when `index` is out of range.
    pub fn select(&mut self, index: usize) -> Option<&str> {
        let row = self.rows.get(index)?;
        let [number, name, category, description, weight, height, image_path] = row.cells.clone();

        self.fields = RecordInput {
            number,
            name,
            category,
            description,
            weight,
            height,
            image_path,
        };
        self.selected = Some(index);

        Some(self.rows[index].image_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<Record> {
        vec![
            Record {
                number: 1,
                name: "Bulbasaur".to_string(),
                category: "Grass".to_string(),
                description: "Seed Pokémon".to_string(),
                weight: Some(6.9),
                height: Some(0.7),
                image_path: Some("/pics/001.png".to_string()),
            },
            Record {
                number: 7,
                name: "Squirtle".to_string(),
                category: "Water".to_string(),
                description: String::new(),
                weight: None,
                height: None,
                image_path: None,
            },
        ]
    }

    #[test]
    fn test_select_copies_row_into_fields() {
        let mut form = Form::new();
        form.reload(&records());

        let image = form.select(0).map(str::to_string);

        assert_eq!(image.as_deref(), Some("/pics/001.png"));
        assert_eq!(form.selected_number(), Some(1));
        assert_eq!(
            form.fields,
            RecordInput {
                number: "1".to_string(),
                name: "Bulbasaur".to_string(),
                category: "Grass".to_string(),
                description: "Seed Pokémon".to_string(),
                weight: "6.9".to_string(),
                height: "0.7".to_string(),
                image_path: "/pics/001.png".to_string(),
            }
        );
    }

    #[test]
    fn test_select_legacy_row_leaves_image_empty() {
        let mut form = Form::new();
        form.reload(&records());
        form.fields.image_path = "/stale.png".to_string();

        let image = form.select(1).map(str::to_string);

        assert_eq!(image.as_deref(), Some(""));
        assert_eq!(form.fields.image_path, "");
        assert_eq!(form.fields.weight, "");
    }

    #[test]
    fn test_select_out_of_range() {
        let mut form = Form::new();
        form.reload(&records());

        assert!(form.select(5).is_none());
        assert_eq!(form.selected(), None);
        assert_eq!(form.fields, RecordInput::default());
    }

    #[test]
    fn test_reload_clears_selection_but_keeps_fields() {
        let mut form = Form::new();
        form.reload(&records());
        form.select(1);

        form.reload(&records()[..1]);

        assert_eq!(form.selected_number(), None);
        assert_eq!(form.rows().len(), 1);
        assert_eq!(form.fields.name, "Squirtle");
    }
}
