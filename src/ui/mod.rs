/// User interface building blocks
///
/// - `table.rs` - the catalog table view
/// - `preview.rs` - image preview for the selected Pokémon
/// - `dialog.rs` - native file picker and message boxes

pub mod dialog;
pub mod preview;
pub mod table;
