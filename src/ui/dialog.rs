/// Native dialogs (rfd)
///
/// All of these block the UI thread until the user answers.
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::path::PathBuf;

/// Image extensions offered by the file picker
const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// Show the native file picker for a Pokémon picture
pub fn pick_image() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Select the Pokémon image")
        .add_filter("Images", &IMAGE_EXTENSIONS[..])
        .pick_file()
}

pub fn info(title: &str, description: &str) {
    let _ = MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
}

pub fn error(description: &str) {
    let _ = MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Error")
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// Ask a yes/no question. Closing the dialog counts as "no".
pub fn confirm(title: &str, description: &str) -> bool {
    let answer = MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::YesNo)
        .show();

    matches!(answer, MessageDialogResult::Yes)
}
