use std::path::{Path, PathBuf};

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// Blocking yes/no question; anything but "yes" counts as a refusal.
pub fn confirm(title: &str, description: &str) -> bool {
    MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::YesNo)
        .show()
        == MessageDialogResult::Yes
}

pub fn save_csv_path(directory: Option<&Path>, file_name: &str) -> Option<PathBuf> {
    let mut dialog = FileDialog::new()
        .add_filter("CSV", &["csv"])
        .add_filter("Tous les fichiers", &["*"])
        .set_file_name(file_name);
    if let Some(directory) = directory {
        dialog = dialog.set_directory(directory);
    }
    dialog.save_file()
}
