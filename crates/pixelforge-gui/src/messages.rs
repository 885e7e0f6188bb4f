use std::path::PathBuf;

/// Results sent from helper threads back to the UI thread.
pub enum DialogResult {
    /// The open-image dialog closed; `None` when cancelled.
    ImagePicked(Option<PathBuf>),
}
