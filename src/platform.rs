//! OS integration: opening an album's media folder in the system file
//! manager.

use std::path::PathBuf;

/// Album media lives under `sounds/<Title_With_Underscores>`.
pub fn album_folder(title: &str) -> PathBuf {
    PathBuf::from("sounds").join(title.trim().replace(' ', "_"))
}

pub fn reveal_album_folder(title: &str) -> anyhow::Result<()> {
    let folder = album_folder(title);
    tracing::info!(path = %folder.display(), "Revealing album folder");
    open::that(&folder)?;
    Ok(())
}
