use super::prelude::*;

/// Explicit removal from the saved library.
///
/// Swipe gestures never remove; this is the library screen's own action.
pub fn remove_from_library<R: LibraryRepo>(repo: &R, poi_id: &str) -> Result<()> {
    repo.remove_saved(poi_id)?;
    Ok(())
}
