use super::prelude::*;

/// Persists the onboarding preferences.
///
/// Stored once when onboarding completes; their presence routes the next
/// start straight to the feed.
pub fn store_preferences<R: PreferencesRepo>(repo: &R, preferences: UserPreferences) -> Result<()> {
    repo.store_preferences(&preferences)?;
    Ok(())
}

pub fn load_preferences<R: PreferencesRepo>(repo: &R) -> Result<Option<UserPreferences>> {
    Ok(repo.try_get_preferences()?)
}
