use super::*;

/// Completes onboarding by persisting the selected preferences.
pub fn complete_onboarding<D: PreferencesRepo>(db: &D, preferences: UserPreferences) -> Result<()> {
    usecases::store_preferences(db, preferences)?;
    info!("Onboarding completed");
    Ok(())
}

/// Startup routing: stored preferences skip the onboarding flow.
pub fn has_completed_onboarding<D: PreferencesRepo>(db: &D) -> Result<bool> {
    Ok(usecases::load_preferences(db)?.is_some())
}

pub fn stored_preferences<D: PreferencesRepo>(db: &D) -> Result<Option<UserPreferences>> {
    Ok(usecases::load_preferences(db)?)
}
