use strum::{Display, EnumCount, EnumIter, EnumString};

/// Budget bracket selected during onboarding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumCount, EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum BudgetRange {
    Economy,
    Standard,
    Luxury,
}

impl Default for BudgetRange {
    fn default() -> BudgetRange {
        BudgetRange::Standard
    }
}

/// Travel preferences captured once at onboarding.
///
/// Persisted and read-only thereafter; their presence in the stored record
/// is what lets the shell skip onboarding on the next start.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserPreferences {
    pub budget       : BudgetRange,
    pub interests    : Vec<String>,
    pub travel_style : Vec<String>,
}
