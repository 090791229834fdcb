use super::prelude::*;

/// A city and its saved items, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityGroup {
    pub city: String,
    pub items: Vec<PointOfInterest>,
}

/// Loads the saved library grouped by city.
///
/// Groups appear in first-encounter order, items in insertion order.
pub fn load_saved_library<R: LibraryRepo>(repo: &R) -> Result<Vec<CityGroup>> {
    Ok(group_by_city(repo.all_saved()?))
}

pub fn group_by_city(items: Vec<PointOfInterest>) -> Vec<CityGroup> {
    let mut groups: Vec<CityGroup> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|g| g.city == item.city) {
            Some(group) => group.items.push(item),
            None => groups.push(CityGroup {
                city: item.city.clone(),
                items: vec![item],
            }),
        }
    }
    groups
}
