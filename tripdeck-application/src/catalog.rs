use super::*;

use tripdeck_core::repositories::Error as RepoError;

type RepoResult<T> = std::result::Result<T, RepoError>;

/// The static, read-only content catalog behind the feed.
///
/// Owns POI identity and content; every other collection holds value
/// copies resolved through it.
#[derive(Debug)]
pub struct Catalog {
    pois: Vec<PointOfInterest>,
}

impl Catalog {
    /// The built-in feed content.
    pub fn builtin() -> Self {
        Self {
            pois: builtin_feed(),
        }
    }
}

impl CatalogRepo for Catalog {
    fn try_get_poi(&self, id: &str) -> RepoResult<Option<PointOfInterest>> {
        Ok(self.pois.iter().find(|p| p.id.as_str() == id).cloned())
    }

    fn all_pois(&self) -> RepoResult<Vec<PointOfInterest>> {
        Ok(self.pois.clone())
    }

    fn count_pois(&self) -> RepoResult<usize> {
        Ok(self.pois.len())
    }
}

fn card(
    id: &str,
    city: &str,
    country: &str,
    title: &str,
    short_desc: &str,
    price_range: &str,
    tags: &[&str],
    creator_handle: &str,
    media_placeholder: &str,
    category: Category,
    zone: &str,
) -> PointOfInterest {
    PointOfInterest {
        id: id.into(),
        city: city.into(),
        country: country.into(),
        title: title.into(),
        short_desc: short_desc.into(),
        price_range: price_range.into(),
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        creator_handle: creator_handle.into(),
        media_placeholder: media_placeholder.into(),
        category,
        zone: zone.into(),
    }
}

fn builtin_feed() -> Vec<PointOfInterest> {
    vec![
        card(
            "lis-01",
            "Lisbon",
            "Portugal",
            "Tram 28 at Sunrise",
            "Ride the classic yellow tram before the crowds arrive.",
            "€",
            &["historic", "scenic"],
            "@miradouro.hunter",
            "https://images.example.com/lisbon-tram28.jpg",
            Category::Transport,
            "Alfama",
        ),
        card(
            "lis-02",
            "Lisbon",
            "Portugal",
            "Time Out Market Crawl",
            "One roof, two dozen of the city's best kitchens.",
            "€€",
            &["food-hall", "local"],
            "@tasca.diaries",
            "https://images.example.com/lisbon-timeout.jpg",
            Category::Food,
            "Cais do Sodré",
        ),
        card(
            "lis-03",
            "Lisbon",
            "Portugal",
            "Fado Night in a Cellar Bar",
            "Candlelit fado with a glass of ginjinha.",
            "€€",
            &["music", "late-night"],
            "@fado.sessions",
            "https://images.example.com/lisbon-fado.jpg",
            Category::Nightlife,
            "Bairro Alto",
        ),
        card(
            "lis-04",
            "Lisbon",
            "Portugal",
            "Azulejo Rooftop Guesthouse",
            "Tiled terraces overlooking the Tagus.",
            "€€€",
            &["boutique", "views"],
            "@slowstays",
            "https://images.example.com/lisbon-guesthouse.jpg",
            Category::Stay,
            "Graça",
        ),
        card(
            "tok-01",
            "Tokyo",
            "Japan",
            "Golden Gai Bar Hop",
            "Six-seat bars stacked into two lantern-lit alleys.",
            "¥¥",
            &["bars", "tiny"],
            "@neon.nomad",
            "https://images.example.com/tokyo-goldengai.jpg",
            Category::Nightlife,
            "Shinjuku",
        ),
        card(
            "tok-02",
            "Tokyo",
            "Japan",
            "Tsukiji Outer Market Breakfast",
            "Tamagoyaki and tuna before nine in the morning.",
            "¥¥",
            &["seafood", "market"],
            "@chopstick.miles",
            "https://images.example.com/tokyo-tsukiji.jpg",
            Category::Food,
            "Chūō",
        ),
        card(
            "cdmx-01",
            "Mexico City",
            "Mexico",
            "Lucha Libre at Arena México",
            "Masks, flying bodies and a roaring Tuesday crowd.",
            "$$",
            &["show", "iconic"],
            "@cdmx.afterdark",
            "https://images.example.com/cdmx-lucha.jpg",
            Category::Activity,
            "Doctores",
        ),
        card(
            "bcn-01",
            "Barcelona",
            "Spain",
            "Bunkers del Carmel Picnic",
            "The city's best sunset panorama, bring your own vermouth.",
            "Free",
            &["viewpoint", "sunset"],
            "@vermut.society",
            "https://images.example.com/bcn-bunkers.jpg",
            Category::Activity,
            "El Carmel",
        ),
    ]
}

/// The fixed batch surfaced by the simulated social import.
pub fn instagram_import_batch() -> Vec<PointOfInterest> {
    vec![
        card(
            "ig-par-01",
            "Paris",
            "France",
            "Café de Flore",
            "The quintessential Parisian café experience.",
            "€€€",
            &["historic", "coffee"],
            "@paris.explorer",
            "https://images.example.com/paris-flore.jpg",
            Category::Food,
            "Saint-Germain",
        ),
        card(
            "ig-par-02",
            "Paris",
            "France",
            "Jardin du Luxembourg",
            "Perfect for a morning stroll or a picnic.",
            "Free",
            &["nature", "park"],
            "@paris.explorer",
            "https://images.example.com/paris-luxembourg.jpg",
            Category::Activity,
            "6th Arr.",
        ),
        card(
            "ig-par-03",
            "Paris",
            "France",
            "Shakespeare and Company",
            "The most famous independent bookstore.",
            "€",
            &["books", "history"],
            "@paris.explorer",
            "https://images.example.com/paris-shakespeare.jpg",
            Category::Activity,
            "Latin Quarter",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_ids_are_unique() {
        let catalog = Catalog::builtin();
        let pois = catalog.all_pois().unwrap();
        for (i, a) in pois.iter().enumerate() {
            for b in &pois[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn lookup_resolves_known_ids_only() {
        let catalog = Catalog::builtin();
        assert!(catalog.try_get_poi("lis-01").unwrap().is_some());
        assert!(catalog.try_get_poi("nope").unwrap().is_none());
    }
}
