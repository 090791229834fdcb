pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{poi_builder::*, trip_builder::*};

pub mod poi_builder {

    use super::*;
    use crate::{id::*, poi::*};

    #[derive(Debug)]
    pub struct PointOfInterestBuild {
        poi: PointOfInterest,
    }

    impl PointOfInterestBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.poi.id = id.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.poi.city = city.into();
            self
        }
        pub fn country(mut self, country: &str) -> Self {
            self.poi.country = country.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.poi.title = title.into();
            self
        }
        pub fn short_desc(mut self, desc: &str) -> Self {
            self.poi.short_desc = desc.into();
            self
        }
        pub fn price_range(mut self, price_range: &str) -> Self {
            self.poi.price_range = price_range.into();
            self
        }
        pub fn tags(mut self, tags: Vec<impl Into<String>>) -> Self {
            self.poi.tags = tags.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn category(mut self, category: Category) -> Self {
            self.poi.category = category;
            self
        }
        pub fn zone(mut self, zone: &str) -> Self {
            self.poi.zone = zone.into();
            self
        }
        pub fn finish(self) -> PointOfInterest {
            self.poi
        }
    }

    impl Builder for PointOfInterest {
        type Build = PointOfInterestBuild;
        fn build() -> Self::Build {
            Self::Build {
                poi: PointOfInterest {
                    id: Id::new(),
                    city: "".into(),
                    country: "".into(),
                    title: "".into(),
                    short_desc: "".into(),
                    price_range: "".into(),
                    tags: vec![],
                    creator_handle: "".into(),
                    media_placeholder: "".into(),
                    category: Category::Activity,
                    zone: "".into(),
                },
            }
        }
    }
}

pub mod trip_builder {

    use super::*;
    use crate::{id::*, poi::*, time::*, trip::*};

    #[derive(Debug)]
    pub struct TripBuild {
        trip: Trip,
    }

    impl TripBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.trip.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.trip.name = name.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.trip.city = city.into();
            self
        }
        pub fn country(mut self, country: &str) -> Self {
            self.trip.country = country.into();
            self
        }
        pub fn items(mut self, items: Vec<PointOfInterest>) -> Self {
            self.trip.items = items;
            self
        }
        pub fn finish(self) -> Trip {
            self.trip
        }
    }

    impl Builder for Trip {
        type Build = TripBuild;
        fn build() -> Self::Build {
            Self::Build {
                trip: Trip {
                    id: Id::new(),
                    name: "".into(),
                    city: "".into(),
                    country: "".into(),
                    items: vec![],
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}
