// the rotating storefront picks
//
// a full build would feed these from inventory; for the promo site the week's
// crate is fixed at compile time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VinylRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub artist: &'static str,
    pub year: u16,
    pub price: f64,
    pub art: &'static str,
    pub blurb: &'static str,
}

pub const CATALOG: &[VinylRecord] = &[
    VinylRecord {
        id: "vinyl1",
        title: "Blue Note Sunrise",
        artist: "The Harbor Quartet",
        year: 1961,
        price: 29.99,
        art: "🎷",
        blurb: "Original mono pressing of the quartet's after-hours session, cleaned and regraded this week.",
    },
    VinylRecord {
        id: "vinyl2",
        title: "Electric Canyon",
        artist: "Velvet Mesa",
        year: 1977,
        price: 44.99,
        art: "🎸",
        blurb: "First pressing with the gatefold intact. Plays through with barely a whisper of surface noise.",
    },
    VinylRecord {
        id: "vinyl3",
        title: "Neon Rain",
        artist: "Casey Nova",
        year: 2019,
        price: 27.99,
        art: "🌃",
        blurb: "Limited teal splatter reissue on 180 gram. One per customer while the box lasts.",
    },
    VinylRecord {
        id: "vinyl4",
        title: "Road to Marfa",
        artist: "June & The Tumbleweeds",
        year: 1994,
        price: 24.99,
        art: "🪕",
        blurb: "Pedal steel all the way down. The shop copy kept spinning until we ordered more.",
    },
];

pub fn find(id: &str) -> Option<&'static VinylRecord> {
    CATALOG.iter().find(|record| record.id == id)
}

// the page opens with the first crate pick showing
pub fn default_selection() -> &'static str {
    CATALOG[0].id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_returns_the_matching_record() {
        let record = find("vinyl2").unwrap();

        assert_eq!(record.title, "Electric Canyon");
        assert_eq!(record.year, 1977);
    }

    #[test]
    fn find_misses_unknown_ids() {
        assert_eq!(find("vinyl9"), None);
        assert_eq!(find(""), None);
    }

    #[test]
    fn default_selection_is_the_first_pick() {
        assert_eq!(default_selection(), CATALOG[0].id);
        assert!(find(default_selection()).is_some());
    }

    #[test]
    fn record_ids_are_unique() {
        for (index, record) in CATALOG.iter().enumerate() {
            for other in CATALOG.iter().skip(index + 1) {
                assert_ne!(record.id, other.id);
            }
        }
    }
}
