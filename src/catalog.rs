use crate::types::dimension::DimensionMap;
use crate::types::neighborhood::NeighborhoodRecord;

// Score order: commute, nightlife, familyFriendly, affordability, walkability,
// dining, safety, culture, outdoors, shopping.
static CATALOG: [NeighborhoodRecord; 5] = [
    NeighborhoodRecord {
        id: "1",
        name: "Downtown Arts District",
        city: "Metro City",
        scores: DimensionMap::new([9, 9, 4, 3, 10, 9, 6, 10, 5, 8]),
        description: "Vibrant urban core with world-class museums, theaters, and nightlife",
        key_features: &[
            "Art galleries",
            "Theater district",
            "Rooftop bars",
            "Loft apartments",
        ],
    },
    NeighborhoodRecord {
        id: "2",
        name: "Maple Grove Suburbs",
        city: "Metro City",
        scores: DimensionMap::new([4, 2, 10, 7, 6, 6, 9, 5, 8, 7]),
        description: "Family-oriented community with excellent schools and parks",
        key_features: &[
            "Top-rated schools",
            "Community parks",
            "Family centers",
            "Safe streets",
        ],
    },
    NeighborhoodRecord {
        id: "3",
        name: "Riverside Walk",
        city: "Metro City",
        scores: DimensionMap::new([7, 6, 7, 6, 9, 8, 8, 7, 9, 6]),
        description: "Scenic waterfront community with outdoor recreation and bistros",
        key_features: &[
            "River trails",
            "Waterfront dining",
            "Bike paths",
            "Farmers market",
        ],
    },
    NeighborhoodRecord {
        id: "4",
        name: "University Heights",
        city: "Metro City",
        scores: DimensionMap::new([8, 8, 5, 8, 8, 7, 7, 8, 6, 7]),
        description: "Dynamic college town atmosphere with affordable living and young energy",
        key_features: &[
            "College bars",
            "Affordable eats",
            "Bookstores",
            "Student housing",
        ],
    },
    NeighborhoodRecord {
        id: "5",
        name: "Historic Oakwood",
        city: "Metro City",
        scores: DimensionMap::new([6, 5, 8, 5, 7, 8, 9, 9, 7, 6]),
        description: "Charming historic district with boutique shops and fine dining",
        key_features: &[
            "Historic architecture",
            "Boutique shopping",
            "Fine dining",
            "Art studios",
        ],
    },
];

pub fn catalog() -> &'static [NeighborhoodRecord] {
    &CATALOG
}

pub fn find(id: &str) -> Option<&'static NeighborhoodRecord> {
    CATALOG.iter().find(|record| record.id == id)
}
