use crate::error::NeighborFitError;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// One of the ten lifestyle factors both users and neighborhoods are rated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    Commute,
    Nightlife,
    FamilyFriendly,
    Affordability,
    Walkability,
    Dining,
    Safety,
    Culture,
    Outdoors,
    Shopping,
}

impl Dimension {
    pub const COUNT: usize = 10;

    pub const ALL: [Dimension; Dimension::COUNT] = [
        Dimension::Commute,
        Dimension::Nightlife,
        Dimension::FamilyFriendly,
        Dimension::Affordability,
        Dimension::Walkability,
        Dimension::Dining,
        Dimension::Safety,
        Dimension::Culture,
        Dimension::Outdoors,
        Dimension::Shopping,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Key used in configuration files and JSON output.
    pub fn key(self) -> &'static str {
        match self {
            Dimension::Commute => "commute",
            Dimension::Nightlife => "nightlife",
            Dimension::FamilyFriendly => "familyFriendly",
            Dimension::Affordability => "affordability",
            Dimension::Walkability => "walkability",
            Dimension::Dining => "dining",
            Dimension::Safety => "safety",
            Dimension::Culture => "culture",
            Dimension::Outdoors => "outdoors",
            Dimension::Shopping => "shopping",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Commute => "Commute",
            Dimension::Nightlife => "Nightlife",
            Dimension::FamilyFriendly => "Family-Friendly",
            Dimension::Affordability => "Affordability",
            Dimension::Walkability => "Walkability",
            Dimension::Dining => "Dining",
            Dimension::Safety => "Safety",
            Dimension::Culture => "Culture",
            Dimension::Outdoors => "Outdoors",
            Dimension::Shopping => "Shopping",
        }
    }

    pub fn question_title(self) -> &'static str {
        match self {
            Dimension::Commute => "Short Commute",
            Dimension::Nightlife => "Nightlife & Entertainment",
            Dimension::FamilyFriendly => "Family-Friendly",
            Dimension::Affordability => "Affordability",
            Dimension::Walkability => "Walkability",
            Dimension::Dining => "Dining Options",
            Dimension::Safety => "Safety",
            Dimension::Culture => "Arts & Culture",
            Dimension::Outdoors => "Outdoor Activities",
            Dimension::Shopping => "Shopping",
        }
    }

    pub fn question_description(self) -> &'static str {
        match self {
            Dimension::Commute => "How important is being close to work/school?",
            Dimension::Nightlife => "Access to bars, clubs, and evening activities",
            Dimension::FamilyFriendly => "Good schools, parks, and family activities",
            Dimension::Affordability => "Reasonable cost of living and housing",
            Dimension::Walkability => "Easy to walk to daily necessities",
            Dimension::Dining => "Variety of restaurants and food choices",
            Dimension::Safety => "Low crime rates and secure environment",
            Dimension::Culture => "Museums, theaters, and cultural events",
            Dimension::Outdoors => "Parks, hiking trails, and outdoor recreation",
            Dimension::Shopping => "Access to retail stores and shopping centers",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Dimension {
    type Err = NeighborFitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
        Dimension::ALL
            .into_iter()
            .find(|dimension| dimension.key().to_ascii_lowercase() == normalized)
            .ok_or_else(|| NeighborFitError::UnknownDimension(s.trim().to_string()))
    }
}

impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// A value for every dimension, stored in enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DimensionMap<T>([T; Dimension::COUNT]);

impl<T> DimensionMap<T> {
    pub const fn new(values: [T; Dimension::COUNT]) -> Self {
        Self(values)
    }

    pub fn from_fn(mut f: impl FnMut(Dimension) -> T) -> Self {
        Self(Dimension::ALL.map(&mut f))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &T)> {
        Dimension::ALL.into_iter().zip(self.0.iter())
    }

    pub fn values(&self) -> &[T; Dimension::COUNT] {
        &self.0
    }
}

impl<T: Copy> DimensionMap<T> {
    pub fn splat(value: T) -> Self {
        Self([value; Dimension::COUNT])
    }
}

impl<T> Index<Dimension> for DimensionMap<T> {
    type Output = T;

    fn index(&self, dimension: Dimension) -> &T {
        &self.0[dimension.index()]
    }
}

impl<T> IndexMut<Dimension> for DimensionMap<T> {
    fn index_mut(&mut self, dimension: Dimension) -> &mut T {
        &mut self.0[dimension.index()]
    }
}

impl<T: Serialize> Serialize for DimensionMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Dimension::COUNT))?;
        for (dimension, value) in self.iter() {
            map.serialize_entry(dimension.key(), value)?;
        }
        map.end()
    }
}
