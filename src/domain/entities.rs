//! Domain entities: core data structures

use std::fmt;

use generational_arena::Index;

use crate::domain::error::DomainError;

/// Handle of a place stored in the [`Catalog`](crate::domain::Catalog) arena.
///
/// Tree buckets, history and favorites hold these handles instead of copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaceId(pub(crate) Index);

/// A point of interest.
///
/// Immutable once created. Identity for de-duplication is the `name`.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub name: String,
    pub category: String,
    pub subcategory: String,
    /// Miles from the fixed reference point
    pub distance: f64,
    /// Display only
    pub website: String,
}

impl Place {
    /// Build a validated place record.
    ///
    /// Names and tree keys must not be blank; `distance` must be finite and
    /// non-negative.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        subcategory: impl Into<String>,
        distance: f64,
        website: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let place = Self {
            name: name.into(),
            category: category.into(),
            subcategory: subcategory.into(),
            distance,
            website: website.into(),
        };
        place.validate()?;
        Ok(place)
    }

    fn validate(&self) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidPlace {
            name: self.name.clone(),
            reason: reason.to_string(),
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name is empty"));
        }
        if self.category.trim().is_empty() {
            return Err(invalid("category is empty"));
        }
        if self.subcategory.trim().is_empty() {
            return Err(invalid("subcategory is empty"));
        }
        if !self.distance.is_finite() || self.distance < 0.0 {
            return Err(invalid("distance must be a non-negative number"));
        }
        Ok(())
    }

    /// Same place by identity (name equality).
    pub fn same_as(&self, other: &Place) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({} miles away) - {}",
            self.name, self.subcategory, self.distance, self.website
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_negative_distance_when_creating_place_then_rejects() {
        let result = Place::new("Nowhere", "Food", "Boba", -0.1, "");
        assert!(matches!(result, Err(DomainError::InvalidPlace { .. })));
    }

    #[test]
    fn given_blank_subcategory_when_creating_place_then_rejects() {
        let result = Place::new("Nowhere", "Food", "  ", 1.0, "");
        assert!(matches!(result, Err(DomainError::InvalidPlace { .. })));
    }

    #[test]
    fn given_same_name_with_different_fields_then_same_place() {
        let a = Place::new("Gong Cha", "Drinks/Cafe", "Boba", 1.2, "a").unwrap();
        let b = Place::new("Gong Cha", "Food", "General", 3.0, "b").unwrap();
        assert!(a.same_as(&b));
    }

    #[test]
    fn given_place_when_displaying_then_shows_subcategory_and_distance() {
        let place = Place::new("Teaspoon Boba", "Food", "Boba", 0.5, "www.teaspoon.com").unwrap();
        assert_eq!(
            place.to_string(),
            "Teaspoon Boba - Boba (0.5 miles away) - www.teaspoon.com"
        );
    }
}
