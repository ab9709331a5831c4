//! # Filter Parameters
//!
//! Typed views over the flag query parameters. Values are kept verbatim as
//! strings; comparison against the stored flag is left to the store's column
//! affinity. An absent parameter binds NULL, which never compares equal, so
//! the route reports no matches.

use std::collections::HashMap;

use crate::store::{Column, Statement, Table};

/// Rendering of an absent parameter in 404 messages
pub const ABSENT: &str = "undefined";

/// Query parameters for `/restaurants/filter`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantFilter {
    pub is_veg: Option<String>,
    pub has_outdoor_seating: Option<String>,
    pub is_luxury: Option<String>,
}

impl RestaurantFilter {
    /// Pick the three flags out of the raw query map; other keys are ignored
    pub fn from_query(query: &HashMap<String, String>) -> Self {
        Self {
            is_veg: query.get(Column::IsVeg.as_str()).cloned(),
            has_outdoor_seating: query.get(Column::HasOutdoorSeating.as_str()).cloned(),
            is_luxury: query.get(Column::IsLuxury.as_str()).cloned(),
        }
    }

    pub fn to_statement(&self) -> Statement {
        Statement::select_all(Table::Restaurants)
            .filter_eq(Column::IsVeg, self.is_veg.clone())
            .filter_eq(Column::HasOutdoorSeating, self.has_outdoor_seating.clone())
            .filter_eq(Column::IsLuxury, self.is_luxury.clone())
    }

    pub fn not_found_message(&self) -> String {
        format!(
            "No restaurants found with isVeg: {} hasOutdoorSeating: {} isLuxury: {}",
            display(&self.is_veg),
            display(&self.has_outdoor_seating),
            display(&self.is_luxury),
        )
    }
}

/// Query parameters for `/dishes/filter`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DishFilter {
    pub is_veg: Option<String>,
}

impl DishFilter {
    pub fn from_query(query: &HashMap<String, String>) -> Self {
        Self {
            is_veg: query.get(Column::IsVeg.as_str()).cloned(),
        }
    }

    pub fn to_statement(&self) -> Statement {
        Statement::select_all(Table::Dishes).filter_eq(Column::IsVeg, self.is_veg.clone())
    }

    pub fn not_found_message(&self) -> String {
        format!("No dishes found with isVeg: {}", display(&self.is_veg))
    }
}

fn display(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(ABSENT)
}
