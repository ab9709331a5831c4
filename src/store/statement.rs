//! # Statement Builder
//!
//! Parameterized SELECT statements over the two known tables.
//!
//! Table and column names come from closed enums, so request data can only
//! ever reach the store as a bound parameter.

use std::fmt;

/// Tables the gateway is allowed to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Restaurants,
    Dishes,
}

impl Table {
    /// SQL table name, also used as the response payload key
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Restaurants => "restaurants",
            Table::Dishes => "dishes",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Columns that may appear in a predicate or ORDER BY clause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    Cuisine,
    Rating,
    Price,
    IsVeg,
    HasOutdoorSeating,
    IsLuxury,
}

impl Column {
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Cuisine => "cuisine",
            Column::Rating => "rating",
            Column::Price => "price",
            Column::IsVeg => "isVeg",
            Column::HasOutdoorSeating => "hasOutdoorSeating",
            Column::IsLuxury => "isLuxury",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// Equality predicate. A `None` value binds SQL NULL.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Predicate {
    column: Column,
    value: Option<String>,
}

/// A `SELECT *` over one table with AND-ed equality predicates
/// and an optional ordering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    table: Table,
    predicates: Vec<Predicate>,
    order: Option<(Column, Direction)>,
}

impl Statement {
    /// Select every row of a table
    pub fn select_all(table: Table) -> Self {
        Self {
            table,
            predicates: Vec::new(),
            order: None,
        }
    }

    /// Add an equality predicate (`column = ?`)
    pub fn filter_eq(mut self, column: Column, value: Option<String>) -> Self {
        self.predicates.push(Predicate { column, value });
        self
    }

    /// Order the result set by a single column
    pub fn order_by(mut self, column: Column, direction: Direction) -> Self {
        self.order = Some((column, direction));
        self
    }

    pub fn table(&self) -> Table {
        self.table
    }

    /// Render the SQL text with one `?` placeholder per predicate
    pub fn sql(&self) -> String {
        let mut sql = format!("SELECT * FROM {}", self.table.as_str());

        for (i, predicate) in self.predicates.iter().enumerate() {
            sql.push_str(if i == 0 { " WHERE " } else { " AND " });
            sql.push_str(predicate.column.as_str());
            sql.push_str(" = ?");
        }

        if let Some((column, direction)) = self.order {
            sql.push_str(" ORDER BY ");
            sql.push_str(column.as_str());
            sql.push(' ');
            sql.push_str(direction.as_str());
        }

        sql
    }

    /// Bound values in placeholder order
    pub fn params(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.predicates.iter().map(|p| p.value.as_deref())
    }
}
