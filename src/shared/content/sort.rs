// src/shared/content/sort.rs

use sea_orm::Order;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// `?ascending=true|false` as the listing routes accept it.
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        }
    }
}

impl From<SortDirection> for Order {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        }
    }
}

/// Ordering requested for a `list` call. `F` is the closed set of columns an
/// entity allows sorting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOrder<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F> ListOrder<F> {
    pub fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn asc(field: F) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: F) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}

/// Resolves `order_by`/`ascending` query parameters against an entity's
/// default order. A field without a direction keeps the default direction.
pub fn resolve_order<F: Copy>(
    default: ListOrder<F>,
    field: Option<F>,
    ascending: Option<bool>,
) -> ListOrder<F> {
    ListOrder {
        field: field.unwrap_or(default.field),
        direction: ascending
            .map(SortDirection::from_ascending)
            .unwrap_or(default.direction),
    }
}
