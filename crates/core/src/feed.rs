//! Feed query construction.
//!
//! Raw, caller-controlled feed parameters are folded into a [`FeedQuery`]
//! that is valid by construction: page and price bounds are parsed with
//! documented fallbacks, and the sort column and direction are closed enums
//! whose `as_sql` values are the only strings a query may interpolate.

/* --------------------------------------------------------------------------
   Constants
   -------------------------------------------------------------------------- */

/// Number of ads on one feed page.
pub const PAGE_SIZE: i64 = 10;

/// Lowest valid price filter; also the `min_price` fallback.
pub const MIN_PRICE: i64 = 1;

/// Highest valid price filter; also the `max_price` fallback.
pub const MAX_PRICE: i64 = 1_000_000;

/* --------------------------------------------------------------------------
   Sort whitelist
   -------------------------------------------------------------------------- */

/// Column the feed may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    CreatedAt,
    Price,
}

impl SortKey {
    /// Parse a raw `sort_by` value. Exactly the literal `"price"` selects the
    /// price column; anything else (absent, empty, malformed) falls back to
    /// creation time.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("price") => SortKey::Price,
            _ => SortKey::CreatedAt,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortKey::CreatedAt => "created_at",
            SortKey::Price => "price",
        }
    }
}

/// Direction the feed is ordered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse a raw `order_by` value. Exactly the literal `"desc"` selects
    /// descending; anything else falls back to ascending.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/* --------------------------------------------------------------------------
   Query descriptor
   -------------------------------------------------------------------------- */

/// A feed query that always satisfies `page >= 0` and
/// `MIN_PRICE <= min_price <= max_price <= MAX_PRICE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedQuery {
    pub page: i64,
    pub min_price: i64,
    pub max_price: i64,
    pub sort_by: SortKey,
    pub order_by: SortOrder,
}

impl Default for FeedQuery {
    fn default() -> Self {
        FeedQuery {
            page: 0,
            min_price: MIN_PRICE,
            max_price: MAX_PRICE,
            sort_by: SortKey::default(),
            order_by: SortOrder::default(),
        }
    }
}

impl FeedQuery {
    /// Build a query from raw parameter strings.
    ///
    /// Never fails: unparseable or negative pages become 0, unparseable
    /// prices become the widest bounds, parsed prices are clamped into
    /// `[MIN_PRICE, MAX_PRICE]`, and bounds given in the wrong order are
    /// swapped.
    pub fn from_raw(
        page: Option<&str>,
        min_price: Option<&str>,
        max_price: Option<&str>,
        sort_by: Option<&str>,
        order_by: Option<&str>,
    ) -> Self {
        let page = parse_or(page, 0).max(0);
        let min = parse_or(min_price, MIN_PRICE).clamp(MIN_PRICE, MAX_PRICE);
        let max = parse_or(max_price, MAX_PRICE).clamp(MIN_PRICE, MAX_PRICE);
        let (min_price, max_price) = if min <= max { (min, max) } else { (max, min) };

        FeedQuery {
            page,
            min_price,
            max_price,
            sort_by: SortKey::from_raw(sort_by),
            order_by: SortOrder::from_raw(order_by),
        }
    }

    /// Row offset of this page. Saturates so a page near `i64::MAX` can
    /// never produce a negative offset.
    pub fn offset(&self) -> i64 {
        PAGE_SIZE.saturating_mul(self.page)
    }

    /// Page size, as a bind-friendly value.
    pub fn limit(&self) -> i64 {
        PAGE_SIZE
    }
}

/// Parse an optional integer parameter, falling back on absence, garbage, or
/// overflow.
fn parse_or(raw: Option<&str>, fallback: i64) -> i64 {
    raw.and_then(|s| s.parse::<i64>().ok()).unwrap_or(fallback)
}
