use std::{
    fmt,
    iter::Sum,
    ops::{Add, Mul},
};

use tracing::debug;

use crate::error::StoreError;

/// Opaque handle to a book in a [`Catalog`](crate::Catalog).
///
/// Two books with the same title are still distinct entries, so the cart keys
/// on this handle rather than on any field of the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookId(pub(crate) usize);

impl BookId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Non-negative amount of money, stored in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Convert a dollar amount, rounding to the nearest cent.
    ///
    /// Returns `None` for negative, NaN or infinite amounts.
    pub fn from_dollars(dollars: f64) -> Option<Self> {
        if !dollars.is_finite() || dollars < 0.0 {
            return None;
        }
        Some(Self((dollars * 100.0).round() as u64))
    }

    pub const fn cents(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl Mul<u32> for Price {
    type Output = Price;

    fn mul(self, quantity: u32) -> Price {
        Price(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    price: Price,
    stock: u32,
}

impl Book {
    pub(crate) fn new(id: BookId, title: String, author: String, price: Price, stock: u32) -> Self {
        Self { id, title, author, price, stock }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Apply a signed change to the stock counter and return the new value.
    ///
    /// A delta that would take stock below zero or past `u32::MAX` is
    /// rejected and leaves the book untouched.
    pub fn adjust_stock(&mut self, delta: i64) -> Result<u32, StoreError> {
        let next = i64::from(self.stock).checked_add(delta);
        self.stock = match next.map(u32::try_from) {
            Some(Ok(stock)) => stock,
            _ if delta < 0 => {
                return Err(StoreError::StockUnderflow {
                    title: self.title.clone(),
                    stock: self.stock,
                    delta,
                });
            }
            _ => {
                return Err(StoreError::StockOverflow {
                    title: self.title.clone(),
                    stock: self.stock,
                    delta,
                });
            }
        };

        debug!(title = %self.title, delta, stock = self.stock, "stock adjusted");
        Ok(self.stock)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, Price: {}, Stock: {}",
            self.title, self.author, self.price, self.stock
        )
    }
}
