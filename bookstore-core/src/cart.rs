use tracing::debug;

use crate::{
    catalog::Catalog,
    model::{Book, BookId, Price},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CartLine {
    book: BookId,
    quantity: u32,
}

/// Books selected during one session, in the order they were first added.
///
/// No line ever holds a zero quantity: removing as many copies as are held,
/// or more, drops the line.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` copies, accumulating onto an existing line.
    ///
    /// Adding zero copies leaves the cart unchanged.
    pub fn add(&mut self, book: BookId, quantity: u32) {
        if quantity == 0 {
            return;
        }

        match self.line_mut(book) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine { book, quantity }),
        }
        debug!(book = book.index(), quantity, "added to cart");
    }

    /// Remove up to `quantity` copies and return how many were actually removed.
    ///
    /// Absent books are a no-op.
    pub fn remove(&mut self, book: BookId, quantity: u32) -> u32 {
        let Some(pos) = self.lines.iter().position(|l| l.book == book) else {
            return 0;
        };

        let line = &mut self.lines[pos];
        let removed = quantity.min(line.quantity);
        line.quantity -= removed;
        if line.quantity == 0 {
            self.lines.remove(pos);
        }

        debug!(book = book.index(), requested = quantity, removed, "removed from cart");
        removed
    }

    /// Quantity held for `book`, or 0 when it is not in the cart.
    pub fn quantity(&self, book: BookId) -> u32 {
        self.lines
            .iter()
            .find(|l| l.book == book)
            .map_or(0, |l| l.quantity)
    }

    pub fn contains(&self, book: BookId) -> bool {
        self.lines.iter().any(|l| l.book == book)
    }

    /// Lines resolved against `catalog`, in insertion order.
    ///
    /// Handles unknown to `catalog` are skipped.
    pub fn lines<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = (&'a Book, u32)> + 'a {
        self.lines
            .iter()
            .filter_map(|l| catalog.get(l.book).map(|b| (b, l.quantity)))
    }

    pub fn total(&self, catalog: &Catalog) -> Price {
        self.lines(catalog)
            .map(|(book, quantity)| book.price() * quantity)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, book: BookId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.book == book)
    }
}
