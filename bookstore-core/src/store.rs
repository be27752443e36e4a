//! Shopping workflow tying the catalog, carts and the directory together.
//!
//! The cart and the stock counters are separate; every operation here keeps
//! them in step so that copies in a cart are never also on the shelf.

use anyhow::anyhow;
use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

use crate::{
    Config,
    account::{Account, Directory},
    cart::Cart,
    catalog::Catalog,
    error::StoreError,
    model::{Book, Price},
};

/// A logged-in account and its cart.
#[derive(Debug, Clone)]
pub struct Session {
    account: Account,
    cart: Cart,
    started_at: DateTime<Utc>,
}

impl Session {
    fn new(account: Account) -> Self {
        Self { account, cart: Cart::new(), started_at: Utc::now() }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn elapsed(&self) -> TimeDelta {
        Utc::now() - self.started_at
    }
}

#[derive(Debug, Clone, Default)]
pub struct Bookstore {
    catalog: Catalog,
    directory: Directory,
}

impl Bookstore {
    pub fn new(catalog: Catalog, directory: Directory) -> Self {
        Self { catalog, directory }
    }

    /// Build the store from seed data, rejecting negative or non-finite prices.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let mut catalog = Catalog::new();
        for seed in &config.catalog {
            let price = Price::from_dollars(seed.price).ok_or_else(|| {
                anyhow!(
                    "Invalid price {} for '{}': must be a non-negative amount",
                    seed.price,
                    seed.title
                )
            })?;
            catalog.add(seed.title.as_str(), seed.author.as_str(), price, seed.stock);
        }

        let directory = config.users.iter().map(|(u, p)| (u.as_str(), p.as_str())).collect();

        debug!(books = catalog.len(), "bookstore initialised");
        Ok(Self::new(catalog, directory))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn login(&self, username: &str, password: &str) -> Result<Session, StoreError> {
        Account::login(username, password, &self.directory).map(Session::new)
    }

    /// Move `quantity` copies of the book titled `title` from stock into the cart.
    pub fn add_to_cart(
        &mut self,
        session: &mut Session,
        title: &str,
        quantity: u32,
    ) -> Result<&Book, StoreError> {
        if quantity == 0 {
            return Err(StoreError::InvalidQuantity);
        }

        let book = self.book_mut(title)?;
        if quantity > book.stock() {
            return Err(StoreError::InsufficientStock {
                title: book.title().to_string(),
                requested: quantity,
                available: book.stock(),
            });
        }

        book.adjust_stock(-i64::from(quantity))?;
        session.cart.add(book.id(), quantity);
        Ok(&*book)
    }

    /// Move up to `quantity` copies back from the cart to stock.
    ///
    /// Returns the number of copies actually moved, which is less than
    /// `quantity` when the cart held fewer.
    pub fn remove_from_cart(
        &mut self,
        session: &mut Session,
        title: &str,
        quantity: u32,
    ) -> Result<u32, StoreError> {
        if quantity == 0 {
            return Err(StoreError::InvalidQuantity);
        }

        let book = self.book_mut(title)?;
        if !session.cart.contains(book.id()) {
            return Err(StoreError::NotInCart { title: book.title().to_string() });
        }

        let removed = session.cart.remove(book.id(), quantity);
        book.adjust_stock(i64::from(removed))?;
        Ok(removed)
    }

    pub fn change_password(
        &mut self,
        session: &Session,
        new_password: impl Into<String>,
    ) -> Result<(), StoreError> {
        session.account.update_password(&mut self.directory, new_password)
    }

    pub fn cart_total(&self, session: &Session) -> Price {
        session.cart.total(&self.catalog)
    }

    fn book_mut(&mut self, title: &str) -> Result<&mut Book, StoreError> {
        let id = self.catalog.find_by_title(title).map(Book::id);
        id.and_then(|id| self.catalog.get_mut(id))
            .ok_or_else(|| StoreError::BookNotFound { title: title.to_string() })
    }
}
