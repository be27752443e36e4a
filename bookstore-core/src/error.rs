use thiserror::Error;

/// Failures of the bookstore workflow.
///
/// Catalog lookups return `Option` instead; only operations that mutate
/// stock, the cart or the directory report through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Book not found: '{title}'")]
    BookNotFound { title: String },

    #[error("'{title}' is not in your cart")]
    NotInCart { title: String },

    #[error("Insufficient stock for '{title}': requested {requested}, available {available}")]
    InsufficientStock {
        title: String,
        requested: u32,
        available: u32,
    },

    #[error("Quantity must be a whole number of at least 1")]
    InvalidQuantity,

    #[error("Stock for '{title}' cannot be adjusted by {delta} (current stock {stock})")]
    StockUnderflow { title: String, stock: u32, delta: i64 },

    #[error("Stock for '{title}' cannot be raised by {delta} (current stock {stock})")]
    StockOverflow { title: String, stock: u32, delta: i64 },

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Unknown user '{username}'")]
    UnknownUser { username: String },
}
