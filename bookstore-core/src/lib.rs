//! Core library for the `bookstore` CLI.
//!
//! This crate defines:
//! - The book catalog, shopping cart and credential directory
//! - The shopping workflow that keeps carts and stock in step
//! - A fixed-table weather lookup
//! - Seed configuration loaded from TOML
//!
//! It is used by `bookstore-cli`, but holds no terminal I/O of its own.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod weather;

pub use account::{Account, Directory};
pub use cart::Cart;
pub use catalog::Catalog;
pub use config::{BookSeed, Config};
pub use error::StoreError;
pub use model::{Book, BookId, Price};
pub use store::{Bookstore, Session};
pub use weather::{StaticWeather, WeatherReport, WeatherSource};
