use std::fmt;

use bookstore_core::{Bookstore, Session};
use tracing::info;

use crate::{prompt, render};

/// Entries of the shop menu, offered through a select list.
///
/// Only these eight entries can be picked, so there is no invalid-choice path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    SearchTitle,
    SearchAuthor,
    ListAll,
    ViewCart,
    AddToCart,
    RemoveFromCart,
    ChangePassword,
    Exit,
}

impl MenuChoice {
    const ALL: [MenuChoice; 8] = [
        MenuChoice::SearchTitle,
        MenuChoice::SearchAuthor,
        MenuChoice::ListAll,
        MenuChoice::ViewCart,
        MenuChoice::AddToCart,
        MenuChoice::RemoveFromCart,
        MenuChoice::ChangePassword,
        MenuChoice::Exit,
    ];

    fn number(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).map_or(0, |i| i + 1)
    }

    fn label(self) -> &'static str {
        match self {
            MenuChoice::SearchTitle => "Search for a book by title",
            MenuChoice::SearchAuthor => "Search for books by author",
            MenuChoice::ListAll => "Display all books",
            MenuChoice::ViewCart => "View cart",
            MenuChoice::AddToCart => "Add book to cart",
            MenuChoice::RemoveFromCart => "Remove book from cart",
            MenuChoice::ChangePassword => "Change password",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

/// Run one interactive shopping session: log in, then loop over the menu.
pub fn run(store: &mut Bookstore) -> anyhow::Result<()> {
    let Some(mut session) = login(store)? else {
        println!("Goodbye!");
        return Ok(());
    };

    loop {
        println!();
        let menu = MenuChoice::ALL.to_vec();
        let Some(choice) = prompt::select("--- Bookstore Menu ---", menu)? else {
            break;
        };
        if !dispatch(store, &mut session, choice)? {
            break;
        }
    }

    println!("Exiting the bookstore system. Goodbye!");
    info!(
        username = session.account().username(),
        seconds = session.elapsed().num_seconds(),
        "session ended"
    );
    Ok(())
}

fn login(store: &Bookstore) -> anyhow::Result<Option<Session>> {
    println!("Please log in to continue.");

    loop {
        let Some(username) = prompt::text("Username:")? else {
            return Ok(None);
        };
        let Some(password) = prompt::password("Password:")? else {
            return Ok(None);
        };

        match store.login(&username, &password) {
            Ok(session) => {
                println!("Login successful.");
                return Ok(Some(session));
            }
            Err(_) => println!("Login failed. Please try again."),
        }
    }
}

/// Handle one menu choice. Returns `false` on exit.
///
/// A cancelled prompt goes back to the menu.
fn dispatch(
    store: &mut Bookstore,
    session: &mut Session,
    choice: MenuChoice,
) -> anyhow::Result<bool> {
    match choice {
        MenuChoice::SearchTitle => {
            let Some(title) = prompt::text("Enter the title of the book:")? else {
                return Ok(true);
            };
            match store.catalog().find_by_title(&title) {
                Some(book) => println!("Book found: {book}"),
                None => println!("Book not found."),
            }
        }
        MenuChoice::SearchAuthor => {
            let Some(author) = prompt::text("Enter the author's name:")? else {
                return Ok(true);
            };
            println!("{}", render::author_results(&store.catalog().find_by_author(&author)));
        }
        MenuChoice::ListAll => println!("{}", render::catalog_listing(store.catalog())),
        MenuChoice::ViewCart => {
            println!("{}", render::cart_report(session.cart(), store.catalog()))
        }
        MenuChoice::AddToCart => {
            let Some(title) = prompt::text("Enter the title of the book to add to your cart:")?
            else {
                return Ok(true);
            };
            let Some(quantity) = prompt::quantity("Enter the quantity:")? else {
                return Ok(true);
            };
            match store.add_to_cart(session, &title, quantity) {
                Ok(book) => println!("Added {quantity} x '{}' to your cart.", book.title()),
                Err(err) => println!("{err}"),
            }
        }
        MenuChoice::RemoveFromCart => {
            let Some(title) =
                prompt::text("Enter the title of the book to remove from your cart:")?
            else {
                return Ok(true);
            };
            let Some(quantity) = prompt::quantity("Enter the quantity to remove:")? else {
                return Ok(true);
            };
            match store.remove_from_cart(session, &title, quantity) {
                Ok(removed) => println!("Removed {removed} book(s) from your cart."),
                Err(err) => println!("{err}"),
            }
        }
        MenuChoice::ChangePassword => {
            let Some(new_password) = prompt::new_password("Enter your new password:")? else {
                return Ok(true);
            };
            match store.change_password(session, new_password) {
                Ok(()) => println!("Password updated successfully."),
                Err(err) => println!("{err}"),
            }
        }
        MenuChoice::Exit => return Ok(false),
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_is_numbered_one_to_eight() {
        let labels: Vec<String> = MenuChoice::ALL.iter().map(ToString::to_string).collect();

        assert_eq!(labels.first().map(String::as_str), Some("1. Search for a book by title"));
        assert_eq!(labels.last().map(String::as_str), Some("8. Exit"));
        assert_eq!(labels.len(), 8);
    }
}
