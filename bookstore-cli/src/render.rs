use bookstore_core::{Book, Cart, Catalog};

pub fn catalog_listing(catalog: &Catalog) -> String {
    if catalog.is_empty() {
        return "No books available.".to_string();
    }
    lines(catalog.list_all())
}

pub fn author_results(books: &[&Book]) -> String {
    if books.is_empty() {
        return "No books found by this author.".to_string();
    }
    format!("Books found:\n{}", lines(books.iter().copied()))
}

pub fn cart_report(cart: &Cart, catalog: &Catalog) -> String {
    if cart.is_empty() {
        return "Your cart is empty.".to_string();
    }

    let lines = cart
        .lines(catalog)
        .map(|(book, quantity)| {
            format!("{} - {} book(s) at {} each", book.title(), quantity, book.price())
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("Your cart contains:\n{lines}\nTotal cost: {}", cart.total(catalog))
}

fn lines<'a>(books: impl IntoIterator<Item = &'a Book>) -> String {
    books
        .into_iter()
        .map(Book::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_core::Price;
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add("War and Peace", "Leo Tolstoy", Price::from_cents(1999), 10);
        catalog.add("Ulysses", "James Joyce", Price::from_cents(1299), 2);
        catalog
    }

    #[test]
    fn empty_catalog_message() {
        assert_eq!(catalog_listing(&Catalog::new()), "No books available.");
    }

    #[test]
    fn catalog_one_book_per_line() {
        assert_eq!(
            catalog_listing(&catalog()),
            "Title: War and Peace, Author: Leo Tolstoy, Price: $19.99, Stock: 10\n\
             Title: Ulysses, Author: James Joyce, Price: $12.99, Stock: 2"
        );
    }

    #[test]
    fn author_results_with_and_without_matches() {
        let catalog = catalog();

        assert_eq!(
            author_results(&catalog.find_by_author("james joyce")),
            "Books found:\nTitle: Ulysses, Author: James Joyce, Price: $12.99, Stock: 2"
        );
        assert_eq!(author_results(&[]), "No books found by this author.");
    }

    #[test]
    fn cart_report_lists_lines_and_total() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(catalog.find_by_title("Ulysses").unwrap().id(), 2);
        cart.add(catalog.find_by_title("War and Peace").unwrap().id(), 1);

        assert_eq!(
            cart_report(&cart, &catalog),
            "Your cart contains:\n\
             Ulysses - 2 book(s) at $12.99 each\n\
             War and Peace - 1 book(s) at $19.99 each\n\
             Total cost: $45.97"
        );
    }

    #[test]
    fn empty_cart_message() {
        assert_eq!(cart_report(&Cart::new(), &catalog()), "Your cart is empty.");
    }
}
