use bookstore_core::{Account, Bookstore, Cart, Catalog, Config, Price, StoreError};
use pretty_assertions::assert_eq;

#[test]
fn over_removal_empties_cart() {
    let mut catalog = Catalog::new();
    let ulysses = catalog.add("Ulysses", "James Joyce", Price::from_cents(1299), 2);
    let mut cart = Cart::new();

    cart.add(ulysses, 2);
    cart.remove(ulysses, 3);

    assert!(cart.is_empty());
    assert_eq!(cart.total(&catalog).to_string(), "$0.00");
}

#[test]
fn default_credentials() {
    let config = Config::default();
    let store = Bookstore::from_config(&config).unwrap();
    let directory = store.directory();

    assert!(Account::authenticate("admin", "admin123", directory));
    assert!(!Account::authenticate("admin", "wrong", directory));
    assert!(!Account::authenticate("nobody", "admin123", directory));
}

#[test]
fn full_session_keeps_stock_and_cart_in_step() {
    let mut store = Bookstore::from_config(&Config::default()).unwrap();
    let mut session = store.login("admin", "admin123").unwrap();

    store.add_to_cart(&mut session, "The Great Gatsby", 2).unwrap();
    store.add_to_cart(&mut session, "ulysses", 2).unwrap();
    store.add_to_cart(&mut session, "The Great Gatsby", 1).unwrap();

    let err = store.add_to_cart(&mut session, "Ulysses", 1).unwrap_err();
    assert!(matches!(err, StoreError::InsufficientStock { available: 0, .. }));

    assert_eq!(store.remove_from_cart(&mut session, "The Great Gatsby", 1).unwrap(), 1);

    let lines: Vec<_> = session
        .cart()
        .lines(store.catalog())
        .map(|(book, qty)| (book.title().to_string(), qty, book.stock()))
        .collect();
    assert_eq!(
        lines,
        vec![
            ("The Great Gatsby".to_string(), 2, 3),
            ("Ulysses".to_string(), 2, 0),
        ]
    );
    assert_eq!(store.cart_total(&session), Price::from_cents(2 * 1599 + 2 * 1299));

    store.change_password(&session, "new-pass").unwrap();
    assert!(store.login("admin", "new-pass").is_ok());
}

#[test]
fn author_search_over_default_catalog() {
    let store = Bookstore::from_config(&Config::default()).unwrap();

    let found: Vec<_> = store
        .catalog()
        .find_by_author("leo tolstoy")
        .into_iter()
        .map(|b| b.title())
        .collect();

    assert_eq!(found, vec!["War and Peace"]);
    assert!(store.catalog().find_by_author("Tolstoy").is_empty());
}
