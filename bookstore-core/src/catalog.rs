use crate::model::{Book, BookId, Price};

/// Ordered, append-only list of books available in the store.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a book and return its handle.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        price: Price,
        stock: u32,
    ) -> BookId {
        let id = BookId(self.books.len());
        self.books
            .push(Book::new(id, title.into(), author.into(), price, stock));
        id
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.get(id.0)
    }

    pub fn get_mut(&mut self, id: BookId) -> Option<&mut Book> {
        self.books.get_mut(id.0)
    }

    /// First book whose full title matches, ignoring case.
    pub fn find_by_title(&self, title: &str) -> Option<&Book> {
        let title = title.to_lowercase();
        self.books.iter().find(|b| b.title().to_lowercase() == title)
    }

    /// All books whose full author name matches, ignoring case, in catalog order.
    pub fn find_by_author(&self, author: &str) -> Vec<&Book> {
        let author = author.to_lowercase();
        self.books
            .iter()
            .filter(|b| b.author().to_lowercase() == author)
            .collect()
    }

    pub fn list_all(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
