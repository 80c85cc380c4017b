use crate::models::book::BookRecord;
use crate::search_client::state::SearchState;

pub const FAVORITE_MARKER: char = '★';
pub const NOT_FAVORITE_MARKER: char = '☆';

fn is_favorite(book: &BookRecord, favorites: &[BookRecord]) -> bool {
    favorites.iter().any(|fav| fav.is_same_book(book))
}

pub fn render_book(index: usize, book: &BookRecord, favorite: bool) -> String {
    let marker = if favorite { FAVORITE_MARKER } else { NOT_FAVORITE_MARKER };
    let line = format!("{:>3}. {} {}  著：{}", index + 1, marker, book.title, book.authors_line());
    if book.thumbnail.is_empty() {
        line
    } else {
        format!("{}  <{}>", line, book.thumbnail)
    }
}

pub fn render_results(state: &SearchState, favorites: &[BookRecord]) -> String {
    let mut out = String::from("Results\n");
    if let Some(error) = state.error() {
        out.push_str(&format!("  ! {}\n", error));
    }
    for (index, book) in state.books().iter().enumerate() {
        out.push_str(&render_book(index, book, is_favorite(book, favorites)));
        out.push('\n');
    }
    if !state.books().is_empty() {
        out.push_str("  (more: load more results)\n");
    }
    out
}

pub fn render_favorites(favorites: &[BookRecord]) -> String {
    let mut out = String::from("Favorites\n");
    for (index, book) in favorites.iter().enumerate() {
        out.push_str(&render_book(index, book, true));
        out.push('\n');
    }
    out
}

pub fn render(state: &SearchState, favorites: &[BookRecord]) -> String {
    format!("{}\n{}", render_results(state, favorites), render_favorites(favorites))
}
