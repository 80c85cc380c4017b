pub mod books;
pub mod errors;
