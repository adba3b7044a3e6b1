pub mod wishes;
