//! Storage access for the wish list. Every function is generic over
//! `ConnectionTrait` so it runs on the pool or inside an open transaction.

pub mod products;
pub mod users;
pub mod wishes;
