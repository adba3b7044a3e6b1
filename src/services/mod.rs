pub mod wish_service;
