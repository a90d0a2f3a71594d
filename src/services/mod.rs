pub mod feed_service;
pub mod friendship_service;
pub mod photo_service;
pub mod relationship_service;
pub mod session_service;
pub mod user_service;
