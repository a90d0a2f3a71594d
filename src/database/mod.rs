pub mod feed_repo;
pub mod friendship_repo;
pub mod relationship_repo;
pub mod session_repo;
pub mod user_repo;
