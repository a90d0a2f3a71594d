pub mod sessions;
pub mod users;

pub use sessions::SessionRow;
pub use users::UserRow;
