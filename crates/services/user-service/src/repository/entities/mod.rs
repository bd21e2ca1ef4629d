//! Document models stored in MongoDB.

pub mod user;

pub use user::UserDocument;
