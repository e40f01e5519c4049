pub mod auth;
pub mod comments;
pub mod likes;
pub mod posts;
pub mod users;

pub use auth::login;
pub use comments::add_comment;
pub use likes::toggle_like;
pub use posts::{create_post, list_posts};
pub use users::register;
