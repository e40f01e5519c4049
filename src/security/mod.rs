/// Security utilities: login token generation
pub mod token;

pub use token::generate_token;
