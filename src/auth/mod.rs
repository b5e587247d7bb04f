pub mod claims;
pub mod jwt;

pub use claims::SessionClaims;
pub use jwt::validate_jwt;
