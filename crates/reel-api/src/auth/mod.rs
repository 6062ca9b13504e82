pub mod bearer;
pub mod jwt;
pub mod models;

pub use bearer::bearer_token;
pub use jwt::{IdentityVerifier, JwtVerifier};
pub use models::{Caller, JwtClaims};
