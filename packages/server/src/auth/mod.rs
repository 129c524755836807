//! Authentication: session tokens and the request extractor.

pub mod extractor;
pub mod jwt;

pub use extractor::AuthUser;
pub use jwt::{Claims, JwtService};
