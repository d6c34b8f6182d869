//! Bearer token handling.
//!
//! Tokens are treated as opaque credentials; only the claims segment is
//! read, and only for display and conditional UI decisions. Nothing here
//! verifies signatures — the server is the authority on token validity.

pub mod claims;

pub use claims::{
    bearer_value, decode_claims, extract_bearer_token, user_id_from_token, ClaimId, TokenClaims,
};
