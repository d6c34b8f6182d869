pub mod author;
pub mod text;

pub use author::{friendly_author_name, initials, AuthorId};
pub use text::{collapse_opt, collapse_whitespace};
