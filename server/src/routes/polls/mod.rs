mod detail;
mod index;
mod pages;
mod results;
mod vote;

pub use self::detail::*;
pub use self::index::*;
pub use self::pages::*;
pub use self::results::*;
pub use self::vote::*;
