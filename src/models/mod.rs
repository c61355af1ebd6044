pub mod detail;
pub mod listing;
pub mod pokemon;
pub mod species;

pub use detail::*;
pub use listing::*;
pub use pokemon::*;
pub use species::*;
