pub mod analyze;
pub mod health;
pub mod pages;
pub mod players;

pub use analyze::*;
pub use health::*;
pub use pages::*;
pub use players::*;
