pub mod courses;
pub mod docs;
pub mod search;

pub use courses::*;
pub use docs::*;
pub use search::*;
