pub mod content;
pub mod identity;
pub mod shared;
pub mod social;
