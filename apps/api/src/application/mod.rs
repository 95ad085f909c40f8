pub mod accounts;
pub mod browse_content;
pub mod interaction;
pub mod manage_content;
