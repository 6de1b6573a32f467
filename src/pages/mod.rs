pub mod directory;
pub mod help;

pub use directory::*;
pub use help::*;
