pub mod helper_footer;
pub mod profile_modal;

pub use helper_footer::*;
pub use profile_modal::*;
