//! UI components for the Boardly topbar.

mod logo;
mod profile_menu;
mod topbar;

pub use logo::Logo;
pub use profile_menu::ProfileMenu;
pub use topbar::{Topbar, use_topbar_model};
