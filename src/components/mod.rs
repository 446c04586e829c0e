pub mod post_card;
pub mod post_modal;
pub mod sidebar;
pub mod snackbar;
pub mod topbar;
pub mod user_card;
pub mod user_modal;
