//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`users`, `posts`, `ui`) so individual
//! components can depend on small focused models. The structs are plain
//! data; pages wrap them in `RwSignal`s provided via context.

pub mod posts;
pub mod ui;
pub mod users;
