//! State Management Layer
//!
//! Session-scoped application state held in GPUI entities. UI actions call
//! state methods; observers re-render on notify.

mod app_state;
mod contact_state;

pub use app_state::*;
pub use contact_state::*;
