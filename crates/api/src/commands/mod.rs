//! Commands - frontend to backend bridge

mod dashboards;
mod interfaces;
mod overview;
mod sync;

pub use dashboards::*;
pub use interfaces::*;
pub use overview::*;
pub use sync::*;
