// Layout engine.
// Implements: fixed-capacity pagination, three-region distribution, worksheet layout plan.

pub mod pagination;
pub mod paper;
pub mod worksheet;

// Re-export the public API consumed by the handlers.
pub use worksheet::{build_layout, LayoutOptions, WorksheetLayout};
