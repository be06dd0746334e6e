// ============================================================================
// DOM MODULE - Helpers para manipulación DOM
// ============================================================================

pub mod element;
pub mod builder;
pub mod events;
pub mod incremental;
pub mod navigation;

pub use element::*;
pub use builder::*;
pub use events::*;
pub use incremental::*;
pub use navigation::*;
