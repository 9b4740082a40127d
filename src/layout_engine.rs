pub mod actions;
pub mod cycle;
pub mod engine;
mod fourths;
mod fractional;
pub mod grid;
mod moves;
mod resize;
pub mod sixths;
pub mod utils;

pub use actions::{Action, Axis, BandKind, Direction, SubAction};
pub use cycle::{CycleSize, CycleSizes};
pub use engine::{
    ActionRecord, HistoryStore, LayoutEngine, RectResult, ResolveRequest, WindowId, WindowState,
};
pub use grid::GridType;
pub use sixths::SixthsSpan;
