pub mod func_animation;
pub mod pipeline;
pub mod scene;
pub mod schedule;

// Re-export commonly used types and functions for convenience
pub use func_animation::FuncAnimation;
pub use pipeline::{plan, render_catalog, run, RenderSummary};
pub use scene::{FrameInfo, Scene};
pub use schedule::FrameSchedule;
