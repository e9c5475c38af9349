// GUI Elements module
// Render surface and the line renderer for the tab strip

pub mod surface;
pub mod tab_line;

pub use surface::{LayoutTransitions, RenderSurface, TerminalSurface, DEFAULT_TRANSITION};
pub use tab_line::{TabBounds, TabLine, TabLineItem, BADGE_MAX_WIDTH};
