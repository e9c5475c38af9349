// Badged Tabs Library
// Terminal tab strip whose tabs carry an optional badge next to the title

// Core data model - colors, style, tabs, composite views, diagnostics
pub mod core;

// Render surface and line rendering
pub mod elements;

// Builders, badge control, configuration and the strip widget
pub mod managers;

// Color parsing and text fitting helpers
pub mod utilities;

// Re-export commonly used items for convenience
pub use core::{
    BasicTabStrip, ColorResolver, CompositeView, DiagnosticSink, Font, Icon, MaxWidth,
    RecordingSink, StripError, StyleConfig, Tab, TabStrip, Theme, TracingSink, TruncateAt,
    TwoStateColor, Visibility,
};
pub use elements::{RenderSurface, TerminalSurface};
pub use managers::{BadgeController, BadgedTabStrip, StripConfigYaml, TabViewBuilder};
