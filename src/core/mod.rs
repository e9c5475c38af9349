// Core module
// Data model shared by the builders, the badge controller and the strip

pub mod color;
pub mod composite_view;
pub mod diagnostics;
pub mod style;
pub mod tab;

pub use color::{ColorResolver, Theme, TwoStateColor, NEUTRAL_COLOR};
pub use composite_view::{BadgeSlot, CompositeView, IconSlot, MaxWidth, TextSlot, ViewId, Visibility};
pub use diagnostics::{DiagnosticSink, RecordingSink, StripError, TracingSink};
pub use style::{Font, StyleConfig, TruncateAt, DEFAULT_TAB_TEXT_MAX_WIDTH};
pub use tab::{BasicTabStrip, Icon, Tab, TabStrip};
