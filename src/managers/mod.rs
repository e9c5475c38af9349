// Managers module
// View building, badge control, configuration and the badged strip itself

pub mod badge_controller;
pub mod badged_tab_strip;
pub mod strip_config;
pub mod tab_view_builder;

pub use badge_controller::BadgeController;
pub use badged_tab_strip::BadgedTabStrip;
pub use strip_config::{
    convert_strip_config, convert_style_config, convert_theme, create_tabs, load_config,
    parse_config, StripConfigYaml, StripSettings, TabConfigYaml, ThemeYaml, TwoStateColorYaml,
};
pub use tab_view_builder::TabViewBuilder;
