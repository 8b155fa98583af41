pub mod app;
pub mod garden_view;
pub mod intro_overlay;
pub mod paint_controls;
pub mod settings_modal;
pub mod stats_panel;
pub mod tool_palette;
