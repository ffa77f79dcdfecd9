//! SDK entry points and builder for composing the pack explorer app.

use bevy::log::LogPlugin;
use bevy::prelude::*;

use crate::camera::orbit_camera_plugin;
use crate::config::{self, ViewerConfig};
use crate::geometry::{ColorSource, RandomColors};
use crate::render::{ColorSourceResource, PackingRenderer, RendererResource, WiresAndBoxesRenderer};
use crate::scene::{
    import_plugin, screenshot_plugin, setup_scene, view_plugin, PendingSelection, ScreenshotMode,
    StartupImport, ViewSettings,
};
use crate::ui::{controls_plugin, hud_plugin};

const SCREENSHOT_DELAY_FRAMES: u32 = 30;

/// Builder for constructing a packviz app with customizable plugins.
pub struct PackExplorerBuilder {
    config: Option<ViewerConfig>,
    renderer: Option<Box<dyn PackingRenderer>>,
    colors: Option<Box<dyn ColorSource>>,
    view_settings: ViewSettings,
    window_title: String,
    window_resolution: (f32, f32),
    enable_orbit_camera: bool,
    enable_controls: bool,
    enable_hud: bool,
}

impl Default for PackExplorerBuilder {
    fn default() -> Self {
        Self {
            config: None,
            renderer: None,
            colors: None,
            view_settings: ViewSettings::default(),
            window_title: "packviz".to_string(),
            window_resolution: (1280.0, 720.0),
            enable_orbit_camera: true,
            enable_controls: true,
            enable_hud: true,
        }
    }
}

impl PackExplorerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit viewer configuration instead of the environment.
    pub fn config(mut self, config: ViewerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Provide a custom packing renderer implementation.
    pub fn renderer(mut self, renderer: impl PackingRenderer) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Provide the block color source. Overrides the configured seed.
    pub fn colors(mut self, colors: impl ColorSource) -> Self {
        self.colors = Some(Box::new(colors));
        self
    }

    pub fn view_settings(mut self, settings: ViewSettings) -> Self {
        self.view_settings = settings;
        self
    }

    pub fn window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn window_resolution(mut self, width: f32, height: f32) -> Self {
        self.window_resolution = (width, height);
        self
    }

    pub fn disable_orbit_camera(mut self) -> Self {
        self.enable_orbit_camera = false;
        self
    }

    pub fn disable_controls(mut self) -> Self {
        self.enable_controls = false;
        self
    }

    pub fn disable_hud(mut self) -> Self {
        self.enable_hud = false;
        self
    }

    /// Build the Bevy app with the selected configuration and plugins.
    pub fn build(self) -> App {
        let config = self.config.unwrap_or_else(config::viewer_config);
        let renderer = self
            .renderer
            .unwrap_or_else(|| Box::new(WiresAndBoxesRenderer));
        let colors = self.colors.unwrap_or_else(|| match config.color_seed {
            Some(seed) => Box::new(RandomColors::seeded(seed)),
            None => Box::new(RandomColors::from_entropy()),
        });

        let mut app = App::new();
        app.add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: self.window_title,
                        resolution: self.window_resolution.into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    filter: config.log_filter.clone(),
                    ..default()
                }),
        )
        .insert_resource(ClearColor(self.view_settings.background))
        .insert_resource(self.view_settings)
        .insert_resource(ColorSourceResource(colors))
        .insert_resource(StartupImport(config.result_path.clone()))
        .insert_resource(PendingSelection(config.initial_selection))
        .add_plugins((view_plugin, import_plugin))
        .add_systems(Startup, setup_scene);

        renderer.setup(&mut app);
        app.insert_resource(RendererResource(renderer));

        if self.enable_orbit_camera {
            app.add_plugins(orbit_camera_plugin);
        }
        if self.enable_controls {
            app.add_plugins(controls_plugin);
        }
        if self.enable_hud {
            app.add_plugins(hud_plugin);
        }
        if let Some(path) = config.screenshot_path {
            app.insert_resource(ScreenshotMode::new(path, SCREENSHOT_DELAY_FRAMES))
                .add_plugins(screenshot_plugin);
        }

        app
    }
}
