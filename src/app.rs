use std::path::PathBuf;

use crate::export::{DrawActions, ExportDependencies, PromptQueue};
use crate::navigation::{ScreenOptions, StackNavigator};
use crate::screen::{DrawProps, DrawScreen};
use crate::settings::Settings;
use crate::sketch::SketchSaveEvent;

pub const HOME_ROUTE: &str = "Home";

/// Startup choices that are not persisted.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub background: Option<PathBuf>,
    pub require_permission: bool,
    pub library_dir: Option<PathBuf>,
}

/// Only `settings` is persisted; the sketch itself is not kept between runs.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct SketchApp {
    settings: Settings,
    #[serde(skip)]
    navigator: Option<StackNavigator>,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            navigator: None,
        }
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, launch: LaunchOptions) -> Self {
        let mut settings: Settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<SketchApp>(storage, eframe::APP_KEY))
            .map(|app| app.settings)
            .unwrap_or_default();
        if launch.require_permission {
            settings.require_storage_permission = true;
        }
        if launch.library_dir.is_some() {
            settings.library_directory = launch.library_dir.clone();
        }
        Self::with_settings(settings, launch.background)
    }

    pub fn with_settings(settings: Settings, background: Option<PathBuf>) -> Self {
        let settings = settings.sanitized();
        log::info!("Starting with settings: {:?}", settings);

        let library = settings.library_config();
        if library.is_none() {
            log::warn!("No pictures directory found; saving to the photo library will fail");
        }
        let prompts = PromptQueue::new();
        let deps = ExportDependencies::desktop(settings.capture_options(), library, prompts.clone());
        let actions = DrawActions::new(deps, settings.require_storage_permission);

        let props = DrawProps {
            local_source_image_path: background,
            on_save: Some(Box::new(|event: &SketchSaveEvent| {
                log::info!("Sketch exported: {} ({}x{})", event.path.display(), event.width, event.height);
            })),
            sketch_directory: settings.capture_directory.clone(),
        };
        let screen = DrawScreen::new(&settings, props, actions, prompts);
        let navigator = StackNavigator::new(HOME_ROUTE).screen(
            HOME_ROUTE,
            Box::new(screen),
            ScreenOptions { header_shown: false },
        );

        Self {
            settings,
            navigator: Some(navigator),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn current_route(&self) -> Option<&'static str> {
        self.navigator.as_ref().and_then(|nav| nav.current_route())
    }
}

impl eframe::App for SketchApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(navigator) = &mut self.navigator {
            navigator.ui(ctx);
        }
    }
}
