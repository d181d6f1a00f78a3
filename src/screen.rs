//! The draw screen: canvas, palette and action bar.

use std::path::PathBuf;

use egui::Color32;

use crate::alert::{self, Alert, AlertQueue};
use crate::components::{ActionButton, Swatch};
use crate::export::{DrawActions, ExportJobs, JobResult, PromptQueue, ViewRequests};
use crate::navigation::Screen;
use crate::palette::Palette;
use crate::settings::Settings;
use crate::sketch::{SketchCanvas, SketchSaveEvent};
use crate::tool::Tool;

const ACTION_BAR_FILL: Color32 = Color32::from_rgb(0xee, 0xee, 0xee);
const ACTION_BAR_DIVIDER: Color32 = Color32::from_rgb(0xdd, 0xdd, 0xdd);

pub type SaveCallback = Box<dyn FnMut(&SketchSaveEvent)>;

/// What the owner of the screen passes in.
#[derive(Default)]
pub struct DrawProps {
    /// Image drawn beneath the strokes.
    pub local_source_image_path: Option<PathBuf>,
    /// Called when the sketch widget saves itself.
    pub on_save: Option<SaveCallback>,
    /// Where the widget's own saves go. Temp dir when unset.
    pub sketch_directory: Option<PathBuf>,
}

/// The buttons of the action bar, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Clear,
    Save,
    ToggleTool,
    Share,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Clear, Action::Save, Action::ToggleTool, Action::Share];

    pub fn label(self) -> &'static str {
        match self {
            Action::Clear => "CLEAR",
            Action::Save => "SAVE",
            Action::ToggleTool => "ERASER",
            Action::Share => "Share",
        }
    }
}

pub struct DrawScreen {
    tool: Tool,
    palette: Palette,
    canvas: SketchCanvas,
    actions: DrawActions,
    jobs: ExportJobs,
    alerts: AlertQueue,
    prompts: PromptQueue,
    views: ViewRequests,
    on_save: Option<SaveCallback>,
    sketch_directory: PathBuf,
    ctx: Option<egui::Context>,
}

impl DrawScreen {
    pub fn new(settings: &Settings, props: DrawProps, actions: DrawActions, prompts: PromptQueue) -> Self {
        let mut canvas = SketchCanvas::new(settings.pen_width, settings.eraser_width);
        if let Some(path) = props.local_source_image_path.as_deref() {
            canvas.set_background_path(Some(path));
        }
        Self {
            tool: Tool::default(),
            palette: Palette::default(),
            canvas,
            actions,
            jobs: ExportJobs::new(),
            alerts: AlertQueue::default(),
            prompts,
            views: ViewRequests::new(),
            on_save: props.on_save,
            sketch_directory: props.sketch_directory.unwrap_or_else(std::env::temp_dir),
            ctx: None,
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn tool_name(&self) -> &'static str {
        self.tool.name()
    }

    pub fn is_eraser_tool_selected(&self) -> bool {
        self.tool.is_eraser()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn pen_color(&self) -> Color32 {
        self.palette.selected_color()
    }

    pub fn canvas(&self) -> &SketchCanvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut SketchCanvas {
        &mut self.canvas
    }

    pub fn alerts(&self) -> &AlertQueue {
        &self.alerts
    }

    pub fn prompts(&self) -> &PromptQueue {
        &self.prompts
    }

    pub fn exports_in_flight(&self) -> usize {
        self.jobs.in_flight()
    }

    /// True while a rationale prompt or an alert is waiting for the user.
    /// The canvas and the action bar ignore input meanwhile.
    pub fn dialog_open(&self) -> bool {
        !self.prompts.is_empty() || !self.alerts.is_empty()
    }

    /// Each action bar button with whether it is highlighted.
    pub fn action_bar(&self) -> [(Action, bool); 4] {
        Action::ALL.map(|action| (action, action == Action::ToggleTool && self.is_eraser_tool_selected()))
    }

    pub fn toggle_tool(&mut self) {
        self.tool = self.tool.next();
        log::info!("Tool changed to {}", self.tool.name());
    }

    /// Select the pen color at `index`. Out-of-range indices are ignored.
    pub fn select_color(&mut self, index: usize) -> bool {
        self.palette.select(index)
    }

    pub fn clear(&mut self) {
        self.canvas.clear();
    }

    /// Start a Save. The canvas is captured once permission is granted.
    pub fn save_image(&mut self) {
        log::info!("Saving sketch");
        let actions = self.actions.clone();
        let views = self.views.clone();
        self.jobs.spawn("save", self.ctx.clone(), async move {
            JobResult::Save(actions.save(&views).await)
        });
    }

    pub fn share_image(&mut self) {
        log::info!("Sharing sketch");
        let actions = self.actions.clone();
        let views = self.views.clone();
        self.jobs.spawn("share", self.ctx.clone(), async move {
            JobResult::Share(actions.share(&views).await)
        });
    }

    /// Dismiss the alert being shown.
    pub fn acknowledge_alert(&mut self) {
        self.alerts.dismiss();
    }

    /// Forward a save emitted by the sketch widget to the owner.
    pub fn on_sketch_save(&mut self, event: &SketchSaveEvent) {
        log::info!("Sketch saved itself to {}", event.path.display());
        if let Some(on_save) = &mut self.on_save {
            on_save(event);
        }
    }

    /// Hand the current view to exports waiting for it, then handle results
    /// of exports that have finished.
    pub fn poll_exports(&mut self) {
        let canvas = &mut self.canvas;
        self.views.answer_with(|| canvas.snapshot());
        for result in self.jobs.poll() {
            self.finish_export(result);
        }
    }

    /// Keep polling until every running export has finished.
    ///
    /// Exports waiting on a rationale prompt only finish once it is answered.
    pub fn wait_for_exports(&mut self) {
        while self.jobs.in_flight() > 0 {
            self.poll_exports();
            std::thread::sleep(std::time::Duration::from_millis(2));
        }
    }

    fn finish_export(&mut self, result: JobResult) {
        match result {
            JobResult::Save(outcome) => {
                if let Some(alert) = Alert::for_save(&outcome) {
                    self.alerts.push(alert);
                }
            }
            JobResult::Share(Ok(())) => log::info!("Sketch shared"),
            JobResult::Share(Err(err)) => log::error!("Sharing the sketch failed: {}", err),
        }
    }

    /// Run the action of an action bar button.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Clear => self.clear(),
            Action::Save => self.save_image(),
            Action::ToggleTool => self.toggle_tool(),
            Action::Share => self.share_image(),
        }
    }

    fn action_bar_ui(&self, ui: &mut egui::Ui) -> Option<Action> {
        let mut pressed = None;
        let buttons = self.action_bar();
        ui.spacing_mut().item_spacing = egui::Vec2::ZERO;
        ui.columns(buttons.len(), |columns| {
            for (column, (action, highlighted)) in columns.iter_mut().zip(buttons) {
                let response = ActionButton::new(action.label(), highlighted).show(column);
                let response = if action == Action::ToggleTool {
                    response.on_hover_text(format!("Current tool: {}", self.tool_name()))
                } else {
                    response
                };
                if response.clicked() {
                    pressed = Some(action);
                }
            }
        });

        // Dividers around SAVE.
        let rect = ui.min_rect();
        let cell = rect.width() / buttons.len() as f32;
        for x in [rect.left() + cell, rect.left() + cell * 2.0] {
            ui.painter().vline(x, rect.y_range(), egui::Stroke::new(1.0, ACTION_BAR_DIVIDER));
        }
        pressed
    }

    fn palette_ui(&mut self, ui: &mut egui::Ui) {
        let mut picked = None;
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(10.0, 10.0);
            for (index, color) in self.palette.colors().iter().enumerate() {
                let swatch = Swatch::new(*color, self.palette.is_selected(index));
                if swatch.show(ui).clicked() {
                    picked = Some(index);
                }
            }
        });
        if let Some(index) = picked {
            self.select_color(index);
        }
    }

    fn dialogs_ui(&mut self, ctx: &egui::Context) {
        if let Some(rationale) = self.prompts.current() {
            if let Some(answer) = alert::show_rationale(ctx, &rationale) {
                self.prompts.respond(answer);
            }
        } else if let Some(current) = self.alerts.current() {
            if alert::show_alert(ctx, current) {
                self.acknowledge_alert();
            }
        }
    }
}

impl Screen for DrawScreen {
    fn title(&self) -> &str {
        "Home"
    }

    fn ui(&mut self, ctx: &egui::Context) {
        if self.ctx.is_none() {
            self.ctx = Some(ctx.clone());
            self.prompts.attach(ctx);
            self.views.attach(ctx);
        }
        self.poll_exports();

        let blocked = self.dialog_open();
        if blocked && self.canvas.is_drawing() {
            self.canvas.end_stroke();
        }

        let action = egui::TopBottomPanel::bottom("action_bar")
            .frame(egui::Frame::none().fill(ACTION_BAR_FILL))
            .show_separator_line(false)
            .show(ctx, |ui| ui.add_enabled_ui(!blocked, |ui| self.action_bar_ui(ui)).inner)
            .inner;

        egui::TopBottomPanel::bottom("palette")
            .frame(egui::Frame::none().fill(Color32::WHITE).inner_margin(5.0))
            .show_separator_line(false)
            .show(ctx, |ui| self.palette_ui(ui));

        let saved = egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::WHITE))
            .show(ctx, |ui| {
                let (tool, color) = (self.tool, self.pen_color());
                let directory = self.sketch_directory.clone();
                ui.add_enabled_ui(!blocked, |ui| self.canvas.show(ui, tool, color, &directory).saved)
                    .inner
            })
            .inner;

        if let Some(event) = saved {
            self.on_sketch_save(&event);
        }
        if let Some(action) = action {
            self.apply(action);
        }
        self.dialogs_ui(ctx);
    }
}
