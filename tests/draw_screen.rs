mod common;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use egui::{Color32, pos2};
use image::{Rgba, RgbaImage};

use common::Mocks;
use sketchpad::alert::Alert;
use sketchpad::export::{DialogPermission, DrawActions, ExportDependencies, PermissionStatus, PromptQueue};
use sketchpad::palette::COLORS;
use sketchpad::screen::Action;
use sketchpad::{DrawProps, DrawScreen, Screen, Settings, SketchSaveEvent, Tool};

fn screen_with(mocks: &Mocks) -> DrawScreen {
    DrawScreen::new(&Settings::default(), DrawProps::default(), mocks.actions(), PromptQueue::new())
}

/// A screen whose Save asks through the rationale dialog.
fn screen_with_dialog(mocks: &Mocks) -> (DrawScreen, PromptQueue) {
    let prompts = PromptQueue::new();
    let deps = ExportDependencies {
        permission: Arc::new(DialogPermission::new(prompts.clone())),
        ..mocks.dependencies()
    };
    let actions = DrawActions::new(deps, true);
    let screen = DrawScreen::new(&Settings::default(), DrawProps::default(), actions, prompts.clone());
    (screen, prompts)
}

fn wait_for_prompt(prompts: &PromptQueue) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while prompts.is_empty() && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(5));
    }
    assert!(!prompts.is_empty(), "no permission prompt appeared");
}

fn run_frame(ctx: &egui::Context, screen: &mut DrawScreen) {
    let input = egui::RawInput {
        screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(420.0, 760.0))),
        ..Default::default()
    };
    let _ = ctx.run(input, |ctx| screen.ui(ctx));
}

#[test]
fn test_toggle_tool_alternates() {
    let mut screen = screen_with(&Mocks::default());
    assert_eq!(screen.tool(), Tool::Pen);
    assert!(!screen.is_eraser_tool_selected());

    screen.toggle_tool();
    assert_eq!(screen.tool(), Tool::Eraser);
    assert!(screen.is_eraser_tool_selected());
    assert_eq!(screen.tool_name(), "Eraser");

    screen.toggle_tool();
    assert_eq!(screen.tool(), Tool::Pen);
}

#[test]
fn test_select_color_sets_pen_color() {
    let mut screen = screen_with(&Mocks::default());
    assert_eq!(screen.pen_color(), Color32::BLACK);
    for (i, color) in COLORS.iter().enumerate() {
        assert!(screen.select_color(i));
        assert_eq!(screen.pen_color(), *color);
        assert_eq!(screen.palette().selected_index(), i);
    }
    assert!(!screen.select_color(COLORS.len()));
    assert_eq!(screen.pen_color(), COLORS[COLORS.len() - 1]);
}

#[test]
fn test_clear_keeps_tool_and_color() {
    let mut screen = screen_with(&Mocks::default());
    screen.toggle_tool();
    screen.select_color(7);
    screen.canvas_mut().begin_stroke(Tool::Pen, Color32::RED, pos2(5.0, 5.0));
    screen.canvas_mut().end_stroke();

    screen.clear();

    assert!(screen.canvas().document().is_empty());
    assert_eq!(screen.tool(), Tool::Eraser);
    assert_eq!(screen.palette().selected_index(), 7);
}

#[test]
fn test_save_shows_success_alert() {
    let mocks = Mocks::default();
    let mut screen = screen_with(&mocks);

    screen.save_image();
    screen.wait_for_exports();

    assert_eq!(mocks.calls(), vec!["capture", "library"]);
    assert_eq!(screen.alerts().current(), Some(&Alert::image_saved()));
    assert_eq!(screen.exports_in_flight(), 0);
}

#[test]
fn test_denied_save_shows_permission_alert() {
    let mocks = Mocks {
        permission_required: true,
        permission: Some(PermissionStatus::Denied),
        ..Default::default()
    };
    let mut screen = screen_with(&mocks);

    screen.save_image();
    screen.wait_for_exports();

    assert_eq!(mocks.calls(), vec!["permission"]);
    assert_eq!(screen.alerts().current(), Some(&Alert::permission_required()));
}

#[test]
fn test_share_has_no_alert_even_on_failure() {
    let mocks = Mocks {
        share_fails: true,
        ..Default::default()
    };
    let mut screen = screen_with(&mocks);
    screen.toggle_tool();
    screen.select_color(3);

    screen.share_image();
    screen.wait_for_exports();

    assert_eq!(mocks.calls(), vec!["capture", "share"]);
    assert!(screen.alerts().is_empty());
}

#[test]
fn test_save_and_share_may_run_together() {
    let mocks = Mocks::default();
    let mut screen = screen_with(&mocks);

    screen.save_image();
    screen.share_image();
    screen.wait_for_exports();

    let mut calls = mocks.calls();
    calls.sort();
    assert_eq!(calls, vec!["capture", "capture", "library", "share"]);
    assert_eq!(screen.alerts().len(), 1);
}

#[test]
fn test_rationale_dialog_answer_drives_save() {
    let mocks = Mocks::default();
    let (mut screen, prompts) = screen_with_dialog(&mocks);

    screen.save_image();
    wait_for_prompt(&prompts);
    assert_eq!(prompts.current().map(|r| r.title), Some("Image Download Permission".to_owned()));
    assert!(prompts.respond(PermissionStatus::Granted));
    screen.wait_for_exports();

    assert_eq!(mocks.calls(), vec!["capture", "library"]);
    assert_eq!(screen.alerts().current(), Some(&Alert::image_saved()));
}

#[test]
fn test_sketch_save_event_reaches_owner() {
    let seen: Rc<RefCell<Vec<SketchSaveEvent>>> = Rc::default();
    let sink = seen.clone();
    let props = DrawProps {
        on_save: Some(Box::new(move |event: &SketchSaveEvent| sink.borrow_mut().push(event.clone()))),
        ..Default::default()
    };
    let mut screen = DrawScreen::new(&Settings::default(), props, Mocks::default().actions(), PromptQueue::new());

    let dir = tempfile::tempdir().unwrap();
    let event = screen.canvas_mut().save_sketch(dir.path()).unwrap();
    screen.on_sketch_save(&event);

    assert_eq!(seen.borrow().as_slice(), &[event]);
}

#[test]
fn test_strokes_drawn_while_prompt_is_open_are_saved() {
    let mocks = Mocks::default();
    let (mut screen, prompts) = screen_with_dialog(&mocks);

    screen.save_image();
    wait_for_prompt(&prompts);
    screen.canvas_mut().begin_stroke(Tool::Pen, Color32::BLACK, pos2(25.0, 25.0));
    screen.canvas_mut().end_stroke();
    assert!(prompts.respond(PermissionStatus::Granted));
    screen.wait_for_exports();

    let views = mocks.captured_views();
    assert_eq!(views.len(), 1);
    assert_eq!(*views[0].pixels().get_pixel(25, 25), Rgba([0, 0, 0, 255]));
}

#[test]
fn test_eraser_button_highlight_follows_tool() {
    let mut screen = screen_with(&Mocks::default());
    let highlighted = |screen: &DrawScreen| -> Vec<&'static str> {
        screen
            .action_bar()
            .iter()
            .filter(|(_, on)| *on)
            .map(|(action, _)| action.label())
            .collect()
    };
    assert_eq!(
        screen.action_bar().map(|(action, _)| action.label()),
        ["CLEAR", "SAVE", "ERASER", "Share"]
    );
    assert!(highlighted(&screen).is_empty());

    screen.toggle_tool();
    assert_eq!(highlighted(&screen), vec!["ERASER"]);

    screen.apply(Action::ToggleTool);
    assert!(highlighted(&screen).is_empty());
    assert_eq!(screen.tool(), Tool::Pen);
}

#[test]
fn test_background_from_props_reaches_canvas() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("background.png");
    RgbaImage::from_pixel(8, 8, Rgba([255, 0, 0, 255])).save(&path).unwrap();

    let props = DrawProps {
        local_source_image_path: Some(path),
        ..Default::default()
    };
    let mut screen = DrawScreen::new(&Settings::default(), props, Mocks::default().actions(), PromptQueue::new());

    let background = screen.canvas().document().background().expect("background loaded");
    assert_eq!(background.pixels().dimensions(), (8, 8));
    // Square image letterboxed into the 360x640 fallback canvas.
    let snapshot = screen.canvas_mut().snapshot();
    assert_eq!(*snapshot.pixels().get_pixel(180, 320), Rgba([255, 0, 0, 255]));
    assert_eq!(*snapshot.pixels().get_pixel(180, 10), Rgba([255, 255, 255, 255]));
}

#[test]
fn test_dialog_state_while_export_is_pending() {
    let mocks = Mocks {
        permission: Some(PermissionStatus::Denied),
        ..Default::default()
    };
    let (mut screen, prompts) = screen_with_dialog(&mocks);
    assert!(!screen.dialog_open());

    screen.save_image();
    wait_for_prompt(&prompts);
    assert!(screen.dialog_open());
    assert_eq!(screen.exports_in_flight(), 1);
    assert!(screen.alerts().is_empty());

    assert!(prompts.respond(PermissionStatus::Denied));
    screen.wait_for_exports();
    assert!(screen.dialog_open());
    assert_eq!(screen.alerts().current(), Some(&Alert::permission_required()));
    assert!(mocks.calls().is_empty());

    screen.acknowledge_alert();
    assert!(!screen.dialog_open());
}

#[test]
fn test_frames_keep_prompt_until_answered() {
    let mocks = Mocks::default();
    let (mut screen, prompts) = screen_with_dialog(&mocks);
    let ctx = egui::Context::default();
    run_frame(&ctx, &mut screen);

    screen.save_image();
    wait_for_prompt(&prompts);
    for _ in 0..3 {
        run_frame(&ctx, &mut screen);
    }
    assert!(!prompts.is_empty());
    assert_eq!(screen.exports_in_flight(), 1);

    assert!(prompts.respond(PermissionStatus::Granted));
    let deadline = Instant::now() + Duration::from_secs(5);
    while screen.exports_in_flight() > 0 && Instant::now() < deadline {
        run_frame(&ctx, &mut screen);
        std::thread::sleep(Duration::from_millis(5));
    }
    assert_eq!(mocks.calls(), vec!["capture", "library"]);
    assert_eq!(screen.alerts().current(), Some(&Alert::image_saved()));
    // The canvas was laid out by the frames, so that is what got captured.
    let views = mocks.captured_views();
    assert_eq!(views.len(), 1);
    assert_ne!(views[0].width(), 360);
}
