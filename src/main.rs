use clap::Parser;
use life_board::{
    Camera, Session, Settings,
    application::SettingsDebounce,
    cli::Args,
    input,
    rendering::{self, CellCanvas},
    ui::{self, PanelAction, SettingsPanel},
};
use macroquad::prelude::*;
use std::time::Duration;

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 1280,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let settings = args.settings_or_defaults();

    if args.print_config {
        match settings.to_json() {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("cannot serialize settings: {err}"),
        }
        return;
    }

    macroquad::Window::from_config(window_conf(), run(args, settings));
}

async fn run(args: Args, settings: Settings) {
    let mut area = (ui::grid_area_width(), ui::grid_area_height());
    let mut session = match Session::new(settings, area) {
        Ok(session) => session,
        Err(err) => {
            log::error!("cannot create grid: {err}");
            return;
        }
    };

    match args.pattern() {
        Some(Ok(pattern)) => pattern.place_centered(session.grid_mut()),
        Some(Err(msg)) => log::warn!("{msg}"),
        None => {}
    }
    if args.random {
        session.randomize();
    }

    let mut camera = Camera::new();
    let mut panel = SettingsPanel::new();
    let mut debounce = SettingsDebounce::default();
    let mut canvas = CellCanvas::new(
        session.grid(),
        session.settings().alive_color,
        session.settings().dead_color,
    );

    loop {
        let mouse_pos = mouse_position();
        let frame_time = Duration::from_secs_f32(get_frame_time());

        // Window resize
        let current_area = (ui::grid_area_width(), ui::grid_area_height());
        if current_area != area {
            area = current_area;
            if let Err(err) = session.resize_viewport(area.0, area.1) {
                log::warn!("resize ignored: {err}");
            }
        }

        // Panel edits show pending values until the debounce settles
        let shown = debounce.peek().unwrap_or(session.settings()).clone();
        for action in panel.update(&shown, session.is_running(), mouse_pos) {
            match action {
                PanelAction::ToggleRun => session.toggle_run(),
                PanelAction::Reset => session.reset(),
                PanelAction::ToggleMode => {
                    let mode = session.editor().mode().toggled();
                    session.set_mode(mode);
                }
                PanelAction::Edit { settings, debounce: true } => debounce.push(settings),
                PanelAction::Edit { settings, debounce: false } => {
                    if let Err(err) = session.apply_settings(settings) {
                        log::warn!("settings rejected: {err}");
                    }
                }
            }
        }
        if let Some(settings) = debounce.poll(frame_time) {
            if let Err(err) = session.apply_settings(settings) {
                log::warn!("settings rejected: {err}");
            }
        }

        // Input
        let (rows, cols) = session.grid().dimensions();
        let layout = camera.layout(area, session.settings().cell_size, rows, cols);
        input::handle_zoom(&mut camera);
        input::handle_pointer(&mut session, &layout, mouse_pos, panel.is_hovered(mouse_pos));
        input::process_keyboard_input(&mut session, &mut panel, &mut camera);

        // Simulation
        session.tick(frame_time);

        // Render
        canvas.sync(&mut session);
        clear_background(rendering::BACKGROUND);
        let (rows, cols) = session.grid().dimensions();
        let layout = camera.layout(area, session.settings().cell_size, rows, cols);
        rendering::draw_board(&canvas, &layout);
        rendering::draw_controls(&session, &panel, &camera, mouse_pos);

        next_frame().await;
    }
}
