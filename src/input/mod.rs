use macroquad::prelude::*;
use crate::application::{BoardLayout, Camera, Session, TickSource};
use crate::ui::SettingsPanel;

/// Interval change per Up/Down press, in milliseconds
pub const INTERVAL_KEY_STEP: i64 = 10;

/// Handle zoom with mouse wheel
pub fn handle_zoom(camera: &mut Camera) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_in(1.1);
    } else if wheel < 0.0 {
        camera.zoom_out(1.1);
    }
}

/// Route left-button press/drag/release to the session's gesture API.
/// The session itself ignores edits while the simulation runs.
pub fn handle_pointer<T: TickSource>(
    session: &mut Session<T>,
    layout: &BoardLayout,
    mouse_pos: (f32, f32),
    over_panel: bool,
) {
    if is_mouse_button_released(MouseButton::Left) {
        session.pointer_up();
        return;
    }
    if over_panel {
        return;
    }

    let cell = layout.cell_at(mouse_pos.0, mouse_pos.1);
    if is_mouse_button_pressed(MouseButton::Left) {
        session.pointer_down(cell);
    } else if is_mouse_button_down(MouseButton::Left) {
        session.pointer_move(cell);
    }
}

/// Process keyboard shortcuts
pub fn process_keyboard_input<T: TickSource>(
    session: &mut Session<T>,
    panel: &mut SettingsPanel,
    camera: &mut Camera,
) {
    let actions: [(KeyCode, fn(&mut Session<T>)); 5] = [
        (KeyCode::Space, Session::toggle_run),
        (KeyCode::R, Session::randomize),
        (KeyCode::E, |s| {
            let mode = s.editor().mode().toggled();
            s.set_mode(mode)
        }),
        (KeyCode::Up, |s| s.adjust_interval(-INTERVAL_KEY_STEP)),
        (KeyCode::Down, |s| s.adjust_interval(INTERVAL_KEY_STEP)),
    ];

    actions
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .for_each(|(_, action)| action(session));

    if is_key_pressed(KeyCode::Space) && session.is_running() {
        panel.expanded = false;
    }

    // Escape resets and brings the settings back into view
    if is_key_pressed(KeyCode::Escape) {
        session.reset();
        panel.expanded = true;
    }

    // Reset zoom with 'H' (home)
    if is_key_pressed(KeyCode::H) {
        camera.reset();
    }
}
