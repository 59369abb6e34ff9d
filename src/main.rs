mod console;
mod input;
mod life;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};

use input::{pixel_x_to_col, pixel_y_to_row, ClickState, InputEvent};
use life::LifeApp;

/// Query the terminal container's bounding rect and convert a pointer
/// position to the cell under it.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let document = web_sys::window()?.document()?;

    // DomBackend renders its grid as a <div> directly inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let col = pixel_x_to_col(mouse_x as f64 - rect.left(), rect.width(), cs.terminal_cols)?;
    let row = pixel_y_to_row(mouse_y as f64 - rect.top(), rect.height(), cs.terminal_rows)?;
    Some((col, row))
}

fn key_event(code: KeyCode) -> Option<InputEvent> {
    match code {
        KeyCode::Char(c) => Some(InputEvent::Key(c)),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Enter => Some(InputEvent::Enter),
        KeyCode::Esc => Some(InputEvent::Escape),
        _ => None,
    }
}

/// Stop the periodic tasks when the page goes away.
fn stop_on_page_hide(app: Rc<RefCell<LifeApp>>) {
    use web_sys::wasm_bindgen::closure::Closure;
    use web_sys::wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return;
    };
    let handler = Closure::<dyn FnMut()>::new(move || {
        app.borrow_mut().teardown();
        console::log("Life in Weeks: timers stopped");
    });
    if window
        .add_event_listener_with_callback("pagehide", handler.as_ref().unchecked_ref())
        .is_err()
    {
        console::warn("Life in Weeks: could not watch pagehide");
    }
    // Lives as long as the page.
    handler.forget();
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let app = Rc::new(RefCell::new(LifeApp::new(life::save::open_storage())));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    stop_on_page_hide(app.clone());

    terminal.on_mouse_event({
        let app = app.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let cs = click_state.borrow();
            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                return;
            }
            let hit = dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs)
                .and_then(|(col, row)| cs.hit_test(col, row));
            drop(cs);

            if let Some(action_id) = hit {
                app.borrow_mut().handle_input(&InputEvent::Click(action_id));
            }
        }
    });

    terminal.on_key_event({
        let app = app.clone();
        move |key| {
            if let Some(event) = key_event(key.code) {
                app.borrow_mut().handle_input(&event);
            }
        }
    });

    terminal.draw_web(move |f| {
        app.borrow_mut().tick(js_sys::Date::now());

        let area = f.area();
        click_state.borrow_mut().begin_frame(area.width, area.height);
        app.borrow().render(f, area, &click_state);
    });

    Ok(())
}
