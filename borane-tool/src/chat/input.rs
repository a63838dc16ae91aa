use borane_widget::{KeyPress, WidgetEvent};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app::ChatApp;

pub fn handle_event(app: &mut ChatApp, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        _ => {}
    }
}

fn handle_key(app: &mut ChatApp, key: KeyEvent) {
    let press = match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        (KeyCode::Enter, KeyModifiers::NONE) => KeyPress::Enter,
        (KeyCode::Up, KeyModifiers::CONTROL) | (KeyCode::PageUp, _) => KeyPress::ScrollUp,
        (KeyCode::Down, KeyModifiers::CONTROL) | (KeyCode::PageDown, _) => KeyPress::ScrollDown,
        (KeyCode::Backspace, _) => KeyPress::Backspace,
        (KeyCode::Delete, _) => KeyPress::Delete,
        (KeyCode::Left, _) => KeyPress::Left,
        (KeyCode::Right, _) => KeyPress::Right,
        (KeyCode::Home, _) => KeyPress::Home,
        (KeyCode::End, _) => KeyPress::End,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => KeyPress::Char(c),
        _ => return,
    };
    app.handle(WidgetEvent::Key(press));
}

fn handle_mouse(app: &mut ChatApp, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if app.is_send_button(mouse.column, mouse.row) => {
            app.handle(WidgetEvent::SendClicked);
        }
        MouseEventKind::ScrollUp => app.handle(WidgetEvent::Key(KeyPress::ScrollUp)),
        MouseEventKind::ScrollDown => app.handle(WidgetEvent::Key(KeyPress::ScrollDown)),
        _ => {}
    }
}
