use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use term_menu::{ContextMenuMonitor, MenuPresenter, TARGET_POLL_INTERVAL};

struct App {
    open_menus: Vec<Rect>,
    trigger: Option<Rect>,
}

impl App {
    fn closed() -> Self {
        Self {
            open_menus: Vec::new(),
            trigger: None,
        }
    }

    fn with_root_menu() -> Self {
        Self {
            open_menus: vec![Rect {
                x: 10,
                y: 10,
                width: 90,
                height: 90,
            }],
            trigger: None,
        }
    }
}

impl MenuPresenter for App {
    fn menu_rects(&self) -> Vec<Rect> {
        self.open_menus.clone()
    }

    fn trigger_rect(&self) -> Option<Rect> {
        self.trigger
    }
}

fn counting_monitor() -> (ContextMenuMonitor, Rc<Cell<u32>>) {
    let hides = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&hides);
    let monitor = ContextMenuMonitor::new(move || counter.set(counter.get() + 1));
    (monitor, hides)
}

fn mousedown(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn esc_dismisses_click_inside_menu_does_not() {
    let (mut monitor, hides) = counting_monitor();
    monitor.start_with(["keydown:27", "mousedown"]);

    // ESC with no menus open dismisses exactly once
    let esc = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
    assert!(monitor.handle_event(&esc, &App::closed()));
    assert_eq!(hides.get(), 1);

    // a click at (50,50) inside the sole open menu does not dismiss
    let (mut monitor, hides) = counting_monitor();
    monitor.start_with(["keydown:27", "mousedown"]);
    assert!(!monitor.handle_event(&mousedown(50, 50), &App::with_root_menu()));
    assert_eq!(hides.get(), 0);
    assert!(monitor.running());
}

#[test]
fn click_outside_menu_dismisses() {
    let (mut monitor, hides) = counting_monitor();
    monitor.start();
    assert!(monitor.handle_event(&mousedown(5, 5), &App::with_root_menu()));
    assert_eq!(hides.get(), 1);
}

#[test]
fn default_watches_cover_resize() {
    let (mut monitor, hides) = counting_monitor();
    monitor.start();
    assert!(monitor.handle_event(&Event::Resize(132, 43), &App::with_root_menu()));
    assert_eq!(hides.get(), 1);
}

#[test]
fn submenu_open_makes_every_click_safe() {
    let (mut monitor, hides) = counting_monitor();
    monitor.start();
    let mut app = App::with_root_menu();
    app.open_menus.push(Rect {
        x: 105,
        y: 40,
        width: 30,
        height: 12,
    });
    assert!(!monitor.handle_event(&mousedown(0, 0), &app));
    assert_eq!(hides.get(), 0);
}

#[test]
fn moving_trigger_dismisses_via_polling() {
    let (mut monitor, hides) = counting_monitor();
    monitor.start();

    let anchored = |x| App {
        open_menus: vec![Rect {
            x: 10,
            y: 10,
            width: 30,
            height: 8,
        }],
        trigger: Some(Rect {
            x,
            y: 4,
            width: 12,
            height: 1,
        }),
    };

    let t0 = Instant::now();
    assert!(!monitor.tick(t0, &anchored(2)));
    assert!(!monitor.tick(t0 + TARGET_POLL_INTERVAL, &anchored(2)));
    // layout shifted the trigger: the next cycle dismisses
    assert!(monitor.tick(t0 + TARGET_POLL_INTERVAL * 2, &anchored(6)));
    assert_eq!(hides.get(), 1);
    assert!(!monitor.running());
    // and the stopped monitor ignores further movement
    assert!(!monitor.tick(t0 + TARGET_POLL_INTERVAL * 3, &anchored(9)));
    assert_eq!(hides.get(), 1);
}

#[test]
fn stop_then_events_never_dismiss() {
    let (mut monitor, hides) = counting_monitor();
    monitor.start_with(["keydown:27", "keydown:ctrl+27", "mousedown", "scroll"]);
    monitor.stop();

    let esc = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
    assert!(!monitor.handle_event(&esc, &App::closed()));
    assert!(!monitor.handle_event(&mousedown(5, 5), &App::closed()));
    assert!(!monitor.tick(Instant::now(), &App::closed()));
    assert_eq!(hides.get(), 0);
}

#[test]
fn combo_order_in_the_spec_is_irrelevant() {
    let (mut monitor, hides) = counting_monitor();
    monitor.start_with(["keydown: 27 + ctrl "]);

    let esc = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
    assert!(!monitor.handle_event(&esc, &App::closed()));
    let ctrl_esc = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::CONTROL));
    assert!(monitor.handle_event(&ctrl_esc, &App::closed()));
    assert_eq!(hides.get(), 1);
}
