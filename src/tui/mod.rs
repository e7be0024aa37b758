// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Interactive editor shell (ratatui + crossterm): a pannable viewport over one diagram with a
//! cursor, grab-to-move, connect, an options menu and a help modal.

use std::{
    error::Error,
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::model::{Diagram, Node, NodeId};
use crate::render::{render_diagram, Canvas};
use crate::store::DiagramFile;
use crate::ui::{hud_text, Cursor, Offset};

mod theme;

use theme::TuiTheme;

const PAN_STEP: i32 = 4;
const NEW_NODE_WIDTH: i32 = 10;
const NEW_NODE_HEIGHT: i32 = 2;
const TOAST_TTL: Duration = Duration::from_secs(2);
const DEFAULT_VIEW: (u16, u16) = (80, 23);

/// Runs the interactive editor until the user quits.
///
/// `file` is where `s` saves to; without one the diagram can only be edited.
pub fn run_with_diagram(
    diagram: Diagram,
    file: Option<DiagramFile>,
) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_env()?;
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(diagram, file, theme);

    let area = terminal.size()?;
    app.resize(area.width, area.height.saturating_sub(1));
    app.center_cursor();

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let canvas_area = layout[0];
    let status_area = layout[1];

    app.resize(canvas_area.width, canvas_area.height);
    let diagram = Paragraph::new(app.diagram_text()).style(app.theme.base_style());
    frame.render_widget(diagram, canvas_area);

    render_status(frame, app, status_area);

    if app.menu.is_some() {
        render_menu(frame, app, canvas_area);
    }
    if app.modal.is_some() {
        render_modal(frame, app, area);
    }
}

// Status line, menu and modal rendering helpers.
include!("chrome.rs");

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    error: bool,
    expires_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    AddNode,
    Connect,
    Rename,
    Delete,
    Save,
    Help,
    Quit,
}

impl MenuAction {
    const ALL: [Self; 7] = [
        Self::AddNode,
        Self::Connect,
        Self::Rename,
        Self::Delete,
        Self::Save,
        Self::Help,
        Self::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::AddNode => "Add node",
            Self::Connect => "Connect",
            Self::Rename => "Rename",
            Self::Delete => "Delete",
            Self::Save => "Save",
            Self::Help => "Help",
            Self::Quit => "Quit",
        }
    }
}

/// The options menu, anchored at the screen cell where it was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Menu {
    x: i32,
    y: i32,
    selected: usize,
}

impl Menu {
    fn new(x: i32, y: i32) -> Self {
        Self { x, y, selected: 0 }
    }

    fn select_next(&mut self) {
        self.selected = (self.selected + 1) % MenuAction::ALL.len();
    }

    fn select_prev(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(MenuAction::ALL.len() - 1);
    }

    fn action(&self) -> MenuAction {
        MenuAction::ALL[self.selected]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Modal {
    Help,
    Label { node_id: NodeId, input: String },
}

struct App {
    diagram: Diagram,
    file: Option<DiagramFile>,
    theme: TuiTheme,
    offset: Offset,
    cursor: Cursor,
    view_width: i32,
    view_height: i32,
    grabbed: Option<NodeId>,
    pending_connect: Option<NodeId>,
    menu: Option<Menu>,
    modal: Option<Modal>,
    toast: Option<Toast>,
    should_quit: bool,
}

impl App {
    fn new(diagram: Diagram, file: Option<DiagramFile>, theme: TuiTheme) -> Self {
        let mut app = Self {
            diagram,
            file,
            theme,
            offset: Offset::default(),
            cursor: Cursor::default(),
            view_width: 0,
            view_height: 0,
            grabbed: None,
            pending_connect: None,
            menu: None,
            modal: None,
            toast: None,
            should_quit: false,
        };
        app.resize(DEFAULT_VIEW.0, DEFAULT_VIEW.1);
        app.center_cursor();
        app
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.view_width = i32::from(width);
        self.view_height = i32::from(height);
        self.cursor.clamp_to(self.view_width, self.view_height);
    }

    fn center_cursor(&mut self) {
        self.cursor.x = self.view_width / 2;
        self.cursor.y = self.view_height / 2;
    }

    /// The canvas area in screen cells; it starts at the terminal origin.
    fn canvas_bounds(&self) -> Rect {
        let width = u16::try_from(self.view_width).unwrap_or(0);
        let height = u16::try_from(self.view_height).unwrap_or(0);
        Rect::new(0, 0, width, height)
    }

    fn cursor_world(&self) -> (i32, i32) {
        self.offset.to_world(self.cursor.x, self.cursor.y)
    }

    fn node_under_cursor(&self) -> Option<NodeId> {
        let (x, y) = self.cursor_world();
        self.diagram.node_at(x, y).map(|node| node.id().clone())
    }

    /// One frame of the viewport with the cursor drawn over it.
    fn diagram_text(&mut self) -> Text<'static> {
        let width = usize::try_from(self.view_width).unwrap_or(0);
        let height = usize::try_from(self.view_height).unwrap_or(0);
        let Ok(mut canvas) = Canvas::new(width, height) else {
            return Text::default();
        };
        render_diagram(&mut canvas, &mut self.diagram, self.offset);

        let cursor_style = self.theme.cursor_style(self.cursor.grab);
        let lines = canvas
            .lines()
            .into_iter()
            .enumerate()
            .map(|(y, row)| {
                if i32::try_from(y).ok() == Some(self.cursor.y) {
                    cursor_line(&row, self.cursor.x, self.cursor.symbol(), cursor_style)
                } else {
                    Line::from(row)
                }
            })
            .collect::<Vec<_>>();
        Text::from(lines)
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_key_code(key.code) {
            self.should_quit = true;
        }
    }

    /// Applies one key press. Returns `true` when the editor should quit.
    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        if let Some(modal) = self.modal.take() {
            return self.handle_modal_key(modal, code);
        }
        if let Some(menu) = self.menu.take() {
            return self.handle_menu_key(menu, code);
        }

        match code {
            KeyCode::Left | KeyCode::Char('h') => self.step_cursor(-1, 0),
            KeyCode::Right | KeyCode::Char('l') => self.step_cursor(1, 0),
            KeyCode::Up | KeyCode::Char('k') => self.step_cursor(0, -1),
            KeyCode::Down | KeyCode::Char('j') => self.step_cursor(0, 1),
            KeyCode::Char('H') => self.pan(-PAN_STEP, 0),
            KeyCode::Char('L') => self.pan(PAN_STEP, 0),
            KeyCode::Char('K') => self.pan(0, -PAN_STEP),
            KeyCode::Char('J') => self.pan(0, PAN_STEP),
            KeyCode::Char(' ') => self.toggle_grab(),
            KeyCode::Char('n') => self.add_node(),
            KeyCode::Char('e') => self.rename_node(),
            KeyCode::Char('c') => self.connect_step(),
            KeyCode::Char('x') | KeyCode::Delete => self.delete_node(),
            KeyCode::Char('m') => self.menu = Some(Menu::new(self.cursor.x, self.cursor.y)),
            KeyCode::Char('?') => self.modal = Some(Modal::Help),
            KeyCode::Char('s') => self.save(),
            KeyCode::Char('q') => return true,
            KeyCode::Esc => return self.cancel_or_quit(),
            _ => {}
        }
        false
    }

    fn handle_modal_key(&mut self, modal: Modal, code: KeyCode) -> bool {
        match modal {
            Modal::Help => match code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => {}
                KeyCode::Char('q') => return true,
                _ => self.modal = Some(Modal::Help),
            },
            Modal::Label { node_id, mut input } => match code {
                KeyCode::Enter => {
                    if let Some(node) = self.diagram.node_mut(&node_id) {
                        node.set_label(input);
                    }
                }
                KeyCode::Esc => {}
                KeyCode::Backspace => {
                    input.pop();
                    self.modal = Some(Modal::Label { node_id, input });
                }
                KeyCode::Char(ch) => {
                    input.push(ch);
                    self.modal = Some(Modal::Label { node_id, input });
                }
                _ => self.modal = Some(Modal::Label { node_id, input }),
            },
        }
        false
    }

    fn handle_menu_key(&mut self, mut menu: Menu, code: KeyCode) -> bool {
        match code {
            KeyCode::Up | KeyCode::Char('k') => menu.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => menu.select_next(),
            KeyCode::Enter => return self.run_menu_action(menu.action()),
            KeyCode::Esc | KeyCode::Char('m') => return false,
            _ => {}
        }
        self.menu = Some(menu);
        false
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.handle_mouse_at(mouse.kind, mouse.column, mouse.row) {
            self.should_quit = true;
        }
    }

    /// Applies one mouse event at screen cell `(column, row)`. Only the open menu reacts:
    /// hovering an entry selects it, clicking an entry runs it and clicking outside the menu
    /// closes it. Returns `true` when the editor should quit.
    fn handle_mouse_at(&mut self, kind: MouseEventKind, column: u16, row: u16) -> bool {
        if self.modal.is_some() {
            return false;
        }
        let Some(mut menu) = self.menu else {
            return false;
        };
        let bounds = self.canvas_bounds();
        let entry = menu_entry_at(menu, bounds, column, row);

        match kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                if let Some(index) = entry {
                    menu.selected = index;
                    self.menu = Some(menu);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = entry {
                    self.menu = None;
                    return self.run_menu_action(MenuAction::ALL[index]);
                }
                if !rect_contains(menu_rect(menu, bounds), column, row) {
                    self.menu = None;
                }
            }
            _ => {}
        }
        false
    }

    fn run_menu_action(&mut self, action: MenuAction) -> bool {
        match action {
            MenuAction::AddNode => self.add_node(),
            MenuAction::Connect => self.connect_step(),
            MenuAction::Rename => self.rename_node(),
            MenuAction::Delete => self.delete_node(),
            MenuAction::Save => self.save(),
            MenuAction::Help => self.modal = Some(Modal::Help),
            MenuAction::Quit => return true,
        }
        false
    }

    fn step_cursor(&mut self, dx: i32, dy: i32) {
        self.cursor
            .step(dx, dy, self.view_width, self.view_height, &mut self.offset);
        // The cursor's world position always moves by exactly (dx, dy).
        self.drag_grabbed(dx, dy);
    }

    fn pan(&mut self, dx: i32, dy: i32) {
        self.offset.pan(dx, dy);
        self.drag_grabbed(dx, dy);
    }

    fn drag_grabbed(&mut self, dx: i32, dy: i32) {
        if let Some(node_id) = self.grabbed.as_ref() {
            self.diagram.move_node(node_id, dx, dy);
        }
    }

    fn toggle_grab(&mut self) {
        if let Some(node_id) = self.grabbed.take() {
            self.cursor.grab = false;
            self.set_toast(format!("Dropped {node_id}"));
            return;
        }

        match self.node_under_cursor() {
            Some(node_id) => {
                self.cursor.grab = true;
                self.grabbed = Some(node_id);
            }
            None => self.set_toast("Nothing to grab here"),
        }
    }

    fn add_node(&mut self) {
        let node_id = self.diagram.next_node_id();
        let (x, y) = self.cursor_world();
        let added = Node::centered(node_id.clone(), x, y, NEW_NODE_WIDTH, NEW_NODE_HEIGHT)
            .map_err(|err| err.to_string())
            .and_then(|node| self.diagram.add_node(node).map_err(|err| err.to_string()));

        match added {
            Ok(()) => {
                self.modal = Some(Modal::Label {
                    node_id,
                    input: String::new(),
                });
            }
            Err(err) => self.set_error_toast(format!("Add node failed: {err}")),
        }
    }

    fn rename_node(&mut self) {
        let Some(node_id) = self.node_under_cursor() else {
            self.set_toast("No node under cursor");
            return;
        };
        let input = self
            .diagram
            .node(&node_id)
            .map(|node| node.label().to_owned())
            .unwrap_or_default();
        self.modal = Some(Modal::Label { node_id, input });
    }

    fn connect_step(&mut self) {
        let target = self.node_under_cursor();
        match (self.pending_connect.take(), target) {
            (None, Some(source)) => {
                self.set_toast(format!("Connect from {source}: move to a target and press c"));
                self.pending_connect = Some(source);
            }
            (None, None) => self.set_toast("No node under cursor"),
            (Some(source), Some(target)) => match self.diagram.connect(&source, &target) {
                Ok(edge_id) => {
                    self.set_toast(format!("Connected {source} -> {target} ({edge_id})"));
                }
                Err(err) => self.set_error_toast(format!("Connect failed: {err}")),
            },
            (Some(source), None) => {
                self.set_toast("No node under cursor");
                self.pending_connect = Some(source);
            }
        }
    }

    fn delete_node(&mut self) {
        let Some(node_id) = self.node_under_cursor() else {
            self.set_toast("No node under cursor");
            return;
        };

        self.diagram.remove_node(&node_id);
        if self.grabbed.as_ref() == Some(&node_id) {
            self.grabbed = None;
            self.cursor.grab = false;
        }
        if self.pending_connect.as_ref() == Some(&node_id) {
            self.pending_connect = None;
        }
        self.set_toast(format!("Deleted {node_id}"));
    }

    fn save(&mut self) {
        let Some(file) = self.file.as_ref() else {
            self.set_toast("No file to save to; start graphos with a path");
            return;
        };
        let result = file
            .save(&self.diagram)
            .map(|()| format!("Saved {}", file.path().display()));

        match result {
            Ok(message) => self.set_toast(message),
            Err(err) => self.set_error_toast(format!("Save failed: {err}")),
        }
    }

    fn cancel_or_quit(&mut self) -> bool {
        if self.pending_connect.take().is_some() {
            self.set_toast("Connect cancelled");
            return false;
        }
        if self.grabbed.take().is_some() {
            self.cursor.grab = false;
            return false;
        }
        true
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.push_toast(message.into(), false);
    }

    fn set_error_toast(&mut self, message: impl Into<String>) {
        self.push_toast(message.into(), true);
    }

    fn push_toast(&mut self, message: String, error: bool) {
        self.toast = Some(Toast {
            message,
            error,
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    /// The live toast message, dropping it once it has expired.
    fn current_toast(&mut self) -> Option<&str> {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= Instant::now())
        {
            self.toast = None;
        }
        self.toast.as_ref().map(|toast| toast.message.as_str())
    }
}

fn cursor_line(row: &str, x: i32, symbol: &'static str, style: Style) -> Line<'static> {
    let x = usize::try_from(x).unwrap_or(0);
    let before = row.chars().take(x).collect::<String>();
    let after = row.chars().skip(x + 1).collect::<String>();
    Line::from(vec![
        Span::raw(before),
        Span::styled(symbol, style),
        Span::raw(after),
    ])
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.hide_cursor().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn size(&self) -> io::Result<Rect> {
        self.terminal.size()
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);
}
