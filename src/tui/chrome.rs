// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

const HELP_KEYS: [(&str, &str); 11] = [
    ("←↓↑→ / hjkl", "Move cursor"),
    ("HJKL", "Pan view"),
    ("space", "Grab / drop node"),
    ("n", "Add node"),
    ("e", "Rename node"),
    ("c", "Connect (source, then target)"),
    ("x / Del", "Delete node"),
    ("m", "Menu"),
    ("s", "Save"),
    ("?", "Help (toggle)"),
    ("q / Esc", "Quit"),
];

fn render_status(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let toast = app.current_toast().map(str::to_owned);
    let left = match toast {
        Some(message) => {
            let style = if app.toast.as_ref().is_some_and(|toast| toast.error) {
                app.theme.error_style()
            } else {
                app.theme.base_style()
            };
            Line::from(Span::styled(format!(" {message}"), style))
        }
        None => status_hint_line(app),
    };

    let hud = hud_text(app.offset, app.cursor, app.view_width, app.view_height);
    let hud_width = u16::try_from(hud.chars().count()).unwrap_or(u16::MAX);
    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(hud_width)])
        .split(area);

    frame.render_widget(Paragraph::new(left), parts[0]);
    let hud = Paragraph::new(Line::from(Span::styled(hud, app.theme.hud_style())))
        .alignment(Alignment::Right);
    frame.render_widget(hud, parts[1]);
}

fn status_hint_line(app: &App) -> Line<'static> {
    let key_style = app.theme.key_style();
    if let Some(source) = &app.pending_connect {
        return Line::from(vec![
            Span::raw(format!(" connect {source} -> ?  ")),
            Span::styled("c", key_style),
            Span::raw(" target  "),
            Span::styled("esc", key_style),
            Span::raw(" cancel"),
        ]);
    }
    if let Some(node_id) = &app.grabbed {
        return Line::from(vec![
            Span::raw(format!(" moving {node_id}  ")),
            Span::styled("space", key_style),
            Span::raw(" drop"),
        ]);
    }
    Line::from(vec![
        Span::raw(" "),
        Span::styled("?", key_style),
        Span::raw(" help  "),
        Span::styled("m", key_style),
        Span::raw(" menu"),
    ])
}

fn render_menu(frame: &mut Frame<'_>, app: &App, bounds: Rect) {
    let Some(menu) = app.menu else {
        return;
    };

    let area = menu_rect(menu, bounds);
    frame.render_widget(Clear, area);

    let items = MenuAction::ALL
        .iter()
        .map(|action| ListItem::new(format!(" {}", action.label())))
        .collect::<Vec<_>>();
    let list = List::new(items)
        .style(app.theme.base_style())
        .highlight_style(app.theme.selection_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.theme.popup_border_style()),
        );

    let mut state = ListState::default();
    state.select(Some(menu.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Where `menu` is drawn inside `bounds`: one row per entry inside a border.
fn menu_rect(menu: Menu, bounds: Rect) -> Rect {
    let label_width = MenuAction::ALL
        .iter()
        .map(|action| action.label().len())
        .max()
        .unwrap_or(0);
    let width = u16::try_from(label_width + 4).unwrap_or(u16::MAX);
    let height = u16::try_from(MenuAction::ALL.len() + 2).unwrap_or(u16::MAX);
    anchored_rect(menu.x, menu.y, width, height, bounds)
}

/// The menu entry drawn at screen cell `(column, row)`, if any.
fn menu_entry_at(menu: Menu, bounds: Rect, column: u16, row: u16) -> Option<usize> {
    let area = menu_rect(menu, bounds);
    let inner = Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    );
    if !rect_contains(inner, column, row) {
        return None;
    }
    let index = usize::from(row - inner.y);
    (index < MenuAction::ALL.len()).then_some(index)
}

fn rect_contains(area: Rect, column: u16, row: u16) -> bool {
    (area.x..area.right()).contains(&column) && (area.y..area.bottom()).contains(&row)
}

fn render_modal(frame: &mut Frame<'_>, app: &App, bounds: Rect) {
    let (title, lines) = match &app.modal {
        Some(Modal::Help) => (" Help ".to_owned(), help_lines(app.theme.key_style())),
        Some(Modal::Label { node_id, input }) => (
            format!(" Label for {node_id} "),
            vec![Line::from(vec![
                Span::raw(input.clone()),
                Span::styled("_", app.theme.key_style()),
            ])],
        ),
        None => return,
    };

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0);
    let width = content_width.max(title.chars().count()).max(26) + 4;
    let width = u16::try_from(width).unwrap_or(u16::MAX);
    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let area = centered_rect(width, height, bounds);
    frame.render_widget(Clear, area);

    let modal = Paragraph::new(lines).style(app.theme.base_style()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(app.theme.popup_border_style())
            .title(title),
    );
    frame.render_widget(modal, area);
}

fn help_lines(key_style: Style) -> Vec<Line<'static>> {
    let key_width = HELP_KEYS
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);
    HELP_KEYS
        .iter()
        .map(|(key, desc)| help_kv(key, desc, key_width, key_style))
        .collect()
}

fn help_kv(key: &str, desc: &str, key_width: usize, key_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {key:>width$}", width = key_width), key_style),
        Span::raw("  "),
        Span::raw(desc.to_owned()),
    ])
}

/// A `width x height` rect centered in `area`, shrunk to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// A `width x height` rect with its top-left at `(x, y)` inside `bounds`, pushed back inside
/// when it would overflow.
fn anchored_rect(x: i32, y: i32, width: u16, height: u16, bounds: Rect) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(bounds.height);
    let max_x = i32::from(bounds.width - width);
    let max_y = i32::from(bounds.height - height);
    let x = u16::try_from(x.clamp(0, max_x)).unwrap_or(0);
    let y = u16::try_from(y.clamp(0, max_y)).unwrap_or(0);
    Rect::new(bounds.x + x, bounds.y + y, width, height)
}
