//! Rendering
//!
//! Loading, empty, and error placeholders are mutually exclusive and
//! render in place of the table body.

use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use pavilion_client::{HttpClient, ViewState};
use shared::models::{StockVariantDetail, StockVariantItem};
use shared::types::BadgeVariant;

use crate::app::{App, DetailView, InputMode};

pub fn draw<C: HttpClient>(f: &mut Frame, app: &App<C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Listing (+ detail)
            Constraint::Length(1), // Pagination / key hints
            Constraint::Length(3), // Search input
            Constraint::Length(7), // Logs
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);

    if app.detail.is_some() {
        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(chunks[1]);
        draw_listing(f, app, content[0]);
        draw_detail(f, app, content[1]);
    } else {
        draw_listing(f, app, chunks[1]);
    }

    draw_footer(f, app, chunks[2]);
    draw_search(f, app, chunks[3]);
    draw_logs(f, app, chunks[4]);
}

fn draw_header<C: HttpClient>(f: &mut Frame, app: &App<C>, area: Rect) {
    let query = app.listing.query();
    let state_span = match app.listing.state() {
        ViewState::Loading => Span::styled(
            " LOADING ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        ViewState::Loaded(_) => Span::styled(" READY ", Style::default().fg(Color::Green)),
        ViewState::Empty => Span::styled(" EMPTY ", Style::default().fg(Color::DarkGray)),
        ViewState::Error(_) => Span::styled(
            " ERROR ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let title = Paragraph::new(vec![Line::from(vec![
        Span::styled(" Pavilion ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw("Stock Variants "),
        state_span,
        Span::raw(" | sort: "),
        Span::styled(
            format!("{} {}", query.sort_by.as_str(), query.sort_order.as_str()),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" | warehouse: "),
        Span::styled(app.warehouse_filter_name(), Style::default().fg(Color::Magenta)),
    ])])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, area);
}

fn draw_listing<C: HttpClient>(f: &mut Frame, app: &App<C>, area: Rect) {
    let block = Block::default()
        .title(" Stock ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White).add_modifier(Modifier::DIM));

    match app.listing.state() {
        ViewState::Loading => {
            let placeholder = Paragraph::new("Loading stock variants...")
                .style(Style::default().fg(Color::Yellow))
                .block(block);
            f.render_widget(placeholder, area);
        }
        ViewState::Empty => {
            let placeholder = Paragraph::new(
                "No stock variants found.\n\nAdjust the search or filters and try again.",
            )
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
            f.render_widget(placeholder, area);
        }
        ViewState::Error(message) => {
            let placeholder = Paragraph::new(vec![
                Line::from(Span::styled(
                    "Error loading stock variants",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::raw(message.as_str())),
            ])
            .wrap(Wrap { trim: true })
            .block(block);
            f.render_widget(placeholder, area);
        }
        ViewState::Loaded(page) => {
            let header = Row::new(vec![
                "SKU", "Product", "Variant", "Category", "Qty", "Resv", "Avail", "WH",
                "Last Movement", "Status",
            ])
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

            let rows: Vec<Row> = page.data.iter().map(item_row).collect();

            let table = Table::new(
                rows,
                [
                    Constraint::Length(10),
                    Constraint::Min(16),
                    Constraint::Length(10),
                    Constraint::Length(10),
                    Constraint::Length(6),
                    Constraint::Length(6),
                    Constraint::Length(6),
                    Constraint::Length(4),
                    Constraint::Length(17),
                    Constraint::Length(13),
                ],
            )
            .header(header)
            .block(block)
            .row_highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            );

            let mut table_state = TableState::default();
            table_state.select(app.listing.selected());
            f.render_stateful_widget(table, area, &mut table_state);
        }
    }
}

fn item_row(item: &StockVariantItem) -> Row<'_> {
    let last_movement = item
        .last_movement
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());

    Row::new(vec![
        Cell::from(item.sku.as_str()),
        Cell::from(item.product_name.as_str()),
        Cell::from(item.variant_name.as_str()),
        Cell::from(item.category_name.as_deref().unwrap_or("-")),
        Cell::from(item.total_quantity.to_string()),
        Cell::from(item.total_reserved.to_string()),
        Cell::from(item.available().to_string()),
        Cell::from(item.warehouse_count.to_string()),
        Cell::from(last_movement),
        Cell::from(Span::styled(
            item.status.label(),
            badge_style(item.status.badge()),
        )),
    ])
}

fn badge_style(variant: BadgeVariant) -> Style {
    let color = match variant {
        BadgeVariant::Success => Color::Green,
        BadgeVariant::Warning => Color::Yellow,
        BadgeVariant::Destructive => Color::Red,
        BadgeVariant::Default => Color::DarkGray,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_footer<C: HttpClient>(f: &mut Frame, app: &App<C>, area: Rect) {
    let pagination = match app.listing.state() {
        ViewState::Loaded(page) => format!(
            " Page {} of {} ({} items)",
            page.meta.page, page.meta.total_pages, page.meta.total
        ),
        _ => format!(" Page {}", app.listing.query().page),
    };

    let footer = Line::from(vec![
        Span::styled(pagination, Style::default().fg(Color::White)),
        Span::styled(
            "  /: search  s: sort  o: order  w: warehouse  n/p: page  r: refresh  Enter: detail  q: quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(footer), area);
}

fn draw_search<C: HttpClient>(f: &mut Frame, app: &App<C>, area: Rect) {
    let style = match app.input_mode {
        InputMode::Normal => Style::default().fg(Color::Gray),
        InputMode::Search => Style::default().fg(Color::Yellow),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Search (500ms debounce) ");

    let width = area.width.max(3) - 3;
    let scroll = app.input.visual_scroll(width as usize);
    let input = Paragraph::new(app.input.value())
        .style(style)
        .scroll((0, scroll as u16))
        .block(block);
    f.render_widget(input, area);

    if app.input_mode == InputMode::Search {
        f.set_cursor_position((
            area.x + ((app.input.visual_cursor().max(scroll) - scroll) as u16) + 1,
            area.y + 1,
        ));
    }
}

fn draw_detail<C: HttpClient>(f: &mut Frame, app: &App<C>, area: Rect) {
    let block = Block::default()
        .title(" Variant Detail ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let paragraph = match &app.detail {
        Some(DetailView::Loading { .. }) => Paragraph::new("Loading detail...")
            .style(Style::default().fg(Color::Yellow))
            .block(block),
        Some(DetailView::Failed(message)) => Paragraph::new(format!("Error: {}", message))
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true })
            .block(block),
        Some(DetailView::Ready(detail)) => Paragraph::new(detail_lines(detail))
            .wrap(Wrap { trim: true })
            .block(block),
        None => return,
    };
    f.render_widget(paragraph, area);
}

fn detail_lines(detail: &StockVariantDetail) -> Vec<Line<'_>> {
    let item = &detail.item;
    let mut lines = vec![
        Line::from(vec![
            Span::styled(&item.product_name, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" / "),
            Span::raw(&item.variant_name),
        ]),
        Line::from(vec![
            Span::raw("SKU: "),
            Span::styled(&item.sku, Style::default().fg(Color::Yellow)),
            Span::raw("  Status: "),
            Span::styled(item.status.label(), badge_style(item.status.badge())),
        ]),
        Line::from(format!(
            "Qty {}  Reserved {}  Available {}",
            item.total_quantity,
            item.total_reserved,
            item.available()
        )),
        Line::from(match &item.cost {
            Some(cost) => format!("Unit cost: {}", cost),
            None => "Unit cost: -".to_string(),
        }),
        Line::from(""),
        Line::from(Span::styled(
            format!("Warehouses ({})", detail.warehouses.len()),
            Style::default().fg(Color::Cyan),
        )),
    ];

    for warehouse in &detail.warehouses {
        lines.push(Line::from(format!(
            " {}  qty {}  resv {}  min {}",
            warehouse.warehouse_name, warehouse.quantity, warehouse.reserved, warehouse.min_stock
        )));
    }

    if !detail.recent_movements.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Recent movements ({})", detail.recent_movements.len()),
            Style::default().fg(Color::Cyan),
        )));
        for movement in &detail.recent_movements {
            lines.push(Line::from(format!(
                " {}  {}  {:+}",
                movement.created_at.format("%m-%d %H:%M"),
                movement.movement_type.label(),
                movement.quantity
            )));
        }
    }

    lines
}

fn draw_logs<C: HttpClient>(f: &mut Frame, app: &App<C>, area: Rect) {
    let logs = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Logs ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White).add_modifier(Modifier::DIM)),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White))
        .state(&app.logger_state);
    f.render_widget(logs, area);
}
