//! Stateless UI rendering for the puzzle.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Wrap,
        canvas::{Canvas, Context, Line as CanvasLine, Rectangle},
    },
};
use strictly_hanoi::{Clock, DiskCount, DiskRect, INSTRUCTIONS, Rect as PixelRect};

use super::app::{App, Mode};
use super::viewport::Viewport;

const BASE_COLOR: Color = Color::Rgb(182, 103, 19);
const STATUS_COLOR: Color = Color::Rgb(241, 216, 111);
const TITLE_COLOR: Color = Color::Rgb(255, 126, 64);

/// Draws the whole screen and records where the board landed.
pub fn draw<C: Clock>(frame: &mut Frame, app: &mut App<C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(10),   // Board
            Constraint::Length(4), // Status and timer
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tower of Hanoi")
        .style(Style::default().fg(TITLE_COLOR).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);
    draw_status(frame, chunks[2], app);

    let help = Paragraph::new("drag disks with the mouse | r restart | i instructions | q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    match app.mode() {
        Mode::Playing => {}
        Mode::Instructions => draw_instructions(frame),
        Mode::ChooseDisks => draw_disk_chooser(frame, app.puzzle().state().disk_count()),
    }
}

fn draw_board<C: Clock>(frame: &mut Frame, area: Rect, app: &mut App<C>) {
    let config = *app.layout_config();
    let block = Block::default().borders(Borders::ALL);
    let viewport = Viewport::new(block.inner(area), config.canvas_width, config.canvas_height);
    app.set_viewport(viewport);

    let layout = app.puzzle().current_layout();
    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds(viewport.x_bounds())
        .y_bounds(viewport.y_bounds())
        .paint(|ctx| {
            fill(ctx, &viewport, layout.base, BASE_COLOR);
            for peg in &layout.pegs {
                fill(ctx, &viewport, peg.pole, BASE_COLOR);
                outline(ctx, &viewport, peg.area, Color::DarkGray);
                let (x, y) = viewport.point_to_canvas(peg.label);
                ctx.print(
                    x,
                    y,
                    Span::styled(
                        peg.peg.to_string(),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                );
            }
            ctx.layer();
            // Bottom disks first so the top of each stack is drawn last.
            for peg in &layout.pegs {
                for disk in &peg.disks {
                    draw_disk(ctx, &viewport, disk, disk_color(disk));
                }
            }
            if let Some(held) = &layout.held {
                ctx.layer();
                draw_disk(ctx, &viewport, held, Color::Gray);
            }
        });
    frame.render_widget(canvas, area);
}

fn draw_disk(ctx: &mut Context, viewport: &Viewport, disk: &DiskRect, color: Color) {
    fill(ctx, viewport, disk.rect, color);
    outline(ctx, viewport, disk.rect, Color::DarkGray);
}

fn disk_color(disk: &DiskRect) -> Color {
    let modifier = (u16::from(disk.disk.weight()) + 1) * 14;
    Color::Rgb(0, 255u16.saturating_sub(modifier) as u8, 0)
}

fn outline(ctx: &mut Context, viewport: &Viewport, rect: PixelRect, color: Color) {
    let (x, y, width, height) = viewport.to_canvas(rect);
    ctx.draw(&Rectangle {
        x,
        y,
        width,
        height,
        color,
    });
}

fn fill(ctx: &mut Context, viewport: &Viewport, rect: PixelRect, color: Color) {
    let (x, y, width, height) = viewport.to_canvas(rect);
    let mut row = y;
    while row <= y + height {
        ctx.draw(&CanvasLine {
            x1: x,
            y1: row,
            x2: x + width,
            y2: row,
            color,
        });
        row += 2.0;
    }
}

fn draw_status<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let puzzle = app.puzzle();
    let state = puzzle.state();
    let lines = vec![
        Line::from(Span::styled(
            puzzle.status().to_string(),
            Style::default().fg(STATUS_COLOR),
        )),
        Line::from(Span::styled(
            format!("{} | Moves: {}", puzzle.elapsed_label(), state.moves()),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
        )),
    ];
    let status = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_instructions(frame: &mut Frame) {
    let area = center_rect(frame.area(), 60, 14);
    let text = Paragraph::new(INSTRUCTIONS)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title("Instructions")
                .borders(Borders::ALL),
        );
    frame.render_widget(Clear, area);
    frame.render_widget(text, area);
}

fn draw_disk_chooser(frame: &mut Frame, current: DiskCount) {
    let area = center_rect(frame.area(), 36, 5);
    let choices: Vec<Span> = DiskCount::CHOICES
        .iter()
        .map(|&n| {
            let style = if n == current.get() {
                Style::default().fg(Color::Black).bg(STATUS_COLOR)
            } else {
                Style::default().fg(Color::White)
            };
            Span::styled(format!(" {} ", n), style)
        })
        .collect();
    let text = Paragraph::new(vec![
        Line::from("Number of disks?"),
        Line::from(choices),
        Line::from(Span::styled("Esc to cancel", Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().title("Restart Game").borders(Borders::ALL));
    frame.render_widget(Clear, area);
    frame.render_widget(text, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
