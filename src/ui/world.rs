use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, Screen};
use crate::game::round::{RoundState, SlotStatus};
use crate::game::stats::RoundStats;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tone {
    Win,
    Loss,
}

/// Everything one frame of the board needs, assembled per screen.
struct BoardView<'a> {
    round: &'a RoundState,
    stats: &'a RoundStats,
    squares: usize,
    next_action: String,
    feedback: &'a str,
    hint: &'a str,
    tone: Option<Tone>,
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Alien Shower ")
        .title_style(Style::default().add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let view = match app.screen {
        Screen::Overview => BoardView {
            round: &app.snapshot.round,
            stats: &app.snapshot.stats,
            squares: app.countdown_squares(),
            next_action: app.snapshot.next_action.clone(),
            feedback: app.snapshot.feedback,
            hint: "hit return to start",
            tone: None,
        },
        Screen::RoundOver(outcome) => BoardView {
            round: &app.round,
            stats: &app.round_stats,
            squares: 0,
            next_action: app.next_action_label(),
            feedback: &app.feedback,
            hint: &app.hint,
            tone: Some(if outcome.is_win() { Tone::Win } else { Tone::Loss }),
        },
        _ => BoardView {
            round: &app.round,
            stats: &app.round_stats,
            squares: app.countdown_squares(),
            next_action: app.next_action_label(),
            feedback: &app.feedback,
            hint: &app.hint,
            tone: None,
        },
    };

    frame.render_widget(Paragraph::new(board_lines(&view)), inner);
}

/// The fixed line sequence of one board frame: score header, alien
/// look-ahead, the sky, the fleet, the countdown, the action preview
/// and two feedback lines.
fn board_lines(view: &BoardView) -> Vec<Line<'static>> {
    let round = view.round;
    let n = round.config.num_ships;
    let sky = round.config.sky_height;
    let width = 4 * n - 1;

    let mut lines = Vec::with_capacity(sky + 15);
    lines.push(header_line(view));
    lines.push(Line::from(format!("aliens destroyed: {}", view.stats.destroyed)));
    lines.push(Line::default());

    // where the next alien will drop in
    lines.push(spaced_row(n, |lane| {
        Span::raw(if round.next_spawn_lane() == Some(lane) { " m " } else { "   " })
    }));
    lines.push(Line::from("_".repeat(width)));

    for row in 0..sky {
        lines.push(spaced_row(n, |lane| {
            let cell = if round
                .shots
                .iter()
                .any(|shot| shot.lane == lane && shot.altitude == row)
            {
                " * "
            } else if round
                .enemy
                .map_or(false, |enemy| enemy.lane == lane && enemy.altitude == row)
            {
                " m "
            } else {
                "   "
            };
            Span::raw(cell)
        }));
    }

    lines.push(ground_line(round, width));
    lines.push(fleet_line(round));
    lines.push(lane_number_line(round));
    lines.push(Line::default());

    lines.push(Line::from(format!(
        "time left: {}",
        "\u{25a0}".repeat(view.squares)
    )));
    lines.push(Line::from(vec![
        Span::raw("next: "),
        Span::styled(view.next_action.clone(), bold()),
    ]));
    lines.push(ship_status_line(round));
    lines.push(Line::default());

    let style = feedback_style(view.tone);
    lines.push(Line::from(Span::styled(view.feedback.to_string(), style)));
    lines.push(Line::from(Span::styled(view.hint.to_string(), style)));
    lines
}

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn dim() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

fn spaced_row(n: usize, mut cell: impl FnMut(usize) -> Span<'static>) -> Line<'static> {
    let mut spans = Vec::with_capacity(2 * n);
    for lane in 0..n {
        if lane > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(cell(lane));
    }
    Line::from(spans)
}

fn header_line(view: &BoardView) -> Line<'static> {
    let wins = format!("wins: {},", view.stats.wins);
    let losses = format!("losses: {}", view.stats.losses);
    let (wins_style, losses_style) = match view.tone {
        Some(Tone::Win) => (bold().fg(Color::Green), Style::default()),
        Some(Tone::Loss) => (Style::default(), bold().fg(Color::Red)),
        None => (Style::default(), Style::default()),
    };
    Line::from(vec![
        Span::styled(wins, wins_style),
        Span::raw(" "),
        Span::styled(losses, losses_style),
    ])
}

/// Dotted ground line; the active ship sits embedded in it.
fn ground_line(round: &RoundState, width: usize) -> Line<'static> {
    let Some(ship) = round.ship else {
        return Line::from(".".repeat(width));
    };
    let mut spans = Vec::new();
    for lane in 0..round.config.num_ships {
        if lane > 0 {
            spans.push(Span::raw("."));
        }
        if lane == ship.pos {
            spans.push(Span::raw("."));
            spans.push(Span::styled("w", bold()));
            spans.push(Span::raw("."));
        } else {
            spans.push(Span::raw("..."));
        }
    }
    Line::from(spans)
}

/// Ships still waiting on the ground; dimmed while one of them flies.
fn fleet_line(round: &RoundState) -> Line<'static> {
    let style = if round.ship.is_some() { dim() } else { bold() };
    spaced_row(round.config.num_ships, |lane| {
        let cell = if round.slots[lane] == SlotStatus::Inactive {
            " w "
        } else {
            "   "
        };
        Span::styled(cell, style)
    })
}

/// Activation keys; spent lanes fade out, available ones stand out once
/// a choice matters.
fn lane_number_line(round: &RoundState) -> Line<'static> {
    let all_fresh = round
        .slots
        .iter()
        .all(|slot| *slot == SlotStatus::Inactive);
    spaced_row(round.config.num_ships, |lane| {
        let label = format!("({})", (lane + 1) % 10);
        let style = if round.ship.is_some() {
            dim()
        } else if all_fresh {
            Style::default()
        } else if round.slots[lane] == SlotStatus::Inactive {
            bold()
        } else {
            dim()
        };
        Span::styled(label, style)
    })
}

fn ship_status_line(round: &RoundState) -> Line<'static> {
    let (life, shots) = round.ship.map_or((0, 0), |ship| (ship.lifetime, ship.shots));
    Line::from(vec![
        Span::raw("life: "),
        Span::styled(life.to_string(), bold()),
        Span::raw(", shots: "),
        Span::styled(shots.to_string(), bold()),
    ])
}

fn feedback_style(tone: Option<Tone>) -> Style {
    match tone {
        Some(Tone::Win) => bold().fg(Color::Green),
        Some(Tone::Loss) => bold().fg(Color::Red),
        None => bold(),
    }
}
