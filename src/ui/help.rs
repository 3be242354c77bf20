use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::config::GameConfig;
use crate::game::stats::{LifetimeStats, RoundStats};

/// Splits on spaces and bolds the listed word indices, the way the
/// board emphasizes parts of its status lines.
fn emphasized(text: &str, bold_words: &[usize]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, word) in text.split(' ').enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        if bold_words.contains(&i) {
            spans.push(Span::styled(
                word.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw(word.to_string()));
        }
    }
    Line::from(spans)
}

fn title(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().add_modifier(Modifier::UNDERLINED),
    ))
}

fn aside(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().add_modifier(Modifier::ITALIC),
    ))
}

fn help_page(page: usize, config: &GameConfig) -> Vec<Line<'static>> {
    match page {
        0 => vec![
            emphasized("Welcome to Alien Shower.", &[2, 3]),
            Line::default(),
            Line::from("Your task is to protect the earth from invading aliens."),
            Line::from("To fulfill this task you have a fleet of ships at your disposal."),
            Line::from("You will need all of them to succeed."),
            Line::default(),
            aside("(Press any key to resume...)"),
        ],
        1 => vec![
            title("Controls:"),
            Line::default(),
            emphasized(
                "You can activate any ship by pressing the respective number.",
                &[2, 4, 9],
            ),
            emphasized("You can steer left and right by pressing \"a\" or \"d\".", &[2, 8, 10]),
            emphasized("You can shoot by pressing \"s\".", &[2, 5]),
            emphasized("You can increase/decrease the speed by pressing \"+\"/\"-\".", &[4, 7]),
            emphasized(
                "You can end the game and view your score by pressing \"escape\".",
                &[2, 11],
            ),
            emphasized(
                "After each round, you can start a new one by pressing \"return\".",
                &[5, 11],
            ),
            Line::default(),
            aside("(Press any key to resume...)"),
        ],
        2 => vec![
            title("Warning:"),
            Line::default(),
            emphasized(
                &format!("Each ship can only move {} times.", config.ship_lifetime()),
                &[4, 5, 6],
            ),
            emphasized(
                &format!("Each ship can only fire {} times.", config.num_missiles),
                &[4, 5, 6],
            ),
            emphasized("You may only have one ship active at a time.", &[4, 5, 6]),
            emphasized(
                "You cannot deactivate a ship. Once one is wracked you may activate a new one.",
                &[1, 2, 11, 12, 13],
            ),
            emphasized(
                "You have a small time frame to decide on an action, before an alien moves again.",
                &[4, 5],
            ),
            Line::default(),
            aside("(Press any key to resume...)"),
        ],
        3 => vec![
            title("You will win, if:"),
            Line::default(),
            emphasized("You destroy all aliens.", &[1, 2]),
            Line::default(),
            title("You will lose, if:"),
            Line::default(),
            emphasized("You miss a shot.", &[1]),
            emphasized("A ship's lifetime expires before it makes its last shot.", &[2, 3]),
            emphasized("The aliens hit the ground.", &[1, 2]),
            Line::default(),
            aside("(Press any key to resume...)"),
        ],
        _ => {
            let keys: Vec<String> = (1..=config.num_ships)
                .map(|lane| (lane % 10).to_string())
                .collect();
            vec![
                title("Remember:"),
                Line::default(),
                emphasized(&format!("Activate: {}", keys.join(" ")), &[0]),
                emphasized("Move: a d", &[0]),
                emphasized("Shoot: s", &[0]),
                Line::default(),
                emphasized("Change Speed: + -", &[0, 1]),
                Line::default(),
                Line::from("Look ahead to where the next enemy will come from and plan your move."),
                Line::from("But don't take too much time to act."),
                Line::from("Have fun!"),
                Line::default(),
                aside("(Press return to see a board overview, press return again to start...)"),
            ]
        }
    }
}

pub fn render_help(frame: &mut Frame, area: Rect, page: usize, config: &GameConfig) {
    let block = framed();
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(help_page(page, config)), inner);
}

pub fn render_goodbye(
    frame: &mut Frame,
    area: Rect,
    score: &RoundStats,
    totals: &LifetimeStats,
) {
    let block = framed();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from("Thanks for playing Alien Shower."),
        Line::default(),
        Line::from("Your final score:"),
        Line::default(),
        score_row("Triumphs:", score.wins.to_string()),
        score_row("Losses:", score.losses.to_string()),
        Line::default(),
    ];
    for (label, tally) in totals.rows() {
        lines.push(score_row(&format!("Total {label}:"), tally.to_string()));
    }
    lines.push(Line::default());
    lines.push(aside("(Press any key to quit)"));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn framed() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Alien Shower ")
        .title_style(Style::default().add_modifier(Modifier::BOLD))
}

fn score_row(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{label:<32}")),
        Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
    ])
}
