//! UI rendering for the TUI.
//!
//! Handles layout and widget rendering using ratatui. Every view only reads
//! from the wizard; key presses are turned into actions in `input.rs`.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Padding, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::app::CreativeFocus;
use crate::campaign::{
    BusinessField, LengthCounter, DESCRIPTION_MAX_CHARS, HEADLINE_MAX_CHARS,
};
use crate::tui::Theme;
use crate::wizard::{Step, StepStatus};
use crate::App;

/// Draw the main UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let has_error = app.wizard.last_error().is_some();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                 // Progress bar
            Constraint::Length(if has_error { 3 } else { 0 }),     // Failure banner
            Constraint::Min(8),                                    // Step view
            Constraint::Length(1),                                 // Status bar
        ])
        .split(area);

    draw_header(frame, app, chunks[0]);
    if has_error {
        draw_error_banner(frame, app, chunks[1]);
    }

    if app.is_loading() {
        draw_loading(frame, app, chunks[2]);
    } else {
        match app.step() {
            Step::BusinessInfo => draw_business_form(frame, app, chunks[2]),
            Step::Strategy => draw_strategy(frame, app, chunks[2]),
            Step::Keywords => draw_keywords(frame, app, chunks[2]),
            Step::AdCreative => draw_creative(frame, app, chunks[2]),
            Step::Review => draw_review(frame, app, chunks[2]),
        }
    }

    draw_status_bar(frame, app, chunks[3]);
}

/// Draw the step progress bar.
fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let mut spans = Vec::new();

    for (i, step) in Step::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ── ", Style::default().fg(theme.border)));
        }
        let (marker, style) = match app.wizard.step_status(*step) {
            StepStatus::Completed => ("✓".to_string(), Style::default().fg(theme.success)),
            StepStatus::Active => (
                (i + 1).to_string(),
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            ),
            StepStatus::Pending => ((i + 1).to_string(), Style::default().fg(theme.text_muted)),
        };
        spans.push(Span::styled(format!("{} {}", marker, step.label()), style));
    }

    let header = Paragraph::new(Line::from(spans)).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" adpilot ")
            .title_style(Style::default().fg(theme.primary).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(theme.background)),
    );

    frame.render_widget(header, area);
}

/// Draw the failure banner.
fn draw_error_banner(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let message = app.wizard.last_error().unwrap_or_default();

    let banner = Paragraph::new(Line::from(vec![
        Span::styled(" ✗ ", Style::default().fg(theme.error).add_modifier(Modifier::BOLD)),
        Span::styled(message, Style::default().fg(theme.text)),
        Span::styled("  (press any key)", Style::default().fg(theme.text_muted)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.error))
            .style(Style::default().bg(theme.background)),
    );

    frame.render_widget(banner, area);
}

/// Draw the loading view while a generation call runs.
fn draw_loading(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let content = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("⟳", Style::default().fg(theme.primary))),
        Line::from(""),
        Line::from(Span::styled(
            app.step().loading_message(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("via {}", app.wizard.provider_name()),
            Style::default().fg(theme.text_muted),
        )),
    ];

    let loading = Paragraph::new(content).alignment(Alignment::Center).block(bordered(theme, ""));
    frame.render_widget(loading, area);
}

/// Draw the business info form.
fn draw_business_form(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let info = &app.wizard.document().business_info;
    let mut lines = vec![
        Line::from(Span::styled(
            "Tell us about your business",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "We'll use this to plan a search campaign for you.",
            Style::default().fg(theme.text_dim),
        )),
        Line::from(""),
    ];

    for field in BusinessField::ALL {
        let focused = field == app.focused_field;
        let value = info.get(field);

        let mut label = vec![Span::styled(
            field.label(),
            Style::default().fg(if focused { theme.primary } else { theme.text_dim }),
        )];
        if field.is_required() {
            label.push(Span::styled(" *", Style::default().fg(theme.error)));
        }
        lines.push(Line::from(label));

        let pointer = if focused { "› " } else { "  " };
        let mut input = vec![Span::styled(pointer, Style::default().fg(theme.primary))];
        if value.is_empty() {
            input.push(Span::styled(field.placeholder(), Style::default().fg(theme.text_muted)));
        } else {
            input.push(Span::styled(value, Style::default().fg(theme.text)));
        }
        if focused {
            input.push(Span::styled("▏", Style::default().fg(theme.primary)));
        }
        lines.push(Line::from(input));
        lines.push(Line::from(""));
    }

    // Dimmed until name and description are filled in
    let button = if app.wizard.can_advance() {
        Style::default().bg(theme.primary).fg(theme.text).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text_muted)
    };
    lines.push(Line::from(Span::styled(" Generate Strategy → ", button)));

    let form = Paragraph::new(lines).wrap(Wrap { trim: false }).block(bordered(theme, " Business Info "));
    frame.render_widget(form, area);
}

/// Draw the proposed strategy.
fn draw_strategy(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let Some(strategy) = app.wizard.document().strategy.as_ref() else {
        draw_empty(frame, theme, area, " Strategy ", "No strategy generated yet.");
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let lines = vec![
        field_line(theme, "Campaign Goal", &strategy.goal),
        Line::from(""),
        field_line(theme, "Bidding Strategy", &strategy.bidding_strategy),
        Line::from(""),
        field_line(theme, "Networks", &strategy.networks.join(", ")),
        Line::from(""),
        field_line(theme, "Target Locations", &strategy.locations.join(", ")),
    ];
    let cards = Paragraph::new(lines).wrap(Wrap { trim: true }).block(bordered(theme, " Strategy "));
    frame.render_widget(cards, chunks[0]);

    let rationale = Paragraph::new(strategy.rationale.as_str())
        .style(Style::default().fg(theme.text))
        .wrap(Wrap { trim: true })
        .block(bordered(theme, " Why this works "));
    frame.render_widget(rationale, chunks[1]);
}

/// Draw the keyword plan table.
fn draw_keywords(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let keywords = &app.wizard.document().keywords;
    let title = format!(" Keyword Plan ({}) ", keywords.len());

    if keywords.is_empty() {
        draw_empty(frame, theme, area, &title, "The generator returned no keywords.");
        return;
    }

    let header = Row::new(vec!["Keyword", "Match Type", "Intent"])
        .style(Style::default().fg(theme.text_dim).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = keywords
        .iter()
        .skip(app.keyword_scroll)
        .map(|kw| {
            Row::new(vec![
                Cell::from(kw.text.as_str()).style(Style::default().fg(theme.text)),
                Cell::from(kw.match_type.as_str()).style(Style::default().fg(theme.primary)),
                Cell::from(kw.intent.as_str()).style(Style::default().fg(theme.text_dim)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [Constraint::Percentage(55), Constraint::Percentage(20), Constraint::Percentage(25)],
    )
    .header(header)
    .block(bordered(theme, &title));

    frame.render_widget(table, area);
}

/// Draw the ad creative lists and the live preview.
fn draw_creative(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let Some(creative) = app.wizard.document().ad_creative.as_ref() else {
        draw_empty(frame, theme, area, " Ad Creative ", "No ad copy generated yet.");
        return;
    };

    let columns = if app.config.ui.show_preview {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area)
    } else {
        Layout::default().constraints([Constraint::Percentage(100)]).split(area)
    };

    let lists = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(columns[0]);

    draw_copy_list(
        frame,
        theme,
        lists[0],
        " Headlines ",
        &creative.headlines,
        HEADLINE_MAX_CHARS,
        app.selected_headline,
        app.creative_focus == CreativeFocus::Headlines,
    );
    draw_copy_list(
        frame,
        theme,
        lists[1],
        " Descriptions ",
        &creative.descriptions,
        DESCRIPTION_MAX_CHARS,
        app.selected_description,
        app.creative_focus == CreativeFocus::Descriptions,
    );

    if app.config.ui.show_preview {
        draw_ad_preview(frame, app, columns[1]);
    }
}

/// Draw one list of copy variations with length counters.
#[allow(clippy::too_many_arguments)]
fn draw_copy_list(
    frame: &mut Frame,
    theme: &Theme,
    area: Rect,
    title: &str,
    variations: &[String],
    limit: usize,
    selected: usize,
    focused: bool,
) {
    let items: Vec<ListItem> = variations
        .iter()
        .map(|text| {
            let counter = LengthCounter::new(text, limit);
            let counter_style = if counter.is_over_limit() {
                Style::default().fg(theme.warning).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_muted)
            };
            ListItem::new(Line::from(vec![
                Span::styled(text.as_str(), Style::default().fg(theme.text)),
                Span::raw("  "),
                Span::styled(counter.display(), counter_style),
            ]))
        })
        .collect();

    let border = if focused { theme.primary } else { theme.border };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(title)
                .style(Style::default().bg(theme.background)),
        )
        .highlight_style(Style::default().bg(theme.selected_bg).add_modifier(Modifier::BOLD))
        .highlight_symbol("› ");

    let mut state = ListState::default();
    if !variations.is_empty() {
        state.select(Some(selected.min(variations.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

/// Draw the search result style preview for the current selection.
fn draw_ad_preview(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let Some(preview) = app.preview() else {
        return;
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Ad", Style::default().fg(theme.text).add_modifier(Modifier::BOLD)),
            Span::styled(" · ", Style::default().fg(theme.text_muted)),
            Span::styled(preview.display_url.clone(), Style::default().fg(theme.ad_url)),
        ]),
        Line::from(Span::styled(
            preview.title(),
            Style::default().fg(theme.ad_title).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(preview.description.clone(), Style::default().fg(theme.text_dim))),
    ];

    let panel = Paragraph::new(lines).wrap(Wrap { trim: true }).block(bordered(theme, " Preview "));
    frame.render_widget(panel, area);
}

/// Draw the finished campaign.
fn draw_review(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let doc = app.wizard.document();
    let goal = doc.strategy.as_ref().map_or("-", |s| s.goal.as_str());

    let lines = vec![
        Line::from(Span::styled(
            "✓ Campaign Ready to Launch",
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field_line(theme, "Business", &doc.business_info.name),
        field_line(theme, "Goal", goal),
        field_line(theme, "Keywords", &format!("{} keywords selected", doc.keywords.len())),
        field_line(theme, "Budget", &format!("{} / month", doc.business_info.budget)),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                " Export to Google Ads ",
                Style::default().bg(theme.primary).fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  [n] Create new campaign", Style::default().fg(theme.text_dim)),
        ]),
    ];

    let review = Paragraph::new(lines).wrap(Wrap { trim: true }).block(bordered(theme, " Review "));
    frame.render_widget(review, area);
}

/// Draw the status bar with key hints.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let hints = if app.is_loading() {
        "Working…"
    } else if app.wizard.last_error().is_some() {
        "Any key dismiss"
    } else {
        match app.step() {
            Step::BusinessInfo => "Tab next field • Enter generate strategy • Esc quit",
            Step::Strategy => "Enter find keywords • Esc back • q quit",
            Step::Keywords => "↑↓ scroll • Enter write ads • Esc back • q quit",
            Step::AdCreative => "↑↓ select • Tab switch list • Enter review • Esc back • q quit",
            Step::Review => "n new campaign • q quit",
        }
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", app.step().label()),
        Style::default().bg(theme.primary).fg(theme.background).add_modifier(Modifier::BOLD),
    )];
    if let Some(ref message) = app.status_message {
        spans.push(Span::styled(format!(" {} ", message), Style::default().fg(theme.warning)));
    }

    let left_width = Line::from(spans.clone()).width();
    let total_width = area.width as usize;
    let padding = total_width.saturating_sub(left_width + hints.chars().count() + 1).max(1);

    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(hints, Style::default().fg(theme.text_muted)));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.background));
    frame.render_widget(status, area);
}

fn draw_empty(frame: &mut Frame, theme: &Theme, area: Rect, title: &str, message: &str) {
    let empty = Paragraph::new(Span::styled(message.to_string(), Style::default().fg(theme.text_muted)))
        .alignment(Alignment::Center)
        .block(bordered(theme, title));
    frame.render_widget(empty, area);
}

fn field_line(theme: &Theme, label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:18}", label), Style::default().fg(theme.text_dim)),
        Span::styled(value.to_string(), Style::default().fg(theme.text).add_modifier(Modifier::BOLD)),
    ])
}

fn bordered<'a>(theme: &Theme, title: &str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(title.to_string())
        .title_style(Style::default().fg(theme.primary).add_modifier(Modifier::BOLD))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(theme.background))
}
