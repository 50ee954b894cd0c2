//! Page bodies as scrollable lines.

use neura_core::Route;
use neura_effects::Counter;
use neura_fonts::{GLYPH_HEIGHT, art_width, build_counter_art};
use ratatui::{
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
};

use crate::{
    content::{self, Card, Project, Stat},
    form::FormState,
};
use unicode_width::UnicodeWidthStr;

/// Widest a wrapped paragraph may get.
const MAX_TEXT_WIDTH: usize = 76;

/// Rendered page content.
#[derive(Debug, Default)]
pub struct Page {
    pub lines: Vec<Line<'static>>,
    /// Content row where the stat counters start, if the page has any.
    pub stats_row: Option<u16>,
}

impl Page {
    /// Rows of the stats block: the glyph rows plus the caption row.
    pub const STATS_BLOCK_HEIGHT: u16 = GLYPH_HEIGHT as u16 + 1;

    pub fn height(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }
}

/// Build the body of `route` for a viewport `width` cells wide.
pub fn build(
    route: Route,
    counters: &[Counter],
    form: &FormState,
    color: Color,
    width: u16,
) -> Page {
    let mut page = PageBuilder::new(color, width);
    match route {
        Route::Home => home(&mut page, counters),
        Route::Services => services(&mut page),
        Route::Portfolio => portfolio(&mut page),
        Route::About => about(&mut page, counters),
        Route::Contact => contact(&mut page, form),
    }
    page.finish()
}

fn home(page: &mut PageBuilder, counters: &[Counter]) {
    page.blank();
    page.accent_line(content::TAGLINE);
    page.blank();
    page.title("Building the ", "Future");
    page.title("of Digital", "");
    page.blank();
    page.paragraph(content::HERO_INTRO);
    page.blank();
    page.buttons(&["Start Your Project", "Watch Demo"]);
    page.blank();
    page.blank();
    page.stats(counters, &content::HERO_STATS);
    page.blank();
    page.blank();

    page.title("What We ", "Do");
    page.blank();
    page.cards(&content::SERVICES);

    page.title("Our ", "Process");
    page.blank();
    for step in &content::PROCESS {
        page.line(
            Line::from(vec![
                Span::styled(step.number, page.accent().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::raw(step.title).bold(),
            ])
            .centered(),
        );
        page.paragraph(step.description);
        page.blank();
    }

    page.title("Featured ", "Work");
    page.blank();
    page.projects(&content::FEATURED);

    call_to_action(page);
}

fn services(page: &mut PageBuilder) {
    page.blank();
    page.title("Our ", "Services");
    page.blank();
    page.paragraph(
        "From simple landing pages to complex web applications, we build digital experiences \
         that drive results.",
    );
    page.blank();
    for tier in &content::TIERS {
        let mut heading = vec![Span::raw(tier.name).bold()];
        if tier.popular {
            heading.push(Span::raw("  "));
            heading.push(Span::styled(
                " Most Popular ",
                Style::new().fg(Color::Black).bg(page.color),
            ));
        }
        page.line(Line::from(heading).centered());
        page.paragraph(tier.description);
        page.line(Line::styled(tier.price.to_string(), page.accent()).centered());
        for feature in tier.features {
            let bullet = Line::from(vec![
                Span::styled("✓ ", page.accent()),
                Span::raw(*feature).gray(),
            ]);
            page.line(bullet.centered());
        }
        page.blank();
    }

    page.title("Additional ", "Services");
    page.paragraph("We offer comprehensive digital solutions beyond website development");
    page.blank();
    page.cards(&content::EXTRA_SERVICES);

    call_to_action(page);
}

fn portfolio(page: &mut PageBuilder) {
    page.blank();
    page.title("Our ", "Work");
    page.blank();
    page.paragraph(
        "Explore our portfolio of cutting-edge digital experiences crafted for forward-thinking \
         brands.",
    );
    page.blank();
    page.projects(&content::PROJECTS);
    call_to_action(page);
}

fn about(page: &mut PageBuilder, counters: &[Counter]) {
    page.blank();
    page.title("About ", "NEURA");
    page.blank();
    page.paragraph(
        "Neural. Digital. Different. We're a team of passionate creators building the future \
         of web experiences.",
    );
    page.blank();
    for paragraph in &content::STORY {
        page.paragraph(paragraph);
        page.blank();
    }
    page.line(
        Line::from(vec![
            Span::raw("Powered by ").bold(),
            Span::styled("NEURA", page.accent().add_modifier(Modifier::BOLD)),
            Span::raw(", where intelligence meets design.").bold(),
        ])
        .centered(),
    );
    page.blank();
    page.blank();
    page.stats(counters, &content::ABOUT_STATS);
    page.blank();
    page.blank();

    page.title("Our ", "Values");
    page.blank();
    page.cards(&content::VALUES);

    page.title("Built by ", "Experts");
    page.blank();
    page.paragraph(
        "Our team brings together designers, developers, and strategists with expertise in \
         modern web technologies, UX design, and digital marketing.",
    );
    page.blank();
    page.line(Line::raw(content::SKILLS.join("  ·  ")).gray().centered());
    page.blank();
}

fn contact(page: &mut PageBuilder, form: &FormState) {
    page.blank();
    page.title("Let's ", "Connect");
    page.blank();
    page.paragraph(
        "Ready to bring your vision to life? Get in touch and let's create something \
         extraordinary together.",
    );
    page.blank();
    for line in form.lines(page.color) {
        page.line(line.centered());
    }
    page.blank();

    page.title("Get in ", "Touch");
    page.blank();
    for (label, value) in [
        ("Email", content::EMAIL),
        ("Phone", content::PHONE),
        ("Office", content::LOCATION),
    ] {
        page.line(
            Line::from(vec![
                Span::styled(format!("{label:>8}  "), page.accent()),
                Span::raw(value),
            ])
            .centered(),
        );
    }
    page.blank();
    page.line(Line::raw("Business Hours").bold().centered());
    for (days, hours) in &content::HOURS {
        page.line(Line::raw(format!("{days:<18}{hours:>18}")).gray().centered());
    }
    page.blank();
}

fn call_to_action(page: &mut PageBuilder) {
    page.title("Ready to Build Something ", "Amazing?");
    page.blank();
    page.paragraph(
        "Let's discuss your project and create a digital experience that exceeds \
         expectations. Get in touch today.",
    );
    page.blank();
    page.buttons(&["Start Your Project", "Schedule a Call"]);
    page.blank();
}

/// Accumulates lines while tracking the stats row.
struct PageBuilder {
    color: Color,
    text_width: usize,
    page: Page,
}

impl PageBuilder {
    fn new(color: Color, width: u16) -> Self {
        let text_width = usize::from(width).saturating_sub(4).clamp(1, MAX_TEXT_WIDTH);
        Self {
            color,
            text_width,
            page: Page::default(),
        }
    }

    fn finish(self) -> Page {
        self.page
    }

    fn accent(&self) -> Style {
        Style::new().fg(self.color)
    }

    fn line(&mut self, line: Line<'static>) {
        self.page.lines.push(line);
    }

    fn blank(&mut self) {
        self.line(Line::default());
    }

    fn accent_line(&mut self, text: &'static str) {
        let style = self.accent().add_modifier(Modifier::ITALIC);
        self.line(Line::styled(text, style).centered());
    }

    /// Bold heading with an optional accented tail.
    fn title(&mut self, lead: &'static str, accent: &'static str) {
        let accent_style = self.accent().add_modifier(Modifier::BOLD);
        self.line(
            Line::from(vec![
                Span::raw(lead).bold(),
                Span::styled(accent, accent_style),
            ])
            .centered(),
        );
    }

    fn paragraph(&mut self, text: &str) {
        for row in wrap(text, self.text_width) {
            self.line(Line::raw(row).gray().centered());
        }
    }

    fn buttons(&mut self, labels: &[&'static str]) {
        let mut spans = Vec::new();
        for (i, label) in labels.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            let style = if i == 0 {
                Style::new().fg(Color::Black).bg(Color::White).bold()
            } else {
                Style::new().fg(Color::White).bold()
            };
            spans.push(Span::styled(format!("[ {label} ]"), style));
        }
        self.line(Line::from(spans).centered());
    }

    fn cards(&mut self, cards: &[Card]) {
        for card in cards {
            let style = self.accent().add_modifier(Modifier::BOLD);
            self.line(Line::styled(card.title, style).centered());
            self.paragraph(card.description);
            self.blank();
        }
    }

    fn projects(&mut self, projects: &[Project]) {
        for project in projects {
            self.line(
                Line::from(vec![
                    Span::raw(project.title).bold(),
                    Span::raw("  "),
                    Span::styled(project.category, self.accent()),
                ])
                .centered(),
            );
            self.paragraph(project.description);
            if !project.tags.is_empty() {
                self.line(Line::raw(project.tags.join(" · ")).dark_gray().centered());
            }
            self.blank();
        }
    }

    /// Counters drawn as block digits with their captions underneath.
    ///
    /// Each column is sized for the final value so the row does not shift
    /// while counting.
    fn stats(&mut self, counters: &[Counter], stats: &[Stat]) {
        let columns: Vec<(Vec<String>, usize)> = counters
            .iter()
            .zip(stats)
            .map(|(counter, stat)| {
                let final_text = format!("{}{}", stat.value, stat.suffix);
                let width = art_width(&final_text).max(stat.label.width());
                (build_counter_art(&counter.text()), width)
            })
            .collect();
        if columns.is_empty() {
            return;
        }

        self.page.stats_row = Some(self.page.height());
        let style = self.accent().add_modifier(Modifier::BOLD);
        for row in 0..GLYPH_HEIGHT {
            let text = columns
                .iter()
                .map(|(art, width)| center(&art[row], *width))
                .collect::<Vec<_>>()
                .join("    ");
            self.line(Line::styled(text, style).centered());
        }
        let captions = columns
            .iter()
            .zip(stats)
            .map(|((_, width), stat)| center(stat.label, *width))
            .collect::<Vec<_>>()
            .join("    ");
        self.line(Line::raw(captions).dark_gray().centered());
    }
}

/// Greedy word wrap. Words longer than `width` get a row of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    for word in text.split_whitespace() {
        let len = word.width();
        if current_len > 0 && current_len + 1 + len > width {
            rows.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += len;
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

/// Pad `text` on both sides to `width` terminal cells.
fn center(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    let left = fill / 2;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(fill - left))
}

#[cfg(test)]
mod tests {
    use neura_effects::CounterConfig;

    use super::*;

    fn counters(stats: &[Stat]) -> Vec<Counter> {
        stats
            .iter()
            .map(|s| Counter::new(s.value, s.suffix, CounterConfig::default()))
            .collect()
    }

    fn text(page: &Page) -> Vec<String> {
        page.lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_wrap_respects_width() {
        let rows = wrap("the quick brown fox jumps over the lazy dog", 10);
        assert_eq!(rows, ["the quick", "brown fox", "jumps over", "the lazy", "dog"]);
        assert!(wrap("", 10).is_empty());
        assert_eq!(wrap("supercalifragilistic word", 5), ["supercalifragilistic", "word"]);
    }

    #[test]
    fn test_home_marks_stats_row() {
        let counters = counters(&content::HERO_STATS);
        let page = build(Route::Home, &counters, &FormState::new(), Color::Magenta, 100);
        let row = usize::from(page.stats_row.expect("home has stats"));
        let lines = text(&page);
        assert!(lines[row].contains('█'));
        let captions = &lines[row + GLYPH_HEIGHT];
        assert!(captions.contains("Projects Delivered"));
        assert!(captions.contains("Global Clients"));
    }

    #[test]
    fn test_stats_columns_keep_their_width_while_counting() {
        let mut counters = counters(&content::ABOUT_STATS);
        let form = FormState::new();
        let before = build(Route::About, &counters, &form, Color::Cyan, 120);
        for counter in &mut counters {
            counter.observe(1.0);
            counter.tick(10.0);
        }
        let after = build(Route::About, &counters, &form, Color::Cyan, 120);
        let row = usize::from(before.stats_row.unwrap());
        assert_eq!(before.stats_row, after.stats_row);
        assert_eq!(before.lines[row].width(), after.lines[row].width());
        assert!(text(&after)[row + GLYPH_HEIGHT].contains("Team Members"));
    }

    #[test]
    fn test_pages_without_counters_have_no_stats_row() {
        let form = FormState::new();
        for route in [Route::Services, Route::Portfolio, Route::Contact] {
            let page = build(route, &[], &form, Color::Green, 80);
            assert_eq!(page.stats_row, None, "{route:?}");
            assert!(page.height() > 10);
        }
    }

    #[test]
    fn test_contact_page_includes_form_and_details() {
        let page = build(Route::Contact, &[], &FormState::new(), Color::White, 90);
        let lines = text(&page);
        assert!(lines.iter().any(|l| l.contains("Email Address")));
        assert!(lines.iter().any(|l| l.contains(content::EMAIL)));
        assert!(lines.iter().any(|l| l.contains("Closed")));
    }

    #[test]
    fn test_paragraphs_wrap_to_narrow_viewports() {
        let page = build(Route::About, &[], &FormState::new(), Color::White, 30);
        let story_rows = wrap(content::STORY[0], 26);
        let lines = text(&page);
        assert!(story_rows.len() > 3);
        assert!(lines.iter().any(|l| *l == story_rows[0]));
        assert!(story_rows.iter().all(|row| row.width() <= 26));
    }

    #[test]
    fn test_wrap_measures_wide_characters_by_cells() {
        // Each of these words is 4 cells wide but only 2 characters long.
        let rows = wrap("日本 東京 大阪 京都", 9);
        assert_eq!(rows, ["日本 東京", "大阪 京都"]);
        assert!(rows.iter().all(|row| row.width() <= 9));
    }

    #[test]
    fn test_center_pads_by_cells() {
        assert_eq!(center("ab", 5), " ab  ");
        assert_eq!(center("日本", 6), " 日本 ");
        assert_eq!(center("toolong", 3), "toolong");
    }
}
