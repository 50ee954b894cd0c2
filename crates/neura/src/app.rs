use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use neura_config::Config;
use neura_core::{AnimationSpeed, ColorTheme, Route, Viewport, intersection_ratio};
use neura_effects::{Counter, CounterConfig, NetworkCanvas, NetworkEffect, Scene};
use neura_tween::Ease;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use tracing::info;

use crate::{
    content,
    form::FormState,
    pages::{self, Page},
};

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Page currently shown.
    route: Route,
    theme: ColorTheme,
    speed: AnimationSpeed,
    /// Poll timeout, one frame at the configured rate.
    frame_time: Duration,
    counter_config: CounterConfig,
    /// Node/line background of the current page.
    background: NetworkEffect<Scene>,
    /// Stat counters of the current page.
    counters: Vec<Counter>,
    form: FormState,
    /// First content row shown in the body.
    scroll: u16,
    /// Body area from the last draw.
    body: Rect,
    /// Content row of the stat counters, if the page has any.
    stats_row: Option<u16>,
    content_height: u16,
    last_tick: Instant,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let fps = config.fps.max(1);
        Self {
            running: false,
            route: Route::Home,
            theme: config.theme,
            speed: config.speed,
            frame_time: Duration::from_secs_f64(1.0 / f64::from(fps)),
            counter_config: config.counter,
            background: NetworkEffect::new(config.network),
            counters: Vec::new(),
            form: FormState::new(),
            scroll: 0,
            body: Rect::default(),
            stats_row: None,
            content_height: 0,
            last_tick: Instant::now(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let size = terminal.size()?;
        self.body = body_area(Rect::new(0, 0, size.width, size.height));
        self.navigate(Route::Home);
        self.last_tick = Instant::now();
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
            self.on_tick();
        }
        self.unmount();
        Ok(())
    }

    /// Leave the current page and mount `route`.
    fn navigate(&mut self, route: Route) {
        self.unmount();
        self.route = route;
        self.scroll = 0;
        self.stats_row = None;

        let config = self.counter_config_for(route);
        self.counters = content::stats_for(route)
            .iter()
            .map(|stat| Counter::new(stat.value, stat.suffix, config))
            .collect();

        // Pages without a host simply get no background.
        let host = route.hosts_background().then(Scene::new);
        self.background.activate(host, self.viewport());
        info!(path = route.path(), "navigated");
    }

    fn unmount(&mut self) {
        self.background.teardown();
        for counter in &mut self.counters {
            counter.teardown();
        }
        self.form.stop_editing();
    }

    /// The about page counts faster with a softer ease.
    fn counter_config_for(&self, route: Route) -> CounterConfig {
        match route {
            Route::About => CounterConfig {
                duration_secs: 2.0,
                ease: Ease::Power2Out,
                ..self.counter_config
            },
            _ => self.counter_config,
        }
    }

    fn viewport(&self) -> Viewport {
        Viewport::from_cells(self.body.width, self.body.height)
    }

    /// Advance animations by the wall time since the last tick.
    fn on_tick(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_tick).as_secs_f32() * self.speed.time_scale();
        self.last_tick = now;

        self.background.tick(dt);
        if let Some(row) = self.stats_row {
            let element = Rect::new(0, row, 1, Page::STATS_BLOCK_HEIGHT);
            let visible = Rect::new(0, self.scroll, 1, self.body.height);
            let ratio = intersection_ratio(element, visible);
            for counter in &mut self.counters {
                counter.observe(ratio);
            }
        }
        for counter in &mut self.counters {
            counter.tick(dt);
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let color = self.theme.color();
        let [header, body, help] = layout(frame.area());
        self.body = body;

        self.render_header(frame, header, color);

        if let Some(scene) = self.background.view() {
            frame.render_widget(NetworkCanvas::new(scene, color), body);
        }

        let page = pages::build(self.route, &self.counters, &self.form, color, body.width);
        self.stats_row = page.stats_row;
        self.content_height = page.height();
        self.scroll = self.scroll.min(self.max_scroll());
        frame.render_widget(Paragraph::new(page.lines).scroll((self.scroll, 0)), body);

        self.render_help(frame, help, color);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, color: Color) {
        let [logo, nav] = Layout::horizontal([Constraint::Length(8), Constraint::Fill(1)])
            .areas(area);
        frame.render_widget(Line::from("NEURA".bold().fg(color)), logo);

        let mut spans = Vec::new();
        for (i, route) in Route::ALL.into_iter().enumerate() {
            let label = format!(" {} {} ", i + 1, route.label());
            if route.is_active(self.route.path()) {
                spans.push(Span::styled(label, Style::new().fg(Color::Black).bg(color).bold()));
            } else {
                spans.push(Span::raw(label).gray());
            }
        }
        frame.render_widget(Line::from(spans).right_aligned(), nav);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect, color: Color) {
        let help = if self.form.is_editing() {
            Line::from(vec![
                "tab".bold().fg(color),
                " next field  ".dark_gray(),
                "←/→".bold().fg(color),
                " budget  ".dark_gray(),
                "enter".bold().fg(color),
                " send  ".dark_gray(),
                "esc".bold().fg(color),
                " done".dark_gray(),
            ])
        } else {
            let mut spans = vec![
                "q".bold().fg(color),
                " quit  ".dark_gray(),
                "←/→".bold().fg(color),
                " page  ".dark_gray(),
                "j/k".bold().fg(color),
                " scroll  ".dark_gray(),
                "c".bold().fg(color),
                " cycle color  ".dark_gray(),
                "s".bold().fg(color),
                format!(" speed: {}", self.speed.label()).dark_gray(),
            ];
            if self.route == Route::Contact {
                spans.push("  e".bold().fg(color));
                spans.push(" edit form".dark_gray());
            }
            Line::from(spans)
        };
        frame.render_widget(help.centered(), area);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls for at most one frame so animations keep moving.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.frame_time)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(columns, rows) => self.on_resize(columns, rows),
                _ => {}
            }
        }
        Ok(())
    }

    fn on_resize(&mut self, columns: u16, rows: u16) {
        self.body = body_area(Rect::new(0, 0, columns, rows));
        self.background.resize(self.viewport());
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        if key.modifiers == KeyModifiers::CONTROL
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            self.quit();
            return;
        }
        if self.form.is_editing() {
            self.form.on_key_event(key);
            return;
        }
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q')) => self.quit(),
            (_, KeyCode::Char(ch @ '1'..='5')) => {
                let index = ch as usize - '1' as usize;
                self.go_to(Route::ALL[index]);
            }
            (_, KeyCode::Right | KeyCode::Tab | KeyCode::Char('l')) => {
                self.go_to(self.route.next())
            }
            (_, KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h')) => {
                self.go_to(self.route.prev())
            }
            (_, KeyCode::Down | KeyCode::Char('j')) => self.scroll_by(1),
            (_, KeyCode::Up | KeyCode::Char('k')) => self.scroll_by(-1),
            (_, KeyCode::PageDown | KeyCode::Char(' ')) => {
                self.scroll_by(i32::from(self.body.height.max(2) - 1))
            }
            (_, KeyCode::PageUp) => self.scroll_by(-i32::from(self.body.height.max(2) - 1)),
            (_, KeyCode::Home | KeyCode::Char('g')) => self.scroll = 0,
            (_, KeyCode::End | KeyCode::Char('G')) => self.scroll = self.max_scroll(),
            (_, KeyCode::Char('c')) => self.cycle_color_theme(),
            (_, KeyCode::Char('s')) => self.cycle_speed(),
            (_, KeyCode::Char('e') | KeyCode::Enter) if self.route == Route::Contact => {
                self.form.begin_editing()
            }
            _ => {}
        }
    }

    /// Navigate unless `route` is already shown.
    fn go_to(&mut self, route: Route) {
        if route != self.route {
            self.navigate(route);
        }
    }

    fn scroll_by(&mut self, delta: i32) {
        let target = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll()));
        self.scroll = u16::try_from(target).unwrap_or(0);
    }

    fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.body.height)
    }

    /// Cycle through available color themes.
    fn cycle_color_theme(&mut self) {
        self.theme = self.theme.next();
    }

    fn cycle_speed(&mut self) {
        self.speed = self.speed.next();
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Split the screen into header, body and help rows.
fn layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(2), // Header and a spacer
        Constraint::Fill(1),   // Page body
        Constraint::Length(1), // Help text
    ])
    .areas(area)
}

fn body_area(area: Rect) -> Rect {
    let [_, body, _] = layout(area);
    body
}
