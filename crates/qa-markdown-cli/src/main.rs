use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use qa_markdown_config::Config;
use qa_markdown_engine::{io, parse_document, render_preview};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

mod preview;

#[derive(Debug, PartialEq, Eq)]
struct CliArgs {
    html: bool,
    config_path: Option<PathBuf>,
    file: PathBuf,
}

impl CliArgs {
    /// Parses `[--html] [--config <path>] <file>`. `None` means print usage.
    fn parse(args: &[String]) -> Option<Self> {
        let mut html = false;
        let mut config_path = None;
        let mut file = None;

        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--html" => html = true,
                "--config" => config_path = Some(PathBuf::from(iter.next()?)),
                s if s.starts_with("--") => return None,
                s if file.is_none() => file = Some(PathBuf::from(s)),
                _ => return None,
            }
        }

        Some(Self {
            html,
            config_path,
            file: file?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Editor,
    Preview,
}

impl Tab {
    fn index(self) -> usize {
        match self {
            Tab::Editor => 0,
            Tab::Preview => 1,
        }
    }

    fn toggle(self) -> Self {
        match self {
            Tab::Editor => Tab::Preview,
            Tab::Preview => Tab::Editor,
        }
    }
}

struct App {
    title: String,
    source: Vec<Line<'static>>,
    preview: Vec<Line<'static>>,
    tab: Tab,
    scroll: u16,
}

impl App {
    fn new(title: String, content: &str, config: &Config) -> Self {
        let document = parse_document(content);
        log::info!("{title}: {} blocks", document.len());

        Self {
            title,
            source: content.lines().map(|l| Line::from(l.to_string())).collect(),
            preview: preview::document_lines(&document, &config.empty_placeholder),
            tab: Tab::Preview,
            scroll: 0,
        }
    }

    fn current_lines(&self) -> &[Line<'static>] {
        match self.tab {
            Tab::Editor => &self.source,
            Tab::Preview => &self.preview,
        }
    }

    fn switch_tab(&mut self) {
        self.tab = self.tab.toggle();
        self.scroll = 0;
    }

    fn scroll_down(&mut self) {
        let max = self.current_lines().len().saturating_sub(1);
        if (self.scroll as usize) < max {
            self.scroll += 1;
        }
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}

fn load_config(args: &CliArgs) -> Config {
    let (loaded, path) = match &args.config_path {
        Some(path) => (Config::load_from_path(path), path.clone()),
        None => (Config::load(), Config::config_path()),
    };

    match loaded {
        Ok(Some(config)) => {
            log::info!("Using config from {}", path.display());
            config
        }
        Ok(None) => {
            log::info!("No config at {}, using defaults", path.display());
            Config::default()
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("qa-markdown-cli");
    let Some(cli) = CliArgs::parse(&args) else {
        eprintln!("Usage: {program} [--html] [--config <config.toml>] <file.md>");
        process::exit(1);
    };

    let config = load_config(&cli);

    let content = match io::read_document(&cli.file) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error: Could not read '{}': {e}", cli.file.display());
            process::exit(1);
        }
    };

    if cli.html {
        println!("{}", render_preview(&content, &config.html_options()));
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(cli.file.display().to_string(), &content, &config);

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Tab => app.switch_tab(),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    let tabs = Tabs::new(vec!["Editor", "Preview"])
        .block(Block::default().borders(Borders::ALL).title(app.title.clone()))
        .select(app.tab.index())
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));
    f.render_widget(tabs, chunks[0]);

    let content = Paragraph::new(app.current_lines().to_vec())
        .block(Block::default().borders(Borders::ALL))
        .scroll((app.scroll, 0));
    f.render_widget(content, chunks[1]);

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("Tab: Editor/Preview | "),
        Span::raw("↑/k: Up | "),
        Span::raw("↓/j: Down"),
    ]);
    f.render_widget(Paragraph::new(help), chunks[2]);
}
