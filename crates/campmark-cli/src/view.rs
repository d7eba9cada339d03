use anyhow::Result;
use campmark_engine::render::{
    DocumentTree, InlineNode, InlineStyle, ListGroup, RenderBlock, RenderLine,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io::{Stdout, stdout};

const PAGE: u16 = 10;

struct App {
    title: String,
    lines: Vec<Line<'static>>,
    scroll: u16,
}

impl App {
    fn new(title: String, tree: &DocumentTree) -> Self {
        Self {
            title,
            lines: tree_lines(tree),
            scroll: 0,
        }
    }

    fn max_scroll(&self) -> u16 {
        u16::try_from(self.lines.len().saturating_sub(1)).unwrap_or(u16::MAX)
    }

    /// Applies one key press. Returns false when the viewer should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1).min(self.max_scroll())
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::PageDown | KeyCode::Char(' ') => {
                self.scroll = self.scroll.saturating_add(PAGE).min(self.max_scroll())
            }
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(PAGE),
            KeyCode::Char('g') | KeyCode::Home => self.scroll = 0,
            KeyCode::Char('G') | KeyCode::End => self.scroll = self.max_scroll(),
            _ => {}
        }
        true
    }
}

pub fn run(title: String, tree: &DocumentTree) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(title, tree);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && !app.handle_key(key.code)
        {
            return Ok(());
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let content = Paragraph::new(app.lines.clone())
        .block(Block::default().borders(Borders::ALL).title(app.title.as_str()))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    f.render_widget(content, chunks[0]);

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k ↓/j: Scroll | "),
        Span::raw("g/G: Top/Bottom"),
    ]);
    f.render_widget(Paragraph::new(help), chunks[1]);
}

/// Lays the tree out as terminal lines.
fn tree_lines(tree: &DocumentTree) -> Vec<Line<'static>> {
    let mut out = Vec::new();
    for block in &tree.blocks {
        match block {
            RenderBlock::Code { text } => out.extend(text.split('\n').map(|l| {
                Line::from(Span::styled(
                    format!("  {l}"),
                    Style::default().fg(Color::Cyan),
                ))
            })),
            RenderBlock::Paragraphs { lines } => {
                for line in lines {
                    out.push(match line {
                        RenderLine::Rule => Line::from(Span::styled(
                            "─".repeat(40),
                            Style::default().fg(Color::DarkGray),
                        )),
                        RenderLine::Inline(nodes) => {
                            Line::from(inline_spans(nodes, tree.theme.dark))
                        }
                    });
                }
            }
            RenderBlock::Quote { lines } => {
                for nodes in lines {
                    let mut spans = vec![Span::styled("▌ ", Style::default().fg(Color::Magenta))];
                    spans.extend(inline_spans(nodes, tree.theme.dark));
                    out.push(Line::from(spans));
                }
            }
            RenderBlock::List { groups } => {
                for group in groups {
                    push_group(&mut out, group, 0, tree.theme.dark);
                }
            }
        }
    }
    out
}

fn push_group(out: &mut Vec<Line<'static>>, group: &ListGroup, depth: usize, dark: bool) {
    for (i, item) in group.items.iter().enumerate() {
        let marker = if group.ordered {
            format!("{}{}. ", "  ".repeat(depth), i + 1)
        } else {
            format!("{}• ", "  ".repeat(depth))
        };
        let mut spans = vec![Span::raw(marker)];
        spans.extend(inline_spans(&item.content, dark));
        out.push(Line::from(spans));
        for child in &item.children {
            push_group(out, child, depth + 1, dark);
        }
    }
}

fn inline_spans(nodes: &[InlineNode], dark: bool) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for node in nodes {
        let style = Style::default();
        let style = match &node.style {
            InlineStyle::Plain => style,
            InlineStyle::Strong => style.add_modifier(Modifier::BOLD),
            InlineStyle::Emphasis => style.add_modifier(Modifier::ITALIC),
            InlineStyle::StrongEmphasis => style.add_modifier(Modifier::BOLD | Modifier::ITALIC),
            InlineStyle::Struck => style.add_modifier(Modifier::CROSSED_OUT),
            InlineStyle::Marked if dark => style.bg(Color::Rgb(138, 125, 31)),
            InlineStyle::Marked => style.bg(Color::Yellow).fg(Color::Black),
            InlineStyle::Monospace => style.fg(Color::Cyan),
            InlineStyle::Anchor { .. } => {
                style.fg(Color::Magenta).add_modifier(Modifier::UNDERLINED)
            }
        };
        spans.push(Span::styled(node.text.clone(), style));
        if let InlineStyle::Anchor { href } = &node.style {
            spans.push(Span::styled(
                format!(" <{href}>"),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }
    spans
}
