//! Markdown rendering for assistant messages.
//!
//! `render_markdown()` parses GitHub-flavored markdown (strikethrough,
//! tables, task lists) into styled lines; `markdown_ui()` paints those
//! lines with egui. Soft line breaks become hard breaks, matching how the
//! server formats its answers. Raw HTML is shown as literal text, never
//! interpreted.
//!
//! Only assistant text ever goes through this module. User text is
//! displayed as a plain label elsewhere — that asymmetry is the trust
//! boundary against markup injection.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::theme::*;

/// Inline style of a span, accumulated from the surrounding tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpanStyle {
    pub strong: bool,
    pub emphasis: bool,
    pub strikethrough: bool,
    pub code: bool,
    pub link: bool,
    /// Heading rank 1-6 when inside a heading
    pub heading: Option<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineKind {
    #[default]
    Text,
    CodeBlock,
    Rule,
}

/// One visual line of rendered markdown.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
    pub kind: LineKind,
}

impl Line {
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    fn is_empty(&self) -> bool {
        self.spans.is_empty() && self.kind == LineKind::Text
    }
}

/// Parse markdown into styled lines.
pub fn render_markdown(text: &str) -> Vec<Line> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut renderer = Renderer::default();
    for event in Parser::new_ext(text, options) {
        match event {
            Event::Start(tag) => renderer.start_tag(tag),
            Event::End(tag) => renderer.end_tag(tag),
            Event::Text(t) => renderer.text(&t),
            Event::Code(t) => renderer.inline_code(&t),
            // breaks: true — soft breaks render as hard breaks
            Event::SoftBreak | Event::HardBreak => renderer.new_line(),
            Event::Rule => renderer.rule(),
            Event::TaskListMarker(checked) => renderer.task_marker(checked),
            // Raw HTML is not trusted markup here; show it literally.
            Event::Html(t) | Event::InlineHtml(t) => renderer.text(&t),
            _ => {}
        }
    }
    renderer.finish()
}

#[derive(Default)]
struct Renderer {
    lines: Vec<Line>,
    current: Line,
    style: SpanStyle,
    in_code_block: bool,
    /// Ordered-list counters; None entries are bullet lists.
    list_stack: Vec<Option<u64>>,
}

impl Renderer {
    fn start_tag(&mut self, tag: Tag) {
        match tag {
            Tag::Paragraph => self.start_block(),
            Tag::Heading { level, .. } => {
                self.start_block();
                self.style.heading = Some(heading_rank(level));
            }
            Tag::CodeBlock(_) => {
                self.start_block();
                self.in_code_block = true;
                self.style.code = true;
            }
            Tag::List(start) => {
                if self.list_stack.is_empty() {
                    self.start_block();
                }
                self.list_stack.push(start);
            }
            Tag::Item => {
                if !self.current.spans.is_empty() {
                    self.new_line();
                }
                let marker = match self.list_stack.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{}. ", n);
                        *n += 1;
                        marker
                    }
                    _ => "• ".to_string(),
                };
                let indent = "  ".repeat(self.list_stack.len().saturating_sub(1));
                self.push_span(&format!("{}{}", indent, marker));
            }
            Tag::Emphasis => self.style.emphasis = true,
            Tag::Strong => self.style.strong = true,
            Tag::Strikethrough => self.style.strikethrough = true,
            Tag::Link { .. } => self.style.link = true,
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph | TagEnd::Item => self.flush_line(),
            TagEnd::Heading(_) => {
                self.flush_line();
                self.style.heading = None;
            }
            TagEnd::CodeBlock => {
                self.flush_line();
                self.in_code_block = false;
                self.style.code = false;
            }
            TagEnd::List(_) => {
                self.list_stack.pop();
            }
            TagEnd::Emphasis => self.style.emphasis = false,
            TagEnd::Strong => self.style.strong = false,
            TagEnd::Strikethrough => self.style.strikethrough = false,
            TagEnd::Link => self.style.link = false,
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if self.in_code_block {
            // Code block text arrives with embedded newlines, possibly
            // across several events; a newline always terminates a line.
            for segment in text.split_inclusive('\n') {
                match segment.strip_suffix('\n') {
                    Some(content) => {
                        self.push_span(content);
                        if self.current.spans.is_empty() {
                            // Blank line inside the block
                            self.lines.push(Line {
                                spans: Vec::new(),
                                kind: LineKind::CodeBlock,
                            });
                        } else {
                            self.new_line();
                        }
                    }
                    None => self.push_span(segment),
                }
            }
        } else {
            self.push_span(text);
        }
    }

    fn inline_code(&mut self, text: &str) {
        let saved = self.style;
        self.style.code = true;
        self.push_span(text);
        self.style = saved;
    }

    fn rule(&mut self) {
        self.start_block();
        self.current.kind = LineKind::Rule;
        self.flush_line();
    }

    fn task_marker(&mut self, checked: bool) {
        self.push_span(if checked { "[x] " } else { "[ ] " });
    }

    fn push_span(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.current.spans.push(Span {
            text: text.to_string(),
            style: self.style,
        });
    }

    /// End the current line and start a new one of the same kind.
    fn new_line(&mut self) {
        self.flush_line();
    }

    fn flush_line(&mut self) {
        let mut line = std::mem::take(&mut self.current);
        if line.is_empty() {
            return;
        }
        if line.kind == LineKind::Text && self.in_code_block {
            line.kind = LineKind::CodeBlock;
        }
        self.lines.push(line);
    }

    /// Begin a new block, separated from the previous one by a blank line.
    fn start_block(&mut self) {
        self.flush_line();
        if !self.lines.is_empty() {
            self.lines.push(Line::default());
        }
    }

    fn finish(mut self) -> Vec<Line> {
        self.flush_line();
        while self.lines.last().map(|l| l.is_empty()).unwrap_or(false) {
            self.lines.pop();
        }
        self.lines
    }
}

fn heading_rank(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

// ─── egui painting ───────────────────────────────────────────

/// Paint pre-rendered markdown lines. Contiguous code-block lines are
/// grouped into a single monospace frame.
pub fn markdown_ui(ui: &mut egui::Ui, lines: &[Line]) {
    let mut i = 0;
    while i < lines.len() {
        match lines[i].kind {
            LineKind::Rule => {
                ui.separator();
                i += 1;
            }
            LineKind::CodeBlock => {
                let start = i;
                while i < lines.len() && lines[i].kind == LineKind::CodeBlock {
                    i += 1;
                }
                let code: Vec<String> = lines[start..i].iter().map(|l| l.text()).collect();
                egui::Frame::default()
                    .fill(CODE_BG)
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(6.0)
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(code.join("\n"))
                                .monospace()
                                .color(CODE_FG),
                        );
                    });
            }
            LineKind::Text => {
                if lines[i].spans.is_empty() {
                    ui.add_space(4.0);
                } else {
                    ui.horizontal_wrapped(|ui| {
                        ui.spacing_mut().item_spacing.x = 0.0;
                        for span in &lines[i].spans {
                            ui.label(span_rich_text(span));
                        }
                    });
                }
                i += 1;
            }
        }
    }
}

fn span_rich_text(span: &Span) -> egui::RichText {
    let mut rich = egui::RichText::new(&span.text).color(TEXT_PRIMARY);

    if let Some(rank) = span.style.heading {
        let size = match rank {
            1 => 20.0,
            2 => 18.0,
            3 => 16.0,
            _ => 14.5,
        };
        rich = rich.size(size).strong();
    }
    if span.style.strong {
        rich = rich.strong();
    }
    if span.style.emphasis {
        rich = rich.italics();
    }
    if span.style.strikethrough {
        rich = rich.strikethrough();
    }
    if span.style.code {
        rich = rich.monospace().color(CODE_FG).background_color(CODE_BG);
    }
    if span.style.link {
        rich = rich.color(ACCENT).underline();
    }
    rich
}
