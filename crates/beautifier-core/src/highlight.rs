//! Syntax tokenization of snippet code into a tree of classified spans.
//!
//! Grammars come from syntect's bundled syntax set. Every scope syntect
//! pushes is classified against a fixed vocabulary ([`TokenKind`]); scopes
//! that do not classify are transparent, so their text is hoisted into the
//! nearest classified ancestor.

use std::collections::HashMap;

use beautifier_config::{TokenColors, TokenStyle};
use syntect::parsing::{
    BasicScopeStackOp, ParseState, Scope, ScopeStack, SyntaxReference, SyntaxSet,
};
use syntect::util::LinesWithEndings;

/// Languages offered in the language selector: `(id, label)`.
pub const LANGUAGES: [(&str, &str); 6] = [
    ("javascript", "JavaScript"),
    ("typescript", "TypeScript"),
    ("css", "CSS"),
    ("html", "HTML"),
    ("python", "Python"),
    ("tsx", "React DX"),
];

/// Grammar used when a language id matches nothing.
const FALLBACK_GRAMMAR: &str = "JavaScript";

/// Classification vocabulary of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    String,
    Number,
    Comment,
    Function,
    ClassName,
    Tag,
    Attr,
    Operator,
    Punctuation,
    Boolean,
    Builtin,
    Variable,
    Property,
    Selector,
    Constant,
    Char,
}

impl TokenKind {
    pub const ALL: [TokenKind; 17] = [
        TokenKind::Keyword,
        TokenKind::String,
        TokenKind::Number,
        TokenKind::Comment,
        TokenKind::Function,
        TokenKind::ClassName,
        TokenKind::Tag,
        TokenKind::Attr,
        TokenKind::Operator,
        TokenKind::Punctuation,
        TokenKind::Boolean,
        TokenKind::Builtin,
        TokenKind::Variable,
        TokenKind::Property,
        TokenKind::Selector,
        TokenKind::Constant,
        TokenKind::Char,
    ];

    /// Tag name used to look up the palette.
    pub fn tag(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Comment => "comment",
            TokenKind::Function => "function",
            TokenKind::ClassName => "class-name",
            TokenKind::Tag => "tag",
            TokenKind::Attr => "attr",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Boolean => "boolean",
            TokenKind::Builtin => "builtin",
            TokenKind::Variable => "variable",
            TokenKind::Property => "property",
            TokenKind::Selector => "selector",
            TokenKind::Constant => "constant",
            TokenKind::Char => "char",
        }
    }

    /// Parses a tag name. `attribute` and `attr-name` are accepted for `attr`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "attribute" | "attr-name" => return Some(TokenKind::Attr),
            _ => {}
        }
        Self::ALL.into_iter().find(|k| k.tag() == tag)
    }
}

/// A node of the token tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenNode {
    Text(String),
    Span {
        kind: TokenKind,
        children: Vec<TokenNode>,
    },
}

impl TokenNode {
    /// Concatenated text of the node and its descendants.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            TokenNode::Text(t) => out.push_str(t),
            TokenNode::Span { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }
}

/// Concatenated text of a whole tree.
pub fn tree_text(nodes: &[TokenNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.collect_text(&mut out);
    }
    out
}

/// Scope prefixes and their classification. The first matching rule wins.
const SCOPE_RULES: &[(&str, TokenKind)] = &[
    ("punctuation.definition.comment", TokenKind::Comment),
    ("comment", TokenKind::Comment),
    ("punctuation.definition.string", TokenKind::String),
    ("string", TokenKind::String),
    ("constant.numeric", TokenKind::Number),
    ("constant.language.boolean", TokenKind::Boolean),
    ("constant.character", TokenKind::Char),
    ("constant", TokenKind::Constant),
    ("keyword.operator.word", TokenKind::Keyword),
    ("keyword.operator", TokenKind::Operator),
    ("keyword", TokenKind::Keyword),
    ("storage", TokenKind::Keyword),
    ("variable.language", TokenKind::Keyword),
    ("entity.name.function", TokenKind::Function),
    ("variable.function", TokenKind::Function),
    ("support.function.builtin", TokenKind::Builtin),
    ("support.function", TokenKind::Function),
    ("entity.name.class", TokenKind::ClassName),
    ("entity.name.type", TokenKind::ClassName),
    ("entity.other.inherited-class", TokenKind::ClassName),
    ("support.class", TokenKind::ClassName),
    ("entity.name.tag", TokenKind::Tag),
    ("entity.other.attribute-name", TokenKind::Attr),
    ("support.type.property-name", TokenKind::Property),
    ("variable.other.property", TokenKind::Property),
    ("variable.parameter", TokenKind::Variable),
    ("variable", TokenKind::Variable),
    ("support.type", TokenKind::Builtin),
    ("support", TokenKind::Builtin),
    ("punctuation", TokenKind::Punctuation),
    ("meta.selector", TokenKind::Selector),
];

/// Lower-cases and trims a language id and resolves the `html` alias.
pub fn normalize_language(id: &str) -> String {
    let id = id.trim().to_lowercase();
    if id == "html" {
        "markup".to_string()
    } else {
        id
    }
}

/// Owns the syntax set and the compiled scope rules.
pub struct Tokenizer {
    syntax_set: SyntaxSet,
    rules: Vec<(Scope, TokenKind)>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("syntaxes", &self.syntax_set.syntaxes().len())
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl Tokenizer {
    /// Creates a tokenizer with syntect's default syntaxes.
    pub fn new() -> Self {
        let rules = SCOPE_RULES
            .iter()
            .filter_map(|(prefix, kind)| match Scope::new(prefix) {
                Ok(scope) => Some((scope, *kind)),
                Err(e) => {
                    tracing::warn!("Failed to compile scope rule '{prefix}': {e:?}");
                    None
                }
            })
            .collect();
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            rules,
        }
    }

    /// Resolves a language id to a grammar, falling back to JavaScript and
    /// finally to plain text.
    pub fn grammar_for(&self, language: &str) -> &SyntaxReference {
        let normalized = normalize_language(language);
        let name = match normalized.as_str() {
            "markup" => Some("HTML"),
            "css" => Some("CSS"),
            "javascript" | "js" | "typescript" | "ts" | "tsx" | "jsx" => Some("JavaScript"),
            "python" | "py" => Some("Python"),
            _ => None,
        };
        let found = match name {
            Some(name) => self.syntax_set.find_syntax_by_name(name),
            None => self.syntax_set.find_syntax_by_token(&normalized),
        };
        found
            .or_else(|| {
                tracing::debug!("No grammar for '{language}', using {FALLBACK_GRAMMAR}");
                self.syntax_set.find_syntax_by_name(FALLBACK_GRAMMAR)
            })
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text())
    }

    pub fn grammar_name(&self, language: &str) -> &str {
        &self.grammar_for(language).name
    }

    /// Tokenizes `text` with the grammar for `language`. Empty text yields an
    /// empty tree.
    pub fn tokenize(&self, text: &str, language: &str) -> Vec<TokenNode> {
        if text.is_empty() {
            return Vec::new();
        }
        let syntax = self.grammar_for(language);
        let mut parse_state = ParseState::new(syntax);
        let mut stack = ScopeStack::new();
        let mut builder = TreeBuilder::default();
        let mut cache: HashMap<Scope, Option<TokenKind>> = HashMap::new();

        for line in LinesWithEndings::from(text) {
            let ops = match parse_state.parse_line(line, &self.syntax_set) {
                Ok(ops) => ops,
                Err(e) => {
                    tracing::warn!("Failed to parse line: {e}");
                    builder.text(line);
                    continue;
                }
            };
            let mut pos = 0;
            for (offset, op) in ops {
                let offset = offset.min(line.len());
                if offset > pos {
                    builder.text(&line[pos..offset]);
                    pos = offset;
                }
                let result = stack.apply_with_hook(&op, |basic, _| match basic {
                    BasicScopeStackOp::Push(scope) => {
                        let kind = *cache
                            .entry(scope)
                            .or_insert_with(|| self.classify(scope));
                        builder.open(kind);
                    }
                    BasicScopeStackOp::Pop => builder.close(),
                });
                if let Err(e) = result {
                    tracing::warn!("Failed to apply scope op: {e:?}");
                }
            }
            if pos < line.len() {
                builder.text(&line[pos..]);
            }
        }
        builder.finish()
    }

    /// Tokenizes and flattens in one step.
    pub fn highlight(&self, text: &str, language: &str, colors: &TokenColors) -> Vec<StyledRun> {
        flatten(&self.tokenize(text, language), colors)
    }

    fn classify(&self, scope: Scope) -> Option<TokenKind> {
        self.rules
            .iter()
            .find(|(prefix, _)| prefix.is_prefix_of(scope))
            .map(|(_, kind)| *kind)
    }
}

struct Frame {
    kind: Option<TokenKind>,
    children: Vec<TokenNode>,
}

/// Builds the token tree from a stream of scope pushes, pops, and text.
struct TreeBuilder {
    frames: Vec<Frame>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self {
            frames: vec![Frame {
                kind: None,
                children: Vec::new(),
            }],
        }
    }
}

impl TreeBuilder {
    fn open(&mut self, kind: Option<TokenKind>) {
        self.frames.push(Frame {
            kind,
            children: Vec::new(),
        });
    }

    fn close(&mut self) {
        // The root frame is never popped.
        if self.frames.len() <= 1 {
            return;
        }
        let Some(frame) = self.frames.pop() else {
            return;
        };
        let Some(parent) = self.frames.last_mut() else {
            return;
        };
        match frame.kind {
            Some(kind) if !frame.children.is_empty() => push_node(
                &mut parent.children,
                TokenNode::Span {
                    kind,
                    children: frame.children,
                },
            ),
            Some(_) => {}
            None => {
                for child in frame.children {
                    push_node(&mut parent.children, child);
                }
            }
        }
    }

    fn text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(frame) = self.frames.last_mut() {
            push_node(&mut frame.children, TokenNode::Text(text.to_string()));
        }
    }

    fn finish(mut self) -> Vec<TokenNode> {
        while self.frames.len() > 1 {
            self.close();
        }
        self.frames
            .pop()
            .map(|root| root.children)
            .unwrap_or_default()
    }
}

/// Appends `node`, merging adjacent text fragments.
fn push_node(nodes: &mut Vec<TokenNode>, node: TokenNode) {
    if let TokenNode::Text(text) = &node {
        if let Some(TokenNode::Text(last)) = nodes.last_mut() {
            last.push_str(text);
            return;
        }
    }
    nodes.push(node);
}

/// A run of text with its resolved style. `None` means the plain text color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    pub text: String,
    pub style: Option<TokenStyle>,
}

/// Flattens a token tree depth-first, left to right. A span's style
/// overrides the style it inherits; runs with equal styles are merged.
pub fn flatten(nodes: &[TokenNode], colors: &TokenColors) -> Vec<StyledRun> {
    let mut out = Vec::new();
    flatten_into(nodes, colors, None, &mut out);
    out
}

fn flatten_into(
    nodes: &[TokenNode],
    colors: &TokenColors,
    inherited: Option<TokenStyle>,
    out: &mut Vec<StyledRun>,
) {
    for node in nodes {
        match node {
            TokenNode::Text(text) => {
                if let Some(last) = out.last_mut() {
                    if last.style == inherited {
                        last.text.push_str(text);
                        continue;
                    }
                }
                out.push(StyledRun {
                    text: text.clone(),
                    style: inherited,
                });
            }
            TokenNode::Span { kind, children } => {
                let style = colors.by_tag(kind.tag()).copied().or(inherited);
                flatten_into(children, colors, style, out);
            }
        }
    }
}
