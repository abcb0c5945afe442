use std::{path::Path, sync::Arc};

use swc_common::{BytePos, FileName, Globals, SourceMap, Span};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

use crate::core::ExtractError;

/// The parse capability the extractor depends on.
///
/// Implementations turn source text into an swc module plus enough bookkeeping
/// to recover the raw text of any node.
pub trait SourceParser {
    fn parse(&self, source: String, file_name: &str) -> Result<ParsedSource, ExtractError>;
}

/// A parsed module together with its original text.
pub struct ParsedSource {
    pub module: Module,
    text: String,
    start_pos: BytePos,
}

impl ParsedSource {
    /// Raw source text covered by `span`.
    ///
    /// Returns an empty string for spans outside this file (e.g. dummy spans).
    pub fn snippet(&self, span: Span) -> &str {
        if span.lo < self.start_pos || span.hi < span.lo {
            return "";
        }
        let lo = (span.lo.0 - self.start_pos.0) as usize;
        let hi = (span.hi.0 - self.start_pos.0) as usize;
        self.text.get(lo..hi).unwrap_or("")
    }
}

/// swc-backed [`SourceParser`].
///
/// Without an explicit syntax, the syntax is picked from the file extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwcParser {
    syntax: Option<Syntax>,
}

impl SwcParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_syntax(syntax: Syntax) -> Self {
        Self {
            syntax: Some(syntax),
        }
    }

    fn syntax_for(&self, file_name: &str) -> Syntax {
        if let Some(syntax) = self.syntax {
            return syntax;
        }
        syntax_for_path(Path::new(file_name))
    }
}

/// Pick a parser syntax for a bundle file.
///
/// Unknown extensions parse as plain TypeScript, which accepts every JS bundle
/// this tool writes.
pub fn syntax_for_path(path: &Path) -> Syntax {
    match path.extension().and_then(|e| e.to_str()) {
        Some("tsx") => Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        }),
        Some("js" | "mjs" | "cjs" | "jsx") => Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        }),
        _ => Syntax::Typescript(TsSyntax::default()),
    }
}

impl SourceParser for SwcParser {
    fn parse(&self, source: String, file_name: &str) -> Result<ParsedSource, ExtractError> {
        use swc_common::GLOBALS;

        let syntax = self.syntax_for(file_name);
        let source_map: Arc<SourceMap> = Default::default();

        GLOBALS.set(&Globals::new(), || {
            let source_file = source_map.new_source_file(
                FileName::Real(file_name.into()).into(),
                source.clone(),
            );

            let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);
            let module = parser.parse_module().map_err(|e| ExtractError::Parse {
                file: file_name.to_string(),
                message: format!("{:?}", e.kind()),
            })?;

            Ok(ParsedSource {
                module,
                text: source,
                start_pos: source_file.start_pos,
            })
        })
    }
}
