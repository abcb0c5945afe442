use std::{fs, path::Path, sync::LazyLock};

use regex::Regex;
use serde_json::Value;
use swc_common::{Span, Spanned};
use swc_ecma_ast::{
    ExportDefaultDecl, ExportDefaultExpr, ExportSpecifier, Expr, Lit, Module, ModuleDecl,
    ModuleExportName, ModuleItem, NamedExport, ObjectLit, Prop, PropName, PropOrSpread,
};
use swc_ecma_visit::{Visit, VisitWith};
use tracing::debug;

use crate::core::{
    ExportedMapping, ExtractError, ScalarValue,
    parsers::{ParsedSource, SourceParser, SwcParser},
};

static EXPORT_DEFAULT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^export\s+default\s+").unwrap());

/// File name used when extracting from a bare string.
const INLINE_SOURCE_NAME: &str = "<inline>.ts";

/// Reads the default-exported mapping of a message bundle without running it.
///
/// Two strategies are tried in order:
/// 1. the text after `export default` is parsed as JSON;
/// 2. otherwise the first object literal inside the default export is walked
///    property by property.
pub struct DefaultExportExtractor<P = SwcParser> {
    parser: P,
}

impl Default for DefaultExportExtractor<SwcParser> {
    fn default() -> Self {
        Self::new(SwcParser::new())
    }
}

impl<P: SourceParser> DefaultExportExtractor<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Extract from a file on disk. The parser syntax follows the extension.
    pub fn extract_file(&self, path: &Path) -> Result<ExportedMapping, ExtractError> {
        let source = fs::read_to_string(path).map_err(|source| ExtractError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.extract(source, &path.to_string_lossy())
    }

    pub fn extract(&self, source: String, file_name: &str) -> Result<ExportedMapping, ExtractError> {
        let parsed = self.parser.parse(source, file_name)?;
        let result = extract_from_module(&parsed);
        if let Err(err) = &result {
            debug!(file = file_name, "{}", err);
        }
        result
    }
}

/// Extract the default export of `source`, parsed as TypeScript.
pub fn extract_default_export(source: &str) -> Result<ExportedMapping, ExtractError> {
    DefaultExportExtractor::default().extract(source.to_string(), INLINE_SOURCE_NAME)
}

/// Extract the default export of the file at `path`.
pub fn extract_default_export_from_path(path: &Path) -> Result<ExportedMapping, ExtractError> {
    DefaultExportExtractor::default().extract_file(path)
}

/// The statement that provides a module's default export.
enum DefaultExport<'a> {
    Expr(&'a ExportDefaultExpr),
    Decl(&'a ExportDefaultDecl),
    Named(&'a NamedExport),
}

impl DefaultExport<'_> {
    fn span(&self) -> Span {
        match self {
            DefaultExport::Expr(node) => node.span,
            DefaultExport::Decl(node) => node.span,
            DefaultExport::Named(node) => node.span,
        }
    }

    fn first_object_literal(&self) -> Option<ObjectLit> {
        let mut finder = FirstObjectLit::default();
        match self {
            DefaultExport::Expr(node) => node.visit_with(&mut finder),
            DefaultExport::Decl(node) => node.visit_with(&mut finder),
            // `export { messages as default }` carries no literal of its own.
            DefaultExport::Named(_) => {}
        }
        finder.found
    }
}

fn extract_from_module(parsed: &ParsedSource) -> Result<ExportedMapping, ExtractError> {
    let declaration = find_default_export(&parsed.module).ok_or(ExtractError::NoDefaultExport)?;

    // Standard JSON after `export default` parses directly.
    let text = parsed.snippet(declaration.span());
    let body = EXPORT_DEFAULT_PREFIX.replace(text, "");
    if let Ok(json) = serde_json::from_str::<Value>(&body) {
        return match json {
            Value::Object(object) => Ok(ExportedMapping::from_json_object(&object)),
            _ => Err(ExtractError::NotObjectLiteral),
        };
    }

    let object = declaration
        .first_object_literal()
        .ok_or(ExtractError::NotObjectLiteral)?;

    Ok(walk_object_literal(&object, parsed))
}

fn find_default_export(module: &Module) -> Option<DefaultExport<'_>> {
    module.body.iter().find_map(|item| match item {
        ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultExpr(node)) => {
            Some(DefaultExport::Expr(node))
        }
        ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultDecl(node)) => {
            Some(DefaultExport::Decl(node))
        }
        ModuleItem::ModuleDecl(ModuleDecl::ExportNamed(node)) if exports_default(node) => {
            Some(DefaultExport::Named(node))
        }
        _ => None,
    })
}

fn exports_default(node: &NamedExport) -> bool {
    node.specifiers.iter().any(|specifier| match specifier {
        ExportSpecifier::Named(named) => {
            is_default_name(named.exported.as_ref().unwrap_or(&named.orig))
        }
        _ => false,
    })
}

fn is_default_name(name: &ModuleExportName) -> bool {
    match name {
        ModuleExportName::Ident(ident) => &*ident.sym == "default",
        ModuleExportName::Str(s) => s.value.as_str() == Some("default"),
    }
}

fn walk_object_literal(object: &ObjectLit, parsed: &ParsedSource) -> ExportedMapping {
    let mut mapping = ExportedMapping::new();

    for prop in &object.props {
        // Spread, shorthand, methods and accessors contribute nothing.
        let PropOrSpread::Prop(prop) = prop else {
            continue;
        };
        let Prop::KeyValue(kv) = &**prop else {
            continue;
        };
        let Some(key) = property_name(&kv.key, parsed) else {
            continue;
        };
        mapping.insert(key, scalar_from_expr(&kv.value, parsed));
    }

    mapping
}

/// Resolve a property key.
///
/// Unlike string values (see [`scalar_from_expr`]), string-literal keys are
/// decoded: `"say \"hi\""` as a key yields `say "hi"`, so a quoted key and
/// the same key written bare land on one entry. Numeric keys keep their source
/// text. Computed keys yield `None`.
fn property_name(key: &PropName, parsed: &ParsedSource) -> Option<String> {
    match key {
        PropName::Ident(ident) => Some(ident.sym.to_string()),
        PropName::Str(s) => Some(match s.value.as_str() {
            Some(value) => value.to_string(),
            None => strip_enclosing_quotes(parsed.snippet(s.span)).to_string(),
        }),
        PropName::Num(n) => Some(parsed.snippet(n.span).to_string()),
        PropName::BigInt(n) => Some(parsed.snippet(n.span).to_string()),
        // computed keys
        _ => None,
    }
}

/// Classify a property value by node kind.
///
/// String literals keep their raw text minus the first and last character, so
/// escape sequences such as `\'` or `\n` are not decoded. Keys follow a
/// different rule, see [`property_name`].
fn scalar_from_expr(expr: &Expr, parsed: &ParsedSource) -> ScalarValue {
    let raw = || ScalarValue::text(parsed.snippet(expr.span()));

    match expr {
        Expr::Lit(Lit::Str(s)) => ScalarValue::text(strip_enclosing_quotes(parsed.snippet(s.span))),
        Expr::Lit(Lit::Num(n)) => ScalarValue::from_f64(n.value).unwrap_or_else(raw),
        Expr::Lit(Lit::Bool(b)) => ScalarValue::Bool(b.value),
        _ => raw(),
    }
}

fn strip_enclosing_quotes(raw: &str) -> &str {
    let mut chars = raw.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

/// Finds the first object literal in pre-order.
#[derive(Default)]
struct FirstObjectLit {
    found: Option<ObjectLit>,
}

impl Visit for FirstObjectLit {
    fn visit_expr(&mut self, node: &Expr) {
        if self.found.is_none() {
            node.visit_children_with(self);
        }
    }

    fn visit_object_lit(&mut self, node: &ObjectLit) {
        if self.found.is_none() {
            self.found = Some(node.clone());
        }
    }
}
