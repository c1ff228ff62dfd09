//! Type expression translation.

use gots_core::utils::{is_blank, is_visible, property_key};
use gots_core::{BinaryOp, Expr, Field, FieldList, UnaryOp};

use crate::diagnostics::DiagnosticKind;

use super::Emitter;
use super::error::{TranslateError, TranslateResult};
use super::idents::{is_byte, map_ident};
use super::tags;
use super::values::render_value;

impl Emitter<'_> {
    /// Translate a type expression starting on a line indented `depth` levels.
    ///
    /// Nested fields that cannot be translated degrade on their own; an error
    /// is returned only when `expr` itself has no TypeScript form.
    pub(super) fn translate(&mut self, expr: &Expr, depth: usize) -> TranslateResult<String> {
        match expr {
            Expr::Ident { name } => Ok(map_ident(name).to_string()),
            Expr::BasicLit { .. } => render_value(expr, None),
            Expr::Pointer { elem } => {
                let inner = self.translate(elem, depth)?;
                Ok(format!("{} | undefined", paren_if(inner, is_function)))
            }
            Expr::Array { elem, .. } => {
                if matches!(elem.as_ref(), Expr::Ident { name } if is_byte(name)) {
                    return Ok("string".to_string());
                }
                Ok(format!("Array<{}>", self.translate(elem, depth)?))
            }
            Expr::Map { key, value } => Ok(format!(
                "{{ [key: {}]: {} }}",
                self.translate(key, depth)?,
                self.translate(value, depth)?
            )),
            Expr::Selector { pkg, name } => Ok(self.qualified(pkg, name)),
            Expr::Struct { fields } => Ok(self.inline_struct(fields, depth)),
            Expr::Interface { methods } => self.interface(methods, depth),
            Expr::Func {
                type_params,
                params,
                results,
            } => Ok(self.signature(type_params, params, results, depth)),
            Expr::Index { base, args } => {
                // An unmapped generic base is opaque; its arguments are dropped.
                if let Expr::Selector { pkg, name } = base.as_ref() {
                    if self.config.mapped_type(&format!("{pkg}.{name}")).is_none() {
                        return Ok(self.qualified(pkg, name));
                    }
                }
                let base = self.translate(base, depth)?;
                let args = args
                    .iter()
                    .map(|arg| self.translate(arg, depth))
                    .collect::<TranslateResult<Vec<_>>>()?;
                Ok(format!("{base}<{}>", args.join(", ")))
            }
            Expr::Binary { op, x, y } => {
                if *op != BinaryOp::Or {
                    return Err(TranslateError::unsupported(format!(
                        "operator `{}` in type position",
                        op.as_str()
                    )));
                }
                let x = self.translate(x, depth)?;
                let y = self.translate(y, depth)?;
                Ok(format!(
                    "{} | {}",
                    paren_if(x, is_function),
                    paren_if(y, is_function)
                ))
            }
            Expr::Unary { op, x } => {
                if *op != UnaryOp::Tilde {
                    return Err(TranslateError::unsupported(format!(
                        "operator `{}` in type position",
                        op.as_str()
                    )));
                }
                self.translate(x, depth)
            }
            Expr::Paren { x } => Ok(format!("({})", self.translate(x, depth)?)),
            Expr::Ellipsis { elem } => {
                let elem = elem
                    .as_deref()
                    .ok_or_else(|| TranslateError::unsupported("`...` without element type"))?;
                let inner = self.translate(elem, depth)?;
                Ok(format!("{}[]", paren_if(inner, is_compound)))
            }
            Expr::Chan { .. } => Err(TranslateError::unsupported("channel type")),
            Expr::Call { .. } => Err(TranslateError::unsupported("call expression used as a type")),
            Expr::FuncLit => Err(TranslateError::unsupported("function literal used as a type")),
            Expr::CompositeLit { .. } => Err(TranslateError::unsupported(
                "composite literal used as a type",
            )),
            Expr::Bad => Err(TranslateError::unsupported("malformed expression")),
        }
    }

    /// Translate, reporting failures and standing in `any`.
    pub(super) fn translate_or_any(&mut self, expr: &Expr, depth: usize) -> String {
        match self.translate(expr, depth) {
            Ok(ts) => ts,
            Err(err) => self.degrade(err),
        }
    }

    fn qualified(&self, pkg: &str, name: &str) -> String {
        let key = format!("{pkg}.{name}");
        match self.config.mapped_type(&key) {
            Some(mapped) => mapped.to_string(),
            None => format!("any /* {key} */"),
        }
    }

    /// Anonymous struct: a multi-line record, closed at `depth`, with
    /// embedded fields intersected after the closing brace.
    fn inline_struct(&mut self, fields: &FieldList, depth: usize) -> String {
        let body = self.struct_fields(fields, depth + 1);
        let mut out = if body.is_empty() {
            "{}".to_string()
        } else {
            format!("{{\n{body}{}}}", self.indent(depth))
        };

        for field in fields.iter().filter(|f| f.is_embedded()) {
            if let Some(ts) = self.inline_embed(field, depth) {
                out.push_str(&format!(" & ({ts})"));
            }
        }
        out
    }

    fn inline_embed(&mut self, field: &Field, depth: usize) -> Option<String> {
        let label = format!(".{}", embedded_name(&field.ty));
        self.scoped(label, |this| {
            let tag = field.tag.as_deref();
            match (tags::embedded_is_omitted(tag), tags::embedded_json_name(tag)) {
                (Err(err), _) | (_, Err(err)) => {
                    this.report(DiagnosticKind::MalformedMetadata, &err);
                    None
                }
                (Ok(true), _) | (_, Ok(Some(_))) => None,
                (Ok(false), Ok(None)) => {
                    Some(this.translate_or_any(strip_pointer(&field.ty), depth))
                }
            }
        })
    }

    /// One line per emitted struct member, indented `depth` levels.
    ///
    /// Embedded fields renamed by a `json` tag are regular members; other
    /// embedded fields are left to the caller.
    pub(super) fn struct_fields(&mut self, fields: &FieldList, depth: usize) -> String {
        let mut out = String::new();
        for field in fields {
            if field.is_embedded() {
                let name = match tags::embedded_json_name(field.tag.as_deref()) {
                    Ok(Some(name)) => name,
                    // Errors are reported where the embed itself is handled.
                    Ok(None) | Err(_) => continue,
                };
                let line = self.scoped(format!(".{name}"), |this| {
                    this.struct_member(field, &name, depth)
                });
                out.push_str(&line.unwrap_or_default());
                continue;
            }

            for name in &field.names {
                if !is_visible(name) {
                    continue;
                }
                let line = self.scoped(format!(".{name}"), |this| {
                    this.struct_member(field, name, depth)
                });
                out.push_str(&line.unwrap_or_default());
            }
        }
        out
    }

    fn struct_member(&mut self, field: &Field, name: &str, depth: usize) -> Option<String> {
        let is_pointer = matches!(field.ty, Expr::Pointer { .. });
        let shape = match tags::interpret(field.tag.as_deref(), name, is_pointer) {
            Ok(Some(shape)) => shape,
            Ok(None) => return None,
            Err(err) => {
                self.report(DiagnosticKind::MalformedMetadata, &err);
                return None;
            }
        };

        let ty = match shape.type_override {
            Some(ty) => ty,
            None if shape.strip_pointer => self.translate_or_any(strip_pointer(&field.ty), depth),
            None => self.translate_or_any(&field.ty, depth),
        };

        let mut line = self.doc_comment(field.doc.as_ref(), depth);
        line.push_str(&format!(
            "{}{}{}: {};",
            self.indent(depth),
            property_key(&shape.key),
            if shape.optional { "?" } else { "" },
            ty
        ));
        line.push_str(&self.trailing_comment(field.comment.as_ref()));
        line.push('\n');
        Some(line)
    }

    /// Interface: a record of its exported methods with embedded elements
    /// intersected after it. Without methods, the embedded elements are
    /// joined directly so type sets like `~int | ~string` stay unions.
    fn interface(&mut self, elements: &FieldList, depth: usize) -> TranslateResult<String> {
        if elements.is_empty() {
            return Ok("any".to_string());
        }

        let embeds: Vec<&Field> = elements.iter().filter(|f| f.is_embedded()).collect();
        if embeds.len() == elements.len() {
            let parts = embeds
                .iter()
                .map(|f| self.translate(&f.ty, depth))
                .collect::<TranslateResult<Vec<_>>>()?;
            if parts.len() == 1 {
                return Ok(parts.into_iter().next().unwrap_or_default());
            }
            return Ok(parts
                .into_iter()
                .map(|p| paren_if(p, is_compound))
                .collect::<Vec<_>>()
                .join(" & "));
        }

        let body = self.interface_methods(elements, depth + 1);
        let mut out = if body.is_empty() {
            "{}".to_string()
        } else {
            format!("{{\n{body}{}}}", self.indent(depth))
        };
        for field in embeds {
            let label = format!(".{}", embedded_name(&field.ty));
            let ts = self.scoped(label, |this| this.translate_or_any(&field.ty, depth));
            out.push_str(&format!(" & ({ts})"));
        }
        Ok(out)
    }

    /// `Name: (args) => Result;` per exported method, indented `depth` levels.
    fn interface_methods(&mut self, elements: &FieldList, depth: usize) -> String {
        let mut out = String::new();
        for field in elements.iter().filter(|f| !f.is_embedded()) {
            for name in &field.names {
                if !is_visible(name) {
                    continue;
                }
                let ty = self.scoped(format!(".{name}"), |this| {
                    this.translate_or_any(&field.ty, depth)
                });
                out.push_str(&self.doc_comment(field.doc.as_ref(), depth));
                out.push_str(&format!(
                    "{}{}: {};",
                    self.indent(depth),
                    property_key(name),
                    ty
                ));
                out.push_str(&self.trailing_comment(field.comment.as_ref()));
                out.push('\n');
            }
        }
        out
    }

    /// `<T extends C, ...>`, or nothing for a non-generic declaration.
    pub(super) fn type_params(&mut self, params: &FieldList, depth: usize) -> String {
        let mut parts = Vec::new();
        for field in params {
            for name in &field.names {
                let constraint = self.scoped(format!("[{name}]"), |this| {
                    this.translate_or_any(&field.ty, depth)
                });
                parts.push(format!("{name} extends {constraint}"));
            }
        }
        if parts.is_empty() {
            String::new()
        } else {
            format!("<{}>", parts.join(", "))
        }
    }

    /// `(a: number, ...rest: string[]) => Result`
    pub(super) fn signature(
        &mut self,
        type_params: &FieldList,
        params: &FieldList,
        results: &FieldList,
        depth: usize,
    ) -> String {
        let generics = self.type_params(type_params, depth);

        let mut rendered = Vec::new();
        let mut position = 0;
        for field in params {
            let names: Vec<Option<&str>> = if field.names.is_empty() {
                vec![None]
            } else {
                field.names.iter().map(|n| Some(n.as_str())).collect()
            };
            for name in names {
                position += 1;
                let name = match name {
                    Some(n) if !is_blank(n) => n.to_string(),
                    _ => format!("_{position}"),
                };
                let param = self.scoped(format!("(param {position})"), |this| {
                    this.param(&name, &field.ty, depth)
                });
                rendered.push(param);
            }
        }

        let result = self.results(results, depth);
        format!("{generics}({}) => {result}", rendered.join(", "))
    }

    fn param(&mut self, name: &str, ty: &Expr, depth: usize) -> String {
        if let Expr::Ellipsis { elem: Some(elem) } = ty {
            let inner = self.translate_or_any(elem, depth);
            return format!("...{name}: {}[]", paren_if(inner, is_compound));
        }
        format!("{name}: {}", self.translate_or_any(ty, depth))
    }

    fn results(&mut self, results: &FieldList, depth: usize) -> String {
        let count: usize = results.iter().map(|f| f.names.len().max(1)).sum();
        match count {
            0 => return "void".to_string(),
            1 => {
                return self.scoped("(result 1)", |this| {
                    this.translate_or_any(&results[0].ty, depth)
                });
            }
            _ => {}
        }

        let mut named = Vec::new();
        let mut unnamed = Vec::new();
        let mut position = 0;
        for field in results {
            let slots = field.names.len().max(1);
            for i in 0..slots {
                position += 1;
                let ty = self.scoped(format!("(result {position})"), |this| {
                    this.translate_or_any(&field.ty, depth)
                });
                match field.names.get(i) {
                    Some(name) if !is_blank(name) => {
                        named.push(format!("{}: {ty}", property_key(name)))
                    }
                    _ => {}
                }
                unnamed.push(ty);
            }
        }

        if named.len() == count {
            format!("{{ {} }}", named.join("; "))
        } else {
            format!("[{}]", unnamed.join(", "))
        }
    }
}

pub(super) fn strip_pointer(expr: &Expr) -> &Expr {
    match expr {
        Expr::Pointer { elem } => elem,
        other => other,
    }
}

/// Display name of an embedded field's type: `Base` for `*pkg.Base[T]`.
pub(super) fn embedded_name(expr: &Expr) -> String {
    match expr {
        Expr::Ident { name } => name.clone(),
        Expr::Selector { name, .. } => name.clone(),
        Expr::Pointer { elem } => embedded_name(elem),
        Expr::Index { base, .. } => embedded_name(base),
        _ => "embedded".to_string(),
    }
}

fn paren_if(ts: String, pred: fn(&str) -> bool) -> String {
    if pred(&ts) { format!("({ts})") } else { ts }
}

/// A function type at the top level, which binds looser than `|` and `[]`.
fn is_function(ts: &str) -> bool {
    top_level_contains(ts, &["=>"])
}

/// A union, intersection or function type at the top level.
fn is_compound(ts: &str) -> bool {
    top_level_contains(ts, &["=>", "|", "&"])
}

fn top_level_contains(ts: &str, needles: &[&str]) -> bool {
    let bytes = ts.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'(' | b'[' | b'{' | b'<' => depth += 1,
            b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            // `=>` closes nothing
            b'>' if i == 0 || bytes[i - 1] != b'=' => depth = depth.saturating_sub(1),
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                // Skip `/* pkg.Name */`
                match ts[i + 2..].find("*/") {
                    Some(end) => i += end + 4,
                    None => return false,
                }
                continue;
            }
            _ if depth == 0 && needles.iter().any(|n| bytes[i..].starts_with(n.as_bytes())) => {
                return true;
            }
            _ => {}
        }
        i += 1;
    }
    false
}
