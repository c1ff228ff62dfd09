//! Declaration rendering.

use gots_core::utils::is_visible;
use gots_core::{
    CommentGroup, Decl, DeclToken, Expr, FieldList, FuncDecl, GenDecl, Spec, TypeSpec, ValueSpec,
};

use crate::diagnostics::DiagnosticKind;

use super::Emitter;
use super::error::TranslateError;
use super::group::GroupState;
use super::idents::is_builtin;
use super::tags;
use super::types::{embedded_name, strip_pointer};

impl Emitter<'_> {
    pub(super) fn emit_decl(&mut self, decl: &Decl) {
        match decl {
            Decl::Gen(decl) => self.emit_gen_decl(decl),
            Decl::Func(func) => self.emit_func(func),
        }
    }

    fn emit_gen_decl(&mut self, decl: &GenDecl) {
        if decl.token == DeclToken::Import {
            return;
        }

        let mut doc = if decl.grouped {
            DeclDoc::Shared(decl.doc.as_ref())
        } else {
            DeclDoc::Once(decl.doc.as_ref())
        };
        let mut group = GroupState::new();

        for spec in &decl.specs {
            match spec {
                Spec::Import(_) => {}
                Spec::Type(ts) => self.emit_type_spec(ts, &mut doc),
                Spec::Value(vs) => match decl.token {
                    DeclToken::Const => self.emit_const_spec(vs, &mut group, &mut doc),
                    DeclToken::Var => self.emit_var_spec(vs, &mut doc),
                    DeclToken::Import | DeclToken::Type => {}
                },
            }
        }
    }

    /// `export interface Name {...}` for structs, `export type Name = ...;` otherwise.
    fn emit_type_spec<'d>(&mut self, spec: &'d TypeSpec, decl_doc: &mut DeclDoc<'d>) {
        if !is_visible(&spec.name) {
            tracing::trace!(name = %spec.name, "skipping unexported type");
            return;
        }
        tracing::trace!(name = %spec.name, "emitting type");

        self.scoped(spec.name.clone(), |this| {
            let doc = this.doc_comment(decl_doc.for_member(spec.doc.as_ref()), 0);
            this.output.push_str(&doc);

            let generics = this.type_params(&spec.type_params, 0);
            match &spec.ty {
                Expr::Struct { fields } => this.emit_interface(&spec.name, &generics, fields),
                ty => {
                    let body = this.translate_or_any(ty, 0);
                    this.emit_type_decl(&spec.name, &generics, &body);
                }
            }

            let trailing = this.trailing_comment(spec.comment.as_ref());
            this.output.push_str(&trailing);
            this.output.push('\n');
        });
    }

    /// Write `export type Name<T> = Body;` without the line break.
    fn emit_type_decl(&mut self, name: &str, generics: &str, body: &str) {
        let c = self.c();
        self.output.push_str(&format!(
            "{}export type{} {}{}{}{} = {};",
            c.keyword, c.reset, c.name, name, c.reset, generics, body
        ));
    }

    fn emit_interface(&mut self, name: &str, generics: &str, fields: &FieldList) {
        let c = self.c();
        let extends = self.extends_clause(fields);
        let body = self.struct_fields(fields, 1);

        self.output.push_str(&format!(
            "{}export interface{} {}{}{}{}{} {{\n",
            c.keyword, c.reset, c.name, name, c.reset, generics, extends
        ));
        self.output.push_str(&body);
        self.output.push('}');
    }

    /// ` extends A, B<T>` from embedded fields.
    fn extends_clause(&mut self, fields: &FieldList) -> String {
        let mut bases = Vec::new();
        for field in fields.iter().filter(|f| f.is_embedded()) {
            let label = format!(".{}", embedded_name(&field.ty));
            let base = self.scoped(label, |this| {
                let tag = field.tag.as_deref();
                match (tags::embedded_is_omitted(tag), tags::embedded_json_name(tag)) {
                    (Err(err), _) | (_, Err(err)) => {
                        this.report(DiagnosticKind::MalformedMetadata, &err);
                        None
                    }
                    // Omitted, or a regular member under its json name
                    (Ok(true), _) | (_, Ok(Some(_))) => None,
                    (Ok(false), Ok(None)) => this.extends_base(strip_pointer(&field.ty)),
                }
            });
            bases.extend(base);
        }

        if bases.is_empty() {
            String::new()
        } else {
            let c = self.c();
            format!(" {}extends{} {}", c.keyword, c.reset, bases.join(", "))
        }
    }

    /// Interface base for an embedded type, or a diagnostic when it has none.
    fn extends_base(&mut self, ty: &Expr) -> Option<String> {
        let extendable = match ty {
            Expr::Ident { name } => !is_builtin(name),
            Expr::Index { base, .. } => {
                matches!(base.as_ref(), Expr::Ident { name } if !is_builtin(name))
            }
            Expr::Selector { pkg, name } => {
                self.config.mapped_type(&format!("{pkg}.{name}")).is_some()
            }
            _ => false,
        };

        if !extendable {
            let what = match ty {
                Expr::Selector { pkg, name } => format!("{pkg}.{name}"),
                other => embedded_name(other),
            };
            let location = self.location();
            self.diagnostics
                .report(DiagnosticKind::UnsupportedEmbed, location)
                .message(what)
                .emit();
            return None;
        }

        match self.translate(ty, 0) {
            Ok(ts) => Some(ts),
            Err(err) => {
                self.report(DiagnosticKind::UnsupportedEmbed, &err);
                None
            }
        }
    }

    /// `export const Name: Type = value;` per exported name.
    fn emit_const_spec<'d>(
        &mut self,
        spec: &'d ValueSpec,
        group: &mut GroupState,
        decl_doc: &mut DeclDoc<'d>,
    ) {
        if let Some(ty) = &spec.ty {
            match spec.names.iter().find(|n| is_visible(n)) {
                Some(owner) => {
                    let ts = self.scoped(owner.clone(), |this| this.translate_or_any(ty, 0));
                    group.set_type(ts);
                }
                // Nothing here is emitted; names inheriting the type report it.
                None => match self.translate(ty, 0) {
                    Ok(ts) => group.set_type(ts),
                    Err(err) => group.fail_type(err),
                },
            }
        }
        if !spec.values.is_empty() {
            group.set_values(&spec.values);
            if spec.ty.is_none() {
                group.reset_type();
            }
        }

        for (i, name) in spec.names.iter().enumerate() {
            // Every name counts, emitted or not.
            let iota = group.advance();
            if !is_visible(name) {
                continue;
            }

            let value = match group.current_value(i) {
                Some(value) => value.render(iota),
                None => Err(TranslateError::MissingValue(name.clone())),
            };
            let value = match value {
                Ok(value) => value,
                Err(err) => {
                    let kind = match err {
                        TranslateError::MissingValue(_) => DiagnosticKind::MissingValue,
                        _ => DiagnosticKind::UnsupportedValue,
                    };
                    self.scoped(name.clone(), |this| this.report(kind, &err));
                    continue;
                }
            };
            if let Some(err) = group.take_type_error() {
                self.scoped(name.clone(), |this| this.degrade(err));
            }
            tracing::trace!(name = %name, iota, "emitting const");

            let c = self.c();
            let doc = self.doc_comment(decl_doc.for_member(spec.doc.as_ref()), 0);
            self.output.push_str(&doc);
            self.output.push_str(&format!(
                "{}export const{} {}{}{}",
                c.keyword, c.reset, c.name, name, c.reset
            ));
            if let Some(ty) = group.current_type() {
                self.output.push_str(&format!(": {ty}"));
            }
            self.output.push_str(&format!(" = {value};"));
            let trailing = self.trailing_comment(spec.comment.as_ref());
            self.output.push_str(&trailing);
            self.output.push('\n');
        }
    }

    /// `export declare let Name: Type;` per exported name.
    fn emit_var_spec<'d>(&mut self, spec: &'d ValueSpec, decl_doc: &mut DeclDoc<'d>) {
        for name in spec.names.iter().filter(|n| is_visible(n)) {
            self.scoped(name.clone(), |this| {
                let Some(ty) = &spec.ty else {
                    let err = TranslateError::MissingType(name.clone());
                    this.report(DiagnosticKind::MissingType, &err);
                    return;
                };
                tracing::trace!(name = %name, "emitting var");

                let ts = this.translate_or_any(ty, 0);
                let c = this.c();
                let doc = this.doc_comment(decl_doc.for_member(spec.doc.as_ref()), 0);
                this.output.push_str(&doc);
                this.output.push_str(&format!(
                    "{}export declare let{} {}{}{}: {ts};",
                    c.keyword, c.reset, c.name, name, c.reset
                ));
                let trailing = this.trailing_comment(spec.comment.as_ref());
                this.output.push_str(&trailing);
                this.output.push('\n');
            });
        }
    }

    /// `export type Name = (params) => results;`
    fn emit_func(&mut self, func: &FuncDecl) {
        if func.recv.is_some() {
            tracing::trace!(name = %func.name, "skipping method");
            return;
        }
        if !is_visible(&func.name) {
            tracing::trace!(name = %func.name, "skipping unexported function");
            return;
        }
        tracing::trace!(name = %func.name, "emitting function");

        self.scoped(func.name.clone(), |this| {
            let doc = this.doc_comment(func.doc.as_ref(), 0);
            this.output.push_str(&doc);

            let generics = this.type_params(&func.type_params, 0);
            let no_generics = FieldList::new();
            let signature = this.signature(&no_generics, &func.params, &func.results, 0);
            this.emit_type_decl(&func.name, &generics, &signature);
            this.output.push('\n');
        });
    }
}

/// Doc comment of a `const`, `var` or `type` declaration.
enum DeclDoc<'d> {
    /// Parenthesized: applies to every member without a doc of its own.
    Shared(Option<&'d CommentGroup>),
    /// Single declaration: written once, above the first emitted member.
    Once(Option<&'d CommentGroup>),
}

impl<'d> DeclDoc<'d> {
    fn for_member(&mut self, own: Option<&'d CommentGroup>) -> Option<&'d CommentGroup> {
        match self {
            Self::Shared(doc) => own.or(*doc),
            Self::Once(doc) => {
                let doc = doc.take();
                own.or(doc)
            }
        }
    }
}
