//! Go declaration tree.
//!
//! Mirrors the subset of `go/ast` that carries declaration shapes. The tree is
//! built once by the external parser and never mutated by the translator.
//! Every enum is internally tagged by `"kind"` in its JSON encoding.

use serde::{Deserialize, Serialize};

use crate::CommentGroup;

/// A parsed source file: its top-level declarations in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    #[serde(default)]
    pub package: String,
    #[serde(default)]
    pub decls: Vec<Decl>,
}

/// Top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Decl {
    /// `import`, `const`, `var` or `type`, possibly parenthesized.
    Gen(GenDecl),
    /// `func Name[T any](params) results`
    Func(FuncDecl),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclToken {
    Import,
    Const,
    Var,
    Type,
}

/// Grouped declaration: `const ( A = iota; B )` or a single `type T int`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenDecl {
    pub token: DeclToken,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<CommentGroup>,
    /// Written with parentheses.
    #[serde(default)]
    pub grouped: bool,
    #[serde(default)]
    pub specs: Vec<Spec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Spec {
    Import(ImportSpec),
    Value(ValueSpec),
    Type(TypeSpec),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSpec {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// `A, B Type = 1, 2` inside a `const` or `var` declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueSpec {
    pub names: Vec<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<Expr>,
    #[serde(default)]
    pub values: Vec<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<CommentGroup>,
    /// Trailing same-line comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<CommentGroup>,
}

/// `Name[T any] Type` or `Name = Type` inside a `type` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSpec {
    pub name: String,
    #[serde(default)]
    pub type_params: FieldList,
    #[serde(rename = "type")]
    pub ty: Expr,
    /// `type A = B` rather than `type A B`.
    #[serde(default)]
    pub assign: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<CommentGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<CommentGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuncDecl {
    pub name: String,
    /// Method receiver; `None` for package-level functions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recv: Option<Box<Field>>,
    #[serde(default)]
    pub type_params: FieldList,
    #[serde(default)]
    pub params: FieldList,
    #[serde(default)]
    pub results: FieldList,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<CommentGroup>,
}

/// Struct field, interface element, parameter, result or type parameter.
///
/// `names` is empty for embedded fields and unnamed parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(rename = "type")]
    pub ty: Expr,
    /// Raw tag literal, e.g. `` `json:"name,omitempty"` ``.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<CommentGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<CommentGroup>,
}

pub type FieldList = Vec<Field>;

/// Basic literal kinds (`go/token` INT, FLOAT, IMAG, CHAR, STRING).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LitKind {
    Int,
    Float,
    Imag,
    Char,
    String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChanDir {
    Both,
    Send,
    Recv,
}

/// Binary operators, encoded by their Go token text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Quo,
    #[serde(rename = "%")]
    Rem,
    #[serde(rename = "&")]
    And,
    #[serde(rename = "|")]
    Or,
    #[serde(rename = "^")]
    Xor,
    #[serde(rename = "<<")]
    Shl,
    #[serde(rename = ">>")]
    Shr,
    #[serde(rename = "&^")]
    AndNot,
    #[serde(rename = "&&")]
    LAnd,
    #[serde(rename = "||")]
    LOr,
    #[serde(rename = "==")]
    Eql,
    #[serde(rename = "!=")]
    Neq,
    #[serde(rename = "<")]
    Lss,
    #[serde(rename = "<=")]
    Leq,
    #[serde(rename = ">")]
    Gtr,
    #[serde(rename = ">=")]
    Geq,
}

impl BinaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Quo => "/",
            Self::Rem => "%",
            Self::And => "&",
            Self::Or => "|",
            Self::Xor => "^",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::AndNot => "&^",
            Self::LAnd => "&&",
            Self::LOr => "||",
            Self::Eql => "==",
            Self::Neq => "!=",
            Self::Lss => "<",
            Self::Leq => "<=",
            Self::Gtr => ">",
            Self::Geq => ">=",
        }
    }
}

/// Unary operators. Pointer types (`*T`) are [`Expr::Pointer`], not unary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    #[serde(rename = "-")]
    Neg,
    #[serde(rename = "+")]
    Pos,
    #[serde(rename = "!")]
    Not,
    #[serde(rename = "^")]
    Xor,
    #[serde(rename = "~")]
    Tilde,
    #[serde(rename = "&")]
    And,
    #[serde(rename = "<-")]
    Arrow,
}

impl UnaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Pos => "+",
            Self::Not => "!",
            Self::Xor => "^",
            Self::Tilde => "~",
            Self::And => "&",
            Self::Arrow => "<-",
        }
    }
}

/// Type or constant expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expr {
    /// `int`, `MyType`, `iota`, `true`
    Ident { name: String },
    /// `42`, `1.5`, `2i`, `'x'`, `"s"`, `` `raw` `` (raw source text)
    BasicLit {
        #[serde(rename = "lit")]
        kind: LitKind,
        value: String,
    },
    /// `*T`
    Pointer { elem: Box<Expr> },
    /// `[]T` when `len` is `None`, `[N]T` otherwise.
    Array {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        len: Option<Box<Expr>>,
        elem: Box<Expr>,
    },
    /// `map[K]V`
    Map { key: Box<Expr>, value: Box<Expr> },
    /// `struct { ... }`
    Struct {
        #[serde(default)]
        fields: FieldList,
    },
    /// `interface { ... }`
    Interface {
        #[serde(default)]
        methods: FieldList,
    },
    /// `func[T any](params) results`
    Func {
        #[serde(default)]
        type_params: FieldList,
        #[serde(default)]
        params: FieldList,
        #[serde(default)]
        results: FieldList,
    },
    /// Generic instantiation `Base[A, B]`.
    Index { base: Box<Expr>, args: Vec<Expr> },
    /// Qualified reference `pkg.Name`.
    Selector { pkg: String, name: String },
    /// `x op y`; in type position only `|` (union) is meaningful.
    Binary {
        op: BinaryOp,
        x: Box<Expr>,
        y: Box<Expr>,
    },
    /// `op x`; in type position only `~` (approximate) is meaningful.
    Unary { op: UnaryOp, x: Box<Expr> },
    /// `(x)`
    Paren { x: Box<Expr> },
    /// `...T` in a parameter list; `elem` is `None` for `[...]T` lengths.
    Ellipsis {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        elem: Option<Box<Expr>>,
    },
    /// `chan T`, `chan<- T`, `<-chan T`
    Chan { dir: ChanDir, elem: Box<Expr> },
    /// `f(args)`
    Call {
        fun: Box<Expr>,
        #[serde(default)]
        args: Vec<Expr>,
    },
    /// `T{...}`
    CompositeLit {
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        ty: Option<Box<Expr>>,
    },
    /// `func(...) { ... }`
    FuncLit,
    /// Placeholder for a node the parser could not build.
    Bad,
}

// ============================================================================
// Builders
// ============================================================================

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident { name: name.into() }
    }

    pub fn int(value: impl ToString) -> Self {
        Self::lit(LitKind::Int, value.to_string())
    }

    /// String literal; `value` is the quoted source text.
    pub fn string(value: impl Into<String>) -> Self {
        Self::lit(LitKind::String, value)
    }

    pub fn lit(kind: LitKind, value: impl Into<String>) -> Self {
        Self::BasicLit {
            kind,
            value: value.into(),
        }
    }

    pub fn pointer(elem: Expr) -> Self {
        Self::Pointer {
            elem: Box::new(elem),
        }
    }

    pub fn slice(elem: Expr) -> Self {
        Self::Array {
            len: None,
            elem: Box::new(elem),
        }
    }

    pub fn array(len: Expr, elem: Expr) -> Self {
        Self::Array {
            len: Some(Box::new(len)),
            elem: Box::new(elem),
        }
    }

    pub fn map(key: Expr, value: Expr) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn structure(fields: FieldList) -> Self {
        Self::Struct { fields }
    }

    pub fn interface(methods: FieldList) -> Self {
        Self::Interface { methods }
    }

    pub fn func(params: FieldList, results: FieldList) -> Self {
        Self::Func {
            type_params: Vec::new(),
            params,
            results,
        }
    }

    pub fn instantiate(base: Expr, args: Vec<Expr>) -> Self {
        Self::Index {
            base: Box::new(base),
            args,
        }
    }

    pub fn qualified(pkg: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Selector {
            pkg: pkg.into(),
            name: name.into(),
        }
    }

    pub fn binary(op: BinaryOp, x: Expr, y: Expr) -> Self {
        Self::Binary {
            op,
            x: Box::new(x),
            y: Box::new(y),
        }
    }

    pub fn unary(op: UnaryOp, x: Expr) -> Self {
        Self::Unary {
            op,
            x: Box::new(x),
        }
    }

    /// `x | y` type union.
    pub fn union(x: Expr, y: Expr) -> Self {
        Self::binary(BinaryOp::Or, x, y)
    }

    /// `~x` approximate constraint element.
    pub fn approx(x: Expr) -> Self {
        Self::unary(UnaryOp::Tilde, x)
    }

    pub fn paren(x: Expr) -> Self {
        Self::Paren { x: Box::new(x) }
    }

    pub fn ellipsis(elem: Expr) -> Self {
        Self::Ellipsis {
            elem: Some(Box::new(elem)),
        }
    }

    pub fn chan(dir: ChanDir, elem: Expr) -> Self {
        Self::Chan {
            dir,
            elem: Box::new(elem),
        }
    }

    pub fn call(fun: Expr, args: Vec<Expr>) -> Self {
        Self::Call {
            fun: Box::new(fun),
            args,
        }
    }

    /// Whether the identifier `name` occurs anywhere in this expression.
    pub fn mentions(&self, name: &str) -> bool {
        match self {
            Self::Ident { name: n } => n == name,
            Self::Pointer { elem } | Self::Chan { elem, .. } => elem.mentions(name),
            Self::Array { len, elem } => {
                len.as_ref().is_some_and(|l| l.mentions(name)) || elem.mentions(name)
            }
            Self::Map { key, value } => key.mentions(name) || value.mentions(name),
            Self::Index { base, args } => {
                base.mentions(name) || args.iter().any(|a| a.mentions(name))
            }
            Self::Binary { x, y, .. } => x.mentions(name) || y.mentions(name),
            Self::Unary { x, .. } | Self::Paren { x } => x.mentions(name),
            Self::Ellipsis { elem } => elem.as_ref().is_some_and(|e| e.mentions(name)),
            Self::Call { fun, args } => {
                fun.mentions(name) || args.iter().any(|a| a.mentions(name))
            }
            Self::BasicLit { .. }
            | Self::Struct { .. }
            | Self::Interface { .. }
            | Self::Func { .. }
            | Self::Selector { .. }
            | Self::CompositeLit { .. }
            | Self::FuncLit
            | Self::Bad => false,
        }
    }
}

impl Field {
    pub fn named<I, S>(names: I, ty: Expr) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            ty,
            tag: None,
            doc: None,
            comment: None,
        }
    }

    /// Embedded field or unnamed parameter.
    pub fn embedded(ty: Expr) -> Self {
        Self::named(Vec::<String>::new(), ty)
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_doc(mut self, doc: CommentGroup) -> Self {
        self.doc = Some(doc);
        self
    }

    pub fn with_comment(mut self, comment: CommentGroup) -> Self {
        self.comment = Some(comment);
        self
    }

    pub fn is_embedded(&self) -> bool {
        self.names.is_empty()
    }
}

impl ValueSpec {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn typed(mut self, ty: Expr) -> Self {
        self.ty = Some(ty);
        self
    }

    pub fn value(mut self, value: Expr) -> Self {
        self.values.push(value);
        self
    }

    pub fn with_doc(mut self, doc: CommentGroup) -> Self {
        self.doc = Some(doc);
        self
    }

    pub fn with_comment(mut self, comment: CommentGroup) -> Self {
        self.comment = Some(comment);
        self
    }
}

impl TypeSpec {
    pub fn new(name: impl Into<String>, ty: Expr) -> Self {
        Self {
            name: name.into(),
            type_params: Vec::new(),
            ty,
            assign: false,
            doc: None,
            comment: None,
        }
    }

    pub fn with_type_params(mut self, params: FieldList) -> Self {
        self.type_params = params;
        self
    }

    pub fn with_doc(mut self, doc: CommentGroup) -> Self {
        self.doc = Some(doc);
        self
    }

    pub fn with_comment(mut self, comment: CommentGroup) -> Self {
        self.comment = Some(comment);
        self
    }
}

impl FuncDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            recv: None,
            type_params: Vec::new(),
            params: Vec::new(),
            results: Vec::new(),
            doc: None,
        }
    }

    pub fn params(mut self, params: FieldList) -> Self {
        self.params = params;
        self
    }

    pub fn results(mut self, results: FieldList) -> Self {
        self.results = results;
        self
    }

    pub fn type_params(mut self, params: FieldList) -> Self {
        self.type_params = params;
        self
    }

    pub fn receiver(mut self, recv: Field) -> Self {
        self.recv = Some(Box::new(recv));
        self
    }

    pub fn with_doc(mut self, doc: CommentGroup) -> Self {
        self.doc = Some(doc);
        self
    }
}

impl GenDecl {
    pub fn new(token: DeclToken, specs: Vec<Spec>) -> Self {
        Self {
            token,
            doc: None,
            grouped: specs.len() > 1,
            specs,
        }
    }

    pub fn grouped(mut self, grouped: bool) -> Self {
        self.grouped = grouped;
        self
    }

    pub fn with_doc(mut self, doc: CommentGroup) -> Self {
        self.doc = Some(doc);
        self
    }
}

impl Decl {
    /// `const ( ... )` with one value spec per entry.
    pub fn consts(specs: Vec<ValueSpec>) -> Self {
        Self::Gen(GenDecl::new(
            DeclToken::Const,
            specs.into_iter().map(Spec::Value).collect(),
        ))
    }

    pub fn vars(specs: Vec<ValueSpec>) -> Self {
        Self::Gen(GenDecl::new(
            DeclToken::Var,
            specs.into_iter().map(Spec::Value).collect(),
        ))
    }

    pub fn types(specs: Vec<TypeSpec>) -> Self {
        Self::Gen(GenDecl::new(
            DeclToken::Type,
            specs.into_iter().map(Spec::Type).collect(),
        ))
    }

    pub fn func(decl: FuncDecl) -> Self {
        Self::Func(decl)
    }
}

impl File {
    pub fn new(decls: Vec<Decl>) -> Self {
        Self {
            package: String::new(),
            decls,
        }
    }
}
