//! Random expression shapes for property-based testing.
//!
//! `ExprShape` describes a Java expression together with the formatting between
//! its tokens: whitespace runs, line comments and block comments. Tests turn a
//! shape into a tree, run visitors or the codec over it, and check that every
//! formatting string survives unchanged.
//!
//! Generation is bounded by a depth parameter so shrinking and deep nesting stay cheap.

use std::fmt;

use quickcheck::{Arbitrary, Gen};

const MAX_DEPTH: usize = 6;

/// Keywords to avoid in identifiers.
const RESERVED_KEYWORDS: &[&str] = &[
    "if", "else", "new", "class", "return", "true", "false", "null", "this", "super", "for", "while", "do", "int",
];

/// Binary operators, named by their wire names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    LessThan,
    Equal,
    And,
    Or,
}

impl BinOp {
    pub fn name(self) -> &'static str {
        match self {
            BinOp::Addition => "Addition",
            BinOp::Subtraction => "Subtraction",
            BinOp::Multiplication => "Multiplication",
            BinOp::Division => "Division",
            BinOp::LessThan => "LessThan",
            BinOp::Equal => "Equal",
            BinOp::And => "And",
            BinOp::Or => "Or",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinOp::Addition => "+",
            BinOp::Subtraction => "-",
            BinOp::Multiplication => "*",
            BinOp::Division => "/",
            BinOp::LessThan => "<",
            BinOp::Equal => "==",
            BinOp::And => "&&",
            BinOp::Or => "||",
        };
        f.write_str(symbol)
    }
}

/// Formatting between two tokens: whitespace, optionally mixed with comments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Formatting(pub String);

impl Formatting {
    pub fn none() -> Self {
        Formatting(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Formatting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An expression with the formatting in front of it.
#[derive(Clone, Debug)]
pub struct Expr {
    pub prefix: Formatting,
    pub shape: ExprShape,
}

#[derive(Clone, Debug)]
pub enum ExprShape {
    Ident(String),
    IntLit(i64),
    BoolLit(bool),
    StringLit(String),
    /// `left op right`, with the formatting before the operator.
    Binary {
        left: Box<Expr>,
        before_op: Formatting,
        op: BinOp,
        right: Box<Expr>,
    },
    /// `( inner )`, with the formatting before the closing parenthesis.
    Parens { inner: Box<Expr>, before_close: Formatting },
    /// `target.name`, with the formatting before the dot.
    FieldAccess {
        target: Box<Expr>,
        before_dot: Formatting,
        name: String,
    },
    /// `select.name(args)`.
    MethodCall {
        select: Option<Box<Expr>>,
        name: String,
        args: Vec<Expr>,
    },
}

impl Expr {
    /// Every formatting string of the expression, in source order.
    pub fn formatting(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_formatting(&mut out);
        out
    }

    fn collect_formatting<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(self.prefix.as_str());
        match &self.shape {
            ExprShape::Binary {
                left, before_op, right, ..
            } => {
                left.collect_formatting(out);
                out.push(before_op.as_str());
                right.collect_formatting(out);
            }
            ExprShape::Parens { inner, before_close } => {
                inner.collect_formatting(out);
                out.push(before_close.as_str());
            }
            ExprShape::FieldAccess { target, before_dot, .. } => {
                target.collect_formatting(out);
                out.push(before_dot.as_str());
            }
            ExprShape::MethodCall { select, args, .. } => {
                if let Some(select) = select {
                    select.collect_formatting(out);
                }
                for arg in args {
                    arg.collect_formatting(out);
                }
            }
            _ => {}
        }
    }

    /// Number of expression nodes.
    pub fn size(&self) -> usize {
        1 + match &self.shape {
            ExprShape::Binary { left, right, .. } => left.size() + right.size(),
            ExprShape::Parens { inner, .. } => inner.size(),
            ExprShape::FieldAccess { target, .. } => target.size(),
            ExprShape::MethodCall { select, args, .. } => {
                select.as_ref().map_or(0, |select| select.size()) + args.iter().map(Expr::size).sum::<usize>()
            }
            _ => 0,
        }
    }

    pub fn to_code(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix)?;
        match &self.shape {
            ExprShape::Ident(name) => write!(f, "{}", name),
            ExprShape::IntLit(value) => write!(f, "{}", value),
            ExprShape::BoolLit(value) => write!(f, "{}", value),
            ExprShape::StringLit(value) => write!(f, "\"{}\"", value),
            ExprShape::Binary {
                left,
                before_op,
                op,
                right,
            } => write!(f, "{}{}{}{}", left, before_op, op, right),
            ExprShape::Parens { inner, before_close } => write!(f, "({}{})", inner, before_close),
            ExprShape::FieldAccess {
                target,
                before_dot,
                name,
            } => write!(f, "{}{}.{}", target, before_dot, name),
            ExprShape::MethodCall { select, name, args } => {
                if let Some(select) = select {
                    write!(f, "{}.", select)?;
                }
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(")")
            }
        }
    }
}

fn gen_range(g: &mut Gen, min: u32, max: u32) -> u32 {
    min + (u32::arbitrary(g) % (max - min + 1))
}

/// Generates an identifier that is not a reserved keyword.
fn gen_ident(g: &mut Gen) -> String {
    let starters: Vec<char> = "abcdefghijklmnopqrstuvwxyz_".chars().collect();
    let continuers: Vec<char> = "abcdefghijklmnopqrstuvwxyz0123456789_".chars().collect();
    loop {
        let len = gen_range(g, 1, 8);
        let mut name = String::new();
        name.push(*g.choose(&starters).unwrap());
        for _ in 1..len {
            name.push(*g.choose(&continuers).unwrap());
        }
        if !RESERVED_KEYWORDS.contains(&name.as_str()) {
            return name;
        }
    }
}

/// Comment text without delimiters or line breaks.
fn gen_comment_text(g: &mut Gen) -> String {
    let chars: Vec<char> = "abc xyz-_=+!?".chars().collect();
    let len = gen_range(g, 0, 12);
    (0..len).map(|_| *g.choose(&chars).unwrap()).collect()
}

fn gen_blank(g: &mut Gen) -> String {
    const CHOICES: &[&str] = &["", " ", "  ", "\n", "\n    ", "\t", " \n\t "];
    g.choose(CHOICES).unwrap().to_string()
}

/// Generates formatting, usually plain whitespace and sometimes with comments.
fn gen_formatting(g: &mut Gen) -> Formatting {
    let mut text = gen_blank(g);
    let comments = if gen_range(g, 0, 3) == 0 { gen_range(g, 1, 2) } else { 0 };
    for _ in 0..comments {
        if bool::arbitrary(g) {
            text.push_str("//");
            text.push_str(&gen_comment_text(g));
            text.push('\n');
        } else {
            text.push_str("/*");
            text.push_str(&gen_comment_text(g));
            text.push_str("*/");
        }
        text.push_str(&gen_blank(g));
    }
    Formatting(text)
}

fn gen_leaf(g: &mut Gen) -> ExprShape {
    match gen_range(g, 0, 3) {
        0 => ExprShape::Ident(gen_ident(g)),
        1 => ExprShape::IntLit(i64::from(u16::arbitrary(g))),
        2 => ExprShape::BoolLit(bool::arbitrary(g)),
        _ => ExprShape::StringLit(gen_ident(g)),
    }
}

fn gen_expr(g: &mut Gen, depth: usize) -> Expr {
    let prefix = gen_formatting(g);
    if depth == 0 {
        return Expr {
            prefix,
            shape: gen_leaf(g),
        };
    }
    let shape = match gen_range(g, 0, 5) {
        0 => gen_leaf(g),
        1 => ExprShape::Binary {
            left: Box::new(gen_expr(g, depth - 1)),
            before_op: gen_formatting(g),
            op: BinOp::arbitrary(g),
            right: Box::new(gen_expr(g, depth - 1)),
        },
        2 => ExprShape::Parens {
            inner: Box::new(gen_expr(g, depth - 1)),
            before_close: gen_formatting(g),
        },
        3 => ExprShape::FieldAccess {
            target: Box::new(gen_expr(g, depth - 1)),
            before_dot: gen_formatting(g),
            name: gen_ident(g),
        },
        _ => {
            let select = if bool::arbitrary(g) {
                Some(Box::new(gen_expr(g, depth - 1)))
            } else {
                None
            };
            let args = (0..gen_range(g, 0, 3)).map(|_| gen_expr(g, depth - 1)).collect();
            ExprShape::MethodCall {
                select,
                name: gen_ident(g),
                args,
            }
        }
    };
    Expr { prefix, shape }
}

impl Arbitrary for BinOp {
    fn arbitrary(g: &mut Gen) -> Self {
        const CHOICES: &[BinOp] = &[
            BinOp::Addition,
            BinOp::Subtraction,
            BinOp::Multiplication,
            BinOp::Division,
            BinOp::LessThan,
            BinOp::Equal,
            BinOp::And,
            BinOp::Or,
        ];
        *g.choose(CHOICES).unwrap()
    }
}

impl Arbitrary for Formatting {
    fn arbitrary(g: &mut Gen) -> Self {
        gen_formatting(g)
    }
}

impl Arbitrary for Expr {
    fn arbitrary(g: &mut Gen) -> Self {
        let depth = g.size().min(MAX_DEPTH);
        gen_expr(g, depth)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let children: Vec<Expr> = match &self.shape {
            ExprShape::Binary { left, right, .. } => vec![(**left).clone(), (**right).clone()],
            ExprShape::Parens { inner, .. } => vec![(**inner).clone()],
            ExprShape::FieldAccess { target, .. } => vec![(**target).clone()],
            ExprShape::MethodCall { select, args, .. } => {
                select.iter().map(|select| (**select).clone()).chain(args.iter().cloned()).collect()
            }
            _ => Vec::new(),
        };
        Box::new(children.into_iter())
    }
}
