//! Trees built by the reference automaton.

use std::fmt;

/// Parse tree produced on acceptance. Renders as an S-expression so tests
/// can spell out the expected tree by hand.
///
/// Nesting depth follows the source, except that a run of postfix
/// operators is kept flat: long marker runs must not recurse in `Display`
/// or `Drop`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Node {
    Int(String),
    Var(String),
    Constr(String),
    Unary(String, Box<Node>),
    Binary(String, Box<Node>, Box<Node>),
    /// `operand` with `ops` applied innermost first.
    Postfix {
        operand: Box<Node>,
        ops: Vec<String>,
    },
    Call(String, Vec<Node>),
    Labeled {
        label: String,
        optional: bool,
        default: Option<Box<Node>>,
    },
    Let(String, Box<Node>),
    Val(String, Box<Node>),
    Open(String),
    Doc(String, Box<Node>),
    TypeCon(String),
    TypeApp(Box<Node>, String),
    Module(Vec<Node>),
    Signature(Vec<Node>),
    Phrases(Vec<Node>),
}

fn list(f: &mut fmt::Formatter<'_>, head: &str, items: &[Node]) -> fmt::Result {
    write!(f, "({head}")?;
    for item in items {
        write!(f, " {item}")?;
    }
    write!(f, ")")
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Int(s) | Node::Var(s) | Node::Constr(s) | Node::TypeCon(s) => f.write_str(s),
            Node::Unary(op, e) => write!(f, "({op} {e})"),
            Node::Binary(op, a, b) => write!(f, "({op} {a} {b})"),
            Node::Postfix { operand, ops } => {
                for _ in ops {
                    f.write_str("(")?;
                }
                write!(f, "{operand}")?;
                for op in ops {
                    write!(f, " {op})")?;
                }
                Ok(())
            }
            Node::Call(callee, args) => list(f, &format!("call {callee}"), args),
            Node::Labeled {
                label,
                optional,
                default,
            } => {
                write!(f, "~{label}")?;
                match default {
                    Some(e) if *optional => write!(f, "=?{e}"),
                    Some(e) => write!(f, "={e}"),
                    None => Ok(()),
                }
            }
            Node::Let(name, e) => write!(f, "(let {name} {e})"),
            Node::Val(name, t) => write!(f, "(val {name} {t})"),
            Node::Open(m) => write!(f, "(open {m})"),
            Node::Doc(text, item) => write!(f, "(doc {text:?} {item})"),
            Node::TypeApp(arg, con) => write!(f, "({con} {arg})"),
            Node::Module(items) => list(f, "module", items),
            Node::Signature(items) => list(f, "sig", items),
            Node::Phrases(items) => list(f, "phrases", items),
        }
    }
}
