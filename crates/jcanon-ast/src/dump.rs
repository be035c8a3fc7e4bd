//! Deterministic indented rendering of a canonical subtree.
//!
//! One line per node: the field it hangs in, its kind and payload, its
//! position, then any conversion tags and parenthesis records. Empty slots
//! and empty lists are left out.

use std::fmt::Write as _;

use crate::kind::NodeKind;
use crate::ops::WildcardKind;
use crate::tree::{Ast, ChildValue, NodeId};

pub fn dump(ast: &Ast, root: NodeId) -> String {
    let mut out = String::new();
    write_node(ast, root, None, 0, &mut out);
    out
}

fn write_node(ast: &Ast, id: NodeId, label: Option<&str>, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    if let Some(label) = label {
        out.push_str(label);
        out.push_str(": ");
    }
    let kind = ast.kind(id);
    out.push_str(kind.name());
    write_payload(kind, out);
    let _ = write!(out, " {}", ast.position(id));

    let mut tags = ast.tags(id).peekable();
    if tags.peek().is_some() {
        out.push_str(" {");
        for (i, (key, position)) in tags.enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{key}={position}");
        }
        out.push('}');
    }
    let parens = ast.parens(id);
    if !parens.is_empty() {
        let _ = write!(out, " parens{parens:?}");
    }
    out.push('\n');

    for (field, value) in ast.entries(id) {
        match value {
            ChildValue::Slot(Some(child)) => {
                write_node(ast, child, Some(field.name()), depth + 1, out);
            }
            ChildValue::Slot(None) => {}
            ChildValue::List(list) => {
                for (i, child) in ast.raw_list(list).iter().enumerate() {
                    let label = format!("{}[{i}]", field.name());
                    write_node(ast, child, Some(&label), depth + 1, out);
                }
            }
        }
    }
}

fn write_payload(kind: &NodeKind, out: &mut String) {
    let _ = match kind {
        NodeKind::ImportDeclaration {
            static_import,
            star_import,
        } => {
            if *static_import {
                out.push_str(" static");
            }
            if *star_import {
                out.push_str(" star");
            }
            Ok(())
        }
        NodeKind::Identifier { value } => write!(out, " {:?}", value.as_str()),
        NodeKind::KeywordModifier { keyword } => write!(out, " {}", keyword.as_str()),
        NodeKind::VariableDefinition { varargs: true } => write!(out, " varargs"),
        NodeKind::VariableDefinitionEntry { array_dimensions } if *array_dimensions > 0 => {
            write!(out, " dims={array_dimensions}")
        }
        NodeKind::TypeReference {
            wildcard,
            array_dimensions,
        } => {
            if *wildcard != WildcardKind::None {
                let _ = write!(out, " wildcard={wildcard:?}");
            }
            if *array_dimensions > 0 {
                let _ = write!(out, " dims={array_dimensions}");
            }
            Ok(())
        }
        NodeKind::BinaryExpression { operator } => write!(out, " {}", operator.symbol()),
        NodeKind::UnaryExpression { operator } if operator.is_postfix() => {
            write!(out, " postfix{}", operator.symbol())
        }
        NodeKind::UnaryExpression { operator } => write!(out, " {}", operator.symbol()),
        NodeKind::IntegralLiteral { value } => write!(out, " {value}"),
        NodeKind::FloatingPointLiteral { value } => write!(out, " {value}"),
        NodeKind::BooleanLiteral { value } => write!(out, " {value}"),
        NodeKind::CharLiteral { value } => write!(out, " {value:?}"),
        NodeKind::StringLiteral { value } => write!(out, " {value:?}"),
        _ => Ok(()),
    };
}
