use jcanon_convert::{convert, convert_with_options, ConversionContext, ConvertError, EngineOptions};
use jcanon_host::{Flags, HostId, HostLiteral, HostNode, HostTag, HostTreeBuilder, PrimitiveTag};
use pretty_assertions::assert_eq;

use super::support::{block, exec, no_modifiers};

/// `- - ... - x` with `depth` negations starting at `start`. With `ends` the
/// side table records every end; without it every end is computed.
fn negations(b: &mut HostTreeBuilder, depth: u32, start: u32, ends: bool) -> (HostId, u32) {
    let end = start + depth + 1;
    let mut expr = b.ident("x", start + depth);
    for offset in (0..depth).rev() {
        let node = HostNode::Unary {
            tag: HostTag::Neg,
            arg: expr,
        };
        expr = if ends {
            b.add(node, start + offset..end)
        } else {
            b.add_at(node, start + offset)
        };
    }
    (expr, end)
}

#[test]
fn unknown_host_kind_is_reported_by_name() {
    let mut b = HostTreeBuilder::new();
    let lambda = b.add(
        HostNode::Unknown {
            kind: "LambdaExpression".into(),
        },
        0..9,
    );
    let (tree, ends) = b.finish();
    let err = convert(&tree, lambda, &ConversionContext::new(), &ends).unwrap_err();
    assert_eq!(
        err,
        ConvertError::UnsupportedKind {
            kind: "LambdaExpression".to_string(),
            host: lambda,
        }
    );
}

#[test]
fn erroneous_node_deep_in_a_statement_fails_the_whole_conversion() {
    // f(<error>);
    let mut b = HostTreeBuilder::new();
    let f = b.ident("f", 0);
    let broken = b.add(HostNode::Erroneous, 2..5);
    let call = b.add(
        HostNode::Apply {
            type_args: vec![],
            meth: f,
            args: vec![broken],
        },
        0..6,
    );
    let stmt = exec(&mut b, call, 0..7);
    let (tree, ends) = b.finish();
    let err = convert(&tree, stmt, &ConversionContext::new(), &ends).unwrap_err();
    assert!(
        matches!(err, ConvertError::UnsupportedKind { ref kind, host } if kind == "Erroneous" && host == broken),
        "{err}"
    );
}

#[test]
fn nesting_limit_is_enforced() {
    // -(-(-(-(-x))))
    let mut b = HostTreeBuilder::new();
    let mut expr = b.ident("x", 10);
    for start in (0..5).rev() {
        expr = b.add(
            HostNode::Unary {
                tag: HostTag::Neg,
                arg: expr,
            },
            start * 2..11,
        );
    }
    let (tree, ends) = b.finish();
    let options = EngineOptions {
        max_nesting_depth: 3,
        ..EngineOptions::default()
    };
    let err =
        convert_with_options(&tree, expr, &ConversionContext::new(), &ends, &options).unwrap_err();
    assert!(matches!(err, ConvertError::NestingTooDeep { limit: 3, .. }), "{err}");

    let roomy = EngineOptions::default();
    let converted = convert_with_options(&tree, expr, &ConversionContext::new(), &ends, &roomy);
    assert!(converted.is_ok());
}

#[test]
fn binary_tag_on_a_unary_node_is_a_shape_error() {
    let mut b = HostTreeBuilder::new();
    let one = b.literal(HostLiteral::Int(1), 1..2);
    let bad = b.add(
        HostNode::Unary {
            tag: HostTag::Mul,
            arg: one,
        },
        0..2,
    );
    let (tree, ends) = b.finish();
    let err = convert(&tree, bad, &ConversionContext::new(), &ends).unwrap_err();
    assert_eq!(
        err,
        ConvertError::UnexpectedShape {
            expected: "a unary operator",
            found: "Unary".to_string(),
            host: bad,
        }
    );
}

#[test]
fn errors_render_the_offending_kind() {
    let err = ConvertError::UnsupportedKind {
        kind: "LambdaExpression".to_string(),
        host: jcanon_host::HostId::from_raw(4),
    };
    assert!(err.to_string().contains("`LambdaExpression`"));
}

#[test]
fn deep_initializer_without_recorded_ends_fails_fast() {
    // { int v = - - ... - x; }
    let mut b = HostTreeBuilder::new();
    let mods = no_modifiers(&mut b);
    let int = b.primitive(PrimitiveTag::Int, 2);
    let (init, _) = negations(&mut b, 200_000, 10, false);
    let v = b.add_with_pos(
        HostNode::VarDef {
            modifiers: mods,
            name: "v".into(),
            var_type: int,
            init: Some(init),
        },
        2,
        6,
        None,
    );
    let body = b.add_at(
        HostNode::Block {
            flags: Flags::EMPTY,
            stats: vec![v],
        },
        0,
    );
    let (tree, ends) = b.finish();
    let options = EngineOptions {
        max_nesting_depth: 50,
        ..EngineOptions::default()
    };
    let err =
        convert_with_options(&tree, body, &ConversionContext::new(), &ends, &options).unwrap_err();
    assert!(matches!(err, ConvertError::NestingTooDeep { limit: 50, .. }), "{err}");
}

#[test]
fn default_limit_fits_a_default_thread() {
    // { - - ... - x; } nested to just under the default limit. The block,
    // the statement and the identifier each take one level.
    let limit = EngineOptions::default().max_nesting_depth;
    let accepted = limit - 3;
    let mut b = HostTreeBuilder::new();
    let (expr, end) = negations(&mut b, accepted, 1, true);
    let stmt = exec(&mut b, expr, 1..end + 1);
    let body = block(&mut b, vec![stmt], 0..end + 2);
    let (tree, ends) = b.finish();
    let converted = convert(&tree, body, &ConversionContext::new(), &ends);
    assert!(converted.is_ok(), "{:?}", converted.err());

    let mut b = HostTreeBuilder::new();
    let (expr, end) = negations(&mut b, accepted + 1, 1, true);
    let stmt = exec(&mut b, expr, 1..end + 1);
    let body = block(&mut b, vec![stmt], 0..end + 2);
    let (tree, ends) = b.finish();
    let err = convert(&tree, body, &ConversionContext::new(), &ends).unwrap_err();
    assert!(matches!(err, ConvertError::NestingTooDeep { .. }), "{err}");
}
