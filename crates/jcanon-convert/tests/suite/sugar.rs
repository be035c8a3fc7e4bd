use jcanon_ast::{dump, tags, Field, NodeKind, Position};
use jcanon_host::{HostLiteral, HostNode, HostTreeBuilder};
use pretty_assertions::assert_eq;

use super::support::{convert, exec};

#[test]
fn this_call_is_an_alternate_constructor_invocation() {
    // this(5);
    let mut b = HostTreeBuilder::new();
    let this = b.ident("this", 0);
    let five = b.literal(HostLiteral::Int(5), 5..6);
    let call = b.add(
        HostNode::Apply {
            type_args: vec![],
            meth: this,
            args: vec![five],
        },
        0..7,
    );
    let stmt = exec(&mut b, call, 0..8);
    let (ast, root) = convert(b, stmt);

    assert_eq!(
        dump(&ast, root),
        "AlternateConstructorInvocation 0..7 {keyword=0..4}\n  arguments[0]: IntegralLiteral 5 5..6\n"
    );
}

#[test]
fn qualified_super_call_keeps_its_qualifier() {
    // outer.super();
    let mut b = HostTreeBuilder::new();
    let outer = b.ident("outer", 0);
    let sel = b.select(outer, "super", 0);
    let call = b.add(
        HostNode::Apply {
            type_args: vec![],
            meth: sel,
            args: vec![],
        },
        0..13,
    );
    let stmt = exec(&mut b, call, 0..14);
    let (ast, root) = convert(b, stmt);

    assert_eq!(ast.kind(root), &NodeKind::SuperConstructorInvocation);
    let qualifier = ast.child(root, Field::Qualifier).unwrap();
    assert_eq!(ast.kind(qualifier), &NodeKind::VariableReference);
    assert_eq!(ast.position(qualifier), Position::new(0, 5));
    assert_eq!(ast.tag(root, tags::KEYWORD), Some(Position::new(6, 11)));
}

#[test]
fn bare_super_call_tags_its_keyword() {
    // super();
    let mut b = HostTreeBuilder::new();
    let sup = b.ident("super", 0);
    let call = b.add(
        HostNode::Apply {
            type_args: vec![],
            meth: sup,
            args: vec![],
        },
        0..7,
    );
    let stmt = exec(&mut b, call, 0..8);
    let (ast, root) = convert(b, stmt);

    assert_eq!(dump(&ast, root), "SuperConstructorInvocation 0..7 {keyword=0..5}\n");
}

#[test]
fn ordinary_call_is_wrapped_in_an_expression_statement() {
    // super.run();
    let mut b = HostTreeBuilder::new();
    let sup = b.ident("super", 0);
    let sel = b.select(sup, "run", 0);
    let call = b.add(
        HostNode::Apply {
            type_args: vec![],
            meth: sel,
            args: vec![],
        },
        0..11,
    );
    let stmt = exec(&mut b, call, 0..12);
    let (ast, root) = convert(b, stmt);

    let expected = "\
ExpressionStatement 0..12
  expression: MethodInvocation 0..11
    operand: Super 0..5 {keyword=0..5}
    name: Identifier \"run\" 6..9
";
    assert_eq!(dump(&ast, root), expected);
}

#[test]
fn explicit_method_type_arguments_are_tagged() {
    // Collections.<String>emptyList()
    let mut b = HostTreeBuilder::new();
    let collections = b.ident("Collections", 0);
    let sel = b.select(collections, "emptyList", 0);
    b.set_end(sel, 29);
    let string = b.ident("String", 13);
    let call = b.add(
        HostNode::Apply {
            type_args: vec![string],
            meth: sel,
            args: vec![],
        },
        0..31,
    );
    let (ast, root) = convert(b, call);

    assert_eq!(ast.kind(root), &NodeKind::MethodInvocation);
    assert_eq!(ast.tag(root, tags::TYPE_ARGUMENTS), Some(Position::new(12, 20)));
    let type_args = ast.items(root, Field::MethodTypeArguments);
    assert_eq!(type_args.len(), 1);
    assert_eq!(ast.kind(type_args[0]), &NodeKind::type_reference());
    let name = ast.child(root, Field::Name).unwrap();
    assert_eq!(ast.position(name), Position::new(20, 29));
}

#[test]
fn qualified_this_reads_its_qualifier_as_a_type() {
    // Outer.this
    let mut b = HostTreeBuilder::new();
    let outer = b.ident("Outer", 0);
    let sel = b.select(outer, "this", 0);
    let (ast, root) = convert(b, sel);

    let expected = "\
This 0..10 {keyword=6..10}
  qualifier: TypeReference 0..5
    parts[0]: TypeReferencePart 0..5
      identifier: Identifier \"Outer\" 0..5
";
    assert_eq!(dump(&ast, root), expected);
}

#[test]
fn plain_selection_keeps_operand_and_name() {
    // a.b.c
    let mut b = HostTreeBuilder::new();
    let a = b.ident("a", 0);
    let ab = b.select(a, "b", 0);
    let abc = b.select(ab, "c", 0);
    let (ast, root) = convert(b, abc);

    let expected = "\
Select 0..5
  operand: Select 0..3
    operand: VariableReference 0..1
      identifier: Identifier \"a\" 0..1
    identifier: Identifier \"b\" 2..3
  identifier: Identifier \"c\" 4..5
";
    assert_eq!(dump(&ast, root), expected);
}
