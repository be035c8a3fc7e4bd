use jcanon_ast::{containment_violations, dump, tags, Field, NodeKind, Position, UnaryOperator};
use jcanon_host::{HostLiteral, HostNode, HostTag, HostTreeBuilder, PrimitiveTag};
use pretty_assertions::assert_eq;

use super::support::{block, convert, exec, no_modifiers, var_def};

#[test]
fn switch_cases_become_labels_in_one_block() {
    // switch (x) { case 1: f(); default: }
    let mut b = HostTreeBuilder::new();
    let x = b.ident("x", 8);
    let selector = b.add(HostNode::Parens { expr: x }, 7..10);
    let one = b.literal(HostLiteral::Int(1), 18..19);
    let f = b.ident("f", 21);
    let call = b.add(
        HostNode::Apply {
            type_args: vec![],
            meth: f,
            args: vec![],
        },
        21..24,
    );
    let stmt = exec(&mut b, call, 21..25);
    let case = b.add(
        HostNode::Case {
            pat: Some(one),
            stats: vec![stmt],
        },
        13..25,
    );
    let default = b.add(
        HostNode::Case {
            pat: None,
            stats: vec![],
        },
        26..34,
    );
    let switch = b.add(
        HostNode::Switch {
            selector,
            cases: vec![case, default],
        },
        0..36,
    );
    let (ast, root) = convert(b, switch);

    let expected = "\
Switch 0..36 {parens=7..10}
  condition: VariableReference 8..9
    identifier: Identifier \"x\" 8..9
  body: Block 13..34
    contents[0]: Case 13..19
      condition: IntegralLiteral 1 18..19
    contents[1]: ExpressionStatement 21..25
      expression: MethodInvocation 21..24
        name: Identifier \"f\" 21..22
    contents[2]: Default 26..33
";
    assert_eq!(dump(&ast, root), expected);
    assert!(containment_violations(&ast, root).is_empty());
}

#[test]
fn for_loop_declarators_fold_and_updates_unwrap() {
    // for (int i = 0, j = 0; i < n; i++, j++) ;
    let mut b = HostTreeBuilder::new();
    let mods = no_modifiers(&mut b);
    let int = b.primitive(PrimitiveTag::Int, 5);
    let zero_i = b.literal(HostLiteral::Int(0), 13..14);
    let zero_j = b.literal(HostLiteral::Int(0), 20..21);
    let i = var_def(&mut b, mods, "i", int, Some(zero_i), 5, 9, 14);
    let j = var_def(&mut b, mods, "j", int, Some(zero_j), 5, 16, 21);
    let i_ref = b.ident("i", 23);
    let n_ref = b.ident("n", 27);
    let cond = b.add_with_pos(
        HostNode::Binary {
            tag: HostTag::Lt,
            lhs: i_ref,
            rhs: n_ref,
        },
        23,
        25,
        Some(28),
    );
    let i_step = b.ident("i", 30);
    let inc_i = b.add(
        HostNode::Unary {
            tag: HostTag::PostInc,
            arg: i_step,
        },
        30..33,
    );
    let step_i = exec(&mut b, inc_i, 30..33);
    let j_step = b.ident("j", 35);
    let inc_j = b.add(
        HostNode::Unary {
            tag: HostTag::PostInc,
            arg: j_step,
        },
        35..38,
    );
    let step_j = exec(&mut b, inc_j, 35..38);
    let body = b.add_at(HostNode::Skip, 40);
    let for_loop = b.add(
        HostNode::ForLoop {
            init: vec![i, j],
            cond: Some(cond),
            step: vec![step_i, step_j],
            body,
        },
        0..41,
    );
    let (ast, root) = convert(b, for_loop);

    let inits = ast.items(root, Field::Inits);
    assert_eq!(inits.len(), 1);
    assert_eq!(ast.kind(inits[0]), &NodeKind::VariableDefinition { varargs: false });
    assert_eq!(ast.items(inits[0], Field::Variables).len(), 2);

    let updates = ast.items(root, Field::Updates);
    assert_eq!(updates.len(), 2);
    for &update in updates {
        assert_eq!(
            ast.kind(update),
            &NodeKind::UnaryExpression {
                operator: UnaryOperator::PostfixIncrement
            }
        );
    }
    let statement = ast.child(root, Field::Statement).unwrap();
    assert_eq!(ast.kind(statement), &NodeKind::EmptyStatement);
    assert!(containment_violations(&ast, root).is_empty());
}

#[test]
fn for_loop_expression_inits_unwrap() {
    // for (i = 0; ; ) ;
    let mut b = HostTreeBuilder::new();
    let i = b.ident("i", 5);
    let zero = b.literal(HostLiteral::Int(0), 9..10);
    let assign = b.add(HostNode::Assign { lhs: i, rhs: zero }, 5..10);
    let init = exec(&mut b, assign, 5..10);
    let body = b.add_at(HostNode::Skip, 16);
    let for_loop = b.add(
        HostNode::ForLoop {
            init: vec![init],
            cond: None,
            step: vec![],
            body,
        },
        0..17,
    );
    let (ast, root) = convert(b, for_loop);

    let inits = ast.items(root, Field::Inits);
    assert_eq!(inits.len(), 1);
    assert!(matches!(ast.kind(inits[0]), NodeKind::BinaryExpression { .. }));
    assert!(ast.child(root, Field::Condition).is_none());
}

#[test]
fn try_catch_finally() {
    // try { } catch (Exception e) { } finally { }
    let mut b = HostTreeBuilder::new();
    let body = block(&mut b, vec![], 4..7);
    let mods = no_modifiers(&mut b);
    let exception = b.ident("Exception", 15);
    let param = var_def(&mut b, mods, "e", exception, None, 15, 25, 26);
    let catch_body = block(&mut b, vec![], 28..31);
    let catcher = b.add(
        HostNode::Catch {
            param,
            body: catch_body,
        },
        8..31,
    );
    let finalizer = block(&mut b, vec![], 40..43);
    let try_stmt = b.add(
        HostNode::Try {
            body,
            catchers: vec![catcher],
            finalizer: Some(finalizer),
        },
        0..43,
    );
    let (ast, root) = convert(b, try_stmt);

    let catches = ast.items(root, Field::Catches);
    assert_eq!(catches.len(), 1);
    let decl = ast.child(catches[0], Field::ExceptionDeclaration).unwrap();
    assert_eq!(ast.kind(decl), &NodeKind::VariableDefinition { varargs: false });
    let finally = ast.child(root, Field::Finally).unwrap();
    assert_eq!(ast.position(finally), Position::new(40, 43));
    assert!(containment_violations(&ast, root).is_empty());
}

#[test]
fn labelled_loop_with_labelled_break() {
    // out: while (true) break out;
    let mut b = HostTreeBuilder::new();
    let truth = b.literal(HostLiteral::Boolean(true), 12..16);
    let cond = b.add(HostNode::Parens { expr: truth }, 11..17);
    let brk = b.add(
        HostNode::Break {
            label: Some("out".into()),
        },
        18..28,
    );
    let while_loop = b.add(HostNode::WhileLoop { cond, body: brk }, 5..28);
    let labelled = b.add(
        HostNode::Labelled {
            label: "out".into(),
            body: while_loop,
        },
        0..28,
    );
    let (ast, root) = convert(b, labelled);

    let expected = "\
LabelledStatement 0..28
  label: Identifier \"out\" 0..3
  statement: While 5..28 {parens=11..17}
    condition: BooleanLiteral true 12..16
    statement: Break 18..28
      label: Identifier \"out\" Unplaced
";
    assert_eq!(dump(&ast, root), expected);
}

#[test]
fn if_else_and_synchronized_tag_their_parens() {
    // if (a) synchronized (l) { } else ;
    let mut b = HostTreeBuilder::new();
    let a = b.ident("a", 4);
    let cond = b.add(HostNode::Parens { expr: a }, 3..6);
    let l = b.ident("l", 21);
    let lock = b.add(HostNode::Parens { expr: l }, 20..23);
    let body = block(&mut b, vec![], 24..27);
    let sync = b.add(HostNode::Synchronized { lock, body }, 7..27);
    let otherwise = b.add_at(HostNode::Skip, 33);
    let if_stmt = b.add(
        HostNode::If {
            cond,
            then_part: sync,
            else_part: Some(otherwise),
        },
        0..34,
    );
    let (ast, root) = convert(b, if_stmt);

    assert_eq!(ast.tag(root, tags::PARENS), Some(Position::new(3, 6)));
    let then = ast.child(root, Field::Statement).unwrap();
    assert_eq!(ast.kind(then), &NodeKind::Synchronized);
    assert_eq!(ast.tag(then, tags::PARENS), Some(Position::new(20, 23)));
    let lock = ast.child(then, Field::Lock).unwrap();
    assert_eq!(ast.kind(lock), &NodeKind::VariableReference);
    let otherwise = ast.child(root, Field::ElseStatement).unwrap();
    assert_eq!(ast.kind(otherwise), &NodeKind::EmptyStatement);
}

#[test]
fn foreach_return_throw_and_assert() {
    // for (String s : list) { return; throw e; assert ok : msg; }
    let mut b = HostTreeBuilder::new();
    let mods = no_modifiers(&mut b);
    let string = b.ident("String", 5);
    let var = var_def(&mut b, mods, "s", string, None, 5, 12, 13);
    let list = b.ident("list", 16);
    let ret = b.add(HostNode::Return { expr: None }, 24..31);
    let e = b.ident("e", 38);
    let throw = b.add(HostNode::Throw { expr: e }, 32..40);
    let ok = b.ident("ok", 48);
    let msg = b.ident("msg", 53);
    let assert = b.add(
        HostNode::Assert {
            cond: ok,
            detail: Some(msg),
        },
        41..57,
    );
    let body = block(&mut b, vec![ret, throw, assert], 22..59);
    let foreach = b.add(HostNode::ForeachLoop { var, expr: list, body }, 0..59);
    let (ast, root) = convert(b, foreach);

    assert_eq!(ast.kind(root), &NodeKind::ForEach);
    let variable = ast.child(root, Field::Variable).unwrap();
    assert_eq!(ast.kind(variable), &NodeKind::VariableDefinition { varargs: false });
    let body = ast.child(root, Field::Statement).unwrap();
    let kinds: Vec<_> = ast
        .items(body, Field::Contents)
        .iter()
        .map(|&stmt| ast.kind(stmt).clone())
        .collect();
    assert_eq!(kinds, vec![NodeKind::Return, NodeKind::Throw, NodeKind::Assert]);
    assert!(containment_violations(&ast, root).is_empty());
}

#[test]
fn do_while_keeps_statement_before_condition() {
    // do ; while (x);
    let mut b = HostTreeBuilder::new();
    let skip = b.add_at(HostNode::Skip, 3);
    let x = b.ident("x", 12);
    let cond = b.add(HostNode::Parens { expr: x }, 11..14);
    let do_loop = b.add(HostNode::DoLoop { body: skip, cond }, 0..15);
    let (ast, root) = convert(b, do_loop);

    let expected = "\
DoWhile 0..15 {parens=11..14}
  statement: EmptyStatement 3..4
  condition: VariableReference 12..13
    identifier: Identifier \"x\" 12..13
";
    assert_eq!(dump(&ast, root), expected);
}
