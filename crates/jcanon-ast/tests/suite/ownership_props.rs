use jcanon_ast::{Ast, ChildValue, Field, NodeId, NodeKind, Owner};
use proptest::prelude::*;

const PROPTEST_CASES: u32 = 256;
const BLOCKS: usize = 4;
const STATEMENTS: usize = 6;

#[derive(Clone, Debug)]
enum Op {
    Push { block: usize, stmt: usize },
    Insert { block: usize, index: usize, stmt: usize },
    Detach { stmt: usize },
    Wrap { stmt: usize },
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..BLOCKS, 0..STATEMENTS).prop_map(|(block, stmt)| Op::Push { block, stmt }),
        2 => (0..BLOCKS, 0..8usize, 0..STATEMENTS)
            .prop_map(|(block, index, stmt)| Op::Insert { block, index, stmt }),
        1 => (0..STATEMENTS).prop_map(|stmt| Op::Detach { stmt }),
        1 => (0..STATEMENTS).prop_map(|stmt| Op::Wrap { stmt }),
    ]
}

/// Each node appears in at most one container, and its recorded owner is
/// exactly that container.
fn assert_ownership_consistent(ast: &Ast, nodes: &[NodeId]) {
    let mut seen = std::collections::HashMap::new();
    for &parent in nodes {
        for (field, value) in ast.entries(parent) {
            match value {
                ChildValue::Slot(Some(child)) => {
                    assert!(seen.insert(child, parent).is_none(), "{child:?} owned twice");
                    assert_eq!(ast.owner(child), Some(Owner::Slot { parent, field }));
                }
                ChildValue::Slot(None) => {}
                ChildValue::List(list) => {
                    for child in ast.raw_list(list).iter() {
                        assert!(seen.insert(child, parent).is_none(), "{child:?} owned twice");
                        assert_eq!(ast.owner(child), Some(Owner::List { list }));
                    }
                }
            }
        }
    }
    for &node in nodes {
        if !seen.contains_key(&node) {
            assert_eq!(ast.owner(node), None);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: PROPTEST_CASES, .. ProptestConfig::default() })]

    #[test]
    fn moves_keep_single_ownership(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut ast = Ast::new();
        let blocks: Vec<_> = (0..BLOCKS).map(|_| ast.alloc(NodeKind::Block)).collect();
        let stmts: Vec<_> = (0..STATEMENTS).map(|_| ast.alloc(NodeKind::EmptyStatement)).collect();
        let labelled = ast.alloc(NodeKind::LabelledStatement);

        for op in ops {
            match op {
                Op::Push { block, stmt } => {
                    ast.push(blocks[block], Field::Contents, stmts[stmt]).unwrap();
                }
                Op::Insert { block, index, stmt } => {
                    let list = ast.list_id(blocks[block], Field::Contents).unwrap();
                    ast.raw_list_mut(list).insert(index, stmts[stmt]).unwrap();
                }
                Op::Detach { stmt } => {
                    ast.detach(stmts[stmt]);
                }
                Op::Wrap { stmt } => {
                    ast.set_child(labelled, Field::Statement, Some(stmts[stmt])).unwrap();
                }
            }
        }

        let mut all = blocks.clone();
        all.extend(&stmts);
        all.push(labelled);
        assert_ownership_consistent(&ast, &all);
    }
}
