use jcanon_ast::{dump, Field, NodeKind};
use jcanon_host::{HostId, HostLiteral, HostNode, HostTreeBuilder, PrimitiveTag};
use pretty_assertions::assert_eq;

use super::support::{array_of, convert};

fn brace_array(b: &mut HostTreeBuilder, value: i32, start: u32) -> HostId {
    let lit = b.literal(HostLiteral::Int(value), start + 1..start + 2);
    b.add(
        HostNode::NewArray {
            elem_type: None,
            dims: vec![],
            elems: Some(vec![lit]),
        },
        start..start + 3,
    )
}

#[test]
fn initializer_implies_one_more_dimension() {
    // new int[2][]{{1},{2}}
    let mut b = HostTreeBuilder::new();
    let int = b.primitive(PrimitiveTag::Int, 4);
    let two = b.literal(HostLiteral::Int(2), 8..9);
    let first = brace_array(&mut b, 1, 13);
    let second = brace_array(&mut b, 2, 17);
    let creation = b.add(
        HostNode::NewArray {
            elem_type: Some(int),
            dims: vec![two],
            elems: Some(vec![first, second]),
        },
        0..21,
    );
    let (ast, root) = convert(b, creation);

    let expected = "\
ArrayCreation 0..21
  componentTypeReference: TypeReference 4..7
    parts[0]: TypeReferencePart 4..7
      identifier: Identifier \"int\" 4..7
  dimensions[0]: ArrayDimension 8..9
    dimension: IntegralLiteral 2 8..9
  dimensions[1]: ArrayDimension Unplaced
  initializer: ArrayInitializer 0..21
    expressions[0]: ArrayInitializer 13..16
      expressions[0]: IntegralLiteral 1 14..15
    expressions[1]: ArrayInitializer 17..20
      expressions[0]: IntegralLiteral 2 18..19
";
    assert_eq!(dump(&ast, root), expected);
}

#[test]
fn bracket_pairs_of_the_element_type_become_empty_dimensions() {
    // new String[3][]
    let mut b = HostTreeBuilder::new();
    let string = b.ident("String", 4);
    let string_array = array_of(&mut b, string, 4, 13, 15);
    let three = b.literal(HostLiteral::Int(3), 11..12);
    let creation = b.add(
        HostNode::NewArray {
            elem_type: Some(string_array),
            dims: vec![three],
            elems: None,
        },
        0..15,
    );
    let (ast, root) = convert(b, creation);

    let dims = ast.items(root, Field::Dimensions);
    assert_eq!(dims.len(), 2);
    assert!(ast.child(dims[0], Field::Dimension).is_some());
    assert!(ast.child(dims[1], Field::Dimension).is_none());
    assert!(ast.child(root, Field::Initializer).is_none());
    let component = ast.child(root, Field::ComponentTypeReference).unwrap();
    assert_eq!(ast.kind(component), &NodeKind::type_reference());
}

#[test]
fn nested_empty_initializer_counts_every_bracket() {
    // new boolean[][][] {}
    let mut b = HostTreeBuilder::new();
    let boolean = b.primitive(PrimitiveTag::Boolean, 4);
    let one = array_of(&mut b, boolean, 4, 11, 13);
    let two = array_of(&mut b, one, 4, 13, 15);
    let creation = b.add(
        HostNode::NewArray {
            elem_type: Some(two),
            dims: vec![],
            elems: Some(vec![]),
        },
        0..20,
    );
    let (ast, root) = convert(b, creation);

    assert_eq!(ast.items(root, Field::Dimensions).len(), 3);
    let init = ast.child(root, Field::Initializer).unwrap();
    assert!(ast.items(init, Field::Expressions).is_empty());
}

#[test]
fn brace_only_array_is_an_initializer() {
    let mut b = HostTreeBuilder::new();
    let arr = brace_array(&mut b, 9, 0);
    let (ast, root) = convert(b, arr);
    assert_eq!(ast.kind(root), &NodeKind::ArrayInitializer);
    assert_eq!(ast.items(root, Field::Expressions).len(), 1);
}
