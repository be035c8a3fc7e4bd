use jcanon_ast::{containment_violations, Field, NodeKind, Position};
use jcanon_host::{Flags, HostId, HostLiteral, HostNode, HostTreeBuilder, PrimitiveTag};

use super::support::{convert, no_modifiers, var_def};

fn constant(
    b: &mut HostTreeBuilder,
    name: &str,
    start: u32,
    args: Vec<HostId>,
    body: Option<HostId>,
    end: u32,
) -> HostId {
    let mods = b.modifiers(Flags::ENUM_CONSTANT, vec![], None);
    let enum_type = b.add_unplaced(HostNode::Ident { name: "E".into() });
    let init = b.add_unplaced(HostNode::NewClass {
        encl: None,
        type_args: vec![],
        clazz: enum_type,
        args,
        def: body,
    });
    var_def(b, mods, name, enum_type, Some(init), start, start, end)
}

#[test]
fn constants_leave_the_member_list() {
    // enum E { A(1), B { }; int x; }
    let mut b = HostTreeBuilder::new();
    let one = b.literal(HostLiteral::Int(1), 11..12);
    let a = constant(&mut b, "A", 9, vec![one], None, 13);
    let body_mods = no_modifiers(&mut b);
    let anonymous = b.add(
        HostNode::ClassDef {
            modifiers: body_mods,
            name: "".into(),
            type_params: vec![],
            extending: None,
            implementing: vec![],
            defs: vec![],
        },
        17..20,
    );
    let c = constant(&mut b, "B", 15, vec![], Some(anonymous), 20);
    let field_mods = no_modifiers(&mut b);
    let int = b.primitive(PrimitiveTag::Int, 22);
    let x = var_def(&mut b, field_mods, "x", int, None, 22, 26, 27);
    let enum_mods = b.modifiers(Flags::ENUM, vec![], None);
    let decl = b.add_with_pos(
        HostNode::ClassDef {
            modifiers: enum_mods,
            name: "E".into(),
            type_params: vec![],
            extending: None,
            implementing: vec![],
            defs: vec![a, c, x],
        },
        0,
        5,
        Some(30),
    );
    let (ast, root) = convert(b, decl);

    assert_eq!(ast.kind(root), &NodeKind::EnumDeclaration);
    let body = ast.child(root, Field::Body).unwrap();
    assert_eq!(ast.kind(body), &NodeKind::EnumTypeBody);

    let constants = ast.items(body, Field::Constants);
    assert_eq!(constants.len(), 2);
    assert_eq!(ast.position(constants[0]), Position::new(9, 13));
    let name = ast.child(constants[0], Field::Name).unwrap();
    assert_eq!(ast.kind(name), &NodeKind::identifier("A"));
    assert_eq!(ast.items(constants[0], Field::Arguments).len(), 1);
    assert!(ast.child(constants[0], Field::Body).is_none());

    let anonymous_body = ast.child(constants[1], Field::Body).unwrap();
    assert_eq!(ast.kind(anonymous_body), &NodeKind::NormalTypeBody);
    assert_eq!(ast.position(anonymous_body), Position::new(17, 20));
    assert_eq!(ast.parent(anonymous_body), Some(constants[1]));

    let members = ast.items(body, Field::Members);
    assert_eq!(members.len(), 1);
    assert_eq!(ast.kind(members[0]), &NodeKind::VariableDeclaration);
    assert!(containment_violations(&ast, root).is_empty());
}

#[test]
fn public_static_final_field_is_not_a_constant() {
    // enum E { ; public static final E F = null; }
    let mut b = HostTreeBuilder::new();
    let mods = b.modifiers(Flags::PUBLIC | Flags::STATIC | Flags::FINAL, vec![], None);
    let ty = b.ident("E", 30);
    let null = b.literal(HostLiteral::Null, 36..40);
    let field = var_def(&mut b, mods, "F", ty, Some(null), 11, 32, 40);
    let enum_mods = b.modifiers(Flags::ENUM, vec![], None);
    let decl = b.add_with_pos(
        HostNode::ClassDef {
            modifiers: enum_mods,
            name: "E".into(),
            type_params: vec![],
            extending: None,
            implementing: vec![],
            defs: vec![field],
        },
        0,
        5,
        Some(43),
    );
    let (ast, root) = convert(b, decl);

    let body = ast.child(root, Field::Body).unwrap();
    assert!(ast.items(body, Field::Constants).is_empty());
    assert_eq!(ast.items(body, Field::Members).len(), 1);
    assert!(containment_violations(&ast, root).is_empty());
}
