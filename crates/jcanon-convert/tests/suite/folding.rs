use jcanon_ast::{containment_violations, dump, tags, Field, NodeKind, Position};
use jcanon_convert::{ConversionContext, EngineOptions};
use jcanon_host::{Flags, HostId, HostNode, HostTreeBuilder, PrimitiveTag};
use pretty_assertions::assert_eq;

use super::support::{array_of, block, convert, convert_in, no_modifiers, var_def};

/// `int[] x, y[];` with `x` and `y` sharing one modifiers node.
fn shared_bracket_pair(b: &mut HostTreeBuilder) -> (HostId, HostId) {
    let mods = no_modifiers(b);
    let int = b.primitive(PrimitiveTag::Int, 0);
    let int_array = array_of(b, int, 0, 3, 5);
    let y_type = array_of(b, int_array, 0, 10, 12);
    let x = var_def(b, mods, "x", int_array, None, 0, 6, 7);
    let y = var_def(b, mods, "y", y_type, None, 0, 9, 12);
    (x, y)
}

#[test]
fn shared_brackets_stay_on_the_base_type() {
    let mut b = HostTreeBuilder::new();
    let (x, y) = shared_bracket_pair(&mut b);
    let body = block(&mut b, vec![x, y], 0..13);
    let (ast, root) = convert(b, body);

    let expected = "\
Block 0..13
  contents[0]: VariableDeclaration 0..12
    definition: VariableDefinition 0..12
      modifiers: Modifiers Unplaced
      typeReference: TypeReference dims=1 0..5
        parts[0]: TypeReferencePart 0..3
          identifier: Identifier \"int\" 0..3
      variables[0]: VariableDefinitionEntry 6..7
        name: Identifier \"x\" 6..7
      variables[1]: VariableDefinitionEntry dims=1 9..12 {dimension.0=10..12}
        name: Identifier \"y\" 9..10
";
    assert_eq!(dump(&ast, root), expected);
    assert!(containment_violations(&ast, root).is_empty());
}

#[test]
fn distinct_modifier_nodes_never_fold() {
    // int a; int b;
    let mut b = HostTreeBuilder::new();
    let first_mods = no_modifiers(&mut b);
    let second_mods = no_modifiers(&mut b);
    let int_a = b.primitive(PrimitiveTag::Int, 0);
    let int_b = b.primitive(PrimitiveTag::Int, 7);
    let a = var_def(&mut b, first_mods, "a", int_a, None, 0, 4, 5);
    let c = var_def(&mut b, second_mods, "b", int_b, None, 7, 11, 12);
    let body = block(&mut b, vec![a, c], 0..14);
    let (ast, root) = convert(b, body);

    let contents = ast.items(root, Field::Contents);
    assert_eq!(contents.len(), 2);
    for &decl in contents {
        assert_eq!(ast.kind(decl), &NodeKind::VariableDeclaration);
        let def = ast.child(decl, Field::Definition).unwrap();
        assert_eq!(ast.items(def, Field::Variables).len(), 1);
    }
}

#[test]
fn split_brackets_on_the_first_declarator() {
    // int[] a[][], b[];
    let mut b = HostTreeBuilder::new();
    let mods = no_modifiers(&mut b);
    let int = b.primitive(PrimitiveTag::Int, 0);
    let shared = array_of(&mut b, int, 0, 3, 5);
    let a_inner = array_of(&mut b, shared, 0, 9, 11);
    let a_outer = array_of(&mut b, a_inner, 0, 7, 11);
    let b_type = array_of(&mut b, shared, 0, 14, 16);
    let a = var_def(&mut b, mods, "a", a_outer, None, 0, 6, 11);
    let c = var_def(&mut b, mods, "b", b_type, None, 0, 13, 16);
    let body = block(&mut b, vec![a, c], 0..17);
    let (ast, root) = convert(b, body);

    let decl = ast.items(root, Field::Contents)[0];
    let def = ast.child(decl, Field::Definition).unwrap();
    let ty = ast.child(def, Field::TypeReference).unwrap();
    assert_eq!(
        ast.kind(ty),
        &NodeKind::TypeReference {
            wildcard: Default::default(),
            array_dimensions: 1
        }
    );

    let entries = ast.items(def, Field::Variables);
    assert_eq!(entries.len(), 2);
    assert_eq!(
        ast.kind(entries[0]),
        &NodeKind::VariableDefinitionEntry {
            array_dimensions: 2
        }
    );
    assert_eq!(ast.tag(entries[0], &tags::dimension(0)), Some(Position::new(7, 9)));
    assert_eq!(ast.tag(entries[0], &tags::dimension(1)), Some(Position::new(9, 11)));
    assert_eq!(
        ast.kind(entries[1]),
        &NodeKind::VariableDefinitionEntry {
            array_dimensions: 1
        }
    );
    assert_eq!(ast.tag(entries[1], &tags::dimension(0)), Some(Position::new(14, 16)));
    assert_eq!(ast.position(def), Position::new(0, 16));
    assert!(containment_violations(&ast, root).is_empty());
}

#[test]
fn varargs_parameter_peels_the_ellipsis() {
    // String... args
    let mut b = HostTreeBuilder::new();
    let mods = b.modifiers(Flags::VARARGS, vec![], None);
    let string = b.ident("String", 0);
    let ty = array_of(&mut b, string, 0, 6, 9);
    let param = var_def(&mut b, mods, "args", ty, None, 0, 10, 14);
    let ctx = ConversionContext::new().with_var_def_is_definition(true);
    let (ast, root) = convert_in(b, param, &ctx, &EngineOptions::default());

    assert_eq!(ast.kind(root), &NodeKind::VariableDefinition { varargs: true });
    assert_eq!(ast.tag(root, tags::VARARGS), Some(Position::new(6, 9)));
    let ty = ast.child(root, Field::TypeReference).unwrap();
    assert_eq!(ast.kind(ty), &NodeKind::type_reference());
    let entry = ast.items(root, Field::Variables)[0];
    assert_eq!(
        ast.kind(entry),
        &NodeKind::VariableDefinitionEntry {
            array_dimensions: 0
        }
    );
    assert_eq!(ast.position(entry), Position::new(10, 14));
    assert!(containment_violations(&ast, root).is_empty());
}

#[test]
fn folding_can_be_switched_off() {
    let options = EngineOptions {
        fold_declarators: false,
        ..EngineOptions::default()
    };
    let contexts = [
        (ConversionContext::new(), options),
        (
            ConversionContext::new().with_folding_disabled(true),
            EngineOptions::default(),
        ),
    ];
    for (ctx, options) in contexts {
        let mut b = HostTreeBuilder::new();
        let (x, y) = shared_bracket_pair(&mut b);
        let body = block(&mut b, vec![x, y], 0..13);
        let (ast, root) = convert_in(b, body, &ctx, &options);

        let contents = ast.items(root, Field::Contents);
        assert_eq!(contents.len(), 2);
        let y_def = ast.child(contents[1], Field::Definition).unwrap();
        let y_type = ast.child(y_def, Field::TypeReference).unwrap();
        assert_eq!(
            ast.kind(y_type),
            &NodeKind::TypeReference {
                wildcard: Default::default(),
                array_dimensions: 1
            }
        );
        let y_entry = ast.items(y_def, Field::Variables)[0];
        assert_eq!(
            ast.kind(y_entry),
            &NodeKind::VariableDefinitionEntry {
                array_dimensions: 1
            }
        );
    }
}

#[test]
fn member_fields_fold_inside_a_type_body() {
    // class C { int p, q; }
    let mut b = HostTreeBuilder::new();
    let mods = no_modifiers(&mut b);
    let int = b.primitive(PrimitiveTag::Int, 10);
    let p = var_def(&mut b, mods, "p", int, None, 10, 14, 15);
    let q = var_def(&mut b, mods, "q", int, None, 10, 17, 18);
    let class_mods = no_modifiers(&mut b);
    let class = b.add_with_pos(
        HostNode::ClassDef {
            modifiers: class_mods,
            name: "C".into(),
            type_params: vec![],
            extending: None,
            implementing: vec![],
            defs: vec![p, q],
        },
        0,
        6,
        Some(21),
    );
    let (ast, root) = convert(b, class);

    let body = ast.child(root, Field::Body).unwrap();
    let members = ast.items(body, Field::Members);
    assert_eq!(members.len(), 1);
    let def = ast.child(members[0], Field::Definition).unwrap();
    assert_eq!(ast.items(def, Field::Variables).len(), 2);
    assert!(containment_violations(&ast, root).is_empty());
}
