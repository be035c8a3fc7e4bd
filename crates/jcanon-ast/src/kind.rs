//! Node kinds, their payloads, and the child layout ("shape") of each kind.
//!
//! A node's kind only carries scalar payload (names, operators, literal
//! values, dimension counts). Children live in the [`crate::Ast`] arena, in
//! the order described by [`NodeKind::shape`], which is source order.

use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::ops::{BinaryOperator, Keyword, UnaryOperator, WildcardKind};

/// Name of a child slot or child list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    PackageDeclaration,
    ImportDeclarations,
    TypeDeclarations,
    Annotations,
    Parts,
    Keywords,
    AnnotationTypeReference,
    Elements,
    Name,
    Value,
    Values,
    Modifiers,
    TypeVariables,
    Extending,
    Implementing,
    Body,
    Constants,
    Members,
    Arguments,
    ReturnTypeReference,
    Parameters,
    ThrownTypeReferences,
    TypeName,
    DefaultValue,
    Definition,
    TypeReference,
    Variables,
    Initializer,
    Identifier,
    TypeArguments,
    Contents,
    Expression,
    Label,
    Statement,
    Condition,
    ElseStatement,
    Inits,
    Updates,
    Variable,
    Iterable,
    Throwable,
    Assertion,
    Message,
    Lock,
    Catches,
    Finally,
    ExceptionDeclaration,
    ConstructorTypeArguments,
    Qualifier,
    Left,
    Right,
    Operand,
    IfTrue,
    IfFalse,
    ObjectReference,
    AnonymousClassBody,
    MethodTypeArguments,
    IndexExpression,
    ComponentTypeReference,
    Dimensions,
    Dimension,
    Expressions,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::PackageDeclaration => "packageDeclaration",
            Field::ImportDeclarations => "importDeclarations",
            Field::TypeDeclarations => "typeDeclarations",
            Field::Annotations => "annotations",
            Field::Parts => "parts",
            Field::Keywords => "keywords",
            Field::AnnotationTypeReference => "annotationTypeReference",
            Field::Elements => "elements",
            Field::Name => "name",
            Field::Value => "value",
            Field::Values => "values",
            Field::Modifiers => "modifiers",
            Field::TypeVariables => "typeVariables",
            Field::Extending => "extending",
            Field::Implementing => "implementing",
            Field::Body => "body",
            Field::Constants => "constants",
            Field::Members => "members",
            Field::Arguments => "arguments",
            Field::ReturnTypeReference => "returnTypeReference",
            Field::Parameters => "parameters",
            Field::ThrownTypeReferences => "thrownTypeReferences",
            Field::TypeName => "typeName",
            Field::DefaultValue => "defaultValue",
            Field::Definition => "definition",
            Field::TypeReference => "typeReference",
            Field::Variables => "variables",
            Field::Initializer => "initializer",
            Field::Identifier => "identifier",
            Field::TypeArguments => "typeArguments",
            Field::Contents => "contents",
            Field::Expression => "expression",
            Field::Label => "label",
            Field::Statement => "statement",
            Field::Condition => "condition",
            Field::ElseStatement => "elseStatement",
            Field::Inits => "inits",
            Field::Updates => "updates",
            Field::Variable => "variable",
            Field::Iterable => "iterable",
            Field::Throwable => "throwable",
            Field::Assertion => "assertion",
            Field::Message => "message",
            Field::Lock => "lock",
            Field::Catches => "catches",
            Field::Finally => "finally",
            Field::ExceptionDeclaration => "exceptionDeclaration",
            Field::ConstructorTypeArguments => "constructorTypeArguments",
            Field::Qualifier => "qualifier",
            Field::Left => "left",
            Field::Right => "right",
            Field::Operand => "operand",
            Field::IfTrue => "ifTrue",
            Field::IfFalse => "ifFalse",
            Field::ObjectReference => "objectReference",
            Field::AnonymousClassBody => "anonymousClassBody",
            Field::MethodTypeArguments => "methodTypeArguments",
            Field::IndexExpression => "indexExpression",
            Field::ComponentTypeReference => "componentTypeReference",
            Field::Dimensions => "dimensions",
            Field::Dimension => "dimension",
            Field::Expressions => "expressions",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a child list accepts through its strict view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Any,
    Statement,
    Expression,
    TypeMember,
    TypeDeclaration,
    /// An expression, an annotation, or a brace-delimited value array.
    AnnotationValue,
    /// An expression or a variable definition (for-loop header).
    ForInit,
    Identifier,
    KeywordModifier,
    Annotation,
    AnnotationElement,
    ImportDeclaration,
    TypeReference,
    TypeReferencePart,
    TypeVariable,
    VariableDefinition,
    VariableDefinitionEntry,
    ArrayDimension,
    EnumConstant,
    Catch,
}

impl ElementKind {
    pub fn accepts(self, kind: &NodeKind) -> bool {
        match self {
            ElementKind::Any => true,
            ElementKind::Statement => kind.is_statement(),
            ElementKind::Expression => kind.is_expression(),
            ElementKind::TypeMember => kind.is_type_member(),
            ElementKind::TypeDeclaration => kind.is_type_declaration(),
            ElementKind::AnnotationValue => {
                kind.is_expression()
                    || matches!(kind, NodeKind::Annotation | NodeKind::AnnotationValueArray)
            }
            ElementKind::ForInit => {
                kind.is_expression() || matches!(kind, NodeKind::VariableDefinition { .. })
            }
            ElementKind::Identifier => matches!(kind, NodeKind::Identifier { .. }),
            ElementKind::KeywordModifier => matches!(kind, NodeKind::KeywordModifier { .. }),
            ElementKind::Annotation => matches!(kind, NodeKind::Annotation),
            ElementKind::AnnotationElement => matches!(kind, NodeKind::AnnotationElement),
            ElementKind::ImportDeclaration => matches!(kind, NodeKind::ImportDeclaration { .. }),
            ElementKind::TypeReference => matches!(kind, NodeKind::TypeReference { .. }),
            ElementKind::TypeReferencePart => matches!(kind, NodeKind::TypeReferencePart),
            ElementKind::TypeVariable => matches!(kind, NodeKind::TypeVariable),
            ElementKind::VariableDefinition => matches!(kind, NodeKind::VariableDefinition { .. }),
            ElementKind::VariableDefinitionEntry => {
                matches!(kind, NodeKind::VariableDefinitionEntry { .. })
            }
            ElementKind::ArrayDimension => matches!(kind, NodeKind::ArrayDimension),
            ElementKind::EnumConstant => matches!(kind, NodeKind::EnumConstant),
            ElementKind::Catch => matches!(kind, NodeKind::Catch),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// One entry of a node kind's child layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Child {
    Slot(Field),
    List(Field, ElementKind),
}

impl Child {
    pub fn field(self) -> Field {
        match self {
            Child::Slot(field) | Child::List(field, _) => field,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntegralValue {
    Int(i32),
    Long(i64),
}

impl IntegralValue {
    pub fn is_negative(self) -> bool {
        match self {
            IntegralValue::Int(v) => v < 0,
            IntegralValue::Long(v) => v < 0,
        }
    }

    /// The minimum representable value of the literal's width, which has no
    /// positive counterpart.
    pub fn is_min_value(self) -> bool {
        match self {
            IntegralValue::Int(v) => v == i32::MIN,
            IntegralValue::Long(v) => v == i64::MIN,
        }
    }
}

impl fmt::Display for IntegralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegralValue::Int(v) => write!(f, "{v}"),
            IntegralValue::Long(v) => write!(f, "{v}L"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FloatingValue {
    Float(f32),
    Double(f64),
}

impl fmt::Display for FloatingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloatingValue::Float(v) => write!(f, "{v:?}F"),
            FloatingValue::Double(v) => write!(f, "{v:?}D"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    CompilationUnit,
    PackageDeclaration,
    ImportDeclaration { static_import: bool, star_import: bool },
    Identifier { value: SmolStr },
    Modifiers,
    KeywordModifier { keyword: Keyword },
    Annotation,
    AnnotationElement,
    AnnotationValueArray,

    ClassDeclaration,
    InterfaceDeclaration,
    AnnotationDeclaration,
    EnumDeclaration,
    NormalTypeBody,
    EnumTypeBody,
    EnumConstant,
    MethodDeclaration,
    ConstructorDeclaration,
    AnnotationMethodDeclaration,
    InstanceInitializer,
    StaticInitializer,
    EmptyDeclaration,

    VariableDeclaration,
    VariableDefinition { varargs: bool },
    VariableDefinitionEntry { array_dimensions: u32 },
    TypeReference { wildcard: WildcardKind, array_dimensions: u32 },
    TypeReferencePart,
    TypeVariable,

    Block,
    EmptyStatement,
    ExpressionStatement,
    LabelledStatement,
    If,
    For,
    ForEach,
    While,
    DoWhile,
    Switch,
    Case,
    Default,
    Break,
    Continue,
    Return,
    Throw,
    Assert,
    Synchronized,
    Try,
    Catch,
    AlternateConstructorInvocation,
    SuperConstructorInvocation,

    BinaryExpression { operator: BinaryOperator },
    UnaryExpression { operator: UnaryOperator },
    InlineIfExpression,
    Cast,
    InstanceOf,
    ConstructorInvocation,
    MethodInvocation,
    Select,
    VariableReference,
    ArrayAccess,
    ArrayCreation,
    ArrayDimension,
    ArrayInitializer,
    This,
    Super,
    ClassLiteral,
    IntegralLiteral { value: IntegralValue },
    FloatingPointLiteral { value: FloatingValue },
    BooleanLiteral { value: bool },
    CharLiteral { value: char },
    StringLiteral { value: String },
    NullLiteral,
}

impl NodeKind {
    pub fn identifier(value: impl Into<SmolStr>) -> Self {
        NodeKind::Identifier {
            value: value.into(),
        }
    }

    pub fn type_reference() -> Self {
        NodeKind::TypeReference {
            wildcard: WildcardKind::None,
            array_dimensions: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::CompilationUnit => "CompilationUnit",
            NodeKind::PackageDeclaration => "PackageDeclaration",
            NodeKind::ImportDeclaration { .. } => "ImportDeclaration",
            NodeKind::Identifier { .. } => "Identifier",
            NodeKind::Modifiers => "Modifiers",
            NodeKind::KeywordModifier { .. } => "KeywordModifier",
            NodeKind::Annotation => "Annotation",
            NodeKind::AnnotationElement => "AnnotationElement",
            NodeKind::AnnotationValueArray => "AnnotationValueArray",
            NodeKind::ClassDeclaration => "ClassDeclaration",
            NodeKind::InterfaceDeclaration => "InterfaceDeclaration",
            NodeKind::AnnotationDeclaration => "AnnotationDeclaration",
            NodeKind::EnumDeclaration => "EnumDeclaration",
            NodeKind::NormalTypeBody => "NormalTypeBody",
            NodeKind::EnumTypeBody => "EnumTypeBody",
            NodeKind::EnumConstant => "EnumConstant",
            NodeKind::MethodDeclaration => "MethodDeclaration",
            NodeKind::ConstructorDeclaration => "ConstructorDeclaration",
            NodeKind::AnnotationMethodDeclaration => "AnnotationMethodDeclaration",
            NodeKind::InstanceInitializer => "InstanceInitializer",
            NodeKind::StaticInitializer => "StaticInitializer",
            NodeKind::EmptyDeclaration => "EmptyDeclaration",
            NodeKind::VariableDeclaration => "VariableDeclaration",
            NodeKind::VariableDefinition { .. } => "VariableDefinition",
            NodeKind::VariableDefinitionEntry { .. } => "VariableDefinitionEntry",
            NodeKind::TypeReference { .. } => "TypeReference",
            NodeKind::TypeReferencePart => "TypeReferencePart",
            NodeKind::TypeVariable => "TypeVariable",
            NodeKind::Block => "Block",
            NodeKind::EmptyStatement => "EmptyStatement",
            NodeKind::ExpressionStatement => "ExpressionStatement",
            NodeKind::LabelledStatement => "LabelledStatement",
            NodeKind::If => "If",
            NodeKind::For => "For",
            NodeKind::ForEach => "ForEach",
            NodeKind::While => "While",
            NodeKind::DoWhile => "DoWhile",
            NodeKind::Switch => "Switch",
            NodeKind::Case => "Case",
            NodeKind::Default => "Default",
            NodeKind::Break => "Break",
            NodeKind::Continue => "Continue",
            NodeKind::Return => "Return",
            NodeKind::Throw => "Throw",
            NodeKind::Assert => "Assert",
            NodeKind::Synchronized => "Synchronized",
            NodeKind::Try => "Try",
            NodeKind::Catch => "Catch",
            NodeKind::AlternateConstructorInvocation => "AlternateConstructorInvocation",
            NodeKind::SuperConstructorInvocation => "SuperConstructorInvocation",
            NodeKind::BinaryExpression { .. } => "BinaryExpression",
            NodeKind::UnaryExpression { .. } => "UnaryExpression",
            NodeKind::InlineIfExpression => "InlineIfExpression",
            NodeKind::Cast => "Cast",
            NodeKind::InstanceOf => "InstanceOf",
            NodeKind::ConstructorInvocation => "ConstructorInvocation",
            NodeKind::MethodInvocation => "MethodInvocation",
            NodeKind::Select => "Select",
            NodeKind::VariableReference => "VariableReference",
            NodeKind::ArrayAccess => "ArrayAccess",
            NodeKind::ArrayCreation => "ArrayCreation",
            NodeKind::ArrayDimension => "ArrayDimension",
            NodeKind::ArrayInitializer => "ArrayInitializer",
            NodeKind::This => "This",
            NodeKind::Super => "Super",
            NodeKind::ClassLiteral => "ClassLiteral",
            NodeKind::IntegralLiteral { .. } => "IntegralLiteral",
            NodeKind::FloatingPointLiteral { .. } => "FloatingPointLiteral",
            NodeKind::BooleanLiteral { .. } => "BooleanLiteral",
            NodeKind::CharLiteral { .. } => "CharLiteral",
            NodeKind::StringLiteral { .. } => "StringLiteral",
            NodeKind::NullLiteral => "NullLiteral",
        }
    }

    /// Child layout in source order.
    pub fn shape(&self) -> &'static [Child] {
        use Child::{List, Slot};
        use ElementKind as E;

        match self {
            NodeKind::CompilationUnit => &[
                Slot(Field::PackageDeclaration),
                List(Field::ImportDeclarations, E::ImportDeclaration),
                List(Field::TypeDeclarations, E::TypeDeclaration),
            ],
            NodeKind::PackageDeclaration => &[
                List(Field::Annotations, E::Annotation),
                List(Field::Parts, E::Identifier),
            ],
            NodeKind::ImportDeclaration { .. } => &[List(Field::Parts, E::Identifier)],
            NodeKind::Modifiers => &[
                List(Field::Annotations, E::Annotation),
                List(Field::Keywords, E::KeywordModifier),
            ],
            NodeKind::Annotation => &[
                Slot(Field::AnnotationTypeReference),
                List(Field::Elements, E::AnnotationElement),
            ],
            NodeKind::AnnotationElement => &[Slot(Field::Name), Slot(Field::Value)],
            NodeKind::AnnotationValueArray => &[List(Field::Values, E::AnnotationValue)],
            NodeKind::ClassDeclaration => &[
                Slot(Field::Modifiers),
                Slot(Field::Name),
                List(Field::TypeVariables, E::TypeVariable),
                Slot(Field::Extending),
                List(Field::Implementing, E::TypeReference),
                Slot(Field::Body),
            ],
            NodeKind::InterfaceDeclaration => &[
                Slot(Field::Modifiers),
                Slot(Field::Name),
                List(Field::TypeVariables, E::TypeVariable),
                List(Field::Extending, E::TypeReference),
                Slot(Field::Body),
            ],
            NodeKind::AnnotationDeclaration => &[
                Slot(Field::Modifiers),
                Slot(Field::Name),
                Slot(Field::Body),
            ],
            NodeKind::EnumDeclaration => &[
                Slot(Field::Modifiers),
                Slot(Field::Name),
                List(Field::Implementing, E::TypeReference),
                Slot(Field::Body),
            ],
            NodeKind::NormalTypeBody => &[List(Field::Members, E::TypeMember)],
            NodeKind::EnumTypeBody => &[
                List(Field::Constants, E::EnumConstant),
                List(Field::Members, E::TypeMember),
            ],
            NodeKind::EnumConstant => &[
                List(Field::Annotations, E::Annotation),
                Slot(Field::Name),
                List(Field::Arguments, E::Expression),
                Slot(Field::Body),
            ],
            NodeKind::MethodDeclaration => &[
                Slot(Field::Modifiers),
                List(Field::TypeVariables, E::TypeVariable),
                Slot(Field::ReturnTypeReference),
                Slot(Field::Name),
                List(Field::Parameters, E::VariableDefinition),
                List(Field::ThrownTypeReferences, E::TypeReference),
                Slot(Field::Body),
            ],
            NodeKind::ConstructorDeclaration => &[
                Slot(Field::Modifiers),
                List(Field::TypeVariables, E::TypeVariable),
                Slot(Field::TypeName),
                List(Field::Parameters, E::VariableDefinition),
                List(Field::ThrownTypeReferences, E::TypeReference),
                Slot(Field::Body),
            ],
            NodeKind::AnnotationMethodDeclaration => &[
                Slot(Field::Modifiers),
                Slot(Field::ReturnTypeReference),
                Slot(Field::Name),
                Slot(Field::DefaultValue),
            ],
            NodeKind::InstanceInitializer | NodeKind::StaticInitializer => &[Slot(Field::Body)],
            NodeKind::VariableDeclaration => &[Slot(Field::Definition)],
            NodeKind::VariableDefinition { .. } => &[
                Slot(Field::Modifiers),
                Slot(Field::TypeReference),
                List(Field::Variables, E::VariableDefinitionEntry),
            ],
            NodeKind::VariableDefinitionEntry { .. } => {
                &[Slot(Field::Name), Slot(Field::Initializer)]
            }
            NodeKind::TypeReference { .. } => &[List(Field::Parts, E::TypeReferencePart)],
            NodeKind::TypeReferencePart => &[
                Slot(Field::Identifier),
                List(Field::TypeArguments, E::TypeReference),
            ],
            NodeKind::TypeVariable => &[
                Slot(Field::Name),
                List(Field::Extending, E::TypeReference),
            ],
            NodeKind::Block => &[List(Field::Contents, E::Statement)],
            NodeKind::ExpressionStatement => &[Slot(Field::Expression)],
            NodeKind::LabelledStatement => &[Slot(Field::Label), Slot(Field::Statement)],
            NodeKind::If => &[
                Slot(Field::Condition),
                Slot(Field::Statement),
                Slot(Field::ElseStatement),
            ],
            NodeKind::For => &[
                List(Field::Inits, E::ForInit),
                Slot(Field::Condition),
                List(Field::Updates, E::Expression),
                Slot(Field::Statement),
            ],
            NodeKind::ForEach => &[
                Slot(Field::Variable),
                Slot(Field::Iterable),
                Slot(Field::Statement),
            ],
            NodeKind::While => &[Slot(Field::Condition), Slot(Field::Statement)],
            NodeKind::DoWhile => &[Slot(Field::Statement), Slot(Field::Condition)],
            NodeKind::Switch => &[Slot(Field::Condition), Slot(Field::Body)],
            NodeKind::Case => &[Slot(Field::Condition)],
            NodeKind::Break | NodeKind::Continue => &[Slot(Field::Label)],
            NodeKind::Return => &[Slot(Field::Value)],
            NodeKind::Throw => &[Slot(Field::Throwable)],
            NodeKind::Assert => &[Slot(Field::Assertion), Slot(Field::Message)],
            NodeKind::Synchronized => &[Slot(Field::Lock), Slot(Field::Body)],
            NodeKind::Try => &[
                Slot(Field::Body),
                List(Field::Catches, E::Catch),
                Slot(Field::Finally),
            ],
            NodeKind::Catch => &[Slot(Field::ExceptionDeclaration), Slot(Field::Body)],
            NodeKind::AlternateConstructorInvocation => &[
                List(Field::ConstructorTypeArguments, E::TypeReference),
                List(Field::Arguments, E::Expression),
            ],
            NodeKind::SuperConstructorInvocation => &[
                Slot(Field::Qualifier),
                List(Field::ConstructorTypeArguments, E::TypeReference),
                List(Field::Arguments, E::Expression),
            ],
            NodeKind::BinaryExpression { .. } => &[Slot(Field::Left), Slot(Field::Right)],
            NodeKind::UnaryExpression { .. } => &[Slot(Field::Operand)],
            NodeKind::InlineIfExpression => &[
                Slot(Field::Condition),
                Slot(Field::IfTrue),
                Slot(Field::IfFalse),
            ],
            NodeKind::Cast => &[Slot(Field::TypeReference), Slot(Field::Operand)],
            NodeKind::InstanceOf => &[Slot(Field::ObjectReference), Slot(Field::TypeReference)],
            NodeKind::ConstructorInvocation => &[
                Slot(Field::Qualifier),
                List(Field::ConstructorTypeArguments, E::TypeReference),
                Slot(Field::TypeReference),
                List(Field::Arguments, E::Expression),
                Slot(Field::AnonymousClassBody),
            ],
            NodeKind::MethodInvocation => &[
                Slot(Field::Operand),
                List(Field::MethodTypeArguments, E::TypeReference),
                Slot(Field::Name),
                List(Field::Arguments, E::Expression),
            ],
            NodeKind::Select => &[Slot(Field::Operand), Slot(Field::Identifier)],
            NodeKind::VariableReference => &[Slot(Field::Identifier)],
            NodeKind::ArrayAccess => &[Slot(Field::Operand), Slot(Field::IndexExpression)],
            NodeKind::ArrayCreation => &[
                Slot(Field::ComponentTypeReference),
                List(Field::Dimensions, E::ArrayDimension),
                Slot(Field::Initializer),
            ],
            NodeKind::ArrayDimension => &[Slot(Field::Dimension)],
            NodeKind::ArrayInitializer => &[List(Field::Expressions, E::Expression)],
            NodeKind::This | NodeKind::Super => &[Slot(Field::Qualifier)],
            NodeKind::ClassLiteral => &[Slot(Field::TypeReference)],
            NodeKind::Identifier { .. }
            | NodeKind::KeywordModifier { .. }
            | NodeKind::EmptyDeclaration
            | NodeKind::EmptyStatement
            | NodeKind::Default
            | NodeKind::IntegralLiteral { .. }
            | NodeKind::FloatingPointLiteral { .. }
            | NodeKind::BooleanLiteral { .. }
            | NodeKind::CharLiteral { .. }
            | NodeKind::StringLiteral { .. }
            | NodeKind::NullLiteral => &[],
        }
    }

    pub fn is_statement(&self) -> bool {
        matches!(
            self,
            NodeKind::Block
                | NodeKind::EmptyStatement
                | NodeKind::ExpressionStatement
                | NodeKind::LabelledStatement
                | NodeKind::If
                | NodeKind::For
                | NodeKind::ForEach
                | NodeKind::While
                | NodeKind::DoWhile
                | NodeKind::Switch
                | NodeKind::Case
                | NodeKind::Default
                | NodeKind::Break
                | NodeKind::Continue
                | NodeKind::Return
                | NodeKind::Throw
                | NodeKind::Assert
                | NodeKind::Synchronized
                | NodeKind::Try
                | NodeKind::VariableDeclaration
                | NodeKind::AlternateConstructorInvocation
                | NodeKind::SuperConstructorInvocation
                | NodeKind::ClassDeclaration
        )
    }

    pub fn is_expression(&self) -> bool {
        matches!(
            self,
            NodeKind::BinaryExpression { .. }
                | NodeKind::UnaryExpression { .. }
                | NodeKind::InlineIfExpression
                | NodeKind::Cast
                | NodeKind::InstanceOf
                | NodeKind::ConstructorInvocation
                | NodeKind::MethodInvocation
                | NodeKind::Select
                | NodeKind::VariableReference
                | NodeKind::ArrayAccess
                | NodeKind::ArrayCreation
                | NodeKind::ArrayInitializer
                | NodeKind::This
                | NodeKind::Super
                | NodeKind::ClassLiteral
        ) || self.is_literal()
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            NodeKind::IntegralLiteral { .. }
                | NodeKind::FloatingPointLiteral { .. }
                | NodeKind::BooleanLiteral { .. }
                | NodeKind::CharLiteral { .. }
                | NodeKind::StringLiteral { .. }
                | NodeKind::NullLiteral
        )
    }

    pub fn is_type_declaration(&self) -> bool {
        matches!(
            self,
            NodeKind::ClassDeclaration
                | NodeKind::InterfaceDeclaration
                | NodeKind::AnnotationDeclaration
                | NodeKind::EnumDeclaration
                | NodeKind::EmptyDeclaration
        )
    }

    pub fn is_type_member(&self) -> bool {
        self.is_type_declaration()
            || matches!(
                self,
                NodeKind::MethodDeclaration
                    | NodeKind::ConstructorDeclaration
                    | NodeKind::AnnotationMethodDeclaration
                    | NodeKind::InstanceInitializer
                    | NodeKind::StaticInitializer
                    | NodeKind::VariableDeclaration
            )
    }
}
