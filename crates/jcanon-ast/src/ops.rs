//! Operator, modifier keyword, and wildcard vocabularies of the canonical tree.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    Assign,
    PlusAssign,
    MinusAssign,
    MultiplyAssign,
    DivideAssign,
    RemainderAssign,
    AndAssign,
    XorAssign,
    OrAssign,
    ShiftLeftAssign,
    ShiftRightAssign,
    BitwiseShiftRightAssign,
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equals,
    NotEquals,
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
    ShiftLeft,
    ShiftRight,
    BitwiseShiftRight,
    Plus,
    Minus,
    Multiply,
    Divide,
    Remainder,
}

impl BinaryOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Assign => "=",
            BinaryOperator::PlusAssign => "+=",
            BinaryOperator::MinusAssign => "-=",
            BinaryOperator::MultiplyAssign => "*=",
            BinaryOperator::DivideAssign => "/=",
            BinaryOperator::RemainderAssign => "%=",
            BinaryOperator::AndAssign => "&=",
            BinaryOperator::XorAssign => "^=",
            BinaryOperator::OrAssign => "|=",
            BinaryOperator::ShiftLeftAssign => "<<=",
            BinaryOperator::ShiftRightAssign => ">>=",
            BinaryOperator::BitwiseShiftRightAssign => ">>>=",
            BinaryOperator::LogicalOr => "||",
            BinaryOperator::LogicalAnd => "&&",
            BinaryOperator::BitwiseOr => "|",
            BinaryOperator::BitwiseXor => "^",
            BinaryOperator::BitwiseAnd => "&",
            BinaryOperator::Equals => "==",
            BinaryOperator::NotEquals => "!=",
            BinaryOperator::Greater => ">",
            BinaryOperator::GreaterOrEqual => ">=",
            BinaryOperator::Less => "<",
            BinaryOperator::LessOrEqual => "<=",
            BinaryOperator::ShiftLeft => "<<",
            BinaryOperator::ShiftRight => ">>",
            BinaryOperator::BitwiseShiftRight => ">>>",
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Remainder => "%",
        }
    }

    pub fn is_assignment(self) -> bool {
        self.symbol().ends_with('=')
            && !matches!(
                self,
                BinaryOperator::Equals
                    | BinaryOperator::NotEquals
                    | BinaryOperator::GreaterOrEqual
                    | BinaryOperator::LessOrEqual
            )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOperator {
    BinaryNot,
    LogicalNot,
    UnaryPlus,
    UnaryMinus,
    PrefixIncrement,
    PrefixDecrement,
    PostfixIncrement,
    PostfixDecrement,
}

impl UnaryOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOperator::BinaryNot => "~",
            UnaryOperator::LogicalNot => "!",
            UnaryOperator::UnaryPlus => "+",
            UnaryOperator::UnaryMinus => "-",
            UnaryOperator::PrefixIncrement | UnaryOperator::PostfixIncrement => "++",
            UnaryOperator::PrefixDecrement | UnaryOperator::PostfixDecrement => "--",
        }
    }

    pub fn is_postfix(self) -> bool {
        matches!(
            self,
            UnaryOperator::PostfixIncrement | UnaryOperator::PostfixDecrement
        )
    }
}

/// A modifier keyword. Declaration order is the canonical emission order
/// used when expanding a modifier bit set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Keyword {
    Public,
    Private,
    Protected,
    Static,
    Final,
    Synchronized,
    Volatile,
    Transient,
    Native,
    Abstract,
    Strictfp,
}

impl Keyword {
    pub const ALL: [Keyword; 11] = [
        Keyword::Public,
        Keyword::Private,
        Keyword::Protected,
        Keyword::Static,
        Keyword::Final,
        Keyword::Synchronized,
        Keyword::Volatile,
        Keyword::Transient,
        Keyword::Native,
        Keyword::Abstract,
        Keyword::Strictfp,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Public => "public",
            Keyword::Private => "private",
            Keyword::Protected => "protected",
            Keyword::Static => "static",
            Keyword::Final => "final",
            Keyword::Synchronized => "synchronized",
            Keyword::Volatile => "volatile",
            Keyword::Transient => "transient",
            Keyword::Native => "native",
            Keyword::Abstract => "abstract",
            Keyword::Strictfp => "strictfp",
        }
    }

    pub fn from_text(text: &str) -> Option<Keyword> {
        Keyword::ALL.into_iter().find(|kw| kw.as_str() == text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WildcardKind {
    #[default]
    None,
    Unbound,
    Extends,
    Super,
}
