//! Fixed mapping between host operator tags and canonical operators.

use jcanon_ast::{BinaryOperator, UnaryOperator};
use jcanon_host::HostTag;

const BINARY: &[(HostTag, BinaryOperator)] = &[
    (HostTag::PlusAsg, BinaryOperator::PlusAssign),
    (HostTag::MinusAsg, BinaryOperator::MinusAssign),
    (HostTag::MulAsg, BinaryOperator::MultiplyAssign),
    (HostTag::DivAsg, BinaryOperator::DivideAssign),
    (HostTag::ModAsg, BinaryOperator::RemainderAssign),
    (HostTag::BitAndAsg, BinaryOperator::AndAssign),
    (HostTag::BitXorAsg, BinaryOperator::XorAssign),
    (HostTag::BitOrAsg, BinaryOperator::OrAssign),
    (HostTag::SlAsg, BinaryOperator::ShiftLeftAssign),
    (HostTag::SrAsg, BinaryOperator::ShiftRightAssign),
    (HostTag::UsrAsg, BinaryOperator::BitwiseShiftRightAssign),
    (HostTag::Or, BinaryOperator::LogicalOr),
    (HostTag::And, BinaryOperator::LogicalAnd),
    (HostTag::BitOr, BinaryOperator::BitwiseOr),
    (HostTag::BitXor, BinaryOperator::BitwiseXor),
    (HostTag::BitAnd, BinaryOperator::BitwiseAnd),
    (HostTag::Eq, BinaryOperator::Equals),
    (HostTag::Ne, BinaryOperator::NotEquals),
    (HostTag::Gt, BinaryOperator::Greater),
    (HostTag::Ge, BinaryOperator::GreaterOrEqual),
    (HostTag::Lt, BinaryOperator::Less),
    (HostTag::Le, BinaryOperator::LessOrEqual),
    (HostTag::Sl, BinaryOperator::ShiftLeft),
    (HostTag::Sr, BinaryOperator::ShiftRight),
    (HostTag::Usr, BinaryOperator::BitwiseShiftRight),
    (HostTag::Plus, BinaryOperator::Plus),
    (HostTag::Minus, BinaryOperator::Minus),
    (HostTag::Mul, BinaryOperator::Multiply),
    (HostTag::Div, BinaryOperator::Divide),
    (HostTag::Mod, BinaryOperator::Remainder),
];

const UNARY: &[(HostTag, UnaryOperator)] = &[
    (HostTag::Compl, UnaryOperator::BinaryNot),
    (HostTag::Not, UnaryOperator::LogicalNot),
    (HostTag::Pos, UnaryOperator::UnaryPlus),
    (HostTag::Neg, UnaryOperator::UnaryMinus),
    (HostTag::PreInc, UnaryOperator::PrefixIncrement),
    (HostTag::PreDec, UnaryOperator::PrefixDecrement),
    (HostTag::PostInc, UnaryOperator::PostfixIncrement),
    (HostTag::PostDec, UnaryOperator::PostfixDecrement),
];

/// `None` for unary tags. Plain assignment has no tag of its own.
pub fn binary_operator(tag: HostTag) -> Option<BinaryOperator> {
    BINARY.iter().find(|(t, _)| *t == tag).map(|(_, op)| *op)
}

pub fn unary_operator(tag: HostTag) -> Option<UnaryOperator> {
    UNARY.iter().find(|(t, _)| *t == tag).map(|(_, op)| *op)
}

/// `None` only for [`BinaryOperator::Assign`], which the host models as a
/// separate node kind.
pub fn host_binary_tag(op: BinaryOperator) -> Option<HostTag> {
    BINARY.iter().find(|(_, o)| *o == op).map(|(tag, _)| *tag)
}

pub fn host_unary_tag(op: UnaryOperator) -> HostTag {
    match op {
        UnaryOperator::BinaryNot => HostTag::Compl,
        UnaryOperator::LogicalNot => HostTag::Not,
        UnaryOperator::UnaryPlus => HostTag::Pos,
        UnaryOperator::UnaryMinus => HostTag::Neg,
        UnaryOperator::PrefixIncrement => HostTag::PreInc,
        UnaryOperator::PrefixDecrement => HostTag::PreDec,
        UnaryOperator::PostfixIncrement => HostTag::PostInc,
        UnaryOperator::PostfixDecrement => HostTag::PostDec,
    }
}
