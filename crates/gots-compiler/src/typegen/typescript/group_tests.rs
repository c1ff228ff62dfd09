use gots_core::{BinaryOp, Expr, UnaryOp};

use super::group::{GroupState, GroupValue, eval_iota};

fn iota() -> Expr {
    Expr::ident("iota")
}

#[test]
fn counter_starts_before_zero() {
    let mut group = GroupState::new();
    assert_eq!(group.iota(), -1);
    assert_eq!(group.advance(), 0);
    assert_eq!(group.advance(), 1);
    assert_eq!(group.iota(), 1);
}

#[test]
fn plain_iota_and_offsets() {
    assert_eq!(eval_iota(&iota(), 4).unwrap(), 4);

    let plus_six = Expr::binary(BinaryOp::Add, iota(), Expr::int(6));
    assert_eq!(eval_iota(&plus_six, 0).unwrap(), 6);
    assert_eq!(eval_iota(&plus_six, 2).unwrap(), 8);
}

#[test]
fn shifted_sequences() {
    let flag = Expr::binary(BinaryOp::Shl, Expr::int(1), iota());
    let values: Vec<i64> = (0..4).map(|i| eval_iota(&flag, i).unwrap()).collect();
    assert_eq!(values, vec![1, 2, 4, 8]);

    // KB = 1 << (10 * (iota + 1))
    let size = Expr::binary(
        BinaryOp::Shl,
        Expr::int(1),
        Expr::paren(Expr::binary(
            BinaryOp::Mul,
            Expr::int(10),
            Expr::paren(Expr::binary(BinaryOp::Add, iota(), Expr::int(1))),
        )),
    );
    assert_eq!(eval_iota(&size, 0).unwrap(), 1024);
    assert_eq!(eval_iota(&size, 1).unwrap(), 1_048_576);
}

#[test]
fn unary_and_bitwise_operators() {
    assert_eq!(eval_iota(&Expr::unary(UnaryOp::Neg, iota()), 3).unwrap(), -3);
    assert_eq!(eval_iota(&Expr::unary(UnaryOp::Xor, iota()), 0).unwrap(), -1);
    let masked = Expr::binary(BinaryOp::And, iota(), Expr::lit(gots_core::LitKind::Int, "0x3"));
    assert_eq!(eval_iota(&masked, 7).unwrap(), 3);
    let mixed = Expr::binary(BinaryOp::Xor, iota(), Expr::int(1));
    assert_eq!(eval_iota(&mixed, 2).unwrap(), 3);
    let rem = Expr::binary(BinaryOp::Rem, iota(), Expr::int(3));
    assert_eq!(eval_iota(&rem, 5).unwrap(), 2);
}

#[test]
fn evaluation_failures() {
    let by_zero = Expr::binary(BinaryOp::Quo, iota(), Expr::int(0));
    assert!(eval_iota(&by_zero, 1).is_err());

    let other = Expr::binary(BinaryOp::Add, Expr::ident("Base"), iota());
    assert!(eval_iota(&other, 1).is_err());

    let overflow = Expr::binary(BinaryOp::Shl, Expr::int(3), Expr::int(62));
    assert!(eval_iota(&overflow, 0).is_err());

    let compare = Expr::binary(BinaryOp::Lss, iota(), Expr::int(2));
    assert!(eval_iota(&compare, 0).is_err());
}

#[test]
fn group_value_classification() {
    assert_eq!(
        GroupValue::from_expr(&Expr::string(r#""x""#)),
        GroupValue::Literal(r#""x""#.to_string())
    );
    assert!(matches!(
        GroupValue::from_expr(&Expr::binary(BinaryOp::Add, iota(), Expr::int(1))),
        GroupValue::Sequence(_)
    ));
    assert!(matches!(
        GroupValue::from_expr(&Expr::call(Expr::ident("f"), vec![])),
        GroupValue::Unsupported(_)
    ));
}

#[test]
fn sequence_falls_back_to_substitution() {
    let value = GroupValue::from_expr(&Expr::binary(BinaryOp::Add, Expr::ident("Base"), iota()));
    assert_eq!(value.render(2).unwrap(), "Base + 2");

    let literal = GroupValue::Literal("\"x\"".to_string());
    assert_eq!(literal.render(9).unwrap(), "\"x\"");

    let bad = GroupValue::Unsupported("function call".to_string());
    assert_eq!(bad.render(0).unwrap_err().to_string(), "function call");
}

#[test]
fn type_inheritance_and_reset() {
    let mut group = GroupState::new();
    assert_eq!(group.current_type(), None);
    group.set_type("Level".to_string());
    assert_eq!(group.current_type(), Some("Level"));
    group.reset_type();
    assert_eq!(group.current_type(), None);
}

#[test]
fn inherited_values_follow_position() {
    let mut group = GroupState::new();
    assert!(group.current_value(0).is_none());

    group.set_values(&[Expr::int(1), Expr::int(2)]);
    assert_eq!(group.current_value(0), Some(&GroupValue::Literal("1".to_string())));
    assert_eq!(group.current_value(1), Some(&GroupValue::Literal("2".to_string())));
    assert_eq!(group.current_value(5), Some(&GroupValue::Literal("2".to_string())));
}
