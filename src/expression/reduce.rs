use super::{BinaryOp, Expression};

pub fn reduce(expr: Expression) -> Expression {
    match expr {
        Expression::Binary(op, left, right) => reduce_binary(op, left, right),
        expr => expr,
    }
}

/// Rules are tried in order: fold two constants, then a constant on the left, then a constant
/// on the right. Anything else is rebuilt as it was.
///
/// Some left-constant rules are not identities: `0 - r` yields `r`, and `0 ^ r` and `1 ^ r` both
/// yield the constant itself.
fn reduce_binary(op: BinaryOp, left: Box<Expression>, right: Box<Expression>) -> Expression {
    match (left.constant_value(), right.constant_value()) {
        (Some(l), Some(r)) => Expression::constant(op.apply(l, r)),
        (Some(v), None) => match op {
            BinaryOp::Multiply if v == 0.0 => *left,
            BinaryOp::Multiply if v == 1.0 => *right,
            BinaryOp::Add | BinaryOp::Subtract if v == 0.0 => *right,
            BinaryOp::Power if v == 0.0 || v == 1.0 => *left,
            BinaryOp::Divide if v == 0.0 => *left,
            _ => Expression::Binary(op, left, right),
        },
        (None, Some(v)) => match op {
            BinaryOp::Multiply if v == 0.0 => *right,
            BinaryOp::Multiply if v == 1.0 => *left,
            BinaryOp::Add | BinaryOp::Subtract if v == 0.0 => *left,
            BinaryOp::Power if v == 0.0 => Expression::ONE,
            BinaryOp::Power | BinaryOp::Divide if v == 1.0 => *left,
            BinaryOp::Divide if v == 0.0 => Expression::INF,
            _ => Expression::Binary(op, left, right),
        },
        (None, None) => Expression::Binary(op, left, right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::UnaryOp;

    const SAMPLES: [f64; 7] = [-3.5, -1.0, 0.25, 1.0, 2.0, 5.0, 17.0];

    fn x() -> Expression {
        Expression::Variable
    }

    fn log_x() -> Expression {
        Expression::unary(UnaryOp::Log, x())
    }

    fn assert_sound(node: Expression) {
        let reduced = reduce(node.clone());
        for &x in &SAMPLES {
            let (before, after) = (node.eval(x), reduced.eval(x));
            if before.is_finite() && after.is_finite() {
                assert_eq!(before, after, "{} vs {} at {}", node, reduced, x);
            }
        }
    }

    #[test]
    fn folds_constants() {
        let node = Expression::binary(BinaryOp::Add, Expression::TWO, Expression::NEG_ONE);
        let reduced = reduce(node);
        assert_eq!(reduced, Expression::constant(1.0));
        assert_eq!(reduced.to_string(), "1");

        let node = Expression::binary(BinaryOp::Divide, Expression::ONE, Expression::TWO);
        assert_eq!(reduce(node).to_string(), "0.5");

        let node = Expression::binary(BinaryOp::Divide, Expression::ONE, Expression::ZERO);
        assert_eq!(reduce(node).eval(0.0), f64::INFINITY);

        let node = Expression::binary(BinaryOp::Power, Expression::NEG_ONE, Expression::INF);
        assert_eq!(reduce(node).constant_value(), Some(1.0));
    }

    #[test]
    fn left_constant_rules() {
        let cases = vec![
            (BinaryOp::Multiply, Expression::ZERO, Expression::ZERO),
            (BinaryOp::Multiply, Expression::ONE, log_x()),
            (BinaryOp::Add, Expression::ZERO, log_x()),
            (BinaryOp::Subtract, Expression::ZERO, log_x()),
            (BinaryOp::Power, Expression::ZERO, Expression::ZERO),
            (BinaryOp::Power, Expression::ONE, Expression::ONE),
            (BinaryOp::Divide, Expression::ZERO, Expression::ZERO),
        ];
        for (op, constant, expected) in cases {
            let node = Expression::binary(op, constant, log_x());
            assert_eq!(reduce(node), expected);
        }
    }

    #[test]
    fn right_constant_rules() {
        let cases = vec![
            (BinaryOp::Multiply, Expression::ZERO, Expression::ZERO),
            (BinaryOp::Multiply, Expression::ONE, x()),
            (BinaryOp::Add, Expression::ZERO, x()),
            (BinaryOp::Subtract, Expression::ZERO, x()),
            (BinaryOp::Power, Expression::ZERO, Expression::ONE),
            (BinaryOp::Power, Expression::ONE, x()),
            (BinaryOp::Divide, Expression::ZERO, Expression::INF),
            (BinaryOp::Divide, Expression::ONE, x()),
        ];
        for (op, constant, expected) in cases {
            let node = Expression::binary(op, x(), constant);
            assert_eq!(reduce(node), expected);
        }
    }

    #[test]
    fn unmatched_constants_are_kept() {
        let cases = vec![
            Expression::binary(BinaryOp::Divide, Expression::ONE, x()),
            Expression::binary(BinaryOp::Add, Expression::TWO, x()),
            Expression::binary(BinaryOp::Power, x(), Expression::TWO),
            Expression::binary(BinaryOp::Subtract, x(), Expression::NEG_ONE),
            Expression::binary(BinaryOp::Add, x(), x()),
        ];
        for node in cases {
            assert_eq!(reduce(node.clone()), node);
        }
    }

    #[test]
    fn unary_and_leaves_pass_through() {
        let node = Expression::unary(UnaryOp::Log, Expression::ONE);
        assert_eq!(reduce(node.clone()), node);
        assert_eq!(reduce(x()), x());
        assert_eq!(reduce(Expression::INF), Expression::INF);
    }

    #[test]
    fn identity_rules_are_sound() {
        for op in [
            BinaryOp::Multiply,
            BinaryOp::Divide,
            BinaryOp::Add,
            BinaryOp::Subtract,
            BinaryOp::Power,
        ] {
            for constant in [Expression::ZERO, Expression::ONE, Expression::TWO] {
                assert_sound(Expression::binary(op, x(), constant.clone()));
                assert_sound(Expression::binary(op, constant, Expression::TWO));
            }
        }
        assert_sound(Expression::binary(BinaryOp::Multiply, Expression::ZERO, x()));
        assert_sound(Expression::binary(BinaryOp::Multiply, Expression::ONE, x()));
        assert_sound(Expression::binary(BinaryOp::Add, Expression::ZERO, x()));
        assert_sound(Expression::binary(BinaryOp::Divide, Expression::ZERO, x()));
    }

    #[test]
    fn left_zero_subtraction_keeps_sign() {
        // 0 - X collapses to X rather than -X.
        let node = Expression::binary(BinaryOp::Subtract, Expression::ZERO, x());
        let reduced = reduce(node.clone());
        assert_eq!(reduced, x());
        assert_eq!(node.eval(3.0), -3.0);
        assert_eq!(reduced.eval(3.0), 3.0);
    }
}
