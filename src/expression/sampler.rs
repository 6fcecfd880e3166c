use rand::Rng;

use super::{BinaryOp, Expression, UnaryOp};

/// Below this depth only operators are sampled.
pub const OPERATOR_DEPTH: usize = 4;
/// From this depth onwards only leaves are sampled. Nothing else bounds the recursion.
pub const LEAF_DEPTH: usize = 10;

const N_OPERATORS: usize = 6;
const N_LEAVES: usize = 5;

/// Picks a production uniformly from those allowed at `depth`. The first `N_OPERATORS` are
/// operators, the remaining `N_LEAVES` are leaves.
fn production<R: Rng>(depth: usize, rng: &mut R) -> usize {
    if depth < OPERATOR_DEPTH {
        rng.gen_range(0..N_OPERATORS)
    } else if depth < LEAF_DEPTH {
        rng.gen_range(0..N_OPERATORS + N_LEAVES)
    } else {
        N_OPERATORS + rng.gen_range(0..N_LEAVES)
    }
}

pub fn sample<R: Rng>(depth: usize, rng: &mut R) -> Expression {
    let choice = production(depth, rng);
    match choice {
        0 => sample_binary(BinaryOp::Multiply, depth, rng),
        1 => sample_binary(BinaryOp::Divide, depth, rng),
        2 => sample_binary(BinaryOp::Add, depth, rng),
        3 => sample_binary(BinaryOp::Subtract, depth, rng),
        4 => sample_binary(BinaryOp::Power, depth, rng),
        // log nodes are never reduced
        5 => Expression::unary(UnaryOp::Log, sample(depth + 1, rng)),
        6 => Expression::NEG_ONE,
        7 => Expression::ZERO,
        8 => Expression::ONE,
        9 => Expression::TWO,
        10 => Expression::Variable,
        _ => unreachable!("sampled production {} does not exist", choice),
    }
}

fn sample_binary<R: Rng>(op: BinaryOp, depth: usize, rng: &mut R) -> Expression {
    let left = sample(depth + 1, rng);
    let right = sample(depth + 1, rng);
    Expression::binary(op, left, right).reduce()
}
