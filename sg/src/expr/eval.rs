//! Numeric evaluation of a validated tree

use super::number::{Number, round_to};
use super::program::{BinaryOp, Expr, Function, UnaryOp};
use crate::{GenError, Result};

// 2^63; i64::MAX is not exactly representable
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

pub(crate) fn evaluate(expr: &Expr) -> Result<Number> {
    match expr {
        Expr::Number(n) => Ok(*n),
        Expr::Constant(c) => Ok(Number::Float(c.value())),
        Expr::Unary { op, operand } => {
            let value = evaluate(operand)?;
            Ok(match op {
                UnaryOp::Pos => value,
                UnaryOp::Neg => negate(value),
            })
        }
        Expr::Binary { op, lhs, rhs } => {
            let a = evaluate(lhs)?;
            let b = evaluate(rhs)?;
            binary(*op, a, b)
        }
        Expr::Call { function, args } => {
            let values = args.iter().map(evaluate).collect::<Result<Vec<_>>>()?;
            call(*function, &values)
        }
    }
}

fn negate(value: Number) -> Number {
    match value {
        Number::Int(i) => i.checked_neg().map(Number::Int).unwrap_or(Number::Float(-(i as f64))),
        Number::Float(f) => Number::Float(-f),
    }
}

fn binary(op: BinaryOp, a: Number, b: Number) -> Result<Number> {
    match op {
        BinaryOp::Add => int_or_float(op, a, b, i64::checked_add, |x, y| x + y),
        BinaryOp::Sub => int_or_float(op, a, b, i64::checked_sub, |x, y| x - y),
        BinaryOp::Mul => int_or_float(op, a, b, i64::checked_mul, |x, y| x * y),
        BinaryOp::Div => {
            if b.as_f64() == 0.0 {
                return Err(GenError::evaluation("/", "division by zero"));
            }
            finite("/", a.as_f64() / b.as_f64())
        }
        BinaryOp::Pow => power(a, b),
    }
}

/// Integer arithmetic when both sides are integers and the result fits, float otherwise
fn int_or_float(
    op: BinaryOp,
    a: Number,
    b: Number,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Result<Number> {
    if let (Number::Int(x), Number::Int(y)) = (a, b) {
        if let Some(result) = int_op(x, y) {
            return Ok(Number::Int(result));
        }
    }
    finite(op.symbol(), float_op(a.as_f64(), b.as_f64()))
}

fn power(base: Number, exponent: Number) -> Result<Number> {
    if let (Number::Int(b), Number::Int(e)) = (base, exponent) {
        if e >= 0 {
            if let Some(result) = u32::try_from(e).ok().and_then(|e| b.checked_pow(e)) {
                return Ok(Number::Int(result));
            }
        }
    }

    let b = base.as_f64();
    let e = exponent.as_f64();
    if b == 0.0 && e < 0.0 {
        return Err(GenError::evaluation("**", "0 cannot be raised to a negative power"));
    }
    if b < 0.0 && e.fract() != 0.0 {
        return Err(GenError::evaluation(
            "**",
            "negative number cannot be raised to a fractional power",
        ));
    }
    finite("**", b.powf(e))
}

fn call(function: Function, args: &[Number]) -> Result<Number> {
    let name = function.name();
    match function {
        Function::Abs => Ok(match args[0] {
            Number::Int(i) => i.checked_abs().map(Number::Int).unwrap_or(Number::Float((i as f64).abs())),
            Number::Float(f) => Number::Float(f.abs()),
        }),
        Function::Round => round(args),
        Function::Min => Ok(pick(args, |candidate, best| candidate < best)),
        Function::Max => Ok(pick(args, |candidate, best| candidate > best)),
        Function::Sum => args
            .iter()
            .try_fold(Number::Int(0), |acc, value| binary(BinaryOp::Add, acc, *value)),
        Function::Pow => power(args[0], args[1]),
        Function::Sqrt => {
            let x = args[0].as_f64();
            if x < 0.0 {
                return Err(GenError::evaluation(name, "math domain error"));
            }
            Ok(Number::Float(x.sqrt()))
        }
        Function::Sin => finite(name, args[0].as_f64().sin()),
        Function::Cos => finite(name, args[0].as_f64().cos()),
        Function::Tan => finite(name, args[0].as_f64().tan()),
        Function::Log => {
            let x = positive(name, args[0])?;
            match args.get(1) {
                None => Ok(Number::Float(x.ln())),
                Some(base) => {
                    let base = positive(name, *base)?;
                    if base == 1.0 {
                        return Err(GenError::evaluation(name, "logarithm base cannot be 1"));
                    }
                    finite(name, x.ln() / base.ln())
                }
            }
        }
        Function::Log10 => Ok(Number::Float(positive(name, args[0])?.log10())),
        Function::Exp => finite(name, args[0].as_f64().exp()).map_err(|_| GenError::evaluation(name, "math range error")),
        Function::Ceil => to_int(name, args[0], f64::ceil),
        Function::Floor => to_int(name, args[0], f64::floor),
    }
}

fn round(args: &[Number]) -> Result<Number> {
    match args.get(1) {
        None => to_int("round", args[0], f64::round_ties_even),
        Some(Number::Int(digits)) => {
            let digits = (*digits).clamp(i32::MIN as i64, i32::MAX as i64) as i32;
            match args[0] {
                Number::Int(_) if digits >= 0 => Ok(args[0]),
                Number::Int(i) => to_int("round", Number::Float(round_to(i as f64, digits)), |f| f),
                Number::Float(f) => Ok(Number::Float(round_to(f, digits))),
            }
        }
        Some(Number::Float(_)) => Err(GenError::evaluation("round", "ndigits must be an integer")),
    }
}

/// First argument that beats every other under `better`, keeping its original type
fn pick(args: &[Number], better: fn(f64, f64) -> bool) -> Number {
    args.iter()
        .copied()
        .reduce(|best, candidate| {
            if better(candidate.as_f64(), best.as_f64()) {
                candidate
            } else {
                best
            }
        })
        .unwrap_or(Number::Int(0))
}

fn positive(operation: &str, value: Number) -> Result<f64> {
    let x = value.as_f64();
    if x <= 0.0 {
        return Err(GenError::evaluation(operation, "math domain error"));
    }
    Ok(x)
}

fn to_int(operation: &str, value: Number, f: fn(f64) -> f64) -> Result<Number> {
    match value {
        Number::Int(_) => Ok(value),
        Number::Float(x) => {
            let rounded = f(x);
            if !rounded.is_finite() || rounded < -I64_BOUND || rounded >= I64_BOUND {
                return Err(GenError::evaluation(operation, "integer result out of range"));
            }
            Ok(Number::Int(rounded as i64))
        }
    }
}

fn finite(operation: &str, x: f64) -> Result<Number> {
    if x.is_finite() {
        Ok(Number::Float(x))
    } else {
        Err(GenError::evaluation(operation, "result out of range"))
    }
}
