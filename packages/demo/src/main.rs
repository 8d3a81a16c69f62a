//! Walk-through of explicit results, unwrap faults and rewriters
//!
//! Run with `RUST_LOG=debug cargo run -p rusty_demo` to see faults being
//! absorbed.

use log::info;
use rusty::prelude::*;
use rusty::{unwrap_or_handle, ErrHandlers, FaultLog};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MathError {
    DivideByZero,
    Negative,
}

fn divide(a: i32, b: i32) -> Result<i32, MathError> {
    if b == 0 {
        err(MathError::DivideByZero)
    } else {
        ok(a / b)
    }
}

fn checked_root(n: i32) -> Result<i32, MathError> {
    if n < 0 {
        return err(MathError::Negative);
    }
    let mut root = 0;
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    ok(root)
}

rusty::rewrap! {
    /// Doubled quotient, short-circuiting on division by zero
    fn safe_divide(a: i32, b: i32) -> Result<i32, MathError> {
        ok(unwrap(divide(a, b)) * 2)
    }
}

rusty::rewrap! {
    /// Root of a quotient; either step may fail
    fn root_of_quotient(a: i32, b: i32) -> Result<i32, MathError> {
        let quotient = unwrap(divide(a, b));
        ok(unwrap(checked_root(quotient)))
    }
}

rusty::rewrap_effect! {
    fn check_all(values: &[i32]) -> Effect<MathError> {
        for &value in values {
            if value < 0 {
                success(failure(MathError::Negative));
            }
        }
        Effect::Success
    }
}

fn main() {
    FaultLog::init();

    for (a, b) in [(10, 2), (10, 0)] {
        match divide(a, b) {
            Result::Ok(q) => info!("divide({a}, {b}) = {q}"),
            Result::Err(e) => info!("divide({a}, {b}) failed: {e:?}"),
        }
        info!("safe_divide({a}, {b}) = {:?}", safe_divide(a, b));
    }

    for (a, b) in [(81, 1), (-81, 1), (81, 0)] {
        info!("root_of_quotient({a}, {b}) = {:?}", root_of_quotient(a, b));
    }

    let tripled = rewrap(|n: i32| -> Result<i32, MathError> { ok(unwrap(checked_root(n)) * 3) });
    info!("tripled root of 16 = {:?}", tripled(16));
    info!("tripled root of -1 = {:?}", tripled(-1));

    let handlers = ErrHandlers::new()
        .on(MathError::DivideByZero, || i32::MAX)
        .otherwise(|e| {
            info!("falling back for {e:?}");
            0
        });
    info!("handled 1/0 = {}", unwrap_or_handle(divide(1, 0), &handlers));
    info!("handled root(-4) = {}", unwrap_or_handle(checked_root(-4), &handlers));

    info!("check_all([1, 2]) = {:?}", check_all(&[1, 2]));
    info!("check_all([1, -2]) = {:?}", check_all(&[1, -2]));

    match Fault::catch(|| unwrap(divide(7, 0))) {
        Ok(q) => info!("unexpected quotient {q}"),
        Err(fault) => info!("caught by hand: {fault} (raised at {})", fault.location()),
    }
}
