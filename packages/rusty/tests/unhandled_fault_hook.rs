//! An unwrap fault with no rewriter on the stack goes through the panic hook
//! with the caller's location and a readable payload

use rusty::{err, ok, unwrap, Fault, Result};
use std::panic;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MathError {
    DivideByZero,
}

fn divide(a: i32, b: i32) -> Result<i32, MathError> {
    if b == 0 {
        err(MathError::DivideByZero)
    } else {
        ok(a / b)
    }
}

type Seen = Option<(Option<(String, u32)>, Option<String>)>;

#[test]
fn test_unhandled_fault_reports_caller_line_and_message() {
    let seen: Arc<Mutex<Seen>> = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&seen);

    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|l| (l.file().to_string(), l.line()));
        let message = info
            .payload()
            .downcast_ref::<Fault>()
            .map(|fault| fault.message().to_string());
        if let Ok(mut slot) = sink.lock() {
            *slot = Some((location, message));
        }
    }));

    let line = line!() + 1;
    let outcome = panic::catch_unwind(|| unwrap(divide(10, 0)));
    panic::set_hook(previous);
    assert!(outcome.is_err());

    let seen = seen.lock().ok().and_then(|mut slot| slot.take());
    let (location, message) = match seen {
        Some(seen) => seen,
        None => panic!("panic hook was not invoked"),
    };

    assert_eq!(location, Some((file!().to_string(), line)));
    let message = message.unwrap_or_default();
    assert!(message.contains("called unwrap on an Err value"));
    assert!(message.contains("DivideByZero"));
}
