//! Tests for value-less effects and their rewriter

use rusty::fault::region;
use rusty::{
    catch_effect, catch_effect_strict, failure, rewrap_effect, rewrap_effect_strict, success,
    success_or_handle, Effect, FailureHandlers, Fault, FaultKind, Result, Tag,
};
use std::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StoreError {
    Full,
    ReadOnly,
}

fn store(capacity: usize, len: usize) -> Effect<StoreError> {
    if len >= capacity {
        failure(StoreError::Full)
    } else {
        Effect::success()
    }
}

rusty::rewrap_effect! {
    fn store_pair(capacity: usize, len: usize) -> Effect<StoreError> {
        success(store(capacity, len));
        success(store(capacity, len + 1));
        Effect::Success
    }
}

#[test]
fn test_effect_tags() {
    let ok: Effect<StoreError> = Effect::success();
    let failed = Effect::failure(StoreError::ReadOnly);
    assert_eq!(ok.tag(), Tag::Success);
    assert_eq!(failed.tag(), Tag::Error);
    assert!(ok.is_success());
    assert!(failed.is_failure());
    assert_eq!(failed.err(), Some(StoreError::ReadOnly));
}

#[test]
fn test_success_raises_success_kind_fault() {
    let fault = match Fault::catch(|| success(store(1, 1))) {
        Ok(()) => panic!("expected a fault"),
        Err(fault) => fault,
    };
    assert_eq!(fault.kind(), FaultKind::Success);
    assert!(fault.message().starts_with("called success on a Failure value"));
    assert!(fault.message().contains("Full"));
}

#[test]
fn test_effect_macro_short_circuits() {
    assert_eq!(store_pair(4, 1), Effect::Success);
    assert_eq!(store_pair(4, 3), Effect::Failure(StoreError::Full));
    assert_eq!(store_pair(4, 4), Effect::Failure(StoreError::Full));
    assert_eq!(region::depth(), 0);
}

#[test]
fn test_rewrap_effect_closure() {
    let writes = Cell::new(0);
    let write_all = rewrap_effect(|lens: &[usize]| -> Effect<StoreError> {
        for &len in lens {
            success(store(3, len));
            writes.set(writes.get() + 1);
        }
        Effect::Success
    });

    assert_eq!(write_all(&[0, 1, 2]), Effect::Success);
    assert_eq!(writes.get(), 3);
    assert_eq!(write_all(&[0, 5, 1]), Effect::Failure(StoreError::Full));
    assert_eq!(writes.get(), 4);
}

#[test]
fn test_unwrap_faults_cross_effect_regions() {
    let outcome = std::panic::catch_unwind(|| {
        catch_effect(|| -> Effect<StoreError> {
            let failed: Result<(), StoreError> = rusty::err(StoreError::Full);
            rusty::unwrap(failed);
            Effect::Success
        })
    });
    assert!(outcome.is_err());
    assert_eq!(region::depth(), 0);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuotaError {
    Exceeded,
}

#[test]
fn test_strict_effect_region_turns_foreign_fault_into_defect() {
    let strict = rewrap_effect_strict(|over_quota: bool| -> Effect<StoreError> {
        if over_quota {
            success(failure(QuotaError::Exceeded));
        }
        Effect::Success
    });

    assert_eq!(strict(false), Effect::Success);

    let outcome = std::panic::catch_unwind(|| strict(true));
    let payload = match outcome {
        Ok(effect) => panic!("expected a defect, got {effect:?}"),
        Err(payload) => payload,
    };

    let message = match payload.downcast::<String>() {
        Ok(message) => message,
        Err(_) => panic!("defect should carry a formatted message"),
    };
    assert!(message.contains("QuotaError"));
    assert!(message.contains("StoreError"));
    assert_eq!(region::depth(), 0);
}

#[test]
fn test_strict_effect_region_absorbs_own_faults() {
    let effect = catch_effect_strict(|| -> Effect<StoreError> {
        success(store(1, 1));
        Effect::Success
    });
    assert_eq!(effect, Effect::Failure(StoreError::Full));
}

#[test]
fn test_failure_handlers() {
    let notified = Cell::new(false);
    let handlers = FailureHandlers::new().on(StoreError::Full, || notified.set(true));

    assert!(success_or_handle(store(2, 0), &handlers));
    assert!(!notified.get());

    assert!(!success_or_handle(store(2, 2), &handlers));
    assert!(notified.get());

    let fault = Fault::catch(|| success_or_handle(failure(StoreError::ReadOnly), &handlers)).err();
    assert_eq!(
        fault.and_then(|f| f.payload::<StoreError>().copied()),
        Some(StoreError::ReadOnly)
    );
}

#[test]
fn test_effect_result_conversions() {
    let from_result: Effect<StoreError> = rusty::ok::<(), StoreError>(()).into();
    assert_eq!(from_result, Effect::Success);

    let back: Result<(), StoreError> = failure(StoreError::Full).into();
    assert_eq!(back, rusty::err(StoreError::Full));

    let std_back: std::result::Result<(), StoreError> = store(1, 1).into();
    assert_eq!(std_back, Err(StoreError::Full));

    let from_std: Effect<StoreError> = Ok::<(), StoreError>(()).into();
    assert!(from_std.is_success());
    assert_eq!(failure(StoreError::ReadOnly).to_string(), "Failure(read-only)");
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Full => f.write_str("full"),
            Self::ReadOnly => f.write_str("read-only"),
        }
    }
}
