use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn recorder() -> (Rc<RefCell<Vec<Result<(), MapError>>>>, impl Fn() -> SubscribeOutcome) {
    let log: Rc<RefCell<Vec<Result<(), MapError>>>> = Rc::default();
    let subscribe_one = {
        let log = Rc::clone(&log);
        move || {
            let log = Rc::clone(&log);
            subscribe(move |result| log.borrow_mut().push(result))
        }
    };
    (log, subscribe_one)
}

// =============================================================
// Registry: single injection
// =============================================================

#[test]
fn first_subscriber_injects_the_rest_wait() {
    let (log, subscribe_one) = recorder();

    assert!(matches!(subscribe_one(), SubscribeOutcome::Inject(_)));
    assert!(matches!(subscribe_one(), SubscribeOutcome::Pending(_)));
    assert!(matches!(subscribe_one(), SubscribeOutcome::Pending(_)));

    // No signal yet, nobody called back.
    assert!(log.borrow().is_empty());
}

#[test]
fn ready_signal_drains_every_waiter_once() {
    let (log, subscribe_one) = recorder();
    subscribe_one();
    subscribe_one();
    subscribe_one();

    script_ready();
    assert_eq!(log.borrow().len(), 3);
    assert!(log.borrow().iter().all(Result::is_ok));

    // Callbacks are FnOnce; a second signal has nobody left to call.
    script_ready();
    assert_eq!(log.borrow().len(), 3);
}

#[test]
fn loaded_engine_invokes_new_subscribers_synchronously() {
    let (log, subscribe_one) = recorder();
    subscribe_one();
    script_ready();

    assert_eq!(subscribe_one(), SubscribeOutcome::Ready);
    assert_eq!(log.borrow().len(), 2);
    assert!(log.borrow()[1].is_ok());
}

// =============================================================
// Registry: failure
// =============================================================

#[test]
fn load_failure_fails_every_waiter() {
    let (log, subscribe_one) = recorder();
    subscribe_one();
    subscribe_one();

    script_failed();
    assert_eq!(
        *log.borrow(),
        vec![Err(MapError::ScriptLoad), Err(MapError::ScriptLoad)]
    );
}

#[test]
fn load_failure_resets_so_a_fresh_mount_can_retry() {
    let (_, subscribe_one) = recorder();
    subscribe_one();
    script_failed();

    assert!(matches!(subscribe_one(), SubscribeOutcome::Inject(_)));
}

// =============================================================
// Registry: unsubscribe
// =============================================================

#[test]
fn unsubscribed_waiters_are_not_called() {
    let (log, subscribe_one) = recorder();
    let SubscribeOutcome::Inject(first) = subscribe_one() else {
        panic!("first subscriber should inject");
    };
    subscribe_one();

    unsubscribe(first);
    script_ready();
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn unsubscribe_of_unknown_id_is_harmless() {
    let (log, subscribe_one) = recorder();
    subscribe_one();
    unsubscribe(9999);
    script_ready();
    assert_eq!(log.borrow().len(), 1);
}

// =============================================================
// MapPhase transitions
// =============================================================

#[test]
fn happy_path_reaches_initialized() {
    let phase = MapPhase::default()
        .begin_loading()
        .script_arrived(Ok(()))
        .map_built(Ok(()));
    assert_eq!(phase, MapPhase::Initialized);
}

#[test]
fn script_failure_is_a_script_load_error() {
    let phase = MapPhase::default()
        .begin_loading()
        .script_arrived(Err(MapError::ScriptLoad));
    assert_eq!(phase, MapPhase::Failed(MapError::ScriptLoad));
    assert_eq!(phase.error(), Some(&MapError::ScriptLoad));
}

#[test]
fn billing_exception_during_init_is_a_billing_failure() {
    let phase = MapPhase::default()
        .begin_loading()
        .script_arrived(Ok(()))
        .map_built(Err(MapError::from_exception(Some("BillingNotEnabledMapError"))));
    assert_eq!(phase, MapPhase::Failed(MapError::BillingNotEnabled));
}

#[test]
fn failed_is_terminal() {
    let failed = MapPhase::Failed(MapError::ScriptLoad);
    assert_eq!(failed.clone().begin_loading(), failed);
    assert_eq!(failed.clone().script_arrived(Ok(())), failed);
    assert_eq!(failed.clone().map_built(Ok(())), failed);
}

#[test]
fn uninitialized_is_the_default_and_not_failed() {
    assert_eq!(MapPhase::default(), MapPhase::Uninitialized);
    assert!(!MapPhase::default().is_failed());
    assert_eq!(MapPhase::default().error(), None);
}
