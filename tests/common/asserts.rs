use request_gatekeeper::{Decision, Rejection, RejectionReason};
use serde_json::Value;

pub fn assert_allowed(decision: Decision) {
    match decision {
        Decision::Allow => {}
        Decision::Reject(rejection) => panic!("expected allow, got {:?}", rejection),
    }
}

pub fn assert_rejected(decision: Decision) -> Rejection {
    match decision {
        Decision::Reject(rejection) => rejection,
        Decision::Allow => panic!("expected rejection, got allow"),
    }
}

pub fn assert_rejected_with(decision: Decision, status: u16, reason: RejectionReason) -> Value {
    let rejection = assert_rejected(decision);
    assert_eq!(rejection.status, status);
    assert_eq!(rejection.reason, reason);
    rejection.body()
}
