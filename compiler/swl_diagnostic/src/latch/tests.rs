use super::*;

#[test]
fn empty_latch_is_success() {
    let latch = ErrorLatch::new();
    assert!(!latch.is_set());
    assert_eq!(latch.result(), Ok(()));
    assert_eq!(latch.exit_code(), 0);
}

#[test]
fn first_error_wins() {
    let mut latch = ErrorLatch::new();
    assert!(latch.record(ErrorCode::Syntax));
    assert!(!latch.record(ErrorCode::IncompatibleTypes));
    assert!(!latch.record(ErrorCode::Internal));
    assert_eq!(latch.code(), Some(ErrorCode::Syntax));
    assert_eq!(latch.result(), Err(ErrorCode::Syntax));
    assert_eq!(latch.exit_code(), 2);
}
