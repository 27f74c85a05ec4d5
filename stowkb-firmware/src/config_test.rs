use super::*;

#[test]
fn defaults() {
    let config = ReaderConfig::default();
    assert_eq!(config.ready_timeout_ms, 200);
    assert_eq!(config.power_settle_ms, 20);
    assert_eq!(config.poll_interval_ms, 20);
    assert_eq!(config.retry_delay_ms, 100);
    assert_eq!(config.locale, Locale::Us);
}

#[test]
fn builder() {
    const BOARD: ReaderConfig = ReaderConfig::new()
        .ready_timeout_ms(1000)
        .locale(Locale::De);

    assert_eq!(BOARD.ready_timeout_ms, 1000);
    assert_eq!(BOARD.locale, Locale::De);
    assert_eq!(BOARD.power_settle_ms, POWER_SETTLE_MS);

    let fast = ReaderConfig::new()
        .power_settle_ms(1)
        .poll_interval_ms(2)
        .retry_delay_ms(3);
    assert_eq!(
        (fast.power_settle_ms, fast.poll_interval_ms, fast.retry_delay_ms),
        (1, 2, 3)
    );
}
