extern crate std;

use core::{cell::RefCell, task::Waker};
use embassy_time_driver::Driver;
use std::time::SystemTime;

/// Host clock for tests. Wall time until [set_time] pins it; after that the clock only moves when
/// a timer is scheduled, jumping straight to that timer's deadline.
struct TestTimeDriver;

impl Driver for TestTimeDriver {
    fn now(&self) -> u64 {
        CLOCK.with_borrow(|clock| {
            if clock.now == 0 {
                SystemTime::now()
                    .duration_since(SystemTime::UNIX_EPOCH)
                    .map(|d| d.as_micros() as u64)
                    .unwrap_or(1)
            } else {
                clock.now
            }
        })
    }

    fn schedule_wake(&self, at: u64, waker: &Waker) {
        CLOCK.with_borrow_mut(|clock| {
            if clock.now != 0 && at > clock.now {
                clock.now = at + clock.lag;
            }
        });

        waker.wake_by_ref();
    }
}

struct Clock {
    now: u64,
    lag: u64,
}

std::thread_local! {
    static CLOCK: RefCell<Clock> = const { RefCell::new(Clock { now: 0, lag: 0 }) };
}

embassy_time_driver::time_driver_impl!(static TIME_DRIVER: TestTimeDriver = TestTimeDriver);

/// Pin this thread's clock to `ticks`. `0` goes back to wall time.
pub fn set_time(ticks: u64) {
    CLOCK.with_borrow_mut(|clock| clock.now = ticks);
}

/// Extra ticks added each time a timer fires, to model a late wakeup.
pub fn set_wait_lag(ticks: u64) {
    CLOCK.with_borrow_mut(|clock| clock.lag = ticks);
}

#[cfg(test)]
mod test {
    use embassy_futures::block_on;
    use embassy_time::{Duration, Instant, Timer};

    use super::*;

    #[test]
    fn pinned_clock_jumps_to_deadline() {
        set_time(5_000);
        let start = Instant::now();
        assert_eq!(start.as_ticks(), 5_000);

        block_on(Timer::after_millis(30));
        assert_eq!(Instant::now() - start, Duration::from_millis(30));

        set_wait_lag(2_000);
        block_on(Timer::after_millis(1));
        assert_eq!(Instant::now() - start, Duration::from_millis(33));
    }
}
