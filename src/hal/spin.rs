use core::sync::atomic::{AtomicBool, Ordering};

use lock_api::RawMutex;

/// Test-and-test-and-set spin lock.
///
/// Serializes the input paths that feed the dispatcher and guards the camera
/// shared between the shell and the capture path.
pub struct RawSpin {
    lock: AtomicBool,
}

unsafe impl RawMutex for RawSpin {
    type GuardMarker = lock_api::GuardSend;
    #[allow(clippy::declare_interior_mutable_const)]
    const INIT: Self = Self {
        lock: AtomicBool::new(false),
    };

    fn lock(&self) {
        while self
            .lock
            .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            while self.lock.load(Ordering::Relaxed) {
                core::hint::spin_loop();
            }
        }
    }

    fn try_lock(&self) -> bool {
        self.lock
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    unsafe fn unlock(&self) {
        self.lock.store(false, Ordering::Release);
    }

    fn is_locked(&self) -> bool {
        self.lock.load(Ordering::Relaxed)
    }
}

pub type Mutex<T> = lock_api::Mutex<RawSpin, T>;
pub type MutexGuard<'a, T> = lock_api::MutexGuard<'a, RawSpin, T>;

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn test_try_lock_fails_while_held() {
        let m = Mutex::new(0u32);
        let guard = m.lock();
        assert!(m.try_lock().is_none());
        drop(guard);
        assert!(m.try_lock().is_some());
    }

    #[test]
    fn test_counter_across_threads() {
        let counter = Arc::new(Mutex::new(0u32));
        let handles: alloc::vec::Vec<_> = (0..4)
            .map(|_| {
                let counter = Arc::clone(&counter);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        *counter.lock() += 1;
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(*counter.lock(), 4000);
    }
}
