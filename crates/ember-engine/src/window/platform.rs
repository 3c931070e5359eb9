use std::sync::atomic::{AtomicUsize, Ordering};

/// Number of live platform references in this process.
static REFS: AtomicUsize = AtomicUsize::new(0);

/// Reference-counted handle on the process-wide windowing platform.
///
/// The native platform (display connection, event loop plumbing) is global to
/// the process. Each open window holds one guard; setup and teardown
/// bookkeeping happens only on the 0→1 and 1→0 transitions, so no single
/// window can tear the platform down underneath another.
pub(crate) struct PlatformGuard(());

pub(crate) fn acquire() -> PlatformGuard {
    let prev = REFS.fetch_add(1, Ordering::SeqCst);
    if prev == 0 {
        log::debug!("windowing platform acquired");
    }
    PlatformGuard(())
}

impl Drop for PlatformGuard {
    fn drop(&mut self) {
        let prev = REFS.fetch_sub(1, Ordering::SeqCst);
        if prev == 1 {
            log::debug!("windowing platform released");
        }
    }
}

#[cfg(test)]
pub(crate) fn live_refs() -> usize {
    REFS.load(Ordering::SeqCst)
}
