//! Stop-signal handling.
//!
//! SIGINT and SIGTERM raise a shared stop flag; the playback loop polls
//! it once per tick. The handler does nothing but the atomic store, so
//! it is async-signal-safe.

use nix::libc::c_int;
use nix::sys::signal::{self, SaFlags, SigAction, SigHandler, SigSet, Signal};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::sync::OnceLock;

static STOP_FLAG: OnceLock<Arc<AtomicBool>> = OnceLock::new();

extern "C" fn handle_stop(_signum: c_int) {
    if let Some(flag) = STOP_FLAG.get() {
        flag.store(true, Ordering::Relaxed);
    }
}

/// Install SIGINT/SIGTERM handlers that raise `flag`.
///
/// Installing twice keeps the first flag; the handlers themselves are
/// idempotent.
#[allow(unsafe_code)]
pub fn install(flag: Arc<AtomicBool>) -> nix::Result<()> {
    let _ = STOP_FLAG.set(flag);

    let action = SigAction::new(
        SigHandler::Handler(handle_stop),
        SaFlags::empty(),
        SigSet::empty(),
    );
    // SAFETY: handle_stop only performs an atomic store on a static flag.
    unsafe {
        signal::sigaction(Signal::SIGINT, &action)?;
        signal::sigaction(Signal::SIGTERM, &action)?;
    }
    Ok(())
}
