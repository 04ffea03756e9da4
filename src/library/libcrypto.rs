//! libcrypto backend.
//!
//! # Responsibilities
//! - Global initialization and version reporting
//! - Provider load/unload through `openssl::provider::Provider`
//! - Exit-hook registration via `atexit` or `OPENSSL_atexit`
//! - Holding the parked provider until an exit hook drains it
//!
//! # Design Decisions
//! - The parked handle sits in a take-once slot: whoever takes it unloads
//!   it, and an empty slot makes the callback a no-op
//! - A parked handle nobody takes is leaked (statics are never dropped),
//!   which is what modes 0 and 5 need

use std::ffi::CStr;
use std::panic;
use std::ptr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use openssl::error::ErrorStack;
use openssl::provider::Provider;

use super::sys;
use super::{CryptoLibrary, ExitHook};
use crate::error::{ProbeError, ProbeResult};

/// Provider handed over to process teardown.
static PARKED: Mutex<Option<Provider>> = Mutex::new(None);

static PROCESS_HOOK_REGISTERED: AtomicBool = AtomicBool::new(false);
static LIBRARY_HOOK_REGISTERED: AtomicBool = AtomicBool::new(false);

/// Exit callback: unload the parked provider, if any.
///
/// Runs after thread-local storage is gone, so it must not log or touch
/// anything but `PARKED`. A panic cannot unwind out of this frame.
extern "C" fn unload_parked() {
    let _ = panic::catch_unwind(take_and_unload_parked);
}

fn take_and_unload_parked() {
    let provider = PARKED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .take();
    drop(provider);
}

/// The system libcrypto, reached through the `openssl` crate.
#[derive(Debug, Default)]
pub struct OpenSsl;

impl OpenSsl {
    pub fn new() -> Self {
        Self::default()
    }
}

fn version_string(kind: libc::c_int) -> String {
    // SAFETY: OpenSSL_version returns a pointer to a static NUL-terminated
    // string, or NULL for unknown kinds.
    unsafe {
        let raw = sys::OpenSSL_version(kind);
        if raw.is_null() {
            return String::from("unknown");
        }
        CStr::from_ptr(raw).to_string_lossy().into_owned()
    }
}

fn error_report(stack: &ErrorStack) -> Vec<String> {
    stack.errors().iter().map(|e| e.to_string()).collect()
}

impl CryptoLibrary for OpenSsl {
    type Provider = Provider;

    fn initialize(&mut self) {
        let opts = sys::OPENSSL_INIT_LOAD_CRYPTO_STRINGS
            | sys::OPENSSL_INIT_ADD_ALL_CIPHERS
            | sys::OPENSSL_INIT_ADD_ALL_DIGESTS;

        // SAFETY: NULL settings selects the defaults.
        let ok = unsafe { sys::OPENSSL_init_crypto(opts, ptr::null()) };
        if ok != 1 {
            tracing::warn!("OPENSSL_init_crypto reported failure");
        }
    }

    fn version_line(&self) -> String {
        format!(
            "OpenSSL {} ({})",
            version_string(sys::OPENSSL_FULL_VERSION_STRING),
            version_string(sys::OPENSSL_CPU_INFO)
        )
    }

    fn register_exit_hook(&mut self, hook: ExitHook) -> ProbeResult<()> {
        let registered = match hook {
            ExitHook::Process => &PROCESS_HOOK_REGISTERED,
            ExitHook::Library => &LIBRARY_HOOK_REGISTERED,
        };
        if registered.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        // SAFETY: unload_parked catches panics and only touches PARKED.
        let ok = unsafe {
            match hook {
                ExitHook::Process => libc::atexit(unload_parked) == 0,
                ExitHook::Library => sys::OPENSSL_atexit(unload_parked) == 1,
            }
        };

        if ok {
            Ok(())
        } else {
            registered.store(false, Ordering::SeqCst);
            Err(ProbeError::HookRegistration(hook))
        }
    }

    fn load_provider(&mut self, name: &str) -> ProbeResult<Provider> {
        Provider::load(None, name).map_err(|stack| ProbeError::ProviderLoad {
            name: name.to_string(),
            report: error_report(&stack),
        })
    }

    fn unload(&mut self, provider: Provider) {
        drop(provider);
    }

    fn park(&mut self, provider: Provider) {
        let previous = PARKED
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(provider);
        if previous.is_some() {
            // Never reached by the driver, which loads once per process.
            tracing::warn!("Replaced an already parked provider");
        }
    }

    fn cleanup(&mut self) {
        // SAFETY: called at most once, and nothing touches libcrypto after.
        unsafe { sys::OPENSSL_cleanup() }
    }
}
