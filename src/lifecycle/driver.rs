//! Lifecycle test driver.
//!
//! # Timeline
//! ```text
//! 1. read mode                      (caller)
//! 2. hook before init               (mode 2)
//! 3. library init
//! 4. version line → stdout
//! 5/6. hook after init              (modes 3, 4)
//! 7. load provider                  (fatal on failure)
//! 8. unload inline                  (mode 1)
//! 9. process-wide cleanup           (mode 5)
//! 10. success
//! ```
//!
//! Every mode other than 1 parks the provider after step 7. Whether anything
//! ever unloads it depends on the hook registered earlier.

use std::io::Write;

use super::mode::Mode;
use super::plan::{HookPoint, LifecyclePlan};
use crate::error::ProbeResult;
use crate::library::CryptoLibrary;

fn register<L: CryptoLibrary>(lib: &mut L, plan: &LifecyclePlan, point: HookPoint) {
    let Some(hook) = plan.hook_at(point) else {
        return;
    };

    match lib.register_exit_hook(hook) {
        Ok(()) => tracing::debug!(%hook, ?point, "Registered unload callback"),
        Err(e) => tracing::warn!(error = %e, "Continuing without exit hook"),
    }
}

/// Run the fixed timeline for `mode`, loading `provider_name`.
///
/// The version line goes to `out`. The only error is a provider load
/// failure, returned before any cleanup is attempted.
pub fn run<L, W>(lib: &mut L, mode: Mode, provider_name: &str, out: &mut W) -> ProbeResult<()>
where
    L: CryptoLibrary,
    W: Write,
{
    let plan = LifecyclePlan::for_mode(mode);
    tracing::info!(%mode, provider = provider_name, ?plan, "Starting lifecycle run");

    register(lib, &plan, HookPoint::BeforeInit);

    lib.initialize();
    tracing::debug!("Library initialized");

    let line = lib.version_line();
    if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
        tracing::warn!(error = %e, "Failed to write version line");
    }

    register(lib, &plan, HookPoint::AfterInit);

    let provider = lib.load_provider(provider_name)?;
    tracing::debug!(provider = provider_name, "Provider loaded");

    if plan.parks_provider() {
        lib.park(provider);
    } else {
        lib.unload(provider);
        tracing::debug!(provider = provider_name, "Provider unloaded inline");
    }

    if plan.cleanup {
        lib.cleanup();
        tracing::debug!("Process-wide cleanup done");
    }

    tracing::info!(%mode, "Lifecycle run complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProbeError;
    use crate::library::ExitHook;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Register(ExitHook),
        Init,
        Load,
        Unload(u32),
        Park(u32),
        Cleanup,
        HookUnload(ExitHook, u32),
    }

    /// Records every call and simulates process teardown.
    #[derive(Default)]
    struct RecordingLibrary {
        events: Vec<Event>,
        hooks: Vec<ExitHook>,
        parked: Option<u32>,
        next_id: u32,
        fail_load: bool,
        refuse_hooks: bool,
        cleaned_up: bool,
    }

    impl RecordingLibrary {
        fn failing() -> Self {
            Self {
                fail_load: true,
                ..Self::default()
            }
        }

        /// Run registered hooks in reverse order, like `exit` does.
        fn teardown(&mut self) {
            for hook in self.hooks.clone().into_iter().rev() {
                if let Some(id) = self.parked.take() {
                    assert!(!self.cleaned_up, "unload after cleanup");
                    self.events.push(Event::HookUnload(hook, id));
                }
            }
        }

        fn unload_count(&self) -> usize {
            self.events
                .iter()
                .filter(|e| matches!(e, Event::Unload(_) | Event::HookUnload(..)))
                .count()
        }
    }

    impl CryptoLibrary for RecordingLibrary {
        type Provider = u32;

        fn initialize(&mut self) {
            self.events.push(Event::Init);
        }

        fn version_line(&self) -> String {
            "OpenSSL 3.0.0 test (CPUINFO: none)".into()
        }

        fn register_exit_hook(&mut self, hook: ExitHook) -> ProbeResult<()> {
            if self.refuse_hooks {
                return Err(ProbeError::HookRegistration(hook));
            }
            self.events.push(Event::Register(hook));
            self.hooks.push(hook);
            Ok(())
        }

        fn load_provider(&mut self, name: &str) -> ProbeResult<u32> {
            self.events.push(Event::Load);
            if self.fail_load {
                return Err(ProbeError::ProviderLoad {
                    name: name.to_string(),
                    report: vec!["provider not found".into()],
                });
            }
            self.next_id += 1;
            Ok(self.next_id)
        }

        fn unload(&mut self, provider: u32) {
            self.events.push(Event::Unload(provider));
        }

        fn park(&mut self, provider: u32) {
            assert!(self.parked.replace(provider).is_none());
            self.events.push(Event::Park(provider));
        }

        fn cleanup(&mut self) {
            self.cleaned_up = true;
            self.events.push(Event::Cleanup);
        }
    }

    fn run_mode(lib: &mut RecordingLibrary, raw: i64) -> (ProbeResult<()>, String) {
        let mut out = Vec::new();
        let result = run(lib, Mode::from_raw(raw), "legacy", &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_mode_zero_leaks_provider() {
        let mut lib = RecordingLibrary::default();
        let (result, _) = run_mode(&mut lib, 0);
        assert!(result.is_ok());
        lib.teardown();

        assert_eq!(lib.events, vec![Event::Init, Event::Load, Event::Park(1)]);
        assert_eq!(lib.unload_count(), 0);
    }

    #[test]
    fn test_mode_one_unloads_once_inline() {
        let mut lib = RecordingLibrary::default();
        let (result, stdout) = run_mode(&mut lib, 1);
        assert!(result.is_ok());
        lib.teardown();

        assert_eq!(stdout.lines().count(), 1);
        assert_eq!(lib.events, vec![Event::Init, Event::Load, Event::Unload(1)]);
        assert!(lib.hooks.is_empty());
        assert_eq!(lib.unload_count(), 1);
    }

    #[test]
    fn test_mode_two_registers_before_init() {
        let mut lib = RecordingLibrary::default();
        let (result, _) = run_mode(&mut lib, 2);
        assert!(result.is_ok());
        lib.teardown();

        assert_eq!(
            lib.events,
            vec![
                Event::Register(ExitHook::Process),
                Event::Init,
                Event::Load,
                Event::Park(1),
                Event::HookUnload(ExitHook::Process, 1),
            ]
        );
    }

    #[test]
    fn test_mode_three_registers_after_init() {
        let mut lib = RecordingLibrary::default();
        let (result, _) = run_mode(&mut lib, 3);
        assert!(result.is_ok());
        lib.teardown();

        assert_eq!(
            lib.events,
            vec![
                Event::Init,
                Event::Register(ExitHook::Process),
                Event::Load,
                Event::Park(1),
                Event::HookUnload(ExitHook::Process, 1),
            ]
        );
        assert_eq!(lib.unload_count(), 1);
    }

    #[test]
    fn test_mode_four_uses_library_hook() {
        let mut lib = RecordingLibrary::default();
        let (result, _) = run_mode(&mut lib, 4);
        assert!(result.is_ok());
        lib.teardown();

        assert_eq!(
            lib.events,
            vec![
                Event::Init,
                Event::Register(ExitHook::Library),
                Event::Load,
                Event::Park(1),
                Event::HookUnload(ExitHook::Library, 1),
            ]
        );
    }

    #[test]
    fn test_mode_five_cleans_up_without_unload() {
        let mut lib = RecordingLibrary::default();
        let (result, _) = run_mode(&mut lib, 5);
        assert!(result.is_ok());
        lib.teardown();

        assert_eq!(
            lib.events,
            vec![Event::Init, Event::Load, Event::Park(1), Event::Cleanup]
        );
        assert_eq!(lib.unload_count(), 0);
    }

    #[test]
    fn test_out_of_range_behaves_like_zero() {
        let mut zero = RecordingLibrary::default();
        let mut ninety_nine = RecordingLibrary::default();
        let (a, out_a) = run_mode(&mut zero, 0);
        let (b, out_b) = run_mode(&mut ninety_nine, 99);

        assert!(a.is_ok() && b.is_ok());
        assert_eq!(out_a, out_b);
        assert_eq!(zero.events, ninety_nine.events);
    }

    #[test]
    fn test_load_failure_is_fatal_in_every_mode() {
        for raw in 0..=5 {
            let mut lib = RecordingLibrary::failing();
            let (result, stdout) = run_mode(&mut lib, raw);

            match result {
                Err(ProbeError::ProviderLoad { name, report }) => {
                    assert_eq!(name, "legacy");
                    assert!(!report.is_empty());
                }
                other => panic!("mode {raw}: unexpected result {other:?}"),
            }
            assert_eq!(stdout.lines().count(), 1);
            assert_eq!(lib.events.last(), Some(&Event::Load));

            // A hook registered before the failed load finds nothing to unload.
            lib.teardown();
            assert_eq!(lib.unload_count(), 0);
        }
    }

    #[test]
    fn test_hook_refusal_is_not_fatal() {
        let mut lib = RecordingLibrary {
            refuse_hooks: true,
            ..RecordingLibrary::default()
        };
        let (result, _) = run_mode(&mut lib, 4);
        assert!(result.is_ok());
        assert_eq!(lib.events, vec![Event::Init, Event::Load, Event::Park(1)]);
    }

    #[test]
    fn test_version_line_written_once() {
        let mut lib = RecordingLibrary::default();
        let (_, stdout) = run_mode(&mut lib, 1);
        assert_eq!(stdout, "OpenSSL 3.0.0 test (CPUINFO: none)\n");
    }
}
