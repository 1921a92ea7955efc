use crate::context::RunContext;
use crate::options::RunOptions;
use crate::unit::CheckUnit;
use glosscheck_types::{Artifact, CheckOutcome, CheckResult};
use std::any::Any;
use std::backtrace::Backtrace;
use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe, catch_unwind};
use std::sync::Once;
use tracing::warn;

thread_local! {
    /// Nesting depth of `run_guarded` on this thread.
    static GUARD_DEPTH: Cell<u32> = const { Cell::new(0) };
    /// Trace captured by the hook for the most recent guarded panic.
    static PANIC_TRACE: RefCell<Option<Backtrace>> = const { RefCell::new(None) };
}

static TRACE_HOOK: Once = Once::new();

/// Chain a panic hook that records a forced backtrace while the stack is still intact.
///
/// Panics outside a guard go to the previous hook unchanged. Guarded panics are reported
/// through the Error outcome and a `warn!` instead of stderr.
fn install_trace_hook() {
    TRACE_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if GUARD_DEPTH.with(Cell::get) > 0 {
                PANIC_TRACE.with(|slot| *slot.borrow_mut() = Some(Backtrace::force_capture()));
            } else {
                previous(info);
            }
        }));
    });
}

/// Marks the current thread as inside a guard until dropped, unwinding included.
struct GuardScope;

impl GuardScope {
    fn enter() -> Self {
        GUARD_DEPTH.with(|depth| depth.set(depth.get() + 1));
        PANIC_TRACE.with(|slot| slot.borrow_mut().take());
        GuardScope
    }
}

impl Drop for GuardScope {
    fn drop(&mut self) {
        GUARD_DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

fn take_panic_trace() -> String {
    PANIC_TRACE
        .with(|slot| slot.borrow_mut().take())
        .map(|trace| trace.to_string())
        .unwrap_or_else(|| "no backtrace captured (panic hook replaced)".to_string())
}

/// Run one check behind the fault boundary.
///
/// Never panics and never returns an error: a panic or an `Err` from the check becomes an
/// Error outcome attributed to the check's name. Results are always renamed to the
/// registered name so reports cannot be misattributed.
pub fn run_guarded(
    unit: &dyn CheckUnit,
    ctx: &RunContext,
    artifact: &Artifact,
    opts: &RunOptions,
) -> CheckOutcome {
    install_trace_hook();
    let name = unit.name();

    let caught = {
        let _scope = GuardScope::enter();
        catch_unwind(AssertUnwindSafe(|| unit.run(ctx, artifact, opts)))
    };

    match caught {
        Ok(Ok(mut outcome)) => {
            if outcome.result.name != name {
                outcome.result.name = name.to_string();
            }
            outcome
        }
        Ok(Err(err)) => {
            let message = format!("{err:#}");
            warn!(check = %name, error = %message, "check returned an error");
            CheckResult::error(name, message).into()
        }
        Err(payload) => {
            let trace = take_panic_trace();
            let description = panic_message(&*payload);
            warn!(check = %name, panic = %description, "check panicked");
            CheckResult::error(name, format!("panic: {description}\n{trace}")).into()
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
