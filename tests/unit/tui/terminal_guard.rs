use super::*;
use std::sync::atomic::AtomicUsize;

#[derive(Default)]
struct CountingOps {
    setups: AtomicUsize,
    restores: AtomicUsize,
}

impl TerminalOps for Arc<CountingOps> {
    fn setup(&self) -> io::Result<()> {
        self.setups.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn restore(&self) -> io::Result<()> {
        self.restores.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[test]
fn guard_restores_exactly_once() {
    let ops = Arc::new(CountingOps::default());
    let guard = TerminalGuard::with_ops(Arc::new(ops.clone())).unwrap();
    assert_eq!(ops.setups.load(Ordering::SeqCst), 1);

    let restorer = guard.restorer();
    restorer.restore().unwrap();
    assert_eq!(ops.restores.load(Ordering::SeqCst), 1);

    // The drop and any further explicit restores are no-ops.
    drop(guard);
    restorer.restore().unwrap();
    assert_eq!(ops.restores.load(Ordering::SeqCst), 1);
}

#[test]
fn termination_signals_map_to_shell_exit_codes() {
    assert_eq!(TerminationSignal::SigInt.exit_code(), 130);
    assert_eq!(TerminationSignal::SigTerm.exit_code(), 143);
}
