use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Panic-safe (the previous values are restored on unwind) and serialized
/// against other scoped-env callers, so parallel tests cannot trample the
/// process-global environment.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK poisoned");
    let _guard = RestoreEnv::apply(changes);
    f()
}

struct RestoreEnv {
    // Snapshot in application order; restored in reverse so repeated keys
    // unwind correctly.
    snapshot: Vec<(String, Option<String>)>,
}

impl RestoreEnv {
    fn apply(changes: &[(&str, Option<&str>)]) -> Self {
        let mut snapshot = Vec::with_capacity(changes.len());
        for (key, value) in changes {
            snapshot.push((key.to_string(), std::env::var(key).ok()));
            match value {
                Some(val) => std::env::set_var(key, val),
                None => std::env::remove_var(key),
            }
        }
        Self { snapshot }
    }
}

impl Drop for RestoreEnv {
    fn drop(&mut self) {
        for (key, previous) in self.snapshot.drain(..).rev() {
            match previous {
                Some(val) => std::env::set_var(&key, val),
                None => std::env::remove_var(&key),
            }
        }
    }
}
