//! Fixed-size worker pool draining a shared FIFO task queue.
//!
//! N long-lived OS threads are spawned at construction and park on a condvar
//! while the queue is empty. `stop()` raises a flag and wakes everyone;
//! workers drain the remaining tasks before exiting, and `Drop` joins every
//! thread. The queue is unbounded — there is no backpressure signal to
//! callers, so sustained overload grows memory without bound (documented
//! limitation).

use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use thiserror::Error;

/// Worker pool construction failure. Inability to start a worker thread is
/// the one truly fatal condition in this layer and surfaces at construction.
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),
}

type Task = Box<dyn FnOnce() + Send + 'static>;

#[derive(Default)]
struct PoolState {
    tasks: VecDeque<Task>,
    stopped: bool,
    /// Tasks currently executing on a worker, tracked for `wait_idle`.
    in_flight: usize,
}

#[derive(Default)]
struct Shared {
    state: Mutex<PoolState>,
    /// Wakes workers when a task arrives or the pool stops.
    task_ready: Condvar,
    /// Wakes `wait_idle` callers when the queue drains and nothing runs.
    idle: Condvar,
}

/// Fixed set of workers created at construction; see module docs.
pub struct WorkerPool {
    shared: Arc<Shared>,
    workers: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawn `num_workers` named worker threads.
    pub fn new(num_workers: usize) -> Result<Self, PoolError> {
        let shared = Arc::new(Shared::default());
        let mut workers = Vec::with_capacity(num_workers);

        for i in 0..num_workers {
            let shared = Arc::clone(&shared);
            let handle = thread::Builder::new()
                .name(format!("tickforge-worker-{i}"))
                .spawn(move || worker_loop(&shared))?;
            workers.push(handle);
        }

        Ok(Self { shared, workers })
    }

    /// Append a unit of work and wake exactly one worker. Never blocks.
    pub fn execute<F>(&self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        {
            let mut state = self.lock_state();
            state.tasks.push_back(Box::new(task));
        }
        self.shared.task_ready.notify_one();
    }

    /// Raise the stop flag and wake all workers. Already-enqueued tasks are
    /// drained, not discarded; workers exit once the queue is empty.
    pub fn stop(&self) {
        {
            let mut state = self.lock_state();
            state.stopped = true;
        }
        self.shared.task_ready.notify_all();
        self.shared.idle.notify_all();
    }

    /// Number of tasks waiting in the queue (excludes tasks mid-execution).
    pub fn pending(&self) -> usize {
        self.lock_state().tasks.len()
    }

    /// Block until the queue is empty and no task is executing.
    ///
    /// A deterministic fence for fire-and-forget callers; returns immediately
    /// once the pool is idle or stopped-and-drained.
    pub fn wait_idle(&self) {
        let mut state = self.lock_state();
        while !state.tasks.is_empty() || state.in_flight > 0 {
            state = self
                .shared
                .idle
                .wait(state)
                .unwrap_or_else(|e| e.into_inner());
        }
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, PoolState> {
        self.shared.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.stop();
        for handle in self.workers.drain(..) {
            let _ = handle.join();
        }
    }
}

fn worker_loop(shared: &Shared) {
    loop {
        let task = {
            let mut state = shared.state.lock().unwrap_or_else(|e| e.into_inner());
            while state.tasks.is_empty() && !state.stopped {
                state = shared
                    .task_ready
                    .wait(state)
                    .unwrap_or_else(|e| e.into_inner());
            }
            if state.stopped && state.tasks.is_empty() {
                return;
            }
            let task = state.tasks.pop_front().expect("queue checked non-empty");
            state.in_flight += 1;
            task
        };

        // Execute outside the lock.
        task();

        let mut state = shared.state.lock().unwrap_or_else(|e| e.into_inner());
        state.in_flight -= 1;
        if state.tasks.is_empty() && state.in_flight == 0 {
            shared.idle.notify_all();
        }
    }
}
