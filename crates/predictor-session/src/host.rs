use std::any::Any;
use std::thread::JoinHandle;

type BoxAny = Box<dyn Any + Send>;

struct Call<M> {
    f: Box<dyn FnOnce(&mut M) -> BoxAny + Send>,
    ret: crossbeam::channel::Sender<BoxAny>,
}

/// Owns the inference worker: a dedicated thread holding the model.
///
/// All access goes through a [`ModelAccessor`], which runs closures against
/// the model on the worker thread and blocks the caller for the result, so
/// the model is never touched from two threads at once.
pub struct ModelHost<M> {
    accessor: ModelAccessor<M>,
    abort_tx: crossbeam::channel::Sender<()>,
    join_handle: Option<JoinHandle<()>>,
}

impl<M: Send + 'static> ModelHost<M> {
    pub fn spawn(model: M) -> Self {
        let (abort_tx, abort_rx) = crossbeam::channel::unbounded::<()>();
        let (tx, rx) = crossbeam::channel::unbounded::<Call<M>>();
        let join_handle = std::thread::spawn(move || {
            let mut m = model;
            loop {
                crossbeam::channel::select! {
                    recv(rx) -> call => {
                        match call {
                            Ok(Call { f, ret }) => {
                                let r = f(&mut m);
                                let _ = ret.send(r);
                            }
                            Err(_) => break,
                        }
                    }
                    recv(abort_rx) -> _ => {
                        break;
                    }
                }
            }
        });
        Self {
            accessor: ModelAccessor { tx },
            abort_tx,
            join_handle: Some(join_handle),
        }
    }

    pub fn accessor(&self) -> ModelAccessor<M> {
        self.accessor.clone()
    }

    /// Stop the worker thread and join it. Safe to call more than once; later
    /// calls are no-ops.
    pub fn release(&mut self) {
        if let Some(handle) = self.join_handle.take() {
            let _ = self.abort_tx.send(());
            let _ = handle.join();
        }
    }
}

impl<M> Drop for ModelHost<M> {
    fn drop(&mut self) {
        if let Some(handle) = self.join_handle.take() {
            let _ = self.abort_tx.send(());
            let _ = handle.join();
        }
    }
}

/// Cloneable handle to the model living on the worker thread.
pub struct ModelAccessor<M> {
    tx: crossbeam::channel::Sender<Call<M>>,
}

impl<M> Clone for ModelAccessor<M> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<M> ModelAccessor<M> {
    /// Run `f` against the model on the worker thread, blocking until it
    /// returns. Panics if the worker has already been released.
    pub fn with<R: Send + 'static>(&self, f: impl FnOnce(&mut M) -> R + Send + 'static) -> R {
        let (ret_tx, ret_rx) = crossbeam::channel::bounded(1);
        let _ = self.tx.send(Call {
            f: Box::new(move |m| Box::new(f(m)) as BoxAny),
            ret: ret_tx,
        });
        let r = ret_rx.recv().expect("inference worker is gone");
        *r.downcast::<R>().expect("worker returned the wrong type")
    }
}
