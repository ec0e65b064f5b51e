use super::{MemoryStore, Registries};
use crate::errors::StorageError;
use donation_game_core::errors::{Error, Result};
use tokio::sync::{mpsc, oneshot};

// A job runs against the registries under the write lock. It carries its own
// reply channel, so the actor never needs to know the result type.
type Job = Box<dyn FnOnce(&mut Registries) + Send + 'static>;

/// Handle for sending mutations to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<Job>,
}

impl WriteHandle {
    /// Executes a mutation on the writer actor and waits for its result.
    ///
    /// Jobs run one at a time. A job must finish all existence checks before
    /// it mutates anything; returning `Err` after a mutation would leave the
    /// change in place.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut Registries) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let (ret_tx, ret_rx) = oneshot::channel();
        let job: Job = Box::new(move |registries| {
            // Receiver may be gone if the request was cancelled.
            let _ = ret_tx.send(job(registries));
        });

        self.tx
            .send(job)
            .await
            .map_err(|_| Error::from(StorageError::WriterStopped))?;

        ret_rx
            .await
            .map_err(|_| Error::from(StorageError::WriterStopped))?
    }
}

/// Spawns a background Tokio task that is the only writer to the registries.
///
/// The actor stops when every `WriteHandle` is dropped.
pub fn spawn_writer(store: MemoryStore) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<Job>(1024);

    tokio::spawn(async move {
        log::debug!("Registry writer started");
        while let Some(job) = rx.recv().await {
            let Ok(mut registries) = store.write() else {
                log::error!("Registry lock poisoned, writer stopping");
                break;
            };
            job(&mut *registries);
        }
        log::debug!("Registry writer stopped");
    });

    WriteHandle { tx }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_store, read_store};
    use donation_game_core::goals::{Goal, NewGoal};

    fn goal(name: &str) -> Goal {
        Goal::from(NewGoal {
            name: name.to_string(),
            item: "sapling".to_string(),
            amount: 10,
        })
    }

    #[tokio::test]
    async fn exec_returns_job_result() {
        let store = create_store();
        let writer = spawn_writer(store.clone());

        let count = writer
            .exec(|r| {
                r.goals.insert(goal("Trees")).ok();
                Ok(r.goals.len())
            })
            .await
            .unwrap();

        assert_eq!(count, 1);
        assert!(read_store(&store).unwrap().goals.contains("Trees"));
    }

    #[tokio::test]
    async fn exec_propagates_job_error() {
        let writer = spawn_writer(create_store());

        let err = writer
            .exec(|_| -> Result<()> { Err(Error::Repository("boom".to_string())) })
            .await
            .unwrap_err();

        assert_eq!(err, Error::Repository("boom".to_string()));
    }
}
