//! Local executor adapter for load tasks.

use futures::task::{LocalFutureObj, LocalSpawn, SpawnError};

#[derive(Debug, Clone, Copy, Default)]
/// [`LocalSpawn`] backed by `wasm_bindgen_futures::spawn_local`.
///
/// Off-browser there is no event loop to drive tasks, so spawning reports a shutdown executor.
pub struct BrowserSpawner;

impl LocalSpawn for BrowserSpawner {
    fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
        #[cfg(target_arch = "wasm32")]
        {
            wasm_bindgen_futures::spawn_local(future);
            Ok(())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            drop(future);
            Err(SpawnError::shutdown())
        }
    }
}
