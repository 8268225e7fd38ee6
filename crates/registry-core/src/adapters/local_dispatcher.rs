use crate::context::{new_tx_id, TransactionContext};
use crate::ports::{dispatch, Clock, ContractHandler, InvokeResponse, RegistryInvoker, WorldState};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

struct Deployment {
    handler: Arc<dyn ContractHandler>,
    state: Arc<dyn WorldState>,
}

/// In-process deployment of several registries sharing one namespace map.
///
/// Each registry gets its own world state. Invocations run the target's
/// handler against that state with a fresh correlation id, and bind the
/// dispatcher itself as invoker so registries can call each other.
pub struct LocalDispatcher {
    deployments: RwLock<HashMap<(String, String), Deployment>>,
    clock: Arc<dyn Clock>,
}

impl LocalDispatcher {
    /// Empty dispatcher reading time from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            deployments: RwLock::new(HashMap::new()),
            clock,
        }
    }

    /// Deploy `handler` under its own name in `namespace`, replacing any
    /// previous deployment of that name.
    pub fn deploy(
        &self,
        namespace: &str,
        handler: Arc<dyn ContractHandler>,
        state: Arc<dyn WorldState>,
    ) {
        let name = handler.name().to_string();
        debug!(namespace, registry = %name, "registry deployed");
        self.deployments
            .write()
            .insert((namespace.to_string(), name), Deployment { handler, state });
    }

    /// Invoke `target` with string arguments; `args[0]` is the function.
    pub fn invoke(&self, namespace: &str, target: &str, args: &[&str]) -> InvokeResponse {
        let raw: Vec<Vec<u8>> = args.iter().map(|arg| arg.as_bytes().to_vec()).collect();
        self.invoke_registry(target, &raw, namespace)
    }
}

impl RegistryInvoker for LocalDispatcher {
    fn invoke_registry(&self, target: &str, args: &[Vec<u8>], namespace: &str) -> InvokeResponse {
        let deployment = self
            .deployments
            .read()
            .get(&(namespace.to_string(), target.to_string()))
            .map(|d| (Arc::clone(&d.handler), Arc::clone(&d.state)));

        let Some((handler, state)) = deployment else {
            return InvokeResponse::error(format!(
                "registry {target} is not deployed in namespace {namespace}"
            ));
        };

        let tx_id = new_tx_id();
        let ctx = TransactionContext::new(state.as_ref(), self.clock.as_ref())
            .with_invoker(self)
            .with_tx_id(&tx_id);
        dispatch(handler.as_ref(), &ctx, args)
    }
}
