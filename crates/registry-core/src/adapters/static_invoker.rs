use crate::ports::{InvokeResponse, RegistryInvoker};
use parking_lot::RwLock;
use std::collections::HashMap;

/// One recorded cross-registry call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedCall {
    pub target: String,
    pub namespace: String,
    pub args: Vec<String>,
}

/// Invoker that replays scripted responses by function name.
///
/// Unscripted functions answer with an error response.
#[derive(Debug, Default)]
pub struct StaticInvoker {
    responses: RwLock<HashMap<String, InvokeResponse>>,
    calls: RwLock<Vec<RecordedCall>>,
}

impl StaticInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the response returned for `function`.
    pub fn respond(&self, function: &str, response: InvokeResponse) {
        self.responses.write().insert(function.to_string(), response);
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.read().clone()
    }
}

impl RegistryInvoker for StaticInvoker {
    fn invoke_registry(&self, target: &str, args: &[Vec<u8>], namespace: &str) -> InvokeResponse {
        let args: Vec<String> = args
            .iter()
            .map(|arg| String::from_utf8_lossy(arg).into_owned())
            .collect();
        let function = args.first().cloned().unwrap_or_default();

        self.calls.write().push(RecordedCall {
            target: target.to_string(),
            namespace: namespace.to_string(),
            args,
        });

        self.responses
            .read()
            .get(&function)
            .cloned()
            .unwrap_or_else(|| InvokeResponse::error(format!("no scripted response for {function}")))
    }
}
