//! # Contract Entry Point
//!
//! Inbound port through which a registry is invoked by function name, the
//! way a peer dispatches a transaction proposal. Arguments arrive as byte
//! strings; replies are JSON documents wrapped in an [`InvokeResponse`].

use super::invoker::InvokeResponse;
use crate::codec;
use crate::context::TransactionContext;
use crate::domain::RegistryError;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// Dispatch-level failures.
#[derive(Debug, Error)]
pub enum ContractError {
    /// No function with this name is exported.
    #[error("function {0} not found")]
    UnknownFunction(String),

    /// A positional argument is missing.
    #[error("{function}: missing argument `{name}`")]
    MissingArgument {
        /// Invoked function.
        function: String,
        /// Argument name.
        name: &'static str,
    },

    /// A positional argument could not be parsed.
    #[error("{function}: invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Invoked function.
        function: String,
        /// Argument name.
        name: &'static str,
        /// Parse failure.
        reason: String,
    },

    /// The registry operation itself failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Positional string arguments of one invocation.
#[derive(Clone, Debug)]
pub struct Args {
    function: String,
    values: Vec<String>,
}

impl Args {
    /// Arguments for `function`.
    pub fn new(function: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            function: function.into(),
            values,
        }
    }

    /// Invoked function name.
    pub fn function(&self) -> &str {
        &self.function
    }

    /// String argument at `index`.
    pub fn string(&self, index: usize, name: &'static str) -> Result<&str, ContractError> {
        self.values
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| ContractError::MissingArgument {
                function: self.function.clone(),
                name,
            })
    }

    /// Non-negative integer argument at `index` (window sizes).
    pub fn minutes(&self, index: usize, name: &'static str) -> Result<u32, ContractError> {
        let raw = self.string(index, name)?;
        raw.trim()
            .parse()
            .map_err(|e: std::num::ParseIntError| ContractError::InvalidArgument {
                function: self.function.clone(),
                name,
                reason: e.to_string(),
            })
    }
}

/// A registry reachable by function name.
pub trait ContractHandler: Send + Sync {
    /// Deployed contract name.
    fn name(&self) -> &str;

    /// Execute `args.function()` and return the JSON reply.
    fn call(&self, ctx: &TransactionContext<'_>, args: &Args) -> Result<Vec<u8>, ContractError>;
}

/// Serialize an entry-point result as the reply payload.
pub fn reply<T: Serialize>(kind: &'static str, value: &T) -> Result<Vec<u8>, ContractError> {
    Ok(codec::encode_response(kind, value)?)
}

/// Route raw invocation arguments to `handler`.
///
/// `raw[0]` is the function name. Every failure becomes an error response;
/// nothing is retried.
pub fn dispatch(
    handler: &dyn ContractHandler,
    ctx: &TransactionContext<'_>,
    raw: &[Vec<u8>],
) -> InvokeResponse {
    let Some((function, rest)) = raw.split_first() else {
        return InvokeResponse::error("missing function name");
    };
    let function = String::from_utf8_lossy(function).into_owned();
    let mut values = Vec::with_capacity(rest.len());
    for (index, value) in rest.iter().enumerate() {
        match String::from_utf8(value.clone()) {
            Ok(text) => values.push(text),
            Err(e) => {
                return InvokeResponse::error(format!(
                    "{function}: argument {index} is not valid UTF-8: {e}"
                ))
            }
        }
    }

    let args = Args::new(function, values);
    match handler.call(ctx, &args) {
        Ok(payload) => InvokeResponse::success(payload),
        Err(err) => {
            warn!(
                contract = handler.name(),
                function = args.function(),
                tx_id = ctx.tx_id(),
                error = %err,
                "invocation failed"
            );
            InvokeResponse::error(err.to_string())
        }
    }
}
