//! Function-name dispatch and invocation responses.
//!
//! Callers name an operation and pass positional string arguments. Names may
//! be bare (`createHelloworld`) or qualified with the contract name
//! (`HelloworldContract:createHelloworld`).
//!
//! ## Payloads
//!
//! ```text
//! helloworldExists  → "true" | "false"
//! readHelloworld    → {"value":"<string>"}
//! create/update/delete → empty
//! ```

use helloworld_primitives::encode_record;

use crate::context::Context;
use crate::contract::{CONTRACT_NAME, ENTITY, HelloworldContract};
use crate::error::ContractError;

/// Status code of a successful invocation.
pub const STATUS_OK: u16 = 200;

/// Status code of a failed invocation.
pub const STATUS_ERROR: u16 = 500;

/// A contract callable by function name.
pub trait Contract {
    /// Namespace accepted as a `<name>:` prefix on function names.
    fn name(&self) -> &str;

    /// Run `function` with positional `args`, returning the response payload.
    fn invoke(
        &self,
        ctx: &mut Context<'_>,
        function: &str,
        args: &[&str],
    ) -> Result<Vec<u8>, ContractError>;
}

/// Outcome of one invocation as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// `STATUS_OK` or `STATUS_ERROR`.
    pub status: u16,
    /// Function result bytes. Empty on failure.
    pub payload: Vec<u8>,
    /// Error message on failure. Empty on success.
    pub message: String,
}

impl Response {
    pub fn success(payload: Vec<u8>) -> Self {
        Self {
            status: STATUS_OK,
            payload,
            message: String::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR,
            payload: Vec::new(),
            message: message.into(),
        }
    }

    /// Map an invocation result to a response.
    pub fn from_result(result: Result<Vec<u8>, ContractError>) -> Self {
        match result {
            Ok(payload) => Self::success(payload),
            Err(err) => Self::error(err.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// Strip an optional `<contract>:` qualifier.
///
/// Returns `None` when the qualifier names a different contract.
pub fn resolve_function<'f>(contract_name: &str, function: &'f str) -> Option<&'f str> {
    match function.split_once(':') {
        Some((namespace, name)) if namespace == contract_name => Some(name),
        Some(_) => None,
        None => Some(function),
    }
}

fn expect_args(function: &str, args: &[&str], expected: usize) -> Result<(), ContractError> {
    if args.len() != expected {
        return Err(ContractError::ArgumentCount {
            function: function.to_string(),
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

impl Contract for HelloworldContract {
    fn name(&self) -> &str {
        CONTRACT_NAME
    }

    fn invoke(
        &self,
        ctx: &mut Context<'_>,
        function: &str,
        args: &[&str],
    ) -> Result<Vec<u8>, ContractError> {
        let name = resolve_function(CONTRACT_NAME, function)
            .ok_or_else(|| ContractError::UnknownFunction(function.to_string()))?;

        match name {
            "helloworldExists" => {
                expect_args(name, args, 1)?;
                let exists = self.helloworld_exists(ctx, args[0])?;
                Ok(exists.to_string().into_bytes())
            }
            "createHelloworld" => {
                expect_args(name, args, 2)?;
                self.create_helloworld(ctx, args[0], args[1])?;
                Ok(Vec::new())
            }
            "readHelloworld" => {
                expect_args(name, args, 1)?;
                let record = self.read_helloworld(ctx, args[0])?;
                encode_record(&record).map_err(|source| ContractError::Encode {
                    entity: ENTITY,
                    key: args[0].to_string(),
                    source,
                })
            }
            "updateHelloworld" => {
                expect_args(name, args, 2)?;
                self.update_helloworld(ctx, args[0], args[1])?;
                Ok(Vec::new())
            }
            "deleteHelloworld" => {
                expect_args(name, args, 1)?;
                self.delete_helloworld(ctx, args[0])?;
                Ok(Vec::new())
            }
            _ => Err(ContractError::UnknownFunction(function.to_string())),
        }
    }
}
