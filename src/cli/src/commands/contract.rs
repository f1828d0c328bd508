//! Contract and UTXO calls.

use super::{parse_json_arg, RpcRequest};
use crate::errors::CliError;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use structopt::StructOpt;

/// Arguments of `callContract`.
#[derive(Debug, StructOpt)]
pub struct CallContractArgs {
    /// Contract name
    pub name: String,
    /// Contract parameters, a JSON object
    pub params: Option<String>,
    /// Expedite fee, unit: QIBAX
    pub expedite: Option<String>,
    /// Contract parameters file, a JSON object. Takes priority over inline parameters
    #[structopt(short, long, parse(from_os_str))]
    pub file: Option<PathBuf>,
}

/// Kinds of UTXO transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtxoKind {
    Transfer,
    ContractToUtxo,
    UtxoToContract,
}

impl FromStr for UtxoKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches("Type") {
            "Transfer" => Ok(UtxoKind::Transfer),
            "ContractToUTXO" => Ok(UtxoKind::ContractToUtxo),
            "UTXOToContract" => Ok(UtxoKind::UtxoToContract),
            _ => Err(format!(
                "Invalid type: {s}. Valid options: Transfer, ContractToUTXO, UTXOToContract"
            )),
        }
    }
}

impl UtxoKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UtxoKind::Transfer => "Transfer",
            UtxoKind::ContractToUtxo => "ContractToUTXO",
            UtxoKind::UtxoToContract => "UTXOToContract",
        }
    }
}

/// Arguments of `callUtxo`.
#[derive(Debug, StructOpt)]
pub struct CallUtxoArgs {
    /// Transfer || ContractToUTXO || UTXOToContract
    pub kind: UtxoKind,
    /// UTXO parameters: {"recipient": "...", "amount": "1", "comment": ""}
    pub params: String,
    /// Expedite fee, unit: QIBAX
    pub expedite: Option<String>,
}

impl CallContractArgs {
    pub fn request(&self) -> Result<RpcRequest, CliError> {
        let params = match (&self.file, &self.params) {
            (Some(file), _) => {
                let contents = fs::read_to_string(file)?;
                parse_params(&contents)?
            }
            (None, Some(inline)) => parse_params(inline)?,
            (None, None) => json!({}),
        };
        let mut call = vec![json!(self.name), params];
        if let Some(expedite) = &self.expedite {
            call.push(json!(expedite));
        }
        Ok(RpcRequest::new("callContract", call).with_login())
    }
}

impl CallUtxoArgs {
    pub fn request(&self) -> Result<RpcRequest, CliError> {
        let mut call = vec![json!(self.kind.as_str()), parse_params(&self.params)?];
        if let Some(expedite) = &self.expedite {
            call.push(json!(expedite));
        }
        Ok(RpcRequest::new("callUtxo", call).with_login())
    }
}

fn parse_params(raw: &str) -> Result<Value, CliError> {
    let value = parse_json_arg(raw).map_err(|reason| CliError::InvalidArgument {
        what: "params",
        reason,
    })?;
    if !value.is_object() {
        return Err(CliError::InvalidArgument {
            what: "params",
            reason: "expected a JSON object".to_string(),
        });
    }
    Ok(value)
}
