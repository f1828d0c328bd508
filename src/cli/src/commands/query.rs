//! Chain queries that need no login.

use super::RpcRequest;
use serde_json::{json, Value};
use structopt::StructOpt;

/// Arguments naming one account.
#[derive(Debug, StructOpt)]
pub struct AccountArgs {
    /// Account address: "xxxx-xxxx-xxxx-xxxx-xxxx"
    pub account: String,
}

/// Arguments of `getBalance`.
#[derive(Debug, StructOpt)]
pub struct BalanceArgs {
    /// Account address, default: current account
    pub account: Option<String>,
    /// Ecosystem id, default: 1
    pub ecosystem: Option<i64>,
}

/// Arguments of `getConfig`.
#[derive(Debug, StructOpt)]
pub struct OptionArgs {
    /// Config option, e.g. centrifugo
    pub option: String,
}

/// A starting block and an optional count.
#[derive(Debug, StructOpt)]
pub struct BlockRangeArgs {
    /// The starting block height
    pub block_id: i64,
    /// The number of blocks, default 25, at most 100
    pub count: Option<i64>,
}

/// Arguments naming one block by id.
#[derive(Debug, StructOpt)]
pub struct BlockIdArgs {
    /// Block id
    pub block_id: i64,
}

/// Arguments naming one block by id or hash.
#[derive(Debug, StructOpt)]
pub struct BlockOrHashArgs {
    /// Block id or block hash
    pub block: String,
}

/// Arguments naming one ecosystem.
#[derive(Debug, StructOpt)]
pub struct EcosystemArgs {
    /// Ecosystem id
    pub ecosystem: i64,
}

/// Arguments of `getMemberInfo`.
#[derive(Debug, StructOpt)]
pub struct MemberArgs {
    /// Account address
    pub account: String,
    /// Ecosystem id
    pub ecosystem: i64,
}

impl AccountArgs {
    pub fn request(&self, method: &'static str) -> RpcRequest {
        RpcRequest::new(method, vec![json!(self.account)])
    }
}

impl BalanceArgs {
    pub fn request(&self) -> RpcRequest {
        let mut params = vec![json!(self.account.clone().unwrap_or_default())];
        if let Some(ecosystem) = self.ecosystem {
            params.push(json!(ecosystem));
        }
        RpcRequest::new("getBalance", params)
    }
}

impl OptionArgs {
    pub fn request(&self) -> RpcRequest {
        RpcRequest::new("getConfig", vec![json!(self.option)])
    }
}

impl BlockRangeArgs {
    pub fn request(&self, method: &'static str) -> RpcRequest {
        let mut params = vec![json!(self.block_id)];
        if let Some(count) = self.count {
            params.push(json!(count));
        }
        RpcRequest::new(method, params)
    }
}

impl BlockIdArgs {
    pub fn request(&self) -> RpcRequest {
        RpcRequest::new("getBlockInfo", vec![json!(self.block_id)])
    }
}

impl BlockOrHashArgs {
    pub fn request(&self, method: &'static str) -> RpcRequest {
        RpcRequest::new(method, vec![block_or_hash(&self.block)])
    }
}

impl EcosystemArgs {
    pub fn request(&self) -> RpcRequest {
        RpcRequest::new("ecosystemInfo", vec![json!(self.ecosystem)])
    }
}

impl MemberArgs {
    pub fn request(&self) -> RpcRequest {
        RpcRequest::new("getMemberInfo", vec![json!(self.account), json!(self.ecosystem)])
    }
}

/// A numeric argument is a block id, anything else a block hash.
fn block_or_hash(raw: &str) -> Value {
    match raw.parse::<i64>() {
        Ok(id) => json!({ "id": id }),
        Err(_) => json!({ "hash": raw }),
    }
}
