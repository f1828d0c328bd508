//! Ecosystem content and parameter queries. All of them require login.

use super::RpcRequest;
use serde_json::json;
use structopt::StructOpt;

/// Arguments of `getSections`.
#[derive(Debug, StructOpt)]
pub struct SectionsArgs {
    /// Language resource code, e.g. en or zh. Default en
    pub language: Option<String>,
    /// Offset, default 0
    pub offset: Option<i64>,
    /// Number of entries, default 25
    pub limit: Option<i64>,
}

/// Arguments naming one application.
#[derive(Debug, StructOpt)]
pub struct AppIdArgs {
    /// Application id
    pub app_id: i64,
}

/// Arguments of `appParams`.
#[derive(Debug, StructOpt)]
pub struct AppParamsArgs {
    /// Application id
    pub app_id: i64,
    /// Comma-separated parameter names, e.g. "name1,name2"
    pub names: Option<String>,
    /// Ecosystem id, default: current ecosystem
    pub ecosystem: Option<i64>,
    /// Offset, default 0
    pub offset: Option<i64>,
    /// Number of entries, default 10, at most 100
    pub limit: Option<i64>,
}

/// Arguments of `ecosystemParams`.
#[derive(Debug, StructOpt)]
pub struct EcosystemParamsArgs {
    /// Ecosystem id, default: current ecosystem
    pub ecosystem: Option<i64>,
    /// Comma-separated parameter names, e.g. "name1,name2"
    pub names: Option<String>,
    /// Offset, default 0
    pub offset: Option<i64>,
    /// Number of entries, default 10, at most 100
    pub limit: Option<i64>,
}

/// Arguments of `systemParams`.
#[derive(Debug, StructOpt)]
pub struct SystemParamsArgs {
    /// Comma-separated parameter names, e.g. "name1,name2"
    pub names: Option<String>,
    /// Offset, default 0
    pub offset: Option<i64>,
    /// Number of entries, default 10, at most 100
    pub limit: Option<i64>,
}

impl SectionsArgs {
    pub fn request(&self) -> RpcRequest {
        let params = vec![
            json!(self.language.clone().unwrap_or_default()),
            json!(self.offset.unwrap_or_default()),
            json!(self.limit.unwrap_or_default()),
        ];
        RpcRequest::new("getSections", params).with_login()
    }
}

impl AppIdArgs {
    pub fn request(&self) -> RpcRequest {
        RpcRequest::new("getAppContent", vec![json!(self.app_id)]).with_login()
    }
}

impl AppParamsArgs {
    pub fn request(&self) -> RpcRequest {
        let params = vec![
            json!(self.app_id),
            json!(self.names.clone().unwrap_or_default()),
            json!(self.ecosystem.unwrap_or_default()),
            json!(self.offset.unwrap_or_default()),
            json!(self.limit.unwrap_or_default()),
        ];
        RpcRequest::new("appParams", params).with_login()
    }
}

impl EcosystemParamsArgs {
    pub fn request(&self) -> RpcRequest {
        let params = vec![
            json!(self.ecosystem.unwrap_or_default()),
            json!(self.names.clone().unwrap_or_default()),
            json!(self.offset.unwrap_or_default()),
            json!(self.limit.unwrap_or_default()),
        ];
        RpcRequest::new("ecosystemParams", params).with_login()
    }
}

impl SystemParamsArgs {
    pub fn request(&self) -> RpcRequest {
        let params = vec![
            json!(self.names.clone().unwrap_or_default()),
            json!(self.offset.unwrap_or_default()),
            json!(self.limit.unwrap_or_default()),
        ];
        RpcRequest::new("systemParams", params).with_login()
    }
}
