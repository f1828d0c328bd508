//! Table and contract listing queries. All of them require login.

use super::{parse_json_arg, RpcRequest};
use crate::errors::CliError;
use serde_json::{json, Map, Value};
use structopt::StructOpt;

/// Offset and limit of a listing.
#[derive(Debug, StructOpt)]
pub struct PageArgs {
    /// Offset, default 0
    pub offset: Option<i64>,
    /// Number of entries, default 25
    pub limit: Option<i64>,
}

/// Arguments naming one table or contract.
#[derive(Debug, StructOpt)]
pub struct NameArgs {
    /// Name
    pub name: String,
}

/// Arguments of `getRow`.
#[derive(Debug, StructOpt)]
pub struct GetRowArgs {
    /// Table name
    pub table: String,
    /// Comma-separated columns to return
    pub columns: Option<String>,
    /// Column to match the id against
    pub where_column: Option<String>,
    /// The entry id
    #[structopt(short, long)]
    pub id: i64,
}

/// Arguments of `getList`.
#[derive(Debug, StructOpt)]
pub struct GetListArgs {
    /// Table name
    pub table: String,
    /// Number of entries, 0 for the node default of 25
    #[structopt(short = "l", long = "limit", default_value = "0")]
    pub limit: i64,
    /// Offset
    #[structopt(short = "t", long = "offset", default_value = "0")]
    pub offset: i64,
    /// Sorting method, default id ASC
    #[structopt(short = "r", long = "order")]
    pub order: Option<String>,
    /// Comma-separated columns to return, default all
    #[structopt(short = "c", long = "columns")]
    pub columns: Option<String>,
    /// Query conditions, e.g. {"id":{"$gt":2},"name":{"$eq":"john"}}
    #[structopt(short = "w", long = "where")]
    pub where_: Option<String>,
}

/// Arguments of `getHistory`.
#[derive(Debug, StructOpt)]
pub struct HistoryArgs {
    /// Table name
    pub table: String,
    /// The entry id
    pub id: u64,
}

impl PageArgs {
    pub fn request(&self, method: &'static str) -> RpcRequest {
        let params = [self.offset, self.limit]
            .iter()
            .map(|v| json!(v.unwrap_or_default()))
            .collect();
        RpcRequest::new(method, params).with_login()
    }
}

impl NameArgs {
    pub fn request(&self, method: &'static str) -> RpcRequest {
        RpcRequest::new(method, vec![json!(self.name)]).with_login()
    }
}

impl GetRowArgs {
    pub fn request(&self) -> RpcRequest {
        let mut params = vec![json!(self.table), json!(self.id)];
        params.push(json!(self.columns.clone().unwrap_or_default()));
        params.push(json!(self.where_column.clone().unwrap_or_default()));
        RpcRequest::new("getRow", params).with_login()
    }
}

impl GetListArgs {
    pub fn request(&self) -> Result<RpcRequest, CliError> {
        let mut query = Map::new();
        query.insert("name".to_string(), json!(self.table));
        if self.limit > 0 {
            query.insert("limit".to_string(), json!(self.limit));
        }
        if self.offset > 0 {
            query.insert("offset".to_string(), json!(self.offset));
        }
        if let Some(order) = &self.order {
            // accept both a JSON order object and a plain "column desc"
            let order = parse_json_arg(order).unwrap_or_else(|_| json!(order));
            query.insert("order".to_string(), order);
        }
        if let Some(columns) = &self.columns {
            query.insert("columns".to_string(), json!(columns));
        }
        if let Some(where_) = &self.where_ {
            let condition = parse_json_arg(where_).map_err(|reason| CliError::InvalidArgument {
                what: "where",
                reason,
            })?;
            query.insert("where".to_string(), condition);
        }
        Ok(RpcRequest::new("getList", vec![Value::Object(query)]).with_login())
    }
}

impl HistoryArgs {
    pub fn request(&self) -> RpcRequest {
        RpcRequest::new("getHistory", vec![json!(self.table), json!(self.id)]).with_login()
    }
}
