//! 存储文档
//!
//! 存储写入的是信封 `{aggregate_type, aggregate_id, saved_at, payload}`，
//! 聚合自身的文档（加盟商即 `{id, nombre, sucursales}`）原样放在 `payload` 中。
//!
use crate::{
    aggregate::Aggregate,
    error::{DomainError, DomainResult as Result},
};
use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 存储中的一条聚合文档：`payload` 为聚合的完整 JSON 表示，外加类型与写入时间
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
pub struct StoredDocument {
    aggregate_type: String,
    aggregate_id: String,
    saved_at: DateTime<Utc>,
    payload: Value,
}

impl StoredDocument {
    pub fn aggregate_type(&self) -> &str {
        &self.aggregate_type
    }

    pub fn aggregate_id(&self) -> &str {
        &self.aggregate_id
    }

    pub fn saved_at(&self) -> DateTime<Utc> {
        self.saved_at
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// 从聚合实例创建文档
    pub fn from_aggregate<A>(aggregate: &A) -> Result<Self>
    where
        A: Aggregate,
    {
        Ok(Self::builder()
            .aggregate_type(A::TYPE.to_string())
            .aggregate_id(aggregate.id().to_string())
            .saved_at(Utc::now())
            .payload(serde_json::to_value(aggregate)?)
            .build())
    }

    /// 将文档反序列化为新的聚合实例
    pub fn to_aggregate<A>(&self) -> Result<A>
    where
        A: Aggregate,
    {
        if A::TYPE != self.aggregate_type {
            return Err(DomainError::TypeMismatch {
                expected: A::TYPE.to_string(),
                found: self.aggregate_type.clone(),
            });
        }

        let aggregate = serde_json::from_value(self.payload.clone())?;
        Ok(aggregate)
    }
}
