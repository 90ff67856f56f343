//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象，用于封装名称与库存等带校验的概念。
//!
use crate::error::{DomainError, DomainResult};
use franchise_macros::value_object;
use std::fmt;

/// 值对象抽象
pub trait ValueObject {
    /// 业务校验失败时的错误类型
    type Error;

    /// 创建值对象时进行验证
    fn validate(&self) -> Result<(), Self::Error>;
}

/// 名称（加盟商、分店、产品共用）
///
/// 去除首尾空白后不得为空；保存的是调用方给出的原始文本。
///
/// ```
/// use franchise_domain::value_object::Name;
///
/// assert!(Name::parse("  North  ").is_ok());
/// assert!(Name::parse("   ").is_err());
/// ```
#[value_object]
#[derive(Hash)]
#[serde(try_from = "String")]
pub struct Name(String);

impl Name {
    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        let name = Self(value.into());
        name.validate()?;
        Ok(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 忽略大小写比较（按 Unicode 小写逐字符比较）
    pub fn eq_ignore_case(&self, other: &str) -> bool {
        self.0
            .chars()
            .flat_map(char::to_lowercase)
            .eq(other.chars().flat_map(char::to_lowercase))
    }
}

impl ValueObject for Name {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.0.trim().is_empty() {
            return Err(DomainError::invalid_value("name must not be blank"));
        }
        Ok(())
    }
}

// 反序列化同样经过校验，存储中的空白名称无法被加载
impl TryFrom<String> for Name {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// 库存数量，恒为非负
///
/// 入参允许为有符号整数，便于在边界处拒绝负数而不是在类型转换时截断。
#[value_object]
#[derive(Copy, Hash, PartialOrd, Ord, Default)]
#[serde(transparent)]
pub struct Stock(u32);

impl Stock {
    pub fn new(value: i64) -> DomainResult<Self> {
        if value < 0 {
            return Err(DomainError::invalid_value(format!(
                "stock must not be negative: {value}"
            )));
        }
        let value = u32::try_from(value)
            .map_err(|_| DomainError::invalid_value(format!("stock out of range: {value}")))?;
        Ok(Self(value))
    }

    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl ValueObject for Stock {
    type Error = DomainError;

    // u32 已保证非负，这里只保留统一的校验入口
    fn validate(&self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Stock {
    fn from(value: u32) -> Self {
        Self(value)
    }
}
