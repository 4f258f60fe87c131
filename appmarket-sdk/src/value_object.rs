//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象，用于封装不可变的概念性值与校验逻辑。
//!

/// 值对象抽象
pub trait ValueObject {
    /// 业务校验失败时的错误类型
    type Error;

    /// 校验当前值是否满足不变量
    fn validate(&self) -> Result<(), Self::Error>;

    /// 便捷判断：校验通过即为合法
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
