//! 整数安全运算
//!
//! 构造大容量或大边权时使用的辅助函数，避免乘法溢出。
//! 所有操作数都要求非负。

use num_traits::PrimInt;

/// 计算 `a / b` 的上取整
pub fn ceil_div<T: PrimInt>(a: T, b: T) -> T {
    debug_assert!(a >= T::zero() && b > T::zero());
    let carry = if a % b == T::zero() {
        T::zero()
    } else {
        T::one()
    };
    a / b + carry
}

/// 不溢出地判断 `a * b < c`
pub fn multiply_less<T: PrimInt>(a: T, b: T, c: T) -> bool {
    debug_assert!(a >= T::zero() && b >= T::zero() && c >= T::zero());
    if b == T::zero() {
        c > T::zero()
    } else {
        a < ceil_div(c, b)
    }
}

/// 不溢出地判断 `a * b > c`
pub fn multiply_greater<T: PrimInt>(a: T, b: T, c: T) -> bool {
    debug_assert!(a >= T::zero() && b >= T::zero() && c >= T::zero());
    b != T::zero() && a > c / b
}

/// 快速幂，复杂度 O(log exp)
///
/// 结果溢出时行为与普通乘法相同；需要检测溢出请用 [`checked_ipow`]。
pub fn ipow<T: PrimInt>(mut base: T, mut exp: T) -> T {
    debug_assert!(base >= T::zero() && exp >= T::zero());
    let two = T::one() + T::one();
    let mut result = T::one();
    while exp > T::zero() {
        if exp % two == T::one() {
            result = result * base;
        }
        exp = exp / two;
        // 最后一轮不再平方，避免多余的溢出
        if exp > T::zero() {
            base = base * base;
        }
    }
    result
}

/// 快速幂，溢出时返回 `None`
pub fn checked_ipow<T: PrimInt>(mut base: T, mut exp: T) -> Option<T> {
    debug_assert!(base >= T::zero() && exp >= T::zero());
    let two = T::one() + T::one();
    let mut result = T::one();
    while exp > T::zero() {
        if exp % two == T::one() {
            result = result.checked_mul(&base)?;
        }
        exp = exp / two;
        if exp > T::zero() {
            base = base.checked_mul(&base)?;
        }
    }
    Some(result)
}
