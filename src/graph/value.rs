//! 边权与流量的数值约束

use num_traits::Signed;
use std::fmt::Debug;

/// 最短路边权/距离类型
///
/// `infinity()` 取类型最大值作为"不可达"哨兵；`accumulate` 在整数上饱和，
/// 松弛运算永远不会回绕。
pub trait Weight: Copy + PartialOrd + Debug {
    fn zero() -> Self;

    fn infinity() -> Self;

    fn accumulate(self, weight: Self) -> Self;
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    0
                }

                fn infinity() -> Self {
                    <$t>::MAX
                }

                fn accumulate(self, weight: Self) -> Self {
                    self.saturating_add(weight)
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    0.0
                }

                fn infinity() -> Self {
                    <$t>::MAX
                }

                fn accumulate(self, weight: Self) -> Self {
                    self + weight
                }
            }
        )*
    };
}

impl_integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_float_weight!(f32, f64);

/// 容量/流量类型
///
/// 残量调整需要对反向边取负，因此只接受有符号整数和浮点数。
/// 整数上的加减溢出时返回 `None`；浮点数按 IEEE 语义运算，不会溢出。
pub trait FlowValue: Signed + Copy + PartialOrd + Debug {
    fn add_checked(self, other: Self) -> Option<Self>;

    fn sub_checked(self, other: Self) -> Option<Self>;
}

macro_rules! impl_integer_flow {
    ($($t:ty),*) => {
        $(
            impl FlowValue for $t {
                fn add_checked(self, other: Self) -> Option<Self> {
                    self.checked_add(other)
                }

                fn sub_checked(self, other: Self) -> Option<Self> {
                    self.checked_sub(other)
                }
            }
        )*
    };
}

macro_rules! impl_float_flow {
    ($($t:ty),*) => {
        $(
            impl FlowValue for $t {
                fn add_checked(self, other: Self) -> Option<Self> {
                    Some(self + other)
                }

                fn sub_checked(self, other: Self) -> Option<Self> {
                    Some(self - other)
                }
            }
        )*
    };
}

impl_integer_flow!(i8, i16, i32, i64, i128, isize);
impl_float_flow!(f32, f64);
