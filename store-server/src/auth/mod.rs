//! 认证模块
//!
//! JWT 签发/验证、请求提取器、密码哈希。

pub mod extractor;
pub mod jwt;
pub mod password;

pub use extractor::StoreOwner;
pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use password::{hash_password, verify_password};
