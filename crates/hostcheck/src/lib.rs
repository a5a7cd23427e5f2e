//! Проверка DNS-записей домена через системный резолвер.
//!
//! Для каждого домена отдельно определяются IPv4- и IPv6-адреса.
//! Неудачное разрешение не является ошибкой для вызывающего: оно
//! превращается в отсутствие результата (`None`) для своего семейства.
//!
//! # Примеры
//!
//! ```
//! use hostcheck::{SystemResolver, check_host};
//!
//! let report = check_host(&SystemResolver, "localhost");
//! assert_eq!(report.domain, "localhost");
//! ```

pub mod error;
pub mod report;
pub mod resolver;

pub use error::LookupError;
pub use report::{HostReport, check_host, check_hosts};
pub use resolver::{AddressFamily, Resolve, SystemResolver};
