//! Ошибки разрешения имён.

use thiserror::Error;

use crate::resolver::AddressFamily;

/// Ошибка разрешения одного семейства адресов.
///
/// Наружу через [`check_host`](crate::check_host) не выходит:
/// там она превращается в `None`.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Пустое имя домена.
    #[error("empty domain name")]
    EmptyDomain,

    /// Системный резолвер вернул ошибку.
    #[error("failed to resolve '{domain}': {source}")]
    Resolution {
        /// Домен, который не удалось разрешить.
        domain: String,
        /// Исходная ошибка резолвера.
        #[source]
        source: std::io::Error,
    },

    /// Домен разрешился, но адресов нужного семейства нет.
    #[error("no {family} addresses for '{domain}'")]
    NoAddresses {
        /// Домен.
        domain: String,
        /// Запрошенное семейство.
        family: AddressFamily,
    },
}
