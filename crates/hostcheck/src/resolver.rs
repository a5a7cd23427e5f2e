//! Резолвер имён и его системная реализация.

use std::{
    fmt,
    net::{IpAddr, ToSocketAddrs},
};

use serde::Serialize;

use crate::error::LookupError;

/// Семейство IP-адресов.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AddressFamily {
    /// Записи `A`.
    V4,
    /// Записи `AAAA`.
    V6,
}

impl AddressFamily {
    /// Тип DNS-записи для семейства.
    #[must_use]
    pub const fn record_type(&self) -> &'static str {
        match self {
            Self::V4 => "A",
            Self::V6 => "AAAA",
        }
    }

    /// Принадлежит ли адрес семейству.
    #[must_use]
    pub fn contains(&self, addr: &IpAddr) -> bool {
        match self {
            Self::V4 => addr.is_ipv4(),
            Self::V6 => addr.is_ipv6(),
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
        }
    }
}

/// Источник адресов для домена.
///
/// Отдельная точка расширения, чтобы разбор результатов можно было
/// проверять без сети.
pub trait Resolve {
    /// Возвращает адреса домена заданного семейства.
    ///
    /// Пустой список адресов реализация должна возвращать как
    /// [`LookupError::NoAddresses`].
    fn lookup(&self, domain: &str, family: AddressFamily) -> Result<Vec<IpAddr>, LookupError>;
}

/// Резолвер операционной системы (`getaddrinfo` через [`ToSocketAddrs`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl Resolve for SystemResolver {
    fn lookup(&self, domain: &str, family: AddressFamily) -> Result<Vec<IpAddr>, LookupError> {
        if domain.is_empty() {
            return Err(LookupError::EmptyDomain);
        }

        let addrs = (domain, 0)
            .to_socket_addrs()
            .map_err(|source| LookupError::Resolution { domain: domain.to_string(), source })?;

        let mut found: Vec<IpAddr> = Vec::new();
        for ip in addrs.map(|sa| sa.ip()).filter(|ip| family.contains(ip)) {
            // getaddrinfo отдаёт адрес по разу на каждый тип сокета
            if !found.contains(&ip) {
                found.push(ip);
            }
        }

        if found.is_empty() {
            return Err(LookupError::NoAddresses { domain: domain.to_string(), family });
        }
        Ok(found)
    }
}
