//! Итог проверки домена по обоим семействам адресов.

use std::{
    fmt,
    net::{IpAddr, Ipv4Addr, Ipv6Addr},
};

use serde::Serialize;
use tracing::debug;

use crate::resolver::{AddressFamily, Resolve};

/// Результат проверки одного домена.
///
/// `None` в поле семейства означает, что разрешение не удалось
/// или адресов этого семейства нет.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostReport {
    /// Проверенный домен.
    pub domain: String,
    /// Адреса из записей `A`.
    pub ipv4: Option<Vec<Ipv4Addr>>,
    /// Адреса из записей `AAAA`.
    pub ipv6: Option<Vec<Ipv6Addr>>,
}

impl HostReport {
    /// `true`, если не найдено ни одного адреса.
    #[must_use]
    pub fn is_unresolved(&self) -> bool {
        self.ipv4.is_none() && self.ipv6.is_none()
    }
}

fn write_family<T: fmt::Display>(f: &mut fmt::Formatter<'_>, addrs: Option<&[T]>) -> fmt::Result {
    match addrs {
        Some(addrs) => {
            for (i, addr) in addrs.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{addr}")?;
            }
            Ok(())
        }
        None => write!(f, "none"),
    }
}

impl fmt::Display for HostReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}: ", self.domain, AddressFamily::V4.record_type())?;
        write_family(f, self.ipv4.as_deref())?;
        write!(f, "  {}: ", AddressFamily::V6.record_type())?;
        write_family(f, self.ipv6.as_deref())
    }
}

/// Разрешает одно семейство, переводя любую ошибку в `None`.
fn resolve_family<R: Resolve + ?Sized>(
    resolver: &R,
    domain: &str,
    family: AddressFamily,
) -> Option<Vec<IpAddr>> {
    match resolver.lookup(domain, family) {
        Ok(addrs) if !addrs.is_empty() => Some(addrs),
        Ok(_) => {
            debug!(domain, %family, "resolver returned no addresses");
            None
        }
        Err(e) => {
            debug!(domain, %family, error = %e, "lookup failed");
            None
        }
    }
}

/// Проверяет домен по обоим семействам адресов.
///
/// Никогда не завершается ошибкой: неудача по семейству даёт `None`.
pub fn check_host<R: Resolve + ?Sized>(resolver: &R, domain: &str) -> HostReport {
    let ipv4 = resolve_family(resolver, domain, AddressFamily::V4).and_then(|addrs| {
        let v4: Vec<Ipv4Addr> = addrs
            .into_iter()
            .filter_map(|ip| match ip {
                IpAddr::V4(v4) => Some(v4),
                IpAddr::V6(_) => None,
            })
            .collect();
        (!v4.is_empty()).then_some(v4)
    });
    let ipv6 = resolve_family(resolver, domain, AddressFamily::V6).and_then(|addrs| {
        let v6: Vec<Ipv6Addr> = addrs
            .into_iter()
            .filter_map(|ip| match ip {
                IpAddr::V6(v6) => Some(v6),
                IpAddr::V4(_) => None,
            })
            .collect();
        (!v6.is_empty()).then_some(v6)
    });

    HostReport { domain: domain.to_string(), ipv4, ipv6 }
}

/// Проверяет список доменов, сохраняя порядок.
pub fn check_hosts<R, S>(resolver: &R, domains: &[S]) -> Vec<HostReport>
where
    R: Resolve + ?Sized,
    S: AsRef<str>,
{
    domains.iter().map(|d| check_host(resolver, d.as_ref())).collect()
}
