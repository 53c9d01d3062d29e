//! Connectivity probes shown on the home page.

/// Endpoint probed by the status badge.
pub const STATUS_PROBE_PATH: &str = "/api/depnv4";

/// Endpoints checked by "Testar Endpoints", in order.
pub const PROBE_ENDPOINTS: [ProbeEndpoint; 4] = [
    ProbeEndpoint { name: "GSS/Subgrupos", path: "/api/cadgss" },
    ProbeEndpoint { name: "Departamentos Nível 4", path: "/api/depnv4" },
    ProbeEndpoint { name: "Departamentos", path: "/api/tabdep" },
    ProbeEndpoint { name: "Grupos", path: "/api/tabgru" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeEndpoint {
    pub name: &'static str,
    pub path: &'static str,
}

/// Service status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiStatus {
    #[default]
    Checking,
    Online,
    Offline,
}

impl ApiStatus {
    pub fn from_probe<E>(result: &Result<(), E>) -> Self {
        if result.is_ok() {
            ApiStatus::Online
        } else {
            ApiStatus::Offline
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ApiStatus::Checking => "Verificando...",
            ApiStatus::Online => "API Online",
            ApiStatus::Offline => "API Offline",
        }
    }

    /// Badge variant name
    pub fn variant(self) -> &'static str {
        match self {
            ApiStatus::Checking => "neutral",
            ApiStatus::Online => "success",
            ApiStatus::Offline => "error",
        }
    }
}

/// Result of one endpoint probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeResult {
    #[default]
    NotTested,
    Ok,
    Error,
}

impl ProbeResult {
    pub fn from_probe<E>(result: &Result<(), E>) -> Self {
        if result.is_ok() {
            ProbeResult::Ok
        } else {
            ProbeResult::Error
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProbeResult::NotTested => "Não testado",
            ProbeResult::Ok => "OK",
            ProbeResult::Error => "Erro",
        }
    }

    pub fn variant(self) -> &'static str {
        match self {
            ProbeResult::NotTested => "neutral",
            ProbeResult::Ok => "success",
            ProbeResult::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_probe() {
        assert_eq!(ApiStatus::default().label(), "Verificando...");
        assert_eq!(ApiStatus::from_probe::<()>(&Ok(())), ApiStatus::Online);
        assert_eq!(ApiStatus::from_probe(&Err("offline")), ApiStatus::Offline);
        assert_eq!(ApiStatus::Offline.label(), "API Offline");
    }

    #[test]
    fn test_probe_results() {
        assert_eq!(ProbeResult::default().label(), "Não testado");
        assert_eq!(ProbeResult::from_probe(&Err(404)).label(), "Erro");
        assert_eq!(ProbeResult::from_probe::<u16>(&Ok(())).label(), "OK");
    }

    #[test]
    fn test_probe_order() {
        let paths: Vec<&str> = PROBE_ENDPOINTS.iter().map(|e| e.path).collect();
        assert_eq!(paths, vec!["/api/cadgss", "/api/depnv4", "/api/tabdep", "/api/tabgru"]);
    }
}
