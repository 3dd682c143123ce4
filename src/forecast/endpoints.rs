use std::fmt;

/// The generations of the INMET forecast API, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForecastEndpoint {
    /// `previsao/diaria/municipio/{code}`, the current daily forecast route.
    DailyByMunicipality,
    /// `previsao/{code}`, the earlier route.
    Previsao,
    /// `forecast/{code}`, the English-named variant.
    Forecast,
}

impl ForecastEndpoint {
    /// All candidates, highest priority first.
    pub const PRIORITY: [ForecastEndpoint; 3] = [
        ForecastEndpoint::DailyByMunicipality,
        ForecastEndpoint::Previsao,
        ForecastEndpoint::Forecast,
    ];

    /// The path below the API base URL for `code`.
    pub fn path(&self, code: &str) -> String {
        match self {
            ForecastEndpoint::DailyByMunicipality => format!("previsao/diaria/municipio/{code}"),
            ForecastEndpoint::Previsao => format!("previsao/{code}"),
            ForecastEndpoint::Forecast => format!("forecast/{code}"),
        }
    }
}

impl fmt::Display for ForecastEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path("{code}"))
    }
}

pub(crate) const CATALOG_PATH: &str = "municipios";
