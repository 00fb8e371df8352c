use serde::{Deserialize, Serialize};

/// Soil pH assumed when the upstream provider has no measurement.
pub const DEFAULT_SOIL_PH: f64 = 6.5;

/// Rainfall assumed when the weather provider reports none.
pub const DEFAULT_RAINFALL_MM: f64 = 0.0;

/// Environmental conditions for a single prediction request.
///
/// Values are taken as supplied; range checking belongs to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalReading {
    pub temperature_c: f64,
    pub humidity_percent: f64,
    pub rainfall_mm: f64,
    pub soil_ph: f64,
}

impl EnvironmentalReading {
    pub fn new(temperature_c: f64, humidity_percent: f64, rainfall_mm: f64) -> Self {
        Self {
            temperature_c,
            humidity_percent,
            rainfall_mm,
            soil_ph: DEFAULT_SOIL_PH,
        }
    }

    pub fn with_soil_ph(mut self, soil_ph: f64) -> Self {
        self.soil_ph = soil_ph;
        self
    }

    pub fn get(&self, field: ReadingField) -> f64 {
        match field {
            ReadingField::Temperature => self.temperature_c,
            ReadingField::Humidity => self.humidity_percent,
            ReadingField::Rainfall => self.rainfall_mm,
            ReadingField::SoilPh => self.soil_ph,
        }
    }
}

/// Reading as handed over by a weather/soil provider, where rainfall and
/// soil pH may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawReading {
    pub temperature_c: f64,
    pub humidity_percent: f64,
    #[serde(default)]
    pub rainfall_mm: Option<f64>,
    #[serde(default)]
    pub soil_ph: Option<f64>,
}

impl RawReading {
    pub fn resolve(&self) -> EnvironmentalReading {
        EnvironmentalReading {
            temperature_c: self.temperature_c,
            humidity_percent: self.humidity_percent,
            rainfall_mm: self.rainfall_mm.unwrap_or(DEFAULT_RAINFALL_MM),
            soil_ph: self.soil_ph.unwrap_or(DEFAULT_SOIL_PH),
        }
    }
}

impl From<RawReading> for EnvironmentalReading {
    fn from(raw: RawReading) -> Self {
        raw.resolve()
    }
}

/// Named field of an [`EnvironmentalReading`], used by rule thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingField {
    Temperature,
    Humidity,
    Rainfall,
    SoilPh,
}

impl ReadingField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingField::Temperature => "temperature",
            ReadingField::Humidity => "humidity",
            ReadingField::Rainfall => "rainfall",
            ReadingField::SoilPh => "soil_pH",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            ReadingField::Temperature => "°C",
            ReadingField::Humidity => "%",
            ReadingField::Rainfall => "mm",
            ReadingField::SoilPh => "",
        }
    }
}

impl std::fmt::Display for ReadingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
