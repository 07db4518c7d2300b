// Sensor channel and live reading models

use serde::{Deserialize, Serialize};

/// One monitored channel of the e-nose. Each channel has a fixed id, unit and start value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorChannel {
    Voc,
    Temperature,
    Humidity,
    Co2,
}

impl SensorChannel {
    pub const ALL: [SensorChannel; 4] = [
        SensorChannel::Voc,
        SensorChannel::Temperature,
        SensorChannel::Humidity,
        SensorChannel::Co2,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SensorChannel::Voc => "voc",
            SensorChannel::Temperature => "temperature",
            SensorChannel::Humidity => "humidity",
            SensorChannel::Co2 => "co2",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            SensorChannel::Voc => "VOC Level",
            SensorChannel::Temperature => "Temperature",
            SensorChannel::Humidity => "Humidity",
            SensorChannel::Co2 => "CO2",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            SensorChannel::Voc => "ppb",
            SensorChannel::Temperature => "°C",
            SensorChannel::Humidity => "%",
            SensorChannel::Co2 => "ppm",
        }
    }

    pub fn initial_value(self) -> f64 {
        match self {
            SensorChannel::Voc => 42.0,
            SensorChannel::Temperature => 22.5,
            SensorChannel::Humidity => 45.0,
            SensorChannel::Co2 => 412.0,
        }
    }

    /// Percent change shown on the card at mount time.
    pub fn initial_trend(self) -> f64 {
        match self {
            SensorChannel::Voc => -3.2,
            SensorChannel::Temperature => 0.8,
            SensorChannel::Humidity => -1.5,
            SensorChannel::Co2 => 2.1,
        }
    }
}

/// Reading status; serializes to lowercase JSON (e.g. "warning").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingStatus {
    Normal,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorReading {
    pub id: String,
    pub name: String,
    pub channel: SensorChannel,
    pub value: f64,
    pub unit: String,
    pub status: ReadingStatus,
    pub trend: f64,
}
