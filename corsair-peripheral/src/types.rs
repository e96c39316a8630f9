//! Device classification types

use serde::Serialize;

/// Device class reported by the firmware info register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DeviceType {
    Keyboard,
    Mouse,
    Mousemat,
    HeadsetStand,
    /// Classification failed; the device must not be registered
    Unknown,
}

impl DeviceType {
    /// Get the display name for this type
    pub fn name(&self) -> &'static str {
        match self {
            Self::Keyboard => "Keyboard",
            Self::Mouse => "Mouse",
            Self::Mousemat => "Mousemat",
            Self::HeadsetStand => "Headset Stand",
            Self::Unknown => "Unknown",
        }
    }
}

/// Keyboard sub-model reported by the framed-protocol keyboards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum KeyboardType {
    K100,
    /// Classification failed; the device must not be registered
    Unknown,
}

/// Physical/logical key layout reported by legacy keyboards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[repr(u8)]
pub enum KeyboardLayout {
    #[default]
    Ansi = 0,
    Iso = 1,
    Abnt = 2,
    Jis = 3,
    Dubeolsik = 4,
}

impl KeyboardLayout {
    /// Get layout from the firmware info byte
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Ansi),
            1 => Some(Self::Iso),
            2 => Some(Self::Abnt),
            3 => Some(Self::Jis),
            4 => Some(Self::Dubeolsik),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Ansi => "ANSI",
            Self::Iso => "ISO",
            Self::Abnt => "ABNT",
            Self::Jis => "JIS",
            Self::Dubeolsik => "Dubeolsik",
        }
    }
}
