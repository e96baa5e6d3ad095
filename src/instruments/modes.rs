//! Mapping tables between the labels shown in the search form and the codes
//! stored in the archive.
use std::str::FromStr;

use serde::Deserialize;

use crate::query_errors::QueryError;

/// A closed set of modes, each with a form label and a database code.
pub trait CodeTable: Sized + Copy + PartialEq + 'static {
    /// Every mode, in form order.
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;

    fn code(&self) -> &'static str;

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|mode| mode.label() == label)
    }
}

/// CCD readout mode shared by Salticam and RSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum DetectorMode {
    Normal,
    FrameTransfer,
    SlotMode,
    DriftScan,
    Shuffle,
}

impl CodeTable for DetectorMode {
    const ALL: &'static [Self] = &[
        DetectorMode::Normal,
        DetectorMode::FrameTransfer,
        DetectorMode::SlotMode,
        DetectorMode::DriftScan,
        DetectorMode::Shuffle,
    ];

    fn label(&self) -> &'static str {
        match self {
            DetectorMode::Normal => "Normal",
            DetectorMode::FrameTransfer => "Frame Transfer",
            DetectorMode::SlotMode => "Slot Mode",
            DetectorMode::DriftScan => "Drift Scan",
            DetectorMode::Shuffle => "Shuffle",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            DetectorMode::Normal => "NORMAL",
            DetectorMode::FrameTransfer => "FRAME TRANSFER",
            DetectorMode::SlotMode => "SLOT MODE",
            DetectorMode::DriftScan => "DRIFT SCAN",
            DetectorMode::Shuffle => "SHUFFLE",
        }
    }
}

/// HRS observing mode; the archive stores abbreviations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum HrsMode {
    LowResolution,
    MediumResolution,
    HighResolution,
    HighStability,
    IntCalFibre,
}

impl CodeTable for HrsMode {
    const ALL: &'static [Self] = &[
        HrsMode::LowResolution,
        HrsMode::MediumResolution,
        HrsMode::HighResolution,
        HrsMode::HighStability,
        HrsMode::IntCalFibre,
    ];

    fn label(&self) -> &'static str {
        match self {
            HrsMode::LowResolution => "Low Resolution",
            HrsMode::MediumResolution => "Medium Resolution",
            HrsMode::HighResolution => "High Resolution",
            HrsMode::HighStability => "High Stability",
            HrsMode::IntCalFibre => "Int Cal Fibre",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            HrsMode::LowResolution => "LR",
            HrsMode::MediumResolution => "MR",
            HrsMode::HighResolution => "HR",
            HrsMode::HighStability => "HS",
            HrsMode::IntCalFibre => "IC",
        }
    }
}

/// RSS imaging/spectroscopy configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum RssMode {
    Imaging,
    Spectroscopy,
    FabryPerot,
    FpPolarimetry,
    Mos,
    MosPolarimetry,
    PolarimetricImaging,
    Spectropolarimetry,
}

impl CodeTable for RssMode {
    const ALL: &'static [Self] = &[
        RssMode::Imaging,
        RssMode::Spectroscopy,
        RssMode::FabryPerot,
        RssMode::FpPolarimetry,
        RssMode::Mos,
        RssMode::MosPolarimetry,
        RssMode::PolarimetricImaging,
        RssMode::Spectropolarimetry,
    ];

    fn label(&self) -> &'static str {
        match self {
            RssMode::Imaging => "Imaging",
            RssMode::Spectroscopy => "Spectroscopy",
            RssMode::FabryPerot => "Fabry Perot",
            RssMode::FpPolarimetry => "FP Polarimetry",
            RssMode::Mos => "MOS",
            RssMode::MosPolarimetry => "MOS Polarimetry",
            RssMode::PolarimetricImaging => "Polarimetric Imaging",
            RssMode::Spectropolarimetry => "Spectropolarimetry",
        }
    }

    // the archive stores RSS modes as upper-cased labels
    fn code(&self) -> &'static str {
        match self {
            RssMode::Imaging => "IMAGING",
            RssMode::Spectroscopy => "SPECTROSCOPY",
            RssMode::FabryPerot => "FABRY PEROT",
            RssMode::FpPolarimetry => "FP POLARIMETRY",
            RssMode::Mos => "MOS",
            RssMode::MosPolarimetry => "MOS POLARIMETRY",
            RssMode::PolarimetricImaging => "POLARIMETRIC IMAGING",
            RssMode::Spectropolarimetry => "SPECTROPOLARIMETRY",
        }
    }
}

impl FromStr for DetectorMode {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| QueryError::UnsupportedDetectorMode(s.to_string()))
    }
}

impl FromStr for HrsMode {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| QueryError::UnsupportedHrsMode(s.to_string()))
    }
}

impl FromStr for RssMode {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| QueryError::UnsupportedRssMode(s.to_string()))
    }
}

// serde goes through the form labels
impl TryFrom<String> for DetectorMode {
    type Error = QueryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for HrsMode {
    type Error = QueryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for RssMode {
    type Error = QueryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
