//! # Search parameters handed over by the form layer
//!
//! [`QueryParameters`] is built fresh from the form state for every search. It is
//! `Deserialize` so a JSON-like payload can be passed straight in:
//!
//! ```rust
//! use ssda_query::query_params::{InstrumentParams, QueryParameters, TelescopeParams};
//!
//! let params: QueryParameters = serde_json::from_str(r#"{
//!     "general": {"proposalCode": "2019-2-SCI-"},
//!     "target": {"rightAscension": "350 .. 10"},
//!     "telescope": {"name": "SALT", "instrument": {"name": "HRS", "mode": "Low Resolution"}}
//! }"#).unwrap();
//!
//! assert!(matches!(
//!     params.telescope,
//!     Some(TelescopeParams::Salt { instrument: Some(InstrumentParams::Hrs(_)) })
//! ));
//! ```
//!
//! Telescopes and instruments are tagged by their `name`. An instrument name the
//! archive does not know becomes [`InstrumentParams::Unrecognized`], and an unknown
//! telescope becomes [`TelescopeParams::Unrecognized`]. Neither is an error; they
//! simply add no constraint.
use serde::Deserialize;

use crate::{
    instruments::{
        BvitParams, HippoParams, HrsParams, RssParams, SalticamParams, ShocParams, SpupnicParams,
    },
    target::TargetParams,
};

/// Everything a user may search on.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct QueryParameters {
    pub general: GeneralParams,
    pub target: TargetParams,
    /// `None` when no telescope is selected.
    pub telescope: Option<TelescopeParams>,
}

/// Observation metadata fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneralParams {
    /// `YYYY-MM-DD`, or a range of nights `YYYY-MM-DD .. YYYY-MM-DD`.
    pub observation_night: Option<String>,
    /// Substring of the principal investigator's name.
    pub principal_investigator: Option<String>,
    /// Substring of the proposal code.
    pub proposal_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "name")]
pub enum TelescopeParams {
    #[serde(rename = "SALT")]
    Salt {
        #[serde(default)]
        instrument: Option<InstrumentParams>,
    },
    #[serde(rename = "Lesedi")]
    Lesedi {
        #[serde(default)]
        instrument: Option<InstrumentParams>,
    },
    #[serde(rename = "1.9 m")]
    OneNineMeter {
        #[serde(default)]
        instrument: Option<InstrumentParams>,
    },
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "name")]
pub enum InstrumentParams {
    Salticam(SalticamParams),
    #[serde(rename = "RSS")]
    Rss(RssParams),
    #[serde(rename = "HRS")]
    Hrs(HrsParams),
    #[serde(rename = "BVIT")]
    Bvit(BvitParams),
    #[serde(rename = "HIPPO")]
    Hippo(HippoParams),
    #[serde(rename = "SHOC")]
    Shoc(ShocParams),
    #[serde(rename = "SpUpNIC")]
    Spupnic(SpupnicParams),
    #[serde(other)]
    Unrecognized,
}
