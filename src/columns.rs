//! # Database columns targeted by compiled conditions
//!
//! The condition tree refers to archive columns by name. [`ColumnNames`] is the
//! single place those names are spelled out; its [`Default`] matches the archive
//! schema, and a custom set can be injected through
//! [`QueryConfigBuilder::columns`](crate::query_config::QueryConfigBuilder::columns).

/// Columns of the Salticam imager.
#[derive(Debug, Clone, PartialEq)]
pub struct SalticamColumns {
    pub id: String,
    pub detector_mode: String,
    pub filter: String,
    pub exposure_time: String,
}

/// Columns of the Robert Stobie Spectrograph.
#[derive(Debug, Clone, PartialEq)]
pub struct RssColumns {
    pub id: String,
    pub detector_mode: String,
    pub mode: String,
    pub exposure_time: String,
}

/// Columns of the High Resolution Spectrograph.
#[derive(Debug, Clone, PartialEq)]
pub struct HrsColumns {
    pub id: String,
    pub mode: String,
    pub exposure_time: String,
}

/// Columns of the Berkeley Visible Image Tube camera.
#[derive(Debug, Clone, PartialEq)]
pub struct BvitColumns {
    pub id: String,
    pub filter: String,
}

/// Every column name the compiler may emit.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnNames {
    pub observation_night: String,
    pub principal_investigator: String,
    pub proposal_code: String,
    pub right_ascension: String,
    pub declination: String,
    pub salt_id: String,
    pub salticam: SalticamColumns,
    pub rss: RssColumns,
    pub hrs: HrsColumns,
    pub bvit: BvitColumns,
}

impl Default for ColumnNames {
    fn default() -> Self {
        ColumnNames {
            observation_night: "observation.night".into(),
            principal_investigator: "proposal.principal_investigator".into(),
            proposal_code: "proposal.proposal_code".into(),
            right_ascension: "target.ra".into(),
            declination: "target.dec".into(),
            salt_id: "observation.salt_id".into(),
            salticam: SalticamColumns {
                id: "salticam.salticam_id".into(),
                detector_mode: "salticam.detector_mode".into(),
                filter: "salticam.filter".into(),
                exposure_time: "salticam.exposure_time".into(),
            },
            rss: RssColumns {
                id: "rss.rss_id".into(),
                detector_mode: "rss.detector_mode".into(),
                mode: "rss.rss_mode".into(),
                exposure_time: "rss.exposure_time".into(),
            },
            hrs: HrsColumns {
                id: "hrs.hrs_id".into(),
                mode: "hrs.hrs_mode".into(),
                exposure_time: "hrs.exposure_time".into(),
            },
            bvit: BvitColumns {
                id: "bvit.bvit_id".into(),
                filter: "bvit.filter".into(),
            },
        }
    }
}
