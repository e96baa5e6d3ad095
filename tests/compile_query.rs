mod common;

use ssda_query::{
    columns::ColumnNames,
    compile,
    instruments::{
        modes::{DetectorMode, RssMode},
        RssParams, SalticamParams,
    },
    query_config::QueryConfig,
    GeneralParams, InstrumentParams, QueryCompiler, QueryError, QueryParameters, TelescopeParams,
    WhereCondition,
};

use crate::common::{assert_values_close, target, target_with_radius};

fn target_part(condition: &WhereCondition) -> &WhereCondition {
    match condition {
        WhereCondition::And(parts) => {
            assert_eq!(parts.len(), 3, "top level is AND(general, target, telescope)");
            &parts[1]
        }
        other => panic!("expected a top-level AND, got {other:?}"),
    }
}

fn count_within_radius(condition: &WhereCondition) -> usize {
    match condition {
        WhereCondition::And(children) | WhereCondition::Or(children) => {
            children.iter().map(count_within_radius).sum()
        }
        WhereCondition::Not(child) => count_within_radius(child),
        WhereCondition::WithinRadius { .. } => 1,
        _ => 0,
    }
}

#[test]
fn test_point_compiles_to_single_cone_with_default_radius() {
    let params = QueryParameters {
        target: target(Some("187.25"), Some("-60.1")),
        ..Default::default()
    };
    let condition = compile(&params).unwrap();
    assert_eq!(count_within_radius(&condition), 1);
    match target_part(&condition) {
        WhereCondition::WithinRadius {
            right_ascension,
            declination,
            radius,
            ..
        } => {
            assert_eq!(*right_ascension, 187.25);
            assert_eq!(*declination, -60.1);
            assert_eq!(*radius, 0.05);
        }
        other => panic!("expected WITHIN_RADIUS, got {other:?}"),
    }
}

#[test]
fn test_wraparound_range_is_split() {
    let params = QueryParameters {
        target: target(Some("350 .. 10"), None),
        ..Default::default()
    };
    let condition = compile(&params).unwrap();
    assert_eq!(
        target_part(&condition),
        &WhereCondition::and(vec![WhereCondition::or(vec![
            WhereCondition::and(vec![
                WhereCondition::greater_equal("target.ra", 350.0),
                WhereCondition::less_equal("target.ra", 360.0),
            ]),
            WhereCondition::and(vec![
                WhereCondition::greater_equal("target.ra", 0.0),
                WhereCondition::less_equal("target.ra", 10.0),
            ]),
        ])])
    );
}

#[test]
fn test_widened_seam_coordinate_is_split() {
    let params = QueryParameters {
        target: target(Some("0"), Some("-5 .. 5")),
        ..Default::default()
    };
    let condition = compile(&params).unwrap();
    let WhereCondition::And(ranges) = target_part(&condition) else {
        panic!("expected range conditions");
    };
    assert_eq!(ranges.len(), 2);
    assert!(matches!(&ranges[0], WhereCondition::Or(halves) if halves.len() == 2));
    assert_eq!(
        ranges[1],
        WhereCondition::and(vec![
            WhereCondition::greater_equal("target.dec", -5.0),
            WhereCondition::less_equal("target.dec", 5.0),
        ])
    );
}

#[test]
fn test_full_query() {
    let params = QueryParameters {
        general: GeneralParams {
            observation_night: None,
            principal_investigator: Some("Buckley".into()),
            proposal_code: Some("2018-1-MLT".into()),
        },
        target: target_with_radius(Some("10"), Some("-20"), "36", "arcseconds"),
        telescope: Some(TelescopeParams::Salt {
            instrument: Some(InstrumentParams::Rss(RssParams {
                detector_mode: Some(DetectorMode::Normal),
                spectroscopic_mode: Some(RssMode::Spectroscopy),
                exposure_time: Some("100 .. 300".into()),
            })),
        }),
    };

    let condition = compile(&params).unwrap();
    assert_eq!(
        condition.to_string(),
        "((proposal.principal_investigator LIKE '%Buckley%' AND proposal.proposal_code LIKE '%2018-1-MLT%') \
         AND WITHIN_RADIUS((target.ra, target.dec), (10, -20), 0.01) \
         AND (NOT (observation.salt_id IS NULL) AND (NOT (rss.rss_id IS NULL) AND rss.detector_mode = 'NORMAL' \
         AND rss.rss_mode = 'SPECTROSCOPY' AND (rss.exposure_time >= 100 AND rss.exposure_time <= 300))))"
    );
}

#[test]
fn test_failure_aborts_whole_compilation() {
    let params = QueryParameters {
        target: target(Some("10"), Some("20")),
        telescope: Some(TelescopeParams::Salt {
            instrument: Some(InstrumentParams::Salticam(SalticamParams {
                exposure_time: Some("-3".into()),
                ..Default::default()
            })),
        }),
        ..Default::default()
    };
    assert_eq!(
        compile(&params),
        Err(QueryError::InvalidExposureTime("-3".into()))
    );

    let params = QueryParameters {
        target: target_with_radius(Some("3 .. 5"), None, "2", "arcminutes"),
        ..Default::default()
    };
    assert_eq!(compile(&params), Err(QueryError::RangeWithRadius));
}

#[test]
fn test_injected_configuration() {
    let mut columns = ColumnNames::default();
    columns.right_ascension = "obs.ra".into();
    columns.declination = "obs.dec".into();
    let config = QueryConfig::builder()
        .default_search_cone_radius(0.25)
        .max_search_cone_radius(1.0)
        .columns(columns)
        .build()
        .unwrap();
    let compiler = QueryCompiler::new(config);

    let condition = compiler
        .target_condition(&target(Some("5"), Some("5")))
        .unwrap();
    assert_eq!(
        condition,
        WhereCondition::within_radius(5.0, 5.0, 0.25, "obs.ra", "obs.dec")
    );

    assert_eq!(
        compiler.target_condition(&target_with_radius(Some("5"), Some("5"), "2", "degrees")),
        Err(QueryError::RadiusTooLarge { max: 1.0 })
    );
}

#[test]
fn test_wide_default_radius_keeps_right_ascension_in_bounds() {
    let config = QueryConfig::builder()
        .default_search_cone_radius(170.0)
        .max_search_cone_radius(180.0)
        .build()
        .unwrap();
    let pos = target(Some("350"), None).resolve(&config).unwrap();
    for ra in pos.right_ascensions() {
        assert!((0.0..=360.0).contains(ra), "{ra} escaped [0, 360]");
    }
    assert_values_close(pos.right_ascensions(), &[180.0, 160.0]);

    for default in [0.0, 400.0] {
        let res = QueryConfig::builder()
            .default_search_cone_radius(default)
            .max_search_cone_radius(500.0)
            .build();
        assert!(
            matches!(res, Err(QueryError::InvalidQueryConfig(_))),
            "default radius {default} should be rejected"
        );
    }
}
