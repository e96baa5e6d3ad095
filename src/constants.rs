//! # Constants and type definitions for the archive query core
//!
//! This module centralizes the **sky bounds**, **unit conversion factors**, and the
//! **default search parameters** used when turning form input into a condition tree.
//!
//! ## Overview
//!
//! - Right ascension and declination domains
//! - Angular unit conversions (arcminutes / arcseconds → degrees)
//! - Default and maximum search cone radius
//! - The observing-night offset used for date windows
//!
//! These values are the defaults of [`QueryConfig`](crate::query_config::QueryConfig);
//! nothing else in the crate re-declares them.

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcminutes
pub type ArcMin = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Exposure time in seconds
pub type Seconds = f64;

// -------------------------------------------------------------------------------------------------
// Sky bounds
// -------------------------------------------------------------------------------------------------

/// Smallest accepted right ascension, in degrees
pub const MIN_RIGHT_ASCENSION: Degree = 0.0;

/// Largest accepted right ascension, in degrees
pub const MAX_RIGHT_ASCENSION: Degree = 360.0;

/// Smallest accepted declination (south celestial pole), in degrees
pub const MIN_DECLINATION: Degree = -90.0;

/// Largest accepted declination (north celestial pole), in degrees
pub const MAX_DECLINATION: Degree = 90.0;

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// Arcminutes per degree
pub const ARCMIN_PER_DEGREE: ArcMin = 60.0;

/// Arcseconds per degree
pub const ARCSEC_PER_DEGREE: ArcSec = 3600.0;

// -------------------------------------------------------------------------------------------------
// Search defaults
// -------------------------------------------------------------------------------------------------

/// Radius used for a cone search without explicit radius, and half-width used to
/// widen a lone coordinate into a range.
pub const DEFAULT_SEARCH_CONE_RADIUS: Degree = 0.05;

/// Largest search cone radius a user may ask for.
pub const MAX_SEARCH_CONE_RADIUS: Degree = 10.0;

/// Exclusive upper bound of a configured default radius. Widening a lone right
/// ascension by half a circle or more would collapse its wrapped bounds.
pub const DEFAULT_SEARCH_CONE_RADIUS_LIMIT: Degree = MAX_DECLINATION - MIN_DECLINATION;

/// The archive keys a night by the calendar date it starts on. The night window
/// opens this many hours after 00:00 UTC of that date and lasts one day.
pub const OBSERVING_NIGHT_OFFSET_HOURS: i64 = 14;
