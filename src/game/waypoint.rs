//! Waypoint token parsing.
//!
//! Xaero's minimap shares locations through chat as a colon-delimited
//! token. The bridge parses the token into structured fields and renders
//! a seed-map link; coordinates stay strings throughout since they are
//! only ever redisplayed.

/// Chat prefix marking a waypoint share token.
pub const WAYPOINT_PREFIX: &str = "xaero-waypoint:";

/// Seed-map URL template. Substituted with seed, dimension label, and
/// the waypoint coordinates.
const SEED_MAP_URL: &str = "https://www.chunkbase.com/apps/seed-map";

/// The world dimension a waypoint names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dimension {
    Overworld,
    Nether,
    End,
    /// Unrecognized dimension; the raw label passes through unmodified.
    Other(String),
}

impl Dimension {
    /// Normalize the raw dimension field by substring match.
    pub fn from_raw(raw: &str) -> Self {
        if raw.contains("overworld") {
            Dimension::Overworld
        } else if raw.contains("nether") {
            Dimension::Nether
        } else if raw.contains("end") {
            Dimension::End
        } else {
            Dimension::Other(raw.to_string())
        }
    }

    /// Display label for this dimension.
    pub fn label(&self) -> &str {
        match self {
            Dimension::Overworld => "Overworld",
            Dimension::Nether => "Nether",
            Dimension::End => "End",
            Dimension::Other(raw) => raw,
        }
    }
}

/// A parsed waypoint share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Waypoint {
    pub name: String,
    pub x: String,
    pub y: String,
    pub z: String,
    pub color_name: String,
    pub dimension: Dimension,
}

impl Waypoint {
    /// Parse a waypoint token.
    ///
    /// The token must split into at least 10 colon-delimited fields;
    /// anything shorter is a parse failure with no partial data.
    pub fn parse(message: &str) -> Option<Waypoint> {
        let parts: Vec<&str> = message.split(':').collect();
        if parts.len() < 10 {
            return None;
        }

        Some(Waypoint {
            name: parts[1].to_string(),
            x: parts[3].to_string(),
            y: parts[4].to_string(),
            z: parts[5].to_string(),
            color_name: parts[6].to_string(),
            dimension: Dimension::from_raw(parts[9]),
        })
    }

    /// Render the external seed-map link for this waypoint.
    ///
    /// The seed comes from the world-state collaborator and is treated as
    /// an opaque string.
    pub fn map_link(&self, seed: &str) -> String {
        format!(
            "{}#seed={}&platform=java_1_21_4&dimension={}&x={}&z={}&pinX={}&pinZ={}&zoom=0.5",
            SEED_MAP_URL,
            seed,
            self.dimension.label(),
            self.x,
            self.z,
            self.x,
            self.z
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ten_fields() {
        let token = "xaero-waypoint:Home:x:100:64:200:0:ignored:ignored:overworld,abc";
        let waypoint = Waypoint::parse(token).expect("10-field token should parse");

        assert_eq!(waypoint.name, "Home");
        assert_eq!(waypoint.x, "100");
        assert_eq!(waypoint.y, "64");
        assert_eq!(waypoint.z, "200");
        assert_eq!(waypoint.color_name, "0");
        assert_eq!(waypoint.dimension, Dimension::Overworld);
    }

    #[test]
    fn test_parse_nine_fields_fails() {
        let token = "xaero-waypoint:Home:x:100:64:200:0:ignored:ignored";
        assert_eq!(Waypoint::parse(token), None);
    }

    #[test]
    fn test_dimension_normalization() {
        assert_eq!(
            Dimension::from_raw("Internal-overworld-waypoints"),
            Dimension::Overworld
        );
        assert_eq!(
            Dimension::from_raw("Internal-nether-waypoints"),
            Dimension::Nether
        );
        assert_eq!(Dimension::from_raw("Internal-end-waypoints"), Dimension::End);
    }

    #[test]
    fn test_unknown_dimension_passes_through() {
        let dim = Dimension::from_raw("custom_realm");
        assert_eq!(dim, Dimension::Other("custom_realm".to_string()));
        assert_eq!(dim.label(), "custom_realm");
    }

    #[test]
    fn test_coordinates_stay_strings() {
        // Deliberate pass-through: nothing numeric is validated.
        let token = "xaero-waypoint:Odd:x:NaN:sixty-four:-0200:13:a:b:nether";
        let waypoint = Waypoint::parse(token).expect("fields are never validated");
        assert_eq!(waypoint.x, "NaN");
        assert_eq!(waypoint.y, "sixty-four");
        assert_eq!(waypoint.z, "-0200");
    }

    #[test]
    fn test_map_link_substitution() {
        let token = "xaero-waypoint:Home:x:100:64:200:0:ignored:ignored:overworld";
        let waypoint = Waypoint::parse(token).unwrap();
        let link = waypoint.map_link("12345");

        assert_eq!(
            link,
            "https://www.chunkbase.com/apps/seed-map#seed=12345&platform=java_1_21_4\
             &dimension=Overworld&x=100&z=200&pinX=100&pinZ=200&zoom=0.5"
        );
    }
}
