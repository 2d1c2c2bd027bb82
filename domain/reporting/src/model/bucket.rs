use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The seven fixed categories the progress report aggregates work orders
/// into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReportBucket {
    Fabrication,
    WheelTyre,
    DentPaint,
    BatteryElectrical,
    UldContainers,
    Mechanical,
    Miscellaneous,
}

impl ReportBucket {
    /// Every bucket, in the order report rows are emitted.
    pub const ALL: [ReportBucket; 7] = [
        Self::Fabrication,
        Self::WheelTyre,
        Self::DentPaint,
        Self::BatteryElectrical,
        Self::UldContainers,
        Self::Mechanical,
        Self::Miscellaneous,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Fabrication => "Fabrication",
            Self::WheelTyre => "Wheel & Tyre",
            Self::DentPaint => "Dent & Paint",
            Self::BatteryElectrical => "Battery & Electrical",
            Self::UldContainers => "ULD & Containers",
            Self::Mechanical => "Mechanical",
            Self::Miscellaneous => "Miscellaneous",
        }
    }
}

impl fmt::Display for ReportBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

static EXACT: Lazy<HashMap<&'static str, ReportBucket>> = Lazy::new(|| {
    HashMap::from([
        ("fabrication", ReportBucket::Fabrication),
        ("wheel", ReportBucket::WheelTyre),
        ("tyre", ReportBucket::WheelTyre),
        ("tire", ReportBucket::WheelTyre),
        ("wheel & tyre", ReportBucket::WheelTyre),
        ("dent", ReportBucket::DentPaint),
        ("paint", ReportBucket::DentPaint),
        ("dent & paint", ReportBucket::DentPaint),
        ("battery", ReportBucket::BatteryElectrical),
        ("electrical", ReportBucket::BatteryElectrical),
        ("uld", ReportBucket::UldContainers),
        ("container", ReportBucket::UldContainers),
        ("mechanical", ReportBucket::Mechanical),
        ("miscellaneous", ReportBucket::Miscellaneous),
    ])
});

/// Keyword lists checked by substring, in fixed bucket order. The first hit
/// wins.
const KEYWORDS: &[(ReportBucket, &[&str])] = &[
    (ReportBucket::Fabrication, &["fabricat", "weld"]),
    (ReportBucket::WheelTyre, &["wheel", "tyre", "tire"]),
    (ReportBucket::DentPaint, &["dent", "paint", "corrosion"]),
    (
        ReportBucket::BatteryElectrical,
        &["battery", "electric", "charging", "wiring"],
    ),
    (ReportBucket::UldContainers, &["uld", "container", "pallet"]),
    (
        ReportBucket::Mechanical,
        &["mechanical", "engine", "hydraulic", "brake", "gearbox"],
    ),
];

/// Map a free-text work type onto its report bucket.
///
/// Total and deterministic: case-insensitive exact match first, then the
/// keyword table in order, then `Miscellaneous`.
pub fn categorize(work_type: &str) -> ReportBucket {
    let normalized = work_type.trim().to_lowercase();
    if let Some(bucket) = EXACT.get(normalized.as_str()) {
        return *bucket;
    }
    for (bucket, keywords) in KEYWORDS {
        if keywords.iter().any(|k| normalized.contains(k)) {
            return *bucket;
        }
    }
    ReportBucket::Miscellaneous
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_matches_take_priority_and_ignore_case() {
        assert_eq!(categorize("Wheel"), ReportBucket::WheelTyre);
        assert_eq!(categorize("tyre"), ReportBucket::WheelTyre);
        assert_eq!(categorize("FABRICATION"), ReportBucket::Fabrication);
    }

    #[test]
    fn substrings_match_after_exact() {
        assert_eq!(categorize("old tire issue"), ReportBucket::WheelTyre);
        assert_eq!(categorize("repaint cabin roof"), ReportBucket::DentPaint);
        assert_eq!(categorize("battery swap on tug"), ReportBucket::BatteryElectrical);
        assert_eq!(categorize("ULD door jammed"), ReportBucket::UldContainers);
    }

    #[test]
    fn unmatched_input_falls_back_to_miscellaneous() {
        assert_eq!(categorize("Something unlisted"), ReportBucket::Miscellaneous);
        assert_eq!(categorize(""), ReportBucket::Miscellaneous);
    }

    #[test]
    fn categorization_is_deterministic() {
        for input in ["Wheel", "old tire issue", "Something unlisted", "dented panel"] {
            assert_eq!(categorize(input), categorize(input));
        }
    }
}
