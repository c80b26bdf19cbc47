//! Static water conservation advice for each irrigation method.

use crate::IrrigationMethod;

const DRIP_TIPS: [&str; 4] = [
    "Maintain filters to prevent clogging",
    "Check for leaks regularly",
    "Consider automated scheduling",
    "Monitor soil moisture levels",
];

const SPRINKLER_TIPS: [&str; 4] = [
    "Water during early morning or evening",
    "Adjust sprinkler heads for optimal coverage",
    "Use soil moisture sensors",
    "Consider weather conditions before irrigating",
];

const FLOOD_TIPS: [&str; 4] = [
    "Level fields to ensure even distribution",
    "Implement surge flooding techniques",
    "Consider converting to more efficient methods",
    "Monitor field drainage patterns",
];

/// The four conservation tips shown for `method`.
pub fn conservation_tips(method: IrrigationMethod) -> &'static [&'static str; 4] {
    match method {
        IrrigationMethod::Drip => &DRIP_TIPS,
        IrrigationMethod::Sprinkler => &SPRINKLER_TIPS,
        IrrigationMethod::Flood => &FLOOD_TIPS,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn drip_tips_match_dashboard_text() {
        assert_eq!(
            conservation_tips(IrrigationMethod::Drip),
            &[
                "Maintain filters to prevent clogging",
                "Check for leaks regularly",
                "Consider automated scheduling",
                "Monitor soil moisture levels",
            ]
        );
    }

    #[test]
    fn sprinkler_tips_match_dashboard_text() {
        assert_eq!(
            conservation_tips(IrrigationMethod::Sprinkler),
            &[
                "Water during early morning or evening",
                "Adjust sprinkler heads for optimal coverage",
                "Use soil moisture sensors",
                "Consider weather conditions before irrigating",
            ]
        );
    }

    #[test]
    fn flood_tips_match_dashboard_text() {
        assert_eq!(
            conservation_tips(IrrigationMethod::Flood),
            &[
                "Level fields to ensure even distribution",
                "Implement surge flooding techniques",
                "Consider converting to more efficient methods",
                "Monitor field drainage patterns",
            ]
        );
    }

    #[test]
    fn every_method_has_distinct_tips() {
        for (i, &a) in IrrigationMethod::all().iter().enumerate() {
            for &b in &IrrigationMethod::all()[i + 1..] {
                let other = conservation_tips(b);
                assert!(conservation_tips(a).iter().all(|tip| !other.contains(tip)));
            }
        }
    }
}
