//! Plain-text rendering of planner results

use std::fmt::Write;

use application::{PanelOutcome, PlacesPanel, RoutePlan};
use domain::{GeoPoint, PlaceHit, ResolvedLocation};

/// Shown in place of an empty result list
pub const NO_LOCATIONS: &str = "No locations found.";

/// Render a complete route plan
pub fn render_plan(plan: &RoutePlan) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "📍 {} → {} ({})",
        plan.start.display_name(),
        plan.destination.display_name(),
        plan.mode
    );
    let _ = writeln!(out, "📏 Distance: {}", plan.summary.distance_text);
    let _ = writeln!(out, "⏱️  Duration: {}", plan.summary.duration_text);

    if !plan.summary.step_texts.is_empty() {
        out.push_str("\n🧭 Directions:\n");
        for step in &plan.summary.step_texts {
            let _ = writeln!(out, "   {step}");
        }
    }

    for panel in &plan.places {
        out.push('\n');
        out.push_str(&render_panel(panel));
    }

    out.trim_end().to_string()
}

/// Render one nearby-places panel
pub fn render_panel(panel: &PlacesPanel) -> String {
    let mut out = format!("{}\n", panel.title());

    match &panel.outcome {
        PanelOutcome::Found { places } => {
            for place in places {
                let _ = writeln!(out, "   • {} ({})", place.display_name, place.point);
            }
        },
        PanelOutcome::Empty => {
            let _ = writeln!(out, "   {NO_LOCATIONS}");
        },
        PanelOutcome::Unavailable { message } => {
            let _ = writeln!(out, "   {message}");
        },
    }

    out
}

/// Render autocomplete candidates as a numbered list
pub fn render_suggestions(suggestions: &[ResolvedLocation]) -> String {
    if suggestions.is_empty() {
        return NO_LOCATIONS.to_string();
    }

    suggestions
        .iter()
        .enumerate()
        .map(|(i, location)| {
            format!(
                "{}. {} ({})",
                i + 1,
                location.display_name(),
                location.point()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the result of a single places search
pub fn render_places(keyword: &str, center: GeoPoint, places: &[PlaceHit]) -> String {
    let mut out = format!("🔎 '{keyword}' near {center}\n");

    if places.is_empty() {
        out.push_str(NO_LOCATIONS);
        return out;
    }

    for place in places {
        let _ = writeln!(out, "   • {} ({})", place.display_name, place.point);
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use application::{Anchor, PlaceCategory, summarize};
    use domain::{DistanceUnit, RouteResult, RouteStep, TravelMode};

    use super::*;

    fn point(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng).unwrap()
    }

    fn panel(outcome: PanelOutcome) -> PlacesPanel {
        PlacesPanel {
            anchor: Anchor::Midpoint,
            category: PlaceCategory::Fuel,
            outcome,
        }
    }

    #[test]
    fn empty_panel_shows_no_locations() {
        let text = render_panel(&panel(PanelOutcome::Empty));
        assert!(text.starts_with("⛽ Gas Stations MID-ROUTE"));
        assert!(text.contains(NO_LOCATIONS));
    }

    #[test]
    fn unavailable_panel_shows_message() {
        let text = render_panel(&panel(PanelOutcome::Unavailable {
            message: "❌ Service unavailable: HTTP 503".to_string(),
        }));
        assert!(text.contains("HTTP 503"));
        assert!(!text.contains(NO_LOCATIONS));
    }

    #[test]
    fn found_panel_lists_places() {
        let text = render_panel(&panel(PanelOutcome::Found {
            places: vec![
                PlaceHit::new("Aral", point(52.0, 13.0)),
                PlaceHit::new("Shell", point(52.1, 13.1)),
            ],
        }));
        assert!(text.contains("• Aral (52.000000, 13.000000)"));
        assert!(text.contains("• Shell (52.100000, 13.100000)"));
    }

    #[test]
    fn plan_includes_summary_and_steps() {
        let route = RouteResult::new(
            12_345.0,
            3_723_999,
            vec![
                RouteStep::new("Head north", 1500.0),
                RouteStep::new("Arrive", 0.0),
            ],
        );
        let plan = RoutePlan {
            start: ResolvedLocation::new(point(52.52, 13.405), "Berlin"),
            destination: ResolvedLocation::new(point(52.39, 13.06), "Potsdam"),
            mode: TravelMode::Bike,
            unit: DistanceUnit::Metric,
            summary: summarize(&route, DistanceUnit::Metric),
            route,
            places: vec![panel(PanelOutcome::Empty)],
        };

        let text = render_plan(&plan);
        assert!(text.starts_with("📍 Berlin → Potsdam (bike)"));
        assert!(text.contains("📏 Distance: 12.3 km"));
        assert!(text.contains("⏱️  Duration: 01:02:03"));
        assert!(text.contains("   1. Head north (1.50 km)"));
        assert!(text.ends_with(NO_LOCATIONS));
    }

    #[test]
    fn no_suggestions() {
        assert_eq!(render_suggestions(&[]), NO_LOCATIONS);
    }

    #[test]
    fn suggestions_are_numbered() {
        let text = render_suggestions(&[
            ResolvedLocation::new(point(48.8588897, 2.320041), "Paris, France"),
            ResolvedLocation::new(point(33.66, -95.55), "Paris, Texas, United States"),
        ]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "1. Paris, France (48.858890, 2.320041)");
        assert!(lines[1].starts_with("2. Paris, Texas"));
    }

    #[test]
    fn empty_places_search() {
        let text = render_places("fuel", point(10.0, 20.0), &[]);
        assert!(text.ends_with(NO_LOCATIONS));
    }
}
