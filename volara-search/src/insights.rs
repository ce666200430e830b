/// Advisory pool shown alongside results. Fixed content; every route gets
/// the first three entries.
const INSIGHT_POOL: [&str; 6] = [
    "Best time to book: 6-8 weeks before departure",
    "Tuesday and Wednesday flights are typically 15% cheaper",
    "Morning flights have 20% fewer delays",
    "This route has 95% on-time performance",
    "Average price for this route: $275",
    "Peak season: June-August (prices 30% higher)",
];

const INSIGHTS_PER_ROUTE: usize = 3;

/// Up to three static advisory strings for a route.
pub fn travel_insights(route: &str) -> Vec<String> {
    tracing::debug!(route, "serving travel insights");
    INSIGHT_POOL
        .iter()
        .take(INSIGHTS_PER_ROUTE)
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_most_three_insights() {
        let insights = travel_insights("JFK-LAX");
        assert_eq!(insights.len(), 3);
    }

    #[test]
    fn test_route_does_not_change_content() {
        assert_eq!(travel_insights("JFK-LAX"), travel_insights("BOS-SFO"));
        assert_eq!(
            travel_insights("anything")[0],
            "Best time to book: 6-8 weeks before departure"
        );
    }
}
