//! Static Partnership API description served as an MCP resource

pub const API_INFO_URI: &str = "ultrahuman://api-info";
pub const API_INFO_NAME: &str = "api-info";

/// Ultrahuman Partnership API overview for AI assistants
pub const API_INFO: &str = r#"
# Ultrahuman Partnership API Information

The Partnership API gives you full access to the data generated by Ultrahuman devices.

## Available Metrics

1. Sleep Data - Sleep patterns, quality, duration
2. Movement Data - Activity levels, movement patterns
3. Heart Rate - Continuous heart rate monitoring
4. HRV - Heart Rate Variability measurements
5. Temperature - Body temperature readings
6. Steps - Daily step count
7. Glucose - Blood glucose levels (from CGM)
8. Metabolic Score - Overall metabolic health score
9. Glucose Variability (%) - Blood sugar stability
10. Average Glucose (mg/dL) - Daily glucose average
11. HbA1c - Long-term glucose control indicator
12. Time in Target (%) - Time spent in target glucose range
13. Recovery Index - Recovery status metrics
14. Movement Index - Movement quality assessment
15. VO2 Max - Cardiovascular fitness measure

## API Environments

- Live: https://partner.ultrahuman.com/api/v1/metrics
- Test: https://www.staging.ultrahuman.com/api/v1/metrics

## Authentication

- Authorization key required in header
- Data sharing code needed for user consent

## Tools

| Tool | Returns |
|------|---------|
| `get_default_user_metrics` | All metrics for the configured default user |
| `get_user_metrics` | All metrics for a user |
| `get_sleep_data` | `sleep_data` |
| `get_movement_data` | `steps`, `movement_index`, `movement_data` |
| `get_glucose_metrics` | `glucose`, `glucose_variability`, `average_glucose`, `hba1c`, `time_in_target`, `metabolic_score` |
| `get_heart_metrics` | `heart_rate`, `hrv`, `recovery_index`, `vo2_max` |

Dates are always `YYYY-MM-DD`. Every tool answers with a `success` flag; check it
before reading the data. Metrics the device did not record come back as `null`.
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_info_lists_environments_and_metrics() {
        assert!(API_INFO.contains("https://partner.ultrahuman.com/api/v1/metrics"));
        assert!(API_INFO.contains("https://www.staging.ultrahuman.com/api/v1/metrics"));
        assert!(API_INFO.contains("15. VO2 Max"));
    }
}
