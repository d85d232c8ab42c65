use fit_core::{Activity, Sport};

/// A derived frontmatter value. Numbers render bare so vault queries can
/// sort them; text renders quoted.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{v}"),
            // Keep a trailing ".0" on whole floats so 5 km reads "5.0",
            // matching the historical notes already in the vault.
            FieldValue::Float(v) if v.fract() == 0.0 => write!(f, "{v:.1}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Text(v) => write!(f, "{v}"),
        }
    }
}

impl FieldValue {
    pub fn is_text(&self) -> bool {
        matches!(self, FieldValue::Text(_))
    }
}

/// Render a duration in seconds as zero-padded `HH:MM:SS`. Non-finite or
/// negative input renders `00:00:00`.
pub fn seconds_to_hms(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "00:00:00".to_string();
    }
    let s = seconds as u64;
    format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}

/// Title-case an underscore-separated key: `"trail_e_biking"` →
/// `"Trail E Biking"`. Also used for Garmin's UPPER_SNAKE exercise-set
/// names, so the remainder of each word is lowercased.
pub fn title_case_key(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Extra frontmatter fields tailored to the activity's sport.
///
/// Field presence is gated: anything whose source value is missing, zero, or
/// non-positive is omitted entirely rather than written as zero. The one
/// exception is Climbing, whose `attempts`/`sends` are deliberate zero
/// placeholders for manual fill-in. Order is stable: heart rate first, then
/// sport-specific fields.
pub fn stat_fields(activity: &Activity, sport: Sport) -> Vec<(&'static str, FieldValue)> {
    let mut fields = Vec::new();

    let distance_m = activity.distance_m;
    let avg_speed = activity.average_speed_mps;
    let max_speed = activity.max_speed_mps;

    if let Some(hr) = activity.average_hr.filter(|hr| *hr > 0.0) {
        fields.push(("avg_hr", FieldValue::Int(hr as i64)));
    }
    if let Some(hr) = activity.max_hr.filter(|hr| *hr > 0.0) {
        fields.push(("max_hr", FieldValue::Int(hr as i64)));
    }

    match sport {
        Sport::Cardio => {
            if distance_m > 0.0 {
                fields.push(("distance", FieldValue::Float(round2(distance_m / 1000.0))));
            }
            if avg_speed > 0.0 {
                let secs_per_km = 1000.0 / avg_speed;
                fields.push((
                    "pace",
                    FieldValue::Text(format!(
                        "{}:{:02} /km",
                        (secs_per_km / 60.0) as i64,
                        (secs_per_km % 60.0) as i64
                    )),
                ));
            }
        }
        Sport::Cycling => {
            if distance_m > 0.0 {
                fields.push(("distance", FieldValue::Float(round2(distance_m / 1000.0))));
            }
            if avg_speed > 0.0 {
                fields.push(("avg_speed", FieldValue::Float(round1(avg_speed * 3.6))));
            }
        }
        Sport::Strength => {
            let volume_g: f64 = activity.exercise_sets.iter().map(|s| s.volume_g).sum();
            if volume_g > 0.0 {
                fields.push(("volume", FieldValue::Float(round1(volume_g / 1000.0))));
            }
            if !activity.exercise_sets.is_empty() {
                let names = activity
                    .exercise_sets
                    .iter()
                    .map(|s| title_case_key(s.sub_category.as_deref().unwrap_or(&s.category)))
                    .collect::<Vec<_>>()
                    .join(", ");
                fields.push(("exercises", FieldValue::Text(names)));
            }
        }
        Sport::WinterSports => {
            if distance_m > 0.0 {
                fields.push(("distance", FieldValue::Float(round2(distance_m / 1000.0))));
            }
            if max_speed > 0.0 {
                fields.push(("max_speed", FieldValue::Float(round1(max_speed * 3.6))));
            }
            if let Some(gain) = activity.elevation_gain_m.filter(|gain| *gain > 0.0) {
                fields.push(("elevation_gain", FieldValue::Int(gain as i64)));
            }
        }
        Sport::Hiking => {
            if distance_m > 0.0 {
                fields.push(("distance", FieldValue::Float(round2(distance_m / 1000.0))));
            }
            if let Some(gain) = activity.elevation_gain_m.filter(|gain| *gain > 0.0) {
                fields.push(("elevation_gain", FieldValue::Int(gain as i64)));
            }
        }
        Sport::WaterSports => {
            if distance_m > 0.0 {
                fields.push(("distance", FieldValue::Float(round2(distance_m / 1000.0))));
            }
        }
        Sport::Climbing => {
            fields.push(("attempts", FieldValue::Int(0)));
            fields.push(("sends", FieldValue::Int(0)));
        }
        Sport::TeamSports => {}
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use fit_core::{ActivityId, ExerciseSet};

    fn base(type_key: &str) -> Activity {
        Activity {
            id: ActivityId::new(1),
            start_time_local: "2024-01-02 08:00:00".to_string(),
            start_time_gmt: None,
            type_key: type_key.to_string(),
            duration_secs: 1800.0,
            calories: 400.0,
            distance_m: 0.0,
            average_speed_mps: 0.0,
            max_speed_mps: 0.0,
            average_hr: None,
            max_hr: None,
            elevation_gain_m: None,
            active_sets: None,
            total_reps: None,
            exercise_sets: Vec::new(),
        }
    }

    #[test]
    fn test_seconds_to_hms() {
        assert_eq!(seconds_to_hms(0.0), "00:00:00");
        assert_eq!(seconds_to_hms(1800.0), "00:30:00");
        assert_eq!(seconds_to_hms(3661.9), "01:01:01");
        assert_eq!(seconds_to_hms(-5.0), "00:00:00");
        assert_eq!(seconds_to_hms(f64::NAN), "00:00:00");
    }

    #[test]
    fn test_title_case_key() {
        assert_eq!(title_case_key("trail_e_biking"), "Trail E Biking");
        assert_eq!(title_case_key("BENCH_PRESS"), "Bench Press");
        assert_eq!(title_case_key("running"), "Running");
        assert_eq!(title_case_key(""), "");
    }

    #[test]
    fn test_cardio_distance_and_pace() {
        let mut act = base("running");
        act.distance_m = 5000.0;
        act.average_speed_mps = 1000.0 / 360.0; // 6:00 /km
        let fields = stat_fields(&act, Sport::Cardio);
        assert_eq!(
            fields,
            vec![
                ("distance", FieldValue::Float(5.0)),
                ("pace", FieldValue::Text("6:00 /km".to_string())),
            ]
        );
        assert_eq!(fields[0].1.to_string(), "5.0");
    }

    #[test]
    fn test_zero_values_are_omitted() {
        let act = base("running");
        assert!(stat_fields(&act, Sport::Cardio).is_empty());

        let mut act = base("cycling");
        act.average_hr = Some(0.0);
        act.max_hr = Some(0.0);
        assert!(stat_fields(&act, Sport::Cycling).is_empty());
    }

    #[test]
    fn test_heart_rate_precedes_sport_fields() {
        let mut act = base("hiking");
        act.average_hr = Some(121.7);
        act.distance_m = 12345.0;
        act.elevation_gain_m = Some(430.9);
        let fields = stat_fields(&act, Sport::Hiking);
        assert_eq!(
            fields,
            vec![
                ("avg_hr", FieldValue::Int(121)),
                ("distance", FieldValue::Float(12.35)),
                ("elevation_gain", FieldValue::Int(430)),
            ]
        );
    }

    #[test]
    fn test_cycling_speed_conversion() {
        let mut act = base("road_biking");
        act.distance_m = 40000.0;
        act.average_speed_mps = 8.333; // 30 km/h
        let fields = stat_fields(&act, Sport::Cycling);
        assert_eq!(fields[0], ("distance", FieldValue::Float(40.0)));
        assert_eq!(fields[1], ("avg_speed", FieldValue::Float(30.0)));
        assert_eq!(fields[1].1.to_string(), "30.0");
    }

    #[test]
    fn test_strength_volume_and_exercises() {
        let mut act = base("strength_training");
        act.exercise_sets = vec![
            ExerciseSet {
                category: "BENCH_PRESS".to_string(),
                sub_category: None,
                volume_g: 1200000.0,
            },
            ExerciseSet {
                category: "SQUAT".to_string(),
                sub_category: Some("BACK_SQUAT".to_string()),
                volume_g: 2400000.0,
            },
        ];
        let fields = stat_fields(&act, Sport::Strength);
        assert_eq!(
            fields,
            vec![
                ("volume", FieldValue::Float(3600.0)),
                (
                    "exercises",
                    FieldValue::Text("Bench Press, Back Squat".to_string())
                ),
            ]
        );
    }

    #[test]
    fn test_winter_sports_max_speed_and_elevation() {
        let mut act = base("resort_skiing");
        act.distance_m = 22500.0;
        act.max_speed_mps = 18.06; // 65 km/h
        act.elevation_gain_m = Some(1234.0);
        let fields = stat_fields(&act, Sport::WinterSports);
        assert_eq!(fields[0], ("distance", FieldValue::Float(22.5)));
        assert_eq!(fields[1], ("max_speed", FieldValue::Float(65.0)));
        assert_eq!(fields[2], ("elevation_gain", FieldValue::Int(1234)));
    }

    #[test]
    fn test_climbing_placeholders() {
        let act = base("bouldering");
        let fields = stat_fields(&act, Sport::Climbing);
        assert_eq!(
            fields,
            vec![
                ("attempts", FieldValue::Int(0)),
                ("sends", FieldValue::Int(0)),
            ]
        );
    }

    #[test]
    fn test_team_sports_heart_rate_only() {
        let mut act = base("soccer");
        act.distance_m = 8000.0; // present on the record but not a note field
        act.average_hr = Some(158.0);
        let fields = stat_fields(&act, Sport::TeamSports);
        assert_eq!(fields, vec![("avg_hr", FieldValue::Int(158))]);
    }
}
