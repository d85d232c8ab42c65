use fit_core::{ActivityId, Sport};
use taxonomy::FieldValue;

/// One workout note ready to be written: ordered frontmatter plus the
/// `#workouts` marker body that the vault's queries key on.
#[derive(Debug, Clone)]
pub struct WorkoutNote {
    /// `YYYY-MM-DD` of the workout in local time.
    pub date: String,
    pub exercise: String,
    pub sets: String,
    pub reps: String,
    /// Duration as `HH:MM:SS`.
    pub time: String,
    pub sport: Sport,
    pub calories: i64,
    /// Present exactly when the sync created the note. Notes without one are
    /// externally imported and serve only as dedup anchors.
    pub garmin_id: Option<ActivityId>,
    /// Sport-specific derived fields, in insertion order.
    pub stats: Vec<(&'static str, FieldValue)>,
}

impl WorkoutNote {
    /// Render the full note payload.
    ///
    /// The core fields are always quoted to match the corpus the CSV importer
    /// seeded; derived stat values are quoted only when textual, leaving
    /// numbers bare and sortable.
    pub fn render(&self) -> String {
        let mut lines = vec![
            "---".to_string(),
            format!("date_of_workout: \"{}\"", self.date),
            format!("exercise: \"{}\"", self.exercise),
            format!("sets: \"{}\"", self.sets),
            format!("reps: \"{}\"", self.reps),
            format!("time: \"{}\"", self.time),
            "weight: \"0\"".to_string(),
            format!("type: \"{}\"", self.sport),
            format!("calories: \"{}\"", self.calories),
        ];
        if let Some(id) = self.garmin_id {
            lines.push(format!("garmin_id: \"{id}\""));
        }
        for (key, value) in &self.stats {
            if value.is_text() {
                lines.push(format!("{key}: \"{value}\""));
            } else {
                lines.push(format!("{key}: {value}"));
            }
        }
        lines.push("---".to_string());
        lines.push("#workouts".to_string());

        let mut payload = lines.join("\n");
        payload.push('\n');
        payload
    }
}
