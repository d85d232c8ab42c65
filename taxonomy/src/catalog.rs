use fit_core::Sport;
use std::collections::HashMap;

/// Immutable lookup from a raw Garmin type key to its broad sport category
/// and display exercise name.
///
/// Construct once (usually [`SportCatalog::builtin`]) and hand a reference to
/// whatever needs classification. A miss is not an error: the caller applies
/// [`Sport::FALLBACK`] and a title-cased key, and keeps the activity.
#[derive(Debug, Clone)]
pub struct SportCatalog {
    entries: HashMap<String, (Sport, String)>,
}

impl SportCatalog {
    /// Catalog covering every type key Garmin Connect is known to emit.
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN.iter().map(|&(key, sport, name)| (key, sport, name)))
    }

    /// Build a catalog from arbitrary `(type_key, sport, display_name)`
    /// entries. Keys are lowercased on insert; lookups are by lowercase key.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, Sport, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, sport, name)| (key.to_lowercase(), (sport, name.to_string())))
                .collect(),
        }
    }

    /// Look up a raw type key. `None` means the key is unmapped and the
    /// caller should fall back (and record the key for the end-of-run
    /// report).
    pub fn classify(&self, type_key: &str) -> Option<(Sport, &str)> {
        self.entries
            .get(type_key)
            .map(|(sport, name)| (*sport, name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Garmin `typeKey` → (category, exercise display name).
///
/// Eight categories: Cardio | Cycling | Strength | Team Sports |
/// Water Sports | Hiking | Climbing | Winter Sports.
const BUILTIN: &[(&str, Sport, &str)] = &[
    // Cardio (Running + Walking)
    ("running", Sport::Cardio, "Running"),
    ("street_running", Sport::Cardio, "Street Running"),
    ("track_running", Sport::Cardio, "Track Running"),
    ("trail_running", Sport::Cardio, "Trail Running"),
    ("treadmill_running", Sport::Cardio, "Treadmill Running"),
    ("indoor_running", Sport::Cardio, "Indoor Running"),
    ("indoor_track", Sport::Cardio, "Indoor Track"),
    ("ultra_run", Sport::Cardio, "Ultra Running"),
    ("obstacle_run", Sport::Cardio, "Obstacle Course"),
    ("virtual_run", Sport::Cardio, "Virtual Running"),
    ("wheelchair_push_run", Sport::Cardio, "Wheelchair Running"),
    ("walking", Sport::Cardio, "Walking"),
    ("casual_walking", Sport::Cardio, "Walking"),
    ("speed_walking", Sport::Cardio, "Speed Walking"),
    ("indoor_walking", Sport::Cardio, "Indoor Walking"),
    ("indoor_walk", Sport::Cardio, "Indoor Walking"),
    ("step_tracking_and_walking", Sport::Cardio, "Walking"),
    ("steps", Sport::Cardio, "Walking"),
    ("rucking", Sport::Cardio, "Rucking"),
    ("wheelchair_push_walk", Sport::Cardio, "Wheelchair Walking"),
    // Cycling
    ("cycling", Sport::Cycling, "Cycling"),
    ("road_biking", Sport::Cycling, "Road Cycling"),
    ("mountain_biking", Sport::Cycling, "Mountain Biking"),
    ("gravel_cycling", Sport::Cycling, "Gravel Cycling"),
    ("indoor_cycling", Sport::Cycling, "Indoor Cycling"),
    ("indoor_bike", Sport::Cycling, "Indoor Cycling"),
    ("track_cycling", Sport::Cycling, "Track Cycling"),
    ("cyclocross", Sport::Cycling, "Cyclocross"),
    ("recumbent_cycling", Sport::Cycling, "Recumbent Cycling"),
    ("downhill_biking", Sport::Cycling, "Downhill MTB"),
    ("enduro_mtb", Sport::Cycling, "Enduro MTB"),
    ("bmx", Sport::Cycling, "BMX"),
    ("hand_cycling", Sport::Cycling, "Handcycling"),
    ("indoor_hand_cycling", Sport::Cycling, "Indoor Handcycling"),
    ("virtual_ride", Sport::Cycling, "Virtual Cycling"),
    ("e_bike_fitness", Sport::Cycling, "E-Bike"),
    ("e_bike_mountain", Sport::Cycling, "E-Mountain Bike"),
    ("e_enduro_mtb", Sport::Cycling, "E-Enduro MTB"),
    ("unbound_gravel_cycling", Sport::Cycling, "Gravel Cycling"),
    // Strength
    ("strength_training", Sport::Strength, "Strength Training"),
    ("fitness_equipment", Sport::Strength, "Gym"),
    ("cardio_training", Sport::Strength, "Cardio Training"),
    ("indoor_cardio", Sport::Strength, "Cardio"),
    ("elliptical", Sport::Strength, "Elliptical"),
    ("stair_climbing", Sport::Strength, "Stair Climber"),
    ("indoor_rowing", Sport::Strength, "Rowing Machine"),
    ("floor_climbing", Sport::Strength, "Floor Climbing"),
    ("jump_rope", Sport::Strength, "Jump Rope"),
    ("hiit", Sport::Strength, "HIIT"),
    ("yoga", Sport::Strength, "Yoga"),
    ("pilates", Sport::Strength, "Pilates"),
    ("meditation", Sport::Strength, "Meditation"),
    ("breathwork", Sport::Strength, "Breathwork"),
    ("mobility", Sport::Strength, "Mobility"),
    ("boxing", Sport::Strength, "Boxing"),
    ("mixed_martial_arts", Sport::Strength, "MMA"),
    ("toe_to_toe", Sport::Strength, "Toe-to-Toe"),
    ("toe_to_toe_no_tm", Sport::Strength, "Toe-to-Toe"),
    ("dance", Sport::Strength, "Dance"),
    ("other", Sport::Strength, "Other"),
    ("uncategorized", Sport::Strength, "Other"),
    ("multi_sport", Sport::Strength, "Multisport"),
    ("triathlon", Sport::Strength, "Triathlon"),
    ("transition", Sport::Strength, "Transition"),
    ("para_sports", Sport::Strength, "Para Sports"),
    ("wheelchair_pushes", Sport::Strength, "Wheelchair"),
    ("pushes", Sport::Strength, "Wheelchair"),
    // Team Sports
    ("soccer", Sport::TeamSports, "Football"),
    ("soccer_football", Sport::TeamSports, "Football"),
    ("football", Sport::TeamSports, "Football"),
    ("american_football", Sport::TeamSports, "American Football"),
    ("rugby", Sport::TeamSports, "Rugby"),
    ("field_hockey", Sport::TeamSports, "Field Hockey"),
    ("lacrosse", Sport::TeamSports, "Lacrosse"),
    ("ultimate_disc", Sport::TeamSports, "Ultimate Disc"),
    ("team_sports", Sport::TeamSports, "Team Sports"),
    ("volleyball", Sport::TeamSports, "Volleyball"),
    ("basketball", Sport::TeamSports, "Basketball"),
    ("baseball", Sport::TeamSports, "Baseball"),
    ("softball", Sport::TeamSports, "Softball"),
    ("ice_hockey", Sport::TeamSports, "Ice Hockey"),
    ("cricket", Sport::TeamSports, "Cricket"),
    ("tennis", Sport::TeamSports, "Tennis"),
    ("table_tennis", Sport::TeamSports, "Table Tennis"),
    ("badminton", Sport::TeamSports, "Badminton"),
    ("squash", Sport::TeamSports, "Squash"),
    ("racquetball", Sport::TeamSports, "Racquetball"),
    ("paddelball", Sport::TeamSports, "Padel"),
    ("platform_tennis", Sport::TeamSports, "Platform Tennis"),
    ("pickleball", Sport::TeamSports, "Pickleball"),
    ("racket_sports", Sport::TeamSports, "Racket Sports"),
    ("racquet_sports", Sport::TeamSports, "Racket Sports"),
    ("disc_golf", Sport::TeamSports, "Disc Golf"),
    // Water Sports
    ("surfing", Sport::WaterSports, "Surfing"),
    ("surfing_v2", Sport::WaterSports, "Surfing"),
    ("stand_up_paddleboarding", Sport::WaterSports, "SUP"),
    ("kiteboarding", Sport::WaterSports, "Kiteboarding"),
    ("wind_kite_surfing", Sport::WaterSports, "Windsurfing"),
    ("windsurfing", Sport::WaterSports, "Windsurfing"),
    ("wakeboarding", Sport::WaterSports, "Wakeboarding"),
    ("wakesurfing", Sport::WaterSports, "Wakesurfing"),
    ("waterskiing", Sport::WaterSports, "Waterskiing"),
    ("water_tubing", Sport::WaterSports, "Tubing"),
    ("whitewater_rafting", Sport::WaterSports, "Whitewater Rafting"),
    ("whitewater_rafting_kayaking", Sport::WaterSports, "Whitewater Kayaking"),
    ("kayaking", Sport::WaterSports, "Kayaking"),
    ("paddling", Sport::WaterSports, "Canoeing"),
    ("paddle_sports", Sport::WaterSports, "Paddling"),
    ("sailing", Sport::WaterSports, "Sailing"),
    ("boating", Sport::WaterSports, "Boating"),
    ("water_sports", Sport::WaterSports, "Water Sports"),
    ("rowing", Sport::WaterSports, "Rowing"),
    ("swimming", Sport::WaterSports, "Swimming"),
    ("lap_swimming", Sport::WaterSports, "Pool Swimming"),
    ("pool_swimming", Sport::WaterSports, "Pool Swimming"),
    ("open_water_swimming", Sport::WaterSports, "Open Water Swimming"),
    ("pool_apnea", Sport::WaterSports, "Pool Apnea"),
    ("snorkeling", Sport::WaterSports, "Snorkeling"),
    ("diving", Sport::WaterSports, "Diving"),
    ("single_gas_diving", Sport::WaterSports, "Diving"),
    ("multi_gas_diving", Sport::WaterSports, "Diving"),
    ("gauge_diving", Sport::WaterSports, "Diving"),
    ("apnea_diving", Sport::WaterSports, "Apnea Diving"),
    ("apnea_hunting", Sport::WaterSports, "Apnea Hunting"),
    ("ccr_diving", Sport::WaterSports, "CCR Diving"),
    ("offshore_grinding", Sport::WaterSports, "Offshore Grinding"),
    ("onshore_grinding", Sport::WaterSports, "Onshore Grinding"),
    // Hiking
    ("hiking", Sport::Hiking, "Hiking"),
    ("mountaineering", Sport::Hiking, "Mountaineering"),
    ("hunting", Sport::Hiking, "Hunting"),
    ("hunting_fishing", Sport::Hiking, "Hunting & Fishing"),
    ("fishing", Sport::Hiking, "Fishing"),
    ("horseback_riding", Sport::Hiking, "Horseback Riding"),
    ("overland", Sport::Hiking, "Overland"),
    ("snow_shoe", Sport::Hiking, "Snowshoeing"),
    ("golf", Sport::Hiking, "Golf"),
    // Climbing
    ("bouldering", Sport::Climbing, "Bouldering"),
    ("rock_climbing", Sport::Climbing, "Rock Climbing"),
    ("indoor_climbing", Sport::Climbing, "Indoor Climbing"),
    // Winter Sports
    ("winter_sport", Sport::WinterSports, "Winter Sports"),
    ("resort_skiing", Sport::WinterSports, "Skiing"),
    ("resort_skiing_snowboarding", Sport::WinterSports, "Skiing"),
    ("resort_skiing_snowboarding_ws", Sport::WinterSports, "Skiing"),
    ("resort_snowboarding", Sport::WinterSports, "Snowboarding"),
    ("snowboarding", Sport::WinterSports, "Snowboarding"),
    ("snow_skiing", Sport::WinterSports, "Skiing"),
    ("cross_country_skiing", Sport::WinterSports, "Cross-Country Skiing"),
    ("skate_skiing", Sport::WinterSports, "Skate Skiing"),
    ("skate_skiing_ws", Sport::WinterSports, "Skate Skiing"),
    ("backcountry_skiing", Sport::WinterSports, "Backcountry Skiing"),
    ("backcountry_skiing_ws", Sport::WinterSports, "Backcountry Skiing"),
    ("backcountry_skiing_snowboarding", Sport::WinterSports, "Backcountry Skiing"),
    ("backcountry_snowboarding", Sport::WinterSports, "Backcountry Snowboarding"),
    ("skating", Sport::WinterSports, "Skating"),
    ("inline_skating", Sport::WinterSports, "Inline Skating"),
    ("snowmobiling", Sport::WinterSports, "Snowmobiling"),
];
