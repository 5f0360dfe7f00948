/// Weight used when no keyword matches the course name.
pub const DEFAULT_DIFFICULTY: f64 = 0.7;

/// Subject keywords and their difficulty weights, in match order.
pub const KEYWORDS: [(&str, f64); 8] = [
    ("calculus", 0.8),
    ("physics", 0.75),
    ("programming", 0.7),
    ("history", 0.6),
    ("literature", 0.65),
    ("chemistry", 0.75),
    ("biology", 0.7),
    ("economics", 0.65),
];

/// Case-insensitive substring match against [`KEYWORDS`]. When several
/// keywords match, the one listed last wins.
pub fn difficulty_for(course_name: &str) -> f64 {
    let lowercase = course_name.to_lowercase();
    KEYWORDS
        .iter()
        .filter(|(keyword, _)| lowercase.contains(keyword))
        .last()
        .map(|(_, weight)| *weight)
        .unwrap_or(DEFAULT_DIFFICULTY)
}
