//! Countries bordering, or disputing territory with, the region of interest.

/// The fixed border-issue country list, in display order.
pub const BORDER_ISSUE_COUNTRIES: [&str; 16] = [
    "Philippines",
    "Vietnam",
    "Japan",
    "Nepal",
    "Bhutan",
    "India",
    "Indonesia",
    "Malaysia",
    "Laos",
    "South Korea",
    "North Korea",
    "Mongolia",
    "Myanmar",
    "Tibet",
    "Singapore",
    "Brunei",
];
