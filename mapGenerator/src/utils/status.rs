use std::path::Path;

use crate::config::constants::BANNER_RULE_WIDTH;

pub fn banner_lines() -> Vec<String> {
    vec![
        "🚕 Starting Davao City Taxi Booking System...".to_string(),
        "=".repeat(BANNER_RULE_WIDTH),
    ]
}

pub fn saved_lines(file_name: &str, absolute: &Path) -> Vec<String> {
    vec![
        format!("✅ Map saved as '{}'", file_name),
        format!("📂 Location: {}", absolute.display()),
    ]
}

pub fn browser_line(opened: Result<(), String>) -> String {
    match opened {
        Ok(()) => "🌐 Opening map in browser...".to_string(),
        Err(reason) => format!("⚠️  Could not open a browser ({}); open the file manually.", reason),
    }
}

pub fn skipped_browser_line() -> String {
    "🌐 Browser launch skipped; open the file manually.".to_string()
}

// Describes what the page actually does: no buttons, no fare calculation
pub fn usage_lines() -> Vec<String> {
    vec![
        String::new(),
        "📝 How to use:".to_string(),
        "1. Click anywhere on the map for PICKUP (green marker)".to_string(),
        "2. Click again for DESTINATION (red marker)".to_string(),
        "3. Further clicks move the DESTINATION marker; the pickup stays put".to_string(),
        "4. Reload the page to start over".to_string(),
        String::new(),
        "✨ Map is ready! Start clicking!".to_string(),
    ]
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
