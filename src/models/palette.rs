//! Terminal color palette for expenses and goals

use uuid::Uuid;

/// Colors a new record may be assigned
pub const TERMINAL_COLORS: [&str; 11] = [
    "#00FF00", // bright green
    "#00FFFF", // cyan
    "#FFFF00", // yellow
    "#FF00FF", // magenta
    "#FF6600", // orange
    "#0066FF", // blue
    "#66FF00", // lime
    "#FF0066", // pink
    "#00FF66", // green-cyan
    "#6600FF", // purple
    "#FFFFFF", // white
];

/// Pick a palette color at random
pub fn random_color() -> String {
    let index = (Uuid::new_v4().as_u128() % TERMINAL_COLORS.len() as u128) as usize;
    TERMINAL_COLORS[index].to_string()
}

/// Check whether a color belongs to the palette (case-insensitive)
pub fn is_palette_color(color: &str) -> bool {
    TERMINAL_COLORS
        .iter()
        .any(|c| c.eq_ignore_ascii_case(color.trim()))
}

/// Normalize user input to a palette entry
///
/// Accepts the hex code with or without `#`, or a palette index.
pub fn resolve_color(input: &str) -> Option<String> {
    let input = input.trim();
    if let Ok(index) = input.parse::<usize>() {
        return TERMINAL_COLORS.get(index).map(|c| c.to_string());
    }

    let hex = if input.starts_with('#') {
        input.to_uppercase()
    } else {
        format!("#{}", input.to_uppercase())
    };

    TERMINAL_COLORS
        .iter()
        .find(|c| **c == hex)
        .map(|c| c.to_string())
}

/// Parse a `#RRGGBB` string into its components
pub fn hex_to_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_color_is_in_palette() {
        for _ in 0..100 {
            assert!(is_palette_color(&random_color()));
        }
    }

    #[test]
    fn test_resolve_color() {
        assert_eq!(resolve_color("00ffff").as_deref(), Some("#00FFFF"));
        assert_eq!(resolve_color("#ff6600").as_deref(), Some("#FF6600"));
        assert_eq!(resolve_color("0").as_deref(), Some("#00FF00"));
        assert_eq!(resolve_color("#123456"), None);
        assert_eq!(resolve_color("99"), None);
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#FF6600"), Some((255, 102, 0)));
        assert_eq!(hex_to_rgb("FF6600"), None);
        assert_eq!(hex_to_rgb("#FFF"), None);
    }
}
