//! Neon ASCII banner with gradient (INTOUCH).

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

const TITLE: &str = "INTOUCH";

/// Signal red (#ff3b3b).
const SIGNAL_RED: (u8, u8, u8) = (0xff, 0x3b, 0x3b);
/// Warm amber (#ffb347).
const WARM_AMBER: (u8, u8, u8) = (0xff, 0xb3, 0x47);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// Figlet art for the title, or the plain title if the font cannot render it.
fn title_art() -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(TITLE).map(|figure| figure.to_string()))
        .unwrap_or_else(|| TITLE.to_string())
}

/// Prints the welcome banner with a red-to-amber gradient, then the version.
pub fn print_welcome() {
    let mut out = stdout();
    let art = title_art();
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(SIGNAL_RED, WARM_AMBER, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: WARM_AMBER.0,
        g: WARM_AMBER.1,
        b: WARM_AMBER.2,
    }));
    let _ = out.execute(Print(format!("v{}\r\n", version)));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp_rgb(SIGNAL_RED, WARM_AMBER, 0.0), SIGNAL_RED);
        assert_eq!(lerp_rgb(SIGNAL_RED, WARM_AMBER, 1.0), WARM_AMBER);
    }

    #[test]
    fn title_art_is_not_empty() {
        assert!(!title_art().trim().is_empty());
    }
}
