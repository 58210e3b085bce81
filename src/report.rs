//! CLI output for the `check` command.
//!
//! ```text
//! URL
//!     https://example.com/
//! Output
//!     output_qr/qr_20240601_120000.png
//! Colors
//!     fill: black (#000000)
//!     back: white (#ffffff)
//! Symbol
//!     error correction: H
//!     module size: 8px
//!     border: 2 modules
//! ```
//!
//! [`format_check_output`] is pure for testability; [`print_check_output`]
//! writes it to stdout.

use crate::color::Color;
use crate::config::EffectiveConfig;
use crate::generate::Plan;

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn hex(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

pub fn format_check_output(config: &EffectiveConfig, plan: &Plan) -> Vec<String> {
    vec![
        "URL".to_string(),
        format!("{}{}", indent(1), plan.url),
        "Output".to_string(),
        format!("{}{}", indent(1), plan.target.path().display()),
        "Colors".to_string(),
        format!("{}fill: {} ({})", indent(1), config.fill_color, hex(plan.fill)),
        format!("{}back: {} ({})", indent(1), config.back_color, hex(plan.back)),
        "Symbol".to_string(),
        format!(
            "{}error correction: {:?}",
            indent(1),
            plan.settings.ec_level
        ),
        format!("{}module size: {}px", indent(1), plan.settings.module_size),
        format!("{}border: {} modules", indent(1), plan.settings.border),
    ]
}

pub fn print_check_output(config: &EffectiveConfig, plan: &Plan) {
    for line in format_check_output(config, plan) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::plan;
    use chrono::{TimeZone, Utc};
    use std::path::PathBuf;

    #[test]
    fn check_output_lists_every_section() {
        let config = EffectiveConfig {
            url: "https://example.com".into(),
            output_dir: PathBuf::from("q"),
            filename: "out.png".into(),
            fill_color: "navy".into(),
            back_color: "#fff".into(),
        };
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let plan = plan(&config, &now).unwrap();

        let lines = format_check_output(&config, &plan);
        assert_eq!(
            lines,
            vec![
                "URL",
                "    https://example.com/",
                "Output",
                "    q/out.png",
                "Colors",
                "    fill: navy (#000080)",
                "    back: #fff (#ffffff)",
                "Symbol",
                "    error correction: H",
                "    module size: 8px",
                "    border: 2 modules",
            ]
        );
    }
}
