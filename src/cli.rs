use clap::Parser;
use std::fmt::Write as _;
use std::path::PathBuf;

use duotone_dither::{DitherAlgorithm, Rgb, Theme};

use crate::params::Resize;

#[derive(Parser, Debug)]
#[command(name = "duotone")]
#[command(about = "Convert any image to a two-color dithered rendition")]
#[command(after_help = "Examples:
  duotone photo.jpg out.png --theme warm
  duotone landscape.png out.png --theme night --dither atkinson
  duotone input.jpg out.png --bg \"#eabab0\" --fg \"#3a4a3e\"
  duotone photo.jpg out.png --contrast 1.3 --resize 1500x500
  duotone photo.jpg out.png --scale 4")]
pub struct Cli {
    /// Input image (format detected from content)
    #[arg(required_unless_present = "list_themes")]
    pub input: Option<PathBuf>,

    /// Output PNG path (parent directories are created)
    #[arg(required_unless_present = "list_themes")]
    pub output: Option<PathBuf>,

    /// Color theme [default: warm]
    #[arg(long)]
    pub theme: Option<Theme>,

    /// Background color as #RRGGBB (needs --fg too)
    #[arg(long)]
    pub bg: Option<Rgb>,

    /// Foreground color as #RRGGBB (needs --bg too)
    #[arg(long)]
    pub fg: Option<Rgb>,

    /// Dither method: floyd-steinberg, ordered or atkinson [default: floyd-steinberg]
    #[arg(long)]
    pub dither: Option<DitherAlgorithm>,

    /// Contrast factor [default: 1.0]
    #[arg(long, allow_negative_numbers = true)]
    pub contrast: Option<f32>,

    /// Brightness factor [default: 1.0]
    #[arg(long, allow_negative_numbers = true)]
    pub brightness: Option<f32>,

    /// Invert light and dark
    #[arg(long)]
    pub invert: bool,

    /// Resize to WIDTHxHEIGHT before dithering (overrides --scale)
    #[arg(long, value_name = "WIDTHxHEIGHT")]
    pub resize: Option<Resize>,

    /// Dither at 1/N size, then scale back up for chunky pixels [default: 1]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub scale: Option<u32>,

    /// YAML settings file (also read from $DUOTONE_CONFIG)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the available themes and exit
    #[arg(long)]
    pub list_themes: bool,
}

/// Table of all themes with their colors, one per line.
pub fn theme_table() -> String {
    let mut out = String::from("Available themes:\n");
    for theme in Theme::ALL {
        let colors = theme.colors();
        let _ = writeln!(
            out,
            "  {:<12} bg {}  fg {}",
            theme.name(),
            colors.background,
            colors.foreground
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_full_command_line() {
        let cli = Cli::try_parse_from([
            "duotone",
            "in.jpg",
            "out/result.png",
            "--theme",
            "night",
            "--bg",
            "#000000",
            "--fg",
            "ffffff",
            "--dither",
            "atkinson",
            "--contrast",
            "1.3",
            "--brightness",
            "0.8",
            "--invert",
            "--resize",
            "200x100",
            "--scale",
            "4",
        ])
        .unwrap();

        assert_eq!(cli.input, Some(PathBuf::from("in.jpg")));
        assert_eq!(cli.output, Some(PathBuf::from("out/result.png")));
        assert_eq!(cli.theme, Some(Theme::Night));
        assert_eq!(cli.bg, Some(Rgb::new(0, 0, 0)));
        assert_eq!(cli.fg, Some(Rgb::new(255, 255, 255)));
        assert_eq!(cli.dither, Some(DitherAlgorithm::Atkinson));
        assert_eq!(cli.contrast, Some(1.3));
        assert_eq!(cli.brightness, Some(0.8));
        assert!(cli.invert);
        assert_eq!(
            cli.resize,
            Some(Resize {
                width: 200,
                height: 100
            })
        );
        assert_eq!(cli.scale, Some(4));
    }

    #[test]
    fn test_minimal_command_line() {
        let cli = Cli::try_parse_from(["duotone", "a.png", "b.png"]).unwrap();
        assert_eq!(cli.theme, None);
        assert_eq!(cli.dither, None);
        assert!(!cli.invert);
        assert!(!cli.list_themes);
    }

    #[test]
    fn test_rejects_bad_values() {
        for args in [
            vec!["duotone", "a", "b", "--theme", "neon"],
            vec!["duotone", "a", "b", "--bg", "#fff"],
            vec!["duotone", "a", "b", "--dither", "random"],
            vec!["duotone", "a", "b", "--resize", "200"],
            vec!["duotone", "a", "b", "--scale", "0"],
            vec!["duotone", "a", "b", "--contrast", "high"],
        ] {
            assert!(Cli::try_parse_from(&args).is_err(), "{args:?} should fail");
        }
    }

    #[test]
    fn test_negative_factors_as_separate_arguments() {
        let cli = Cli::try_parse_from([
            "duotone",
            "a.png",
            "b.png",
            "--contrast",
            "-1.0",
            "--brightness",
            "-0.5",
        ])
        .unwrap();
        assert_eq!(cli.contrast, Some(-1.0));
        assert_eq!(cli.brightness, Some(-0.5));
    }

    #[test]
    fn test_positionals_required_unless_listing() {
        assert!(Cli::try_parse_from(["duotone", "a.png"]).is_err());
        let cli = Cli::try_parse_from(["duotone", "--list-themes"]).unwrap();
        assert!(cli.list_themes);
        assert_eq!(cli.input, None);
    }

    #[test]
    fn test_theme_table_lists_every_theme() {
        let table = theme_table();
        for theme in Theme::ALL {
            assert!(table.contains(theme.name()), "missing {theme}");
        }
        let night = "night        bg #192337  fg #b4c3dc";
        assert!(table.contains(night), "{table}");
    }
}
