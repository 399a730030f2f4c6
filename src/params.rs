use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use duotone_dither::{ColorPair, DitherAlgorithm, Duotoner, Rgb, Theme};

use crate::cli::Cli;
use crate::config::Settings;
use crate::error::AppError;

/// Absolute resize target parsed from `WIDTHxHEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resize {
    pub width: u32,
    pub height: u32,
}

impl FromStr for Resize {
    type Err = AppError;

    /// Accepts `200x100` or `200X100`; both sides must be positive integers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            AppError::InvalidArgument(format!(
                "invalid resize {s:?}, expected WIDTHxHEIGHT with positive integers"
            ))
        };

        let (width, height) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
        let width: u32 = width.trim().parse().map_err(|_| invalid())?;
        let height: u32 = height.trim().parse().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        Ok(Self { width, height })
    }
}

impl fmt::Display for Resize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Everything one run needs, resolved from flags, settings and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineParams {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Theme that supplied the colors; `None` when explicit colors won.
    pub theme: Option<Theme>,
    pub colors: ColorPair,
    pub algorithm: DitherAlgorithm,
    pub contrast: f32,
    pub brightness: f32,
    pub invert: bool,
    pub resize: Option<Resize>,
    pub scale: u32,
}

impl PipelineParams {
    /// Merge command-line flags over settings-file values over defaults.
    pub fn resolve(cli: &Cli, settings: &Settings) -> Result<Self, AppError> {
        let input = cli
            .input
            .clone()
            .ok_or_else(|| AppError::InvalidArgument("missing input path".to_string()))?;
        let output = cli
            .output
            .clone()
            .ok_or_else(|| AppError::InvalidArgument("missing output path".to_string()))?;

        let theme = match cli.theme {
            Some(theme) => Some(theme),
            None => parse_setting::<Theme>("theme", settings.theme.as_deref())?,
        };
        let bg = match cli.bg {
            Some(color) => Some(color),
            None => parse_setting::<Rgb>("bg", settings.bg.as_deref())?,
        };
        let fg = match cli.fg {
            Some(color) => Some(color),
            None => parse_setting::<Rgb>("fg", settings.fg.as_deref())?,
        };
        let algorithm = match cli.dither {
            Some(algorithm) => algorithm,
            None => parse_setting::<DitherAlgorithm>("dither", settings.dither.as_deref())?
                .unwrap_or_default(),
        };

        let scale = cli.scale.or(settings.scale).unwrap_or(1);
        if scale == 0 {
            return Err(AppError::InvalidArgument(
                "scale must be at least 1".to_string(),
            ));
        }

        match (bg, fg) {
            (Some(_), None) => tracing::warn!("--bg given without --fg, using theme colors"),
            (None, Some(_)) => tracing::warn!("--fg given without --bg, using theme colors"),
            _ => {}
        }
        let explicit = bg.is_some() && fg.is_some();
        let colors = ColorPair::resolve(theme, bg, fg);

        Ok(Self {
            input,
            output,
            theme: if explicit {
                None
            } else {
                Some(theme.unwrap_or_default())
            },
            colors,
            algorithm,
            contrast: cli.contrast.or(settings.contrast).unwrap_or(1.0),
            brightness: cli.brightness.or(settings.brightness).unwrap_or(1.0),
            invert: cli.invert || settings.invert.unwrap_or(false),
            resize: cli.resize,
            scale,
        })
    }

    /// Renderer configured with these parameters.
    pub fn duotoner(&self) -> Duotoner {
        let duotoner = Duotoner::new(self.colors)
            .algorithm(self.algorithm)
            .contrast(self.contrast)
            .brightness(self.brightness)
            .invert(self.invert)
            .pixel_scale(self.scale);
        match self.resize {
            Some(size) => duotoner.resize(size.width, size.height),
            None => duotoner,
        }
    }
}

/// Parse an optional settings-file string, reporting the key on failure.
fn parse_setting<T>(key: &str, value: Option<&str>) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value
        .map(|v| {
            v.parse::<T>()
                .map_err(|e| AppError::InvalidArgument(format!("settings key `{key}`: {e}")))
        })
        .transpose()
}
