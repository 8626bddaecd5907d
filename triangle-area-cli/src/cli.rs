use clap::{ArgAction, Parser, ValueEnum};

use triangle_area_core::prelude::MAX_PRECISION;

use crate::messages::Language;

#[derive(Clone, Debug, Parser)]
#[command(name = "triangle-area", version, author, about)]
#[command(help_template = "\
{name} {version}
{about}
{author}

{usage-heading}
{tab}{usage}

{all-args}
")]
pub struct CliArgs {
    /// Number of triangles
    ///
    /// Asked for interactively when omitted
    #[arg(
        short = 'n',
        long,
        value_name = "INTEGER",
        allow_negative_numbers = true
    )]
    pub count: Option<i64>,

    /// Report format written to standard output
    #[arg(short, long, value_name = "FORMAT", default_value_t)]
    pub format: OutputFormat,

    /// Decimal places of displayed areas
    #[arg(
        long,
        value_name = "INTEGER",
        default_value_t = 2,
        value_parser = clap::value_parser!(u16).range(..=i64::from(MAX_PRECISION))
    )]
    pub precision: u16,

    /// Language of prompts and messages
    #[arg(short, long, value_name = "LANGUAGE", default_value_t)]
    pub language: LanguageSelection,

    /// Raise log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, ValueEnum)]
#[strum(serialize_all = "kebab-case")]
pub enum OutputFormat {
    /// Human readable lines
    #[default]
    Text,
    /// Compact JSON report
    Json,
    /// Pretty JSON report
    JsonPretty,
    /// YAML report
    Yaml,
}

impl OutputFormat {
    /// Machine readable formats.
    pub fn is_structured(self) -> bool {
        !matches!(self, Self::Text)
    }
}

#[derive(Clone, Copy, Debug, Default, strum::Display, ValueEnum)]
#[strum(serialize_all = "kebab-case")]
pub enum LanguageSelection {
    #[default]
    En,
    Uk,
}
impl From<LanguageSelection> for Language {
    fn from(value: LanguageSelection) -> Self {
        use Language as T; // target
        use LanguageSelection as S; // source
        match value {
            S::En => T::English,
            S::Uk => T::Ukrainian,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_range() {
        let args = CliArgs::try_parse_from(["triangle-area", "--precision", "17"]).unwrap();
        assert_eq!(args.precision, MAX_PRECISION);
        for precision in ["18", "70000", "-1"] {
            assert!(CliArgs::try_parse_from(["triangle-area", "--precision", precision]).is_err());
        }
    }
}
