use clap::{Parser, Subcommand, ValueEnum};

use crate::estimator::constants::{
    DEFAULT_BEER_SHARE, DEFAULT_COKE_SHARE, DEFAULT_HEADCOUNT, DEFAULT_LIQUOR_SHARE,
    DEFAULT_WEED_SHARE,
};
use crate::models::{clamp_headcount, EstimationInput, Vibe};

/// Party Supply Calculator: beer, booze, za and bag estimates from headcount and vibe.
#[derive(Parser, Debug)]
#[command(name = "party_supply")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format for estimates.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Estimate supplies from flags.
    Estimate(EstimateArgs),

    /// Edit inputs one at a time, re-estimating after each change.
    Interactive,

    /// List the vibe presets.
    Presets,
}

impl Default for Command {
    fn default() -> Self {
        Command::Estimate(EstimateArgs::default())
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct EstimateArgs {
    /// Number of guests (floored to 1).
    #[arg(long, default_value_t = DEFAULT_HEADCOUNT as i64, allow_negative_numbers = true)]
    pub headcount: i64,

    /// Vibe preset: chill, pregame or fullsend.
    #[arg(long, default_value = "chill", value_parser = parse_vibe)]
    pub vibe: Vibe,

    /// Percent of guests who will primarily drink beer.
    #[arg(long, default_value_t = DEFAULT_BEER_SHARE, allow_negative_numbers = true)]
    pub beer: f64,

    /// Percent of guests who will primarily drink liquor.
    #[arg(long, default_value_t = DEFAULT_LIQUOR_SHARE, allow_negative_numbers = true)]
    pub liquor: f64,

    /// Percent of guests likely to use za.
    #[arg(long, default_value_t = DEFAULT_WEED_SHARE, allow_negative_numbers = true)]
    pub weed: f64,

    /// Percent of guests likely to use bag.
    #[arg(long, default_value_t = DEFAULT_COKE_SHARE, allow_negative_numbers = true)]
    pub coke: f64,
}

impl Default for EstimateArgs {
    fn default() -> Self {
        let input = EstimationInput::default();
        Self {
            headcount: input.headcount as i64,
            vibe: input.vibe,
            beer: input.beer_share,
            liquor: input.liquor_share,
            weed: input.weed_share,
            coke: input.coke_share,
        }
    }
}

impl EstimateArgs {
    /// Normalized engine input.
    pub fn to_input(&self) -> EstimationInput {
        EstimationInput {
            headcount: clamp_headcount(self.headcount),
            vibe: self.vibe,
            beer_share: self.beer,
            liquor_share: self.liquor,
            weed_share: self.weed,
            coke_share: self.coke,
        }
        .normalized()
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Summary line, table and disclaimer.
    #[default]
    Table,
    /// Full result as JSON.
    Json,
    /// Breakdown rows as CSV.
    Csv,
}

fn parse_vibe(s: &str) -> Result<Vibe, String> {
    s.parse().map_err(|e: crate::error::SupplyError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_subcommand() {
        let cli = Cli::try_parse_from(["party_supply"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Table);

        let Command::Estimate(args) = Command::default() else {
            panic!("default command should be estimate");
        };
        assert_eq!(args.to_input(), EstimationInput::default());
    }

    #[test]
    fn test_estimate_flags() {
        let cli = Cli::try_parse_from([
            "party_supply",
            "estimate",
            "--headcount",
            "-4",
            "--vibe",
            "fullsend",
            "--beer",
            "120",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        let Some(Command::Estimate(args)) = cli.command else {
            panic!("expected estimate");
        };
        let input = args.to_input();
        assert_eq!(input.headcount, 1);
        assert_eq!(input.vibe, Vibe::FullSend);
        assert_eq!(input.beer_share, 100.0);
        assert_eq!(input.liquor_share, 30.0);
    }

    #[test]
    fn test_unknown_vibe_rejected() {
        let err = Cli::try_parse_from(["party_supply", "estimate", "--vibe", "pregam"])
            .unwrap_err()
            .to_string();
        assert!(err.contains("did you mean 'pregame'"));
    }
}
