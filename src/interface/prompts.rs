use dialoguer::{Input, Select};

use crate::error::Result;
use crate::models::{parse_headcount, parse_percent, EstimationInput, Vibe};

/// Which input the user wants to change next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Headcount,
    Vibe,
    BeerShare,
    LiquorShare,
    WeedShare,
    CokeShare,
    Done,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Headcount,
        Field::Vibe,
        Field::BeerShare,
        Field::LiquorShare,
        Field::WeedShare,
        Field::CokeShare,
        Field::Done,
    ];

    /// Menu label showing the field's current value.
    pub fn label(self, input: &EstimationInput) -> String {
        match self {
            Field::Headcount => format!("Headcount ({})", input.headcount),
            Field::Vibe => format!("Vibe ({})", input.vibe.label()),
            Field::BeerShare => format!("Percent who drink beer ({})", input.beer_share),
            Field::LiquorShare => format!("Percent who drink booze ({})", input.liquor_share),
            Field::WeedShare => format!("Percent likely to use za ({})", input.weed_share),
            Field::CokeShare => format!("Percent likely to use bag ({})", input.coke_share),
            Field::Done => "Done".to_string(),
        }
    }
}

/// Ask which field to edit.
pub fn prompt_field(input: &EstimationInput) -> Result<Field> {
    let labels: Vec<String> = Field::ALL.iter().map(|f| f.label(input)).collect();

    let selection = Select::new()
        .with_prompt("Change a setting")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Field::ALL.get(selection).copied().unwrap_or(Field::Done))
}

/// Prompt for headcount. Unparseable or non-positive input becomes 1.
pub fn prompt_headcount(current: u32) -> Result<u32> {
    let text: String = Input::new()
        .with_prompt("Headcount")
        .default(current.to_string())
        .interact_text()?;

    Ok(parse_headcount(&text))
}

/// Prompt for a vibe from the preset list.
pub fn prompt_vibe(current: Vibe) -> Result<Vibe> {
    let labels: Vec<&str> = Vibe::ALL.iter().map(|v| v.label()).collect();
    let default = Vibe::ALL.iter().position(|v| *v == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Vibe")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(Vibe::ALL.get(selection).copied().unwrap_or(current))
}

/// Prompt for a percentage, clamped to [0, 100].
pub fn prompt_share(prompt: &str, current: f64) -> Result<f64> {
    let text: String = Input::new()
        .with_prompt(prompt)
        .default(current.to_string())
        .interact_text()?;

    Ok(parse_percent(&text))
}

/// Apply one edit to `input` and return the updated copy.
pub fn prompt_edit(field: Field, input: &EstimationInput) -> Result<EstimationInput> {
    let mut next = *input;
    match field {
        Field::Headcount => next.headcount = prompt_headcount(input.headcount)?,
        Field::Vibe => next.vibe = prompt_vibe(input.vibe)?,
        Field::BeerShare => {
            next.beer_share = prompt_share(
                "Percent who drink beer (percent of guests who will primarily drink beer)",
                input.beer_share,
            )?
        }
        Field::LiquorShare => {
            next.liquor_share = prompt_share(
                "Percent who drink booze (percent of guests who will primarily drink liquor)",
                input.liquor_share,
            )?
        }
        Field::WeedShare => {
            next.weed_share = prompt_share("Percent likely to use za", input.weed_share)?
        }
        Field::CokeShare => {
            next.coke_share = prompt_share("Percent likely to use bag", input.coke_share)?
        }
        Field::Done => {}
    }
    Ok(next)
}
