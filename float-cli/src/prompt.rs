//! Interactive questions. The icon-font and web-font questions are asked only
//! when their gating feature was ticked.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};

use float_core::{AnswerSet, Feature, IconFont, WebFont};

/// Ask every question, pre-filling defaults from `defaults`.
pub fn ask(defaults: &AnswerSet) -> Result<AnswerSet> {
    let theme = ColorfulTheme::default();

    let site_name: String = Input::with_theme(&theme)
        .with_prompt("Please enter the name of the site")
        .default(defaults.site_name.clone())
        .interact_text()?;

    let include_bourbon = Confirm::with_theme(&theme)
        .with_prompt("SASS is a default, do you want Bourbon?")
        .default(defaults.include_bourbon)
        .interact()?;

    let preselected: Vec<bool> = Feature::all()
        .iter()
        .map(|f| defaults.has_feature(*f))
        .collect();
    let labels: Vec<&str> = Feature::all().iter().map(Feature::label).collect();
    let picked = MultiSelect::with_theme(&theme)
        .with_prompt("Which features would you like to include")
        .items(&labels)
        .defaults(&preselected)
        .interact()?;
    let features: Vec<String> = picked
        .into_iter()
        .map(|i| Feature::all()[i].token().to_string())
        .collect();

    let mut answers = AnswerSet {
        site_name,
        include_bourbon,
        features,
        which_icon_font: None,
        which_web_font: None,
    };

    if answers.needs_icon_font_choice() {
        let default = defaults
            .which_icon_font
            .as_deref()
            .and_then(|s| s.parse::<IconFont>().ok());
        answers.which_icon_font = Some(select_one(
            &theme,
            "Which icon font do you want to include?",
            IconFont::all(),
            IconFont::label,
            IconFont::id,
            default,
        )?);
    }

    if answers.needs_web_font_choice() {
        let default = defaults
            .which_web_font
            .as_deref()
            .and_then(|s| s.parse::<WebFont>().ok());
        answers.which_web_font = Some(select_one(
            &theme,
            "Which web font do you want to include?",
            WebFont::all(),
            WebFont::label,
            WebFont::id,
            default,
        )?);
    }

    Ok(answers)
}

fn select_one<T: Copy + PartialEq>(
    theme: &ColorfulTheme,
    prompt: &str,
    choices: &[T],
    label: fn(&T) -> &'static str,
    id: fn(&T) -> &'static str,
    default: Option<T>,
) -> Result<String> {
    let labels: Vec<&str> = choices.iter().map(label).collect();
    let default_idx = default
        .and_then(|d| choices.iter().position(|c| *c == d))
        .unwrap_or(0);
    let idx = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(default_idx)
        .interact()?;
    Ok(id(&choices[idx]).to_string())
}
